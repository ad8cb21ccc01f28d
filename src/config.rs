use std::time::Duration;

use crate::error::ConfigError;
use crate::geometry::Color;

/// Configuration for a [`DotsProgressBar`](crate::DotsProgressBar).
///
/// Lengths are in density-independent units and are multiplied by
/// `scale_factor` when the track is laid out.
///
/// # Example
/// ```
/// use dotbar::DotsConfig;
///
/// let config = DotsConfig::default().dot_count(5).speed(30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DotsConfig {
    pub dot_count: usize,
    pub dot_radius: f32,
    /// Half of the connecting line's thickness. Never wider than a dot.
    ///
    /// At the default of 8 the line is as thick as a default dot, so the
    /// dot-growth half of a step is not visible. A 4-unit half-width (an
    /// 8-unit thick line under 16-unit dots) gives the classic look where the
    /// line flows into a growing dot.
    pub line_half_width: f32,
    /// Number of tick units a single step takes
    pub speed: u32,
    pub tick_unit: Duration,
    pub back_color: Color,
    pub front_color: Color,
    pub scale_factor: f32,
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self {
            dot_count: 2,
            dot_radius: 8.0,
            line_half_width: 8.0,
            speed: 40,
            tick_unit: Duration::from_millis(1),
            back_color: Color::NEUTRAL_GRAY,
            front_color: Color::ACCENT_BLUE,
            scale_factor: 1.0,
        }
    }
}

impl DotsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dot_count(mut self, count: usize) -> Self {
        self.dot_count = count;
        self
    }

    pub fn dot_radius(mut self, radius: f32) -> Self {
        self.dot_radius = radius;
        self
    }

    pub fn line_half_width(mut self, half_width: f32) -> Self {
        self.line_half_width = half_width;
        self
    }

    pub fn speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    pub fn tick_unit(mut self, unit: Duration) -> Self {
        self.tick_unit = unit;
        self
    }

    pub fn back_color(mut self, color: Color) -> Self {
        self.back_color = color;
        self
    }

    pub fn front_color(mut self, color: Color) -> Self {
        self.front_color = color;
        self
    }

    pub fn scale_factor(mut self, scale: f32) -> Self {
        self.scale_factor = scale;
        self
    }

    /// Check every field the track geometry and step timing divide by.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dot_count < 2 {
            return Err(ConfigError::TooFewDots {
                count: self.dot_count,
            });
        }
        if i32::try_from(self.dot_count).is_err() {
            return Err(ConfigError::TooManyDots {
                count: self.dot_count,
            });
        }
        if !self.dot_radius.is_finite() || self.dot_radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.dot_radius));
        }
        if !self.line_half_width.is_finite() || self.line_half_width < 0.0 {
            return Err(ConfigError::InvalidLineWidth(self.line_half_width));
        }
        if self.speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        if self.tick_unit.is_zero() {
            return Err(ConfigError::ZeroTickUnit);
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale_factor));
        }
        Ok(())
    }

    /// Line half-width after clamping to the dot radius
    pub fn effective_line_half_width(&self) -> f32 {
        self.line_half_width.min(self.dot_radius)
    }

    /// Total duration of one step: `speed × tick_unit`
    pub fn step_duration(&self) -> Duration {
        self.tick_unit * self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DotsConfig::default();
        assert_eq!(config.dot_count, 2);
        assert_eq!(config.dot_radius, 8.0);
        assert_eq!(config.line_half_width, 8.0);
        assert_eq!(config.speed, 40);
        assert_eq!(config.step_duration(), Duration::from_millis(40));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_too_few_dots() {
        let err = DotsConfig::default().dot_count(1).validate().unwrap_err();
        assert_eq!(err, ConfigError::TooFewDots { count: 1 });
    }

    #[test]
    fn test_too_many_dots() {
        let count = i32::MAX as usize + 1;
        assert_eq!(
            DotsConfig::default().dot_count(count).validate(),
            Err(ConfigError::TooManyDots { count })
        );
        assert!(DotsConfig::default()
            .dot_count(i32::MAX as usize)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_default_line_as_thick_as_dot() {
        let config = DotsConfig::default();
        assert_eq!(config.effective_line_half_width(), config.dot_radius);
        let classic = config.line_half_width(4.0);
        assert!(classic.effective_line_half_width() < classic.dot_radius);
    }

    #[test]
    fn test_invalid_radius() {
        assert_eq!(
            DotsConfig::default().dot_radius(0.0).validate(),
            Err(ConfigError::InvalidRadius(0.0))
        );
        assert!(DotsConfig::default()
            .dot_radius(f32::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_zero_speed_and_tick() {
        assert_eq!(
            DotsConfig::default().speed(0).validate(),
            Err(ConfigError::ZeroSpeed)
        );
        assert_eq!(
            DotsConfig::default().tick_unit(Duration::ZERO).validate(),
            Err(ConfigError::ZeroTickUnit)
        );
    }

    #[test]
    fn test_negative_line_width() {
        assert_eq!(
            DotsConfig::default().line_half_width(-1.0).validate(),
            Err(ConfigError::InvalidLineWidth(-1.0))
        );
    }

    #[test]
    fn test_line_width_clamped_to_radius() {
        let config = DotsConfig::default().dot_radius(6.0).line_half_width(10.0);
        assert_eq!(config.effective_line_half_width(), 6.0);
        let config = DotsConfig::default().dot_radius(8.0).line_half_width(3.0);
        assert_eq!(config.effective_line_half_width(), 3.0);
    }
}
