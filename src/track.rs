//! Resting geometry of the dot track.

use crate::config::DotsConfig;
use crate::error::ConfigError;
use crate::geometry::Rect;

/// Immutable layout of the stops for a given width.
///
/// All values are in physical units (config lengths multiplied by the scale
/// factor). Rebuilt only when the host resizes the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    dot_count: usize,
    dot_radius: f32,
    line_half_width: f32,
    stop_spacing: f32,
    width: f32,
}

impl Track {
    /// Lay out `config` across `width` physical units.
    pub fn new(config: &DotsConfig, width: f32) -> Result<Self, ConfigError> {
        config.validate()?;
        let scale = config.scale_factor;
        Ok(Self::from_parts(
            config.dot_count,
            config.dot_radius * scale,
            config.effective_line_half_width() * scale,
            width,
        ))
    }

    fn from_parts(dot_count: usize, dot_radius: f32, line_half_width: f32, width: f32) -> Self {
        let gaps = (dot_count - 1) as f32;
        let stop_spacing = ((width - dot_radius * 2.0) / gaps).max(0.0);
        Self {
            dot_count,
            dot_radius,
            line_half_width,
            stop_spacing,
            width: width.max(0.0),
        }
    }

    /// Same track laid out across a new width
    pub fn resized(&self, width: f32) -> Self {
        Self::from_parts(self.dot_count, self.dot_radius, self.line_half_width, width)
    }

    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    pub fn dot_radius(&self) -> f32 {
        self.dot_radius
    }

    pub fn line_half_width(&self) -> f32 {
        self.line_half_width
    }

    pub fn stop_spacing(&self) -> f32 {
        self.stop_spacing
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// The track is exactly one dot tall
    pub fn height(&self) -> f32 {
        self.dot_radius * 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.dot_radius
    }

    /// Horizontal center of stop `index`. Index -1 ("before the first
    /// stop") maps onto stop 0, which is where the first dot grows from.
    pub fn stop_x(&self, index: i32) -> f32 {
        self.dot_radius + self.stop_spacing * index.max(0) as f32
    }

    pub fn stop_center(&self, index: i32) -> (f32, f32) {
        (self.stop_x(index), self.center_y())
    }

    /// Line segment from the center of `from` to `from_x + length`
    pub fn line_rect(&self, from_x: f32, length: f32) -> Rect {
        let cy = self.center_y();
        Rect::from_edges(
            from_x,
            cy - self.line_half_width,
            from_x + length,
            cy + self.line_half_width,
        )
    }

    /// Background line spanning every stop
    pub fn full_line(&self) -> Rect {
        let first = self.stop_x(0);
        let last = self.stop_x(self.last_index());
        self.line_rect(first, last - first)
    }

    pub fn last_index(&self) -> i32 {
        self.dot_count as i32 - 1
    }
}
