use std::time::Duration;

use bitflags::bitflags;

use crate::animation::{active_params, Curve, Direction, TickResult, TransitionState};
use crate::config::DotsConfig;
use crate::error::ConfigError;
use crate::frame::Frame;
use crate::geometry::Color;
use crate::track::Track;

bitflags! {
    /// What the host has to redo before the next frame
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Track geometry changed (size/positions)
        const NEEDS_LAYOUT = 0b01;
        /// Visual appearance changed
        const NEEDS_PAINT  = 0b10;
    }
}

/// A segmented progress bar that steps between fixed stops.
///
/// Owns its configuration, track geometry and the single in-flight
/// transition. The host drives it from its frame callback:
///
/// ```
/// use std::time::Duration;
/// use dotbar::{DotsConfig, DotsProgressBar};
///
/// let mut bar = DotsProgressBar::new(DotsConfig::default().dot_count(3), 216.0).unwrap();
/// bar.advance();
/// while bar.tick(Duration::from_millis(1)).needs_frame() {
///     let _commands = bar.frame().draw_commands();
/// }
/// assert_eq!(bar.settled_index(), 0);
/// ```
pub struct DotsProgressBar {
    config: DotsConfig,
    track: Track,
    state: TransitionState,
    curve: Curve,
    step_duration: Duration,
    changes: ChangeFlags,
}

impl DotsProgressBar {
    /// Build a bar laid out across `width` physical units.
    pub fn new(config: DotsConfig, width: f32) -> Result<Self, ConfigError> {
        let track = Track::new(&config, width)?;
        let step_duration = config.step_duration();
        log::debug!(
            "dots progress bar: {} stops, spacing {}, step {:?}",
            track.dot_count(),
            track.stop_spacing(),
            step_duration
        );
        Ok(Self {
            config,
            track,
            state: TransitionState::new(),
            curve: Curve::default(),
            step_duration,
            changes: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
        })
    }

    /// Step toward the next stop. Ignored at the last stop.
    pub fn advance(&mut self) -> bool {
        let started = self.state.advance(self.track.dot_count());
        if started {
            self.changes |= ChangeFlags::NEEDS_PAINT;
        }
        started
    }

    /// Step toward the previous stop. Ignored before the first stop.
    pub fn retreat(&mut self) -> bool {
        let started = self.state.retreat();
        if started {
            self.changes |= ChangeFlags::NEEDS_PAINT;
        }
        started
    }

    /// Replace the easing curve. Takes effect from the next frame, including
    /// for a step already in flight.
    pub fn set_curve(&mut self, curve: Curve) {
        self.curve = curve;
        if self.state.is_animating() {
            self.changes |= ChangeFlags::NEEDS_PAINT;
        }
    }

    pub fn set_colors(&mut self, back: Color, front: Color) {
        self.config.back_color = back;
        self.config.front_color = front;
        self.changes |= ChangeFlags::NEEDS_PAINT;
    }

    /// Lay the track out across a new width. A running step keeps its progress.
    pub fn resize(&mut self, width: f32) {
        if width == self.track.width() {
            return;
        }
        self.track = self.track.resized(width);
        log::info!(
            "dots progress bar resized to {}, spacing {}",
            width,
            self.track.stop_spacing()
        );
        self.changes |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    /// Advance the running step by `delta`.
    pub fn tick(&mut self, delta: Duration) -> TickResult {
        let result = self.state.tick(delta, self.step_duration);
        if result.is_changed() {
            self.changes |= ChangeFlags::NEEDS_PAINT;
        }
        result
    }

    /// Snapshot of the current geometry for the renderer
    pub fn frame(&self) -> Frame {
        Frame::new(
            self.track,
            self.config.back_color,
            self.config.front_color,
            self.state.static_index(),
            active_params(&self.state, &self.track, self.step_duration, &self.curve),
        )
    }

    /// Return and clear pending invalidation
    pub fn take_changes(&mut self) -> ChangeFlags {
        std::mem::replace(&mut self.changes, ChangeFlags::empty())
    }

    pub fn settled_index(&self) -> i32 {
        self.state.settled_index()
    }

    pub fn target_index(&self) -> i32 {
        self.state.target_index()
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn step_duration(&self) -> Duration {
        self.step_duration
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn config(&self) -> &DotsConfig {
        &self.config
    }

    pub fn track(&self) -> &Track {
        &self.track
    }
}
