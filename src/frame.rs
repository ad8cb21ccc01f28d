//! Per-frame snapshot handed to the renderer.

use crate::animation::DrawParams;
use crate::geometry::{Color, Rect};
use crate::track::Track;

/// A single draw operation in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle (line segments)
    Rect { rect: Rect, color: Color },
    /// Filled circle (dots)
    Circle {
        center: (f32, f32),
        radius: f32,
        color: Color,
    },
}

impl DrawCommand {
    pub fn rect(rect: Rect, color: Color) -> Self {
        Self::Rect { rect, color }
    }

    pub fn circle(center: (f32, f32), radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            color,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Rect { color, .. } | Self::Circle { color, .. } => *color,
        }
    }
}

/// The animating part of the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDot {
    /// Stop the fill grows from (-1 for the first-dot case, drawn at stop 0)
    pub anchor: i32,
    /// Center of the active circle
    pub center: (f32, f32),
    pub params: DrawParams,
}

/// Everything a renderer needs to paint one frame. Holds no animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub track: Track,
    /// Color of stops not yet reached
    pub back_color: Color,
    /// Color of stops already passed
    pub front_color: Color,
    /// Stops `0..=static_index` are painted fully in the front color
    pub static_index: i32,
    pub active: Option<ActiveDot>,
}

impl Frame {
    pub fn new(
        track: Track,
        back_color: Color,
        front_color: Color,
        static_index: i32,
        params: Option<DrawParams>,
    ) -> Self {
        let active = params.map(|params| {
            let (x, y) = track.stop_center(static_index);
            ActiveDot {
                anchor: static_index,
                center: (x + params.fill_length, y),
                params,
            }
        });
        Self {
            track,
            back_color,
            front_color,
            static_index,
            active,
        }
    }

    /// Resting circles as `(center, radius, color)`, one per stop
    pub fn resting_dots(&self) -> impl Iterator<Item = ((f32, f32), f32, Color)> + '_ {
        (0..self.track.dot_count() as i32).map(move |i| {
            let color = if i <= self.static_index {
                self.front_color
            } else {
                self.back_color
            };
            (self.track.stop_center(i), self.track.dot_radius(), color)
        })
    }

    /// Draw list in paint order: background, passed stops, then the
    /// active segment and dot on top.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let track = &self.track;
        let mut commands = Vec::with_capacity(track.dot_count() * 2 + 4);

        commands.push(DrawCommand::rect(track.full_line(), self.back_color));
        for i in 0..track.dot_count() as i32 {
            commands.push(DrawCommand::circle(
                track.stop_center(i),
                track.dot_radius(),
                self.back_color,
            ));
        }

        if self.static_index >= 0 {
            if self.static_index > 0 {
                let start = track.stop_x(0);
                let length = track.stop_x(self.static_index) - start;
                commands.push(DrawCommand::rect(
                    track.line_rect(start, length),
                    self.front_color,
                ));
            }
            for i in 0..=self.static_index {
                commands.push(DrawCommand::circle(
                    track.stop_center(i),
                    track.dot_radius(),
                    self.front_color,
                ));
            }
        }

        if let Some(active) = &self.active {
            let start = track.stop_x(active.anchor);
            if active.params.fill_length > 0.0 {
                commands.push(DrawCommand::rect(
                    track.line_rect(start, active.params.fill_length),
                    self.front_color,
                ));
            }
            if active.params.radius > 0.0 {
                commands.push(DrawCommand::circle(
                    active.center,
                    active.params.radius,
                    self.front_color,
                ));
            }
        }

        commands
    }
}
