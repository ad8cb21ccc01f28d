//! Segmented "dots" progress indicator.
//!
//! A horizontal track of fixed stops joined by a line. Progress moves one
//! stop at a time with an animated transition: the line fills toward the next
//! stop, then the destination dot grows to full size. This crate computes the
//! geometry for every frame; painting and frame scheduling belong to the host.

pub mod animation;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod progress_bar;
pub mod track;

pub use config::DotsConfig;
pub use error::ConfigError;
pub use progress_bar::{ChangeFlags, DotsProgressBar};

pub mod prelude {
    pub use crate::animation::{Curve, Direction, DrawParams, TickResult};
    pub use crate::frame::{ActiveDot, DrawCommand, Frame};
    pub use crate::geometry::{Color, Rect};
    pub use crate::track::Track;
    pub use crate::{ChangeFlags, ConfigError, DotsConfig, DotsProgressBar};
}
