//! Crate-level error types.

use std::fmt;

/// Invalid configuration rejected when a bar or track is built.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Fewer than two stops; stop spacing divides by `dot_count - 1`.
    TooFewDots { count: usize },
    /// More stops than a signed stop index can address.
    TooManyDots { count: usize },
    /// Dot radius is zero, negative or not finite.
    InvalidRadius(f32),
    /// Line half-width is negative or not finite.
    InvalidLineWidth(f32),
    /// A speed of zero gives a zero-length step.
    ZeroSpeed,
    /// A zero tick unit gives a zero-length step.
    ZeroTickUnit,
    /// Density scale is zero, negative or not finite.
    InvalidScale(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewDots { count } => {
                write!(f, "dot count must be at least 2, got {count}")
            }
            Self::TooManyDots { count } => {
                write!(f, "dot count must be at most {}, got {count}", i32::MAX)
            }
            Self::InvalidRadius(r) => write!(f, "dot radius must be positive, got {r}"),
            Self::InvalidLineWidth(w) => {
                write!(f, "line half-width must be non-negative, got {w}")
            }
            Self::ZeroSpeed => write!(f, "speed must be at least 1 tick"),
            Self::ZeroTickUnit => write!(f, "tick unit must be non-zero"),
            Self::InvalidScale(s) => write!(f, "scale factor must be positive, got {s}"),
        }
    }
}

impl std::error::Error for ConfigError {}
