//! Per-frame geometry of the stop currently animating.
//!
//! A forward step first fills the connecting line, then grows the
//! destination dot from the line's half-width to its full radius. The split
//! between the two phases sits at [`FILL_SPLIT`] of curve progress so the
//! line visibly flows into the dot. A backward step plays the same motion in
//! reverse time.
//!
//! Stepping onto the first stop (or back off it) has no line to fill: the
//! dot grows from nothing over the whole step.

use std::time::Duration;

use super::curve::Curve;
use super::state::{normalized_time, Direction, TransitionState};
use crate::track::Track;

/// Curve progress at which the line is fully filled and the dot starts growing
pub const FILL_SPLIT: f32 = 0.9;

/// Geometry of the active (animating) part of the track
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawParams {
    /// Length of the foreground line measured from the anchor stop
    pub fill_length: f32,
    /// Radius of the dot at the end of the filled line
    pub radius: f32,
}

impl DrawParams {
    /// Truncate to whole units, for surfaces that only take integers
    pub fn rounded(&self) -> DrawParams {
        DrawParams {
            fill_length: self.fill_length.trunc(),
            radius: self.radius.trunc(),
        }
    }
}

/// Parameters for the step `state` is running, or `None` when idle.
pub fn active_params(
    state: &TransitionState,
    track: &Track,
    step_duration: Duration,
    curve: &Curve,
) -> Option<DrawParams> {
    if !state.is_animating() {
        return None;
    }
    Some(draw_params(
        state.direction(),
        state.settled_index(),
        state.target_index(),
        normalized_time(state.elapsed(), step_duration),
        track,
        curve,
    ))
}

/// Parameters at normalized step time `x` for a step from `settled` to
/// `target`. `Idle` yields the resting state, which has no active part.
pub fn draw_params(
    direction: Direction,
    settled: i32,
    target: i32,
    x: f32,
    track: &Track,
    curve: &Curve,
) -> DrawParams {
    let x = x.clamp(0.0, 1.0);
    match direction {
        Direction::Idle => DrawParams::default(),
        Direction::Forward => {
            debug_assert!(
                settled < track.last_index(),
                "forward step from last stop {}",
                settled
            );
            let y = curve.apply(x);
            if settled < 0 {
                grow_first(y, track)
            } else {
                two_phase(y, track)
            }
        }
        Direction::Backward => {
            let y = curve.apply(1.0 - x);
            if target < 0 {
                grow_first(y, track)
            } else {
                two_phase(y, track)
            }
        }
    }
}

/// First stop: no line before it, the dot scales straight from zero
fn grow_first(y: f32, track: &Track) -> DrawParams {
    DrawParams {
        fill_length: 0.0,
        radius: track.dot_radius() * y,
    }
}

fn two_phase(y: f32, track: &Track) -> DrawParams {
    let half = track.line_half_width();
    if y < FILL_SPLIT {
        DrawParams {
            fill_length: track.stop_spacing() * (y / FILL_SPLIT),
            radius: half,
        }
    } else {
        let g = ((y - FILL_SPLIT) / (1.0 - FILL_SPLIT)).min(1.0);
        DrawParams {
            fill_length: track.stop_spacing(),
            radius: half * (1.0 - g) + track.dot_radius() * g,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DotsConfig;

    fn track() -> Track {
        let config = DotsConfig::default()
            .dot_count(3)
            .dot_radius(8.0)
            .line_half_width(4.0);
        Track::new(&config, 216.0).unwrap()
    }

    fn forward(settled: i32, x: f32) -> DrawParams {
        draw_params(
            Direction::Forward,
            settled,
            settled + 1,
            x,
            &track(),
            &Curve::Linear,
        )
    }

    fn backward(settled: i32, x: f32) -> DrawParams {
        draw_params(
            Direction::Backward,
            settled,
            settled - 1,
            x,
            &track(),
            &Curve::Linear,
        )
    }

    #[test]
    fn test_forward_start_matches_rest() {
        let p = forward(0, 0.0);
        assert_eq!(p.fill_length, 0.0);
        assert_eq!(p.radius, 4.0);
    }

    #[test]
    fn test_forward_end_matches_rest() {
        let p = forward(0, 1.0);
        assert_eq!(p.fill_length, 100.0);
        assert_eq!(p.radius, 8.0);
    }

    #[test]
    fn test_phase_boundary() {
        let p = forward(0, FILL_SPLIT);
        assert_eq!(p.fill_length, 100.0);
        assert_eq!(p.radius, 4.0);
    }

    #[test]
    fn test_fill_phase_midpoint() {
        let p = forward(0, 0.45);
        assert!((p.fill_length - 50.0).abs() < 1e-3);
        assert_eq!(p.radius, 4.0);
    }

    #[test]
    fn test_growth_phase_midpoint() {
        let p = forward(0, 0.95);
        assert_eq!(p.fill_length, 100.0);
        assert!((p.radius - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_first_dot_grows_from_zero() {
        let start = forward(-1, 0.0);
        assert_eq!(start, DrawParams::default());
        let mid = forward(-1, 0.5);
        assert_eq!(mid.fill_length, 0.0);
        assert!((mid.radius - 4.0).abs() < 1e-5);
        let end = forward(-1, 1.0);
        assert_eq!(end.radius, 8.0);
    }

    #[test]
    fn test_backward_is_time_reversed() {
        for i in 0..=20 {
            let x = i as f32 / 20.0;
            let b = backward(1, x);
            let f = forward(0, 1.0 - x);
            assert!((b.fill_length - f.fill_length).abs() < 1e-3, "x = {}", x);
            assert!((b.radius - f.radius).abs() < 1e-3, "x = {}", x);
        }
    }

    #[test]
    fn test_backward_endpoints() {
        assert_eq!(backward(1, 0.0), DrawParams { fill_length: 100.0, radius: 8.0 });
        assert_eq!(backward(1, 1.0), DrawParams { fill_length: 0.0, radius: 4.0 });
    }

    #[test]
    fn test_backward_off_first_stop() {
        let start = backward(0, 0.0);
        assert_eq!(start, DrawParams { fill_length: 0.0, radius: 8.0 });
        let end = backward(0, 1.0);
        assert_eq!(end, DrawParams::default());
    }

    #[test]
    fn test_idle_has_no_active_part() {
        let p = draw_params(Direction::Idle, 1, 1, 0.5, &track(), &Curve::Linear);
        assert_eq!(p, DrawParams::default());
    }

    #[test]
    fn test_eased_curve_keeps_endpoints() {
        for curve in [Curve::EaseIn, Curve::EaseOut, Curve::EaseInOut] {
            let t = track();
            let start = draw_params(Direction::Forward, 0, 1, 0.0, &t, &curve);
            let end = draw_params(Direction::Forward, 0, 1, 1.0, &t, &curve);
            assert_eq!(start, DrawParams { fill_length: 0.0, radius: 4.0 });
            assert_eq!(end, DrawParams { fill_length: 100.0, radius: 8.0 });
        }
    }

    #[test]
    fn test_active_params_idle_is_none() {
        let state = TransitionState::new();
        let p = active_params(&state, &track(), Duration::from_millis(40), &Curve::Linear);
        assert!(p.is_none());
    }

    #[test]
    fn test_rounded_truncates() {
        let p = DrawParams {
            fill_length: 49.9,
            radius: 4.7,
        };
        assert_eq!(p.rounded(), DrawParams { fill_length: 49.0, radius: 4.0 });
    }
}
