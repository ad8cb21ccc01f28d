//! Easing curves for step transitions.
//!
//! A curve maps normalized time in `[0, 1]` to normalized progress in
//! `[0, 1]`. The transition engine assumes curves are monotonic; the built-in
//! curves are, and [`Curve::CubicBezier`] is as long as its control points
//! stay inside the unit square.
//!
//! ```
//! use dotbar::animation::Curve;
//!
//! let curve = Curve::EaseOut;
//! assert!(curve.apply(0.5) > 0.5);
//! assert_eq!(curve.apply(1.0), 1.0);
//! ```

use std::sync::Arc;

/// Progress curve applied to normalized step time
#[derive(Clone, Default)]
pub enum Curve {
    /// Constant speed
    #[default]
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Slow at both ends
    EaseInOut,
    /// CSS cubic-bezier (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// User-supplied mapping
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl Curve {
    /// Evaluate the curve at `t`. Input and output are both clamped to `[0, 1]`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        // Exact endpoints so resting states never drift.
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }
        let y = match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => t * (2.0 - t),
            Curve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Curve::CubicBezier(x1, y1, x2, y2) => bezier_at(t, *x1, *y1, *x2, *y2),
            Curve::Custom(f) => f(t),
        };
        y.clamp(0.0, 1.0)
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        Curve::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Curve::Linear => write!(f, "Linear"),
            Curve::EaseIn => write!(f, "EaseIn"),
            Curve::EaseOut => write!(f, "EaseOut"),
            Curve::EaseInOut => write!(f, "EaseInOut"),
            Curve::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            Curve::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// One coordinate of a cubic bezier with endpoints fixed at 0 and 1
fn bezier_axis(s: f32, p1: f32, p2: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

fn bezier_axis_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solve x(s) = t for the curve parameter, then return y(s).
///
/// Newton steps first; falls back to bisection when the slope flattens out.
fn bezier_at(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let mut s = t;
    for _ in 0..8 {
        let err = bezier_axis(s, x1, x2) - t;
        if err.abs() < 1e-6 {
            return bezier_axis(s, y1, y2);
        }
        let slope = bezier_axis_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = bezier_axis(s, x1, x2);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier_axis(s, y1, y2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_builtin() -> Vec<Curve> {
        vec![
            Curve::Linear,
            Curve::EaseIn,
            Curve::EaseOut,
            Curve::EaseInOut,
            Curve::CubicBezier(0.25, 0.1, 0.25, 1.0),
        ]
    }

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(Curve::Linear.apply(0.25), 0.25);
        assert_eq!(Curve::Linear.apply(0.9), 0.9);
    }

    #[test]
    fn test_endpoints_exact() {
        for curve in all_builtin() {
            assert_eq!(curve.apply(0.0), 0.0, "{:?}", curve);
            assert_eq!(curve.apply(1.0), 1.0, "{:?}", curve);
        }
    }

    #[test]
    fn test_input_clamped() {
        assert_eq!(Curve::Linear.apply(-0.5), 0.0);
        assert_eq!(Curve::EaseIn.apply(3.0), 1.0);
    }

    #[test]
    fn test_monotonic() {
        for curve in all_builtin() {
            let mut prev = 0.0;
            for i in 0..=200 {
                let y = curve.apply(i as f32 / 200.0);
                assert!(y + 1e-5 >= prev, "{:?} decreased at step {}", curve, i);
                prev = y;
            }
        }
    }

    #[test]
    fn test_ease_shapes() {
        assert!(Curve::EaseIn.apply(0.5) < 0.5);
        assert!(Curve::EaseOut.apply(0.5) > 0.5);
        assert!((Curve::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bezier_linear_controls() {
        let curve = Curve::CubicBezier(0.0, 0.0, 1.0, 1.0);
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!((curve.apply(t) - t).abs() < 1e-3, "t = {}", t);
        }
    }

    #[test]
    fn test_custom_output_clamped() {
        let overshoot = Curve::custom(|t| t * 1.5);
        assert_eq!(overshoot.apply(0.9), 1.0);
        assert_eq!(format!("{:?}", overshoot), "Custom");
    }
}
