//! Easing curves for timed transitions (the section spin).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in-out (slow at both ends).
    QuadraticInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::QuadraticInOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_input_clamping() {
        let in_out = EasingFunction::QuadraticInOut;
        assert_eq!(in_out.evaluate(-0.5), 0.0);
        assert_eq!(in_out.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75); // 1 - (1-0.5)² = 0.75
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_in_out_is_symmetric() {
        let in_out = EasingFunction::QuadraticInOut;
        assert_eq!(in_out.evaluate(0.5), 0.5);
        assert_eq!(in_out.evaluate(0.25), 0.125);
        assert!((in_out.evaluate(0.75) - 0.875).abs() < 1e-6);
        assert_eq!(in_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quadratic_in_out_is_monotonic() {
        let in_out = EasingFunction::QuadraticInOut;
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = in_out.evaluate(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
