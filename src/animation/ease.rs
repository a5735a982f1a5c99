//! Named parametric easing curves (the Penner family).
//!
//! Each curve is a pure, stateless map from normalized progress `x` to eased
//! progress `y`. Inputs are *not* clamped: callers are expected to normalize
//! upstream, and out-of-range inputs extrapolate. Back and elastic curves
//! legitimately overshoot `[0, 1]` even for in-range inputs.

use std::f64::consts::PI;

/// A named easing curve.
///
/// Every `In`/`Out` variant satisfies `f(0) = 0` and `f(1) = 1`; the
/// exponential and elastic families special-case the endpoints to avoid
/// computing `2^-large` inaccurately. [`Ease::Linear`] is the identity and
/// the default wherever a descriptor leaves the curve unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity curve.
    #[default]
    Linear,
    /// Sinusoidal ease-in.
    InSine,
    /// Sinusoidal ease-out.
    OutSine,
    /// Sinusoidal ease-in-out.
    InOutSine,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in-out.
    InOutQuart,
    /// Quintic ease-in.
    InQuint,
    /// Quintic ease-out.
    OutQuint,
    /// Quintic ease-in-out.
    InOutQuint,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in-out.
    InOutExpo,
    /// Circular ease-in.
    InCirc,
    /// Circular ease-out.
    OutCirc,
    /// Circular ease-in-out.
    InOutCirc,
    /// Overshooting ease-in.
    InBack,
    /// Overshooting ease-out.
    OutBack,
    /// Overshooting ease-in-out.
    InOutBack,
    /// Elastic (damped spring) ease-in.
    InElastic,
    /// Elastic (damped spring) ease-out.
    OutElastic,
    /// Elastic (damped spring) ease-in-out.
    InOutElastic,
    /// Bouncing ease-in.
    InBounce,
    /// Bouncing ease-out.
    OutBounce,
    /// Bouncing ease-in-out.
    InOutBounce,
}

// Back overshoot constants.
const C1: f64 = 1.70158;
const C2: f64 = C1 * 1.525;
const C3: f64 = C1 + 1.0;

impl Ease {
    /// Sample the curve at normalized progress `x`.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Linear => x,

            Self::InSine => 1.0 - ((x * PI) / 2.0).cos(),
            Self::OutSine => ((x * PI) / 2.0).sin(),
            Self::InOutSine => -((PI * x).cos() - 1.0) / 2.0,

            Self::InQuad => x * x,
            Self::OutQuad => 1.0 - (1.0 - x) * (1.0 - x),
            Self::InOutQuad => {
                if x < 0.5 {
                    2.0 * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
                }
            }

            Self::InCubic => x * x * x,
            Self::OutCubic => 1.0 - (1.0 - x).powi(3),
            Self::InOutCubic => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }

            Self::InQuart => x * x * x * x,
            Self::OutQuart => 1.0 - (1.0 - x).powi(4),
            Self::InOutQuart => {
                if x < 0.5 {
                    8.0 * x * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(4) / 2.0
                }
            }

            Self::InQuint => x * x * x * x * x,
            Self::OutQuint => 1.0 - (1.0 - x).powi(5),
            Self::InOutQuint => {
                if x < 0.5 {
                    16.0 * x * x * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(5) / 2.0
                }
            }

            Self::InExpo => {
                if x == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * x - 10.0)
                }
            }
            Self::OutExpo => {
                if x == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * x)
                }
            }
            Self::InOutExpo => {
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else if x < 0.5 {
                    2f64.powf(20.0 * x - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * x + 10.0)) / 2.0
                }
            }

            Self::InCirc => 1.0 - (1.0 - x * x).sqrt(),
            Self::OutCirc => (1.0 - (x - 1.0) * (x - 1.0)).sqrt(),
            Self::InOutCirc => {
                if x < 0.5 {
                    (1.0 - (1.0 - (2.0 * x).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * x + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }

            Self::InBack => C3 * x * x * x - C1 * x * x,
            Self::OutBack => 1.0 + C3 * (x - 1.0).powi(3) + C1 * (x - 1.0).powi(2),
            Self::InOutBack => {
                if x < 0.5 {
                    ((2.0 * x).powi(2) * ((C2 + 1.0) * 2.0 * x - C2)) / 2.0
                } else {
                    ((2.0 * x - 2.0).powi(2) * ((C2 + 1.0) * (x * 2.0 - 2.0) + C2) + 2.0) / 2.0
                }
            }

            Self::InElastic => {
                let c4 = (2.0 * PI) / 3.0;
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else {
                    2f64.powf(10.0 * x - 10.0) * ((x * 10.0 - 10.75) * c4).sin()
                }
            }
            Self::OutElastic => {
                let c4 = (2.0 * PI) / 3.0;
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else {
                    2f64.powf(-10.0 * x) * ((x * 10.0 - 0.75) * c4).sin() + 1.0
                }
            }
            Self::InOutElastic => {
                let c5 = (2.0 * PI) / 4.5;
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else if x < 0.5 {
                    -(2f64.powf(20.0 * x - 10.0) * ((20.0 * x - 11.125) * c5).sin()) / 2.0
                } else {
                    (2f64.powf(-20.0 * x + 10.0) * ((20.0 * x - 11.125) * c5).sin()) / 2.0 + 1.0
                }
            }

            Self::InBounce => 1.0 - bounce_out(1.0 - x),
            Self::OutBounce => bounce_out(x),
            Self::InOutBounce => {
                if x < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * x)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * x - 1.0)) / 2.0
                }
            }
        }
    }
}

/// Piecewise-polynomial bounce. The breakpoints (`1/2.75`, `2/2.75`,
/// `2.5/2.75`) and coefficients (`7.5625`; `0.75`, `0.9375`, `0.984375`) are
/// the externally recognized reference constants and must not drift.
fn bounce_out(mut x: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if x < 1.0 / D1 {
        N1 * x * x
    } else if x < 2.0 / D1 {
        x -= 1.5 / D1;
        N1 * x * x + 0.75
    } else if x < 2.5 / D1 {
        x -= 2.25 / D1;
        N1 * x * x + 0.9375
    } else {
        x -= 2.625 / D1;
        N1 * x * x + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
