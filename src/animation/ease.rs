use std::f64::consts::{PI, TAU};
use std::str::FromStr;

use crate::foundation::error::FxError;

/// Easing functions used to map normalized animation progress.
///
/// Power curves follow the usual motion-graphics naming: `power1` is quadratic, `power2`
/// cubic, `power3` quartic, `power4` quintic.
///
/// Deserializes from either the serialized variant form or a curve name accepted by
/// [`FromStr`], so configuration files may write `"ease": "back.out(1.5)"`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "EaseRepr")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in (`power1.in`).
    InQuad,
    /// Quadratic ease-out (`power1.out`).
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in (`power2.in`).
    InCubic,
    /// Cubic ease-out (`power2.out`).
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-out (`power3.out`).
    OutQuart,
    /// Quintic ease-in (`power4.in`).
    InQuint,
    /// Quintic ease-out (`power4.out`), a strong deceleration.
    OutQuint,
    /// Sine ease-in.
    InSine,
    /// Sine ease-out.
    OutSine,
    /// Sine ease-in/out.
    InOutSine,
    /// Ease-out that overshoots the target and comes back.
    OutBack {
        /// Overshoot strength; 1.7 is the common default.
        overshoot: f64,
    },
    /// Damped spring oscillation around the target.
    OutElastic {
        /// Peak amplitude, values below 1 are treated as 1.
        amplitude: f64,
        /// Oscillation period in normalized time.
        period: f64,
    },
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    ///
    /// Endpoints are exact: `apply(0) == 0` and `apply(1) == 1` for every curve.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::InSine => 1.0 - (t * PI / 2.0).cos(),
            Self::OutSine => (t * PI / 2.0).sin(),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::OutBack { overshoot } => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
            Self::OutElastic { amplitude, period } => {
                let amp = amplitude.max(1.0);
                let period = if period > 0.0 { period } else { 0.3 };
                let shift = period / TAU * (1.0 / amp).asin();
                amp * 2f64.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
            }
        }
    }
}

impl FromStr for Ease {
    type Err = FxError;

    /// Parse motion-graphics style names such as `power4.out`, `sine.inOut`,
    /// `back.out(1.5)` or `elastic.out(1.2, 0.5)`. Unit variant names such as `OutQuint` are
    /// accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, args) = match s.split_once('(') {
            Some((name, rest)) => {
                let inner = rest
                    .strip_suffix(')')
                    .ok_or_else(|| FxError::validation(format!("unbalanced ease '{s}'")))?;
                let args = inner
                    .split(',')
                    .map(|a| {
                        a.trim()
                            .parse::<f64>()
                            .map_err(|_| FxError::validation(format!("bad ease argument in '{s}'")))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                (name.trim(), args)
            }
            None => (s, Vec::new()),
        };
        let arg = |i: usize, default: f64| args.get(i).copied().unwrap_or(default);

        let ease = match name {
            "none" | "linear" | "Linear" => Self::Linear,
            "power1.in" | "InQuad" => Self::InQuad,
            "power1.out" | "OutQuad" => Self::OutQuad,
            "power1.inOut" | "InOutQuad" => Self::InOutQuad,
            "power2.in" | "InCubic" => Self::InCubic,
            "power2.out" | "OutCubic" => Self::OutCubic,
            "power2.inOut" | "InOutCubic" => Self::InOutCubic,
            "power3.out" | "OutQuart" => Self::OutQuart,
            "power4.in" | "InQuint" => Self::InQuint,
            "power4.out" | "OutQuint" => Self::OutQuint,
            "sine.in" | "InSine" => Self::InSine,
            "sine.out" | "OutSine" => Self::OutSine,
            "sine.inOut" | "InOutSine" => Self::InOutSine,
            "back.out" => Self::OutBack {
                overshoot: arg(0, 1.7),
            },
            "elastic.out" => Self::OutElastic {
                amplitude: arg(0, 1.0),
                period: arg(1, 0.3),
            },
            _ => return Err(FxError::validation(format!("unknown ease '{s}'"))),
        };
        Ok(ease)
    }
}

/// Wire shapes an [`Ease`] is read from.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum EaseRepr {
    Name(String),
    Shaped(Shaped),
}

#[derive(serde::Deserialize)]
enum Shaped {
    OutBack { overshoot: f64 },
    OutElastic { amplitude: f64, period: f64 },
}

impl TryFrom<EaseRepr> for Ease {
    type Error = FxError;

    fn try_from(repr: EaseRepr) -> Result<Self, Self::Error> {
        match repr {
            EaseRepr::Name(name) => name.parse(),
            EaseRepr::Shaped(Shaped::OutBack { overshoot }) => Ok(Self::OutBack { overshoot }),
            EaseRepr::Shaped(Shaped::OutElastic { amplitude, period }) => {
                Ok(Self::OutElastic { amplitude, period })
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
