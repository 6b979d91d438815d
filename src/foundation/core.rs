use crate::foundation::error::{FxError, FxResult};

pub use kurbo::Vec2;

/// Handle to an element on a [`Stage`](crate::Stage).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u64);

/// Handle to a tween or timer registered with a [`Scheduler`](crate::Scheduler).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TweenId(pub u64);

/// Handle to a started timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimelineId(pub u64);

/// Handle to one orchestrator effect invocation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EffectId(pub u64);

/// Straight-alpha RGBA color, alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);

    /// Build a color; alpha is not clamped here, see [`Rgba::with_alpha`].
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a replaced (clamped) alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` notation.
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// Validate a time value in seconds: finite and `>= 0`.
pub(crate) fn check_secs(what: &str, secs: f64) -> FxResult<f64> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(FxError::validation(format!(
            "{what} must be a finite, non-negative number of seconds (got {secs})"
        )));
    }
    Ok(secs)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
