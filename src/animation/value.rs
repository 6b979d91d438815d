use crate::foundation::core::Rgba;

/// Interpolation contract for animation value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t`.
    ///
    /// `t` may leave `[0, 1]` for overshooting curves.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Rgba {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: (a.a + (b.a - a.a) * t).clamp(0.0, 1.0),
        }
    }
}

/// Animatable style property of an element.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Uniform scale factor.
    Scale,
    /// Horizontal offset in pixels.
    X,
    /// Vertical offset in pixels.
    Y,
    /// Rotation in degrees.
    Rotation,
    /// Blur filter radius in pixels.
    Blur,
    /// Glow (box-shadow) blur radius in pixels.
    GlowRadius,
    /// Glow (box-shadow) color.
    GlowColor,
}

impl Property {
    /// Whether this property carries a [`Value::Color`].
    pub fn is_color(self) -> bool {
        matches!(self, Self::GlowColor)
    }
}

/// A property value: scalar or color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric value.
    Scalar(f64),
    /// Color value.
    Color(Rgba),
}

impl Value {
    /// Scalar payload, if any.
    pub fn as_scalar(self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(v),
            Self::Color(_) => None,
        }
    }

    /// Color payload, if any.
    pub fn as_color(self) -> Option<Rgba> {
        match self {
            Self::Color(c) => Some(c),
            Self::Scalar(_) => None,
        }
    }

    /// Whether both values are the same kind.
    pub fn same_kind(self, other: Value) -> bool {
        matches!(
            (self, other),
            (Self::Scalar(_), Self::Scalar(_)) | (Self::Color(_), Self::Color(_))
        )
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Rgba> for Value {
    fn from(c: Rgba) -> Self {
        Self::Color(c)
    }
}

impl Lerp for Value {
    /// Mixed kinds hold `a` until the end of the interpolation.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Scalar(x), Self::Scalar(y)) => Self::Scalar(f64::lerp(x, y, t)),
            (Self::Color(x), Self::Color(y)) => Self::Color(Rgba::lerp(x, y, t)),
            _ => {
                if t >= 1.0 {
                    *b
                } else {
                    *a
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
