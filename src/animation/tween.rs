use crate::animation::ease::Ease;
use crate::animation::value::{Lerp, Property, Value};
use crate::foundation::core::{ElementId, check_secs};
use crate::foundation::error::{FxError, FxResult};

/// Slack used when comparing accumulated frame time against scheduled boundaries.
pub(crate) const TIME_EPSILON: f64 = 1e-9;

/// How many extra cycles a tween plays after the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    /// Play `1 + n` cycles.
    Count(u32),
    /// Loop until cancelled.
    Infinite,
}

impl Default for Repeat {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Description of one single-property interpolation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TweenSpec {
    /// Element written by the tween.
    pub target: ElementId,
    /// Property written by the tween.
    pub property: Property,
    /// Start value; `None` reads the property when the tween first applies.
    pub from: Option<Value>,
    /// End value.
    pub to: Value,
    /// Seconds per cycle.
    pub duration: f64,
    /// Easing curve applied to each cycle.
    pub ease: Ease,
    /// Seconds before the first application.
    pub delay: f64,
    /// Extra cycles.
    pub repeat: Repeat,
    /// Alternate forward/backward on each repeat.
    pub yoyo: bool,
}

impl TweenSpec {
    /// Tween `property` from its current value to `to`.
    pub fn to(target: ElementId, property: Property, to: impl Into<Value>, duration: f64) -> Self {
        Self {
            target,
            property,
            from: None,
            to: to.into(),
            duration,
            ease: Ease::Linear,
            delay: 0.0,
            repeat: Repeat::Count(0),
            yoyo: false,
        }
    }

    /// Tween `property` between two explicit values.
    pub fn from_to(
        target: ElementId,
        property: Property,
        from: impl Into<Value>,
        to: impl Into<Value>,
        duration: f64,
    ) -> Self {
        Self {
            from: Some(from.into()),
            ..Self::to(target, property, to, duration)
        }
    }

    /// Zero-duration tween that writes `value` once.
    pub fn set(target: ElementId, property: Property, value: impl Into<Value>) -> Self {
        Self::to(target, property, value, 0.0)
    }

    /// Replace the easing curve.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Replace the start delay.
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the repeat mode.
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Enable or disable yoyo playback.
    pub fn with_yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Whether the tween loops forever.
    pub fn is_infinite(&self) -> bool {
        self.repeat == Repeat::Infinite
    }

    /// Number of cycles, `None` for infinite tweens.
    pub fn cycles(&self) -> Option<u64> {
        match self.repeat {
            Repeat::Count(n) => Some(u64::from(n) + 1),
            Repeat::Infinite => None,
        }
    }

    /// Seconds from first application to completion, excluding `delay`.
    pub fn span(&self) -> Option<f64> {
        self.cycles().map(|c| self.duration * c as f64)
    }

    /// Check timing and value-kind invariants.
    pub fn validate(&self) -> FxResult<()> {
        check_secs("tween duration", self.duration)?;
        check_secs("tween delay", self.delay)?;
        if self.is_infinite() && self.duration == 0.0 {
            return Err(FxError::validation(
                "infinite-repeat tween must have a positive duration",
            ));
        }
        let kind_ok = |v: Value| v.as_color().is_some() == self.property.is_color();
        if !kind_ok(self.to) || !self.from.is_none_or(kind_ok) {
            return Err(FxError::validation(format!(
                "value kind does not match property {:?}",
                self.property
            )));
        }
        Ok(())
    }
}

/// Lifecycle of a scheduled tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TweenState {
    /// Waiting for its start time.
    Pending,
    /// Applied at least once.
    Playing,
    /// Reached its final frame.
    Completed,
}

/// Running instance of a [`TweenSpec`].
#[derive(Clone, Debug)]
pub(crate) struct Tween {
    pub(crate) spec: TweenSpec,
    /// Scheduler clock time of the first application.
    pub(crate) start_at: f64,
    pub(crate) from: Option<Value>,
    pub(crate) state: TweenState,
}

impl Tween {
    pub(crate) fn new(spec: TweenSpec, now: f64) -> Self {
        Self {
            start_at: now + spec.delay,
            from: spec.from,
            spec,
            state: TweenState::Pending,
        }
    }

    /// Value at `local` seconds after `start_at`, and whether that is the final frame.
    pub(crate) fn sample(&self, local: f64) -> (Value, bool) {
        let spec = &self.spec;
        let from = self.from.unwrap_or(spec.to);

        if let Some(span) = spec.span()
            && local >= span - TIME_EPSILON
        {
            let ends_reversed = spec.yoyo && spec.cycles().is_some_and(|c| c % 2 == 0);
            let last = if ends_reversed { from } else { spec.to };
            return (last, true);
        }

        let local = local.max(0.0);
        let cycle = (local / spec.duration).floor();
        let t = (local - cycle * spec.duration) / spec.duration;
        let reversed = spec.yoyo && (cycle as u64) % 2 == 1;
        let progress = if reversed {
            spec.ease.apply(1.0 - t)
        } else {
            spec.ease.apply(t)
        };
        (Value::lerp(&from, &spec.to, progress), false)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
