use crate::animation::scheduler::{Callback, Scheduler, TweenOptions};
use crate::animation::tween::TweenSpec;
use crate::foundation::core::{TimelineId, check_secs};
use crate::foundation::error::{FxError, FxResult};

/// Where a timeline entry starts.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Position {
    /// Absolute seconds from timeline start.
    At(f64),
    /// Signed offset from the end of the most recently added entry; `-0.1` overlaps it by
    /// 0.1 s.
    AfterPrevious(f64),
    /// Signed offset from the start of the most recently added entry.
    WithPrevious(f64),
}

#[derive(Debug)]
struct TimelineEntry {
    spec: TweenSpec,
    start: f64,
}

enum TimelineState {
    Building,
    Started { id: TimelineId, started_at: f64 },
}

/// Ordered set of tweens with computed start offsets, scheduled as one unit.
///
/// Entries are only finite tweens; looping tweens never complete and belong on the scheduler
/// directly.
pub struct Timeline {
    delay: f64,
    entries: Vec<TimelineEntry>,
    state: TimelineState,
    on_complete: Option<Callback>,
}

impl std::fmt::Debug for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timeline")
            .field("delay", &self.delay)
            .field("entries", &self.entries)
            .field("started", &self.id())
            .finish()
    }
}

impl Timeline {
    /// Empty timeline that starts `delay` seconds after [`Timeline::start`].
    pub fn new(delay: f64) -> FxResult<Self> {
        Ok(Self {
            delay: check_secs("timeline delay", delay)?,
            entries: Vec::new(),
            state: TimelineState::Building,
            on_complete: None,
        })
    }

    /// Initial delay in seconds.
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Append a tween at `position` and return its entry index.
    ///
    /// The absolute start is computed now; the tween's own `delay` is added on top of it.
    pub fn add(&mut self, spec: TweenSpec, position: Position) -> FxResult<usize> {
        if self.is_started() {
            return Err(FxError::TimelineSealed);
        }
        spec.validate()?;
        let Some(span) = spec.span() else {
            return Err(FxError::validation(
                "infinite-repeat tweens cannot join a timeline",
            ));
        };

        let prev = self.entries.last();
        let anchor = match position {
            Position::At(t) => check_secs("timeline position", t)?,
            Position::AfterPrevious(off) => {
                prev.map_or(0.0, |e| e.start + e.spec.span().unwrap_or(0.0)) + off
            }
            Position::WithPrevious(off) => prev.map_or(0.0, |e| e.start) + off,
        };
        if !anchor.is_finite() {
            return Err(FxError::validation("timeline position must be finite"));
        }
        let start = anchor.max(0.0) + spec.delay;
        tracing::trace!(start, span, property = ?spec.property, "timeline entry added");

        self.entries.push(TimelineEntry {
            spec: TweenSpec { delay: 0.0, ..spec },
            start,
        });
        Ok(self.entries.len() - 1)
    }

    /// Set the completion callback. Only allowed before start.
    pub fn on_complete(&mut self, f: impl FnOnce() + 'static) -> FxResult<()> {
        if self.is_started() {
            return Err(FxError::TimelineSealed);
        }
        self.on_complete = Some(Box::new(f));
        Ok(())
    }

    /// Computed start of entry `index`, relative to the timeline start (excluding delay).
    pub fn start_time(&self, index: usize) -> Option<f64> {
        self.entries.get(index).map(|e| e.start)
    }

    /// Start of the most recently added entry.
    pub fn last_start_time(&self) -> Option<f64> {
        self.entries.last().map(|e| e.start)
    }

    /// Time from timeline start (excluding delay) until the last entry ends.
    pub fn duration(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.start + e.spec.span().unwrap_or(0.0))
            .fold(0.0, f64::max)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether [`Timeline::start`] succeeded.
    pub fn is_started(&self) -> bool {
        matches!(self.state, TimelineState::Started { .. })
    }

    /// Scheduler handle, once started.
    pub fn id(&self) -> Option<TimelineId> {
        match self.state {
            TimelineState::Building => None,
            TimelineState::Started { id, .. } => Some(id),
        }
    }

    /// Scheduler clock time at which the last entry ends, once started.
    pub fn end_time(&self) -> Option<f64> {
        match self.state {
            TimelineState::Building => None,
            TimelineState::Started { started_at, .. } => {
                Some(started_at + self.delay + self.duration())
            }
        }
    }

    /// Schedule every entry on `scheduler`. Seals the timeline.
    pub fn start(&mut self, scheduler: &mut Scheduler) -> FxResult<TimelineId> {
        if self.is_started() {
            return Err(FxError::AlreadyStarted);
        }
        let started_at = scheduler.now();
        let id = scheduler.open_group(self.entries.len(), self.delay, self.on_complete.take())?;
        for entry in &self.entries {
            let spec = TweenSpec {
                delay: self.delay + entry.start,
                ..entry.spec.clone()
            };
            scheduler.register(spec, TweenOptions::default(), Some(id))?;
        }
        tracing::debug!(?id, entries = self.entries.len(), delay = self.delay, "timeline started");
        self.state = TimelineState::Started { id, started_at };
        Ok(id)
    }

    /// Cancel the started timeline. Idempotent; a never-started timeline is left untouched.
    pub fn cancel(&self, scheduler: &mut Scheduler) -> bool {
        self.id().is_some_and(|id| scheduler.cancel_timeline(id))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
