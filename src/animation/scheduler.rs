use std::collections::BTreeMap;
use std::fmt;

use crate::animation::tween::{TIME_EPSILON, Tween, TweenSpec, TweenState};
use crate::foundation::core::{EffectId, TimelineId, TweenId, check_secs};
use crate::foundation::error::FxResult;
use crate::orchestrate::effect::EffectKind;
use crate::scene::stage::PropertyStore;

/// One-shot callback run after the frame that triggered it has written all its values.
pub type Callback = Box<dyn FnOnce()>;

/// Optional lifecycle callbacks for a tween.
#[derive(Default)]
pub struct TweenOptions {
    /// Runs once, on the first frame the tween applies.
    pub on_start: Option<Callback>,
    /// Runs once, after the final frame of a finite tween. Never runs for cancelled tweens.
    pub on_complete: Option<Callback>,
}

impl TweenOptions {
    /// Set the start callback.
    pub fn on_start(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    /// Set the completion callback.
    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for TweenOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweenOptions")
            .field("on_start", &self.on_start.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Something observable that happened during a frame, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum FxEvent {
    /// A tween applied for the first time.
    TweenStarted(TweenId),
    /// A finite tween wrote its final value.
    TweenCompleted(TweenId),
    /// A timer reached its deadline.
    TimerFired(TweenId),
    /// Every entry of a timeline completed.
    TimelineCompleted(TimelineId),
    /// An orchestrator effect reached `Done` on its own.
    EffectDone(EffectId, EffectKind),
}

enum EntryKind {
    Tween(Tween),
    Timer { fire_at: f64 },
}

struct Entry {
    id: TweenId,
    kind: EntryKind,
    group: Option<TimelineId>,
    on_start: Option<Callback>,
    on_complete: Option<Callback>,
    done: bool,
}

struct Group {
    remaining: usize,
    on_complete: Option<Callback>,
}

/// Frame-driven clock that advances every registered tween and timer.
///
/// There is no global instance: callers own a scheduler and pass it to tween and timeline
/// start calls. The clock only advances while something is registered, so an idle scheduler
/// costs nothing per frame and picks up where it left off when the next tween arrives.
#[derive(Default)]
pub struct Scheduler {
    now: f64,
    frames: u64,
    next_id: u64,
    entries: Vec<Entry>,
    groups: BTreeMap<TimelineId, Group>,
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now)
            .field("frames", &self.frames)
            .field("entries", &self.entries.len())
            .field("groups", &self.groups.len())
            .finish()
    }
}

impl Scheduler {
    /// Idle scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler clock in seconds.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Number of frames processed while active.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether any tween or timer is registered.
    pub fn is_running(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of registered tweens and timers.
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether `id` is still registered (not completed, fired or cancelled).
    pub fn is_active(&self, id: TweenId) -> bool {
        self.entries.iter().any(|e| e.id == id && !e.done)
    }

    fn alloc_id(&mut self) -> TweenId {
        self.next_id += 1;
        TweenId(self.next_id)
    }

    /// Register a tween. Its `delay` counts from the current clock.
    pub fn start_tween(&mut self, spec: TweenSpec, options: TweenOptions) -> FxResult<TweenId> {
        self.register(spec, options, None)
    }

    pub(crate) fn register(
        &mut self,
        spec: TweenSpec,
        options: TweenOptions,
        group: Option<TimelineId>,
    ) -> FxResult<TweenId> {
        spec.validate()?;
        let id = self.alloc_id();
        tracing::trace!(?id, target = ?spec.target, property = ?spec.property, "tween registered");
        self.entries.push(Entry {
            id,
            kind: EntryKind::Tween(Tween::new(spec, self.now)),
            group,
            on_start: options.on_start,
            on_complete: options.on_complete,
            done: false,
        });
        Ok(id)
    }

    /// Register a timer that fires [`FxEvent::TimerFired`] after `delay` seconds.
    pub fn start_timer(&mut self, delay: f64) -> FxResult<TweenId> {
        self.timer(delay, None, None)
    }

    /// Like [`Scheduler::start_timer`], running `f` when the timer fires.
    pub fn start_timer_with(
        &mut self,
        delay: f64,
        f: impl FnOnce() + 'static,
    ) -> FxResult<TweenId> {
        self.timer(delay, None, Some(Box::new(f)))
    }

    fn timer(
        &mut self,
        delay: f64,
        group: Option<TimelineId>,
        on_complete: Option<Callback>,
    ) -> FxResult<TweenId> {
        let delay = check_secs("timer delay", delay)?;
        let id = self.alloc_id();
        self.entries.push(Entry {
            id,
            kind: EntryKind::Timer {
                fire_at: self.now + delay,
            },
            group,
            on_start: None,
            on_complete,
            done: false,
        });
        Ok(id)
    }

    /// Open a completion group for a timeline with `members` entries.
    pub(crate) fn open_group(
        &mut self,
        members: usize,
        delay: f64,
        on_complete: Option<Callback>,
    ) -> FxResult<TimelineId> {
        self.next_id += 1;
        let id = TimelineId(self.next_id);
        if members == 0 {
            // Completion still waits for the timeline's delay.
            self.timer(delay, Some(id), None)?;
        }
        self.groups.insert(
            id,
            Group {
                remaining: members.max(1),
                on_complete,
            },
        );
        Ok(id)
    }

    /// Cancel a tween or timer. Stops its writes immediately and suppresses its callbacks.
    ///
    /// Returns `false` when `id` already completed or was cancelled. A cancelled timeline
    /// member counts as finished for its timeline; cancelling the last outstanding member
    /// drops the timeline without a completion event.
    pub fn cancel(&mut self, id: TweenId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == id && !e.done) else {
            return false;
        };
        let entry = self.entries.remove(pos);
        tracing::trace!(?id, "tween cancelled");
        if let Some(group) = entry.group {
            self.release_member(group, None);
        }
        true
    }

    /// Cancel every outstanding entry of a timeline and suppress its completion.
    pub fn cancel_timeline(&mut self, id: TimelineId) -> bool {
        if self.groups.remove(&id).is_none() {
            return false;
        }
        self.entries.retain(|e| e.group != Some(id));
        tracing::trace!(?id, "timeline cancelled");
        true
    }

    /// Whether a timeline is still waiting on entries.
    pub fn is_timeline_active(&self, id: TimelineId) -> bool {
        self.groups.contains_key(&id)
    }

    fn release_member(
        &mut self,
        group: TimelineId,
        out: Option<(&mut Vec<FxEvent>, &mut Vec<Callback>)>,
    ) {
        let Some(g) = self.groups.get_mut(&group) else {
            return;
        };
        g.remaining = g.remaining.saturating_sub(1);
        if g.remaining > 0 {
            return;
        }
        let Some(g) = self.groups.remove(&group) else {
            return;
        };
        if let Some((events, callbacks)) = out {
            tracing::trace!(id = ?group, "timeline completed");
            events.push(FxEvent::TimelineCompleted(group));
            callbacks.extend(g.on_complete);
        }
    }

    /// Advance the clock by `dt` seconds and apply every active entry to `store`.
    ///
    /// Entries are applied in registration order, so conflicting writes to the same
    /// (element, property) resolve to the most recently registered tween. Callbacks run after
    /// all writes of the frame, in event order. An idle scheduler ignores the tick.
    #[tracing::instrument(level = "trace", skip(self, store), fields(now = self.now))]
    pub fn tick(&mut self, dt: f64, store: &mut impl PropertyStore) -> Vec<FxEvent> {
        let mut events = Vec::new();
        if self.entries.is_empty() {
            return events;
        }
        if dt.is_finite() && dt > 0.0 {
            self.now += dt;
        }
        self.frames += 1;

        let now = self.now;
        let mut callbacks: Vec<Callback> = Vec::new();
        let mut finished_groups: Vec<TimelineId> = Vec::new();

        for entry in &mut self.entries {
            match &mut entry.kind {
                EntryKind::Timer { fire_at } => {
                    if now < *fire_at - TIME_EPSILON {
                        continue;
                    }
                    entry.done = true;
                    // Timers inside a group only exist to delay empty timelines.
                    if entry.group.is_none() {
                        events.push(FxEvent::TimerFired(entry.id));
                    }
                }
                EntryKind::Tween(tween) => {
                    // A looping tween whose target left the store would never finish.
                    if tween.spec.is_infinite()
                        && store
                            .get_property(tween.spec.target, tween.spec.property)
                            .is_none()
                    {
                        entry.done = true;
                        continue;
                    }
                    if now < tween.start_at - TIME_EPSILON {
                        continue;
                    }
                    if tween.state == TweenState::Pending {
                        tween.state = TweenState::Playing;
                        if tween.from.is_none() {
                            tween.from = store.get_property(tween.spec.target, tween.spec.property);
                        }
                        events.push(FxEvent::TweenStarted(entry.id));
                        callbacks.extend(entry.on_start.take());
                    }
                    let (value, finished) = tween.sample(now - tween.start_at);
                    store.set_property(tween.spec.target, tween.spec.property, value);
                    if !finished {
                        continue;
                    }
                    tween.state = TweenState::Completed;
                    entry.done = true;
                    events.push(FxEvent::TweenCompleted(entry.id));
                }
            }
            callbacks.extend(entry.on_complete.take());
            finished_groups.extend(entry.group);
        }

        self.entries.retain(|e| !e.done);
        for group in finished_groups {
            self.release_member(group, Some((&mut events, &mut callbacks)));
        }

        for f in callbacks {
            f();
        }
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
