use crate::foundation::core::{ElementId, TimelineId, TweenId, Vec2};

/// Entrance flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntranceVariant {
    /// Regular card.
    Standard,
    /// Highlighted card: flash overlay, more particles, stronger glow, longer settle.
    Featured,
}

/// Ambient loop flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbientKind {
    /// Falling drops.
    Rain,
    /// Drifting, spinning flakes.
    Snow,
    /// Pulsing sun and rays.
    Sun,
}

/// Pointer transition for the hover lift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverPhase {
    /// Pointer entered the card.
    Enter,
    /// Pointer left the card.
    Leave,
}

/// What an effect invocation plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Blow-out entrance with particle burst.
    Entrance(EntranceVariant),
    /// Looping weather decoration.
    Ambient(AmbientKind),
    /// Data refresh bounce.
    UpdatePulse,
    /// Hover lift or drop.
    Hover(HoverPhase),
}

/// Lifecycle of one invocation. Transitions only happen on scheduler events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum EffectState {
    /// Accepted, nothing touched yet.
    Idle,
    /// Ephemeral elements are being created.
    Spawning,
    /// Main timeline or loops running.
    Animating,
    /// Secondary glow pulse running, cleanup pending.
    Settling,
    /// Ephemeral elements being detached.
    Cleanup,
    /// Finished.
    Done,
}

/// Input to [`Orchestrator::play`](crate::Orchestrator::play).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectRequest {
    /// Effect to play.
    pub kind: EffectKind,
    /// Card the effect runs on.
    pub container: ElementId,
    /// Position in a batch of cards; delays an entrance by `index * stagger_unit`.
    #[serde(default)]
    pub stagger_index: u32,
    /// Overrides the recipe's particle count.
    #[serde(default)]
    pub particle_count: Option<usize>,
}

impl EffectRequest {
    /// Request with default parameters.
    pub fn new(kind: EffectKind, container: ElementId) -> Self {
        Self {
            kind,
            container,
            stagger_index: 0,
            particle_count: None,
        }
    }

    /// Set the stagger index.
    pub fn with_stagger(mut self, index: u32) -> Self {
        self.stagger_index = index;
        self
    }

    /// Override the particle count.
    pub fn with_particles(mut self, count: usize) -> Self {
        self.particle_count = Some(count);
        self
    }
}

/// A spawned burst particle and the trajectory chosen for it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParticleInfo {
    /// Stage element.
    pub id: ElementId,
    /// Edge length in pixels.
    pub size: f64,
    /// Offset from the card center at the end of travel.
    pub displacement: Vec2,
}

/// Bookkeeping for one running invocation.
#[derive(Debug)]
pub(crate) struct EffectRun {
    pub(crate) kind: EffectKind,
    pub(crate) container: ElementId,
    pub(crate) state: EffectState,
    pub(crate) timeline: Option<TimelineId>,
    /// Unmanaged tweens and timers owned by the invocation.
    pub(crate) tweens: Vec<TweenId>,
    /// Ephemeral nodes detached at cleanup.
    pub(crate) ephemeral: Vec<ElementId>,
    pub(crate) particles: Vec<ParticleInfo>,
    /// Scheduler time at which the main timeline ends.
    pub(crate) timeline_end: f64,
}

impl EffectRun {
    pub(crate) fn new(kind: EffectKind, container: ElementId) -> Self {
        Self {
            kind,
            container,
            state: EffectState::Idle,
            timeline: None,
            tweens: Vec::new(),
            ephemeral: Vec::new(),
            particles: Vec::new(),
            timeline_end: 0.0,
        }
    }
}
