//! cardfx is a frame-driven animation engine for dashboard cards.
//!
//! The crate is layered leaves first:
//!
//! - [`TweenSpec`]s interpolate one [`Property`] of one element, driven by a [`Scheduler`]
//! - [`Timeline`]s sequence tweens with absolute or relative offsets and complete once
//! - the [`Orchestrator`] plays card effects (entrance blow-out, ambient loops, refresh pulse,
//!   hover) as per-invocation state machines advanced by scheduler events
//!
//! Elements live on a [`Stage`]. [`FxSession`] wires the three together for hosts that tick a
//! single clock.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod orchestrate;
pub(crate) mod scene;
pub(crate) mod session;

pub use crate::foundation::core::{EffectId, ElementId, Rgba, TimelineId, TweenId, Vec2};
pub use crate::foundation::error::{FxError, FxResult};
pub use crate::foundation::rng::{RandomSource, Rng64};

pub use crate::animation::ease::Ease;
pub use crate::animation::scheduler::{Callback, FxEvent, Scheduler, TweenOptions};
pub use crate::animation::timeline::{Position, Timeline};
pub use crate::animation::tween::{Repeat, TweenSpec};
pub use crate::animation::value::{Lerp, Property, Value};
pub use crate::orchestrate::config::{
    AmbientConfig, EntranceRecipe, FlashRecipe, FxConfig, Glow, GlowTint, HoverConfig, Phase,
    PulseConfig, RainConfig, Range, SnowConfig, SunConfig,
};
pub use crate::orchestrate::effect::{
    AmbientKind, EffectKind, EffectRequest, EffectState, EntranceVariant, HoverPhase,
    ParticleInfo,
};
pub use crate::orchestrate::orchestrator::Orchestrator;
pub use crate::scene::stage::{Element, ElementSnapshot, PropertyStore, Role, Stage, Style};
pub use crate::session::fx_session::FxSession;
