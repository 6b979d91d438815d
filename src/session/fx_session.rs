use crate::animation::scheduler::{FxEvent, Scheduler};
use crate::foundation::core::{EffectId, ElementId, Rgba};
use crate::foundation::rng::RandomSource;
use crate::orchestrate::config::FxConfig;
use crate::orchestrate::effect::{
    AmbientKind, EffectKind, EffectRequest, EffectState, EntranceVariant, HoverPhase,
};
use crate::orchestrate::orchestrator::Orchestrator;
use crate::scene::stage::{Role, Stage};

/// Stage, scheduler and orchestrator wired together.
///
/// Hosts that do not need to share the scheduler with other animations can drive everything
/// through one [`FxSession::tick`] per frame.
#[derive(Debug)]
pub struct FxSession {
    stage: Stage,
    scheduler: Scheduler,
    orchestrator: Orchestrator,
}

impl FxSession {
    /// Session over an empty stage.
    pub fn new(config: FxConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            stage: Stage::new(),
            scheduler: Scheduler::new(),
            orchestrator: Orchestrator::new(config, rng),
        }
    }

    /// Session with a seeded generator.
    pub fn with_seed(config: FxConfig, seed: u64) -> Self {
        Self {
            stage: Stage::new(),
            scheduler: Scheduler::new(),
            orchestrator: Orchestrator::with_seed(config, seed),
        }
    }

    /// Element tree.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Mutable element tree, for building and removing cards.
    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Frame clock.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Effect orchestrator.
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Clock time in seconds.
    pub fn now(&self) -> f64 {
        self.scheduler.now()
    }

    /// Create a card container with `decorations` children of `role`.
    pub fn create_card(
        &mut self,
        theme: Rgba,
        role: Option<Role>,
        decorations: usize,
    ) -> ElementId {
        let id = self.stage.create_container(theme);
        if let Some(role) = role {
            for _ in 0..decorations {
                self.stage.add_decoration(id, role);
            }
        }
        id
    }

    /// See [`Orchestrator::play`].
    pub fn play(&mut self, req: EffectRequest) -> Option<EffectId> {
        self.orchestrator
            .play(&mut self.scheduler, &mut self.stage, req)
    }

    /// See [`Orchestrator::entrance`].
    pub fn entrance(
        &mut self,
        container: ElementId,
        stagger_index: u32,
        variant: EntranceVariant,
    ) -> Option<EffectId> {
        self.orchestrator.entrance(
            &mut self.scheduler,
            &mut self.stage,
            container,
            stagger_index,
            variant,
        )
    }

    /// See [`Orchestrator::ambient_loop`].
    pub fn ambient_loop(&mut self, container: ElementId, kind: AmbientKind) -> Option<EffectId> {
        self.orchestrator
            .ambient_loop(&mut self.scheduler, &mut self.stage, container, kind)
    }

    /// See [`Orchestrator::update_pulse`].
    pub fn update_pulse(&mut self, container: ElementId) -> Option<EffectId> {
        self.orchestrator
            .update_pulse(&mut self.scheduler, &mut self.stage, container)
    }

    /// See [`Orchestrator::hover`].
    pub fn hover(&mut self, container: ElementId, phase: HoverPhase) -> Option<EffectId> {
        self.orchestrator
            .hover(&mut self.scheduler, &mut self.stage, container, phase)
    }

    /// See [`Orchestrator::cancel`].
    pub fn cancel(&mut self, effect: EffectId) -> bool {
        self.orchestrator
            .cancel(&mut self.scheduler, &mut self.stage, effect)
    }

    /// Current state of an effect; `None` once it finished or was cancelled.
    pub fn state(&self, effect: EffectId) -> Option<EffectState> {
        self.orchestrator.state(effect)
    }

    /// Kind of a running effect.
    pub fn kind(&self, effect: EffectId) -> Option<EffectKind> {
        self.orchestrator.kind(effect)
    }

    /// Advance one frame: scheduler writes, then effect state transitions.
    ///
    /// Returns the scheduler's events followed by any [`FxEvent::EffectDone`] they caused.
    pub fn tick(&mut self, dt: f64) -> Vec<FxEvent> {
        let mut events = self.scheduler.tick(dt, &mut self.stage);
        let done = self
            .orchestrator
            .handle_events(&mut self.scheduler, &mut self.stage, &events);
        events.extend(done);
        events
    }

    /// Tick `seconds * fps` frames of `1 / fps` seconds each, collecting every event.
    pub fn run_for(&mut self, seconds: f64, fps: f64) -> Vec<FxEvent> {
        let mut events = Vec::new();
        if !(fps.is_finite() && fps > 0.0) {
            return events;
        }
        let frames = (seconds * fps).round().max(0.0) as u64;
        for _ in 0..frames {
            events.extend(self.tick(1.0 / fps));
        }
        events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/fx_session.rs"]
mod tests;
