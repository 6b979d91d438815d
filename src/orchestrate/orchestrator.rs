use std::collections::{BTreeMap, HashMap};
use std::f64::consts::TAU;

use crate::animation::ease::Ease;
use crate::animation::scheduler::{FxEvent, Scheduler, TweenOptions};
use crate::animation::timeline::{Position, Timeline};
use crate::animation::tween::{Repeat, TweenSpec};
use crate::animation::value::{Property, Value};
use crate::foundation::core::{EffectId, ElementId, Rgba, TimelineId, TweenId, Vec2};
use crate::foundation::error::FxResult;
use crate::foundation::rng::{RandomSource, Rng64};
use crate::orchestrate::config::{EntranceRecipe, FxConfig, Glow, HoverConfig, PulseConfig};
use crate::orchestrate::effect::{
    AmbientKind, EffectKind, EffectRequest, EffectRun, EffectState, EntranceVariant, HoverPhase,
    ParticleInfo,
};
use crate::scene::stage::{PropertyStore, Role, Stage, Style};

/// Scheduler notification an invocation is waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Trigger {
    Timeline(TimelineId),
    Timer(TweenId),
}

/// Plays effect recipes on stage containers.
///
/// Every entry point is fire-and-forget: an invalid or detached container makes the call a
/// no-op returning `None`. Progress is driven by feeding each frame's scheduler events to
/// [`Orchestrator::handle_events`].
pub struct Orchestrator {
    config: FxConfig,
    rng: Box<dyn RandomSource>,
    next_id: u64,
    runs: BTreeMap<EffectId, EffectRun>,
    waiting: HashMap<Trigger, EffectId>,
    hovers: HashMap<ElementId, EffectId>,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("runs", &self.runs)
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    /// Orchestrator drawing randomness from `rng`.
    pub fn new(config: FxConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            config,
            rng,
            next_id: 0,
            runs: BTreeMap::new(),
            waiting: HashMap::new(),
            hovers: HashMap::new(),
        }
    }

    /// Orchestrator with a seeded [`Rng64`].
    pub fn with_seed(config: FxConfig, seed: u64) -> Self {
        Self::new(config, Box::new(Rng64::new(seed)))
    }

    /// Active configuration.
    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    /// State of a running invocation; `None` once it is done, cancelled or unknown.
    pub fn state(&self, effect: EffectId) -> Option<EffectState> {
        self.runs.get(&effect).map(|r| r.state)
    }

    /// Kind of a running invocation.
    pub fn kind(&self, effect: EffectId) -> Option<EffectKind> {
        self.runs.get(&effect).map(|r| r.kind)
    }

    /// Particles spawned by a running entrance.
    pub fn particles(&self, effect: EffectId) -> &[ParticleInfo] {
        self.runs
            .get(&effect)
            .map(|r| r.particles.as_slice())
            .unwrap_or(&[])
    }

    /// Number of running invocations.
    pub fn active_count(&self) -> usize {
        self.runs.len()
    }

    /// Dispatch a request to the matching recipe.
    pub fn play(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        req: EffectRequest,
    ) -> Option<EffectId> {
        match req.kind {
            EffectKind::Entrance(variant) => self.entrance_with(
                sched,
                stage,
                req.container,
                req.stagger_index,
                variant,
                req.particle_count,
            ),
            EffectKind::Ambient(kind) => self.ambient_loop(sched, stage, req.container, kind),
            EffectKind::UpdatePulse => self.update_pulse(sched, stage, req.container),
            EffectKind::Hover(phase) => self.hover(sched, stage, req.container, phase),
        }
    }

    /// Blow-out entrance of a freshly built card.
    pub fn entrance(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        container: ElementId,
        stagger_index: u32,
        variant: EntranceVariant,
    ) -> Option<EffectId> {
        self.entrance_with(sched, stage, container, stagger_index, variant, None)
    }

    #[tracing::instrument(skip(self, sched, stage))]
    fn entrance_with(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        container: ElementId,
        stagger_index: u32,
        variant: EntranceVariant,
        particle_count: Option<usize>,
    ) -> Option<EffectId> {
        if !stage.is_container(container) {
            tracing::debug!("container not attached, entrance ignored");
            return None;
        }
        let mut recipe = match variant {
            EntranceVariant::Standard => self.config.standard,
            EntranceVariant::Featured => self.config.featured,
        };
        if let Some(n) = particle_count {
            recipe.particle_count = n;
        }
        let delay = f64::from(stagger_index) * self.config.stagger_unit;
        let id = self.alloc(EffectKind::Entrance(variant), container);
        let result = self.start_entrance(sched, stage, id, &recipe, delay);
        self.finish_start(sched, stage, id, result)
    }

    fn start_entrance(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        id: EffectId,
        recipe: &EntranceRecipe,
        delay: f64,
    ) -> FxResult<()> {
        let Some(run) = self.runs.get_mut(&id) else {
            return Ok(());
        };
        let container = run.container;
        let theme = stage.style(container).map(|s| s.theme).unwrap_or_default();

        transition(id, run, EffectState::Spawning);
        if let Some(style) = stage.style_mut(container) {
            style.opacity = 0.0;
            style.scale = recipe.start_scale;
            style.blur = recipe.start_blur;
        }

        let holder_style = Style {
            theme,
            ..Style::default()
        };
        let Some(holder) = stage.add_child(container, Role::ParticleHolder, holder_style) else {
            return Ok(());
        };
        run.ephemeral.push(holder);
        let tint = theme.with_alpha(recipe.particle_alpha);
        for _ in 0..recipe.particle_count {
            let size = self
                .rng
                .range(recipe.particle_size.min, recipe.particle_size.max);
            let angle = self.rng.range(0.0, TAU);
            let distance = self
                .rng
                .range(recipe.particle_distance.min, recipe.particle_distance.max);
            let style = Style {
                opacity: 0.0,
                theme: tint,
                size,
                ..Style::default()
            };
            if let Some(pid) = stage.add_child(holder, Role::Particle, style) {
                run.particles.push(ParticleInfo {
                    id: pid,
                    size,
                    displacement: Vec2::new(angle.cos() * distance, angle.sin() * distance),
                });
            }
        }

        let flash = match recipe.flash {
            Some(flash) => {
                let style = Style {
                    opacity: 0.0,
                    theme: Rgba::WHITE,
                    ..Style::default()
                };
                let fid = stage.add_child(container, Role::Flash, style);
                run.ephemeral.extend(fid);
                fid.map(|fid| (fid, flash))
            }
            None => None,
        };

        let blow_out_start = flash.map_or(0.0, |(_, flash)| flash.blow_out_start());
        let mut tl = Timeline::new(delay)?;
        if let Some((fid, flash)) = flash {
            tl.add(
                TweenSpec::to(fid, Property::Opacity, flash.peak, flash.rise.duration)
                    .with_ease(flash.rise.ease),
                Position::At(0.0),
            )?;
            tl.add(
                TweenSpec::to(fid, Property::Opacity, 0.0, flash.fall.duration)
                    .with_ease(flash.fall.ease),
                Position::AfterPrevious(flash.hold),
            )?;
        }

        let glow = resolve_glow(recipe.glow_flash, theme);
        tl.add(
            TweenSpec::set(container, Property::GlowRadius, glow.0),
            Position::At(blow_out_start),
        )?;
        tl.add(
            TweenSpec::set(container, Property::GlowColor, glow.1),
            Position::WithPrevious(0.0),
        )?;
        let blow = recipe.blow_out;
        for (prop, to) in [
            (Property::Opacity, 1.0),
            (Property::Scale, recipe.overshoot_scale),
            (Property::Blur, 0.0),
        ] {
            tl.add(
                TweenSpec::to(container, prop, to, blow.duration).with_ease(blow.ease),
                Position::WithPrevious(0.0),
            )?;
        }
        tl.add(
            TweenSpec::to(container, Property::Scale, 1.0, recipe.settle.duration)
                .with_ease(recipe.settle.ease),
            Position::AfterPrevious(-recipe.settle_overlap),
        )?;

        // Particles fly outside the sealed timeline, starting with the blow-out.
        let particle_delay = delay + blow_out_start;
        let fade_in = recipe.particle_in;
        let fade_out = recipe.particle_out;
        for p in &run.particles {
            let specs = [
                TweenSpec::to(p.id, Property::X, p.displacement.x, fade_in.duration),
                TweenSpec::to(p.id, Property::Y, p.displacement.y, fade_in.duration),
                TweenSpec::to(p.id, Property::Opacity, recipe.particle_peak, fade_in.duration),
            ];
            for spec in specs {
                let spec = spec.with_ease(fade_in.ease).with_delay(particle_delay);
                run.tweens
                    .push(sched.start_tween(spec, TweenOptions::default())?);
            }
            let out = TweenSpec::to(p.id, Property::Opacity, 0.0, fade_out.duration)
                .with_ease(fade_out.ease)
                .with_delay(particle_delay + fade_in.duration);
            run.tweens.push(sched.start_tween(out, TweenOptions::default())?);
        }

        let tid = tl.start(sched)?;
        run.timeline = Some(tid);
        run.timeline_end = tl.end_time().unwrap_or_else(|| sched.now());
        self.waiting.insert(Trigger::Timeline(tid), id);
        transition(id, run, EffectState::Animating);
        tracing::debug!(
            particles = run.particles.len(),
            delay,
            ends_at = run.timeline_end,
            "entrance scheduled"
        );
        Ok(())
    }

    /// Start looping decoration on the container's rain drops, snow flakes or sun.
    ///
    /// Returns `None` when the container has no matching decorative children. A sun loop
    /// needs a [`Role::Sun`] child; its rays are optional.
    pub fn ambient_loop(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        container: ElementId,
        kind: AmbientKind,
    ) -> Option<EffectId> {
        let (sun, elements) = match kind {
            AmbientKind::Rain => (None, stage.children_with_role(container, Role::RainDrop)),
            AmbientKind::Snow => (None, stage.children_with_role(container, Role::SnowFlake)),
            AmbientKind::Sun => {
                let Some(&sun) = stage.children_with_role(container, Role::Sun).first() else {
                    tracing::debug!(?container, "no sun element, sun loop ignored");
                    return None;
                };
                (Some(sun), stage.children_with_role(container, Role::SunRay))
            }
        };
        self.ambient_loop_on(sched, stage, container, kind, sun, &elements)
    }

    /// Like [`Orchestrator::ambient_loop`] over a caller-supplied element set.
    ///
    /// `elements` are the drops, flakes or sun rays. `sun` only applies to
    /// [`AmbientKind::Sun`]; without it the rays pulse on their own.
    #[tracing::instrument(skip(self, sched, stage, elements), fields(n = elements.len()))]
    pub fn ambient_loop_on(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        container: ElementId,
        kind: AmbientKind,
        sun: Option<ElementId>,
        elements: &[ElementId],
    ) -> Option<EffectId> {
        if !stage.is_container(container) {
            tracing::debug!("container not attached, ambient loop ignored");
            return None;
        }
        let sun = sun.filter(|s| matches!(kind, AmbientKind::Sun) && stage.contains(*s));
        let elements: Vec<ElementId> = elements
            .iter()
            .copied()
            .filter(|e| stage.contains(*e) && Some(*e) != sun)
            .collect();
        if elements.is_empty() && sun.is_none() {
            tracing::debug!("no decorative elements, ambient loop ignored");
            return None;
        }
        let id = self.alloc(EffectKind::Ambient(kind), container);
        let result = self.start_ambient(sched, stage, id, kind, sun, &elements);
        self.finish_start(sched, stage, id, result)
    }

    fn start_ambient(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        id: EffectId,
        kind: AmbientKind,
        sun: Option<ElementId>,
        elements: &[ElementId],
    ) -> FxResult<()> {
        let Some(run) = self.runs.get_mut(&id) else {
            return Ok(());
        };
        let cfg = self.config.ambient;
        let rng = &mut self.rng;
        let mut specs = Vec::new();

        match kind {
            AmbientKind::Rain => {
                let rain = cfg.rain;
                for (i, &drop) in elements.iter().enumerate() {
                    let delay = rng.range(rain.delay.min, rain.delay.max);
                    let duration = rng.range(rain.duration.min, rain.duration.max);
                    let start_y = rain.start_y - (i % 10) as f64 * rain.start_y_step;
                    stage.set_property(drop, Property::Y, start_y.into());
                    specs.push(
                        TweenSpec::from_to(drop, Property::Y, start_y, rain.fall_to, duration)
                            .with_delay(delay)
                            .with_repeat(Repeat::Infinite),
                    );
                }
            }
            AmbientKind::Snow => {
                let snow = cfg.snow;
                for (i, &flake) in elements.iter().enumerate() {
                    let delay = rng.range(snow.delay.min, snow.delay.max);
                    let duration = rng.range(snow.duration.min, snow.duration.max);
                    let sign = if rng.chance() { 1.0 } else { -1.0 };
                    let drift = sign * rng.range(0.0, snow.max_drift);
                    let spin = rng.range(0.0, snow.max_spin);
                    let start_y = snow.start_y - (i % 10) as f64 * snow.start_y_step;
                    stage.set_property(flake, Property::Y, start_y.into());
                    stage.set_property(flake, Property::X, 0.0.into());
                    for (prop, from, to) in [
                        (Property::Y, start_y, snow.fall_to),
                        (Property::X, 0.0, drift),
                        (Property::Rotation, 0.0, spin),
                    ] {
                        specs.push(
                            TweenSpec::from_to(flake, prop, from, to, duration)
                                .with_ease(Ease::InQuad)
                                .with_delay(delay)
                                .with_repeat(Repeat::Infinite),
                        );
                    }
                }
            }
            AmbientKind::Sun => {
                let sun_cfg = cfg.sun;
                if let Some(sun) = sun {
                    let theme = stage.style(run.container).map(|s| s.theme).unwrap_or_default();
                    let (radius, color) = resolve_glow(sun_cfg.glow, theme);
                    for (prop, to) in [
                        (Property::Scale, Value::from(sun_cfg.scale)),
                        (Property::GlowRadius, Value::from(radius)),
                        (Property::GlowColor, Value::from(color)),
                    ] {
                        specs.push(
                            TweenSpec::to(sun, prop, to, sun_cfg.phase.duration)
                                .with_ease(sun_cfg.phase.ease)
                                .with_repeat(Repeat::Infinite)
                                .with_yoyo(true),
                        );
                    }
                }
                for (i, &ray) in elements.iter().enumerate() {
                    specs.push(
                        TweenSpec::to(
                            ray,
                            Property::Opacity,
                            sun_cfg.ray_opacity,
                            sun_cfg.ray_phase.duration,
                        )
                        .with_ease(sun_cfg.ray_phase.ease)
                        .with_delay(i as f64 * sun_cfg.ray_stagger)
                        .with_repeat(Repeat::Infinite)
                        .with_yoyo(true),
                    );
                }
            }
        }

        for spec in specs {
            run.tweens.push(sched.start_tween(spec, TweenOptions::default())?);
        }
        transition(id, run, EffectState::Animating);
        Ok(())
    }

    /// Bounce and glow fade after the card's data refreshed.
    #[tracing::instrument(skip(self, sched, stage))]
    pub fn update_pulse(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        container: ElementId,
    ) -> Option<EffectId> {
        if !stage.is_container(container) {
            tracing::debug!("container not attached, update pulse ignored");
            return None;
        }
        let id = self.alloc(EffectKind::UpdatePulse, container);
        let theme = stage.style(container).map(|s| s.theme).unwrap_or_default();
        let result = pulse_timeline(container, &self.config.pulse, theme)
            .and_then(|tl| self.attach_timeline(sched, id, tl));
        self.finish_start(sched, stage, id, result)
    }

    /// Lift the card on pointer enter, drop it back on leave.
    ///
    /// A new hover request replaces the container's in-flight hover.
    #[tracing::instrument(skip(self, sched, stage))]
    pub fn hover(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        container: ElementId,
        phase: HoverPhase,
    ) -> Option<EffectId> {
        if !stage.is_container(container) {
            tracing::debug!("container not attached, hover ignored");
            return None;
        }
        if let Some(prev) = self.hovers.remove(&container) {
            self.cancel(sched, stage, prev);
        }
        let id = self.alloc(EffectKind::Hover(phase), container);
        let theme = stage.style(container).map(|s| s.theme).unwrap_or_default();
        let result = hover_timeline(container, &self.config.hover, phase, theme)
            .and_then(|tl| self.attach_timeline(sched, id, tl));
        let started = self.finish_start(sched, stage, id, result);
        if let Some(id) = started {
            self.hovers.insert(container, id);
        }
        started
    }

    /// Stop an invocation: cancel its tweens, detach its ephemeral elements, and drop it
    /// without a completion signal. Idempotent.
    pub fn cancel(&mut self, sched: &mut Scheduler, stage: &mut Stage, effect: EffectId) -> bool {
        let Some(run) = self.runs.remove(&effect) else {
            return false;
        };
        if let Some(tl) = run.timeline {
            sched.cancel_timeline(tl);
        }
        for t in &run.tweens {
            sched.cancel(*t);
        }
        for e in &run.ephemeral {
            stage.detach(*e);
        }
        self.waiting.retain(|_, v| *v != effect);
        if self.hovers.get(&run.container) == Some(&effect) {
            self.hovers.remove(&run.container);
        }
        tracing::debug!(?effect, kind = ?run.kind, "effect cancelled");
        true
    }

    /// Advance invocations waiting on `events`. Returns the completion signals produced.
    ///
    /// Ambient loops whose container has been detached are cancelled here, without a
    /// completion signal.
    pub fn handle_events(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        events: &[FxEvent],
    ) -> Vec<FxEvent> {
        self.reap_detached_loops(sched, stage);
        let mut out = Vec::new();
        for ev in events {
            let trigger = match *ev {
                FxEvent::TimelineCompleted(t) => Trigger::Timeline(t),
                FxEvent::TimerFired(t) => Trigger::Timer(t),
                _ => continue,
            };
            let Some(id) = self.waiting.remove(&trigger) else {
                continue;
            };
            if let Err(err) = self.advance(sched, stage, id, &mut out) {
                tracing::warn!(?id, %err, "effect aborted");
                self.cancel(sched, stage, id);
            }
        }
        out
    }

    fn reap_detached_loops(&mut self, sched: &mut Scheduler, stage: &mut Stage) {
        let orphans: Vec<EffectId> = self
            .runs
            .iter()
            .filter(|(_, run)| {
                matches!(run.kind, EffectKind::Ambient(_)) && !stage.contains(run.container)
            })
            .map(|(id, _)| *id)
            .collect();
        for id in orphans {
            tracing::debug!(?id, "container detached, ambient loop reaped");
            self.cancel(sched, stage, id);
        }
    }

    fn advance(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        id: EffectId,
        out: &mut Vec<FxEvent>,
    ) -> FxResult<()> {
        let Some(run) = self.runs.get_mut(&id) else {
            return Ok(());
        };
        run.timeline = None;
        match (run.kind, run.state) {
            (EffectKind::Entrance(variant), EffectState::Animating) => {
                let recipe = match variant {
                    EntranceVariant::Standard => &self.config.standard,
                    EntranceVariant::Featured => &self.config.featured,
                };
                transition(id, run, EffectState::Settling);
                let theme = stage.style(run.container).map(|s| s.theme).unwrap_or_default();
                let (radius, color) = resolve_glow(recipe.glow_pulse, theme);
                let phase = recipe.glow_pulse_phase;
                for (prop, to) in [
                    (Property::GlowRadius, Value::from(radius)),
                    (Property::GlowColor, Value::from(color)),
                ] {
                    let spec = TweenSpec::to(run.container, prop, to, phase.duration)
                        .with_ease(phase.ease)
                        .with_repeat(Repeat::Count(1))
                        .with_yoyo(true);
                    run.tweens.push(sched.start_tween(spec, TweenOptions::default())?);
                }
                let grace = (run.timeline_end + self.config.cleanup_grace - sched.now()).max(0.0);
                let timer = sched.start_timer(grace)?;
                run.tweens.push(timer);
                self.waiting.insert(Trigger::Timer(timer), id);
            }
            (EffectKind::Entrance(_), EffectState::Settling) => {
                transition(id, run, EffectState::Cleanup);
                // Detaching the holder takes every particle with it.
                for e in run.ephemeral.drain(..) {
                    stage.detach(e);
                }
                tracing::trace!(particles = run.particles.len(), "particles detached");
                self.finish(id, out);
            }
            (EffectKind::UpdatePulse | EffectKind::Hover(_), EffectState::Animating) => {
                self.finish(id, out);
            }
            (kind, state) => {
                tracing::warn!(?id, ?kind, ?state, "unexpected effect event");
            }
        }
        Ok(())
    }

    fn finish(&mut self, id: EffectId, out: &mut Vec<FxEvent>) {
        let Some(mut run) = self.runs.remove(&id) else {
            return;
        };
        transition(id, &mut run, EffectState::Done);
        if self.hovers.get(&run.container) == Some(&id) {
            self.hovers.remove(&run.container);
        }
        out.push(FxEvent::EffectDone(id, run.kind));
    }

    fn alloc(&mut self, kind: EffectKind, container: ElementId) -> EffectId {
        self.next_id += 1;
        let id = EffectId(self.next_id);
        self.runs.insert(id, EffectRun::new(kind, container));
        id
    }

    fn attach_timeline(
        &mut self,
        sched: &mut Scheduler,
        id: EffectId,
        mut tl: Timeline,
    ) -> FxResult<()> {
        let Some(run) = self.runs.get_mut(&id) else {
            return Ok(());
        };
        let tid = tl.start(sched)?;
        run.timeline = Some(tid);
        run.timeline_end = tl.end_time().unwrap_or_else(|| sched.now());
        self.waiting.insert(Trigger::Timeline(tid), id);
        transition(id, run, EffectState::Animating);
        Ok(())
    }

    /// Roll back a half-started invocation on error.
    fn finish_start(
        &mut self,
        sched: &mut Scheduler,
        stage: &mut Stage,
        id: EffectId,
        result: FxResult<()>,
    ) -> Option<EffectId> {
        match result {
            Ok(()) => Some(id),
            Err(err) => {
                tracing::warn!(?id, %err, "effect could not start");
                self.cancel(sched, stage, id);
                None
            }
        }
    }
}

fn transition(id: EffectId, run: &mut EffectRun, to: EffectState) {
    tracing::debug!(?id, kind = ?run.kind, from = ?run.state, ?to, "effect transition");
    run.state = to;
}

fn resolve_glow(glow: Glow, theme: Rgba) -> (f64, Rgba) {
    (glow.radius, glow.tint.resolve(theme))
}

fn pulse_timeline(container: ElementId, p: &PulseConfig, theme: Rgba) -> FxResult<Timeline> {
    let (flash_r, flash_c) = resolve_glow(p.flash_glow, theme);
    let (rest_r, rest_c) = resolve_glow(p.rest_glow, theme);
    let mut tl = Timeline::new(0.0)?;
    tl.add(
        TweenSpec::from_to(
            container,
            Property::Scale,
            p.from_scale,
            1.0,
            p.scale_phase.duration,
        )
        .with_ease(p.scale_phase.ease),
        Position::At(0.0),
    )?;
    for (prop, from, to) in [
        (Property::GlowRadius, Value::from(flash_r), Value::from(rest_r)),
        (Property::GlowColor, Value::from(flash_c), Value::from(rest_c)),
    ] {
        tl.add(
            TweenSpec::from_to(container, prop, from, to, p.glow_phase.duration)
                .with_ease(p.glow_phase.ease),
            Position::WithPrevious(0.0),
        )?;
    }
    Ok(tl)
}

fn hover_timeline(
    container: ElementId,
    h: &HoverConfig,
    phase: HoverPhase,
    theme: Rgba,
) -> FxResult<Timeline> {
    let (y, scale, glow, motion) = match phase {
        HoverPhase::Enter => (h.lift, h.scale, h.glow, h.enter),
        HoverPhase::Leave => (0.0, 1.0, h.rest_glow, h.leave),
    };
    let (radius, color) = resolve_glow(glow, theme);
    let mut tl = Timeline::new(0.0)?;
    let mut pos = Position::At(0.0);
    for (prop, to) in [
        (Property::Y, Value::from(y)),
        (Property::Scale, Value::from(scale)),
        (Property::GlowRadius, Value::from(radius)),
        (Property::GlowColor, Value::from(color)),
    ] {
        tl.add(
            TweenSpec::to(container, prop, to, motion.duration).with_ease(motion.ease),
            pos,
        )?;
        pos = Position::WithPrevious(0.0);
    }
    Ok(tl)
}

#[cfg(test)]
#[path = "../../tests/unit/orchestrate/orchestrator.rs"]
mod tests;
