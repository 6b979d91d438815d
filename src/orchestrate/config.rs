use crate::animation::ease::Ease;
use crate::foundation::core::{Rgba, check_secs};
use crate::foundation::error::{FxError, FxResult};

/// Closed numeric range `[min, max]` sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Range {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Range {
    /// Build a range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(self, what: &str) -> FxResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(FxError::config(format!(
                "{what}: range must be finite with min <= max (got {}..{})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Duration and easing of one animation phase.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Phase {
    /// Seconds.
    pub duration: f64,
    /// Easing curve.
    pub ease: Ease,
}

impl Phase {
    /// Build a phase.
    pub const fn new(duration: f64, ease: Ease) -> Self {
        Self { duration, ease }
    }

    fn validate(self, what: &str) -> FxResult<()> {
        check_secs(what, self.duration)
            .map(|_| ())
            .map_err(|e| FxError::config(e.to_string()))
    }
}

/// Glow color: fixed, or the card's theme color at a given alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlowTint {
    /// Always this color.
    Fixed(Rgba),
    /// Theme color with the given alpha.
    Theme {
        /// Alpha in `[0, 1]`.
        alpha: f64,
    },
}

impl GlowTint {
    /// Resolve against a card theme.
    pub fn resolve(self, theme: Rgba) -> Rgba {
        match self {
            Self::Fixed(c) => c,
            Self::Theme { alpha } => theme.with_alpha(alpha),
        }
    }
}

/// Box-shadow style glow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Glow {
    /// Blur radius in pixels.
    pub radius: f64,
    /// Color.
    pub tint: GlowTint,
}

impl Glow {
    /// Build a glow.
    pub const fn new(radius: f64, tint: GlowTint) -> Self {
        Self { radius, tint }
    }
}

/// Full-card flash played before the blow-out of a featured entrance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlashRecipe {
    /// Peak overlay opacity.
    pub peak: f64,
    /// Fade in.
    pub rise: Phase,
    /// Pause at the peak before fading out.
    pub hold: f64,
    /// Fade out.
    pub fall: Phase,
    /// How far the blow-out starts before the flash ends.
    pub lead: f64,
}

impl FlashRecipe {
    /// Offset from the entrance start at which the blow-out begins.
    pub fn blow_out_start(&self) -> f64 {
        (self.rise.duration + self.hold + self.fall.duration - self.lead).max(0.0)
    }
}

/// Parameters of one entrance variant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntranceRecipe {
    /// Particles spawned per invocation.
    pub particle_count: usize,
    /// Particle edge length in pixels.
    pub particle_size: Range,
    /// Particle alpha relative to the theme color.
    pub particle_alpha: f64,
    /// Radial travel distance in pixels.
    pub particle_distance: Range,
    /// Particle peak opacity.
    pub particle_peak: f64,
    /// Outward travel and fade in.
    pub particle_in: Phase,
    /// Fade out after travel.
    pub particle_out: Phase,
    /// Container scale before the blow-out.
    pub start_scale: f64,
    /// Container blur before the blow-out.
    pub start_blur: f64,
    /// Peak scale of the blow-out.
    pub overshoot_scale: f64,
    /// Blow-out phase.
    pub blow_out: Phase,
    /// Glow applied at the start of the blow-out.
    pub glow_flash: Glow,
    /// Settle back to scale 1.
    pub settle: Phase,
    /// Overlap of the settle with the end of the blow-out.
    pub settle_overlap: f64,
    /// Glow the post-settle pulse swings to and back from.
    pub glow_pulse: Glow,
    /// Half-cycle of the glow pulse.
    pub glow_pulse_phase: Phase,
    /// Optional flash overlay.
    pub flash: Option<FlashRecipe>,
}

impl EntranceRecipe {
    /// Regular card entrance.
    pub fn standard() -> Self {
        Self {
            particle_count: 20,
            particle_size: Range::new(2.0, 8.0),
            particle_alpha: 0.8,
            particle_distance: Range::new(100.0, 250.0),
            particle_peak: 0.8,
            particle_in: Phase::new(0.2, Ease::OutQuad),
            particle_out: Phase::new(0.3, Ease::InQuad),
            start_scale: 0.05,
            start_blur: 10.0,
            overshoot_scale: 1.2,
            blow_out: Phase::new(0.5, Ease::OutQuint),
            glow_flash: Glow::new(40.0, GlowTint::Fixed(Rgba::new(255, 255, 255, 0.9))),
            settle: Phase::new(
                0.5,
                Ease::OutElastic {
                    amplitude: 1.2,
                    period: 0.5,
                },
            ),
            settle_overlap: 0.1,
            glow_pulse: Glow::new(15.0, GlowTint::Fixed(Rgba::new(255, 255, 255, 0.25))),
            glow_pulse_phase: Phase::new(0.8, Ease::InOutSine),
            flash: None,
        }
    }

    /// Entrance of the highlighted (current location) card.
    pub fn featured() -> Self {
        Self {
            particle_count: 30,
            particle_distance: Range::new(150.0, 350.0),
            particle_peak: 0.9,
            particle_in: Phase::new(0.3, Ease::OutCubic),
            particle_out: Phase::new(0.4, Ease::InQuad),
            start_scale: 0.01,
            start_blur: 15.0,
            overshoot_scale: 1.3,
            glow_flash: Glow::new(60.0, GlowTint::Theme { alpha: 1.0 }),
            settle: Phase::new(
                0.7,
                Ease::OutElastic {
                    amplitude: 1.2,
                    period: 0.3,
                },
            ),
            glow_pulse: Glow::new(20.0, GlowTint::Theme { alpha: 0.5 }),
            flash: Some(FlashRecipe {
                peak: 0.9,
                rise: Phase::new(0.2, Ease::InQuad),
                hold: 0.1,
                fall: Phase::new(0.3, Ease::OutCubic),
                lead: 0.2,
            }),
            ..Self::standard()
        }
    }

    fn validate(&self, what: &str) -> FxResult<()> {
        self.particle_size.validate(&format!("{what}.particle_size"))?;
        self.particle_distance
            .validate(&format!("{what}.particle_distance"))?;
        if self.particle_size.min < 0.0 {
            return Err(FxError::config(format!(
                "{what}.particle_size must be >= 0"
            )));
        }
        self.particle_in.validate(&format!("{what}.particle_in"))?;
        self.particle_out.validate(&format!("{what}.particle_out"))?;
        self.blow_out.validate(&format!("{what}.blow_out"))?;
        self.settle.validate(&format!("{what}.settle"))?;
        self.glow_pulse_phase
            .validate(&format!("{what}.glow_pulse_phase"))?;
        if !self.settle_overlap.is_finite() || self.settle_overlap < 0.0 {
            return Err(FxError::config(format!(
                "{what}.settle_overlap must be >= 0"
            )));
        }
        if let Some(flash) = &self.flash {
            flash.rise.validate(&format!("{what}.flash.rise"))?;
            flash.fall.validate(&format!("{what}.flash.fall"))?;
            check_secs("flash hold", flash.hold).map_err(|e| FxError::config(e.to_string()))?;
            check_secs("flash lead", flash.lead).map_err(|e| FxError::config(e.to_string()))?;
        }
        Ok(())
    }
}

/// Rain loop parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RainConfig {
    /// Starting offset of the first drop.
    pub start_y: f64,
    /// Extra offset per drop index, cycling every 10 drops.
    pub start_y_step: f64,
    /// Offset at the end of a fall.
    pub fall_to: f64,
    /// Seconds per fall.
    pub duration: Range,
    /// Start delay.
    pub delay: Range,
}

/// Snow loop parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SnowConfig {
    /// Starting offset of the first flake.
    pub start_y: f64,
    /// Extra offset per flake index, cycling every 10 flakes.
    pub start_y_step: f64,
    /// Offset at the end of a fall.
    pub fall_to: f64,
    /// Seconds per fall.
    pub duration: Range,
    /// Start delay.
    pub delay: Range,
    /// Largest horizontal drift either way.
    pub max_drift: f64,
    /// Largest rotation in degrees.
    pub max_spin: f64,
}

/// Sun pulse parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SunConfig {
    /// Scale at the peak of the pulse.
    pub scale: f64,
    /// Glow at the peak of the pulse.
    pub glow: Glow,
    /// Sun half-cycle.
    pub phase: Phase,
    /// Ray opacity at the peak.
    pub ray_opacity: f64,
    /// Ray half-cycle.
    pub ray_phase: Phase,
    /// Per-ray start offset.
    pub ray_stagger: f64,
}

/// Ambient loop parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AmbientConfig {
    /// Rain.
    pub rain: RainConfig,
    /// Snow.
    pub snow: SnowConfig,
    /// Sun.
    pub sun: SunConfig,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            rain: RainConfig {
                start_y: -50.0,
                start_y_step: 15.0,
                fall_to: 300.0,
                duration: Range::new(0.7, 1.2),
                delay: Range::new(0.0, 2.0),
            },
            snow: SnowConfig {
                start_y: -20.0,
                start_y_step: 15.0,
                fall_to: 300.0,
                duration: Range::new(3.0, 5.0),
                delay: Range::new(0.0, 3.0),
                max_drift: 50.0,
                max_spin: 360.0,
            },
            sun: SunConfig {
                scale: 1.1,
                glow: Glow::new(30.0, GlowTint::Fixed(Rgba::new(255, 193, 7, 0.8))),
                phase: Phase::new(2.0, Ease::InOutSine),
                ray_opacity: 1.0,
                ray_phase: Phase::new(1.5, Ease::InOutSine),
                ray_stagger: 0.1,
            },
        }
    }
}

/// Data refresh pulse parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PulseConfig {
    /// Scale the bounce starts from.
    pub from_scale: f64,
    /// Scale bounce back to 1.
    pub scale_phase: Phase,
    /// Bright glow the pulse starts from.
    pub flash_glow: Glow,
    /// Resting glow the pulse fades to.
    pub rest_glow: Glow,
    /// Glow fade.
    pub glow_phase: Phase,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            from_scale: 0.95,
            scale_phase: Phase::new(0.3, Ease::OutBack { overshoot: 1.5 }),
            flash_glow: Glow::new(15.0, GlowTint::Fixed(Rgba::new(255, 255, 255, 0.5))),
            rest_glow: Glow::new(16.0, GlowTint::Fixed(Rgba::new(0, 0, 0, 0.15))),
            glow_phase: Phase::new(0.8, Ease::OutCubic),
        }
    }
}

/// Hover lift parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HoverConfig {
    /// Vertical offset while hovered.
    pub lift: f64,
    /// Scale while hovered.
    pub scale: f64,
    /// Glow while hovered.
    pub glow: Glow,
    /// Glow after the pointer leaves.
    pub rest_glow: Glow,
    /// Pointer enter.
    pub enter: Phase,
    /// Pointer leave.
    pub leave: Phase,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            lift: -10.0,
            scale: 1.03,
            glow: Glow::new(20.0, GlowTint::Fixed(Rgba::new(0, 0, 0, 0.2))),
            rest_glow: Glow::new(16.0, GlowTint::Fixed(Rgba::new(0, 0, 0, 0.15))),
            enter: Phase::new(0.3, Ease::OutCubic),
            leave: Phase::new(0.3, Ease::InCubic),
        }
    }
}

/// Engine configuration. Every field has a default, so partial JSON documents are accepted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Entrance delay per stagger index, in seconds.
    pub stagger_unit: f64,
    /// Delay between the end of the settle and particle cleanup.
    pub cleanup_grace: f64,
    /// Regular entrance.
    pub standard: EntranceRecipe,
    /// Featured entrance.
    pub featured: EntranceRecipe,
    /// Ambient loops.
    pub ambient: AmbientConfig,
    /// Refresh pulse.
    pub pulse: PulseConfig,
    /// Hover lift.
    pub hover: HoverConfig,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            stagger_unit: 0.7,
            cleanup_grace: 1.0,
            standard: EntranceRecipe::standard(),
            featured: EntranceRecipe::featured(),
            ambient: AmbientConfig::default(),
            pulse: PulseConfig::default(),
            hover: HoverConfig::default(),
        }
    }
}

impl FxConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> FxResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| FxError::config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every duration and range.
    pub fn validate(&self) -> FxResult<()> {
        let secs = |what: &str, v: f64| {
            check_secs(what, v)
                .map(|_| ())
                .map_err(|e| FxError::config(e.to_string()))
        };
        secs("stagger_unit", self.stagger_unit)?;
        secs("cleanup_grace", self.cleanup_grace)?;
        self.standard.validate("standard")?;
        self.featured.validate("featured")?;

        let a = &self.ambient;
        a.rain.duration.validate("ambient.rain.duration")?;
        a.rain.delay.validate("ambient.rain.delay")?;
        a.snow.duration.validate("ambient.snow.duration")?;
        a.snow.delay.validate("ambient.snow.delay")?;
        if a.rain.duration.min <= 0.0 || a.snow.duration.min <= 0.0 {
            return Err(FxError::config("ambient fall durations must be > 0"));
        }
        if a.rain.delay.min < 0.0 || a.snow.delay.min < 0.0 {
            return Err(FxError::config("ambient delays must be >= 0"));
        }
        if a.sun.phase.duration <= 0.0 || a.sun.ray_phase.duration <= 0.0 {
            return Err(FxError::config("sun pulse half-cycles must be > 0"));
        }
        secs("ambient.sun.ray_stagger", a.sun.ray_stagger)?;

        self.pulse.scale_phase.validate("pulse.scale_phase")?;
        self.pulse.glow_phase.validate("pulse.glow_phase")?;
        self.hover.enter.validate("hover.enter")?;
        self.hover.leave.validate("hover.leave")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/orchestrate/config.rs"]
mod tests;
