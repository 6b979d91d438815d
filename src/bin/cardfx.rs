use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use cardfx::{
    AmbientKind, EffectKind, EffectRequest, EntranceVariant, FxConfig, FxEvent, FxSession,
    HoverPhase, Rgba, Role,
};

#[derive(Parser, Debug)]
#[command(name = "cardfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one effect on a synthetic card and print a JSON line per frame.
    Simulate(SimulateArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EffectArg {
    Entrance,
    Featured,
    Rain,
    Snow,
    Sun,
    Pulse,
    HoverEnter,
    HoverLeave,
}

impl EffectArg {
    fn kind(self) -> EffectKind {
        match self {
            Self::Entrance => EffectKind::Entrance(EntranceVariant::Standard),
            Self::Featured => EffectKind::Entrance(EntranceVariant::Featured),
            Self::Rain => EffectKind::Ambient(AmbientKind::Rain),
            Self::Snow => EffectKind::Ambient(AmbientKind::Snow),
            Self::Sun => EffectKind::Ambient(AmbientKind::Sun),
            Self::Pulse => EffectKind::UpdatePulse,
            Self::HoverEnter => EffectKind::Hover(HoverPhase::Enter),
            Self::HoverLeave => EffectKind::Hover(HoverPhase::Leave),
        }
    }

    /// Decorative children the synthetic card is built with.
    fn decorations(self, count: usize) -> Vec<Role> {
        match self {
            Self::Rain => vec![Role::RainDrop; count],
            Self::Snow => vec![Role::SnowFlake; count],
            Self::Sun => std::iter::once(Role::Sun)
                .chain(std::iter::repeat_n(Role::SunRay, count))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Effect to play.
    #[arg(long, value_enum, default_value_t = EffectArg::Entrance)]
    effect: EffectArg,

    /// Stagger index of the card within its batch.
    #[arg(long, default_value_t = 0)]
    stagger: u32,

    /// RNG seed for particle and ambient jitter.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Simulated seconds.
    #[arg(long, default_value_t = 4.0)]
    seconds: f64,

    /// Decorative children for ambient effects.
    #[arg(long, default_value_t = 8)]
    decorations: usize,

    /// Override the recipe's particle count.
    #[arg(long)]
    particles: Option<usize>,

    /// Print every n-th frame only.
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Engine configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    /// Wall time of the frame, `frame * dt`.
    t: f64,
    /// Engine clock; holds still while nothing is animating.
    clock: f64,
    events: &'a [FxEvent],
    card: Option<cardfx::ElementSnapshot>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<FxConfig> {
    let Some(path) = path else {
        return Ok(FxConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    FxConfig::from_json_str(&text).with_context(|| format!("parse config '{}'", path.display()))
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be > 0 (got {})", args.fps);
    }
    if !(args.seconds.is_finite() && args.seconds >= 0.0) {
        anyhow::bail!("--seconds must be >= 0 (got {})", args.seconds);
    }
    let config = load_config(args.config.as_ref())?;
    let mut session = FxSession::with_seed(config, args.seed);

    let card = session.stage_mut().create_container(Rgba::new(13, 202, 240, 1.0));
    for role in args.effect.decorations(args.decorations) {
        session.stage_mut().add_decoration(card, role);
    }

    let mut req = EffectRequest::new(args.effect.kind(), card).with_stagger(args.stagger);
    if let Some(n) = args.particles {
        req = req.with_particles(n);
    }
    let effect = session
        .play(req)
        .with_context(|| format!("effect {:?} did not start", args.effect))?;
    tracing::info!(?effect, "simulation started");

    let dt = 1.0 / args.fps;
    let frames = (args.seconds * args.fps).round() as u64;
    let every = args.every.max(1);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for frame in 1..=frames {
        let events = session.tick(dt);
        if frame % every != 0 && events.is_empty() && frame != frames {
            continue;
        }
        let record = FrameRecord {
            frame,
            t: frame as f64 * dt,
            clock: session.now(),
            events: &events,
            card: session.stage().snapshot(card),
        };
        serde_json::to_writer(&mut out, &record).context("serialize frame")?;
        writeln!(out).context("write frame")?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}
