use ballsim::{build_seeded_scenario, ScenarioConfig};
use ballsim::{run_headless, FrameLogger};
use ballsim::{bench_step, bench_step_curve};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;
use std::time::Duration;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BenchMode {
    /// Fixed set of body counts
    Sweep,
    /// CSV over a fine range of body counts
    Curve,
}

#[derive(Parser, Debug)]
#[command(about = "Bouncing bodies with elastic collisions in a bounded plane")]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Plane width, overrides the scenario
    #[arg(long)]
    width: Option<f64>,

    /// Plane height, overrides the scenario
    #[arg(long)]
    height: Option<f64>,

    /// Number of random bodies, overrides the scenario
    #[arg(long)]
    bodies: Option<usize>,

    /// RNG seed, overrides the scenario
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many steps, run forever when omitted
    #[arg(long)]
    steps: Option<u64>,

    /// Pace the loop at this many frames per second, 0 runs flat out
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Log a frame summary every N frames
    #[arg(long, default_value_t = 60)]
    log_every: u64,

    /// Run the step benchmark instead
    #[arg(long, value_enum)]
    bench: Option<BenchMode>,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let mut cfg = ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    let sim = &mut cfg.simulation;
    if let Some(width) = args.width {
        sim.width = width;
    }
    if let Some(height) = args.height {
        sim.height = height;
    }
    if let Some(bodies) = args.bodies {
        sim.body_count = bodies;
    }
    if args.seed.is_some() {
        sim.seed = args.seed;
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if let Some(mode) = args.bench {
        match mode {
            BenchMode::Sweep => bench_step()?,
            BenchMode::Curve => bench_step_curve()?,
        }
        return Ok(());
    }

    let cfg = load_scenario(&args)?;
    let mut sim = build_seeded_scenario(&cfg).context("invalid scenario")?;

    info!(
        bodies = sim.bodies().len(),
        width = sim.width(),
        height = sim.height(),
        seed = ?sim.parameters().seed,
        "starting simulation"
    );

    let tick = (args.fps > 0.0).then(|| Duration::from_secs_f64(1.0 / args.fps));
    let mut renderer = FrameLogger::new(args.log_every, sim.width(), sim.height());
    let frames = run_headless(&mut sim, &mut renderer, args.steps, tick);

    info!(frames, "simulation finished");
    Ok(())
}
