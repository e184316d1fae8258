pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::vector::{perpendicular, random_in_range, NVec2};
pub use simulation::states::{Body, BodySnapshot, System};
pub use simulation::params::{CoincidentPolicy, Parameters};
pub use simulation::collisions::{resolve_collisions, resolve_pair, CollisionStats, PairOutcome};
pub use simulation::forces::{AccelSet, Acceleration, UniformField};
pub use simulation::integrator::euler_integrator;
pub use simulation::engine::{Simulation, StepReport};
pub use simulation::scenario::{build_scenario, build_seeded_scenario, scenario_rng};

pub use configuration::config::{ScenarioConfig, SimulationConfig, ForcesConfig, BodyConfig};
pub use configuration::error::ConfigError;

pub use visualization::frame::{frame_summary, run_headless, FrameLogger, FrameRecorder, FrameSummary, Renderer};

pub use benchmark::benchmark::{bench_step, bench_step_curve};
