//! Build a ready-to-step `Simulation` from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! `Simulation`: random bodies first, explicit bodies appended in file
//! order, then the configured acceleration terms

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::configuration::config::ScenarioConfig;
use crate::configuration::error::ConfigError;
use super::engine::{spawn_random_bodies, Simulation};
use super::forces::{AccelSet, UniformField};
use super::states::Body;

/// Seeded `StdRng` when `seed` is given, entropy otherwise
pub fn scenario_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Validate `cfg` and build the simulation it describes, drawing all
/// randomness from `rng`
pub fn build_scenario<R: Rng + ?Sized>(cfg: &ScenarioConfig, rng: &mut R) -> Result<Simulation, ConfigError> {
    cfg.validate()?;
    let parameters = cfg.parameters();

    let mut bodies = spawn_random_bodies(&parameters, parameters.body_count, rng);
    for (index, bc) in cfg.bodies.iter().enumerate() {
        let (x, v) = bc.state().ok_or_else(|| ConfigError::InvalidBody {
            index,
            reason: "malformed position or velocity".to_string(),
        })?;
        bodies.push(Body::new(x, v, bc.radius));
    }

    let mut forces = AccelSet::new();
    if let Some(g) = cfg.gravity()? {
        forces = forces.with(UniformField { g });
    }

    debug!(
        random = parameters.body_count,
        explicit = cfg.bodies.len(),
        forces = forces.len(),
        "scenario built"
    );

    Ok(Simulation::from_bodies(parameters, bodies)?.with_forces(forces))
}

/// `build_scenario` with the rng taken from the config's own seed
pub fn build_seeded_scenario(cfg: &ScenarioConfig) -> Result<Simulation, ConfigError> {
    let mut rng = cfg.parameters().rng();
    build_scenario(cfg, &mut rng)
}
