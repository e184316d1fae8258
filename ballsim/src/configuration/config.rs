//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`SimulationConfig`] – plane size, random population, seed, coincident-centre policy
//! - [`ForcesConfig`]     – optional external accelerations
//! - [`BodyConfig`]       – explicit bodies appended after the random ones
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! simulation:
//!   width: 800.0
//!   height: 600.0
//!   body_count: 50       # default 50
//!   seed: 42             # optional, entropy when missing
//!   coincident: skip     # or "propagate"
//!
//! forces:
//!   gravity: [0.0, 0.05] # optional uniform acceleration per step
//!
//! bodies:
//!   - x: [100.0, 100.0]
//!     v: [1.0, 0.0]
//!     radius: 20.0
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::error::ConfigError;
use crate::simulation::params::{CoincidentPolicy, Parameters, DEFAULT_BODY_COUNT};
use crate::simulation::vector::NVec2;

fn default_body_count() -> usize {
    DEFAULT_BODY_COUNT
}

/// Plane and population settings
#[derive(Deserialize, Debug, Clone)]
pub struct SimulationConfig {
    pub width: f64,  // plane width
    pub height: f64, // plane height
    #[serde(default = "default_body_count")]
    pub body_count: usize, // random bodies to spawn
    #[serde(default)]
    pub seed: Option<u64>, // deterministic seed to make runs reproducible
    #[serde(default)]
    pub coincident: CoincidentPolicy, // what to do with a zero-length collision normal
}

/// External accelerations, all optional
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ForcesConfig {
    #[serde(default)]
    pub gravity: Option<Vec<f64>>, // uniform acceleration [x, y] added every step
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>,  // initial position
    pub v: Vec<f64>,  // initial velocity, units per step
    pub radius: f64,  // circle radius, also used as mass
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub forces: ForcesConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Default scenario: `body_count` random bodies on a `width` x `height` plane
    pub fn new(width: f64, height: f64, body_count: usize) -> Self {
        Self {
            simulation: SimulationConfig {
                width,
                height,
                body_count,
                seed: None,
                coincident: CoincidentPolicy::default(),
            },
            forces: ForcesConfig::default(),
            bodies: Vec::new(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Runtime parameters described by this config
    pub fn parameters(&self) -> Parameters {
        let s = &self.simulation;
        Parameters {
            width: s.width,
            height: s.height,
            body_count: s.body_count,
            seed: s.seed,
            coincident: s.coincident,
        }
    }

    /// Check everything that would otherwise produce a broken simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parameters().validate_dimensions()?;

        if self.simulation.body_count == 0 && self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }

        for (index, bc) in self.bodies.iter().enumerate() {
            bc.validate(index)?;
        }

        self.gravity()?;
        Ok(())
    }

    /// Parsed gravity vector, `None` when not configured
    pub fn gravity(&self) -> Result<Option<NVec2>, ConfigError> {
        let Some(g) = &self.forces.gravity else {
            return Ok(None);
        };
        let g = vec2(g).ok_or_else(|| ConfigError::InvalidForce {
            name: "gravity",
            reason: format!("expected 2 finite components, got {g:?}"),
        })?;
        Ok(Some(g))
    }
}

impl BodyConfig {
    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBody { index, reason };

        if vec2(&self.x).is_none() {
            return Err(invalid(format!("position needs 2 finite components, got {:?}", self.x)));
        }
        if vec2(&self.v).is_none() {
            return Err(invalid(format!("velocity needs 2 finite components, got {:?}", self.v)));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(invalid(format!("radius must be finite and positive, got {}", self.radius)));
        }
        Ok(())
    }

    /// Position and velocity as vectors; only meaningful after `validate`
    pub fn state(&self) -> Option<(NVec2, NVec2)> {
        Some((vec2(&self.x)?, vec2(&self.v)?))
    }
}

fn vec2(c: &[f64]) -> Option<NVec2> {
    match c {
        [x, y] if x.is_finite() && y.is_finite() => Some(NVec2::new(*x, *y)),
        _ => None,
    }
}
