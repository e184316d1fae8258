//! Runtime parameters for the simulation
//!
//! `Parameters` holds the plane size, the initial population and the
//! policy for the one numeric hazard in the collision code

use rand::rngs::StdRng;
use serde::Deserialize;

use crate::configuration::error::ConfigError;
use super::scenario::scenario_rng;

pub const DEFAULT_BODY_COUNT: usize = 50;

/// Random bodies spawn this far in from every wall
pub const SPAWN_MARGIN: f64 = 50.0;

/// What to do when two bodies share the exact same centre and the
/// collision normal would divide by zero
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoincidentPolicy {
    #[serde(rename = "skip")] // leave the pair alone this step
    #[default]
    Skip,

    #[serde(rename = "propagate")] // divide anyway and let NaN/inf flow into the pair
    Propagate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub width: f64,                    // plane width
    pub height: f64,                   // plane height
    pub body_count: usize,             // random bodies spawned at construction
    pub seed: Option<u64>,             // rng seed, entropy when absent
    pub coincident: CoincidentPolicy,  // degenerate-normal handling
}

impl Parameters {
    pub fn new(width: f64, height: f64, body_count: usize) -> Self {
        Self {
            width,
            height,
            body_count,
            seed: None,
            coincident: CoincidentPolicy::default(),
        }
    }

    /// Rng for spawning bodies, seeded from `seed` when set
    pub fn rng(&self) -> StdRng {
        scenario_rng(self.seed)
    }

    /// Width and height must both be finite and positive
    pub fn validate_dimensions(&self) -> Result<(), ConfigError> {
        let ok = |d: f64| d.is_finite() && d > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}
