//! The owned simulation object
//!
//! `Simulation` bundles the body system, the runtime parameters and the
//! external acceleration set, and advances them one discrete step at a time.
//! The driver decides when to call `step()`; nothing here knows about frames
//! or wall-clock time.

use rand::Rng;
use tracing::{debug, warn};

use crate::configuration::error::ConfigError;
use super::collisions::{resolve_collisions, CollisionStats};
use super::forces::AccelSet;
use super::integrator::euler_integrator;
use super::params::{Parameters, SPAWN_MARGIN};
use super::states::{Body, BodySnapshot, System};
use super::vector::{random_in_range, NVec2};

/// What happened during one `step()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub step: u64,         // step number just completed, starting at 1
    pub contacts: usize,   // pairs resolved
    pub coincident: usize, // pairs with coincident centres
}

pub struct Simulation {
    system: System,
    parameters: Parameters,
    forces: AccelSet,
    accel_buf: Vec<NVec2>, // scratch for `forces`, reused across steps
}

impl Simulation {
    /// Simulation over an explicit body list
    pub fn from_bodies(parameters: Parameters, bodies: Vec<Body>) -> Result<Self, ConfigError> {
        parameters.validate_dimensions()?;
        if bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }

        debug!(
            bodies = bodies.len(),
            width = parameters.width,
            height = parameters.height,
            "simulation created"
        );

        Ok(Self {
            system: System { bodies, t: 0 },
            parameters,
            forces: AccelSet::new(),
            accel_buf: Vec::new(),
        })
    }

    /// Simulation with `parameters.body_count` random bodies placed in
    /// `[50, width - 50] x [50, height - 50]`
    pub fn with_random_bodies<R: Rng + ?Sized>(parameters: Parameters, rng: &mut R) -> Result<Self, ConfigError> {
        parameters.validate_dimensions()?;
        let bodies = spawn_random_bodies(&parameters, parameters.body_count, rng);
        Self::from_bodies(parameters, bodies)
    }

    /// Replace the external acceleration set
    pub fn with_forces(mut self, forces: AccelSet) -> Self {
        self.forces = forces;
        self
    }

    /// Advance one unit step: external accelerations, collisions, then
    /// integration and wall bounce for every body in list order
    pub fn step(&mut self) -> StepReport {
        self.apply_forces();

        let stats = self.resolve_collisions();
        euler_integrator(&mut self.system, self.parameters.width, self.parameters.height);
        self.system.t += 1;

        StepReport {
            step: self.system.t,
            contacts: stats.contacts,
            coincident: stats.coincident,
        }
    }

    /// One sequential sweep over every pair, without integrating
    pub fn resolve_collisions(&mut self) -> CollisionStats {
        resolve_collisions(&mut self.system, self.parameters.coincident)
    }

    fn apply_forces(&mut self) {
        if self.forces.is_empty() {
            return;
        }
        self.accel_buf.resize(self.system.bodies.len(), NVec2::zeros());
        self.forces.accumulate_accels(&self.system, &mut self.accel_buf);
        for (b, a) in self.system.bodies.iter_mut().zip(self.accel_buf.iter()) {
            b.add_acceleration(*a);
        }
    }

    /// Read-only view for the renderer, in list order
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.system.bodies.iter().map(Body::snapshot).collect()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    /// Mutable access for drivers that inject per-step input (e.g. `add_acceleration`)
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.system.bodies
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn width(&self) -> f64 {
        self.parameters.width
    }

    pub fn height(&self) -> f64 {
        self.parameters.height
    }

    /// Completed steps
    pub fn steps(&self) -> u64 {
        self.system.t
    }
}

/// `count` random bodies placed inside the spawn margin
pub(crate) fn spawn_random_bodies<R: Rng + ?Sized>(parameters: &Parameters, count: usize, rng: &mut R) -> Vec<Body> {
    let (w, h) = (parameters.width, parameters.height);
    if w <= 2.0 * SPAWN_MARGIN || h <= 2.0 * SPAWN_MARGIN {
        warn!(width = w, height = h, margin = SPAWN_MARGIN, "plane is smaller than the spawn margin, bodies may start outside it");
    }

    (0..count)
        .map(|_| {
            let p = random_in_range(rng, SPAWN_MARGIN, w - SPAWN_MARGIN, SPAWN_MARGIN, h - SPAWN_MARGIN);
            Body::random(rng, p.x, p.y)
        })
        .collect()
}
