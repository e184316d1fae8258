//! Core state types for the bouncing-body simulation.
//!
//! - `Body`         one circular particle (position, velocity, acceleration, radius)
//! - `System`       the ordered body list plus the number of completed steps
//! - `BodySnapshot` the read-only view handed to a renderer each frame

use rand::Rng;

use super::vector::{random_between, random_in_range, NVec2};

/// Radius range for randomly spawned bodies, [min, max)
pub const MIN_RADIUS: f64 = 5.0;
pub const MAX_RADIUS: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position (centre)
    pub v: NVec2, // velocity, units per step
    pub a: NVec2, // acceleration for the current step only
    radius: f64,  // fixed at construction
}

impl Body {
    /// Body with explicit state and zero acceleration
    pub fn new(x: NVec2, v: NVec2, radius: f64) -> Self {
        Self {
            x,
            v,
            a: NVec2::zeros(),
            radius,
        }
    }

    /// Body at `(x, y)` with velocity in [-1, 1)² and radius in [5, 50)
    pub fn random<R: Rng + ?Sized>(rng: &mut R, x: f64, y: f64) -> Self {
        let v = random_in_range(rng, -1.0, 1.0, -1.0, 1.0);
        let radius = random_between(rng, MIN_RADIUS, MAX_RADIUS);
        Self::new(NVec2::new(x, y), v, radius)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Accumulate external acceleration, consumed by the next `integrate`
    pub fn add_acceleration(&mut self, a: NVec2) {
        self.a += a;
    }

    /// Semi-implicit Euler with a unit step: x += v, v += a, a = 0
    pub fn integrate(&mut self) {
        self.x += self.v;
        self.v += self.a;
        self.a = NVec2::zeros();
    }

    /// Flip the velocity component of any axis whose wall the body touches.
    /// Position is left alone, so a fast body can overshoot for a frame
    pub fn reflect_off_bounds(&mut self, width: f64, height: f64) {
        if self.x.x - self.radius <= 0.0 || self.x.x + self.radius >= width {
            self.v.x = -self.v.x;
        }
        if self.x.y - self.radius <= 0.0 || self.x.y + self.radius >= height {
            self.v.y = -self.v.y;
        }
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            position: self.x,
            radius: self.radius,
        }
    }

    /// True when every component of position, velocity and acceleration is finite
    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).chain(self.a.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // insertion order, only used to visit each pair once
    pub t: u64,            // completed steps
}

/// What the renderer gets for each body, every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub position: NVec2,
    pub radius: f64,
}
