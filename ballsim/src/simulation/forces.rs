//! External acceleration sources
//!
//! Each term writes its contribution into a per-body buffer; the engine
//! then adds the summed buffer to every body's `a` before integration.
//! An empty set leaves the bodies exactly as the collision/wall model wants.

use super::states::System;
use super::vector::NVec2;

/// Collection of acceleration terms (uniform gravity, etc.)
/// Contributions of all terms are summed per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]);
}

/// Same acceleration for every body, independent of position or size
pub struct UniformField {
    pub g: NVec2,
}

impl Acceleration for UniformField {
    fn acceleration(&self, _sys: &System, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a += self.g;
        }
    }
}
