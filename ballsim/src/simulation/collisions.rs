//! Pairwise elastic collision resolution
//!
//! Every unordered pair is visited once per step, outer index ascending and
//! inner index from outer + 1 ascending. Pairs are resolved immediately, so a
//! body caught in two overlaps sees the first result when the second one is
//! computed.
//!
//! Within a pair the later body in the list is the *mover*: it is snapped
//! back to touching distance, measured from the earlier body (the *anchor*),
//! which keeps its position. Radius stands in for mass.

use tracing::debug;

use super::params::CoincidentPolicy;
use super::states::{Body, System};
use super::vector::perpendicular;

/// Result of checking a single pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    Separate,   // no overlap, nothing touched
    Resolved,   // overlap corrected and velocities exchanged
    Coincident, // centres coincide; handled per `CoincidentPolicy`
}

/// Counts from one sweep over all pairs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub contacts: usize,   // pairs resolved
    pub coincident: usize, // pairs with a zero-length normal
}

/// Check one pair and, if the circles touch or overlap, resolve it.
///
/// `mover` is repositioned to `anchor.x + n * (r_mover + r_anchor)`; both
/// velocities get the 1D elastic formula along the normal `n` and keep their
/// tangential part.
pub fn resolve_pair(mover: &mut Body, anchor: &mut Body, policy: CoincidentPolicy) -> PairOutcome {
    let ri = mover.radius();
    let rj = anchor.radius();
    let r_sum = ri + rj;

    let delta = mover.x - anchor.x;
    let distance = delta.norm();
    if distance > r_sum {
        return PairOutcome::Separate;
    }

    let degenerate = distance == 0.0;
    if degenerate && policy == CoincidentPolicy::Skip {
        return PairOutcome::Coincident;
    }

    // Propagate divides by zero here on purpose
    let n = delta / distance;
    let t = perpendicular(&n);

    mover.x = anchor.x + n * r_sum;

    let vi_n = mover.v.dot(&n);
    let vj_n = anchor.v.dot(&n);
    let vi_t = mover.v.dot(&t);
    let vj_t = anchor.v.dot(&t);

    let vi_n_after = (vi_n * (ri - rj) + 2.0 * rj * vj_n) / r_sum;
    let vj_n_after = (vj_n * (rj - ri) + 2.0 * ri * vi_n) / r_sum;

    mover.v = n * vi_n_after + t * vi_t;
    anchor.v = n * vj_n_after + t * vj_t;

    if degenerate {
        PairOutcome::Coincident
    } else {
        PairOutcome::Resolved
    }
}

/// Sweep every pair once, sequentially, in list order
pub fn resolve_collisions(sys: &mut System, policy: CoincidentPolicy) -> CollisionStats {
    let mut stats = CollisionStats::default();
    let n = sys.bodies.len();

    for i in 0..n {
        // left[i] is the anchor, everything in `right` comes later in the list
        let (left, right) = sys.bodies.split_at_mut(i + 1);
        let anchor = &mut left[i];

        for (k, mover) in right.iter_mut().enumerate() {
            match resolve_pair(mover, anchor, policy) {
                PairOutcome::Separate => {}
                PairOutcome::Resolved => stats.contacts += 1,
                PairOutcome::Coincident => {
                    debug!(anchor = i, mover = i + 1 + k, ?policy, "coincident body centres");
                    stats.coincident += 1;
                }
            }
        }
    }

    stats
}
