//! Fixed unit-step integrator for the body system
//!
//! One call advances every body by one step with semi-implicit Euler and
//! then applies the wall bounce, body by body in list order

use super::states::System;

/// Advance all bodies one step: integrate, then reflect off the walls
/// of a `width` x `height` plane
pub fn euler_integrator(sys: &mut System, width: f64, height: f64) {
    for b in sys.bodies.iter_mut() {
        b.integrate();
        b.reflect_off_bounds(width, height);
    }
}
