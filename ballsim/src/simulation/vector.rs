//! 2D vector helpers on top of `nalgebra`
//!
//! `NVec2` already gives us add/sub, scalar mul/div, `dot` and `norm`.
//! This module adds the two operations the collision code needs that
//! nalgebra doesn't spell directly: the 90° tangent and a uniform random
//! vector inside a box

use nalgebra::Vector2;
use rand::Rng;

pub type NVec2 = Vector2<f64>;

/// Rotate `v` by 90°: (x, y) -> (-y, x)
pub fn perpendicular(v: &NVec2) -> NVec2 {
    NVec2::new(-v.y, v.x)
}

/// Uniform number in [min, max)
/// Written as `min + u * (max - min)` so an empty or inverted range never panics
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

/// Vector with each component drawn independently from its own range
pub fn random_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
) -> NVec2 {
    let x = random_between(rng, min_x, max_x);
    let y = random_between(rng, min_y, max_y);
    NVec2::new(x, y)
}
