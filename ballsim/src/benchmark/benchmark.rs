use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::error::ConfigError;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;

/// Helper to build a seeded simulation of size `n`
/// The plane grows with `n` so density stays roughly that of 50 bodies on 800x600
fn make_simulation(n: usize) -> Result<Simulation, ConfigError> {
    let scale = (n as f64 / 50.0).sqrt().max(1.0);
    let params = Parameters::new(800.0 * scale, 600.0 * scale, n);
    let mut rng = StdRng::seed_from_u64(42);
    Simulation::with_random_bodies(params, &mut rng)
}

/// Average time of one `Simulation::step` for a range of body counts
pub fn bench_step() -> Result<(), ConfigError> {
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 20;

    for n in ns {
        let mut sim = make_simulation(n)?;

        // Warm-up
        sim.step();

        let t0 = Instant::now();
        let mut contacts = 0;
        for _ in 0..steps {
            contacts += sim.step().contacts;
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {:10.6} ms, contacts/step = {:6.1}", per_step * 1000.0, contacts as f64 / steps as f64);
    }
    Ok(())
}

/// Same sweep in finer increments
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() -> Result<(), ConfigError> {
    println!("N,step_ms");

    for n in (50..=3200).step_by(50) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 800 { 20 } else { 3 };
        let mut sim = make_simulation(n)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}
