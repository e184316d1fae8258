//! Renderer seam and the headless driver loop
//!
//! Drawing itself lives outside this crate. A renderer only receives the
//! per-frame list of `(position, radius)` snapshots; the driver calls
//! `Simulation::step` and then `Renderer::draw`, once per frame.

use std::thread;
use std::time::Duration;

use tracing::info;

use crate::simulation::engine::Simulation;
use crate::simulation::states::BodySnapshot;

/// Anything that can consume one frame of body snapshots
pub trait Renderer {
    fn draw(&mut self, frame: u64, bodies: &[BodySnapshot]);
}

/// Logs a short summary of every `every`-th frame
pub struct FrameLogger {
    pub every: u64,
    pub width: f64,
    pub height: f64,
}

impl FrameLogger {
    pub fn new(every: u64, width: f64, height: f64) -> Self {
        Self {
            every: every.max(1),
            width,
            height,
        }
    }
}

/// Counts reported for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameSummary {
    pub bodies: usize,
    pub outside: usize,    // centre outside the plane
    pub non_finite: usize, // NaN or infinite centre
}

/// Summarise a frame against a `width` x `height` plane
/// A non-finite centre is counted only as `non_finite`
pub fn frame_summary(bodies: &[BodySnapshot], width: f64, height: f64) -> FrameSummary {
    let mut summary = FrameSummary {
        bodies: bodies.len(),
        ..Default::default()
    };
    for b in bodies {
        let p = b.position;
        if !(p.x.is_finite() && p.y.is_finite()) {
            summary.non_finite += 1;
        } else if p.x < 0.0 || p.y < 0.0 || p.x > width || p.y > height {
            summary.outside += 1;
        }
    }
    summary
}

impl Renderer for FrameLogger {
    fn draw(&mut self, frame: u64, bodies: &[BodySnapshot]) {
        if frame % self.every != 0 {
            return;
        }
        let s = frame_summary(bodies, self.width, self.height);
        info!(frame, bodies = s.bodies, outside = s.outside, non_finite = s.non_finite, "frame");
    }
}

/// Keeps every frame in memory
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub frames: Vec<Vec<BodySnapshot>>,
}

impl Renderer for FrameRecorder {
    fn draw(&mut self, _frame: u64, bodies: &[BodySnapshot]) {
        self.frames.push(bodies.to_vec());
    }
}

/// Step-then-draw loop
/// - `steps`: number of frames, `None` runs until the process is stopped
/// - `tick`: sleep between frames (e.g. ~16ms for 60 Hz), `None` runs flat out
///
/// Returns the number of frames drawn
pub fn run_headless<R: Renderer + ?Sized>(
    sim: &mut Simulation,
    renderer: &mut R,
    steps: Option<u64>,
    tick: Option<Duration>,
) -> u64 {
    let mut frames = 0;
    while steps.map_or(true, |n| frames < n) {
        let report = sim.step();
        renderer.draw(report.step, &sim.snapshot());
        frames += 1;

        if let Some(tick) = tick {
            thread::sleep(tick);
        }
    }
    frames
}
