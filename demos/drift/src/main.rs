//! drift — free diffusion on a circular grid.
//!
//! Runs M walkers from the center of a large circular area with no
//! endpoints, then compares the measured RMS displacement against the
//! analytic value for an unconstrained 2D walk, `sqrt(4n/3)`.  The two agree
//! as long as the cloud stays far from the circular wall, which the chosen
//! radius guarantees for this step count.

use std::time::Instant;

use anyhow::Result;

use rw_core::{Tick, WalkRng};
use rw_grid::circular;
use rw_sim::{Sim, SimConfig, SimObserver};
use rw_walk::EndpointSet;

// ── Constants ─────────────────────────────────────────────────────────────────

const WALKERS:        usize = 10_000;
const STEPS:          u64   = 500;
const SEED:           u64   = 1234;
const RADIUS:         usize = 100;
const PADDING:        usize = 2;
const SNAPSHOT_EVERY: u64   = 100;

// ── RMS sampler ───────────────────────────────────────────────────────────────

/// Records RMS displacement from the start cell at every snapshot.
struct RmsSampler {
    x0:   i32,
    y0:   i32,
    rows: Vec<(u64, f64)>,
}

impl SimObserver for RmsSampler {
    fn on_snapshot(&mut self, tick: Tick, x: &[i32], y: &[i32]) {
        let mean_r2 = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| {
                let dx = (xi - self.x0) as f64;
                let dy = (yi - self.y0) as f64;
                dx * dx + dy * dy
            })
            .sum::<f64>()
            / x.len() as f64;
        // Snapshot fires after the update for this tick, so `tick` counts
        // completed steps starting from 0.
        self.rows.push((tick.0 + 1, mean_r2.sqrt()));
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== drift — free diffusion on a circular grid ===");
    println!("Walkers: {WALKERS}  |  Steps: {STEPS}  |  Seed: {SEED}");
    println!();

    let grid = circular(RADIUS, PADDING);
    let center = ((grid.rows() / 2) as i32, (grid.cols() / 2) as i32);
    println!(
        "Grid: {}×{}, {} open cells, start at {:?}",
        grid.rows(),
        grid.cols(),
        grid.open_count(),
        center
    );

    let config = SimConfig {
        walkers:           WALKERS,
        start:             center,
        total_steps:       STEPS,
        seed:              SEED,
        snapshot_interval: SNAPSHOT_EVERY,
    };

    let rng = WalkRng::seed_from(config.seed);
    let mut sim = Sim::new(config, &grid, rng, EndpointSet::new())?;

    let mut sampler = RmsSampler {
        x0:   center.0,
        y0:   center.1,
        rows: Vec::new(),
    };

    let t0 = Instant::now();
    sim.run(&mut sampler)?;
    let elapsed = t0.elapsed();

    println!();
    println!("{:>6} {:>12} {:>12} {:>8}", "step", "rms", "sqrt(4n/3)", "ratio");
    println!("{}", "-".repeat(42));
    for &(n, rms) in &sampler.rows {
        let analytic = (4.0 * n as f64 / 3.0).sqrt();
        println!(
            "{:>6} {:>12.3} {:>12.3} {:>8.3}",
            n,
            rms,
            analytic,
            rms / analytic
        );
    }

    println!();
    println!(
        "Simulation complete in {:.3} s ({:.1} ns per walker-step)",
        elapsed.as_secs_f64(),
        elapsed.as_nanos() as f64 / (WALKERS as u64 * STEPS) as f64
    );

    Ok(())
}
