//! escape — layered-labyrinth escape run.
//!
//! Drops a large walker population on the entry line of a layered labyrinth
//! and marks every open cell on the exit line as an endpoint.  After the run
//! it reports how many walkers escaped and where they came out, as an ASCII
//! histogram over the exit row coordinate.

use std::time::Instant;

use anyhow::{ensure, Result};

use rw_core::{Tick, WalkRng};
use rw_grid::layered;
use rw_sim::{Sim, SimConfig, SimObserver};
use rw_walk::EndpointSet;

// ── Constants ─────────────────────────────────────────────────────────────────

const LAYERS:  usize = 2;
const WIDTH:   usize = 3;
const HEIGHT:  usize = 5;
const WALKERS: usize = 50_000;
const STEPS:   u64   = 2_000;
const SEED:    u64   = 1234;

const PROGRESS_EVERY: u64   = 500;
const HISTOGRAM_BINS: usize = 16;

// ── Progress printer ──────────────────────────────────────────────────────────

struct Progress;

impl SimObserver for Progress {
    fn on_step_end(&mut self, tick: Tick, active: usize) {
        if (tick.0 + 1).is_multiple_of(PROGRESS_EVERY) {
            println!("  {}: {active} walkers still moving", tick.offset(1));
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== escape — layered labyrinth ===");
    println!("Walkers: {WALKERS}  |  Steps: {STEPS}  |  Seed: {SEED}");
    println!();

    let grid = layered(LAYERS, WIDTH, HEIGHT);
    println!(
        "Grid: {}×{}, {} open cells",
        grid.rows(),
        grid.cols(),
        grid.open_count()
    );

    // Entry line one column in from the right edge, exit line one column in
    // from the left; start everyone in the middle of the entry line.
    let entry = grid.open_in_column(grid.cols() - 2);
    ensure!(!entry.is_empty(), "no open cells on the entry line");
    let r0 = entry[entry.len() / 2];

    let exits = grid.open_in_column(1);
    ensure!(!exits.is_empty(), "no open cells on the exit line");
    let endpoints: EndpointSet = exits.iter().copied().collect();
    println!(
        "Start at {:?}, {} endpoint cells on the exit line",
        r0,
        endpoints.len()
    );
    println!();

    let config = SimConfig {
        walkers:           WALKERS,
        start:             r0,
        total_steps:       STEPS,
        seed:              SEED,
        snapshot_interval: 0,
    };
    let rng = WalkRng::seed_from(config.seed);
    let mut sim = Sim::new(config, &grid, rng, endpoints)?;

    let t0 = Instant::now();
    sim.run(&mut Progress)?;
    let elapsed = t0.elapsed();

    // ── Escape statistics ─────────────────────────────────────────────────

    let mask = sim.walkers.not_finished();
    let escaped: Vec<i32> = sim
        .walkers
        .x()
        .iter()
        .zip(&mask)
        .filter(|&(_, &moving)| !moving)
        .map(|(&x, _)| x)
        .collect();

    println!();
    println!(
        "Escaped: {} / {} walkers ({:.1} %)",
        escaped.len(),
        WALKERS,
        100.0 * escaped.len() as f64 / WALKERS as f64
    );

    if !escaped.is_empty() {
        println!();
        println!("Exit-row positions (bin → count):");
        let bin_width = grid.rows().div_ceil(HISTOGRAM_BINS);
        let mut bins = vec![0usize; HISTOGRAM_BINS];
        for &x in &escaped {
            bins[x as usize / bin_width] += 1;
        }
        let peak = bins.iter().copied().max().unwrap_or(1).max(1);
        for (b, &count) in bins.iter().enumerate() {
            let bar = "#".repeat(count * 40 / peak);
            println!(
                "  x {:>3}-{:<3} {:>6}  {bar}",
                b * bin_width,
                ((b + 1) * bin_width - 1).min(grid.rows() - 1),
                count
            );
        }
    }

    println!();
    println!(
        "Simulation complete in {:.3} s ({:.1} ns per walker-step)",
        elapsed.as_secs_f64(),
        elapsed.as_nanos() as f64 / (WALKERS as u64 * STEPS) as f64
    );

    Ok(())
}
