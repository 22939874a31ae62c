//! The `Sim` struct and its step loop.

use rw_core::{RandomSource, Tick};
use rw_grid::GridMap;
use rw_walk::{EndpointSet, WalkerEnsemble};

use crate::{SimConfig, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<'g, R>` owns the walker ensemble and the current tick and drives the
/// loop: each tick it steps every walker once, reports progress through the
/// observer, and emits interval snapshots of the position arrays.  The core
/// never suspends or blocks — the caller decides how many ticks run and may
/// stop at any tick boundary without corrupting state.
pub struct Sim<'g, R: RandomSource> {
    /// Global configuration (walker count, steps, seed, …).
    pub config: SimConfig,

    /// The current tick — advanced once per step.
    pub tick: Tick,

    /// The walker population being evolved.
    pub walkers: WalkerEnsemble<'g, R>,
}

impl<'g, R: RandomSource> Sim<'g, R> {
    /// Build a simulation: places `config.walkers` walkers on `config.start`.
    ///
    /// # Errors
    ///
    /// Fails if the walker count is zero or the start square is not passable
    /// (see [`rw_walk::WalkError`]).
    pub fn new(
        config:    SimConfig,
        grid:      &'g GridMap,
        rng:       R,
        endpoints: EndpointSet,
    ) -> SimResult<Self> {
        let walkers =
            WalkerEnsemble::with_endpoints(config.walkers, grid, rng, config.start, endpoints)?;
        Ok(Self {
            config,
            tick: Tick::ZERO,
            walkers,
        })
    }

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.tick < self.config.end_tick() {
            self.process_step(observer);
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and frame-at-a-time driving.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_step(observer);
        }
        Ok(())
    }

    fn process_step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.tick;
        observer.on_step_start(now);

        self.walkers.step();

        observer.on_step_end(now, self.walkers.active_count());
        if self.config.snapshot_interval > 0 && now.0.is_multiple_of(self.config.snapshot_interval)
        {
            observer.on_snapshot(now, self.walkers.x(), self.walkers.y());
        }

        self.tick = self.tick + 1;
    }
}
