//! Simulation observer trait for progress reporting and data collection.

use rw_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, tick: Tick, active: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {active} walkers still moving");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any walker moves.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `active` is the number of walkers still eligible to move after this
    /// tick's update.
    fn on_step_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval` ticks)
    /// with read-only views of the position arrays.
    fn on_snapshot(&mut self, _tick: Tick, _x: &[i32], _y: &[i32]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
