//! Run configuration.

use rw_core::Tick;

/// Top-level simulation configuration.
///
/// Typically assembled by the application binary and passed to
/// [`Sim::new`][crate::Sim::new].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of walkers (M).  Must be positive.
    pub walkers: usize,

    /// Start coordinate for every walker.  Must be a passable cell.
    pub start: (i32, i32),

    /// Total ticks to simulate.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical trajectories.
    pub seed: u64,

    /// Fire `on_snapshot` every N ticks.  0 disables snapshots.
    pub snapshot_interval: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_steps)
    }
}
