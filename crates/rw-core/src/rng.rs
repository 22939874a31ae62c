//! Random step sources.
//!
//! # Determinism strategy
//!
//! An ensemble owns exactly one `RandomSource` and consumes it in a fixed
//! order each step: one batch of M x-components, then one batch of M
//! y-components.  Because the draw order is part of the contract, replaying
//! the same seed for the same number of steps reproduces the exact same
//! trajectories — the property every scenario test in `rw-walk` relies on.
//!
//! The trait is deliberately narrow (a single batch-fill method) so that
//! test doubles need no relationship to `rand` at all; they only have to
//! fill a buffer.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── RandomSource ──────────────────────────────────────────────────────────────

/// A batch source of independent, uniformly distributed integers.
///
/// The engine draws all per-walker step components through this trait.
/// Implementations must fill the whole buffer and must not depend on any
/// shared process-wide state — the owner of the source is the only consumer.
pub trait RandomSource {
    /// Fill `out` with independent draws, each uniform over `low..=high`.
    fn draw_uniform(&mut self, low: i32, high: i32, out: &mut [i32]);
}

// ── WalkRng ───────────────────────────────────────────────────────────────────

/// Production source backed by a seeded [`SmallRng`].
///
/// `SmallRng` is a fast non-cryptographic generator; step sampling is the
/// single hottest RNG consumer in the engine, so throughput wins over
/// statistical overkill.  The same seed always produces the same stream.
pub struct WalkRng(SmallRng);

impl WalkRng {
    /// Seed deterministically from a run seed.
    pub fn seed_from(seed: u64) -> Self {
        WalkRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl RandomSource for WalkRng {
    fn draw_uniform(&mut self, low: i32, high: i32, out: &mut [i32]) {
        for v in out.iter_mut() {
            *v = self.0.gen_range(low..=high);
        }
    }
}

// ── FixedStep ─────────────────────────────────────────────────────────────────

/// A deterministic source that returns the same value for every draw,
/// ignoring the requested range.
///
/// Used by tests and debugging runs to force a known trajectory (e.g. a
/// constant `+1` drift).  Conforms to [`RandomSource`] like any production
/// generator; callers cannot tell the difference.
pub struct FixedStep(pub i32);

impl RandomSource for FixedStep {
    fn draw_uniform(&mut self, _low: i32, _high: i32, out: &mut [i32]) {
        out.fill(self.0);
    }
}
