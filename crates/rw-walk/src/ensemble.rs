//! The `WalkerEnsemble` — walker state and the per-tick transition.

use rw_core::{RandomSource, WalkerId};
use rw_grid::GridMap;

use crate::legality::zero_illegal;
use crate::{EndpointSet, WalkError, WalkResult};

/// M independent random walkers inside one grid.
///
/// Positions are structure-of-arrays: two parallel `Vec<i32>` of length
/// `count`, each entry always in bounds and on a passable cell.  The grid is
/// borrowed, not owned — several ensembles may share one grid, and the `'g`
/// lifetime guarantees the grid outlives every ensemble reading it.  The
/// random source is owned and consumed exactly once per [`step`][Self::step],
/// in a fixed order, so a run is fully determined by the seed and the step
/// count.
///
/// # Type parameter
///
/// `R` is any [`RandomSource`] — [`rw_core::WalkRng`] in production,
/// [`rw_core::FixedStep`] for forced trajectories in tests.  Swapping it is a
/// compile-time choice with no runtime overhead.
pub struct WalkerEnsemble<'g, R: RandomSource> {
    count:     usize,
    grid:      &'g GridMap,
    rng:       R,
    endpoints: EndpointSet,

    x: Vec<i32>,
    y: Vec<i32>,

    // Scratch reused across steps so a step allocates nothing.
    dx:       Vec<i32>,
    dy:       Vec<i32>,
    eligible: Vec<bool>,
}

impl<'g, R: RandomSource> WalkerEnsemble<'g, R> {
    /// Create an ensemble with no endpoints: walkers roam forever.
    ///
    /// All `count` walkers start at `r0`.
    ///
    /// # Errors
    ///
    /// [`WalkError::EmptyEnsemble`] if `count == 0`;
    /// [`WalkError::InvalidSquare`] if `r0` is out of bounds or on a wall.
    /// Nothing is constructed on failure.
    pub fn new(count: usize, grid: &'g GridMap, rng: R, r0: (i32, i32)) -> WalkResult<Self> {
        Self::with_endpoints(count, grid, rng, r0, EndpointSet::new())
    }

    /// Create an ensemble whose walkers freeze on reaching any cell in
    /// `endpoints`.
    pub fn with_endpoints(
        count:     usize,
        grid:      &'g GridMap,
        rng:       R,
        r0:        (i32, i32),
        endpoints: EndpointSet,
    ) -> WalkResult<Self> {
        if count == 0 {
            return Err(WalkError::EmptyEnsemble);
        }
        let (x0, y0) = r0;
        if !grid.is_open(x0, y0) {
            return Err(WalkError::InvalidSquare { x: x0, y: y0 });
        }

        Ok(Self {
            count,
            grid,
            rng,
            endpoints,
            x:        vec![x0; count],
            y:        vec![y0; count],
            dx:       vec![0; count],
            dy:       vec![0; count],
            eligible: vec![true; count],
        })
    }

    /// Put every walker back on `r0`, keeping count, grid, RNG state, and
    /// endpoints as they are.
    ///
    /// # Errors
    ///
    /// [`WalkError::InvalidSquare`] if `r0` is not a legal square; positions
    /// are left exactly as they were.
    pub fn reinitialize(&mut self, r0: (i32, i32)) -> WalkResult<()> {
        let (x0, y0) = r0;
        if !self.grid.is_open(x0, y0) {
            return Err(WalkError::InvalidSquare { x: x0, y: y0 });
        }
        self.x.fill(x0);
        self.y.fill(y0);
        Ok(())
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Number of walkers.  Fixed at construction.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The grid this ensemble walks in.
    #[inline]
    pub fn grid(&self) -> &GridMap {
        self.grid
    }

    /// The endpoint cells, possibly empty.
    #[inline]
    pub fn endpoints(&self) -> &EndpointSet {
        &self.endpoints
    }

    /// X coordinates of all walkers, length `count`.
    #[inline]
    pub fn x(&self) -> &[i32] {
        &self.x
    }

    /// Y coordinates of all walkers, length `count`.
    #[inline]
    pub fn y(&self) -> &[i32] {
        &self.y
    }

    /// Current position of one walker.
    #[inline]
    pub fn position(&self, id: WalkerId) -> (i32, i32) {
        (self.x[id.index()], self.y[id.index()])
    }

    /// `true` if the walker sits on an endpoint cell.
    #[inline]
    pub fn is_finished(&self, id: WalkerId) -> bool {
        let (x, y) = self.position(id);
        self.endpoints.contains(x, y)
    }

    /// Per-walker mask, `true` = may still move.
    ///
    /// A walker is finished the instant its position equals any endpoint;
    /// with no endpoints configured every entry is `true` unconditionally.
    pub fn not_finished(&self) -> Vec<bool> {
        let mut mask = vec![true; self.count];
        self.endpoints.eligibility_mask(&self.x, &self.y, &mut mask);
        mask
    }

    /// Number of walkers still eligible to move.
    pub fn active_count(&self) -> usize {
        if self.endpoints.is_empty() {
            return self.count;
        }
        self.x
            .iter()
            .zip(&self.y)
            .filter(|&(&x, &y)| !self.endpoints.contains(x, y))
            .count()
    }

    // ── The step transition ───────────────────────────────────────────────

    /// Advance every walker by one tick, in place.
    ///
    /// Draws all Δx values then all Δy values from the owned source, each
    /// uniform over {−1, 0, +1}; zeroes deltas whose candidate position is
    /// out of bounds or on a wall; then applies the surviving deltas to every
    /// walker not currently on an endpoint.  Finished walkers are untouched
    /// regardless of what they drew.
    ///
    /// Postcondition: every position is in bounds and on a passable cell.
    pub fn step(&mut self) {
        self.rng.draw_uniform(-1, 1, &mut self.dx);
        self.rng.draw_uniform(-1, 1, &mut self.dy);

        zero_illegal(self.grid, &self.x, &self.y, &mut self.dx, &mut self.dy);
        self.endpoints
            .eligibility_mask(&self.x, &self.y, &mut self.eligible);

        for i in 0..self.count {
            let m = self.eligible[i] as i32;
            self.x[i] += self.dx[i] * m;
            self.y[i] += self.dy[i] * m;
        }
    }
}
