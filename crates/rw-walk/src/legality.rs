//! Whole-array legality filtering for proposed steps.

use rw_grid::GridMap;

/// Zero out every proposed step that would leave the grid or land on a wall.
///
/// `x`/`y` hold current positions, `dx`/`dy` the proposed deltas; all four
/// slices must have the same length K.  For each entry the candidate position
/// is `(x + dx, y + dy)`; if it is out of bounds or on a closed cell, the
/// delta is forced to `(0, 0)` and the walker stands still this tick.  Legal
/// deltas pass through unchanged.
///
/// K normally equals the ensemble size, but callers may probe a single
/// reference position replicated K times against K trial deltas — the filter
/// itself is stateless and does not care where the slices come from.
///
/// The legality outcome is applied as a 0/1 mask multiply rather than a
/// per-entry branch, keeping the pass a straight-line sweep over the arrays.
pub fn zero_illegal(grid: &GridMap, x: &[i32], y: &[i32], dx: &mut [i32], dy: &mut [i32]) {
    let k = x.len();
    debug_assert_eq!(y.len(), k);
    debug_assert_eq!(dx.len(), k);
    debug_assert_eq!(dy.len(), k);

    for i in 0..k {
        let legal = grid.is_open(x[i] + dx[i], y[i] + dy[i]) as i32;
        dx[i] *= legal;
        dy[i] *= legal;
    }
}
