//! The capability surface consumed by frame-based viewers.

use rw_core::RandomSource;
use rw_grid::GridMap;

use crate::WalkerEnsemble;

/// What a visualization or analysis consumer needs from a walker population:
/// read the positions, read the grid, advance one tick.
///
/// Renderers and drivers should take `&mut impl WalkerView` instead of a
/// concrete ensemble so any conforming population type is substitutable.
pub trait WalkerView {
    /// X coordinates of all walkers.
    fn x(&self) -> &[i32];

    /// Y coordinates of all walkers.
    fn y(&self) -> &[i32];

    /// The grid being walked.
    fn grid(&self) -> &GridMap;

    /// Advance the population by one tick.
    fn step(&mut self);
}

impl<R: RandomSource> WalkerView for WalkerEnsemble<'_, R> {
    fn x(&self) -> &[i32] {
        WalkerEnsemble::x(self)
    }

    fn y(&self) -> &[i32] {
        WalkerEnsemble::y(self)
    }

    fn grid(&self) -> &GridMap {
        WalkerEnsemble::grid(self)
    }

    fn step(&mut self) {
        WalkerEnsemble::step(self)
    }
}
