//! The `GridMap` occupancy matrix.

use crate::{GridError, GridResult};

/// An immutable 2D boolean occupancy matrix.
///
/// Cells are stored row-major in a flat `Vec<bool>`; `true` = passable,
/// `false` = wall.  Coordinates are `i32` so that candidate positions
/// (`current + delta`, possibly −1) can be tested without a cast dance;
/// anything outside `0..rows × 0..cols` is simply not open.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    rows:  usize,
    cols:  usize,
    cells: Vec<bool>,
}

impl GridMap {
    /// Build a grid from a row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellCountMismatch`] if `cells.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, cells: Vec<bool>) -> GridResult<Self> {
        if cells.len() != rows * cols {
            return Err(GridError::CellCountMismatch {
                rows,
                cols,
                got: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for x in 0..rows {
            for y in 0..cols {
                cells.push(f(x, y));
            }
        }
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` if `(x, y)` lies inside the matrix bounds.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.rows && (y as usize) < self.cols
    }

    /// `true` if `(x, y)` is inside bounds **and** a passable cell.
    ///
    /// This is the legality predicate for a candidate position: out-of-bounds
    /// coordinates are treated exactly like walls.
    #[inline]
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[x as usize * self.cols + y as usize]
    }

    /// Number of passable cells in the whole grid.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// All passable cells along column `y`, in ascending `x` order.
    ///
    /// Useful for picking start or endpoint lines in a maze (e.g. every open
    /// cell on the exit row).  Returns an empty vec for an out-of-range `y`.
    pub fn open_in_column(&self, y: usize) -> Vec<(i32, i32)> {
        if y >= self.cols {
            return Vec::new();
        }
        (0..self.rows)
            .filter(|&x| self.cells[x * self.cols + y])
            .map(|x| (x as i32, y as i32))
            .collect()
    }

    // ── Package-private construction used by the factories ────────────────

    pub(crate) fn from_raw(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }
}
