//! Maze factories.
//!
//! Producers for the grid layouts the demos and tests run on.  Each returns
//! a finished [`GridMap`]; none of them carry a correctness contract beyond
//! their unit tests — the engine treats every grid as an opaque, already
//! validated occupancy matrix.

use crate::GridMap;

/// The 7×7 example maze: a cross of passable cells.
///
/// Rows and columns {1, 3, 5} are open where they fall strictly inside the
/// border; everything else, including the outer ring, is wall.  Cell (1, 1)
/// is open, its diagonal neighbor (0, 0) is not.
pub fn cross() -> GridMap {
    let spine = |i: usize| i == 1 || i == 3 || i == 5;
    let interior = |i: usize| (1..=5).contains(&i);
    GridMap::from_fn(7, 7, |x, y| {
        (interior(x) && spine(y)) || (spine(x) && interior(y))
    })
}

/// A circular open area of the given `radius`, with `padding` wall cells
/// around it.
///
/// The grid is square with side `2 * (radius + padding) + 1`; a cell is open
/// iff its squared distance from the center is at most `radius²`.
pub fn circular(radius: usize, padding: usize) -> GridMap {
    let n = 2 * (radius + padding) + 1;
    let c = ((n - 1) / 2) as i64;
    let r2 = (radius * radius) as i64;
    GridMap::from_fn(n, n, |x, y| {
        let dx = x as i64 - c;
        let dy = y as i64 - c;
        dx * dx + dy * dy <= r2
    })
}

/// A layered labyrinth: `layers + 2` tiers of vertical bars joined by
/// horizontal corridors, with bar spacing tripling at each tier.
///
/// `width` is the thickness of each bar and corridor, `height` the length of
/// the bars within a tier.  The overall dimensions follow from the tier
/// count: `rows = 2 + width * bars + bars - 1` with `bars = 3^(layers + 1)`,
/// `cols = 2 + height * (layers + 2) + width * (layers + 1)`.
pub fn layered(layers: usize, width: usize, height: usize) -> GridMap {
    let bars = 3usize.pow(layers as u32 + 1);
    let rows = 2 + width * bars + bars - 1;
    let cols = 2 + height * (layers + 2) + width * (layers + 1);
    let mut cells = vec![false; rows * cols];

    let mut jump = 4usize;
    for n in 0..=layers + 1 {
        let start0 = 2 * 3usize.pow(n as u32) - 1;
        let start1 = n * (height + width) + 1;
        let end1 = start1 + height;

        // Vertical bars of this tier, one every `jump` rows.
        for j in 0..width {
            let mut x = start0 + j;
            while x < rows {
                for y in start1..end1 {
                    cells[x * cols + y] = true;
                }
                x += jump;
            }
        }

        // Horizontal corridor joining this tier to the next.
        if n != layers + 1 {
            for x in start0..rows - start0 {
                for y in end1..end1 + width {
                    cells[x * cols + y] = true;
                }
            }
        }

        jump *= 3;
    }

    GridMap::from_raw(rows, cols, cells)
}
