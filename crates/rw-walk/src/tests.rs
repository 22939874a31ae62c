//! Unit tests for the walk engine.

use rw_core::{FixedStep, WalkRng, WalkerId};
use rw_grid::{circular, cross, GridMap};

use crate::{EndpointSet, WalkError, WalkerEnsemble};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Grid with a single open cell at (1, 1) — every proposal is illegal.
fn boxed_in() -> GridMap {
    GridMap::from_fn(3, 3, |x, y| x == 1 && y == 1)
}

// ── Construction and reinitialization ─────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn all_walkers_placed_at_start() {
        let grid = cross();
        let w = WalkerEnsemble::new(7, &grid, WalkRng::seed_from(0), (1, 1)).unwrap();
        assert_eq!(w.count(), 7);
        assert!(w.x().iter().all(|&x| x == 1));
        assert!(w.y().iter().all(|&y| y == 1));
    }

    #[test]
    fn zero_walkers_rejected() {
        let grid = cross();
        let res = WalkerEnsemble::new(0, &grid, WalkRng::seed_from(0), (1, 1));
        assert_eq!(res.err(), Some(WalkError::EmptyEnsemble));
    }

    #[test]
    fn wall_start_rejected() {
        let grid = cross();
        // (0, 0) is on the border wall of the cross maze.
        let res = WalkerEnsemble::new(3, &grid, WalkRng::seed_from(0), (0, 0));
        assert_eq!(res.err(), Some(WalkError::InvalidSquare { x: 0, y: 0 }));
    }

    #[test]
    fn out_of_bounds_start_rejected() {
        let grid = cross();
        let res = WalkerEnsemble::new(3, &grid, WalkRng::seed_from(0), (-1, 2));
        assert_eq!(res.err(), Some(WalkError::InvalidSquare { x: -1, y: 2 }));
        let res = WalkerEnsemble::new(3, &grid, WalkRng::seed_from(0), (7, 2));
        assert!(res.is_err());
    }

    #[test]
    fn reinitialize_moves_everyone() {
        let grid = cross();
        let mut w = WalkerEnsemble::new(5, &grid, WalkRng::seed_from(0), (1, 1)).unwrap();
        for _ in 0..10 {
            w.step();
        }
        w.reinitialize((3, 3)).unwrap();
        assert!(w.x().iter().all(|&x| x == 3));
        assert!(w.y().iter().all(|&y| y == 3));
    }

    #[test]
    fn failed_reinitialize_leaves_state_untouched() {
        let grid = cross();
        let mut w = WalkerEnsemble::new(5, &grid, WalkRng::seed_from(42), (1, 1)).unwrap();
        for _ in 0..10 {
            w.step();
        }
        let x_before = w.x().to_vec();
        let y_before = w.y().to_vec();

        let res = w.reinitialize((0, 0));
        assert_eq!(res, Err(WalkError::InvalidSquare { x: 0, y: 0 }));
        assert_eq!(w.x(), x_before.as_slice());
        assert_eq!(w.y(), y_before.as_slice());
    }
}

// ── Legality filtering ────────────────────────────────────────────────────────

#[cfg(test)]
mod legality {
    use super::*;
    use crate::zero_illegal;

    #[test]
    fn all_nine_proposals_from_cross_corner() {
        // One walker at (1, 1) in the cross maze; probe all 9 possible
        // deltas against that single reference position.
        let grid = cross();
        let deltas: [(i32, i32); 9] = [
            (-1, -1), (-1, 0), (-1, 1),
            (0, -1),  (0, 0),  (0, 1),
            (1, -1),  (1, 0),  (1, 1),
        ];

        let x = [1i32; 9];
        let y = [1i32; 9];
        let mut dx: Vec<i32> = deltas.iter().map(|d| d.0).collect();
        let mut dy: Vec<i32> = deltas.iter().map(|d| d.1).collect();

        zero_illegal(&grid, &x, &y, &mut dx, &mut dy);

        for (i, &(pdx, pdy)) in deltas.iter().enumerate() {
            if grid.is_open(1 + pdx, 1 + pdy) {
                assert_eq!((dx[i], dy[i]), (pdx, pdy), "legal delta {i} altered");
            } else {
                assert_eq!((dx[i], dy[i]), (0, 0), "illegal delta {i} not zeroed");
            }
        }

        // The diagonal into the corner wall is among the corrected ones.
        assert!(!grid.is_open(0, 0));
        assert_eq!((dx[0], dy[0]), (0, 0));
    }

    #[test]
    fn legal_deltas_pass_through() {
        let grid = GridMap::from_fn(5, 5, |_, _| true);
        let x = [2i32, 2, 2];
        let y = [2i32, 2, 2];
        let mut dx = [1i32, -1, 0];
        let mut dy = [1i32, 0, -1];
        zero_illegal(&grid, &x, &y, &mut dx, &mut dy);
        assert_eq!(dx, [1, -1, 0]);
        assert_eq!(dy, [1, 0, -1]);
    }

    #[test]
    fn boundary_exits_zeroed_on_open_grid() {
        // Fully open grid: the only illegal moves are off the edge.
        let grid = GridMap::from_fn(3, 3, |_, _| true);
        let x = [0i32, 0, 2, 2];
        let y = [0i32, 0, 2, 2];
        let mut dx = [-1i32, 0, 1, 0];
        let mut dy = [0i32, -1, 0, 1];
        zero_illegal(&grid, &x, &y, &mut dx, &mut dy);
        assert_eq!(dx, [0, 0, 0, 0]);
        assert_eq!(dy, [0, 0, 0, 0]);
    }
}

// ── Stepping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stepping {
    use super::*;

    #[test]
    fn constant_drift_moves_diagonally() {
        // Free space around the start: a constant (+1, +1) source drifts the
        // walker one diagonal cell per tick.
        let grid = circular(100, 2);
        let mut w = WalkerEnsemble::new(1, &grid, FixedStep(1), (100, 100)).unwrap();
        for n in 1..=4 {
            w.step();
            assert_eq!(w.x()[0], 100 + n);
            assert_eq!(w.y()[0], 100 + n);
        }
    }

    #[test]
    fn boxed_in_walker_never_moves() {
        let grid = boxed_in();
        let mut w = WalkerEnsemble::new(4, &grid, FixedStep(1), (1, 1)).unwrap();
        for _ in 0..20 {
            w.step();
        }
        assert!(w.x().iter().all(|&x| x == 1));
        assert!(w.y().iter().all(|&y| y == 1));
    }

    #[test]
    fn stand_still_draw_is_a_noop() {
        let grid = circular(10, 2);
        let mut w = WalkerEnsemble::new(3, &grid, FixedStep(0), (10, 10)).unwrap();
        w.step();
        assert!(w.x().iter().all(|&x| x == 10));
        assert!(w.y().iter().all(|&y| y == 10));
        // Standing still is not "finished": everyone stays eligible.
        assert!(w.not_finished().iter().all(|&m| m));
    }

    #[test]
    fn same_seed_same_trajectories() {
        let grid = cross();
        let mut a = WalkerEnsemble::new(50, &grid, WalkRng::seed_from(99), (1, 1)).unwrap();
        let mut b = WalkerEnsemble::new(50, &grid, WalkRng::seed_from(99), (1, 1)).unwrap();
        for _ in 0..200 {
            a.step();
            b.step();
        }
        assert_eq!(a.x(), b.x());
        assert_eq!(a.y(), b.y());
    }

    #[test]
    fn positions_stay_legal_forever() {
        let grid = cross();
        let mut w = WalkerEnsemble::new(100, &grid, WalkRng::seed_from(7), (1, 1)).unwrap();
        for _ in 0..500 {
            w.step();
            for i in 0..w.count() {
                assert!(
                    grid.is_open(w.x()[i], w.y()[i]),
                    "walker {i} at illegal square ({}, {})",
                    w.x()[i],
                    w.y()[i]
                );
            }
        }
    }
}

// ── Termination ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod termination {
    use super::*;

    #[test]
    fn no_endpoints_means_everyone_moves() {
        let grid = circular(20, 2);
        let mut w = WalkerEnsemble::new(10, &grid, WalkRng::seed_from(3), (20, 20)).unwrap();
        for _ in 0..50 {
            w.step();
            assert!(w.not_finished().iter().all(|&m| m));
        }
        assert_eq!(w.active_count(), 10);
    }

    #[test]
    fn drift_into_endpoint_freezes() {
        // Constant (+1, +1) drift toward an endpoint 3 diagonal cells away:
        // still moving for steps 1 and 2, finished exactly at step 3, frozen
        // ever after even though further (+1, +1) steps would be legal.
        let d = 3;
        let grid = circular(100, 2);
        let endpoints: EndpointSet = [(100 + d, 100 + d)].into_iter().collect();
        let mut w =
            WalkerEnsemble::with_endpoints(1, &grid, FixedStep(1), (100, 100), endpoints).unwrap();

        for n in 1..d {
            w.step();
            assert!(w.not_finished()[0], "finished too early at step {n}");
        }
        w.step();
        assert!(!w.not_finished()[0], "not finished at step {d}");
        assert_eq!(w.position(WalkerId(0)), (100 + d, 100 + d));

        for _ in 0..10 {
            w.step();
            assert_eq!(w.position(WalkerId(0)), (100 + d, 100 + d));
        }
        assert_eq!(w.active_count(), 0);
    }

    #[test]
    fn starting_on_endpoint_never_moves() {
        let grid = circular(10, 2);
        let endpoints: EndpointSet = [(10, 10)].into_iter().collect();
        let mut w =
            WalkerEnsemble::with_endpoints(5, &grid, FixedStep(1), (10, 10), endpoints).unwrap();

        assert!(w.not_finished().iter().all(|&m| !m));
        assert!(w.is_finished(WalkerId(0)));
        for _ in 0..10 {
            w.step();
        }
        assert!(w.x().iter().all(|&x| x == 10));
        assert!(w.y().iter().all(|&y| y == 10));
    }

    #[test]
    fn endpoint_set_mask_basics() {
        let set: EndpointSet = [(2, 3), (4, 4)].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(2, 3));
        assert!(!set.contains(3, 2));

        let x = [2i32, 4, 0];
        let y = [3i32, 4, 0];
        let mut mask = [false; 3];
        set.eligibility_mask(&x, &y, &mut mask);
        assert_eq!(mask, [false, false, true]);

        let empty = EndpointSet::new();
        let mut mask = [false; 3];
        empty.eligibility_mask(&x, &y, &mut mask);
        assert_eq!(mask, [true, true, true]);
    }
}

// ── Viewer capability surface ─────────────────────────────────────────────────

#[cfg(test)]
mod view {
    use super::*;
    use crate::WalkerView;

    /// A consumer written purely against the trait.
    fn advance_and_sample(view: &mut impl WalkerView, ticks: u64) -> (i32, i32) {
        for _ in 0..ticks {
            view.step();
        }
        (view.x()[0], view.y()[0])
    }

    #[test]
    fn ensemble_is_substitutable() {
        let grid = circular(50, 2);
        let mut w = WalkerEnsemble::new(2, &grid, FixedStep(1), (50, 50)).unwrap();
        let pos = advance_and_sample(&mut w, 5);
        assert_eq!(pos, (55, 55));
        assert_eq!(w.grid().rows(), 105);
    }
}
