//! `rw-walk` — the vectorized multi-walker random-walk engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`ensemble`]  | `WalkerEnsemble<'g, R>` — walker state + step transition    |
//! | [`legality`]  | `zero_illegal` — whole-array step filtering                 |
//! | [`endpoints`] | `EndpointSet` — terminal cells and eligibility masking      |
//! | [`view`]      | `WalkerView` — the capability surface viewers consume       |
//! | [`error`]     | `WalkError`, `WalkResult<T>`                                |
//!
//! # Step model
//!
//! One `step()` advances all M walkers synchronously by one tick:
//!
//! 1. Draw Δx for every walker, then Δy, each uniform over {−1, 0, +1}
//!    (9 equally likely outcomes per walker, including standing still).
//! 2. Zero every delta whose candidate position leaves the grid or lands
//!    on a wall — an illegal proposal is a no-op, never an error.
//! 3. Mask out walkers sitting on an endpoint cell; they are finished and
//!    stay frozen forever.
//! 4. Add the surviving deltas to the position arrays in place.
//!
//! Positions are structure-of-arrays (`x` and `y` as separate `Vec<i32>`)
//! and every sub-step is a whole-array pass, so the transition stays cheap
//! at tens of thousands of walkers.

pub mod endpoints;
pub mod ensemble;
pub mod error;
pub mod legality;
pub mod view;

#[cfg(test)]
mod tests;

pub use endpoints::EndpointSet;
pub use ensemble::WalkerEnsemble;
pub use error::{WalkError, WalkResult};
pub use legality::zero_illegal;
pub use view::WalkerView;
