//! `rw-core` — foundational types for the `randwalk` simulation engine.
//!
//! This crate is a dependency of every other `rw-*` crate.  It intentionally
//! has no `rw-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                        |
//! |----------|-------------------------------------------------|
//! | [`ids`]  | `WalkerId`                                      |
//! | [`step`] | `Tick`                                          |
//! | [`rng`]  | `RandomSource` trait, `WalkRng`, `FixedStep`    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod ids;
pub mod rng;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::WalkerId;
pub use rng::{FixedStep, RandomSource, WalkRng};
pub use step::Tick;
