//! `rw-sim` — step-loop orchestrator for the randwalk engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                      |
//! |--------------|-----------------------------------------------|
//! | [`config`]   | `SimConfig` — run parameters                  |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`           |
//! | [`sim`]      | `Sim<'g, R>` — the tick loop                  |
//! | [`error`]    | `SimError`, `SimResult<T>`                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rw_core::WalkRng;
//! use rw_grid::circular;
//! use rw_sim::{NoopObserver, Sim, SimConfig};
//! use rw_walk::EndpointSet;
//!
//! let grid = circular(100, 2);
//! let config = SimConfig {
//!     walkers:           10_000,
//!     start:             (100, 100),
//!     total_steps:       1_000,
//!     seed:              42,
//!     snapshot_interval: 0,
//! };
//! let rng = WalkRng::seed_from(config.seed);
//! let mut sim = Sim::new(config, &grid, rng, EndpointSet::new())?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
