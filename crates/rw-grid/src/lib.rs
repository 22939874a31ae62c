//! `rw-grid` — the boolean-occupancy grid consumed by the walk engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                               |
//! |-------------|--------------------------------------------------------|
//! | [`map`]     | `GridMap` — immutable occupancy matrix                 |
//! | [`factory`] | `cross`, `circular`, `layered` maze producers          |
//! | [`error`]   | `GridError`, `GridResult<T>`                           |
//!
//! # Conventions
//!
//! A grid is a `rows × cols` matrix of booleans; `true` marks a passable
//! cell, `false` a wall.  The `x` coordinate indexes rows and `y` indexes
//! columns.  Grids are immutable after construction — the engine only ever
//! reads them, so one grid can back any number of ensembles.

pub mod error;
pub mod factory;
pub mod map;


pub use error::{GridError, GridResult};
pub use factory::{circular, cross, layered};
pub use map::GridMap;
