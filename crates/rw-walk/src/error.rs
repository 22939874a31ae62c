use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalkError {
    /// The requested start square is outside the grid or on a wall cell.
    ///
    /// Raised only by construction and reinitialization; the failing call
    /// mutates nothing.  Steady-state illegal moves are corrected silently
    /// instead (see [`crate::zero_illegal`]).
    #[error("starting position ({x}, {y}) is not a legal square")]
    InvalidSquare { x: i32, y: i32 },

    #[error("ensemble must contain at least one walker")]
    EmptyEnsemble,
}

pub type WalkResult<T> = Result<T, WalkError>;
