use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell buffer length {got} does not match a {rows}×{cols} grid")]
    CellCountMismatch {
        rows: usize,
        cols: usize,
        got:  usize,
    },
}

pub type GridResult<T> = Result<T, GridError>;
