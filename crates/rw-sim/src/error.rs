use rw_walk::WalkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("walker ensemble error: {0}")]
    Walk(#[from] WalkError),
}

pub type SimResult<T> = Result<T, SimError>;
