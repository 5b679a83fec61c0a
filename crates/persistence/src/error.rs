use filtration::FiltrationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The stream violates a precondition (e.g. it is not face-closed).
    #[error(transparent)]
    Filtration(#[from] FiltrationError),

    /// The homology dimension bound is outside `1..=3`.
    #[error("invalid dimension bound {bound}: must be between 1 and 3")]
    InvalidDimensionBound { bound: usize },
}
