// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Invalid enclosure: {reason}")]
    InvalidEnclosure { reason: String },

    #[error("Geometric calculation failed: {operation}")]
    GeometricFailure { operation: String },
}

pub type PlacementResult<T> = Result<T, PlacementError>;
