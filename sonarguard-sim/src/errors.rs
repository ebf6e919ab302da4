//! Simulator errors

use thiserror::Error;

/// Result type for simulator setup
pub type SimResult<T> = Result<T, SimError>;

/// Configuration problems caught before any frame is generated
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    /// `min > max` or a non-finite bound
    #[error("invalid span for {field}: min must not exceed max")]
    InvalidSpan { field: &'static str },

    /// Probability outside [0, 1]
    #[error("{field} must be within [0, 1], got {value}")]
    InvalidProbability { field: &'static str, value: f32 },

    /// Non-finite or non-positive physical parameter
    #[error("invalid parameter: {field}")]
    InvalidParameter { field: &'static str },
}
