//! Error types for costscore.

use ndarray::ShapeError;
use thiserror::Error;

/// Result type alias for costscore operations.
pub type Result<T> = std::result::Result<T, CostScoreError>;

/// Errors that can occur while scoring or evaluating models.
#[derive(Error, Debug)]
pub enum CostScoreError {
    /// Predictions and actuals have different lengths.
    #[error("Dimension mismatch: {predictions} predictions for {actuals} actual values")]
    DimensionMismatch { predictions: usize, actuals: usize },
    /// A unit cost was negative or not finite.
    #[error("Invalid cost schedule: {0}")]
    InvalidCostSchedule(String),
    /// The model has not been fitted yet.
    #[error("Model is not fitted yet")]
    ModelNotFitted,
    /// An error reported by the underlying model implementation.
    #[error("Model error: {0}")]
    ModelError(String),
    /// Shape mismatch in arrays.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },
    /// Invalid input data.
    #[error("Invalid input data: {0}")]
    InvalidInput(String),
    /// Invalid parameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ShapeError> for CostScoreError {
    fn from(err: ShapeError) -> Self {
        CostScoreError::ShapeMismatch {
            expected: "unknown".to_string(),
            actual: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CostScoreError {
    fn from(err: serde_json::Error) -> Self {
        CostScoreError::Config(err.to_string())
    }
}
