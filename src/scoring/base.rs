//! Base scorer trait.

use crate::error::Result;
use ndarray::ArrayView1;

/// A scoring function comparing predictions against actual values.
///
/// Implementations must be pure: the same inputs always produce the same
/// score, and higher scores always mean better predictions.
pub trait Scorer: Send + Sync {
    /// Name used in logs and comparison reports.
    fn name(&self) -> &str;

    /// Score index-aligned predictions against actuals.
    ///
    /// # Errors
    /// * `DimensionMismatch` if the two views differ in length.
    /// * `InvalidInput` if either view contains a non-finite value, or if a
    ///   difference `prediction - actual` overflows.
    ///
    /// Per-sample differences are always finite, but an aggregate over very
    /// large values (a squared error, a summed cost) can still overflow, so
    /// the returned score is not guaranteed to be finite.
    fn score(&self, predictions: &ArrayView1<f64>, actuals: &ArrayView1<f64>) -> Result<f64>;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn score(&self, predictions: &ArrayView1<f64>, actuals: &ArrayView1<f64>) -> Result<f64> {
        (**self).score(predictions, actuals)
    }
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn score(&self, predictions: &ArrayView1<f64>, actuals: &ArrayView1<f64>) -> Result<f64> {
        (**self).score(predictions, actuals)
    }
}
