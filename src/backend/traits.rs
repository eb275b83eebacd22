//! Regressor trait definitions.

use crate::error::{CostScoreError, Result};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// A regression model exposing the `fit` / `predict` capability.
///
/// Estimation itself is left to the implementor (usually a statistics
/// library). The evaluation harness only ever calls `predict`, once per
/// evaluation, with the full feature batch.
pub trait Regressor: Send + Sync {
    /// Name used in logs and comparison reports.
    fn name(&self) -> &str;

    /// Fit the model on a feature matrix and index-aligned targets.
    fn fit(&mut self, features: &ArrayView2<f64>, targets: &ArrayView1<f64>) -> Result<()>;

    /// Predict one value per feature row.
    ///
    /// # Errors
    /// * `ModelNotFitted` if `fit` has not succeeded yet.
    /// * `ShapeMismatch` if the feature width differs from the training data.
    fn predict(&self, features: &ArrayView2<f64>) -> Result<Array1<f64>>;

    /// Whether `predict` can be called.
    fn is_fitted(&self) -> bool;
}

impl<R: Regressor + ?Sized> Regressor for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fit(&mut self, features: &ArrayView2<f64>, targets: &ArrayView1<f64>) -> Result<()> {
        (**self).fit(features, targets)
    }

    fn predict(&self, features: &ArrayView2<f64>) -> Result<Array1<f64>> {
        (**self).predict(features)
    }

    fn is_fitted(&self) -> bool {
        (**self).is_fitted()
    }
}

/// Check the training inputs shared by every regressor.
pub(crate) fn check_training_data(
    features: &ArrayView2<f64>,
    targets: &ArrayView1<f64>,
) -> Result<()> {
    if features.nrows() != targets.len() {
        return Err(CostScoreError::ShapeMismatch {
            expected: format!("{} targets", features.nrows()),
            actual: format!("{} targets", targets.len()),
        });
    }
    if targets.is_empty() {
        return Err(CostScoreError::InvalidInput(
            "cannot fit on an empty dataset".to_string(),
        ));
    }
    Ok(())
}

/// Check that a prediction batch has the width seen during training.
pub(crate) fn check_feature_width(features: &ArrayView2<f64>, n_features: usize) -> Result<()> {
    if features.ncols() != n_features {
        return Err(CostScoreError::ShapeMismatch {
            expected: format!("{} features", n_features),
            actual: format!("{} features", features.ncols()),
        });
    }
    Ok(())
}
