//! Standard regression scorers in "greater is better" form.

use super::base::Scorer;
use crate::error::Result;
use crate::utils::{check_pair, mean};
use ndarray::ArrayView1;

/// Negated mean absolute error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegMeanAbsoluteError;

impl Scorer for NegMeanAbsoluteError {
    fn name(&self) -> &str {
        "neg_mean_absolute_error"
    }

    fn score(&self, predictions: &ArrayView1<f64>, actuals: &ArrayView1<f64>) -> Result<f64> {
        check_pair(predictions, actuals)?;
        let abs_err = (predictions - actuals).mapv(f64::abs);
        Ok(-mean(&abs_err.view()).unwrap_or(0.0))
    }
}

/// Negated mean squared error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegMeanSquaredError;

impl Scorer for NegMeanSquaredError {
    fn name(&self) -> &str {
        "neg_mean_squared_error"
    }

    fn score(&self, predictions: &ArrayView1<f64>, actuals: &ArrayView1<f64>) -> Result<f64> {
        check_pair(predictions, actuals)?;
        let sq_err = (predictions - actuals).mapv(|e| e * e);
        Ok(-mean(&sq_err.view()).unwrap_or(0.0))
    }
}

/// Coefficient of determination.
///
/// Constant targets have no variance to explain: the score is 1 for a
/// perfect fit and 0 otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct R2Score;

impl Scorer for R2Score {
    fn name(&self) -> &str {
        "r2"
    }

    fn score(&self, predictions: &ArrayView1<f64>, actuals: &ArrayView1<f64>) -> Result<f64> {
        check_pair(predictions, actuals)?;
        let Some(mean_y) = mean(actuals) else {
            return Ok(0.0);
        };

        let ss_res: f64 = predictions
            .iter()
            .zip(actuals.iter())
            .map(|(p, t)| (t - p).powi(2))
            .sum();
        let ss_tot: f64 = actuals.iter().map(|t| (t - mean_y).powi(2)).sum();

        if ss_tot == 0.0 {
            return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
        }
        Ok(1.0 - ss_res / ss_tot)
    }
}
