//! Utility functions shared by the scorers.
//!
//! The unit policy converts a raw prediction error into the number of
//! billable units before a unit cost is applied.

use crate::error::{CostScoreError, Result};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// How a raw prediction error is converted into billable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitPolicy {
    /// Use the raw difference (partial units are billed).
    #[default]
    Exact,
    /// Truncate toward zero, so only whole units are billed.
    Truncate,
    /// Round to the nearest whole unit.
    Round,
}

impl UnitPolicy {
    /// Apply the policy to an array of differences.
    pub fn apply(&self, diffs: &ArrayView1<f64>) -> Array1<f64> {
        diffs.mapv(|d| self.apply_scalar(d))
    }

    /// Apply the policy to a single difference.
    pub fn apply_scalar(&self, diff: f64) -> f64 {
        match self {
            UnitPolicy::Exact => diff,
            UnitPolicy::Truncate => diff.trunc(),
            UnitPolicy::Round => diff.round(),
        }
    }
}

/// Check that predictions and actuals line up, contain only finite values,
/// and that every difference `prediction - actual` is finite as well.
pub fn check_pair(predictions: &ArrayView1<f64>, actuals: &ArrayView1<f64>) -> Result<()> {
    if predictions.len() != actuals.len() {
        return Err(CostScoreError::DimensionMismatch {
            predictions: predictions.len(),
            actuals: actuals.len(),
        });
    }
    if let Some(i) = predictions.iter().position(|v| !v.is_finite()) {
        return Err(CostScoreError::InvalidInput(format!(
            "prediction at index {} is not finite",
            i
        )));
    }
    if let Some(i) = actuals.iter().position(|v| !v.is_finite()) {
        return Err(CostScoreError::InvalidInput(format!(
            "actual value at index {} is not finite",
            i
        )));
    }
    if let Some(i) = predictions
        .iter()
        .zip(actuals.iter())
        .position(|(p, a)| !(p - a).is_finite())
    {
        return Err(CostScoreError::InvalidInput(format!(
            "difference at index {} overflows f64",
            i
        )));
    }
    Ok(())
}

/// Arithmetic mean, or `None` for an empty view.
pub fn mean(values: &ArrayView1<f64>) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.sum() / values.len() as f64)
    }
}

/// Median of the finite values, or `None` if there are none.
pub fn median(values: &ArrayView1<f64>) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 0 {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Some(sorted[n / 2])
    }
}
