//! Baseline regressors.
//!
//! These ignore the features entirely. They are the floor any real model
//! should beat on a given cost schedule.

use super::traits::{check_feature_width, check_training_data, Regressor};
use crate::error::{CostScoreError, Result};
use crate::utils::{mean, median};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Always predicts the same value. Needs no fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRegressor {
    value: f64,
}

impl ConstantRegressor {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Regressor for ConstantRegressor {
    fn name(&self) -> &str {
        "constant"
    }

    fn fit(&mut self, features: &ArrayView2<f64>, targets: &ArrayView1<f64>) -> Result<()> {
        check_training_data(features, targets)
    }

    fn predict(&self, features: &ArrayView2<f64>) -> Result<Array1<f64>> {
        Ok(Array1::from_elem(features.nrows(), self.value))
    }

    fn is_fitted(&self) -> bool {
        true
    }
}

/// Summary statistic learned by [`StatisticRegressor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Statistic {
    Mean,
    Median,
}

#[derive(Debug, Clone, PartialEq)]
struct FittedStatistic {
    value: f64,
    n_features: usize,
}

/// Predicts one summary statistic of the training targets.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticRegressor {
    statistic: Statistic,
    fitted: Option<FittedStatistic>,
}

impl StatisticRegressor {
    /// Predicts the mean of the training targets.
    pub fn mean() -> Self {
        Self {
            statistic: Statistic::Mean,
            fitted: None,
        }
    }

    /// Predicts the median of the training targets. Robust to outlying
    /// targets.
    pub fn median() -> Self {
        Self {
            statistic: Statistic::Median,
            fitted: None,
        }
    }

    /// The learned value, if fitted.
    pub fn value(&self) -> Option<f64> {
        self.fitted.as_ref().map(|f| f.value)
    }
}

impl Regressor for StatisticRegressor {
    fn name(&self) -> &str {
        match self.statistic {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
        }
    }

    fn fit(&mut self, features: &ArrayView2<f64>, targets: &ArrayView1<f64>) -> Result<()> {
        check_training_data(features, targets)?;
        let value = match self.statistic {
            Statistic::Mean => mean(targets),
            Statistic::Median => median(targets),
        }
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            CostScoreError::InvalidInput("targets contain no finite values".to_string())
        })?;

        self.fitted = Some(FittedStatistic {
            value,
            n_features: features.ncols(),
        });
        Ok(())
    }

    fn predict(&self, features: &ArrayView2<f64>) -> Result<Array1<f64>> {
        let fitted = self.fitted.as_ref().ok_or(CostScoreError::ModelNotFitted)?;
        check_feature_width(features, fitted.n_features)?;
        Ok(Array1::from_elem(features.nrows(), fitted.value))
    }

    fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }
}
