//! Ordinary least squares backed by smartcore.

use super::traits::{check_feature_width, check_training_data, Regressor};
use crate::error::{CostScoreError, Result};
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{
    LinearRegression, LinearRegressionParameters, LinearRegressionSolverName,
};
use std::panic::{self, AssertUnwindSafe};

/// Linear solver used by [`OlsRegressor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OlsSolver {
    #[default]
    Qr,
    Svd,
}

impl From<OlsSolver> for LinearRegressionSolverName {
    fn from(solver: OlsSolver) -> Self {
        match solver {
            OlsSolver::Qr => LinearRegressionSolverName::QR,
            OlsSolver::Svd => LinearRegressionSolverName::SVD,
        }
    }
}

struct FittedOls {
    model: LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>,
    n_features: usize,
}

/// Ordinary least squares regression.
///
/// Estimation is delegated to `smartcore`; this type only adapts it to the
/// [`Regressor`] capability.
pub struct OlsRegressor {
    solver: OlsSolver,
    fitted: Option<FittedOls>,
}

impl OlsRegressor {
    pub fn new() -> Self {
        Self::with_solver(OlsSolver::default())
    }

    pub fn with_solver(solver: OlsSolver) -> Self {
        Self {
            solver,
            fitted: None,
        }
    }

    pub fn solver(&self) -> OlsSolver {
        self.solver
    }
}

impl Default for OlsRegressor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OlsRegressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OlsRegressor")
            .field("solver", &self.solver)
            .field("fitted", &self.fitted.is_some())
            .finish()
    }
}

fn to_dense(features: &ArrayView2<f64>) -> Result<DenseMatrix<f64>> {
    let rows: Vec<Vec<f64>> = features.outer_iter().map(|row| row.to_vec()).collect();
    DenseMatrix::from_2d_vec(&rows).map_err(|e| CostScoreError::ModelError(e.to_string()))
}

impl Regressor for OlsRegressor {
    fn name(&self) -> &str {
        "ols"
    }

    fn fit(&mut self, features: &ArrayView2<f64>, targets: &ArrayView1<f64>) -> Result<()> {
        check_training_data(features, targets)?;
        // One coefficient per feature plus the intercept.
        if features.nrows() <= features.ncols() {
            return Err(CostScoreError::InvalidInput(format!(
                "ols needs more samples than features, got {} samples for {} features",
                features.nrows(),
                features.ncols()
            )));
        }

        let x = to_dense(features)?;
        let y = targets.to_vec();
        let mut params = LinearRegressionParameters::default();
        params.solver = self.solver.into();

        // smartcore's QR solver panics on a rank-deficient design matrix.
        let fitted = panic::catch_unwind(AssertUnwindSafe(|| {
            LinearRegression::fit(&x, &y, params)
        }))
        .map_err(|_| CostScoreError::ModelError("design matrix is rank deficient".to_string()))?;
        let model = fitted.map_err(|e| CostScoreError::ModelError(e.to_string()))?;

        self.fitted = Some(FittedOls {
            model,
            n_features: features.ncols(),
        });
        Ok(())
    }

    fn predict(&self, features: &ArrayView2<f64>) -> Result<Array1<f64>> {
        let fitted = self.fitted.as_ref().ok_or(CostScoreError::ModelNotFitted)?;
        check_feature_width(features, fitted.n_features)?;
        if features.nrows() == 0 {
            return Ok(Array1::zeros(0));
        }

        let x = to_dense(features)?;
        let preds = fitted
            .model
            .predict(&x)
            .map_err(|e| CostScoreError::ModelError(e.to_string()))?;
        Ok(Array1::from(preds))
    }

    fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }
}
