//! Regression model implementations.
//!
//! This module provides the `Regressor` capability consumed by the
//! evaluation harness, a few baseline models, and (with the `smartcore`
//! feature) an ordinary least squares adapter.

mod baseline;
mod traits;

#[cfg(feature = "smartcore")]
pub mod smartcore_backend;

pub use baseline::{ConstantRegressor, StatisticRegressor};
pub use traits::Regressor;

#[cfg(feature = "smartcore")]
pub use smartcore_backend::{OlsRegressor, OlsSolver};
