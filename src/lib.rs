//! # costscore
//!
//! Business-cost scoring for regression models.
//!
//! This crate scores a model's predictions on held-out data with an
//! asymmetric cost function: over-predicting and under-predicting are billed
//! at different unit costs. Any model implementing the [`backend::Regressor`]
//! capability can be evaluated; fitting itself is delegated to a statistics
//! library.
//!
//! ## Features
//!
//! - `smartcore` (default) - Enable the ordinary least squares adapter
//!
//! ## Example
//!
//! ```
//! use costscore::prelude::*;
//!
//! let data = Dataset::from_samples(&[
//!     Sample::new(vec![30.0], 8.0),
//!     Sample::new(vec![22.0], 5.0),
//!     Sample::new(vec![35.0], 12.0),
//! ])
//! .unwrap();
//!
//! // Make 10 cups every day.
//! let model = ConstantRegressor::new(10.0);
//! let score = evaluate_cost(&model, &data, &CostSchedule::lemonade_stand()).unwrap();
//! assert!(score < 0.0);
//! ```

pub mod backend;
pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod scoring;
pub mod utils;

pub mod prelude {
    //! Convenient re-exports of commonly used types.
    pub use crate::backend::{ConstantRegressor, Regressor, StatisticRegressor};
    pub use crate::config::EvaluationConfig;
    pub use crate::dataset::{Dataset, Sample};
    pub use crate::error::{CostScoreError, Result};
    pub use crate::evaluation::{
        compare_models, cross_val_score, evaluate, evaluate_cost, CvResult, ModelScore,
    };
    pub use crate::scoring::{
        AsymmetricCostScorer, CostBreakdown, CostSchedule, NegMeanAbsoluteError,
        NegMeanSquaredError, R2Score, Scorer,
    };
    pub use crate::utils::UnitPolicy;

    #[cfg(feature = "smartcore")]
    pub use crate::backend::{OlsRegressor, OlsSolver};
}
