//! Scoring functions for regression predictions.
//!
//! Every scorer follows the "greater is better" convention: losses are
//! returned negated so that a score closer to zero means a better model.

pub mod base;
mod asymmetric;
mod schedule;
mod standard;

pub use asymmetric::{AsymmetricCostScorer, CostBreakdown};
pub use base::Scorer;
pub use schedule::CostSchedule;
pub(crate) use schedule::RawCostSchedule;
pub use standard::{NegMeanAbsoluteError, NegMeanSquaredError, R2Score};
