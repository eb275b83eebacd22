//! Asymmetric business-cost scorer.

use super::base::Scorer;
use super::schedule::CostSchedule;
use crate::error::Result;
use crate::utils::check_pair;
use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// Aggregate cost of a prediction batch, split by error direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Total cost incurred by predictions above the actual value.
    pub over_cost: f64,
    /// Total cost incurred by predictions below the actual value.
    pub under_cost: f64,
    /// Number of billed over-predictions.
    pub n_over: usize,
    /// Number of billed under-predictions.
    pub n_under: usize,
    /// Number of predictions that cost nothing.
    pub n_exact: usize,
}

impl CostBreakdown {
    pub fn total_cost(&self) -> f64 {
        self.over_cost + self.under_cost
    }

    /// Negated total cost; closer to zero is better.
    pub fn score(&self) -> f64 {
        -self.total_cost()
    }

    pub fn n_samples(&self) -> usize {
        self.n_over + self.n_under + self.n_exact
    }
}

/// Scores predictions by the business cost of their errors.
///
/// Over-prediction and under-prediction are billed at different unit costs
/// taken from a [`CostSchedule`]. The returned score is the negated total
/// cost.
///
/// # Example
///
/// ```
/// use costscore::prelude::*;
/// use ndarray::array;
///
/// let scorer = AsymmetricCostScorer::new(CostSchedule::new(0.03, 0.50).unwrap());
/// let predictions = array![10.0, 5.0, 8.0];
/// let actuals = array![8.0, 5.0, 12.0];
/// let score = scorer.score(&predictions.view(), &actuals.view()).unwrap();
/// assert!((score + 2.06).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AsymmetricCostScorer {
    schedule: CostSchedule,
}

impl AsymmetricCostScorer {
    pub fn new(schedule: CostSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &CostSchedule {
        &self.schedule
    }

    /// Compute the per-direction cost breakdown for a prediction batch.
    pub fn breakdown(
        &self,
        predictions: &ArrayView1<f64>,
        actuals: &ArrayView1<f64>,
    ) -> Result<CostBreakdown> {
        check_pair(predictions, actuals)?;

        let policy = self.schedule.unit_policy();
        let mut breakdown = CostBreakdown::default();

        for (&pred, &actual) in predictions.iter().zip(actuals.iter()) {
            let diff = pred - actual;
            let cost = self.schedule.cost_of(diff);
            let units = policy.apply_scalar(diff);
            if units > 0.0 {
                breakdown.over_cost += cost;
                breakdown.n_over += 1;
            } else if units < 0.0 {
                breakdown.under_cost += cost;
                breakdown.n_under += 1;
            } else {
                breakdown.n_exact += 1;
            }
        }

        tracing::trace!(
            over_cost = breakdown.over_cost,
            under_cost = breakdown.under_cost,
            n_over = breakdown.n_over,
            n_under = breakdown.n_under,
            n_exact = breakdown.n_exact,
            "cost breakdown"
        );

        Ok(breakdown)
    }
}

impl Scorer for AsymmetricCostScorer {
    fn name(&self) -> &str {
        "asymmetric_cost"
    }

    fn score(&self, predictions: &ArrayView1<f64>, actuals: &ArrayView1<f64>) -> Result<f64> {
        Ok(self.breakdown(predictions, actuals)?.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CostScoreError;
    use crate::utils::UnitPolicy;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};

    fn reference_scorer() -> AsymmetricCostScorer {
        AsymmetricCostScorer::new(CostSchedule::new(0.03, 0.50).unwrap())
    }

    #[test]
    fn test_reference_scenario() {
        let scorer = reference_scorer();
        let predictions = array![10.0, 5.0, 8.0];
        let actuals = array![8.0, 5.0, 12.0];

        let score = scorer.score(&predictions.view(), &actuals.view()).unwrap();
        assert_relative_eq!(score, -2.06, epsilon = 1e-12);

        let breakdown = scorer
            .breakdown(&predictions.view(), &actuals.view())
            .unwrap();
        assert_relative_eq!(breakdown.over_cost, 0.06, epsilon = 1e-12);
        assert_relative_eq!(breakdown.under_cost, 2.0, epsilon = 1e-12);
        assert_eq!(breakdown.n_over, 1);
        assert_eq!(breakdown.n_under, 1);
        assert_eq!(breakdown.n_exact, 1);
        assert_eq!(breakdown.n_samples(), 3);
    }

    #[test]
    fn test_perfect_predictions_score_zero() {
        let scorer = reference_scorer();
        let values = array![1.0, 2.5, -3.0, 100.0];
        let score = scorer.score(&values.view(), &values.view()).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_uniform_over_prediction() {
        let scorer = reference_scorer();
        let actuals = array![4.0, 7.0, 1.0];
        let d = array![1.0, 2.0, 3.0];
        let predictions = &actuals + &d;
        let score = scorer.score(&predictions.view(), &actuals.view()).unwrap();
        assert_relative_eq!(score, -0.03 * d.sum(), epsilon = 1e-12);
    }

    #[test]
    fn test_uniform_under_prediction() {
        let scorer = reference_scorer();
        let actuals = array![4.0, 7.0, 1.0];
        let d = array![0.5, 2.0, 3.0];
        let predictions = &actuals - &d;
        let score = scorer.score(&predictions.view(), &actuals.view()).unwrap();
        assert_relative_eq!(score, -0.5 * d.sum(), epsilon = 1e-12);
    }

    #[test]
    fn test_swapping_costs_and_direction_is_invariant() {
        let schedule = CostSchedule::new(0.03, 0.50).unwrap();
        let predictions = array![10.0, 5.0, 8.0, 1.5];
        let actuals = array![8.0, 5.0, 12.0, 3.0];

        let original = AsymmetricCostScorer::new(schedule)
            .score(&predictions.view(), &actuals.view())
            .unwrap();
        // Reflecting predictions around actuals negates every difference.
        let reflected = &actuals * 2.0 - &predictions;
        let swapped = AsymmetricCostScorer::new(schedule.swapped())
            .score(&reflected.view(), &actuals.view())
            .unwrap();

        assert_relative_eq!(original, swapped, epsilon = 1e-12);
    }

    #[test]
    fn test_dimension_mismatch_for_all_sizes() {
        let scorer = reference_scorer();
        for n_pred in 0..5 {
            for n_actual in 0..5 {
                if n_pred == n_actual {
                    continue;
                }
                let p = Array1::<f64>::zeros(n_pred);
                let a = Array1::<f64>::zeros(n_actual);
                match scorer.score(&p.view(), &a.view()) {
                    Err(CostScoreError::DimensionMismatch {
                        predictions,
                        actuals,
                    }) => {
                        assert_eq!(predictions, n_pred);
                        assert_eq!(actuals, n_actual);
                    }
                    other => panic!("expected DimensionMismatch, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let scorer = reference_scorer();
        let predictions = array![3.2, 9.9, 0.1];
        let actuals = array![4.0, 7.5, 0.0];
        let first = scorer.score(&predictions.view(), &actuals.view()).unwrap();
        let second = scorer.score(&predictions.view(), &actuals.view()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_truncation_drops_partial_units() {
        let scorer = AsymmetricCostScorer::new(
            CostSchedule::with_policy(0.03, 0.50, UnitPolicy::Truncate).unwrap(),
        );
        let predictions = array![10.7, 3.4];
        let actuals = array![8.0, 5.0];
        // 10.7 - 8 = 2.7 -> 2 cups over; 3.4 - 5 = -1.6 -> 1 cup under.
        let score = scorer.score(&predictions.view(), &actuals.view()).unwrap();
        assert_relative_eq!(score, -(0.03 * 2.0 + 0.50 * 1.0), epsilon = 1e-12);

        let small = array![8.4];
        let breakdown = scorer
            .breakdown(&small.view(), &array![8.0].view())
            .unwrap();
        assert_eq!(breakdown.n_exact, 1);
        assert_eq!(breakdown.score(), 0.0);
    }

    #[test]
    fn test_exact_policy_bills_partial_units() {
        let scorer = reference_scorer();
        let predictions = array![8.4];
        let actuals = array![8.0];
        let score = scorer.score(&predictions.view(), &actuals.view()).unwrap();
        assert_relative_eq!(score, -0.03 * 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_scores_zero() {
        let scorer = reference_scorer();
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(scorer.score(&empty.view(), &empty.view()).unwrap(), 0.0);
    }

    #[test]
    fn test_breakdown_agrees_with_cost_of() {
        for schedule in [
            CostSchedule::new(0.03, 0.50).unwrap(),
            CostSchedule::lemonade_stand(),
            CostSchedule::with_policy(1.0, 2.0, UnitPolicy::Round).unwrap(),
        ] {
            let scorer = AsymmetricCostScorer::new(schedule);
            let predictions = array![10.7, 3.4, 5.0, 0.2, 9.5];
            let actuals = array![8.0, 5.0, 5.0, 0.9, 7.0];

            let breakdown = scorer
                .breakdown(&predictions.view(), &actuals.view())
                .unwrap();
            let expected: f64 = predictions
                .iter()
                .zip(actuals.iter())
                .map(|(p, a)| schedule.cost_of(p - a))
                .sum();
            assert_relative_eq!(breakdown.total_cost(), expected, epsilon = 1e-12);
            assert_eq!(breakdown.n_samples(), 5);
        }
    }

    #[test]
    fn test_overflowing_difference_rejected() {
        let scorer = reference_scorer();
        let predictions = array![f64::MAX];
        let actuals = array![-f64::MAX];
        assert!(matches!(
            scorer.score(&predictions.view(), &actuals.view()),
            Err(CostScoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let scorer = reference_scorer();
        let predictions = array![1.0, f64::NAN];
        let actuals = array![1.0, 2.0];
        assert!(matches!(
            scorer.score(&predictions.view(), &actuals.view()),
            Err(CostScoreError::InvalidInput(_))
        ));
    }
}
