//! Evaluation harness.
//!
//! Applies a scoring function to a model's predictions on held-out data,
//! with cross-validation and multi-model comparison on top.

use crate::backend::Regressor;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::scoring::{AsymmetricCostScorer, CostSchedule, Scorer};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Score a fitted model on an evaluation dataset.
///
/// The model's `predict` is called exactly once, on the full feature batch.
/// Its errors are returned as-is; nothing is retried.
pub fn evaluate<R, S>(model: &R, dataset: &Dataset, scorer: &S) -> Result<f64>
where
    R: Regressor + ?Sized,
    S: Scorer + ?Sized,
{
    let span = tracing::debug_span!(
        "evaluate",
        model = model.name(),
        scorer = scorer.name(),
        n_samples = dataset.n_samples()
    );
    let _guard = span.enter();

    let predictions = model.predict(&dataset.features())?;
    let score = scorer.score(&predictions.view(), &dataset.targets())?;

    tracing::debug!(score, "evaluation finished");
    Ok(score)
}

/// Score a fitted model by the asymmetric business cost of its errors.
pub fn evaluate_cost<R>(model: &R, dataset: &Dataset, schedule: &CostSchedule) -> Result<f64>
where
    R: Regressor + ?Sized,
{
    evaluate(model, dataset, &AsymmetricCostScorer::new(*schedule))
}

/// Per-fold scores from [`cross_val_score`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvResult {
    pub fold_scores: Vec<f64>,
    pub mean: f64,
    /// Population standard deviation of the fold scores.
    pub std: f64,
}

impl CvResult {
    fn from_scores(fold_scores: Vec<f64>) -> Self {
        let n = fold_scores.len() as f64;
        let mean = fold_scores.iter().sum::<f64>() / n;
        let var = fold_scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        Self {
            fold_scores,
            mean,
            std: var.sqrt(),
        }
    }
}

/// K-fold cross-validated score.
///
/// For each fold a fresh model is built by `make_model`, fitted on the
/// remaining folds and evaluated on the held-out fold.
pub fn cross_val_score<F, R, S>(
    make_model: F,
    dataset: &Dataset,
    scorer: &S,
    n_folds: usize,
) -> Result<CvResult>
where
    F: Fn() -> R,
    R: Regressor,
    S: Scorer + ?Sized,
{
    let folds = dataset.k_fold(n_folds)?;
    let mut scores = Vec::with_capacity(folds.len());

    for (i, (train_idx, test_idx)) in folds.iter().enumerate() {
        let train = dataset.select(train_idx)?;
        let test = dataset.select(test_idx)?;

        let mut model = make_model();
        model.fit(&train.features(), &train.targets())?;
        let score = evaluate(&model, &test, scorer)?;

        tracing::debug!(fold = i, n_test = test.n_samples(), score, "fold scored");
        scores.push(score);
    }

    Ok(CvResult::from_scores(scores))
}

/// Score of one model in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelScore {
    pub name: String,
    pub score: f64,
}

/// Evaluate several fitted models on the same dataset and rank them, best
/// first.
///
/// Models that fail to predict are skipped with a warning. If every model
/// fails, the first failure is returned.
pub fn compare_models<S>(
    models: &[&dyn Regressor],
    dataset: &Dataset,
    scorer: &S,
) -> Result<Vec<ModelScore>>
where
    S: Scorer + ?Sized,
{
    let results: Vec<_> = models
        .par_iter()
        .map(|model| (model.name().to_string(), evaluate(*model, dataset, scorer)))
        .collect();

    let mut ranked = Vec::with_capacity(results.len());
    let mut first_err = None;
    for (name, result) in results {
        match result {
            Ok(score) => ranked.push(ModelScore { name, score }),
            Err(e) => {
                tracing::warn!(model = %name, error = %e, "skipping model that failed to score");
                first_err.get_or_insert(e);
            }
        }
    }

    if ranked.is_empty() {
        if let Some(e) = first_err {
            return Err(e);
        }
    }

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(ranked)
}
