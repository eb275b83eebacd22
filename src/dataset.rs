//! Samples, datasets and partitioning.
//!
//! A [`Dataset`] is read-only once built. Partitioning never mutates the
//! source; it produces new datasets from row indices.

use crate::error::{CostScoreError, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// One observation: a feature vector and its target value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub features: Vec<f64>,
    pub target: f64,
}

impl Sample {
    pub fn new(features: Vec<f64>, target: f64) -> Self {
        Self { features, target }
    }
}

/// An ordered collection of samples stored as a feature matrix and a target
/// vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f64>,
    targets: Array1<f64>,
}

impl Dataset {
    /// Build a dataset from a feature matrix and index-aligned targets.
    pub fn new(features: Array2<f64>, targets: Array1<f64>) -> Result<Self> {
        if features.nrows() != targets.len() {
            return Err(CostScoreError::ShapeMismatch {
                expected: format!("{} targets", features.nrows()),
                actual: format!("{} targets", targets.len()),
            });
        }
        Ok(Self { features, targets })
    }

    /// Build a dataset from samples. All feature vectors must have the same
    /// length.
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        let n_features = samples.first().map_or(0, |s| s.features.len());
        if let Some(i) = samples
            .iter()
            .position(|s| s.features.len() != n_features)
        {
            return Err(CostScoreError::InvalidInput(format!(
                "sample {} has {} features, expected {}",
                i,
                samples[i].features.len(),
                n_features
            )));
        }

        let flat: Vec<f64> = samples
            .iter()
            .flat_map(|s| s.features.iter().copied())
            .collect();
        let features = Array2::from_shape_vec((samples.len(), n_features), flat)?;
        let targets = samples.iter().map(|s| s.target).collect::<Array1<f64>>();
        Self::new(features, targets)
    }

    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    pub fn targets(&self) -> ArrayView1<'_, f64> {
        self.targets.view()
    }

    pub fn n_samples(&self) -> usize {
        self.targets.len()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Copy out the sample at `index`.
    pub fn sample(&self, index: usize) -> Option<Sample> {
        if index >= self.n_samples() {
            return None;
        }
        Some(Sample::new(
            self.features.row(index).to_vec(),
            self.targets[index],
        ))
    }

    /// A new dataset containing the given rows, in the given order.
    pub fn select(&self, indices: &[usize]) -> Result<Self> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.n_samples()) {
            return Err(CostScoreError::InvalidParameter(format!(
                "row index {} out of bounds for {} samples",
                bad,
                self.n_samples()
            )));
        }
        Ok(Self {
            features: self.features.select(Axis(0), indices),
            targets: self.targets.select(Axis(0), indices),
        })
    }

    /// Randomly partition into `(train, test)`.
    ///
    /// The test set holds `ceil(n * test_fraction)` samples, clamped so that
    /// neither side is empty. The same seed always yields the same split.
    pub fn train_test_split(&self, test_fraction: f64, seed: u64) -> Result<(Self, Self)> {
        if !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(CostScoreError::InvalidParameter(format!(
                "test_fraction must be in (0, 1), got {}",
                test_fraction
            )));
        }
        let n = self.n_samples();
        if n < 2 {
            return Err(CostScoreError::InvalidParameter(format!(
                "need at least 2 samples to split, got {}",
                n
            )));
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let n_test = ((n as f64 * test_fraction).ceil() as usize).clamp(1, n - 1);
        let (test_idx, train_idx) = indices.split_at(n_test);

        Ok((self.select(train_idx)?, self.select(test_idx)?))
    }

    /// Contiguous k-fold partition as `(train_indices, test_indices)` pairs.
    ///
    /// The last fold absorbs the remainder when `n` is not divisible by
    /// `n_folds`.
    pub fn k_fold(&self, n_folds: usize) -> Result<Vec<(Vec<usize>, Vec<usize>)>> {
        let n = self.n_samples();
        if n_folds < 2 || n_folds > n {
            return Err(CostScoreError::InvalidParameter(format!(
                "n_folds must be in [2, {}], got {}",
                n, n_folds
            )));
        }

        let fold_size = n / n_folds;
        let folds = (0..n_folds)
            .map(|i| {
                let test_start = i * fold_size;
                let test_end = if i == n_folds - 1 {
                    n
                } else {
                    (i + 1) * fold_size
                };
                let test: Vec<usize> = (test_start..test_end).collect();
                let train: Vec<usize> = (0..test_start).chain(test_end..n).collect();
                (train, test)
            })
            .collect();
        Ok(folds)
    }
}
