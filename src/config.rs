//! Evaluation configuration loaded from JSON.

use crate::error::{CostScoreError, Result};
use crate::scoring::{CostSchedule, RawCostSchedule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for an evaluation run.
///
/// ```json
/// {
///   "cost_schedule": {
///     "over_prediction_unit_cost": 0.03,
///     "under_prediction_unit_cost": 0.5,
///     "unit_policy": "truncate"
///   },
///   "test_fraction": 0.25,
///   "n_folds": 5,
///   "seed": 42
/// }
/// ```
///
/// Every field is optional and falls back to [`EvaluationConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluationConfig {
    pub cost_schedule: CostSchedule,
    /// Fraction of samples held out for evaluation.
    pub test_fraction: f64,
    /// Number of folds for cross-validation.
    pub n_folds: usize,
    /// Seed for the train/test shuffle.
    pub seed: u64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            cost_schedule: CostSchedule::lemonade_stand(),
            test_fraction: 0.25,
            n_folds: 5,
            seed: 42,
        }
    }
}

/// Parsed but unvalidated configuration. The cost schedule is kept raw so
/// that its validation error reaches the caller as `InvalidCostSchedule`.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawEvaluationConfig {
    cost_schedule: RawCostSchedule,
    test_fraction: f64,
    n_folds: usize,
    seed: u64,
}

impl Default for RawEvaluationConfig {
    fn default() -> Self {
        let defaults = EvaluationConfig::default();
        Self {
            cost_schedule: defaults.cost_schedule.into(),
            test_fraction: defaults.test_fraction,
            n_folds: defaults.n_folds,
            seed: defaults.seed,
        }
    }
}

impl TryFrom<RawEvaluationConfig> for EvaluationConfig {
    type Error = CostScoreError;

    fn try_from(raw: RawEvaluationConfig) -> Result<Self> {
        let config = Self {
            cost_schedule: CostSchedule::try_from(raw.cost_schedule)?,
            test_fraction: raw.test_fraction,
            n_folds: raw.n_folds,
            seed: raw.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

impl EvaluationConfig {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawEvaluationConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| CostScoreError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded evaluation config");
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the settings that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(CostScoreError::InvalidParameter(format!(
                "test_fraction must be in (0, 1), got {}",
                self.test_fraction
            )));
        }
        if self.n_folds < 2 {
            return Err(CostScoreError::InvalidParameter(format!(
                "n_folds must be at least 2, got {}",
                self.n_folds
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::UnitPolicy;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EvaluationConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EvaluationConfig::default());
        assert_eq!(config.cost_schedule, CostSchedule::lemonade_stand());
    }

    #[test]
    fn test_full_config() {
        let config = EvaluationConfig::from_json_str(
            r#"{
                "cost_schedule": {
                    "over_prediction_unit_cost": 1.0,
                    "under_prediction_unit_cost": 2.0,
                    "unit_policy": "round"
                },
                "test_fraction": 0.2,
                "n_folds": 3,
                "seed": 7
            }"#,
        )
        .unwrap();
        assert_eq!(config.cost_schedule.over_prediction_unit_cost(), 1.0);
        assert_eq!(config.cost_schedule.under_prediction_unit_cost(), 2.0);
        assert_eq!(config.cost_schedule.unit_policy(), UnitPolicy::Round);
        assert_eq!(config.test_fraction, 0.2);
        assert_eq!(config.n_folds, 3);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_negative_cost_rejected() {
        let result = EvaluationConfig::from_json_str(
            r#"{"cost_schedule": {"over_prediction_unit_cost": -0.03, "under_prediction_unit_cost": 0.5}}"#,
        );
        match result {
            Err(CostScoreError::InvalidCostSchedule(msg)) => {
                assert!(msg.contains("over_prediction_unit_cost"));
                assert!(msg.contains("non-negative"));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let result = EvaluationConfig::from_json_str(
            r#"{"cost_schedule": {"over_prediction_unit_cost": 0.03, "under_prediction_unit_cost": -1}}"#,
        );
        assert!(matches!(result, Err(CostScoreError::InvalidCostSchedule(_))));
    }

    #[test]
    fn test_malformed_cost_schedule_is_config_error() {
        assert!(matches!(
            EvaluationConfig::from_json_str(r#"{"cost_schedule": {"over_prediction_unit_cost": 0.03}}"#),
            Err(CostScoreError::Config(_))
        ));
        assert!(matches!(
            EvaluationConfig::from_json_str(
                r#"{"cost_schedule": {"over_prediction_unit_cost": 0.03, "under_prediction_unit_cost": 0.5, "tax": 1}}"#
            ),
            Err(CostScoreError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_settings() {
        assert!(matches!(
            EvaluationConfig::from_json_str(r#"{"test_fraction": 1.5}"#),
            Err(CostScoreError::InvalidParameter(_))
        ));
        assert!(matches!(
            EvaluationConfig::from_json_str(r#"{"n_folds": 1}"#),
            Err(CostScoreError::InvalidParameter(_))
        ));
        assert!(matches!(
            EvaluationConfig::from_json_str(r#"{"folds": 3}"#),
            Err(CostScoreError::Config(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed": 99}}"#).unwrap();
        let config = EvaluationConfig::from_path(file.path()).unwrap();
        assert_eq!(config.seed, 99);

        match EvaluationConfig::from_path("/definitely/not/here.json") {
            Err(CostScoreError::Config(msg)) => assert!(msg.contains("/definitely/not/here.json")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let config = EvaluationConfig::default();
        let json = config.to_json_string().unwrap();
        assert_eq!(EvaluationConfig::from_json_str(&json).unwrap(), config);
    }
}
