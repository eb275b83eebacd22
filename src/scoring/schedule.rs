//! Unit costs for over- and under-prediction.

use crate::error::{CostScoreError, Result};
use crate::utils::UnitPolicy;
use serde::{Deserialize, Serialize};

/// Per-unit costs of over-prediction and under-prediction.
///
/// Both costs are validated once at construction and cannot change
/// afterwards. Deserialization goes through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCostSchedule", into = "RawCostSchedule")]
pub struct CostSchedule {
    over_prediction_unit_cost: f64,
    under_prediction_unit_cost: f64,
    unit_policy: UnitPolicy,
}

impl CostSchedule {
    /// Create a schedule billing raw (fractional) differences.
    pub fn new(over_prediction_unit_cost: f64, under_prediction_unit_cost: f64) -> Result<Self> {
        Self::with_policy(
            over_prediction_unit_cost,
            under_prediction_unit_cost,
            UnitPolicy::Exact,
        )
    }

    /// Create a schedule with an explicit unit policy.
    pub fn with_policy(
        over_prediction_unit_cost: f64,
        under_prediction_unit_cost: f64,
        unit_policy: UnitPolicy,
    ) -> Result<Self> {
        validate_cost("over_prediction_unit_cost", over_prediction_unit_cost)?;
        validate_cost("under_prediction_unit_cost", under_prediction_unit_cost)?;
        Ok(Self {
            over_prediction_unit_cost,
            under_prediction_unit_cost,
            unit_policy,
        })
    }

    /// The lemonade stand scenario.
    ///
    /// A leftover cup wastes 0.03 in materials, a missed sale loses 0.50.
    /// Only whole cups count, so differences are truncated.
    pub fn lemonade_stand() -> Self {
        Self {
            over_prediction_unit_cost: 0.03,
            under_prediction_unit_cost: 0.50,
            unit_policy: UnitPolicy::Truncate,
        }
    }

    pub fn over_prediction_unit_cost(&self) -> f64 {
        self.over_prediction_unit_cost
    }

    pub fn under_prediction_unit_cost(&self) -> f64 {
        self.under_prediction_unit_cost
    }

    pub fn unit_policy(&self) -> UnitPolicy {
        self.unit_policy
    }

    /// A copy with the two unit costs exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            over_prediction_unit_cost: self.under_prediction_unit_cost,
            under_prediction_unit_cost: self.over_prediction_unit_cost,
            unit_policy: self.unit_policy,
        }
    }

    /// Cost of a single signed error (`prediction - actual`).
    pub fn cost_of(&self, diff: f64) -> f64 {
        let units = self.unit_policy.apply_scalar(diff);
        if units > 0.0 {
            self.over_prediction_unit_cost * units
        } else if units < 0.0 {
            self.under_prediction_unit_cost * -units
        } else {
            0.0
        }
    }
}

impl Default for CostSchedule {
    fn default() -> Self {
        Self::lemonade_stand()
    }
}

fn validate_cost(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CostScoreError::InvalidCostSchedule(format!(
            "{} must be finite, got {}",
            field, value
        )));
    }
    if value < 0.0 {
        return Err(CostScoreError::InvalidCostSchedule(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Unvalidated wire form of a [`CostSchedule`].
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawCostSchedule {
    over_prediction_unit_cost: f64,
    under_prediction_unit_cost: f64,
    #[serde(default)]
    unit_policy: UnitPolicy,
}

impl TryFrom<RawCostSchedule> for CostSchedule {
    type Error = CostScoreError;

    fn try_from(raw: RawCostSchedule) -> Result<Self> {
        Self::with_policy(
            raw.over_prediction_unit_cost,
            raw.under_prediction_unit_cost,
            raw.unit_policy,
        )
    }
}

impl From<CostSchedule> for RawCostSchedule {
    fn from(schedule: CostSchedule) -> Self {
        Self {
            over_prediction_unit_cost: schedule.over_prediction_unit_cost,
            under_prediction_unit_cost: schedule.under_prediction_unit_cost,
            unit_policy: schedule.unit_policy,
        }
    }
}
