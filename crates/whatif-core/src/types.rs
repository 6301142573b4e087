//! Core types for the what-if engine
//!
//! Defines the fundamental data the adjusters operate on:
//! - Employee records (read-only, sourced from the dataset)
//! - Climate scores shared by every employee of a unit
//! - The two scenario kinds a user can author

use serde::{Deserialize, Serialize};

/// Lowest value a climate score can take
pub const SCORE_MIN: f64 = 1.0;

/// Highest value a climate score can take
pub const SCORE_MAX: f64 = 5.0;

/// Upper bound of the salary increase a scenario may request, in percent
pub const SALARY_INCREASE_MAX_PCT: f64 = 50.0;

/// One row of the source dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee identifier, unique within the dataset by convention
    pub name: String,
    /// Organisational unit the employee belongs to
    pub unit: String,
    /// Unadjusted attrition risk in [0, 1]
    pub base_probability: f64,
    /// Climate scores of the employee's unit, if the dataset carries them
    pub climate: Option<ClimateScores>,
}

impl EmployeeRecord {
    /// Create a record without climate scores
    #[must_use]
    pub fn new(name: impl Into<String>, unit: impl Into<String>, base_probability: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            base_probability,
            climate: None,
        }
    }

    /// With climate scores
    #[inline]
    #[must_use]
    pub fn with_climate(mut self, climate: ClimateScores) -> Self {
        self.climate = Some(climate);
        self
    }
}

/// Structural climate scores of a unit (leadership, compensation, training)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateScores {
    /// Leadership score
    pub leadership: f64,
    /// Compensation and benefits score
    pub compensation: f64,
    /// Training score
    pub training: f64,
}

impl ClimateScores {
    /// Neutral scores used when no unit baseline is available
    pub const MIDPOINT: Self = Self {
        leadership: 3.0,
        compensation: 3.0,
        training: 3.0,
    };

    /// Create scores from the three components
    #[inline]
    #[must_use]
    pub const fn new(leadership: f64, compensation: f64, training: f64) -> Self {
        Self {
            leadership,
            compensation,
            training,
        }
    }

    /// Sum of the per-component differences `other - self`
    #[inline]
    #[must_use]
    pub fn delta_sum(&self, other: &Self) -> f64 {
        (other.leadership - self.leadership)
            + (other.compensation - self.compensation)
            + (other.training - self.training)
    }

    /// Each component clamped to the score scale
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            leadership: clamp_score(self.leadership),
            compensation: clamp_score(self.compensation),
            training: clamp_score(self.training),
        }
    }
}

impl Default for ClimateScores {
    fn default() -> Self {
        Self::MIDPOINT
    }
}

/// Clamp a single climate score to [`SCORE_MIN`, `SCORE_MAX`]
#[inline]
#[must_use]
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(SCORE_MIN, SCORE_MAX)
}

/// Clamp a salary increase to [0, `SALARY_INCREASE_MAX_PCT`]
#[inline]
#[must_use]
pub fn clamp_salary_increase(pct: f64) -> f64 {
    pct.clamp(0.0, SALARY_INCREASE_MAX_PCT)
}

/// Hypothetical salary / promotion change for one employee
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndividualScenario {
    /// Whether the employee is promoted
    #[serde(default)]
    pub promotion: bool,
    /// Salary increase in percent, [0, 50]
    #[serde(default)]
    pub salary_increase_pct: f64,
}

impl IndividualScenario {
    /// Scenario with no change
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With promotion flag
    #[inline]
    #[must_use]
    pub fn with_promotion(mut self, promotion: bool) -> Self {
        self.promotion = promotion;
        self
    }

    /// With salary increase, clamped to the allowed range
    #[inline]
    #[must_use]
    pub fn with_salary_increase(mut self, pct: f64) -> Self {
        self.salary_increase_pct = clamp_salary_increase(pct);
        self
    }

    /// Copy with every field forced into its allowed range
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            promotion: self.promotion,
            salary_increase_pct: clamp_salary_increase(self.salary_increase_pct),
        }
    }
}

/// Hypothetical climate scores for a unit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StructuralScenario {
    /// Revised scores
    #[serde(flatten)]
    pub scores: ClimateScores,
}

impl StructuralScenario {
    /// Create scenario from revised scores, clamped to the score scale
    #[inline]
    #[must_use]
    pub fn new(scores: ClimateScores) -> Self {
        Self {
            scores: scores.clamped(),
        }
    }
}
