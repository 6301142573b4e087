//! Scenario plan files
//!
//! A plan is a TOML description of one session: the selection and the
//! scenarios to author, in order.
//!
//! ```toml
//! unit = "Ventas"
//! employee = "Ana"
//!
//! [[individual]]
//! salary_increase_pct = 10
//!
//! [[individual]]
//! promotion = true
//! salary_increase_pct = 50
//!
//! [[structural]]
//! leadership = 4.0
//! ```
//!
//! Entries go through the same add / edit operations as interactive use, so
//! anything past the fifth entry of a kind is rejected and reported.

use crate::error::{CliError, PlanError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use whatif_core::{
    AddOutcome, EmployeeFilter, IndividualEdit, Session, StructuralEdit, UnitFilter,
};

/// Individual plan entry; missing fields keep the session defaults
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanIndividual {
    /// Promotion flag
    pub promotion: Option<bool>,
    /// Salary increase in percent
    pub salary_increase_pct: Option<f64>,
}

/// Structural plan entry; missing fields keep the unit baseline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanStructural {
    /// Leadership score
    pub leadership: Option<f64>,
    /// Compensation and benefits score
    pub compensation: Option<f64>,
    /// Training score
    pub training: Option<f64>,
}

/// A whole session description
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    /// Unit to select; all units when absent
    pub unit: Option<String>,
    /// Employee to select; all employees when absent
    pub employee: Option<String>,
    /// Individual scenarios in order
    pub individual: Vec<PlanIndividual>,
    /// Structural scenarios in order
    pub structural: Vec<PlanStructural>,
}

/// What applying a plan did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanReport {
    /// Individual scenarios added
    pub individual_added: usize,
    /// Individual entries rejected for capacity
    pub individual_rejected: usize,
    /// Structural scenarios added
    pub structural_added: usize,
    /// Structural entries rejected for capacity
    pub structural_rejected: usize,
}

impl PlanReport {
    /// Whether any entry was dropped
    #[inline]
    #[must_use]
    pub fn has_rejections(&self) -> bool {
        self.individual_rejected > 0 || self.structural_rejected > 0
    }
}

impl Plan {
    /// Parse a plan from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Parse`] on invalid TOML.
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self, PlanError> {
        toml::from_str(contents).map_err(|source| PlanError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a plan file
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents, path)
    }

    /// Apply selection and scenarios to a session
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Core`] when the unit or employee is unknown.
    pub fn apply(&self, session: &mut Session<'_>) -> Result<PlanReport, CliError> {
        let unit = self.unit.as_deref().map_or(UnitFilter::All, |u| {
            u.parse().unwrap_or(UnitFilter::All)
        });
        session.select_unit(unit)?;
        let employee = self.employee.as_deref().map_or(EmployeeFilter::All, |e| {
            e.parse().unwrap_or(EmployeeFilter::All)
        });
        session.select_employee(employee)?;

        let mut report = PlanReport::default();

        for entry in &self.individual {
            match session.add_individual() {
                AddOutcome::Added { index } => {
                    if let Some(promotion) = entry.promotion {
                        session.edit_individual(index, IndividualEdit::Promotion(promotion))?;
                    }
                    if let Some(pct) = entry.salary_increase_pct {
                        session.edit_individual(index, IndividualEdit::SalaryIncreasePct(pct))?;
                    }
                    report.individual_added += 1;
                }
                AddOutcome::CapacityReached => report.individual_rejected += 1,
            }
        }

        for entry in &self.structural {
            match session.add_structural() {
                AddOutcome::Added { index } => {
                    let edits = [
                        entry.leadership.map(StructuralEdit::Leadership),
                        entry.compensation.map(StructuralEdit::Compensation),
                        entry.training.map(StructuralEdit::Training),
                    ];
                    for edit in edits.into_iter().flatten() {
                        session.edit_structural(index, edit)?;
                    }
                    report.structural_added += 1;
                }
                AddOutcome::CapacityReached => report.structural_rejected += 1,
            }
        }

        tracing::info!(
            "Applied plan: {} individual, {} structural scenarios",
            report.individual_added,
            report.structural_added
        );
        Ok(report)
    }
}
