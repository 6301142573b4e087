//! Explicit session state
//!
//! A [`Session`] is owned by its caller and passed to every operation. It
//! borrows the dataset and carries the current selection plus one scenario
//! book per analysis kind. Nothing here is global or shared.

use crate::dataset::Dataset;
use crate::error::{ScenarioError, SelectionError};
use crate::scenario::{AddOutcome, IndividualEdit, ScenarioBook, StructuralEdit};
use crate::types::{ClimateScores, EmployeeRecord, IndividualScenario, StructuralScenario};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tokens accepted as the "everything" wildcard
const WILDCARDS: [&str; 4] = ["all", "*", "todos", "todas"];

fn is_wildcard(s: &str) -> bool {
    WILDCARDS.iter().any(|w| s.eq_ignore_ascii_case(w))
}

/// Unit filter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitFilter {
    /// Every unit
    #[default]
    All,
    /// One unit by name
    Named(String),
}

impl UnitFilter {
    /// Filter for one unit
    #[inline]
    #[must_use]
    pub fn named(unit: impl Into<String>) -> Self {
        Self::Named(unit.into())
    }

    /// Whether `unit` passes the filter
    #[inline]
    #[must_use]
    pub fn matches(&self, unit: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(u) => u == unit,
        }
    }
}

impl FromStr for UnitFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(if is_wildcard(s) { Self::All } else { Self::named(s) })
    }
}

impl fmt::Display for UnitFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all units"),
            Self::Named(u) => f.write_str(u),
        }
    }
}

/// Employee filter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmployeeFilter {
    /// Every employee passing the unit filter
    #[default]
    All,
    /// One employee by name
    Named(String),
}

impl EmployeeFilter {
    /// Filter for one employee
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Whether `name` passes the filter
    #[inline]
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(n) => n == name,
        }
    }
}

impl FromStr for EmployeeFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(if is_wildcard(s) { Self::All } else { Self::named(s) })
    }
}

impl fmt::Display for EmployeeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all employees"),
            Self::Named(n) => f.write_str(n),
        }
    }
}

/// Current unit + employee selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Unit filter
    pub unit: UnitFilter,
    /// Employee filter
    pub employee: EmployeeFilter,
}

impl Selection {
    /// Whether a record passes both filters
    #[inline]
    #[must_use]
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        self.unit.matches(&record.unit) && self.employee.matches(&record.name)
    }
}

/// One interactive session over a dataset
#[derive(Debug, Clone)]
pub struct Session<'d> {
    dataset: &'d Dataset,
    selection: Selection,
    individual: ScenarioBook<IndividualScenario>,
    structural: ScenarioBook<StructuralScenario>,
    individual_default: IndividualScenario,
}

impl<'d> Session<'d> {
    /// Create session with everything selected and no scenarios
    #[must_use]
    pub fn new(dataset: &'d Dataset) -> Self {
        Self {
            dataset,
            selection: Selection::default(),
            individual: ScenarioBook::new(),
            structural: ScenarioBook::new(),
            individual_default: IndividualScenario::default(),
        }
    }

    /// With the values new individual scenarios start from
    #[inline]
    #[must_use]
    pub fn with_individual_default(mut self, default: IndividualScenario) -> Self {
        self.individual_default = default.clamped();
        self
    }

    /// Dataset this session reads from
    #[inline]
    #[must_use]
    pub fn dataset(&self) -> &'d Dataset {
        self.dataset
    }

    /// Current selection
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Individual scenarios
    #[inline]
    #[must_use]
    pub fn individual(&self) -> &ScenarioBook<IndividualScenario> {
        &self.individual
    }

    /// Structural scenarios
    #[inline]
    #[must_use]
    pub fn structural(&self) -> &ScenarioBook<StructuralScenario> {
        &self.structural
    }

    /// Change the unit filter.
    ///
    /// A named employee outside the new unit is dropped back to `All`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownUnit`] when no record has that unit.
    pub fn select_unit(&mut self, unit: UnitFilter) -> Result<(), SelectionError> {
        if let UnitFilter::Named(name) = &unit {
            if !self.dataset.has_unit(name) {
                return Err(SelectionError::UnknownUnit(name.clone()));
            }
        }
        if let EmployeeFilter::Named(employee) = &self.selection.employee {
            let still_visible = self
                .dataset
                .records()
                .iter()
                .any(|r| &r.name == employee && unit.matches(&r.unit));
            if !still_visible {
                tracing::debug!("Employee '{}' not in {}, clearing", employee, unit);
                self.selection.employee = EmployeeFilter::All;
            }
        }
        tracing::debug!("Selected unit: {}", unit);
        self.selection.unit = unit;
        Ok(())
    }

    /// Change the employee filter
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownEmployee`] when no record has that name.
    pub fn select_employee(&mut self, employee: EmployeeFilter) -> Result<(), SelectionError> {
        if let EmployeeFilter::Named(name) = &employee {
            if self.dataset.find(name).is_none() {
                return Err(SelectionError::UnknownEmployee(name.clone()));
            }
        }
        tracing::debug!("Selected employee: {}", employee);
        self.selection.employee = employee;
        Ok(())
    }

    /// Records passing the current selection, in dataset order
    #[must_use]
    pub fn selected_employees(&self) -> Vec<&'d EmployeeRecord> {
        let dataset: &'d Dataset = self.dataset;
        dataset
            .records()
            .iter()
            .filter(|r| self.selection.matches(r))
            .collect()
    }

    /// Records visible under the current unit filter, ignoring the employee filter
    #[must_use]
    pub fn employee_options(&self) -> Vec<&'d EmployeeRecord> {
        let dataset: &'d Dataset = self.dataset;
        dataset
            .records()
            .iter()
            .filter(|r| self.selection.unit.matches(&r.unit))
            .collect()
    }

    /// Baseline climate scores of the selected unit, if a single unit is selected
    #[must_use]
    pub fn selected_unit_baseline(&self) -> Option<ClimateScores> {
        match &self.selection.unit {
            UnitFilter::Named(unit) => self.dataset.unit_baseline(unit),
            UnitFilter::All => None,
        }
    }

    /// Append an individual scenario with the session defaults
    pub fn add_individual(&mut self) -> AddOutcome {
        self.individual.add(self.individual_default)
    }

    /// Append a structural scenario starting from the selected unit's baseline
    pub fn add_structural(&mut self) -> AddOutcome {
        let start = self
            .selected_unit_baseline()
            .unwrap_or(ClimateScores::MIDPOINT);
        self.structural.add(StructuralScenario::new(start))
    }

    /// Edit one field of an individual scenario
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::IndexOutOfRange`] for a missing scenario.
    pub fn edit_individual(&mut self, index: usize, edit: IndividualEdit) -> Result<(), ScenarioError> {
        self.individual.edit(index, |s| edit.apply(s))
    }

    /// Edit one field of a structural scenario
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::IndexOutOfRange`] for a missing scenario.
    pub fn edit_structural(&mut self, index: usize, edit: StructuralEdit) -> Result<(), ScenarioError> {
        self.structural.edit(index, |s| edit.apply(s))
    }

    /// Drop every individual scenario
    pub fn reset_individual(&mut self) -> usize {
        self.individual.reset()
    }

    /// Drop every structural scenario
    pub fn reset_structural(&mut self) -> usize {
        self.structural.reset()
    }
}
