//! Pull-based result queries
//!
//! Given a session, build the table of baseline and scenario probabilities
//! on demand. Results are not stored anywhere; every call recomputes them
//! from the current selection and scenario lists.

use crate::adjust::{adjust_individual, adjust_structural, structural_factor};
use crate::session::Session;
use crate::severity::{Severity, SeverityBands};
use crate::types::{ClimateScores, EmployeeRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header of the synthetic zeroth column
pub const BASE_COLUMN: &str = "Base";

/// Which adjuster produced a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    /// Salary / promotion scenarios
    Individual,
    /// Climate-score scenarios
    Structural,
}

/// One probability with its severity tag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultCell {
    /// Probability in [0, 1]
    pub probability: f64,
    /// Display tier
    pub severity: Severity,
}

impl ResultCell {
    fn new(probability: f64, bands: &SeverityBands) -> Self {
        Self {
            probability,
            severity: bands.classify(probability),
        }
    }
}

/// Results for one employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Employee name
    pub name: String,
    /// Employee unit
    pub unit: String,
    /// Base probability followed by one cell per scenario
    pub cells: Vec<ResultCell>,
}

/// Baseline-plus-scenario probabilities for the current selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// Adjuster that produced the table
    pub kind: AnalysisKind,
    /// Column headers: "Base", "Scenario 1", ...
    pub columns: Vec<String>,
    /// One row per selected employee
    pub rows: Vec<ResultRow>,
    /// Structural only: per-unit probability delta of each scenario
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub factors: BTreeMap<String, Vec<f64>>,
}

impl ResultTable {
    /// Row for an employee
    #[must_use]
    pub fn row(&self, name: &str) -> Option<&ResultRow> {
        self.rows.iter().find(|r| r.name == name)
    }
}

fn columns(labels: Vec<String>) -> Vec<String> {
    std::iter::once(BASE_COLUMN.to_string()).chain(labels).collect()
}

/// Individual-scenario results with default severity bands
#[must_use]
pub fn individual_results(session: &Session<'_>) -> Option<ResultTable> {
    individual_results_with(session, &SeverityBands::default())
}

/// Individual-scenario results.
///
/// `None` when nothing is selected or no scenario exists.
#[must_use]
pub fn individual_results_with(session: &Session<'_>, bands: &SeverityBands) -> Option<ResultTable> {
    let book = session.individual();
    let employees = session.selected_employees();
    if book.is_empty() || employees.is_empty() {
        return None;
    }

    let rows: Vec<ResultRow> = employees
        .into_iter()
        .map(|record| {
            let base = record.base_probability;
            let cells = std::iter::once(base)
                .chain(
                    book.iter()
                        .map(|s| adjust_individual(base, s.salary_increase_pct, s.promotion)),
                )
                .map(|p| ResultCell::new(p, bands))
                .collect();
            row(record, cells)
        })
        .collect();

    tracing::debug!(
        "Computed {} individual scenarios for {} employees",
        book.len(),
        rows.len()
    );

    Some(ResultTable {
        kind: AnalysisKind::Individual,
        columns: columns(book.labels()),
        rows,
        factors: BTreeMap::new(),
    })
}

/// Structural-scenario results with default severity bands
#[must_use]
pub fn structural_results(session: &Session<'_>) -> Option<ResultTable> {
    structural_results_with(session, &SeverityBands::default())
}

/// Structural-scenario results.
///
/// Each employee is adjusted against the baseline of its own unit. Units
/// without climate scores contribute no rows. `None` when no row remains or
/// no scenario exists.
#[must_use]
pub fn structural_results_with(session: &Session<'_>, bands: &SeverityBands) -> Option<ResultTable> {
    let book = session.structural();
    if book.is_empty() {
        return None;
    }

    let dataset = session.dataset();
    let mut baselines: BTreeMap<&str, Option<ClimateScores>> = BTreeMap::new();
    let mut rows = Vec::new();

    for record in session.selected_employees() {
        let baseline = *baselines
            .entry(record.unit.as_str())
            .or_insert_with(|| dataset.unit_baseline(&record.unit));
        let Some(baseline) = baseline else {
            continue;
        };
        let base = record.base_probability;
        let cells = std::iter::once(base)
            .chain(
                book.iter()
                    .map(|s| adjust_structural(base, &baseline, &s.scores)),
            )
            .map(|p| ResultCell::new(p, bands))
            .collect();
        rows.push(row(record, cells));
    }

    if rows.is_empty() {
        return None;
    }

    let factors = baselines
        .into_iter()
        .filter_map(|(unit, baseline)| {
            let baseline = baseline?;
            if !rows.iter().any(|r| r.unit == unit) {
                return None;
            }
            let per_scenario = book
                .iter()
                .map(|s| structural_factor(&baseline, &s.scores))
                .collect();
            Some((unit.to_string(), per_scenario))
        })
        .collect();

    tracing::debug!(
        "Computed {} structural scenarios for {} employees",
        book.len(),
        rows.len()
    );

    Some(ResultTable {
        kind: AnalysisKind::Structural,
        columns: columns(book.labels()),
        rows,
        factors,
    })
}

fn row(record: &EmployeeRecord, cells: Vec<ResultCell>) -> ResultRow {
    ResultRow {
        name: record.name.clone(),
        unit: record.unit.clone(),
        cells,
    }
}
