//! In-memory employee dataset
//!
//! Built once per session from the ingestion layer and never mutated.

use crate::types::{ClimateScores, EmployeeRecord};
use std::collections::BTreeSet;

/// Immutable collection of employee records in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<EmployeeRecord>,
}

impl Dataset {
    /// Create dataset from records
    #[must_use]
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }

    /// All records in source order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct unit names, sorted
    #[must_use]
    pub fn units(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.unit.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whether any record belongs to `unit`
    #[must_use]
    pub fn has_unit(&self, unit: &str) -> bool {
        self.records.iter().any(|r| r.unit == unit)
    }

    /// Records of one unit, in source order
    pub fn employees_in<'a>(&'a self, unit: &'a str) -> impl Iterator<Item = &'a EmployeeRecord> + 'a {
        self.records.iter().filter(move |r| r.unit == unit)
    }

    /// First record with the given name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Climate scores representing `unit`.
    ///
    /// Taken from the first record of the unit that carries scores; values
    /// are not averaged across the unit.
    #[must_use]
    pub fn unit_baseline(&self, unit: &str) -> Option<ClimateScores> {
        self.employees_in(unit).find_map(|r| r.climate)
    }
}
