//! Bounded scenario lists
//!
//! A [`ScenarioBook`] holds at most [`MAX_SCENARIOS`] scenarios in the order
//! the user authored them. Adding beyond the cap is a no-op that reports
//! [`AddOutcome::CapacityReached`]; there is no per-scenario removal, only a
//! full [`ScenarioBook::reset`].

use crate::error::ScenarioError;
use crate::types::{
    clamp_salary_increase, clamp_score, IndividualScenario, StructuralScenario,
};
use serde::{Deserialize, Serialize};

/// Maximum number of scenarios per list
pub const MAX_SCENARIOS: usize = 5;

/// Result of an add request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Scenario appended at `index`
    Added {
        /// Position of the new scenario (0-based)
        index: usize,
    },
    /// List already full; nothing changed
    CapacityReached,
}

impl AddOutcome {
    /// Whether the request was rejected
    #[inline]
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::CapacityReached)
    }
}

/// Ordered list of scenarios capped at [`MAX_SCENARIOS`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBook<S> {
    scenarios: Vec<S>,
}

impl<S> ScenarioBook<S> {
    /// Create empty book
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            scenarios: Vec::with_capacity(MAX_SCENARIOS),
        }
    }

    /// Append a scenario unless the book is full
    pub fn add(&mut self, scenario: S) -> AddOutcome {
        if self.is_full() {
            tracing::warn!(
                "Scenario limit reached: at most {} scenarios can be added",
                MAX_SCENARIOS
            );
            return AddOutcome::CapacityReached;
        }
        self.scenarios.push(scenario);
        let index = self.scenarios.len() - 1;
        tracing::debug!("Added scenario {}", index + 1);
        AddOutcome::Added { index }
    }

    /// Mutate the scenario at `index` in place
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::IndexOutOfRange`] when `index >= len()`.
    pub fn edit<F>(&mut self, index: usize, f: F) -> Result<(), ScenarioError>
    where
        F: FnOnce(&mut S),
    {
        let len = self.scenarios.len();
        let scenario = self
            .scenarios
            .get_mut(index)
            .ok_or(ScenarioError::IndexOutOfRange { index, len })?;
        f(scenario);
        Ok(())
    }

    /// Remove every scenario, returning how many were discarded
    pub fn reset(&mut self) -> usize {
        let discarded = self.scenarios.len();
        self.scenarios.clear();
        tracing::debug!("Reset scenario list ({} discarded)", discarded);
        discarded
    }

    /// Scenario at `index`
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&S> {
        self.scenarios.get(index)
    }

    /// Iterate in authoring order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.scenarios.iter()
    }

    /// Scenarios as a slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[S] {
        &self.scenarios
    }

    /// Number of scenarios
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the book is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Whether another add would be rejected
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.scenarios.len() >= MAX_SCENARIOS
    }

    /// Display labels, "Scenario 1" through "Scenario n"
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        (1..=self.scenarios.len())
            .map(|n| format!("Scenario {n}"))
            .collect()
    }
}

impl<S> Default for ScenarioBook<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S> IntoIterator for &'a ScenarioBook<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Single-field edit of an individual scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndividualEdit {
    /// Set the promotion flag
    Promotion(bool),
    /// Set the salary increase (clamped to [0, 50])
    SalaryIncreasePct(f64),
}

impl IndividualEdit {
    /// Apply to a scenario
    pub fn apply(self, scenario: &mut IndividualScenario) {
        match self {
            Self::Promotion(value) => scenario.promotion = value,
            Self::SalaryIncreasePct(pct) => {
                scenario.salary_increase_pct = clamp_salary_increase(pct);
            }
        }
    }
}

/// Single-field edit of a structural scenario, values clamped to [1, 5]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StructuralEdit {
    /// Set the leadership score
    Leadership(f64),
    /// Set the compensation and benefits score
    Compensation(f64),
    /// Set the training score
    Training(f64),
}

impl StructuralEdit {
    /// Apply to a scenario
    pub fn apply(self, scenario: &mut StructuralScenario) {
        let scores = &mut scenario.scores;
        match self {
            Self::Leadership(v) => scores.leadership = clamp_score(v),
            Self::Compensation(v) => scores.compensation = clamp_score(v),
            Self::Training(v) => scores.training = clamp_score(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_book() -> ScenarioBook<IndividualScenario> {
        let mut book = ScenarioBook::new();
        for _ in 0..MAX_SCENARIOS {
            assert!(!book.add(IndividualScenario::default()).is_rejected());
        }
        book
    }

    #[test]
    fn add_returns_position() {
        let mut book = ScenarioBook::new();
        assert_eq!(book.add(IndividualScenario::default()), AddOutcome::Added { index: 0 });
        assert_eq!(book.add(IndividualScenario::default()), AddOutcome::Added { index: 1 });
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn sixth_add_is_rejected_without_change() {
        let mut book = full_book();
        let before = book.clone();
        let outcome = book.add(IndividualScenario::new().with_promotion(true));
        assert_eq!(outcome, AddOutcome::CapacityReached);
        assert_eq!(book.len(), MAX_SCENARIOS);
        assert_eq!(book, before);
    }

    #[test]
    fn edit_in_place() {
        let mut book = full_book();
        book.edit(2, |s| IndividualEdit::SalaryIncreasePct(12.0).apply(s))
            .unwrap();
        assert_eq!(book.get(2).unwrap().salary_increase_pct, 12.0);
        assert_eq!(book.get(1).unwrap().salary_increase_pct, 0.0);
    }

    #[test]
    fn edit_out_of_range() {
        let mut book: ScenarioBook<IndividualScenario> = ScenarioBook::new();
        let err = book.edit(0, |_| {}).unwrap_err();
        assert_eq!(err, ScenarioError::IndexOutOfRange { index: 0, len: 0 });
    }

    #[test]
    fn reset_empties_any_length() {
        for n in 0..=MAX_SCENARIOS {
            let mut book = ScenarioBook::new();
            for _ in 0..n {
                book.add(StructuralScenario::default());
            }
            assert_eq!(book.reset(), n);
            assert!(book.is_empty());
        }
    }

    #[test]
    fn labels_follow_order() {
        let mut book = ScenarioBook::new();
        book.add(IndividualScenario::default());
        book.add(IndividualScenario::default());
        assert_eq!(book.labels(), vec!["Scenario 1", "Scenario 2"]);
    }

    #[test]
    fn structural_edit_clamps() {
        let mut s = StructuralScenario::default();
        StructuralEdit::Leadership(9.0).apply(&mut s);
        StructuralEdit::Training(0.0).apply(&mut s);
        StructuralEdit::Compensation(4.2).apply(&mut s);
        assert_eq!(s.scores.leadership, 5.0);
        assert_eq!(s.scores.training, 1.0);
        assert_eq!(s.scores.compensation, 4.2);
    }
}
