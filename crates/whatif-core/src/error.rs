//! Error types for the what-if engine
//!
//! The adjusters themselves never fail. Errors only arise from the session
//! surface:
//! - Editing a scenario that does not exist
//! - Selecting a unit or employee that is not in the dataset

/// Main error type
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Scenario list error
    #[error("scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    /// Selection error
    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),
}

/// Scenario list errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    /// Index does not address an existing scenario
    #[error("scenario index {index} out of range (list holds {len})")]
    IndexOutOfRange {
        /// Requested index (0-based)
        index: usize,
        /// Current list length
        len: usize,
    },
}

/// Selection errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Unit is not present in the dataset
    #[error("unknown unit: '{0}'")]
    UnknownUnit(String),

    /// Employee is not present in the dataset
    #[error("unknown employee: '{0}'")]
    UnknownEmployee(String),
}
