//! What-If Core - attrition-risk scenario engine
//!
//! The pure part of the what-if dashboard:
//! - Two adjusters (individual and structural) that recompute a risk
//!   probability from a hypothetical scenario
//! - Bounded, ordered scenario lists with add / edit / reset semantics
//! - An explicit [`Session`] that carries the current selection and the
//!   scenario lists
//! - A pull-based query that turns a session into a [`ResultTable`]
//!
//! # Example
//!
//! ```rust
//! use whatif_core::prelude::*;
//!
//! let dataset = Dataset::new(vec![EmployeeRecord::new("Ana", "Ventas", 0.8)]);
//! let mut session = Session::new(&dataset);
//! session.select_employee(EmployeeFilter::named("Ana")).unwrap();
//!
//! session.add_individual();
//! session
//!     .edit_individual(0, IndividualEdit::SalaryIncreasePct(50.0))
//!     .unwrap();
//! session
//!     .edit_individual(0, IndividualEdit::Promotion(true))
//!     .unwrap();
//!
//! let table = individual_results(&session).unwrap();
//! assert_eq!(table.columns, vec!["Base", "Scenario 1"]);
//! assert!((table.rows[0].cells[1].probability - 0.6).abs() < 1e-12);
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

pub mod adjust;
pub mod dataset;
pub mod error;
pub mod query;
pub mod scenario;
pub mod session;
pub mod severity;
pub mod types;

// Re-exports for convenience
pub use adjust::{adjust_individual, adjust_structural, clamp_probability, structural_factor};
pub use dataset::Dataset;
pub use error::{CoreError, ScenarioError, SelectionError};
pub use query::{
    individual_results, individual_results_with, structural_results, structural_results_with,
    AnalysisKind, ResultCell, ResultRow, ResultTable,
};
pub use scenario::{AddOutcome, IndividualEdit, ScenarioBook, StructuralEdit, MAX_SCENARIOS};
pub use session::{EmployeeFilter, Selection, Session, UnitFilter};
pub use severity::{Severity, SeverityBands};
pub use types::{ClimateScores, EmployeeRecord, IndividualScenario, StructuralScenario};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the what-if engine
    pub use crate::{
        adjust_individual, adjust_structural, individual_results, structural_results,
        AddOutcome, ClimateScores, Dataset, EmployeeFilter, EmployeeRecord, IndividualEdit,
        IndividualScenario, ResultTable, Session, Severity, SeverityBands, StructuralEdit,
        StructuralScenario, UnitFilter,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
