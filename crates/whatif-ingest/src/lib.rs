//! What-If Ingest
//!
//! The boundary between the source CSV file and the in-memory
//! [`Dataset`](whatif_core::Dataset). Rows are mapped from the source column
//! names and validated here so the core never sees malformed values.
//!
//! ```text
//! CSV file → csv::Reader → RawRow → validate → EmployeeRecord → Dataset
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod columns;
pub mod error;
pub mod loader;

pub use error::IngestError;
pub use loader::{load_path, load_reader, load_str};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
