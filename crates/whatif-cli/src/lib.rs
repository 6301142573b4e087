//! What-If CLI
//!
//! Command-line surface of the attrition what-if dashboard. The binary in
//! `main.rs` is a thin shell over the modules here:
//! - [`config`]: TOML configuration and flag merging
//! - [`args`]: `key=value` scenario arguments
//! - [`plan`]: TOML plan files describing a whole session
//! - [`repl`]: line-oriented interactive session
//! - [`render`]: text and JSON output

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod plan;
pub mod render;
pub mod repl;

pub use config::{OutputFormat, WhatIfConfig};
pub use error::{ArgError, CliError, ConfigError, PlanError};
pub use logging::init_logging;
pub use plan::{Plan, PlanReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
