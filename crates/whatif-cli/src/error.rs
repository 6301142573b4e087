//! Error types for the command-line surface
//!
//! Covers the inputs the core never sees directly:
//! - Scenario specs typed by the user
//! - Configuration and plan files
//! - Interactive commands

use std::path::PathBuf;
use whatif_core::{CoreError, ScenarioError, SelectionError};

/// Main CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Malformed scenario argument
    #[error("invalid scenario argument: {0}")]
    Arg(#[from] ArgError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Plan could not be loaded
    #[error("plan error: {0}")]
    Plan(#[from] PlanError),

    /// Session operation failed
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Unrecognised interactive command
    #[error("unknown command: '{0}' (try 'help')")]
    UnknownCommand(String),

    /// Command used incorrectly
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl From<ScenarioError> for CliError {
    fn from(err: ScenarioError) -> Self {
        Self::Core(err.into())
    }
}

impl From<SelectionError> for CliError {
    fn from(err: SelectionError) -> Self {
        Self::Core(err.into())
    }
}

/// Scenario argument errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    /// Item is not of the form key=value
    #[error("expected key=value, got '{0}'")]
    MissingValue(String),

    /// Key is not a field of the scenario kind
    #[error("unknown field '{key}' (expected one of: {expected})")]
    UnknownField {
        /// Key as typed
        key: String,
        /// Accepted keys
        expected: &'static str,
    },

    /// Value does not parse
    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue {
        /// Key as typed
        key: String,
        /// Value as typed
        value: String,
    },

    /// Scenario number is not a positive integer
    #[error("invalid scenario number '{0}' (scenarios are numbered from 1)")]
    InvalidNumber(String),
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("parse error in {path}: {source}")]
    Parse {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// No dataset path from either the config file or the command line
    #[error("no dataset configured (pass --data or set data_path in the config file)")]
    MissingDataPath,
}

/// Plan file errors
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// IO error reading the file
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("parse error in {path}: {source}")]
    Parse {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}
