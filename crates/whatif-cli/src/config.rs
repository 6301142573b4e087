//! Configuration
//!
//! Precedence, lowest first: built-in defaults, the TOML file passed with
//! `--config`, then command-line flags.
//!
//! ```toml
//! data_path = "data/empleados.csv"
//! log_level = "debug"
//! output = "json"
//!
//! [severity]
//! high_above = 0.6
//! medium_from = 0.4
//!
//! [defaults]
//! promotion = false
//! salary_increase_pct = 5
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use whatif_core::{IndividualScenario, SeverityBands};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatIfConfig {
    /// Dataset to load
    pub data_path: Option<PathBuf>,
    /// Default tracing filter (overridden by `RUST_LOG`)
    pub log_level: String,
    /// Output format
    pub output: OutputFormat,
    /// Severity thresholds
    pub severity: SeverityBands,
    /// Starting values of new individual scenarios
    pub defaults: IndividualScenario,
}

impl WhatIfConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on invalid TOML; `origin` is used in
    /// the message.
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents, path)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, otherwise defaults
    ///
    /// # Errors
    ///
    /// See [`WhatIfConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), |p| Self::load(p))
    }

    /// With dataset path, when one is given
    #[inline]
    #[must_use]
    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.data_path = path;
        }
        self
    }

    /// With log level, when one is given
    #[inline]
    #[must_use]
    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        if let Some(level) = level {
            self.log_level = level;
        }
        self
    }

    /// Force JSON output when `json` is set
    #[inline]
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        if json {
            self.output = OutputFormat::Json;
        }
        self
    }

    /// Dataset path after merging
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDataPath`] when none was configured.
    pub fn require_data_path(&self) -> Result<&Path, ConfigError> {
        self.data_path.as_deref().ok_or(ConfigError::MissingDataPath)
    }
}

impl Default for WhatIfConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            log_level: "info".to_string(),
            output: OutputFormat::Text,
            severity: SeverityBands::default(),
            defaults: IndividualScenario::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = WhatIfConfig::from_toml("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, WhatIfConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = WhatIfConfig::from_toml(
            "output = \"json\"\n[severity]\nhigh_above = 0.7\n",
            Path::new("c.toml"),
        )
        .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.severity.high_above, 0.7);
        assert_eq!(config.severity.medium_from, 0.4);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn flags_override_file() {
        let config = WhatIfConfig::default()
            .with_data_path(Some(PathBuf::from("file.csv")))
            .with_data_path(None)
            .with_log_level(Some("debug".into()))
            .with_json(true);
        assert_eq!(config.data_path, Some(PathBuf::from("file.csv")));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn missing_data_path() {
        assert!(matches!(
            WhatIfConfig::default().require_data_path(),
            Err(ConfigError::MissingDataPath)
        ));
    }

    #[test]
    fn bad_toml_is_reported() {
        let err = WhatIfConfig::from_toml("output = [", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
