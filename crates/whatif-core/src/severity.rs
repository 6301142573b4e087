//! Three-tier severity classification of a probability
//!
//! Presentation only; no computation in this crate branches on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slack at the band edges. Wide enough for the rounding error of the
/// adjusters (0.8 - 0.1 - 0.1 = 0.6000000000000001), narrow enough that any
/// value written with fewer than twelve decimals is classified exactly.
const EDGE_TOLERANCE: f64 = 1e-12;

/// Severity tier of a probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Below the medium threshold
    Low,
    /// Between the two thresholds, both inclusive
    Medium,
    /// Strictly above the high threshold
    High,
}

impl Severity {
    /// Lower-case label
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thresholds separating the three tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityBands {
    /// Probabilities strictly above this are high
    pub high_above: f64,
    /// Probabilities at or above this (and not high) are medium
    pub medium_from: f64,
}

impl SeverityBands {
    /// Classify a probability
    #[must_use]
    pub fn classify(&self, p: f64) -> Severity {
        if p > self.high_above + EDGE_TOLERANCE {
            Severity::High
        } else if p >= self.medium_from - EDGE_TOLERANCE {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl Default for SeverityBands {
    fn default() -> Self {
        Self {
            high_above: 0.6,
            medium_from: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_band_edges() {
        let bands = SeverityBands::default();
        assert_eq!(bands.classify(0.61), Severity::High);
        assert_eq!(bands.classify(0.6), Severity::Medium);
        assert_eq!(bands.classify(0.4), Severity::Medium);
        assert_eq!(bands.classify(0.39), Severity::Low);
        assert_eq!(bands.classify(0.0), Severity::Low);
        assert_eq!(bands.classify(1.0), Severity::High);
    }

    #[test]
    fn float_noise_at_edges() {
        let bands = SeverityBands::default();
        assert_eq!(bands.classify(0.8 - 0.1 - 0.1), Severity::Medium);
        assert_eq!(bands.classify(0.5 - 0.1), Severity::Medium);
    }

    #[test]
    fn data_values_just_past_an_edge_keep_their_tier() {
        let bands = SeverityBands::default();
        assert_eq!(bands.classify(0.600_000_000_5), Severity::High);
        assert_eq!(bands.classify(0.399_999_999_5), Severity::Low);
    }

    #[test]
    fn labels() {
        assert_eq!(Severity::High.to_string(), "high");
        assert_eq!(Severity::Medium.as_str(), "medium");
    }
}
