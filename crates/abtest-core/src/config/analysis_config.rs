//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_CONFIDENCE_OPTIONS};
use crate::errors::InputError;

/// A labelled confidence level offered to the operator (e.g. "95%" → 0.95).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceOption {
    pub label: String,
    pub level: f64,
}

impl ConfidenceOption {
    pub fn new(label: impl Into<String>, level: f64) -> Self {
        Self {
            label: label.into(),
            level,
        }
    }

    /// The built-in 90% / 95% / 99% selection set.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_CONFIDENCE_OPTIONS
            .iter()
            .map(|&(label, level)| Self::new(label, level))
            .collect()
    }
}

/// Configuration for the decision engine.
///
/// At most one of `confidence_level` and `confidence_label` is set after
/// layer resolution; a higher layer choosing one clears the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Raw confidence fraction. Default: 0.95.
    pub confidence_level: Option<f64>,
    /// Label picked from `confidence_options`.
    pub confidence_label: Option<String>,
    /// Labelled selection set. Empty means the built-in defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub confidence_options: Vec<ConfidenceOption>,
}

impl AnalysisConfig {
    /// Returns the configured options, or the built-in set if none are configured.
    pub fn effective_confidence_options(&self) -> Vec<ConfidenceOption> {
        if self.confidence_options.is_empty() {
            ConfidenceOption::defaults()
        } else {
            self.confidence_options.clone()
        }
    }

    /// Looks up the level for `label` among the effective options.
    pub fn level_for_label(&self, label: &str) -> Result<f64, InputError> {
        let label = label.trim();
        self.effective_confidence_options()
            .into_iter()
            .find(|opt| opt.label == label)
            .map(|opt| opt.level)
            .ok_or_else(|| InputError::UnknownConfidenceLabel {
                label: label.to_string(),
            })
    }

    /// Resolves the confidence level to hand to the engine.
    ///
    /// A label wins over a raw level; with neither, defaults to 0.95.
    pub fn effective_confidence_level(&self) -> Result<f64, InputError> {
        match (&self.confidence_label, self.confidence_level) {
            (Some(label), _) => self.level_for_label(label),
            (None, Some(level)) => Ok(level),
            (None, None) => Ok(DEFAULT_CONFIDENCE_LEVEL),
        }
    }

    /// Selects a raw level, dropping any previously selected label.
    pub fn select_level(&mut self, level: f64) {
        self.confidence_level = Some(level);
        self.confidence_label = None;
    }

    /// Selects a label, dropping any previously selected raw level.
    pub fn select_label(&mut self, label: impl Into<String>) {
        self.confidence_label = Some(label.into());
        self.confidence_level = None;
    }
}
