//! Top-level abtest configuration with layered resolution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::AnalysisConfig;
use crate::constants::{CONFIG_FILE_NAME, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Environment variable overriding the raw confidence level.
pub const ENV_CONFIDENCE_LEVEL: &str = "ABTEST_CONFIDENCE_LEVEL";

/// Environment variable overriding the confidence label.
pub const ENV_CONFIDENCE_LABEL: &str = "ABTEST_CONFIDENCE_LABEL";

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ABTEST_*`)
/// 3. Project config (`abtest.toml` in project root)
/// 4. User config (`~/.abtest/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AbTestConfig {
    pub analysis: AnalysisConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub confidence_level: Option<f64>,
    pub confidence_label: Option<String>,
}

impl AbTestConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        ::tracing::debug!(
            confidence_level = ?config.analysis.confidence_level,
            confidence_label = ?config.analysis.confidence_label,
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &AbTestConfig) -> Result<(), ConfigError> {
        if let Some(level) = config.analysis.confidence_level {
            if !is_open_unit(level) {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.confidence_level".to_string(),
                    message: "must lie strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(ref label) = config.analysis.confidence_label {
            if label.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.confidence_label".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for (i, option) in config.analysis.confidence_options.iter().enumerate() {
            if option.label.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("analysis.confidence_options[{i}].label"),
                    message: "must not be empty".to_string(),
                });
            }
            if !is_open_unit(option.level) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("analysis.confidence_options[{i}].level"),
                    message: "must lie strictly between 0.0 and 1.0".to_string(),
                });
            }
            if !seen.insert(option.label.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("analysis.confidence_options[{i}].label"),
                    message: format!("duplicate label {:?}", option.label),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.abtest/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut AbTestConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AbTestConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only values present in `other` override.
    fn merge(base: &mut AbTestConfig, other: &AbTestConfig) {
        if let Some(ref label) = other.analysis.confidence_label {
            base.analysis.select_label(label.clone());
        } else if let Some(level) = other.analysis.confidence_level {
            base.analysis.select_level(level);
        }
        if !other.analysis.confidence_options.is_empty() {
            base.analysis.confidence_options = other.analysis.confidence_options.clone();
        }
    }

    /// Apply environment variable overrides.
    /// A level that does not parse as a number is `InvalidValue`.
    fn apply_env_overrides(config: &mut AbTestConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(ENV_CONFIDENCE_LEVEL) {
            let level = val
                .trim()
                .parse::<f64>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: ENV_CONFIDENCE_LEVEL.to_string(),
                    message: format!("'{val}' is not a number: {e}"),
                })?;
            config.analysis.select_level(level);
        }
        if let Ok(val) = std::env::var(ENV_CONFIDENCE_LABEL) {
            config.analysis.select_label(val.trim());
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority). A label beats a level.
    fn apply_cli_overrides(config: &mut AbTestConfig, cli: &CliOverrides) {
        if let Some(ref label) = cli.confidence_label {
            config.analysis.select_label(label.clone());
        } else if let Some(level) = cli.confidence_level {
            config.analysis.select_level(level);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn is_open_unit(value: f64) -> bool {
    value > 0.0 && value < 1.0
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
