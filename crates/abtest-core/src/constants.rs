//! Shared constants for the abtest decision engine.

/// abtest version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Confidence level used when neither a label nor a level is supplied.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Number of labelled confidence options offered by default.
pub const DEFAULT_CONFIDENCE_OPTION_COUNT: usize = 3;

/// Labelled confidence options offered to the operator, as (label, level).
pub const DEFAULT_CONFIDENCE_OPTIONS: [(&str, f64); DEFAULT_CONFIDENCE_OPTION_COUNT] =
    [("90%", 0.90), ("95%", 0.95), ("99%", 0.99)];

// ---- Verdicts ----

/// Verdict text when the treatment group outperforms the control.
pub const VERDICT_EXPERIMENT_BETTER: &str = "Experiment Group is Better";

/// Verdict text when the control group outperforms the treatment.
pub const VERDICT_CONTROL_BETTER: &str = "Control Group is Better";

/// Verdict text when the difference lies within the margin of error.
pub const VERDICT_INDETERMINATE: &str = "Indeterminate";

// ---- Configuration & logging ----

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "abtest.toml";

/// User-level config directory name, under the home directory.
pub const USER_CONFIG_DIR: &str = ".abtest";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "ABTEST_LOG";

/// Filter used when `ABTEST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "abtest=info";
