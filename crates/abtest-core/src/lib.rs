//! Core types, errors, config, tracing, and constants for abtest.
//!
//! Everything the decision engine and its calling surfaces share lives here.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{AbTestConfig, AnalysisConfig, CliOverrides, ConfidenceOption};
pub use errors::{AbTestErrorCode, ConfigError, InputError};
pub use types::Group;
