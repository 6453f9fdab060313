//! Configuration system for abtest.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod abtest_config;
pub mod analysis_config;

pub use abtest_config::{AbTestConfig, CliOverrides};
pub use analysis_config::{AnalysisConfig, ConfidenceOption};
