//! Argument parsing and the single engine call behind the `abtest` binary.

use std::path::PathBuf;

use clap::Parser;

use abtest_analysis::{analyze, ConfidenceLevel, ExperimentReport, GroupSample, TestConfiguration};
use abtest_core::config::{AbTestConfig, CliOverrides};
use abtest_core::constants::VERSION;
use abtest_core::errors::error_code::{self, AbTestErrorCode};
use abtest_core::errors::{ConfigError, InputError};

#[derive(Parser, Debug)]
#[command(name = "abtest")]
#[command(about = "A/B testing calculator: compare conversion rates of a control and a treatment group")]
#[command(version = VERSION)]
pub struct Args {
    /// Visitors in the control group
    #[arg(long)]
    pub control_visitors: u64,

    /// Conversions in the control group
    #[arg(long)]
    pub control_conversions: u64,

    /// Visitors in the treatment group
    #[arg(long)]
    pub treatment_visitors: u64,

    /// Conversions in the treatment group
    #[arg(long)]
    pub treatment_conversions: u64,

    /// Confidence option label, e.g. "90%", "95%", "99%"
    #[arg(short, long, conflicts_with = "confidence_level")]
    pub confidence: Option<String>,

    /// Raw confidence fraction strictly between 0 and 1
    #[arg(long)]
    pub confidence_level: Option<f64>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Directory searched for `abtest.toml`
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            confidence_level: self.confidence_level,
            confidence_label: self.confidence.clone(),
        }
    }

    fn control(&self) -> GroupSample {
        GroupSample::new(self.control_visitors, self.control_conversions)
    }

    fn treatment(&self) -> GroupSample {
        GroupSample::new(self.treatment_visitors, self.treatment_conversions)
    }
}

/// Errors surfaced to the operator.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

impl AbTestErrorCode for CliError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Render(_) => error_code::RENDER_ERROR,
        }
    }
}

/// Resolve configuration, call the engine once, and render the result.
pub fn run(args: &Args) -> Result<String, CliError> {
    // A bad level typed by the operator is an input error, not a config error.
    if let Some(level) = args.confidence_level {
        ConfidenceLevel::new(level)?;
    }
    let config = AbTestConfig::load(&args.project_root, Some(&args.overrides()))?;
    let level = config.analysis.effective_confidence_level()?;
    let test_config = TestConfiguration::new(level)?;

    let report = analyze(args.control(), args.treatment(), &test_config)?;
    tracing::info!(verdict = %report.verdict, confidence_level = level, "A/B test completed");

    render(&report, args.json)
}

fn render(report: &ExperimentReport, json: bool) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(format!("Test Result: {}", report.verdict))
    }
}
