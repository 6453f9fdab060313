//! The three experiment verdicts.

use std::fmt;

use serde::{Deserialize, Serialize};

use abtest_core::constants::{
    VERDICT_CONTROL_BETTER, VERDICT_EXPERIMENT_BETTER, VERDICT_INDETERMINATE,
};

/// Outcome of a two-group comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Treatment rate exceeds control rate by more than the margin of error.
    #[serde(rename = "Experiment Group is Better")]
    ExperimentBetter,
    /// Control rate exceeds treatment rate by more than the margin of error.
    #[serde(rename = "Control Group is Better")]
    ControlBetter,
    /// The difference lies within the margin of error, boundaries included.
    #[serde(rename = "Indeterminate")]
    Indeterminate,
}

impl Verdict {
    /// The fixed display string for this verdict.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExperimentBetter => VERDICT_EXPERIMENT_BETTER,
            Self::ControlBetter => VERDICT_CONTROL_BETTER,
            Self::Indeterminate => VERDICT_INDETERMINATE,
        }
    }

    /// The verdict obtained when control and treatment swap roles.
    pub fn mirrored(&self) -> Self {
        match self {
            Self::ExperimentBetter => Self::ControlBetter,
            Self::ControlBetter => Self::ExperimentBetter,
            Self::Indeterminate => Self::Indeterminate,
        }
    }

    /// Whether the test reached a decision either way.
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Self::Indeterminate)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
