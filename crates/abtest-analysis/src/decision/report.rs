//! Full result of one evaluation.

use serde::{Deserialize, Serialize};

use super::verdict::Verdict;

/// Every intermediate quantity of an evaluation, plus the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub control_rate: f64,
    pub treatment_rate: f64,
    /// Unpooled standard error of `treatment_rate - control_rate`.
    pub standard_error: f64,
    /// Two-tailed z for `confidence_level`.
    pub critical_value: f64,
    pub margin_of_error: f64,
    /// `treatment_rate - control_rate`.
    pub difference: f64,
    /// `difference ± margin_of_error`.
    pub confidence_interval: (f64, f64),
    pub confidence_level: f64,
    pub verdict: Verdict,
}

impl ExperimentReport {
    /// Whether the standard error collapsed to zero (all-0% or all-100% groups).
    pub fn is_degenerate(&self) -> bool {
        self.standard_error == 0.0
    }
}
