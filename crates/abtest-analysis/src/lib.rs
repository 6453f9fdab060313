//! Decision engine for two-group conversion-rate experiments.
//!
//! Given visitor/conversion counts for a control and a treatment group and a
//! confidence level, classifies the experiment as one of three verdicts using
//! a normal-approximation test on the difference of proportions.
//!
//! ```
//! use abtest_analysis::{evaluate, GroupSample, Verdict};
//!
//! let control = GroupSample::new(1000, 100);
//! let treatment = GroupSample::new(1000, 150);
//! assert_eq!(evaluate(control, treatment, 0.95), Ok(Verdict::ExperimentBetter));
//! ```

pub mod decision;

pub use decision::{
    analyze, classify, evaluate, evaluate_batch, ConfidenceLevel, ExperimentInput,
    ExperimentReport, GroupSample, TestConfiguration, Verdict,
};
