//! Decision Engine: unpooled two-proportion z-test with a strict-inequality verdict.
//!
//! Pure and stateless; every call is independent of every other.

pub mod critical;
pub mod engine;
pub mod report;
pub mod types;
pub mod verdict;

pub use critical::ConfidenceLevel;
pub use engine::{analyze, classify, evaluate, evaluate_batch};
pub use report::ExperimentReport;
pub use types::{ExperimentInput, GroupSample, TestConfiguration};
pub use verdict::Verdict;
