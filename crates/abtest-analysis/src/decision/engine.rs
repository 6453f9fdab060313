//! The decision function.
//!
//! 1. rates p_c, p_t
//! 2. se = sqrt(p_c(1-p_c)/n_c + p_t(1-p_t)/n_t)
//! 3. z = Φ⁻¹((1 + c) / 2)
//! 4. margin = se · z
//! 5. d = p_t - p_c
//! 6. d > margin → experiment, d < -margin → control, else indeterminate

use rayon::prelude::*;

use abtest_core::errors::InputError;
use abtest_core::Group;

use super::report::ExperimentReport;
use super::types::{ExperimentInput, GroupSample, TestConfiguration};
use super::verdict::Verdict;

/// Classify an experiment and return only the verdict.
///
/// Validation order: control sample, treatment sample, confidence level.
/// The first violation is returned; no verdict is ever produced for
/// invalid input.
pub fn evaluate(
    control: GroupSample,
    treatment: GroupSample,
    confidence_level: f64,
) -> Result<Verdict, InputError> {
    let rates = sample_rates(control, treatment)?;
    let config = TestConfiguration::new(confidence_level)?;
    Ok(compute(control, treatment, rates, &config).verdict)
}

/// Classify an experiment and return every intermediate quantity.
pub fn analyze(
    control: GroupSample,
    treatment: GroupSample,
    config: &TestConfiguration,
) -> Result<ExperimentReport, InputError> {
    let rates = sample_rates(control, treatment)?;
    Ok(compute(control, treatment, rates, config))
}

/// Evaluate independent experiments in parallel. Output order matches input order.
pub fn evaluate_batch(inputs: &[ExperimentInput]) -> Vec<Result<ExperimentReport, InputError>> {
    tracing::debug!(batch_size = inputs.len(), "evaluating experiment batch");
    inputs
        .par_iter()
        .map(|input| -> Result<ExperimentReport, InputError> {
            let rates = sample_rates(input.control, input.treatment)?;
            let config = TestConfiguration::new(input.confidence_level)?;
            Ok(compute(input.control, input.treatment, rates, &config))
        })
        .collect()
}

/// Strict-inequality classification; a difference exactly on the margin is indeterminate.
pub fn classify(difference: f64, margin_of_error: f64) -> Verdict {
    if difference > margin_of_error {
        Verdict::ExperimentBetter
    } else if difference < -margin_of_error {
        Verdict::ControlBetter
    } else {
        Verdict::Indeterminate
    }
}

/// Validated conversion rates, control first.
fn sample_rates(control: GroupSample, treatment: GroupSample) -> Result<(f64, f64), InputError> {
    Ok((control.rate(Group::Control)?, treatment.rate(Group::Treatment)?))
}

/// Core computation over rates from `sample_rates`.
fn compute(
    control: GroupSample,
    treatment: GroupSample,
    (control_rate, treatment_rate): (f64, f64),
    config: &TestConfiguration,
) -> ExperimentReport {
    let n_c = control.visitors as f64;
    let n_t = treatment.visitors as f64;

    let variance =
        control_rate * (1.0 - control_rate) / n_c + treatment_rate * (1.0 - treatment_rate) / n_t;
    // Rates are in [0, 1], so the variance is non-negative up to rounding.
    let standard_error = variance.max(0.0).sqrt();

    let critical_value = config.confidence_level.critical_value();
    let margin_of_error = standard_error * critical_value;
    let difference = treatment_rate - control_rate;
    let verdict = classify(difference, margin_of_error);

    if standard_error == 0.0 {
        tracing::warn!(
            control_rate,
            treatment_rate,
            "zero standard error; verdict reduces to the sign of the difference"
        );
    }

    tracing::debug!(
        control_rate,
        treatment_rate,
        standard_error,
        critical_value,
        margin_of_error,
        difference,
        verdict = %verdict,
        "experiment evaluated"
    );

    ExperimentReport {
        control_rate,
        treatment_rate,
        standard_error,
        critical_value,
        margin_of_error,
        difference,
        confidence_interval: (difference - margin_of_error, difference + margin_of_error),
        confidence_level: config.confidence_level.value(),
        verdict,
    }
}
