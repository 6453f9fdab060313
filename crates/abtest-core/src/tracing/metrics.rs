//! Field names of the serialized experiment report.

/// Conversion rate of the control group.
pub const CONTROL_RATE: &str = "control_rate";

/// Conversion rate of the treatment group.
pub const TREATMENT_RATE: &str = "treatment_rate";

/// Standard error of the rate difference.
pub const STANDARD_ERROR: &str = "standard_error";

/// Two-tailed critical value of the standard normal.
pub const CRITICAL_VALUE: &str = "critical_value";

/// Critical value times standard error.
pub const MARGIN_OF_ERROR: &str = "margin_of_error";

/// Treatment rate minus control rate.
pub const DIFFERENCE: &str = "difference";

/// Final classification.
pub const VERDICT: &str = "verdict";

/// All report field names, in serialization order.
pub const EVALUATION_FIELDS: [&str; 7] = [
    CONTROL_RATE,
    TREATMENT_RATE,
    STANDARD_ERROR,
    CRITICAL_VALUE,
    MARGIN_OF_ERROR,
    DIFFERENCE,
    VERDICT,
];
