//! Confidence levels and two-tailed critical values via `statrs`.
//!
//! z = Φ⁻¹((1 + c) / 2), with Φ⁻¹(p) = -√2 · erfc⁻¹(2p).

use serde::{Deserialize, Serialize};
use statrs::function::erf::erfc_inv;

use abtest_core::errors::InputError;

/// A confidence level strictly inside (0, 1).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Validate a raw fraction. 0, 1, anything outside, and NaN are rejected.
    pub fn new(value: f64) -> Result<Self, InputError> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(InputError::ConfidenceOutOfRange { value })
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Two-tailed critical value of the standard normal for this level.
    pub fn critical_value(&self) -> f64 {
        standard_normal_quantile((1.0 + self.0) / 2.0)
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = InputError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> Self {
        level.0
    }
}

/// Inverse CDF of N(0, 1). `p` must lie in (0, 1).
fn standard_normal_quantile(p: f64) -> f64 {
    -std::f64::consts::SQRT_2 * erfc_inv(2.0 * p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_critical_values() {
        let cases = [(0.90, 1.644_853_6), (0.95, 1.959_964_0), (0.99, 2.575_829_3)];
        for (level, expected) in cases {
            let z = ConfidenceLevel::new(level).unwrap().critical_value();
            assert!((z - expected).abs() < 1e-6, "z({level}) = {z}, expected {expected}");
        }
    }

    #[test]
    fn test_critical_value_increases_with_level() {
        let levels = [0.5, 0.8, 0.9, 0.95, 0.99, 0.999];
        let zs: Vec<f64> = levels
            .iter()
            .map(|&c| ConfidenceLevel::new(c).unwrap().critical_value())
            .collect();
        assert!(zs.windows(2).all(|w| w[0] < w[1]), "not increasing: {zs:?}");
    }

    #[test]
    fn test_rejects_boundaries_and_nan() {
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    ConfidenceLevel::new(bad),
                    Err(InputError::ConfidenceOutOfRange { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }
}
