//! Inputs to the decision engine.

use serde::{Deserialize, Serialize};

use abtest_core::errors::InputError;
use abtest_core::Group;

use super::critical::ConfidenceLevel;

/// Visitor and conversion counts for one group.
///
/// Constructing a sample does not validate it; the engine does, so a
/// surface can hand raw counts straight through and get a typed error back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupSample {
    pub visitors: u64,
    pub conversions: u64,
}

impl GroupSample {
    pub fn new(visitors: u64, conversions: u64) -> Self {
        Self {
            visitors,
            conversions,
        }
    }

    /// Check `visitors > 0` and `conversions <= visitors`.
    pub fn validate(&self, group: Group) -> Result<(), InputError> {
        if self.visitors == 0 {
            return Err(InputError::ZeroVisitors { group });
        }
        if self.conversions > self.visitors {
            return Err(InputError::ConversionsExceedVisitors {
                group,
                conversions: self.conversions,
                visitors: self.visitors,
            });
        }
        Ok(())
    }

    /// Conversion rate in [0, 1].
    pub fn rate(&self, group: Group) -> Result<f64, InputError> {
        self.validate(group)?;
        Ok(self.conversions as f64 / self.visitors as f64)
    }
}

/// Parameters of one test run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestConfiguration {
    pub confidence_level: ConfidenceLevel,
}

impl TestConfiguration {
    pub fn new(confidence_level: f64) -> Result<Self, InputError> {
        Ok(Self {
            confidence_level: ConfidenceLevel::new(confidence_level)?,
        })
    }
}

impl From<ConfidenceLevel> for TestConfiguration {
    fn from(confidence_level: ConfidenceLevel) -> Self {
        Self { confidence_level }
    }
}

/// One complete experiment, as handed to `evaluate_batch`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentInput {
    pub control: GroupSample,
    pub treatment: GroupSample,
    pub confidence_level: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate() {
        let sample = GroupSample::new(1000, 150);
        assert!((sample.rate(Group::Control).unwrap() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_zero_visitors() {
        let sample = GroupSample::new(0, 0);
        assert_eq!(
            sample.rate(Group::Treatment),
            Err(InputError::ZeroVisitors {
                group: Group::Treatment
            })
        );
    }

    #[test]
    fn test_conversions_exceed_visitors() {
        let sample = GroupSample::new(100, 120);
        assert_eq!(
            sample.validate(Group::Control),
            Err(InputError::ConversionsExceedVisitors {
                group: Group::Control,
                conversions: 120,
                visitors: 100,
            })
        );
    }

    #[test]
    fn test_boundary_rates_are_valid() {
        assert_eq!(GroupSample::new(10, 0).rate(Group::Control), Ok(0.0));
        assert_eq!(GroupSample::new(10, 10).rate(Group::Control), Ok(1.0));
    }

    #[test]
    fn test_configuration_rejects_out_of_range() {
        assert!(TestConfiguration::new(1.0).is_err());
        assert!(TestConfiguration::new(0.0).is_err());
        assert!(TestConfiguration::new(0.9).is_ok());
    }
}
