//! Input errors: the single error kind the decision engine raises.

use super::error_code::{self, AbTestErrorCode};
use crate::types::Group;

/// Constraint violations on engine inputs.
///
/// Every variant is an invalid-input failure; none of them is ever turned
/// into a verdict.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{group} group has zero visitors; conversion rate is undefined")]
    ZeroVisitors { group: Group },

    #[error("{group} group has {conversions} conversions but only {visitors} visitors")]
    ConversionsExceedVisitors {
        group: Group,
        conversions: u64,
        visitors: u64,
    },

    #[error("Confidence level {value} must lie strictly between 0 and 1")]
    ConfidenceOutOfRange { value: f64 },

    #[error("Unknown confidence option: {label}")]
    UnknownConfidenceLabel { label: String },
}

impl InputError {
    /// The group an error refers to, if it is tied to one sample.
    pub fn group(&self) -> Option<Group> {
        match self {
            Self::ZeroVisitors { group } | Self::ConversionsExceedVisitors { group, .. } => {
                Some(*group)
            }
            Self::ConfidenceOutOfRange { .. } | Self::UnknownConfidenceLabel { .. } => None,
        }
    }
}

impl AbTestErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
