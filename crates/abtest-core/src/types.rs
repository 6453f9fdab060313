//! Shared identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of a two-group experiment a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    /// Baseline variant.
    Control,
    /// Variant under test.
    Treatment,
}

impl Group {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Control => "control",
            Self::Treatment => "treatment",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
