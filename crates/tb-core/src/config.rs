//! Subject-level configuration and its property names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Whole configuration of a subject.
///
/// The server commonly uses `NONE`, `BACKWARD`, `FORWARD` or `FULL` for
/// `compatibility`; the client passes the value through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub compatibility: String,
}

impl Config {
    #[must_use]
    pub fn new(compatibility: impl Into<String>) -> Self {
        Self {
            compatibility: compatibility.into(),
        }
    }

    /// Value of a single property.
    #[must_use]
    pub fn get(&self, property: Property) -> &str {
        match property {
            Property::Compatibility => &self.compatibility,
        }
    }
}

/// Name of an individually addressable config property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Compatibility,
}

impl Property {
    pub const ALL: [Self; 1] = [Self::Compatibility];

    /// Name used in `/config/{subject}/properties/{property}`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compatibility => "compatibility",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Compatibility => {
                "compatibility policy applied when registering new schemas \
                 (NONE, BACKWARD, FORWARD or FULL)"
            }
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Property {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::UnknownProperty(s.to_string()))
    }
}
