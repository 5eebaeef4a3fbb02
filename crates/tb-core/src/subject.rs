//! Subject entity.

use serde::{Deserialize, Serialize};

/// Named, independently versioned collection of schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
