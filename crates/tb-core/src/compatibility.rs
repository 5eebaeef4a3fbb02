//! Result of a compatibility check.

use serde::{Deserialize, Serialize};

/// Whether a candidate schema may coexist with a registered one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    pub is_compatible: bool,
}
