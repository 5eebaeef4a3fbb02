//! Validation and decode errors raised by the value types.
//!
//! Nothing in this crate performs I/O, so every failure here is local: a
//! caller-supplied string that does not follow the version grammar, a missing
//! selector, or a payload whose fields do not match the wire contract. The
//! client crate folds these into its aggregate error.

use thiserror::Error;

/// Errors that can be raised while validating or decoding typebook values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A version string did not match the expected grammar.
    #[error("invalid format for semver: {0}")]
    InvalidFormat(String),

    /// Neither a schema ID nor a subject was supplied.
    #[error("id or subject should be specified")]
    MissingSelector,

    /// A required field was absent or empty.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A field was present but its value has the wrong shape.
    #[error("the value of field `{field}` is malformed: {reason}")]
    MalformedField { field: &'static str, reason: String },

    /// A config property name outside the known set.
    #[error("unknown config property: {0}")]
    UnknownProperty(String),

    /// The payload is not structurally valid JSON for the expected type.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}
