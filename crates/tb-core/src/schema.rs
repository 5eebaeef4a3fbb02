//! Schema entity and its wire codec.
//!
//! On the wire the definition travels under the key `schema`, while the Rust
//! field is `definition`. Decoding is two-phase: serde reads the payload into
//! a typed wire struct whose fields are all optional, then `TryFrom` applies
//! the semantic checks (presence, non-empty, integral non-negative `id`,
//! version grammar) so each failure maps to a precise [`CoreError`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::semver::SemVer;

/// One registered schema definition within a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SchemaWire")]
pub struct Schema {
    /// Registry-global identifier.
    pub id: i64,
    pub subject: String,
    pub version: SemVer,
    /// Opaque definition text (typically Avro JSON).
    #[serde(rename = "schema")]
    pub definition: String,
}

/// Result of registering a schema: only its ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SchemaIdWire")]
pub struct SchemaId {
    pub id: i64,
}

#[derive(Deserialize)]
struct SchemaWire {
    id: Option<Value>,
    subject: Option<String>,
    version: Option<String>,
    schema: Option<String>,
}

#[derive(Deserialize)]
struct SchemaIdWire {
    id: Option<Value>,
}

impl Schema {
    /// Decode a single schema from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] for structurally invalid JSON, and the
    /// field-level variants for payloads that violate the contract.
    pub fn decode(bytes: &[u8]) -> Result<Self, CoreError> {
        let wire: SchemaWire = serde_json::from_slice(bytes)?;
        Self::try_from(wire)
    }

    /// Decode a JSON array of schemas, failing on the first invalid element.
    ///
    /// # Errors
    ///
    /// Same as [`Schema::decode`].
    pub fn decode_list(bytes: &[u8]) -> Result<Vec<Self>, CoreError> {
        let wires: Vec<SchemaWire> = serde_json::from_slice(bytes)?;
        wires.into_iter().map(Self::try_from).collect()
    }
}

impl SchemaId {
    /// Decode a `{"id": N}` payload.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] or [`CoreError::MalformedField`]
    /// when `id` is absent or not a non-negative integer.
    pub fn decode(bytes: &[u8]) -> Result<Self, CoreError> {
        let wire: SchemaIdWire = serde_json::from_slice(bytes)?;
        Self::try_from(wire)
    }
}

impl TryFrom<SchemaWire> for Schema {
    type Error = CoreError;

    fn try_from(wire: SchemaWire) -> Result<Self, Self::Error> {
        let id = decode_id(wire.id)?;
        let subject = non_empty("subject", wire.subject)?;
        let definition = non_empty("schema", wire.schema)?;
        let version = wire
            .version
            .ok_or(CoreError::MissingField("version"))
            .and_then(|v| SemVer::parse(&v))?;

        Ok(Self {
            id,
            subject,
            version,
            definition,
        })
    }
}

impl TryFrom<SchemaIdWire> for SchemaId {
    type Error = CoreError;

    fn try_from(wire: SchemaIdWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: decode_id(wire.id)?,
        })
    }
}

/// `serde_json` keeps integers as `i64`/`u64` internally, so no float
/// conversion happens on the way to `as_i64`.
fn decode_id(value: Option<Value>) -> Result<i64, CoreError> {
    let value = value.ok_or(CoreError::MissingField("id"))?;
    let malformed = |reason: String| CoreError::MalformedField { field: "id", reason };

    let Value::Number(number) = &value else {
        return Err(malformed(format!("expected an integer, got {value}")));
    };
    let id = number
        .as_i64()
        .ok_or_else(|| malformed(format!("expected a 64-bit integer, got {number}")))?;
    if id < 0 {
        return Err(malformed(format!("expected a non-negative integer, got {id}")));
    }
    Ok(id)
}

fn non_empty(field: &'static str, value: Option<String>) -> Result<String, CoreError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(CoreError::MissingField(field))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sample() -> Schema {
        Schema {
            id: 1,
            subject: "s".to_string(),
            version: SemVer::new(1, 0, 0),
            definition: "D".to_string(),
        }
    }

    #[test]
    fn encodes_definition_under_schema_key() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "subject": "s", "version": "v1.0.0", "schema": "D"})
        );
        assert!(value.get("definition").is_none());
    }

    #[test]
    fn decode_reverses_encode() {
        let bytes = serde_json::to_vec(&sample()).unwrap();
        assert_eq!(Schema::decode(&bytes).unwrap(), sample());
        assert_eq!(serde_json::from_slice::<Schema>(&bytes).unwrap(), sample());
    }

    #[test]
    fn rejects_string_id() {
        let err = Schema::decode(
            br#"{"id": "1", "subject": "s", "version": "v1.0.0", "schema": "D"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::MalformedField { field: "id", .. }));
    }

    #[test]
    fn rejects_fractional_and_negative_id() {
        for id in ["1.5", "-3", "1e3", "18446744073709551615"] {
            let payload =
                format!(r#"{{"id": {id}, "subject": "s", "version": "v1.0.0", "schema": "D"}}"#);
            let err = Schema::decode(payload.as_bytes()).unwrap_err();
            assert!(
                matches!(err, CoreError::MalformedField { field: "id", .. }),
                "id {id} should be malformed, got {err:?}"
            );
        }
    }

    #[test]
    fn keeps_large_ids_exact() {
        let payload = br#"{"id": 9007199254740993, "subject": "s", "version": "v1.0.0", "schema": "D"}"#;
        assert_eq!(Schema::decode(payload).unwrap().id, 9_007_199_254_740_993);
    }

    #[test]
    fn missing_or_empty_fields_are_reported() {
        let cases = [
            (json!({"subject": "s", "version": "v1.0.0", "schema": "D"}), "id"),
            (json!({"id": 1, "version": "v1.0.0", "schema": "D"}), "subject"),
            (json!({"id": 1, "subject": "", "version": "v1.0.0", "schema": "D"}), "subject"),
            (json!({"id": 1, "subject": "s", "version": "v1.0.0"}), "schema"),
            (json!({"id": 1, "subject": "s", "version": "v1.0.0", "schema": ""}), "schema"),
            (json!({"id": 1, "subject": "s", "schema": "D"}), "version"),
        ];
        for (payload, expected) in cases {
            let err = Schema::decode(&serde_json::to_vec(&payload).unwrap()).unwrap_err();
            assert!(
                matches!(err, CoreError::MissingField(field) if field == expected),
                "{payload} should miss {expected}, got {err:?}"
            );
        }
    }

    #[test]
    fn invalid_version_propagates() {
        let err = Schema::decode(br#"{"id": 1, "subject": "s", "version": "1.0", "schema": "D"}"#)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidFormat(ref v) if v == "1.0"));
    }

    #[test]
    fn non_string_subject_is_a_json_error() {
        let err = Schema::decode(br#"{"id": 1, "subject": 5, "version": "v1.0.0", "schema": "D"}"#)
            .unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }

    #[test]
    fn decodes_list_in_order() {
        let payload = br#"[
            {"id": 1, "subject": "s", "version": "v1.0.0", "schema": "D"},
            {"id": 3, "subject": "s", "version": "v1.0.2", "schema": "D"}
        ]"#;
        let schemas = Schema::decode_list(payload).unwrap();
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas[1].id, 3);
        assert_eq!(schemas[1].version, SemVer::new(1, 0, 2));
    }

    #[test]
    fn schema_id_is_strict() {
        assert_eq!(SchemaId::decode(br#"{"id": 42}"#).unwrap(), SchemaId { id: 42 });
        assert!(matches!(
            SchemaId::decode(br#"{"id": "42"}"#),
            Err(CoreError::MalformedField { field: "id", .. })
        ));
        assert!(matches!(
            SchemaId::decode(b"{}"),
            Err(CoreError::MissingField("id"))
        ));
        assert!(serde_json::from_str::<SchemaId>(r#"{"id": true}"#).is_err());
    }
}
