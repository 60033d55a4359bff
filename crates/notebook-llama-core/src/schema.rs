//! Response schemas for structured extraction and chat services.

use serde::de::DeserializeOwned;

/// A type that a structured service is asked to produce.
///
/// The JSON schema is sent with the request; the service's answer is
/// then deserialized into `Self`, which runs the type's own validation.
/// The schema describes the shape only; invariants that JSON Schema
/// cannot express (equal-length arrays, speaker alternation) are enforced
/// during deserialization.
pub trait StructuredOutput: DeserializeOwned {
    /// Name reported to the service alongside the schema.
    const SCHEMA_NAME: &'static str;

    /// JSON Schema object describing `Self`.
    fn json_schema() -> serde_json::Value;

    /// Parses and validates a service answer.
    fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
