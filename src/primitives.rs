//! Example values for primitive schema types.

use crate::spec::SchemaNode;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

/// Produces a literal example for a primitive schema node.
///
/// The mapping is keyed by `{type}_{format}` with a fallback to `{type}`
/// alone, so an unrecognized format degrades to the bare type's example.
/// An unrecognized type yields a diagnostic string naming it rather than an
/// error; generation is total.
pub fn generate(node: &SchemaNode) -> Value {
    let schema_type = node.schema_type.as_deref().unwrap_or_default();
    let format = node.format.as_deref();

    match (schema_type, format) {
        ("string", Some("email")) => Value::from("user@example.com"),
        ("string", Some("date-time")) => {
            Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        ("string", _) => Value::from("string"),
        ("number", Some("float")) => Value::from(0.0),
        ("number", _) => Value::from(0),
        ("integer", _) => Value::from(0),
        ("boolean", _) => match node.default {
            Some(Value::Bool(default)) => Value::from(default),
            _ => Value::from(true),
        },
        (unknown, _) => Value::from(format!("Unknown Type: {}", unknown)),
    }
}
