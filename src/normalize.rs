//! Recursive document normalization.
//!
//! Store documents travel as untyped `serde_json::Value` trees. Before one
//! leaves the API it is walked recursively: mappings keep their key order,
//! sequences keep element order, scalars pass through, and the value under the
//! store-assigned identifier key is canonicalized to a string so callers never
//! see a raw database handle. Pure and idempotent; inputs are assumed acyclic.

use serde_json::Value;

/// Key under which the store-assigned identifier travels on the wire.
pub const ID_KEY: &str = "id";

pub fn normalize(doc: Value) -> Value {
    match doc {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| {
                    let v = if k == ID_KEY { stringify_id(v) } else { normalize(v) };
                    (k, v)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        other => other,
    }
}

/// Canonical string form of an identifier value. Strings are already
/// canonical; null stays null (no identifier assigned); anything else is
/// rendered through its JSON text form.
fn stringify_id(value: Value) -> Value {
    match value {
        Value::String(_) | Value::Null => value,
        other => Value::String(other.to_string()),
    }
}
