//! Envelope unwrapping and record mapping.
//!
//! Responses wrap their payload in a single key: `{"orders": [...]}` for a
//! collection and `{"order": {...}}` for one record. The helpers here pull
//! the payload out using the keys from [`ResourceKind`] and, for typed
//! output, hand each object to serde.
//!
//! Record fields declared with plain types are required; `Option` fields
//! accept both a missing key and `null`. Keys a record does not declare are
//! ignored.

use serde_json::{Map, Value};

use crate::rest::errors::json_type;
use crate::rest::{AdminResource, ResourceKind, ShapeError};

/// Maps one JSON object onto `R`.
///
/// Nested records and lists of nested records are mapped recursively.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidRecord`] if a required field is missing or
/// a field has the wrong type.
///
/// # Example
///
/// ```rust
/// use shopipy::rest::map_record;
/// use shopipy::rest::resources::Webhook;
/// use serde_json::json;
///
/// let webhook: Webhook = map_record(json!({
///     "id": 4759306,
///     "topic": "orders/create",
///     "address": "https://example.org/hooks",
///     "shiny_new_field": true
/// }))
/// .unwrap();
/// assert_eq!(webhook.topic, "orders/create");
/// ```
pub fn map_record<R: AdminResource>(value: Value) -> Result<R, ShapeError> {
    serde_json::from_value(value).map_err(|source| ShapeError::InvalidRecord {
        record: R::NAME,
        index: None,
        source,
    })
}

/// Maps a list of JSON objects onto `R`, preserving order.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidRecord`] for the first object that fails,
/// with its index.
pub fn map_records<R: AdminResource>(values: Vec<Value>) -> Result<Vec<R>, ShapeError> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|source| ShapeError::InvalidRecord {
                record: R::NAME,
                index: Some(index),
                source,
            })
        })
        .collect()
}

/// Takes the list under the collection key of `kind`.
///
/// # Errors
///
/// Returns [`ShapeError`] if the body is not an object, the key is absent,
/// or the key does not hold a list.
pub fn unwrap_collection(body: Value, kind: ResourceKind) -> Result<Vec<Value>, ShapeError> {
    let key = kind.collection_key();
    match take_envelope(body, key)? {
        Value::Array(items) => Ok(items),
        other => Err(ShapeError::UnexpectedEnvelope {
            key,
            expected: "a list",
            found: json_type(&other),
        }),
    }
}

/// Takes the object under the singular key of `kind`.
///
/// # Errors
///
/// Returns [`ShapeError`] if the body is not an object, the key is absent,
/// or the key does not hold an object.
pub fn unwrap_single(body: Value, kind: ResourceKind) -> Result<Value, ShapeError> {
    let key = kind.singular_key();
    match take_envelope(body, key)? {
        object @ Value::Object(_) => Ok(object),
        other => Err(ShapeError::UnexpectedEnvelope {
            key,
            expected: "an object",
            found: json_type(&other),
        }),
    }
}

fn take_envelope(body: Value, key: &'static str) -> Result<Value, ShapeError> {
    let mut object: Map<String, Value> = match body {
        Value::Object(object) => object,
        other => {
            return Err(ShapeError::NotAnObject {
                key,
                found: json_type(&other),
            })
        }
    };

    object.remove(key).ok_or_else(|| ShapeError::MissingEnvelope {
        key,
        found: object.keys().cloned().collect(),
    })
}
