//! Errors raised by resource accessors.
//!
//! [`ShapeError`] covers a 2xx response whose body does not look like the
//! resource it should contain. [`ResourceError`] is what every accessor
//! returns: validation, transport and shape failures, plus misuse of the
//! blocking API.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopipy::rest::{ResourceError, ShapeError};
//!
//! match session.orders().find(450789469).await {
//!     Ok(order) => println!("{}", order.name),
//!     Err(ResourceError::Validation(e)) => println!("not sent: {e}"),
//!     Err(ResourceError::Shape(ShapeError::InvalidRecord { source, .. })) => {
//!         println!("schema drift: {source}");
//!     }
//!     Err(e) if e.status() == Some(404) => println!("no such order"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, ValidationError};

/// A successful response did not have the expected shape.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The body is not a JSON object, so it cannot hold an envelope.
    #[error("Expected a JSON object holding '{key}', got {found}.")]
    NotAnObject {
        /// The envelope key that was expected.
        key: &'static str,
        /// The JSON type that was found instead.
        found: &'static str,
    },

    /// The envelope key is absent. Keys are matched exactly, case included.
    #[error("Response is missing the '{key}' key; found {found:?}.")]
    MissingEnvelope {
        /// The envelope key that was expected.
        key: &'static str,
        /// The top-level keys that were present.
        found: Vec<String>,
    },

    /// The envelope holds the wrong JSON type (e.g. an object instead of a list).
    #[error("Expected '{key}' to hold {expected}, got {found}.")]
    UnexpectedEnvelope {
        /// The envelope key.
        key: &'static str,
        /// The JSON type that was expected.
        expected: &'static str,
        /// The JSON type that was found.
        found: &'static str,
    },

    /// A record could not be assembled from its JSON object.
    #[error("Could not map {record} record{}: {source}", at_index(.index))]
    InvalidRecord {
        /// The record type being mapped.
        record: &'static str,
        /// Position in the collection, for list responses.
        index: Option<usize>,
        /// The underlying deserialization error, naming the field.
        #[source]
        source: serde_json::Error,
    },
}

fn at_index(index: &Option<usize>) -> String {
    index.map_or_else(String::new, |i| format!(" at index {i}"))
}

/// Returns the JSON type name of `value` for error messages.
pub(crate) const fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Error returned by resource accessors and blocking calls.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A precondition failed; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The dispatch failed at the transport or status level.
    #[error(transparent)]
    Http(HttpError),

    /// The response did not contain the expected resource.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// A blocking method was called from inside a Tokio runtime.
    #[error("Cannot call blocking '{operation}' from inside an async runtime; await the async method instead.")]
    BlockingInAsyncContext {
        /// The blocking operation that was attempted.
        operation: &'static str,
    },

    /// The runtime backing blocking calls could not be started.
    #[error("Failed to start the blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl From<HttpError> for ResourceError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::InvalidRequest(e) => Self::Validation(e),
            other => Self::Http(other),
        }
    }
}

impl ResourceError {
    /// Returns the HTTP status for non-2xx responses.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` if the dispatch timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
