//! Transport and request-validation error types.
//!
//! - [`ValidationError`]: a request failed a precondition; nothing was sent
//! - [`HttpResponseError`]: the server answered with a non-2xx status
//! - [`HttpError`]: unified error for a single dispatch
//!
//! # Example
//!
//! ```rust,ignore
//! use shopipy::clients::HttpError;
//!
//! match session.dispatch(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("status {}: {}", e.code, e.body),
//!     Err(HttpError::InvalidRequest(e)) => println!("not sent: {e}"),
//!     Err(e) if e.is_timeout() => println!("timed out"),
//!     Err(e) => println!("transport failure: {e}"),
//! }
//! ```

use thiserror::Error;

/// Smallest page size the API accepts.
pub const MIN_LIMIT: u32 = 1;

/// Largest page size the API accepts.
pub const MAX_LIMIT: u32 = 250;

/// A caller-supplied parameter violated a precondition.
///
/// Always raised before any network call, so there are no side effects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The pagination limit is outside `1..=250`.
    #[error("Limit {limit} is out of range; it must be between 1 and 250.")]
    LimitOutOfRange {
        /// The rejected limit.
        limit: u32,
    },

    /// A limit was supplied for a verb that does not paginate.
    #[error("Cannot paginate a {method} request; limit only applies to collection GETs.")]
    LimitNotAllowed {
        /// The HTTP method of the request.
        method: String,
    },

    /// A query parameter that has a dedicated option was set directly.
    #[error("Query parameter '{name}' must be set through its dedicated option.")]
    ReservedQueryParam {
        /// The reserved parameter name.
        name: String,
    },

    /// A nested resource was requested without its parent identifier.
    #[error("{resource} {operation} requires {missing}.")]
    MissingParentId {
        /// The resource being requested.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
        /// The identifier(s) that were not supplied.
        missing: String,
    },

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("A {method} request cannot carry a body.")]
    UnexpectedBody {
        /// The HTTP method that forbids a body.
        method: String,
    },

    /// The request path is empty after normalization.
    #[error("Request path cannot be empty.")]
    EmptyPath,
}

/// A non-2xx response from the API.
///
/// The raw status and body are kept as received so callers can diagnose
/// the failure themselves.
#[derive(Debug, Error, Clone)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// Compact JSON summary of the error fields found in the body.
    pub message: String,
    /// Request ID from the `X-Request-Id` header.
    pub error_reference: Option<String>,
}

/// Error returned by a single dispatch.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server returned a non-2xx status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request failed validation and was never sent.
    #[error(transparent)]
    InvalidRequest(#[from] ValidationError),

    /// Connection, DNS, TLS, or timeout failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl HttpError {
    /// Returns `true` if the dispatch failed because it timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }

    /// Returns the HTTP status code for response errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
