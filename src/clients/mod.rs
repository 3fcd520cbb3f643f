//! Transport layer for the Admin REST API.
//!
//! - [`HttpClient`]: validates, sends and classifies a single request
//! - [`HttpRequest`] / [`RequestDescriptor`]: what to send
//! - [`HttpResponse`]: what came back, with parsed store headers
//! - [`HttpError`], [`ValidationError`], [`HttpResponseError`]: what went wrong
//!
//! Most callers go through [`StoreSession`](crate::StoreSession), which owns
//! one lazily created `HttpClient` and hands out resource accessors.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopipy::clients::{HttpMethod, HttpRequest};
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
//!     .limit(50)
//!     .query_param("status", "any")
//!     .build()?;
//! let response = session.dispatch(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, ValidationError, MAX_LIMIT, MIN_LIMIT};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, RequestDescriptor};
pub use http_response::{ApiCallLimit, HttpResponse, PaginationInfo};
