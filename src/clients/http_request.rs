//! Request descriptors for the Admin REST API.
//!
//! An [`HttpRequest`] describes one dispatch: verb, relative path, query
//! parameters, an optional page size, an optional JSON body and an optional
//! timeout. It is validated before anything touches the network, and is
//! consumed exactly once by the dispatcher or the batch runner.

use std::fmt;
use std::time::Duration;

use crate::clients::errors::{ValidationError, MAX_LIMIT, MIN_LIMIT};

/// HTTP methods supported by the Admin REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Retrieve a resource or a page of resources.
    Get,
    /// Create a resource.
    Post,
    /// Replace fields on an existing resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for verbs that must carry a JSON body.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    /// Returns `true` for verbs that accept a `limit` parameter.
    #[must_use]
    pub const fn paginates(self) -> bool {
        matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// One request to be dispatched against the store.
///
/// Use [`HttpRequest::builder`] to construct requests; the builder validates
/// on [`build`](HttpRequestBuilder::build) and the dispatcher validates again
/// before sending, so a hand-assembled descriptor cannot bypass the checks.
///
/// # Example
///
/// ```rust
/// use shopipy::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let page = HttpRequest::builder(HttpMethod::Get, "orders.json")
///     .limit(100)
///     .query_param("status", "any")
///     .build()
///     .unwrap();
/// assert_eq!(page.limit, Some(100));
///
/// let create = HttpRequest::builder(HttpMethod::Post, "products.json")
///     .body(json!({"product": {"title": "Board"}}))
///     .build()
///     .unwrap();
/// assert!(create.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the versioned base URL, e.g. `orders.json`.
    pub path: String,
    /// Extra query parameters, forwarded in insertion order.
    pub query: Vec<(String, String)>,
    /// Page size for collection reads. `None` sends no `limit` parameter.
    pub limit: Option<u32>,
    /// JSON body for mutating verbs.
    pub body: Option<serde_json::Value>,
    /// Timeout for this dispatch alone, overriding the session default.
    pub timeout: Option<Duration>,
}

/// The name under which a request descriptor is handed to the batch runner.
pub type RequestDescriptor = HttpRequest;

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns the path with any leading `/` removed.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        self.path.trim_start_matches('/')
    }

    /// Returns every query pair to send, `limit` first.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.query.len() + 1);
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs.extend(self.query.iter().cloned());
        pairs
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if:
    /// - the path is empty once the leading `/` is stripped
    /// - `limit` is set on a verb other than GET
    /// - `limit` is outside `1..=250`
    /// - `limit` is smuggled in through the raw query parameters
    /// - the verb is POST or PUT and there is no body
    /// - the verb is GET or DELETE and there is a body
    pub fn verify(&self) -> Result<(), ValidationError> {
        if self.relative_path().is_empty() {
            return Err(ValidationError::EmptyPath);
        }

        if let Some(limit) = self.limit {
            if !self.http_method.paginates() {
                return Err(ValidationError::LimitNotAllowed {
                    method: self.http_method.to_string(),
                });
            }
            if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
                return Err(ValidationError::LimitOutOfRange { limit });
            }
        }

        if self.query.iter().any(|(key, _)| key == "limit") {
            return Err(ValidationError::ReservedQueryParam {
                name: "limit".to_string(),
            });
        }

        match (self.http_method.requires_body(), self.body.is_some()) {
            (true, false) => Err(ValidationError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (false, true) => Err(ValidationError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    limit: Option<u32>,
    body: Option<serde_json::Value>,
    timeout: Option<Duration>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: Vec::new(),
            limit: None,
            body: None,
            timeout: None,
        }
    }

    /// Sets the page size. Only valid on GET.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets or clears the page size.
    #[must_use]
    pub const fn maybe_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends several query parameters, keeping their order.
    #[must_use]
    pub fn query<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a timeout for this dispatch only.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, ValidationError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            limit: self.limit,
            body: self.body,
            timeout: self.timeout,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn get(path: &str) -> HttpRequestBuilder {
        HttpRequest::builder(HttpMethod::Get, path)
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_limit_bounds_are_inclusive() {
        assert!(get("orders.json").limit(1).build().is_ok());
        assert!(get("orders.json").limit(250).build().is_ok());

        assert_eq!(
            get("orders.json").limit(0).build(),
            Err(ValidationError::LimitOutOfRange { limit: 0 })
        );
        assert_eq!(
            get("orders.json").limit(251).build(),
            Err(ValidationError::LimitOutOfRange { limit: 251 })
        );
    }

    #[test]
    fn test_absent_limit_sends_no_limit_param() {
        let request = get("orders.json").build().unwrap();
        assert!(request.query_pairs().is_empty());
    }

    #[test]
    fn test_limit_rejected_on_non_get() {
        let result = HttpRequest::builder(HttpMethod::Delete, "products/1.json")
            .limit(10)
            .build();
        assert!(matches!(
            result,
            Err(ValidationError::LimitNotAllowed { method }) if method == "delete"
        ));
    }

    #[test]
    fn test_limit_cannot_be_smuggled_through_query() {
        let result = get("orders.json").query_param("limit", "900").build();
        assert!(matches!(
            result,
            Err(ValidationError::ReservedQueryParam { name }) if name == "limit"
        ));
    }

    #[test]
    fn test_query_pairs_keep_insertion_order_after_limit() {
        let request = get("orders.json")
            .query_param("status", "any")
            .query([("fields", "id,name"), ("since_id", "10")])
            .limit(5)
            .build()
            .unwrap();

        assert_eq!(
            request.query_pairs(),
            vec![
                ("limit".to_string(), "5".to_string()),
                ("status".to_string(), "any".to_string()),
                ("fields".to_string(), "id,name".to_string()),
                ("since_id".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_post_and_put_require_body() {
        let post = HttpRequest::builder(HttpMethod::Post, "products.json").build();
        assert!(matches!(
            post,
            Err(ValidationError::MissingBody { method }) if method == "post"
        ));

        let put = HttpRequest::builder(HttpMethod::Put, "products/1.json").build();
        assert!(matches!(
            put,
            Err(ValidationError::MissingBody { method }) if method == "put"
        ));
    }

    #[test]
    fn test_get_rejects_body() {
        let result = get("orders.json").body(json!({"order": {}})).build();
        assert!(matches!(
            result,
            Err(ValidationError::UnexpectedBody { method }) if method == "get"
        ));
    }

    #[test]
    fn test_path_normalization() {
        let request = get("/orders.json").build().unwrap();
        assert_eq!(request.relative_path(), "orders.json");

        assert_eq!(get("/").build(), Err(ValidationError::EmptyPath));
        assert_eq!(get("").build(), Err(ValidationError::EmptyPath));
    }

    #[test]
    fn test_verify_catches_hand_built_requests() {
        let request = HttpRequest {
            http_method: HttpMethod::Get,
            path: "orders.json".to_string(),
            query: Vec::new(),
            limit: Some(1000),
            body: None,
            timeout: None,
        };
        assert_eq!(
            request.verify(),
            Err(ValidationError::LimitOutOfRange { limit: 1000 })
        );
    }

    #[test]
    fn test_timeout_is_carried() {
        let request = get("orders.json")
            .timeout(Duration::from_millis(250))
            .build()
            .unwrap();
        assert_eq!(request.timeout, Some(Duration::from_millis(250)));
    }
}
