//! The request dispatcher.
//!
//! [`HttpClient`] owns one `reqwest` connection pool bound to a store's
//! versioned base URL and access token. Every dispatch through it is
//! validated first, sent once, and mapped to [`HttpResponse`] or
//! [`HttpError`]. Nothing is retried.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::StoreConfig;

/// Crate version from Cargo.toml, reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// HTTP transport for one store.
///
/// `HttpClient` is `Send + Sync`; a session shares one instance across all
/// in-flight dispatches.
///
/// # Example
///
/// ```rust,ignore
/// use shopipy::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
///     .limit(10)
///     .build()?;
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    default_headers: HashMap<String, String>,
    default_timeout: Option<Duration>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a transport for the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::ClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &StoreConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("{user_agent_prefix}shopipy v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            ACCESS_TOKEN_HEADER.to_string(),
            config.access_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(HttpError::ClientBuild)?;

        tracing::debug!(base_url = %config.base_url(), "created admin api transport");

        Ok(Self {
            client,
            base_url: config.base_url(),
            default_headers,
            default_timeout: config.timeout(),
        })
    }

    /// Returns the versioned base URL, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the absolute URL a request will be sent to, without its query.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        format!("{}{}", self.base_url, request.relative_path())
    }

    /// Sends one request.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if validation fails; nothing is sent
    /// - [`HttpError::Network`] on connection failures and timeouts
    /// - [`HttpError::Response`] for any non-2xx status
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request);
        let mut builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }

        let query = request.query_pairs();
        if !query.is_empty() {
            builder = builder.query(&query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        if let Some(timeout) = request.timeout.or(self.default_timeout) {
            builder = builder.timeout(timeout);
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = Self::parse_body(&body_text);

        let response = HttpResponse::new(code, headers, body);

        tracing::debug!(
            method = %request.http_method,
            path = request.relative_path(),
            status = code,
            "dispatched admin api request"
        );

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Admin API at {}, received reason: {}",
                request.relative_path(),
                reason
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        let error_reference = response.request_id().map(String::from);
        tracing::warn!(
            status = code,
            path = request.relative_path(),
            request_id = error_reference.as_deref().unwrap_or("-"),
            "admin api request failed"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            body: body_text,
            error_reference,
        }))
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    fn parse_body(text: &str) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
    }

    /// Condenses the error fields of a failed response into compact JSON.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "error_description"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ApiVersion};
    use serde_json::json;

    fn config() -> StoreConfig {
        StoreConfig::builder()
            .shop("test-shop")
            .access_token(AccessToken::new("test-access-token").unwrap())
            .api_version(ApiVersion::V2023_07)
            .build()
            .unwrap()
    }

    #[test]
    fn test_base_url_is_versioned() {
        let client = HttpClient::new(&config()).unwrap();
        assert_eq!(
            client.base_url(),
            "https://test-shop.myshopify.com/admin/api/2023-07/"
        );
    }

    #[test]
    fn test_access_token_header_injection() {
        let client = HttpClient::new(&config()).unwrap();
        assert_eq!(
            client.default_headers().get(ACCESS_TOKEN_HEADER),
            Some(&"test-access-token".to_string())
        );
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StoreConfig::builder()
            .shop("test-shop")
            .access_token(AccessToken::new("t").unwrap())
            .user_agent_prefix("Reporting/2.1")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Reporting/2.1 | shopipy v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_url_for_strips_leading_slash() {
        let client = HttpClient::new(&config()).unwrap();
        let request = HttpRequest::builder(HttpMethod::Get, "/orders/1.json")
            .build()
            .unwrap();
        assert_eq!(
            client.url_for(&request),
            "https://test-shop.myshopify.com/admin/api/2023-07/orders/1.json"
        );
    }

    #[test]
    fn test_parse_body_rules() {
        assert_eq!(HttpClient::parse_body(""), json!({}));
        assert_eq!(HttpClient::parse_body("  \n"), json!({}));
        assert_eq!(HttpClient::parse_body(r#"{"a":1}"#), json!({"a": 1}));
        assert_eq!(
            HttpClient::parse_body("<html>oops</html>"),
            json!("<html>oops</html>")
        );
    }

    #[test]
    fn test_serialize_error_keeps_error_fields_and_reference() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-9".to_string()]);
        let response = HttpResponse::new(
            422,
            headers,
            json!({"errors": {"title": ["can't be blank"]}, "other": 1}),
        );

        let message = HttpClient::serialize_error(&response);
        assert!(message.contains("can't be blank"));
        assert!(message.contains("req-9"));
        assert!(!message.contains("other"));
    }
}
