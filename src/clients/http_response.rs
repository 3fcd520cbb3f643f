//! Raw responses from the Admin REST API.
//!
//! [`HttpResponse`] keeps the status, the lower-cased headers and the parsed
//! JSON body, and pulls the store-specific headers into typed fields when it
//! is built.

use std::collections::HashMap;

const LINK_HEADER: &str = "link";
const CALL_LIMIT_HEADER: &str = "x-shopify-shop-api-call-limit";
const REQUEST_ID_HEADER: &str = "x-request-id";
const DEPRECATION_HEADER: &str = "x-shopify-api-deprecated-reason";

/// Rate-limit bucket state from `X-Shopify-Shop-Api-Call-Limit`.
///
/// The header reads `used/size`, e.g. `32/40`.
///
/// ```rust
/// use shopipy::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("32/40").unwrap();
/// assert_eq!(limit.remaining(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Requests currently counted against the bucket.
    pub request_count: u32,
    /// Capacity of the bucket.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses a `used/size` header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (used, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: used.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// Requests left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// Cursor page info parsed from the `Link` header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// `page_info` cursor for the previous page.
    pub prev_page_info: Option<String>,
    /// `page_info` cursor for the next page.
    pub next_page_info: Option<String>,
}

impl PaginationInfo {
    /// Parses a header of the form `<url>; rel="next", <url>; rel="previous"`.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut info = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.split(';').map(str::trim);
            let Some(url) = parts
                .next()
                .map(|s| s.trim_start_matches('<').trim_end_matches('>'))
            else {
                continue;
            };
            let rel = parts.find_map(|part| part.strip_prefix("rel=").map(|r| r.trim_matches('"')));

            let Some(page_info) = Self::page_info_of(url) else {
                continue;
            };
            match rel {
                Some("next") => info.next_page_info = Some(page_info),
                Some("previous") => info.prev_page_info = Some(page_info),
                _ => {}
            }
        }

        info
    }

    /// Returns `true` when neither cursor is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.prev_page_info.is_none() && self.next_page_info.is_none()
    }

    fn page_info_of(url: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "page_info")
            .map(|(_, value)| value.to_string())
    }
}

/// A response from the Admin REST API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed body. Empty bodies are `{}`; non-JSON bodies are a JSON string.
    pub body: serde_json::Value,
    /// Cursor page info from the `Link` header.
    pub pagination: PaginationInfo,
    /// Rate-limit bucket state.
    pub api_call_limit: Option<ApiCallLimit>,
}

impl HttpResponse {
    /// Creates a response, parsing the pagination and rate-limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let pagination = first_value(&headers, LINK_HEADER)
            .map(PaginationInfo::parse_link_header)
            .unwrap_or_default();
        let api_call_limit = first_value(&headers, CALL_LIMIT_HEADER).and_then(ApiCallLimit::parse);

        Self {
            code,
            headers,
            body,
            pagination,
            api_call_limit,
        }
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        first_value(&self.headers, REQUEST_ID_HEADER)
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        first_value(&self.headers, DEPRECATION_HEADER)
    }
}

fn first_value<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_only_for_2xx() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(201, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(199, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(500, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_api_call_limit_parsing() {
        let limit = ApiCallLimit::parse("40/80").unwrap();
        assert_eq!(limit.request_count, 40);
        assert_eq!(limit.bucket_size, 80);
        assert_eq!(limit.remaining(), 40);

        assert!(ApiCallLimit::parse("40").is_none());
        assert!(ApiCallLimit::parse("40/").is_none());
        assert!(ApiCallLimit::parse("abc/def").is_none());
    }

    #[test]
    fn test_link_header_parsing() {
        let link = r#"<https://shop.myshopify.com/admin/api/2023-07/orders.json?limit=50&page_info=abc123>; rel="next", <https://shop.myshopify.com/admin/api/2023-07/orders.json?page_info=xyz789>; rel="previous""#;
        let info = PaginationInfo::parse_link_header(link);
        assert_eq!(info.next_page_info.as_deref(), Some("abc123"));
        assert_eq!(info.prev_page_info.as_deref(), Some("xyz789"));

        let only_next = r#"<https://shop.myshopify.com/admin/api/2023-07/orders.json?page_info=abc123>; rel="next""#;
        let info = PaginationInfo::parse_link_header(only_next);
        assert_eq!(info.next_page_info.as_deref(), Some("abc123"));
        assert!(info.prev_page_info.is_none());

        assert!(PaginationInfo::parse_link_header("garbage").is_empty());
    }

    #[test]
    fn test_headers_are_parsed_on_construction() {
        let response = HttpResponse::new(
            200,
            headers(&[
                ("x-shopify-shop-api-call-limit", "3/40"),
                ("x-request-id", "req-1"),
                ("x-shopify-api-deprecated-reason", "Use GraphQL"),
                (
                    "link",
                    r#"<https://s.myshopify.com/admin/api/2023-07/orders.json?page_info=n1>; rel="next""#,
                ),
            ]),
            json!({}),
        );

        assert_eq!(response.api_call_limit.map(|l| l.request_count), Some(3));
        assert_eq!(response.request_id(), Some("req-1"));
        assert_eq!(response.deprecation_reason(), Some("Use GraphQL"));
        assert_eq!(response.pagination.next_page_info.as_deref(), Some("n1"));
    }

    #[test]
    fn test_missing_headers_yield_none() {
        let response = HttpResponse::new(200, HashMap::new(), json!({}));
        assert!(response.request_id().is_none());
        assert!(response.deprecation_reason().is_none());
        assert!(response.api_call_limit.is_none());
        assert!(response.pagination.is_empty());
    }
}
