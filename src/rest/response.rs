//! Accessor results with their response metadata.
//!
//! [`ResourceResponse<T>`] carries the decoded data together with the page
//! cursors, rate-limit bucket and request id of the response it came from.
//! It derefs to `T`, so a list result can be iterated directly:
//!
//! ```rust,ignore
//! let orders = session.orders().list(Some(50)).await?;
//! for order in orders.iter() {
//!     println!("{} {}", order.name, order.total_price);
//! }
//!
//! if let Some(cursor) = orders.next_page_info() {
//!     let params = ListParams::new().limit(50).page_info(cursor);
//!     let next = session.orders().list_with(&params).await?;
//! }
//! ```

use std::ops::{Deref, DerefMut};

use crate::clients::{ApiCallLimit, HttpResponse, PaginationInfo};

/// Data returned by an accessor, plus the metadata of its response.
///
/// `T` is a record (`Order`), a list of records (`Vec<Order>`), or the raw
/// JSON equivalents in raw mode.
///
/// # Example
///
/// ```rust
/// use shopipy::rest::ResourceResponse;
/// use shopipy::clients::{ApiCallLimit, PaginationInfo};
///
/// let response = ResourceResponse::new(
///     vec!["a", "b"],
///     Some(PaginationInfo {
///         prev_page_info: None,
///         next_page_info: Some("eyJsYXN0X2lkIjo0fQ".to_string()),
///     }),
///     Some(ApiCallLimit { request_count: 1, bucket_size: 40 }),
///     Some("req-123".to_string()),
/// );
///
/// assert_eq!(response.len(), 2);
/// assert!(response.has_next_page());
/// assert_eq!(response.rate_limit().unwrap().remaining(), 39);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Option<PaginationInfo>,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a response from data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Option<PaginationInfo>,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the response and returns the data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns `true` if the `Link` header advertised a next page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page_info().is_some()
    }

    /// Returns `true` if the `Link` header advertised a previous page.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.prev_page_info().is_some()
    }

    /// Cursor for the next page, to pass back as `page_info`.
    #[must_use]
    pub fn next_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.next_page_info.as_deref())
    }

    /// Cursor for the previous page.
    #[must_use]
    pub fn prev_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.prev_page_info.as_deref())
    }

    #[must_use]
    pub const fn pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    /// Rate-limit bucket state from `X-Shopify-Shop-Api-Call-Limit`.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// The `X-Request-Id` of the response, for support requests.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the data, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }

    /// Maps the data with a fallible function, keeping the metadata.
    ///
    /// # Errors
    ///
    /// Returns whatever `f` returns.
    pub fn try_map<U, E, F>(self, f: F) -> Result<ResourceResponse<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(ResourceResponse {
            data: f(self.data)?,
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        })
    }
}

impl From<HttpResponse> for ResourceResponse<serde_json::Value> {
    /// Takes the body as data and the headers as metadata.
    fn from(response: HttpResponse) -> Self {
        let request_id = response.request_id().map(ToString::to_string);
        let pagination = (!response.pagination.is_empty()).then_some(response.pagination);

        Self {
            data: response.body,
            pagination,
            rate_limit: response.api_call_limit,
            request_id,
        }
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<serde_json::Value>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn http_response(headers: &[(&str, &str)], body: serde_json::Value) -> HttpResponse {
        let headers: HashMap<String, Vec<String>> = headers
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect();
        HttpResponse::new(200, headers, body)
    }

    #[test]
    fn test_deref_gives_access_to_the_data() {
        let mut response = ResourceResponse::new(vec![1, 2], None, None, None);
        assert_eq!(response.len(), 2);

        response.push(3);
        assert_eq!(response.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn test_from_http_response_carries_metadata() {
        let response: ResourceResponse<serde_json::Value> = http_response(
            &[
                ("x-request-id", "req-456"),
                ("x-shopify-shop-api-call-limit", "5/40"),
                (
                    "link",
                    r#"<https://jsmith.myshopify.com/admin/api/2025-10/orders.json?limit=1&page_info=next123>; rel="next""#,
                ),
            ],
            json!({"orders": []}),
        )
        .into();

        assert_eq!(response.request_id(), Some("req-456"));
        assert_eq!(response.rate_limit().unwrap().request_count, 5);
        assert_eq!(response.next_page_info(), Some("next123"));
        assert!(!response.has_prev_page());
        assert_eq!(*response, json!({"orders": []}));
    }

    #[test]
    fn test_no_link_header_means_no_pagination() {
        let response: ResourceResponse<serde_json::Value> =
            http_response(&[], json!({"order": {}})).into();
        assert!(response.pagination().is_none());
        assert!(!response.has_next_page());
    }

    #[test]
    fn test_try_map_keeps_metadata_or_returns_error() {
        let response = ResourceResponse::new(
            "7",
            Some(PaginationInfo {
                prev_page_info: Some("prev".to_string()),
                next_page_info: None,
            }),
            None,
            Some("req-1".to_string()),
        );

        let mapped = response.clone().try_map(str::parse::<u32>).unwrap();
        assert_eq!(*mapped, 7);
        assert_eq!(mapped.prev_page_info(), Some("prev"));
        assert_eq!(mapped.request_id(), Some("req-1"));

        let failed = response.map(|_| "x").try_map(str::parse::<u32>);
        assert!(failed.is_err());
    }
}
