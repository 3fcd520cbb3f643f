//! Store configuration.
//!
//! - [`StoreConfig`]: everything a [`StoreSession`](crate::StoreSession) needs
//! - [`StoreConfigBuilder`]: fluent construction with validation
//! - [`AccessToken`], [`ShopDomain`], [`HostUrl`]: validated newtypes
//! - [`ApiVersion`]: the Admin API version baked into every URL
//!
//! # Example
//!
//! ```rust
//! use shopipy::{AccessToken, ApiVersion, StoreConfig};
//!
//! let config = StoreConfig::builder()
//!     .shop("my-store")
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::V2023_07)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.base_url(),
//!     "https://my-store.myshopify.com/admin/api/2023-07/"
//! );
//! ```

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for a single store.
///
/// `StoreConfig` is immutable once built. It is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    api_version: ApiVersion,
    api_host: Option<HostUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StoreConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the default per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the versioned base URL every resource path is joined onto.
    ///
    /// Always ends with `/`.
    #[must_use]
    pub fn base_url(&self) -> String {
        let origin = self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.shop.as_ref()),
            |host| host.origin().to_string(),
        );
        format!("{origin}/admin/api/{}/", self.api_version)
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

/// Builder for [`StoreConfig`].
///
/// `shop` and `access_token` are required.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest()`]
/// - `api_host`: `None` (requests go to the shop domain)
/// - `timeout`: `None` (no client-side timeout)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    shop: Option<String>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<HostUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store slug or full `*.myshopify.com` domain (required).
    #[must_use]
    pub fn shop(mut self, shop: impl Into<String>) -> Self {
        self.shop = Some(shop.into());
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes requests to another origin instead of the shop domain.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the default timeout applied to every dispatch.
    ///
    /// A timeout set on an individual request takes precedence.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StoreConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` is not set,
    /// [`ConfigError::InvalidShopDomain`] if it is malformed, and
    /// [`ConfigError::MissingAccessToken`] if no token was provided.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })
            .and_then(ShopDomain::new)?;
        let access_token = self.access_token.ok_or(ConfigError::MissingAccessToken {
            env_var: AccessToken::ENV_VAR,
        })?;

        Ok(StoreConfig {
            shop,
            access_token,
            api_version: self.api_version.unwrap_or_default(),
            api_host: self.api_host,
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("test-token").unwrap()
    }

    #[test]
    fn test_builder_requires_shop() {
        let result = StoreConfigBuilder::new().access_token(token()).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop" })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = StoreConfigBuilder::new().shop("my-store").build();
        assert!(matches!(result, Err(ConfigError::MissingAccessToken { .. })));
    }

    #[test]
    fn test_builder_rejects_invalid_shop() {
        let result = StoreConfig::builder()
            .shop("not a shop")
            .access_token(token())
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidShopDomain { .. })));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StoreConfig::builder()
            .shop("my-store")
            .access_token(token())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert!(config.api_host().is_none());
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_base_url_uses_shop_domain_and_version() {
        let config = StoreConfig::builder()
            .shop("my-store")
            .access_token(token())
            .api_version(ApiVersion::V2024_10)
            .build()
            .unwrap();

        assert_eq!(
            config.base_url(),
            "https://my-store.myshopify.com/admin/api/2024-10/"
        );
    }

    #[test]
    fn test_base_url_uses_api_host_override() {
        let config = StoreConfig::builder()
            .shop("my-store")
            .access_token(token())
            .api_version(ApiVersion::V2023_07)
            .api_host(HostUrl::new("http://127.0.0.1:4010/").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "http://127.0.0.1:4010/admin/api/2023-07/");
    }

    #[test]
    fn test_debug_output_masks_token() {
        let config = StoreConfig::builder()
            .shop("my-store")
            .access_token(AccessToken::new("shpat_secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("StoreConfig"));
        assert!(!debug_str.contains("shpat_secret"));
    }
}
