//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so a value that
//! exists is a value that can be used.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An Admin API access token.
///
/// The token is non-empty by construction and masked in debug output so it
/// does not leak into logs.
///
/// # Example
///
/// ```rust
/// use shopipy::AccessToken;
///
/// let token = AccessToken::new("shpat_123").unwrap();
/// assert_eq!(token.as_ref(), "shpat_123");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Environment variable consulted by [`AccessToken::resolve`].
    pub const ENV_VAR: &'static str = "SHOPIFY_ADMIN_KEY";

    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }

    /// Resolves a token from an explicit value, falling back to the
    /// `SHOPIFY_ADMIN_KEY` environment variable.
    ///
    /// Call this once from the application's entry point and hand the result
    /// to the configuration builder; the library never reads the environment
    /// on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAccessToken`] if neither source yields a
    /// token, or [`ConfigError::EmptyAccessToken`] if the explicit value is
    /// empty.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        Self::resolve_with(explicit, |name| std::env::var(name).ok())
    }

    /// Same as [`AccessToken::resolve`] with a caller-supplied variable lookup.
    ///
    /// # Errors
    ///
    /// See [`AccessToken::resolve`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopipy::{AccessToken, ConfigError};
    ///
    /// let token = AccessToken::resolve_with(None, |_| Some("from-env".to_string())).unwrap();
    /// assert_eq!(token.as_ref(), "from-env");
    ///
    /// let missing = AccessToken::resolve_with(None, |_| None);
    /// assert!(matches!(missing, Err(ConfigError::MissingAccessToken { .. })));
    /// ```
    pub fn resolve_with<F>(explicit: Option<&str>, lookup: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if let Some(token) = explicit {
            return Self::new(token);
        }

        match lookup(Self::ENV_VAR) {
            Some(token) if !token.trim().is_empty() => Ok(Self(token)),
            _ => Err(ConfigError::MissingAccessToken {
                env_var: Self::ENV_VAR,
            }),
        }
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated Shopify shop domain.
///
/// Accepts either the store slug (`my-store`) or the full domain
/// (`my-store.myshopify.com`) and normalizes to the full domain.
///
/// # Example
///
/// ```rust
/// use shopipy::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is invalid.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();

        if domain.is_empty() {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        let (shop_name, full_domain) = if let Some(shop_name) = domain.strip_suffix(Self::SUFFIX) {
            (shop_name.to_string(), domain)
        } else if domain.contains('.') {
            return Err(ConfigError::InvalidShopDomain { domain });
        } else {
            (domain.clone(), format!("{domain}{}", Self::SUFFIX))
        };

        if !Self::is_valid_shop_name(&shop_name) {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self {
            shop_name_end: shop_name.len(),
            full_domain,
        })
    }

    /// Returns the store slug, e.g. `my-store` for `my-store.myshopify.com`.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    fn is_valid_shop_name(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated URL used to override the API host.
///
/// Requests normally go to `https://{shop}.myshopify.com`. A host override
/// sends them to another origin instead (a proxy, or a local mock server in
/// tests); only the scheme, host, and port are used.
///
/// # Example
///
/// ```rust
/// use shopipy::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/ignored").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), Some("127.0.0.1"));
/// assert_eq!(url.origin(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
    authority_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or
    /// no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidHostUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        let authority_end = remainder
            .find(['/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
            authority_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Returns `scheme://host[:port]` without any path.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.url[..self.authority_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_empty_and_blank() {
        assert!(matches!(AccessToken::new(""), Err(ConfigError::EmptyAccessToken)));
        assert!(matches!(AccessToken::new("   "), Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("shpat_super_secret").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("shpat_super_secret"));
    }

    #[test]
    fn test_resolve_prefers_explicit_value() {
        let token =
            AccessToken::resolve_with(Some("explicit"), |_| Some("from-env".to_string())).unwrap();
        assert_eq!(token.as_ref(), "explicit");
    }

    #[test]
    fn test_resolve_falls_back_to_env_var() {
        let mut asked_for = None;
        let token = AccessToken::resolve_with(None, |name| {
            asked_for = Some(name.to_string());
            Some("from-env".to_string())
        })
        .unwrap();
        assert_eq!(token.as_ref(), "from-env");
        assert_eq!(asked_for.as_deref(), Some("SHOPIFY_ADMIN_KEY"));
    }

    #[test]
    fn test_resolve_without_any_source_fails() {
        let result = AccessToken::resolve_with(None, |_| None);
        assert!(matches!(
            result,
            Err(ConfigError::MissingAccessToken {
                env_var: "SHOPIFY_ADMIN_KEY"
            })
        ));
    }

    #[test]
    fn test_resolve_treats_blank_env_value_as_missing() {
        let result = AccessToken::resolve_with(None, |_| Some(String::new()));
        assert!(matches!(result, Err(ConfigError::MissingAccessToken { .. })));
    }

    #[test]
    fn test_resolve_rejects_empty_explicit_value() {
        let result = AccessToken::resolve_with(Some(""), |_| Some("from-env".to_string()));
        assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_shop_domain_normalizes_short_format() {
        let domain = ShopDomain::new("my-store").unwrap();
        assert_eq!(domain.as_ref(), "my-store.myshopify.com");
        assert_eq!(domain.shop_name(), "my-store");
    }

    #[test]
    fn test_shop_domain_accepts_full_format() {
        let domain = ShopDomain::new("My-Store.myshopify.com").unwrap();
        assert_eq!(domain.as_ref(), "my-store.myshopify.com");
        assert_eq!(domain.shop_name(), "my-store");
    }

    #[test]
    fn test_shop_domain_rejects_invalid_domains() {
        assert!(ShopDomain::new("").is_err());
        assert!(ShopDomain::new("my store").is_err());
        assert!(ShopDomain::new("my_store").is_err());
        assert!(ShopDomain::new("-my-store").is_err());
        assert!(ShopDomain::new("my-store-").is_err());
        assert!(ShopDomain::new("my-store.otherdomain.com").is_err());
    }

    #[test]
    fn test_shop_domain_round_trip_serialization() {
        let original = ShopDomain::new("my-store").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#""my-store.myshopify.com""#);
        let restored: ShopDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn test_host_url_origin_keeps_port_and_drops_path() {
        let url = HostUrl::new("http://localhost:3000/admin").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("localhost"));
        assert_eq!(url.origin(), "http://localhost:3000");

        let url = HostUrl::new("https://proxy.example.com").unwrap();
        assert_eq!(url.origin(), "https://proxy.example.com");
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("proxy.example.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
        assert!(HostUrl::new("https://:8080").is_err());
    }
}
