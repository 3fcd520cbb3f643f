//! Configuration error types.
//!
//! Every configuration constructor returns `Result<T, ConfigError>` so a
//! session can never be built from incomplete or malformed settings.
//!
//! # Example
//!
//! ```rust
//! use shopipy::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a store configuration.
///
/// These are raised synchronously at construction time and are never
/// retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The access token was provided but is empty.
    #[error("Access token cannot be empty. Please provide a valid Admin API access token.")]
    EmptyAccessToken,

    /// No access token was given and none could be resolved from the environment.
    #[error("No access token available. Pass one explicitly or set the '{env_var}' environment variable.")]
    MissingAccessToken {
        /// The environment variable that was consulted.
        env_var: &'static str,
    },

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required builder field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
