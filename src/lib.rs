//! # shopipy
//!
//! An async client for the Shopify Admin REST API, with a blocking mirror.
//!
//! ## Overview
//!
//! - [`StoreConfig`] and [`StoreConfigBuilder`]: validated, immutable
//!   settings for one store
//! - [`StoreSession`]: owns a lazily created transport, dispatches requests
//!   and runs batches
//! - [`rest::Accessor`]: list, find and get for orders, products, customers,
//!   webhooks and fulfillments, plus create, update and delete for products
//! - [`rest::resources`]: typed records; [`rest::Raw`] mode returns the JSON
//!   instead
//!
//! ## Quick Start
//!
//! ```rust
//! use shopipy::{AccessToken, ApiVersion, StoreConfig, StoreSession};
//!
//! let config = StoreConfig::builder()
//!     .shop("jsmith")
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::V2025_10)
//!     .build()
//!     .unwrap();
//!
//! let session = StoreSession::new(config);
//! assert_eq!(
//!     session.base_url(),
//!     "https://jsmith.myshopify.com/admin/api/2025-10/"
//! );
//! ```
//!
//! ## Reading resources
//!
//! ```rust,ignore
//! use shopipy::rest::ListParams;
//!
//! let orders = session.orders().list(Some(50)).await?;
//! for order in orders.iter() {
//!     println!("{} {} {}", order.name, order.total_price, order.currency);
//! }
//!
//! let raw = session.customers().raw().find(207119551).await?;
//! let fulfillments = session.fulfillments().for_order(450789469).list(None).await?;
//! ```
//!
//! ## Batches
//!
//! ```rust,ignore
//! let requests = vec![
//!     session.orders().find_request(1)?,
//!     session.orders().find_request(2)?,
//! ];
//!
//! // Collect-all: one result per request, in order
//! for result in session.run_batch(requests).await {
//!     match result {
//!         Ok(response) => println!("{}", session.orders().decode_single(response)?.name),
//!         Err(e) => println!("failed: {e}"),
//!     }
//! }
//! ```
//!
//! ## Blocking calls
//!
//! Every accessor has a [`blocking`](rest::Accessor::blocking) mirror that
//! runs on a runtime owned by the session. Blocking calls made from inside
//! a Tokio runtime return
//! [`ResourceError::BlockingInAsyncContext`](rest::ResourceError::BlockingInAsyncContext).
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
mod session;

pub use config::{AccessToken, ApiVersion, HostUrl, ShopDomain, StoreConfig, StoreConfigBuilder};
pub use error::ConfigError;
pub use session::StoreSession;

pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, PaginationInfo, RequestDescriptor, ValidationError,
};

pub use rest::{
    Accessor, Fetched, ListParams, Raw, ResourceError, ResourceResponse, ShapeError, Typed,
};
