//! The per-store session.
//!
//! A [`StoreSession`] owns a [`StoreConfig`], a transport created on first
//! dispatch and reused afterwards, and a runtime used only by blocking
//! calls. Accessors and the batch runner borrow the session, so every
//! dispatch they make shares the same transport.
//!
//! Blocking calls get a transport of their own. Pooled connections are
//! bound to the runtime that opened them, and the session runtime only
//! runs while a blocking call is in progress.

use std::future::Future;
use std::sync::OnceLock;

use futures::future::{join_all, try_join_all};
use tokio::runtime::{Handle, Runtime};
use tracing::debug;

use crate::clients::{HttpClient, HttpError, HttpResponse, RequestDescriptor};
use crate::config::{AccessToken, StoreConfig};
use crate::error::ConfigError;
use crate::rest::resources::{Customer, Fulfillment, Order, Product, Webhook};
use crate::rest::{Accessor, ResourceError};

/// An Admin API session for one store.
///
/// The session is configured once and never mutated afterwards; it is
/// `Send + Sync` and meant to be shared.
///
/// # Example
///
/// ```rust,ignore
/// use shopipy::{AccessToken, StoreConfig, StoreSession};
///
/// // Explicit configuration
/// let config = StoreConfig::builder()
///     .shop("jsmith")
///     .access_token(AccessToken::resolve(None)?)
///     .build()?;
/// let session = StoreSession::new(config);
///
/// // Or: shop slug plus optional token, falling back to SHOPIFY_ADMIN_KEY
/// let session = StoreSession::from_parts("jsmith", None)?;
///
/// let orders = session.orders().list(Some(10)).await?;
/// let customers = session.customers().blocking().list(None); // outside async code
/// ```
#[derive(Debug)]
pub struct StoreSession {
    config: StoreConfig,
    transport: OnceLock<HttpClient>,
    blocking_transport: OnceLock<HttpClient>,
    runtime: OnceLock<Runtime>,
}

/// Which transport a dispatch goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lane {
    /// The caller's runtime.
    Async,
    /// The session runtime, inside [`StoreSession::block_on`].
    Blocking,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreSession>();
};

impl StoreSession {
    /// Creates a session. Nothing is connected until the first dispatch.
    #[must_use]
    pub const fn new(config: StoreConfig) -> Self {
        Self {
            config,
            transport: OnceLock::new(),
            blocking_transport: OnceLock::new(),
            runtime: OnceLock::new(),
        }
    }

    /// Creates a session from a shop slug or domain and an optional token.
    ///
    /// Without a token, `SHOPIFY_ADMIN_KEY` is read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the shop is invalid or no token is found.
    pub fn from_parts(shop: &str, access_token: Option<&str>) -> Result<Self, ConfigError> {
        let config = StoreConfig::builder()
            .shop(shop)
            .access_token(AccessToken::resolve(access_token)?)
            .build()?;
        Ok(Self::new(config))
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The versioned base URL every request path is joined to.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    fn transport(&self, lane: Lane) -> Result<&HttpClient, HttpError> {
        let cell = match lane {
            Lane::Async => &self.transport,
            Lane::Blocking => &self.blocking_transport,
        };
        if let Some(client) = cell.get() {
            return Ok(client);
        }

        let client = HttpClient::new(&self.config)?;
        Ok(cell.get_or_init(|| client))
    }

    fn runtime(&self) -> Result<&Runtime, ResourceError> {
        if let Some(runtime) = self.runtime.get() {
            return Ok(runtime);
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ResourceError::Runtime)?;
        debug!("created blocking runtime");
        Ok(self.runtime.get_or_init(|| runtime))
    }

    /// Drives `future` to completion on the session's runtime.
    ///
    /// Fails instead of blocking whenever a Tokio runtime handle is set on
    /// this thread, including `spawn_blocking` threads.
    pub(crate) fn block_on<F: Future>(
        &self,
        operation: &'static str,
        future: F,
    ) -> Result<F::Output, ResourceError> {
        if Handle::try_current().is_ok() {
            return Err(ResourceError::BlockingInAsyncContext { operation });
        }
        Ok(self.runtime()?.block_on(future))
    }

    /// Sends one request.
    ///
    /// The request is validated before the transport is touched, so a
    /// [`ValidationError`](crate::clients::ValidationError) never opens a
    /// connection.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if validation fails
    /// - [`HttpError::Network`] on connection failures and timeouts
    /// - [`HttpError::Response`] for any non-2xx status
    pub async fn dispatch(&self, request: RequestDescriptor) -> Result<HttpResponse, HttpError> {
        self.dispatch_on(Lane::Async, request).await
    }

    pub(crate) async fn dispatch_on(
        &self,
        lane: Lane,
        request: RequestDescriptor,
    ) -> Result<HttpResponse, HttpError> {
        request.verify()?;
        self.transport(lane)?.request(request).await
    }

    /// Blocking [`StoreSession::dispatch`].
    ///
    /// # Errors
    ///
    /// See [`StoreSession::dispatch`], plus
    /// [`ResourceError::BlockingInAsyncContext`].
    pub fn dispatch_blocking(
        &self,
        request: RequestDescriptor,
    ) -> Result<HttpResponse, ResourceError> {
        Ok(self.block_on("dispatch", self.dispatch_on(Lane::Blocking, request))??)
    }

    /// Dispatches every request concurrently and waits for all of them.
    ///
    /// Results come back in input order. One failure never cancels the
    /// others.
    pub async fn run_batch(
        &self,
        requests: Vec<RequestDescriptor>,
    ) -> Vec<Result<HttpResponse, HttpError>> {
        self.run_batch_on(Lane::Async, requests).await
    }

    async fn run_batch_on(
        &self,
        lane: Lane,
        requests: Vec<RequestDescriptor>,
    ) -> Vec<Result<HttpResponse, HttpError>> {
        debug!(size = requests.len(), policy = "collect-all", "running batch");
        join_all(requests.into_iter().map(|request| self.dispatch_on(lane, request))).await
    }

    /// Dispatches every request concurrently, stopping at the first failure.
    ///
    /// The remaining in-flight dispatches are dropped when one fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] to complete.
    pub async fn run_batch_fail_fast(
        &self,
        requests: Vec<RequestDescriptor>,
    ) -> Result<Vec<HttpResponse>, HttpError> {
        self.run_batch_fail_fast_on(Lane::Async, requests).await
    }

    async fn run_batch_fail_fast_on(
        &self,
        lane: Lane,
        requests: Vec<RequestDescriptor>,
    ) -> Result<Vec<HttpResponse>, HttpError> {
        debug!(size = requests.len(), policy = "fail-fast", "running batch");
        try_join_all(requests.into_iter().map(|request| self.dispatch_on(lane, request))).await
    }

    /// Blocking [`StoreSession::run_batch`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BlockingInAsyncContext`] or
    /// [`ResourceError::Runtime`]; per-request failures are in the vector.
    pub fn run_batch_blocking(
        &self,
        requests: Vec<RequestDescriptor>,
    ) -> Result<Vec<Result<HttpResponse, HttpError>>, ResourceError> {
        self.block_on("run_batch", self.run_batch_on(Lane::Blocking, requests))
    }

    /// Blocking [`StoreSession::run_batch_fail_fast`].
    ///
    /// # Errors
    ///
    /// See [`StoreSession::run_batch_fail_fast`], plus
    /// [`ResourceError::BlockingInAsyncContext`].
    pub fn run_batch_fail_fast_blocking(
        &self,
        requests: Vec<RequestDescriptor>,
    ) -> Result<Vec<HttpResponse>, ResourceError> {
        Ok(self.block_on(
            "run_batch_fail_fast",
            self.run_batch_fail_fast_on(Lane::Blocking, requests),
        )??)
    }

    #[must_use]
    pub const fn orders(&self) -> Accessor<'_, Order> {
        Accessor::new(self)
    }

    /// Product accessor, the only one with create, update and delete.
    #[must_use]
    pub const fn products(&self) -> Accessor<'_, Product> {
        Accessor::new(self)
    }

    #[must_use]
    pub const fn customers(&self) -> Accessor<'_, Customer> {
        Accessor::new(self)
    }

    #[must_use]
    pub const fn webhooks(&self) -> Accessor<'_, Webhook> {
        Accessor::new(self)
    }

    /// Fulfillment accessor. Scope it with
    /// [`for_order`](Accessor::for_order) before reading.
    #[must_use]
    pub const fn fulfillments(&self) -> Accessor<'_, Fulfillment> {
        Accessor::new(self)
    }
}

impl Drop for StoreSession {
    fn drop(&mut self) {
        // Dropping a runtime from async code panics.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
