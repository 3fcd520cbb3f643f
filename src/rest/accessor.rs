//! Per-resource accessors.
//!
//! An [`Accessor`] is a cheap view over a [`StoreSession`] bound to one
//! resource type and one decoding [`Mode`]. It resolves the resource's path
//! table into a request, dispatches it through the session and unwraps the
//! envelope of the response.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopipy::rest::ListParams;
//!
//! // Typed records
//! let orders = session.orders().list(Some(50)).await?;
//! let order = session.orders().find(450789469).await?;
//!
//! // Raw JSON, envelope removed
//! let raw = session.orders().raw().find(450789469).await?;
//! assert_eq!(raw["id"], 450789469);
//!
//! // Nested resources need their parent
//! let fulfillments = session.fulfillments().for_order(450789469).list(None).await?;
//!
//! // Extra filters and cursors
//! let params = ListParams::new().limit(250).query_param("status", "any");
//! let page = session.orders().list_with(&params).await?;
//! ```

use std::marker::PhantomData;

use serde_json::Value;
use tracing::debug;

use crate::clients::{HttpMethod, HttpRequest, HttpResponse, ValidationError};
use crate::rest::mapper::{map_record, map_records, unwrap_collection, unwrap_single};
use crate::rest::path::{build_path, get_path, missing_ids};
use crate::rest::resources::Fulfillment;
use crate::rest::{
    AdminResource, MutableResource, ResourceError, ResourceOperation, ResourceResponse,
    ShapeError,
};
use crate::session::Lane;
use crate::StoreSession;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Typed {}
    impl Sealed for super::Raw {}
}

/// How an accessor decodes the records it receives.
///
/// Implemented by [`Typed`] and [`Raw`] only.
pub trait Mode: sealed::Sealed + Send + Sync + 'static {
    /// What one record decodes to.
    type Item<R: AdminResource>;

    /// Decodes one unwrapped record.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidRecord`] if the record does not map.
    fn decode_one<R: AdminResource>(value: Value) -> Result<Self::Item<R>, ShapeError>;

    /// Decodes an unwrapped list of records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidRecord`] naming the first failing index.
    fn decode_many<R: AdminResource>(values: Vec<Value>) -> Result<Vec<Self::Item<R>>, ShapeError>;
}

/// Records are mapped into their Rust types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typed;

/// Records are returned as the JSON objects found under the envelope key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raw;

impl Mode for Typed {
    type Item<R: AdminResource> = R;

    fn decode_one<R: AdminResource>(value: Value) -> Result<R, ShapeError> {
        map_record(value)
    }

    fn decode_many<R: AdminResource>(values: Vec<Value>) -> Result<Vec<R>, ShapeError> {
        map_records(values)
    }
}

impl Mode for Raw {
    type Item<R: AdminResource> = Value;

    fn decode_one<R: AdminResource>(value: Value) -> Result<Value, ShapeError> {
        Ok(value)
    }

    fn decode_many<R: AdminResource>(values: Vec<Value>) -> Result<Vec<Value>, ShapeError> {
        Ok(values)
    }
}

/// Options for a collection read.
///
/// `query` pairs are forwarded in insertion order after `limit`.
///
/// ```rust
/// use shopipy::rest::ListParams;
///
/// let params = ListParams::new()
///     .limit(100)
///     .query_param("status", "any")
///     .query_param("fields", "id,name");
/// assert_eq!(params.limit, Some(100));
/// assert_eq!(params.query.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Page size, 1 to 250. `None` leaves it to the server.
    pub limit: Option<u32>,
    /// Cursor from a previous [`ResourceResponse::next_page_info`].
    pub page_info: Option<String>,
    /// Extra filters, e.g. `status=any` or `created_at_min=...`.
    pub query: Vec<(String, String)>,
}

impl ListParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn page_info(mut self, cursor: impl Into<String>) -> Self {
        self.page_info = Some(cursor.into());
        self
    }

    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Result of [`Accessor::get`]: a page when no id was given, one record otherwise.
#[derive(Debug, Clone)]
pub enum Fetched<T> {
    /// A page of the collection.
    Many(ResourceResponse<Vec<T>>),
    /// A single record.
    One(ResourceResponse<T>),
}

impl<T> Fetched<T> {
    #[must_use]
    pub fn into_one(self) -> Option<ResourceResponse<T>> {
        match self {
            Self::One(record) => Some(record),
            Self::Many(_) => None,
        }
    }

    #[must_use]
    pub const fn is_one(&self) -> bool {
        matches!(self, Self::One(_))
    }
}

/// Reads and writes one resource type through a session.
pub struct Accessor<'s, R, M = Typed> {
    session: &'s StoreSession,
    parents: Vec<(&'static str, u64)>,
    lane: Lane,
    _marker: PhantomData<fn() -> (R, M)>,
}

impl<R, M> Clone for Accessor<'_, R, M> {
    fn clone(&self) -> Self {
        Self {
            session: self.session,
            parents: self.parents.clone(),
            lane: self.lane,
            _marker: PhantomData,
        }
    }
}

impl<R, M> std::fmt::Debug for Accessor<'_, R, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accessor")
            .field("resource", &std::any::type_name::<R>())
            .field("mode", &std::any::type_name::<M>())
            .field("parents", &self.parents)
            .field("lane", &self.lane)
            .finish_non_exhaustive()
    }
}

impl<'s, R: AdminResource> Accessor<'s, R, Typed> {
    pub(crate) const fn new(session: &'s StoreSession) -> Self {
        Self {
            session,
            parents: Vec::new(),
            lane: Lane::Async,
            _marker: PhantomData,
        }
    }
}

impl<'s, M: Mode> Accessor<'s, Fulfillment, M> {
    /// Scopes the accessor to one order's fulfillments.
    #[must_use]
    pub fn for_order(self, order_id: u64) -> Self {
        self.with_parent("order_id", order_id)
    }
}

impl<'s, R: AdminResource, M: Mode> Accessor<'s, R, M> {
    /// Switches to returning raw JSON records.
    #[must_use]
    pub fn raw(self) -> Accessor<'s, R, Raw> {
        self.into_mode()
    }

    /// Switches to returning typed records.
    #[must_use]
    pub fn typed(self) -> Accessor<'s, R, Typed> {
        self.into_mode()
    }

    fn into_mode<N: Mode>(self) -> Accessor<'s, R, N> {
        Accessor {
            session: self.session,
            parents: self.parents,
            lane: self.lane,
            _marker: PhantomData,
        }
    }

    /// Supplies a parent id used by nested path templates.
    ///
    /// Setting the same parent twice keeps the last value.
    #[must_use]
    pub fn with_parent(mut self, name: &'static str, id: u64) -> Self {
        self.parents.retain(|(existing, _)| *existing != name);
        self.parents.push((name, id));
        self
    }

    /// Returns the blocking mirror of this accessor.
    #[must_use]
    pub fn blocking(&self) -> Blocking<'s, R, M> {
        let mut inner = self.clone();
        inner.lane = Lane::Blocking;
        Blocking { inner }
    }

    fn resolve(
        &self,
        operation: ResourceOperation,
        id: Option<u64>,
    ) -> Result<(HttpMethod, String), ValidationError> {
        let mut ids = self.parents.clone();
        if let Some(id) = id {
            ids.push(("id", id));
        }
        let names: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();

        let path = get_path(R::PATHS, operation, &names).ok_or_else(|| {
            ValidationError::MissingParentId {
                resource: R::NAME,
                operation: operation.as_str(),
                missing: missing_ids(R::PATHS, operation, &names).join(" and "),
            }
        })?;

        Ok((path.http_method, build_path(path.template, &ids)))
    }

    /// Builds the collection request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for a missing parent id or a bad limit.
    pub fn list_request(&self, params: &ListParams) -> Result<HttpRequest, ValidationError> {
        let (method, path) = self.resolve(ResourceOperation::All, None)?;
        let mut builder = HttpRequest::builder(method, path)
            .maybe_limit(params.limit)
            .query(params.query.iter().cloned());
        if let Some(cursor) = &params.page_info {
            builder = builder.query_param("page_info", cursor.as_str());
        }
        builder.build()
    }

    /// Builds the single-record request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingParentId`] for a nested resource
    /// without its parent.
    pub fn find_request(&self, id: u64) -> Result<HttpRequest, ValidationError> {
        let (method, path) = self.resolve(ResourceOperation::Find, Some(id))?;
        HttpRequest::builder(method, path).build()
    }

    /// Unwraps and decodes a collection response, e.g. one from a batch.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if the envelope or a record is malformed.
    pub fn decode_collection(
        &self,
        response: HttpResponse,
    ) -> Result<ResourceResponse<Vec<M::Item<R>>>, ShapeError> {
        ResourceResponse::from(response)
            .try_map(|body| unwrap_collection(body, R::KIND))?
            .try_map(M::decode_many::<R>)
    }

    /// Unwraps and decodes a single-record response.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if the envelope or the record is malformed.
    pub fn decode_single(
        &self,
        response: HttpResponse,
    ) -> Result<ResourceResponse<M::Item<R>>, ShapeError> {
        ResourceResponse::from(response)
            .try_map(|body| unwrap_single(body, R::KIND))?
            .try_map(M::decode_one::<R>)
    }

    /// Fetches one page of the collection.
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub async fn list(
        &self,
        limit: Option<u32>,
    ) -> Result<ResourceResponse<Vec<M::Item<R>>>, ResourceError> {
        self.list_with(&ListParams {
            limit,
            ..ListParams::default()
        })
        .await
    }

    /// Fetches one page of the collection with filters and a cursor.
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub async fn list_with(
        &self,
        params: &ListParams,
    ) -> Result<ResourceResponse<Vec<M::Item<R>>>, ResourceError> {
        let request = self.list_request(params)?;
        let response = self.session.dispatch_on(self.lane, request).await?;
        Ok(self.decode_collection(response)?)
    }

    /// Fetches one record by id.
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub async fn find(&self, id: u64) -> Result<ResourceResponse<M::Item<R>>, ResourceError> {
        let request = self.find_request(id)?;
        let response = self.session.dispatch_on(self.lane, request).await?;
        Ok(self.decode_single(response)?)
    }

    /// Fetches one record when `id` is given, otherwise one page.
    ///
    /// `limit` only applies to the page.
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub async fn get(
        &self,
        id: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Fetched<M::Item<R>>, ResourceError> {
        match id {
            Some(id) => self.find(id).await.map(Fetched::One),
            None => self.list(limit).await.map(Fetched::Many),
        }
    }
}

impl<'s, R: MutableResource, M: Mode> Accessor<'s, R, M> {
    /// Wraps `payload` under the singular key unless it is wrapped already.
    fn envelope(payload: Value) -> Value {
        let key = R::KIND.singular_key();
        match payload {
            Value::Object(map) if map.len() == 1 && map.contains_key(key) => Value::Object(map),
            other => serde_json::json!({ key: other }),
        }
    }

    /// Builds the create request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the request is malformed.
    pub fn create_request(&self, payload: Value) -> Result<HttpRequest, ValidationError> {
        let (method, path) = self.resolve(ResourceOperation::Create, None)?;
        HttpRequest::builder(method, path)
            .body(Self::envelope(payload))
            .build()
    }

    /// Builds the update request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the request is malformed.
    pub fn update_request(&self, id: u64, payload: Value) -> Result<HttpRequest, ValidationError> {
        let (method, path) = self.resolve(ResourceOperation::Update, Some(id))?;
        HttpRequest::builder(method, path)
            .body(Self::envelope(payload))
            .build()
    }

    /// Builds the delete request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the request is malformed.
    pub fn delete_request(&self, id: u64) -> Result<HttpRequest, ValidationError> {
        let (method, path) = self.resolve(ResourceOperation::Delete, Some(id))?;
        HttpRequest::builder(method, path).build()
    }

    /// Creates a record and returns it as stored.
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub async fn create(
        &self,
        payload: Value,
    ) -> Result<ResourceResponse<M::Item<R>>, ResourceError> {
        let request = self.create_request(payload)?;
        debug!(resource = R::NAME, "creating record");
        let response = self.session.dispatch_on(self.lane, request).await?;
        Ok(self.decode_single(response)?)
    }

    /// Updates the fields in `payload` and returns the stored record.
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub async fn update(
        &self,
        id: u64,
        payload: Value,
    ) -> Result<ResourceResponse<M::Item<R>>, ResourceError> {
        let request = self.update_request(id, payload)?;
        debug!(resource = R::NAME, id, "updating record");
        let response = self.session.dispatch_on(self.lane, request).await?;
        Ok(self.decode_single(response)?)
    }

    /// Deletes a record. The data is the response body, usually `{}`.
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub async fn delete(&self, id: u64) -> Result<ResourceResponse<Value>, ResourceError> {
        let request = self.delete_request(id)?;
        debug!(resource = R::NAME, id, "deleting record");
        let response = self.session.dispatch_on(self.lane, request).await?;
        Ok(response.into())
    }
}

/// Blocking mirror of an [`Accessor`].
///
/// Each call runs the async operation on the session's own runtime, over a
/// transport reserved for blocking calls. Calling one on a thread with a
/// Tokio runtime handle, `spawn_blocking` threads included, returns
/// [`ResourceError::BlockingInAsyncContext`]; use
/// `Handle::current().block_on` with the async method there.
#[derive(Debug, Clone)]
pub struct Blocking<'s, R, M = Typed> {
    inner: Accessor<'s, R, M>,
}

impl<'s, R: AdminResource, M: Mode> Blocking<'s, R, M> {
    /// Blocking [`Accessor::list`].
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub fn list(
        &self,
        limit: Option<u32>,
    ) -> Result<ResourceResponse<Vec<M::Item<R>>>, ResourceError> {
        self.inner
            .session
            .block_on("list", self.inner.list(limit))?
    }

    /// Blocking [`Accessor::list_with`].
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub fn list_with(
        &self,
        params: &ListParams,
    ) -> Result<ResourceResponse<Vec<M::Item<R>>>, ResourceError> {
        self.inner
            .session
            .block_on("list_with", self.inner.list_with(params))?
    }

    /// Blocking [`Accessor::find`].
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub fn find(&self, id: u64) -> Result<ResourceResponse<M::Item<R>>, ResourceError> {
        self.inner.session.block_on("find", self.inner.find(id))?
    }

    /// Blocking [`Accessor::get`].
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub fn get(
        &self,
        id: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Fetched<M::Item<R>>, ResourceError> {
        self.inner.session.block_on("get", self.inner.get(id, limit))?
    }
}

impl<'s, R: MutableResource, M: Mode> Blocking<'s, R, M> {
    /// Blocking [`Accessor::create`].
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub fn create(&self, payload: Value) -> Result<ResourceResponse<M::Item<R>>, ResourceError> {
        self.inner
            .session
            .block_on("create", self.inner.create(payload))?
    }

    /// Blocking [`Accessor::update`].
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub fn update(
        &self,
        id: u64,
        payload: Value,
    ) -> Result<ResourceResponse<M::Item<R>>, ResourceError> {
        self.inner
            .session
            .block_on("update", self.inner.update(id, payload))?
    }

    /// Blocking [`Accessor::delete`].
    ///
    /// # Errors
    ///
    /// See [`ResourceError`].
    pub fn delete(&self, id: u64) -> Result<ResourceResponse<Value>, ResourceError> {
        self.inner.session.block_on("delete", self.inner.delete(id))?
    }
}
