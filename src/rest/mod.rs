//! Resource layer on top of the dispatcher.
//!
//! - [`Accessor`]: list, find and get for one resource, in [`Typed`] or
//!   [`Raw`] mode, with a [`Blocking`] mirror
//! - [`AdminResource`]: what a record type declares (name, envelope keys,
//!   path table)
//! - [`ResourceResponse<T>`]: decoded data plus cursors, rate limit and
//!   request id
//! - [`map_record`] and the envelope helpers, for decoding bodies obtained
//!   elsewhere (e.g. from a batch)
//! - [`resources`]: the record types
//!
//! # Example
//!
//! ```rust,ignore
//! use shopipy::{StoreSession, StoreConfig};
//!
//! let session = StoreSession::from_parts("jsmith", None)?;
//!
//! let order = session.orders().find(450789469).await?;
//! println!("{} {}", order.name, order.total_price);
//!
//! let product = session
//!     .products()
//!     .create(serde_json::json!({"title": "Burton Custom Freestyle 151"}))
//!     .await?;
//! session.products().delete(product.id).await?;
//! ```

mod accessor;
mod errors;
mod mapper;
mod path;
mod resource;
mod response;

pub mod resources;

pub use accessor::{Accessor, Blocking, Fetched, ListParams, Mode, Raw, Typed};
pub use errors::{ResourceError, ShapeError};
pub use mapper::{map_record, map_records, unwrap_collection, unwrap_single};
pub use path::{build_path, get_path, missing_ids, ResourceOperation, ResourcePath};
pub use resource::{AdminResource, MutableResource, ResourceKind};
pub use response::ResourceResponse;
