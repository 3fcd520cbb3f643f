//! Path tables for resource accessors.
//!
//! Each resource declares a static slice of [`ResourcePath`]s. An accessor
//! asks [`get_path`] for the most specific template whose ids it can supply
//! and fills it in with [`build_path`]. Nested resources simply declare
//! templates that need a parent id, so a missing parent shows up as "no
//! path matches" before anything is sent.
//!
//! # Example
//!
//! ```rust
//! use shopipy::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use shopipy::clients::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["order_id", "id"],
//!         "orders/{order_id}/fulfillments/{id}.json",
//!     ),
//! ];
//!
//! assert!(get_path(PATHS, ResourceOperation::Find, &["id"]).is_none());
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["order_id", "id"]).unwrap();
//! let url = build_path(path.template, &[("order_id", "450789469"), ("id", "255858046")]);
//! assert_eq!(url, "orders/450789469/fulfillments/255858046.json");
//! ```

use std::fmt::Display;

use crate::clients::HttpMethod;

/// Operations an accessor can perform against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Read one record by id.
    Find,
    /// Read a page of the collection.
    All,
    /// Create a record.
    Create,
    /// Update a record by id.
    Update,
    /// Delete a record by id.
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// One path template for one operation on a resource.
///
/// Templates are relative to the versioned base URL, include the `.json`
/// suffix, and use `{name}` placeholders for ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path serves.
    pub operation: ResourceOperation,
    /// Ids the template needs, in placeholder order.
    pub ids: &'static [&'static str],
    /// The template, e.g. `orders/{id}.json`.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of ids this template needs.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks whether every id this template needs is available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }

    /// Returns the ids this template needs that are not in `available_ids`.
    #[must_use]
    pub fn missing_ids(&self, available_ids: &[&str]) -> Vec<&'static str> {
        self.ids
            .iter()
            .copied()
            .filter(|id| !available_ids.contains(id))
            .collect()
    }
}

/// Selects the most specific path for `operation` whose ids are all available.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Returns the ids still needed by the least demanding path for `operation`.
///
/// Empty when some path already matches or when the operation has no path.
#[must_use]
pub fn missing_ids(
    paths: &[ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Vec<&'static str> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .map(|p| p.missing_ids(available_ids))
        .min_by_key(Vec::len)
        .unwrap_or_default()
}

/// Fills `{name}` placeholders in `template`.
///
/// Values are percent-encoded so an id can never introduce another path
/// segment or a query string.
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &[(&str, V)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(&value.to_string()));
    }

    result
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
