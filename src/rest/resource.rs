//! Resource declarations.
//!
//! A record type becomes reachable through an [`Accessor`](crate::rest::Accessor)
//! by implementing [`AdminResource`]: a display name, its [`ResourceKind`]
//! (which fixes the envelope keys), and its path table. Resources that
//! accept writes also implement [`MutableResource`].
//!
//! Envelope keys are looked up in a fixed table rather than derived from
//! the resource name, and compared case-sensitively.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::rest::ResourcePath;

/// The resources this client knows how to address.
///
/// | Kind | Collection key | Singular key |
/// |---|---|---|
/// | `Orders` | `orders` | `order` |
/// | `Products` | `products` | `product` |
/// | `Customers` | `customers` | `customer` |
/// | `Webhooks` | `webhooks` | `webhook` |
/// | `Fulfillments` | `fulfillments` | `fulfillment` |
///
/// Parent ids come from each resource's path table, not from its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Orders.
    Orders,
    /// Products.
    Products,
    /// Customers.
    Customers,
    /// Webhook subscriptions.
    Webhooks,
    /// Fulfillments, nested under an order.
    Fulfillments,
}

impl ResourceKind {
    /// Key wrapping a collection response, e.g. `{"orders": [...]}`.
    #[must_use]
    pub const fn collection_key(self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Products => "products",
            Self::Customers => "customers",
            Self::Webhooks => "webhooks",
            Self::Fulfillments => "fulfillments",
        }
    }

    /// Key wrapping a single-record response, e.g. `{"order": {...}}`.
    #[must_use]
    pub const fn singular_key(self) -> &'static str {
        match self {
            Self::Orders => "order",
            Self::Products => "product",
            Self::Customers => "customer",
            Self::Webhooks => "webhook",
            Self::Fulfillments => "fulfillment",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_key())
    }
}

/// A record type served by the Admin REST API.
///
/// # Example
///
/// ```rust,ignore
/// impl AdminResource for Webhook {
///     const NAME: &'static str = "Webhook";
///     const KIND: ResourceKind = ResourceKind::Webhooks;
///     const PATHS: &'static [ResourcePath] = &[
///         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "webhooks.json"),
///         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "webhooks/{id}.json"),
///     ];
/// }
/// ```
pub trait AdminResource: DeserializeOwned + Send + Sync + 'static {
    /// Display name used in errors and logs.
    const NAME: &'static str;

    /// Which envelope keys this resource uses.
    const KIND: ResourceKind;

    /// Path templates for every supported operation.
    const PATHS: &'static [ResourcePath];
}

/// A resource that accepts create, update and delete.
pub trait MutableResource: AdminResource {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_table_is_exact() {
        let kinds = [
            ResourceKind::Orders,
            ResourceKind::Products,
            ResourceKind::Customers,
            ResourceKind::Webhooks,
            ResourceKind::Fulfillments,
        ];
        let table: Vec<_> = kinds
            .iter()
            .map(|k| (k.collection_key(), k.singular_key()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("orders", "order"),
                ("products", "product"),
                ("customers", "customer"),
                ("webhooks", "webhook"),
                ("fulfillments", "fulfillment"),
            ]
        );
    }

    #[test]
    fn test_display_uses_collection_key() {
        assert_eq!(ResourceKind::Fulfillments.to_string(), "fulfillments");
    }
}
