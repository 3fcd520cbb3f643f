//! Fulfillment records.
//!
//! Fulfillments only exist under an order, so both the collection and the
//! single-record paths need an `order_id`:
//!
//! - `orders/{order_id}/fulfillments.json`
//! - `orders/{order_id}/fulfillments/{id}.json`

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{AdminResource, ResourceKind, ResourceOperation, ResourcePath};

/// A line item shipped by a fulfillment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FulfillmentLineItem {
    /// Identifier of the order line item.
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
}

/// A shipment of some or all of an order's line items.
///
/// `id`, `order_id`, `status` and `created_at` are required.
///
/// # Example
///
/// ```rust
/// use shopipy::rest::map_record;
/// use shopipy::rest::resources::Fulfillment;
/// use serde_json::json;
///
/// let fulfillment: Fulfillment = map_record(json!({
///     "id": 255858046,
///     "order_id": 450789469,
///     "status": "success",
///     "created_at": "2024-03-11T10:15:00-04:00",
///     "tracking_number": "1Z2345"
/// }))
/// .unwrap();
/// assert_eq!(fulfillment.tracking_number.as_deref(), Some("1Z2345"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fulfillment {
    /// Identifier of the fulfillment.
    pub id: u64,

    /// Identifier of the order it belongs to.
    pub order_id: u64,

    /// `pending`, `open`, `success`, `cancelled`, `error` or `failure`.
    pub status: String,

    pub created_at: DateTime<FixedOffset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,

    /// Display name, e.g. `#1001.1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    /// Carrier-reported delivery state, e.g. `in_transit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_urls: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<FulfillmentLineItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl AdminResource for Fulfillment {
    const NAME: &'static str = "Fulfillment";
    const KIND: ResourceKind = ResourceKind::Fulfillments;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["order_id"],
            "orders/{order_id}/fulfillments.json",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["order_id", "id"],
            "orders/{order_id}/fulfillments/{id}.json",
        ),
    ];
}
