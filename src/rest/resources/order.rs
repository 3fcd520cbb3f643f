//! Order records.
//!
//! An order nests most of the other records: addresses, the customer,
//! line items, money sets, fulfillments. Mapping an order maps all of them,
//! and a required field missing anywhere inside fails the whole order.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{AdminResource, ResourceKind, ResourceOperation, ResourcePath};

use super::common::{
    Address, DiscountApplication, DiscountCode, LineItem, MoneySet, NoteAttribute, ShippingLine,
    TaxLine,
};
use super::customer::Customer;
use super::fulfillment::Fulfillment;

/// Browser details captured at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClientDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// The B2B company an order was placed for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
}

/// One scheduled payment under the order's payment terms.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_payment_method: Option<String>,
}

/// Net terms agreed for the order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentTerms {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// e.g. `Net 30`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms_name: Option<String>,

    /// `receipt`, `fulfillment`, `net` or `fixed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_in_days: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_schedules: Option<Vec<PaymentSchedule>>,
}

/// An order placed with the store.
///
/// `id`, `name`, `created_at`, `currency` and `total_price` are required;
/// the rest map to `None` when absent or `null`. Status fields are kept as
/// strings so values added upstream still map.
///
/// # Example
///
/// ```rust
/// use shopipy::rest::map_record;
/// use shopipy::rest::resources::Order;
/// use serde_json::json;
///
/// let order: Order = map_record(json!({
///     "id": 450789469,
///     "name": "#1001",
///     "created_at": "2024-03-11T10:15:00-04:00",
///     "currency": "USD",
///     "total_price": "598.94",
///     "billing_address": {"city": "Drayton Valley", "country_code": "CA"}
/// }))
/// .unwrap();
///
/// let billing = order.billing_address.unwrap();
/// assert_eq!(billing.city.as_deref(), Some("Drayton Valley"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: u64,

    /// Display name, e.g. `#1001`.
    pub name: String,

    pub created_at: DateTime<FixedOffset>,

    /// Shop currency, ISO 4217.
    pub currency: String,

    pub total_price: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<FixedOffset>>,

    /// `customer`, `fraud`, `inventory`, `declined` or `other`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,

    /// `pending`, `authorized`, `paid`, `refunded`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,

    /// `fulfilled`, `partial`, `restocked` or `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    /// Currency the buyer saw, ISO 4217.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_line_items_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_outstanding: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tip_received: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_subtotal_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_tax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_discounts: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_line_items_price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_shipping_price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_subtotal_price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_tax_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_discounts_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_duties_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_additional_fees_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_total_duties_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_total_additional_fees_set: Option<MoneySet>,

    /// Total weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_taxes: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_accepts_marketing: Option<bool>,

    /// Whether this is a test order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_gateway_names: Option<Vec<String>>,

    /// e.g. `web`, `pos`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_site: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_site: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<NoteAttribute>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_of_record_app_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_details: Option<ClientDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<DiscountCode>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_applications: Option<Vec<DiscountApplication>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillments: Option<Vec<Fulfillment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<PaymentTerms>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl AdminResource for Order {
    const NAME: &'static str = "Order";
    const KIND: ResourceKind = ResourceKind::Orders;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "orders.json"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "orders/{id}.json",
        ),
    ];
}
