//! Customer records.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{AdminResource, ResourceKind, ResourceOperation, ResourcePath};

use super::common::CustomerAddress;

/// Marketing consent for one channel (email or SMS).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MarketingConsent {
    /// `subscribed`, `not_subscribed`, `pending`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// `single_opt_in`, `confirmed_opt_in` or `unknown`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_in_level: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_updated_at: Option<DateTime<FixedOffset>>,
}

/// A customer of the store.
///
/// Only `id` is required. Customers embedded in orders go through the same
/// mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    /// Identifier of the customer.
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// `disabled`, `invited`, `enabled` or `declined`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_marketing: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_marketing_consent: Option<MarketingConsent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_marketing_consent: Option<MarketingConsent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exemptions: Option<Vec<String>>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// ISO 4217 code of the currency the customer last ordered in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multipass_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<CustomerAddress>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<CustomerAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl AdminResource for Customer {
    const NAME: &'static str = "Customer";
    const KIND: ResourceKind = ResourceKind::Customers;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "customers.json"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "customers/{id}.json",
        ),
    ];
}
