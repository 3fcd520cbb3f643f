//! Webhook subscription records.
//!
//! Subscriptions are read-only here: they can be listed and fetched, but
//! not created, and deliveries are not verified.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{AdminResource, ResourceKind, ResourceOperation, ResourcePath};

/// Payload format of webhook deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WebhookFormat {
    /// JSON (default).
    #[default]
    Json,
    /// XML.
    Xml,
}

/// A webhook subscription.
///
/// `id`, `topic` and `address` are required. `topic` stays a string, e.g.
/// `orders/create`, so topics added upstream still map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Webhook {
    /// Identifier of the subscription.
    pub id: u64,

    /// Event topic, e.g. `orders/create`.
    pub topic: String,

    /// Destination URI for deliveries.
    pub address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<WebhookFormat>,

    /// Top-level fields included in each delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafield_namespaces: Option<Vec<String>>,

    /// API version deliveries are serialized with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl AdminResource for Webhook {
    const NAME: &'static str = "Webhook";
    const KIND: ResourceKind = ResourceKind::Webhooks;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "webhooks.json"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "webhooks/{id}.json",
        ),
    ];
}
