//! Typed records for the resources this client can address.
//!
//! | Record | Accessor | Writes |
//! |---|---|---|
//! | [`Order`] | [`StoreSession::orders`](crate::StoreSession::orders) | – |
//! | [`Product`] | [`StoreSession::products`](crate::StoreSession::products) | create, update, delete |
//! | [`Customer`] | [`StoreSession::customers`](crate::StoreSession::customers) | – |
//! | [`Webhook`] | [`StoreSession::webhooks`](crate::StoreSession::webhooks) | – |
//! | [`Fulfillment`] | [`StoreSession::fulfillments`](crate::StoreSession::fulfillments) | – |
//!
//! Records are immutable snapshots: every fetch builds new values. Fields
//! with plain types are required and fail mapping when absent; `Option`
//! fields are not. Unknown keys are ignored.

mod common;
mod customer;
mod fulfillment;
mod order;
mod product;
mod webhook;

pub use common::{
    Address, CustomerAddress, DiscountAllocation, DiscountApplication, DiscountCode, LineItem,
    Money, MoneySet, NoteAttribute, ShippingLine, TaxLine,
};
pub use customer::{Customer, MarketingConsent};
pub use fulfillment::{Fulfillment, FulfillmentLineItem};
pub use order::{ClientDetails, Company, Order, PaymentSchedule, PaymentTerms};
pub use product::{Product, ProductImage, ProductOption, ProductVariant};
pub use webhook::{Webhook, WebhookFormat};
