//! Line items and the charges attached to them.

use serde::{Deserialize, Serialize};

use super::money::MoneySet;

/// A tax charged on an order, line item or shipping line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxLine {
    /// Name of the tax, e.g. "State Tax".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Amount charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Rate as a fraction, e.g. `0.06`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    /// Whether the channel that sold the order is liable for the tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_liable: Option<bool>,

    /// Amount in both currencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_set: Option<MoneySet>,
}

/// How an order-level discount was applied.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountApplication {
    /// `discount_code`, `manual`, `script` or `automatic`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Discount value, read together with `value_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// `percentage` or `fixed_amount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// `across`, `each` or `one`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_method: Option<String>,

    /// `all`, `entitled` or `explicit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_selection: Option<String>,

    /// `line_item` or `shipping_line`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
}

/// The share of a discount that landed on one line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountAllocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Index into the order's `discount_applications`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_application_index: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_set: Option<MoneySet>,
}

/// A discount code entered at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DiscountCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// `fixed_amount`, `percentage` or `shipping`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,
}

/// One purchased variant on an order.
///
/// Only `id` is required.
///
/// # Example
///
/// ```rust
/// use shopipy::rest::resources::LineItem;
/// use serde_json::json;
///
/// let item: LineItem = serde_json::from_value(json!({
///     "id": 466157049,
///     "title": "IPod Nano - 8gb",
///     "quantity": 1,
///     "price": "199.00"
/// }))
/// .unwrap();
/// assert_eq!(item.quantity, Some(1));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Identifier of the line item.
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// Product title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Variant title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,

    /// Product and variant title combined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Quantity still to be fulfilled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillable_quantity: Option<i64>,

    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    /// `null`, `fulfilled`, `partial` or `not_eligible`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<NoteAttribute>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_allocations: Option<Vec<DiscountAllocation>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

/// A shipping method charged on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Where the rate came from, e.g. `shopify`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_fulfillment_service_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
}

/// A free-form name/value pair on an order or line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteAttribute {
    pub name: String,

    /// Usually a string, but stores are free to send any JSON.
    pub value: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_item_maps_nested_tax_lines_in_order() {
        let item: LineItem = serde_json::from_value(json!({
            "id": 1,
            "tax_lines": [
                {"title": "GST", "price": "1.00", "rate": 0.05},
                {"title": "PST", "price": "1.40", "rate": 0.07}
            ]
        }))
        .unwrap();

        let titles: Vec<_> = item
            .tax_lines
            .unwrap()
            .into_iter()
            .filter_map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["GST", "PST"]);
    }

    #[test]
    fn test_line_item_requires_id() {
        let result = serde_json::from_value::<LineItem>(json!({"title": "No id"}));
        assert!(result.unwrap_err().to_string().contains("missing field `id`"));
    }

    #[test]
    fn test_discount_type_is_renamed() {
        let code: DiscountCode =
            serde_json::from_value(json!({"code": "TENOFF", "amount": "10.00", "type": "fixed_amount"}))
                .unwrap();
        assert_eq!(code.discount_type.as_deref(), Some("fixed_amount"));
        assert_eq!(serde_json::to_value(&code).unwrap()["type"], "fixed_amount");
    }

    #[test]
    fn test_note_attribute_value_keeps_json() {
        let attr: NoteAttribute =
            serde_json::from_value(json!({"name": "gift", "value": true})).unwrap();
        assert_eq!(attr.value, json!(true));
    }
}
