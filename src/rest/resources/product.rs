//! Product records and their variants, images and options.
//!
//! Products are the one resource this client can write: see
//! [`Accessor::create`](crate::rest::Accessor::create),
//! [`Accessor::update`](crate::rest::Accessor::update) and
//! [`Accessor::delete`](crate::rest::Accessor::delete).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::rest::{AdminResource, MutableResource, ResourceKind, ResourceOperation, ResourcePath};

/// A purchasable variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Identifier of the variant.
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// `g`, `kg`, `oz` or `lb`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_item_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,

    /// `deny` or `continue`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_management: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    /// Identifier of the image.
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,

    /// Variants that use this image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_ids: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// A customizable attribute of a product, e.g. "Size".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductOption {
    /// Identifier of the option.
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// A product in the store's catalog.
///
/// Only `id` is required.
///
/// # Example
///
/// ```rust
/// use shopipy::rest::map_record;
/// use shopipy::rest::resources::Product;
/// use serde_json::json;
///
/// let product: Product = map_record(json!({
///     "id": 632910392,
///     "title": "IPod Nano - 8GB",
///     "variants": [{"id": 808950810, "price": "199.00", "option1": "Pink"}],
///     "options": [{"id": 594680422, "name": "Color", "values": ["Pink"]}]
/// }))
/// .unwrap();
/// assert_eq!(product.variants.unwrap()[0].price.as_deref(), Some("199.00"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Identifier of the product.
    pub id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description as HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// URL-friendly name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// `active`, `archived` or `draft`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// `web` or `global`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,

    /// Featured image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl AdminResource for Product {
    const NAME: &'static str = "Product";
    const KIND: ResourceKind = ResourceKind::Products;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "products.json"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "products/{id}.json",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "products.json"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "products/{id}.json",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "products/{id}.json",
        ),
    ];
}

impl MutableResource for Product {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use serde_json::json;

    #[test]
    fn test_write_paths_use_the_products_table() {
        let update = get_path(Product::PATHS, ResourceOperation::Update, &["id"]).unwrap();
        assert_eq!(update.http_method, HttpMethod::Put);
        assert_eq!(update.template, "products/{id}.json");

        let create = get_path(Product::PATHS, ResourceOperation::Create, &[]).unwrap();
        assert_eq!(create.http_method, HttpMethod::Post);
        assert_eq!(create.template, "products.json");

        let delete = get_path(Product::PATHS, ResourceOperation::Delete, &["id"]).unwrap();
        assert_eq!(delete.http_method, HttpMethod::Delete);
    }

    #[test]
    fn test_nested_variant_without_id_is_a_shape_error() {
        let result = serde_json::from_value::<Product>(json!({
            "id": 1,
            "variants": [{"id": 2}, {"price": "5.00"}]
        }));
        assert!(result.unwrap_err().to_string().contains("missing field `id`"));
    }

    #[test]
    fn test_product_serializes_back_without_absent_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "title": "Board",
            "published_at": "2024-05-01T12:00:00-04:00"
        }))
        .unwrap();

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({"id": 7, "title": "Board", "published_at": "2024-05-01T12:00:00-04:00"})
        );
    }
}
