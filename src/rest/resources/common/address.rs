//! Postal addresses embedded in orders and customers.

use serde::{Deserialize, Serialize};

/// A billing or shipping address on an order.
///
/// Every field is optional; stores routinely send partial addresses.
///
/// # Example
///
/// ```rust
/// use shopipy::rest::resources::Address;
///
/// let address = Address {
///     first_name: Some("Bob".to_string()),
///     address1: Some("123 Amoebobacterieae St".to_string()),
///     city: Some("Ottawa".to_string()),
///     province_code: Some("ON".to_string()),
///     country_code: Some("CA".to_string()),
///     ..Default::default()
/// };
/// assert!(address.company.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Address {
    /// First name of the addressee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name of the addressee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Full name of the addressee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Company at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Apartment, suite, unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// City, town, or village.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Province, state, or region name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// Province or state code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,

    /// Country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Phone number at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Geocoded latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Geocoded longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// An address saved on a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomerAddress {
    /// Identifier of the saved address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Identifier of the owning customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    /// Whether this is the customer's default address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,

    /// The address fields themselves.
    #[serde(flatten)]
    pub address: Address,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_address_maps_missing_fields_to_none() {
        let address: Address = serde_json::from_value(json!({
            "address1": "Chestnut Street 92",
            "city": "Louisville",
            "province": null,
            "zip": "40202"
        }))
        .unwrap();

        assert_eq!(address.address1.as_deref(), Some("Chestnut Street 92"));
        assert_eq!(address.zip.as_deref(), Some("40202"));
        assert!(address.province.is_none());
        assert!(address.company.is_none());
    }

    #[test]
    fn test_customer_address_flattens_address_fields() {
        let address: CustomerAddress = serde_json::from_value(json!({
            "id": 207119551,
            "customer_id": 207119551,
            "default": true,
            "first_name": "Bob",
            "city": "Ottawa",
            "country_code": "CA"
        }))
        .unwrap();

        assert_eq!(address.id, Some(207_119_551));
        assert_eq!(address.default, Some(true));
        assert_eq!(address.address.first_name.as_deref(), Some("Bob"));
        assert_eq!(address.address.country_code.as_deref(), Some("CA"));

        let value = serde_json::to_value(&address).unwrap();
        assert_eq!(value["city"], "Ottawa");
        assert!(value.get("address").is_none());
    }
}
