//! Amounts in shop and presentment currencies.

use serde::{Deserialize, Serialize};

/// An amount in one currency.
///
/// Amounts stay strings so no decimal precision is lost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    /// The amount, e.g. `"19.99"`.
    pub amount: String,

    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// The same amount in the shop currency and in the currency the buyer saw.
///
/// Used for every `*_set` field on orders, e.g. `total_price_set`.
///
/// # Example
///
/// ```rust
/// use shopipy::rest::resources::MoneySet;
/// use serde_json::json;
///
/// let set: MoneySet = serde_json::from_value(json!({
///     "shop_money": {"amount": "598.94", "currency_code": "USD"},
///     "presentment_money": {"amount": "808.57", "currency_code": "CAD"}
/// }))
/// .unwrap();
/// assert_eq!(set.presentment_money.currency_code, "CAD");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoneySet {
    /// Amount in the shop's currency.
    pub shop_money: Money,

    /// Amount in the presentment currency.
    pub presentment_money: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_set_requires_both_currencies() {
        let result = serde_json::from_value::<MoneySet>(json!({
            "shop_money": {"amount": "1.00", "currency_code": "USD"}
        }));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("presentment_money"));
    }

    #[test]
    fn test_money_requires_amount() {
        let result = serde_json::from_value::<Money>(json!({"currency_code": "USD"}));
        assert!(result.unwrap_err().to_string().contains("amount"));
    }
}
