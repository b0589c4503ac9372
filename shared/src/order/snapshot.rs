//! Product order snapshot - one order record as fetched from the marketplace
//!
//! The snapshot is read-only: financial figures are recomputed from a fresh
//! snapshot whenever one is fetched, never mutated in place. Required fields
//! are guaranteed by the marketplace API contract and fail deserialization
//! when absent; optional fields resolve to documented defaults.

use super::types::{OrderLine, OrderState, TaxMode};
use crate::util::de_i64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer-facing references attached to an order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderReferences {
    /// Reference shown to the customer; empty when the marketplace omits it
    #[serde(default)]
    pub order_reference_for_customer: String,
}

/// Customer block of an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderCustomer {
    /// Marketplace customer id
    pub customer_id: String,
}

/// Product order snapshot
///
/// `total_price` is already net of refused/canceled lines at the marketplace
/// level; consumers must not re-subtract their contributions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductOrder {
    /// Marketplace order id
    pub order_id: String,
    /// Commercial id grouping logistic orders placed together
    pub commercial_id: String,
    /// Customer-facing references
    #[serde(default)]
    pub references: OrderReferences,
    /// Creation timestamp
    pub created_date: DateTime<Utc>,
    /// Lifecycle state
    pub order_state: OrderState,
    /// Shop (seller) id; arrives as a number or numeric string, parsed once
    #[serde(deserialize_with = "de_i64")]
    pub shop_id: i64,
    /// Customer block
    pub customer: OrderCustomer,
    /// Payment transaction number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_number: Option<String>,
    /// Tax mode; absent means taxes are quoted on top of prices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_tax_mode: Option<TaxMode>,
    /// When the customer was debited; absent or empty means not yet paid.
    /// Kept as the raw string so an empty value stays observable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_debited_date: Option<String>,
    /// ISO 4217 currency code
    pub currency_iso_code: String,
    /// Order total, net of refused/canceled lines
    pub total_price: f64,
    /// Operator commission for the whole order
    pub total_commission: f64,
    /// Order lines; empty when the marketplace omits the field
    #[serde(default)]
    pub order_lines: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "order_id": "order-1",
        "commercial_id": "c-order-1",
        "created_date": "2019-07-16T10:20:14Z",
        "order_state": "WAITING_DEBIT",
        "shop_id": 2000,
        "customer": {"customer_id": "customer-1"},
        "currency_iso_code": "EUR",
        "total_price": 69.9,
        "total_commission": 6.99
    }"#;

    #[test]
    fn test_minimal_snapshot_defaults() {
        let order: ProductOrder = serde_json::from_str(MINIMAL).unwrap();
        assert_eq!(order.order_id, "order-1");
        assert_eq!(order.references.order_reference_for_customer, "");
        assert_eq!(order.transaction_number, None);
        assert_eq!(order.order_tax_mode, None);
        assert_eq!(order.customer_debited_date, None);
        assert!(order.order_lines.is_empty());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        // total_price removed
        let json = MINIMAL.replace(r#""total_price": 69.9,"#, "");
        assert!(serde_json::from_str::<ProductOrder>(&json).is_err());
    }

    #[test]
    fn test_shop_id_parsed_from_string() {
        let json = MINIMAL.replace(r#""shop_id": 2000"#, r#""shop_id": "2000""#);
        let order: ProductOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order.shop_id, 2000);
    }
}
