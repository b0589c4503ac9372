//! Money aggregation utilities using rust_decimal for precision
//!
//! All summation is done using `Decimal` internally, then converted to `f64`
//! at the API surface. The marketplace reports every tax in one of two
//! buckets per record (shipping taxes vs ordinary order taxes); the same
//! buckets appear on order lines, cancelations and refunds, so one helper
//! serves all three.

use rust_decimal::prelude::*;
use shared::order::{Cancelation, OrderLine, OrderRefund, Tax};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for aggregation
///
/// Snapshots should be screened via `validate_amounts()` at the boundary.
/// If NaN/Infinity somehow reaches here, logs an error and returns ZERO
/// to avoid silent data corruption in financial figures.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary aggregation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for the API surface, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp is always within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Which tax buckets participate in a sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxBuckets {
    /// Shipping taxes plus ordinary order taxes
    ShippingAndOrder,
    /// Ordinary order taxes only
    OrderOnly,
}

/// Records carrying the marketplace's two tax buckets
pub trait TaxBearer {
    /// Shipping taxes of this record; empty when the wire field was absent
    fn shipping_taxes(&self) -> &[Tax];
    /// Ordinary order taxes of this record; empty when the wire field was absent
    fn taxes(&self) -> &[Tax];
}

impl TaxBearer for OrderLine {
    fn shipping_taxes(&self) -> &[Tax] {
        &self.shipping_taxes
    }
    fn taxes(&self) -> &[Tax] {
        &self.taxes
    }
}

impl TaxBearer for Cancelation {
    fn shipping_taxes(&self) -> &[Tax] {
        &self.shipping_taxes
    }
    fn taxes(&self) -> &[Tax] {
        &self.taxes
    }
}

impl TaxBearer for OrderRefund {
    fn shipping_taxes(&self) -> &[Tax] {
        &self.shipping_taxes
    }
    fn taxes(&self) -> &[Tax] {
        &self.taxes
    }
}

/// Sum the requested tax buckets of one record
///
/// Behaves identically for order lines, cancelations and refunds; encounter
/// order does not affect the sum.
pub fn tax_total(record: &impl TaxBearer, buckets: TaxBuckets) -> Decimal {
    let ordinary = record.taxes().iter().map(|tax| to_decimal(tax.amount));
    match buckets {
        TaxBuckets::ShippingAndOrder => record
            .shipping_taxes()
            .iter()
            .map(|tax| to_decimal(tax.amount))
            .chain(ordinary)
            .sum(),
        TaxBuckets::OrderOnly => ordinary.sum(),
    }
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::OrderLineState;

    fn tax(amount: f64) -> Tax {
        Tax { code: None, amount }
    }

    fn line_with_taxes(shipping: Vec<Tax>, taxes: Vec<Tax>) -> OrderLine {
        OrderLine {
            order_line_id: "order-1-A-1".to_string(),
            order_line_state: OrderLineState::Shipped,
            total_price: 0.0,
            quantity: None,
            shipping_taxes: shipping,
            taxes,
            cancelations: vec![],
            refunds: vec![],
        }
    }

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_non_finite_defaults_to_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_tax_total_combined() {
        let line = line_with_taxes(vec![tax(2.0)], vec![tax(1.5)]);
        assert_eq!(to_f64(tax_total(&line, TaxBuckets::ShippingAndOrder)), 3.5);
    }

    #[test]
    fn test_tax_total_order_only_excludes_shipping() {
        let line = line_with_taxes(vec![tax(2.0)], vec![tax(1.5)]);
        assert_eq!(to_f64(tax_total(&line, TaxBuckets::OrderOnly)), 1.5);
    }

    #[test]
    fn test_tax_total_empty_buckets() {
        let line = line_with_taxes(vec![], vec![]);
        assert_eq!(tax_total(&line, TaxBuckets::ShippingAndOrder), Decimal::ZERO);
        assert_eq!(tax_total(&line, TaxBuckets::OrderOnly), Decimal::ZERO);
    }

    #[test]
    fn test_same_buckets_same_sum_across_carriers() {
        let cancelation = Cancelation {
            amount: 0.0,
            quantity: None,
            shipping_taxes: vec![tax(2.0)],
            taxes: vec![tax(1.5)],
        };
        let refund = OrderRefund {
            id: "1988".to_string(),
            amount: 0.0,
            commission_total_amount: 0.0,
            shipping_taxes: vec![tax(2.0)],
            taxes: vec![tax(1.5)],
        };
        let line = line_with_taxes(vec![tax(2.0)], vec![tax(1.5)]);

        let expected = tax_total(&line, TaxBuckets::ShippingAndOrder);
        assert_eq!(tax_total(&cancelation, TaxBuckets::ShippingAndOrder), expected);
        assert_eq!(tax_total(&refund, TaxBuckets::ShippingAndOrder), expected);
    }

    #[test]
    fn test_money_eq_tolerance() {
        assert!(money_eq(10.0, 10.0));
        assert!(money_eq(10.0, 10.009));
        assert!(!money_eq(10.0, 10.02));
    }
}
