//! Snapshot ingestion boundary
//!
//! Orders reach the engine as JSON from the marketplace order API. Parsing
//! enforces the required-field contract ([`shared::OrderError::Malformed`]
//! on violation); `validate_amounts` additionally rejects non-finite
//! monetary values for callers that want to fail at ingestion rather than
//! let them degrade to zero inside the aggregation.

use shared::order::{ProductOrder, Tax};
use shared::{OrderError, OrderResult};

/// Parse one order snapshot from marketplace JSON
pub fn parse_order(json: &str) -> OrderResult<ProductOrder> {
    Ok(serde_json::from_str(json)?)
}

/// Parse one order snapshot from an already-decoded JSON value
pub fn order_from_value(value: serde_json::Value) -> OrderResult<ProductOrder> {
    Ok(serde_json::from_value(value)?)
}

/// Require a monetary field to be finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field: impl FnOnce() -> String) -> OrderResult<()> {
    if !value.is_finite() {
        return Err(OrderError::NonFiniteAmount {
            field: field(),
            value,
        });
    }
    Ok(())
}

fn require_finite_taxes(taxes: &[Tax], path: &str) -> OrderResult<()> {
    for (i, tax) in taxes.iter().enumerate() {
        require_finite(tax.amount, || format!("{path}[{i}].amount"))?;
    }
    Ok(())
}

/// Reject snapshots carrying NaN or infinity in any monetary field
///
/// The projection itself never panics on such input, so this screen is for
/// callers that prefer a loud failure at ingestion.
pub fn validate_amounts(order: &ProductOrder) -> OrderResult<()> {
    require_finite(order.total_price, || "total_price".to_string())?;
    require_finite(order.total_commission, || "total_commission".to_string())?;

    for (i, order_line) in order.order_lines.iter().enumerate() {
        let path = format!("order_lines[{i}]");
        require_finite(order_line.total_price, || format!("{path}.total_price"))?;
        require_finite_taxes(&order_line.shipping_taxes, &format!("{path}.shipping_taxes"))?;
        require_finite_taxes(&order_line.taxes, &format!("{path}.taxes"))?;

        for (j, cancelation) in order_line.cancelations.iter().enumerate() {
            let path = format!("{path}.cancelations[{j}]");
            require_finite(cancelation.amount, || format!("{path}.amount"))?;
            require_finite_taxes(&cancelation.shipping_taxes, &format!("{path}.shipping_taxes"))?;
            require_finite_taxes(&cancelation.taxes, &format!("{path}.taxes"))?;
        }

        for (j, order_refund) in order_line.refunds.iter().enumerate() {
            let path = format!("{path}.refunds[{j}]");
            require_finite(order_refund.amount, || format!("{path}.amount"))?;
            require_finite(order_refund.commission_total_amount, || {
                format!("{path}.commission_total_amount")
            })?;
            require_finite_taxes(&order_refund.shipping_taxes, &format!("{path}.shipping_taxes"))?;
            require_finite_taxes(&order_refund.taxes, &format!("{path}.taxes"))?;
        }
    }

    Ok(())
}
