//! Order financial projection
//!
//! Classification predicates and monetary aggregates derived from one
//! marketplace order snapshot. Every operation is a pure function of the
//! snapshot: no I/O, no retries, no hidden state, safe to call from any
//! thread. The only "failure" here is a missing optional field or a lookup
//! miss, and both resolve to zero or empty, never to an error.
//!
//! [`MarketplaceOrder`] is the capability the billing/reconciliation caller
//! programs against; [`ProductOrder`] is its concrete implementor. Monetary
//! sums run through `Decimal` and surface as `f64` (see [`crate::money`]);
//! fields the marketplace already computed (total price under tax-included
//! mode, commissions, currency) pass through verbatim.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;

use shared::order::{
    Cancelation, OrderLine, OrderLineState, OrderRefund, OrderState, ProductOrder, TaxMode,
};

use crate::money::{TaxBuckets, tax_total, to_decimal, to_f64};

/// Lookup keys identifying one marketplace refund from the payment
/// processor's side
///
/// Implemented by whatever record the payment processor hands back; the keys
/// are only ever read, never mutated.
pub trait RefundReference {
    /// Marketplace order line id the refund belongs to
    fn order_line_id(&self) -> &str;
    /// Marketplace refund id within that line
    fn refund_id(&self) -> &str;
}

/// Bare (order line id, refund id) pair for callers holding plain ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundKey {
    pub order_line_id: String,
    pub refund_id: String,
}

impl RefundReference for RefundKey {
    fn order_line_id(&self) -> &str {
        &self.order_line_id
    }
    fn refund_id(&self) -> &str {
        &self.refund_id
    }
}

/// Financial projection over one marketplace order snapshot
///
/// One capability shared by every marketplace order flavor, so billing code
/// never depends on a concrete order type.
pub trait MarketplaceOrder {
    /// Marketplace order id
    fn id(&self) -> &str;

    /// Commercial id grouping logistic orders placed together
    fn commercial_id(&self) -> &str;

    /// Customer-facing order reference; empty when the marketplace omits it
    fn order_reference_for_customer(&self) -> &str;

    /// Creation timestamp
    fn creation_date(&self) -> DateTime<Utc>;

    /// Raw lifecycle state
    fn state(&self) -> OrderState;

    /// Shop (seller) id
    fn shop_id(&self) -> i64;

    /// Marketplace customer id
    fn customer_id(&self) -> &str;

    /// Payment transaction number; empty when the marketplace omits it
    fn transaction_number(&self) -> &str;

    /// Whether the order has passed the checkout/acceptance funnel
    fn is_validated(&self) -> bool {
        self.state().is_validated()
    }

    /// Whether the order was refused by the seller or canceled
    fn is_aborted(&self) -> bool {
        self.state().is_aborted()
    }

    /// Whether quoted prices already carry tax; an absent tax mode means
    /// they do not
    fn is_tax_included(&self) -> bool;

    /// Whether the customer has been debited
    fn is_paid(&self) -> bool;

    /// Amount to charge for this order
    ///
    /// Starts from the order total (already net of refused/canceled lines).
    /// When taxes are not included in quoted prices, each surviving line
    /// adds its combined shipping + order tax total; refused/canceled lines
    /// add nothing here, their value is carried by [`Self::aborted_amount`].
    fn amount_due(&self) -> f64;

    /// Total value of refused/canceled activity on this order
    ///
    /// Refused lines contribute their full price (plus taxes when not
    /// tax-included); canceled lines contribute the sum of their cancelation
    /// records (plus each cancelation's own taxes when not tax-included).
    /// Re-derived from the lines, independent of [`Self::amount_due`].
    fn aborted_amount(&self) -> f64;

    /// Operator commission for the whole order, as recorded by the
    /// marketplace
    fn operator_commission(&self) -> f64;

    /// Commission returned with one refund, or 0 when no (line id,
    /// refund id) pair matches
    fn refunded_operator_commission(&self, refund: &impl RefundReference) -> f64;

    /// Combined shipping + order tax of one refund, or 0 when no (line id,
    /// refund id) pair matches
    fn refunded_tax(&self, refund: &impl RefundReference) -> f64;

    /// Ordinary order taxes over surviving lines, shipping taxes excluded
    fn order_tax_total(&self) -> f64;

    /// ISO 4217 currency code
    fn currency(&self) -> &str;

    /// Order lines; empty when the marketplace omitted the field
    fn order_lines(&self) -> &[OrderLine];
}

/// Sum a canceled line's cancelation records, each with its own taxes when
/// taxes are not included in quoted prices
fn canceled_amount_with_taxes(cancelations: &[Cancelation], tax_included: bool) -> Decimal {
    let mut amount = Decimal::ZERO;
    for cancelation in cancelations {
        amount += to_decimal(cancelation.amount);
        if !tax_included {
            amount += tax_total(cancelation, TaxBuckets::ShippingAndOrder);
        }
    }
    amount
}

/// Locate one refund record by (order line id, refund id), honoring
/// encounter order of both sequences; the first full match wins
fn find_refund<'a, R: RefundReference>(
    lines: &'a [OrderLine],
    refund: &R,
) -> Option<&'a OrderRefund> {
    lines
        .iter()
        .filter(|line| line.order_line_id == refund.order_line_id())
        .find_map(|line| line.refunds.iter().find(|r| r.id == refund.refund_id()))
}

impl MarketplaceOrder for ProductOrder {
    fn id(&self) -> &str {
        &self.order_id
    }

    fn commercial_id(&self) -> &str {
        &self.commercial_id
    }

    fn order_reference_for_customer(&self) -> &str {
        &self.references.order_reference_for_customer
    }

    fn creation_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    fn state(&self) -> OrderState {
        self.order_state
    }

    fn shop_id(&self) -> i64 {
        self.shop_id
    }

    fn customer_id(&self) -> &str {
        &self.customer.customer_id
    }

    fn transaction_number(&self) -> &str {
        self.transaction_number.as_deref().unwrap_or("")
    }

    fn is_tax_included(&self) -> bool {
        matches!(self.order_tax_mode, Some(TaxMode::TaxIncluded))
    }

    fn is_paid(&self) -> bool {
        self.customer_debited_date
            .as_deref()
            .is_some_and(|date| !date.is_empty())
    }

    fn amount_due(&self) -> f64 {
        // REFUSED/CANCELED lines are already excluded from total_price
        if self.is_tax_included() {
            return self.total_price;
        }

        let mut amount = to_decimal(self.total_price);
        for line in &self.order_lines {
            if !line.order_line_state.is_aborted() {
                amount += tax_total(line, TaxBuckets::ShippingAndOrder);
            }
        }
        to_f64(amount)
    }

    fn aborted_amount(&self) -> f64 {
        let tax_included = self.is_tax_included();
        let mut amount = Decimal::ZERO;
        for line in &self.order_lines {
            match line.order_line_state {
                OrderLineState::Refused => {
                    amount += to_decimal(line.total_price);
                    if !tax_included {
                        amount += tax_total(line, TaxBuckets::ShippingAndOrder);
                    }
                }
                OrderLineState::Canceled => {
                    amount += canceled_amount_with_taxes(&line.cancelations, tax_included);
                }
                _ => {}
            }
        }
        to_f64(amount)
    }

    fn operator_commission(&self) -> f64 {
        self.total_commission
    }

    fn refunded_operator_commission(&self, refund: &impl RefundReference) -> f64 {
        find_refund(&self.order_lines, refund)
            .map(|r| r.commission_total_amount)
            .unwrap_or(0.0)
    }

    fn refunded_tax(&self, refund: &impl RefundReference) -> f64 {
        find_refund(&self.order_lines, refund)
            .map(|r| to_f64(tax_total(r, TaxBuckets::ShippingAndOrder)))
            .unwrap_or(0.0)
    }

    fn order_tax_total(&self) -> f64 {
        let mut amount = Decimal::ZERO;
        for line in &self.order_lines {
            if !line.order_line_state.is_aborted() {
                amount += tax_total(line, TaxBuckets::OrderOnly);
            }
        }
        to_f64(amount)
    }

    fn currency(&self) -> &str {
        &self.currency_iso_code
    }

    fn order_lines(&self) -> &[OrderLine] {
        &self.order_lines
    }
}
