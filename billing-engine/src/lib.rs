//! Billing engine - financial figures for marketplace orders
//!
//! Derives the monetary figures a billing/reconciliation caller needs to
//! charge or refund customers through a payment processor: amount due,
//! aborted totals, tax totals, and per-refund commission/tax lookups. The
//! figures must reconcile exactly with what the marketplace and the payment
//! processor separately report, so every derivation is a pure function over
//! one immutable order snapshot and all summation runs through `Decimal`.
//!
//! # Module Structure
//!
//! ```text
//! billing-engine/src/
//! ├── boundary.rs    # JSON parse + non-finite amount screening
//! ├── money.rs       # Decimal helpers, tax bucket aggregation
//! └── projection/    # MarketplaceOrder capability + ProductOrder impl
//! ```
//!
//! # Example
//!
//! ```
//! use billing_engine::{MarketplaceOrder, parse_order};
//!
//! let order = parse_order(r#"{
//!     "order_id": "order-1",
//!     "commercial_id": "c-order-1",
//!     "created_date": "2019-07-16T10:20:14Z",
//!     "order_state": "SHIPPED",
//!     "shop_id": 2000,
//!     "customer": {"customer_id": "customer-1"},
//!     "customer_debited_date": "2019-07-16T10:22:00Z",
//!     "currency_iso_code": "EUR",
//!     "total_price": 100.0,
//!     "total_commission": 10.0,
//!     "order_lines": [{
//!         "order_line_id": "order-1-A-1",
//!         "order_line_state": "SHIPPED",
//!         "total_price": 100.0,
//!         "shipping_taxes": [{"amount": 2.0}],
//!         "taxes": [{"amount": 1.5}]
//!     }]
//! }"#)?;
//!
//! assert!(order.is_validated());
//! assert!(order.is_paid());
//! assert_eq!(order.amount_due(), 103.5);
//! assert_eq!(order.order_tax_total(), 1.5);
//! # Ok::<(), billing_engine::OrderError>(())
//! ```

pub mod boundary;
pub mod money;
pub mod projection;

// Re-export public types
pub use boundary::{order_from_value, parse_order, validate_amounts};
pub use money::{MONEY_TOLERANCE, TaxBearer, TaxBuckets, money_eq, tax_total, to_decimal, to_f64};
pub use projection::{MarketplaceOrder, RefundKey, RefundReference};

// Re-export error types from shared
pub use shared::{OrderError, OrderResult};
