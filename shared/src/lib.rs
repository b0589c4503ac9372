//! Shared types for the marketplace billing workspace
//!
//! Typed records for marketplace order snapshots as returned by the
//! marketplace order API, plus the error type used across crates.

pub mod error;
pub mod order;
pub mod util;

// Re-exports
pub use error::{OrderError, OrderResult};
pub use order::{
    Cancelation, OrderCustomer, OrderLine, OrderLineState, OrderReferences, OrderRefund,
    OrderState, ProductOrder, Tax, TaxMode,
};
