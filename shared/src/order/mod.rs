//! Marketplace Order Module
//!
//! Typed records for one order snapshot as returned by the marketplace
//! order API:
//! - Snapshot: the top-level order record
//! - Types: nested records (lines, taxes, cancelations, refunds) and the
//!   lifecycle state enums

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::{OrderCustomer, OrderReferences, ProductOrder};
pub use types::{Cancelation, OrderLine, OrderLineState, OrderRefund, OrderState, Tax, TaxMode};
