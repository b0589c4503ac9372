//! Nested order records and lifecycle state enums
//!
//! All records are immutable snapshots; the marketplace owns their lifecycle
//! and a fresh snapshot replaces the previous one wholesale. Optional wire
//! fields default to empty collections so consumers never branch on
//! presence.

use crate::util::de_id;
use serde::{Deserialize, Serialize};

// ============================================================================
// Lifecycle States
// ============================================================================

/// Order lifecycle state
///
/// The order is validated once it has left the checkout/acceptance funnel:
/// every state except `Staging`, `WaitingAcceptance`, `WaitingDebit` and
/// `Shipping`. Refused and canceled orders count as validated but aborted;
/// in practice the two never overlap with an order being charged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Staging,
    WaitingAcceptance,
    WaitingDebit,
    WaitingDebitPayment,
    Shipping,
    Shipped,
    ToCollect,
    Received,
    Closed,
    Refused,
    Canceled,
}

impl OrderState {
    /// Whether the order has passed the checkout/acceptance funnel.
    ///
    /// Defined by set membership, not by any ordering of states.
    pub fn is_validated(&self) -> bool {
        !matches!(
            self,
            Self::Staging | Self::WaitingAcceptance | Self::WaitingDebit | Self::Shipping
        )
    }

    /// Whether the order was refused by the seller or canceled
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Refused | Self::Canceled)
    }
}

/// Order line lifecycle state
///
/// Lines move through the order states plus `Refunded` once a refund has
/// been processed for them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderLineState {
    Staging,
    WaitingAcceptance,
    WaitingDebit,
    WaitingDebitPayment,
    Shipping,
    Shipped,
    ToCollect,
    Received,
    Closed,
    Refused,
    Canceled,
    Refunded,
}

impl OrderLineState {
    /// Refused and canceled lines are excluded from the order total by the
    /// marketplace and accounted for separately.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Refused | Self::Canceled)
    }
}

/// Per-order tax mode
///
/// `TaxIncluded` means the quoted prices already carry tax; anything else
/// (including an absent field) means taxes are quoted on top.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxMode {
    TaxIncluded,
    TaxExcluded,
}

// ============================================================================
// Nested Records
// ============================================================================

/// One tax entry
///
/// Whether a tax is a shipping tax or an ordinary order tax is carried by
/// the bucket it sits in (`shipping_taxes` vs `taxes`), not by a field here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tax {
    /// Tax code as reported by the marketplace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Tax amount
    pub amount: f64,
}

/// A partial reduction applied to an order line after creation
///
/// Distinct from a line-level REFUSED/CANCELED state: a cancelation reduces
/// a line that otherwise stays alive, and carries its own tax buckets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cancelation {
    /// Canceled amount, tax not included
    pub amount: f64,
    /// Canceled quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Shipping taxes on the canceled portion
    #[serde(default)]
    pub shipping_taxes: Vec<Tax>,
    /// Ordinary order taxes on the canceled portion
    #[serde(default)]
    pub taxes: Vec<Tax>,
}

/// A refund recorded by the marketplace against one order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRefund {
    /// Marketplace refund id; arrives as a number or a string
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Refunded amount, tax not included
    #[serde(default)]
    pub amount: f64,
    /// Operator commission returned with this refund
    #[serde(default)]
    pub commission_total_amount: f64,
    /// Shipping taxes on the refunded portion
    #[serde(default)]
    pub shipping_taxes: Vec<Tax>,
    /// Ordinary order taxes on the refunded portion
    #[serde(default)]
    pub taxes: Vec<Tax>,
}

/// One sellable unit within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Marketplace order line id
    #[serde(deserialize_with = "de_id")]
    pub order_line_id: String,
    /// Line lifecycle state
    pub order_line_state: OrderLineState,
    /// Line total, tax not included
    pub total_price: f64,
    /// Quantity ordered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Shipping taxes for this line
    #[serde(default)]
    pub shipping_taxes: Vec<Tax>,
    /// Ordinary order taxes for this line
    #[serde(default)]
    pub taxes: Vec<Tax>,
    /// Partial cancelations applied to this line
    #[serde(default)]
    pub cancelations: Vec<Cancelation>,
    /// Refunds recorded against this line
    #[serde(default)]
    pub refunds: Vec<OrderRefund>,
}
