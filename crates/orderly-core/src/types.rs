//! # Domain Types
//!
//! Core domain types used throughout Orderly.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │  OrderTotals    │   │  OrderResult    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │──►│  subtotal       │──►│  subtotal       │       │
//! │  │  unit_price     │   │  discount       │   │  discount       │       │
//! │  │  quantity       │   │  tax            │   │  tax, total     │       │
//! │  └─────────────────┘   │  total          │   │  receipt        │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │  ┌─────────────────┐                                                   │
//! │  │      Rate       │   discount tiers and tax, in basis points         │
//! │  │  800 = 8%       │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% (sales tax), 500 bps = 5% (discount tier)
///
/// Rates stay exact: 500 bps is exactly 0.05, not a float approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (800 bps → 0.0800).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Returns the rate as a percentage (800 bps → 8).
    #[inline]
    pub fn percentage(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 2).normalize()
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One purchased product entry.
///
/// The calculator only ever borrows items; it never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Display name, printed verbatim on the receipt.
    pub name: String,

    /// Price of a single unit.
    pub unit_price: Money,

    /// Number of units purchased.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Unit price × quantity, exact.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// The numeric outcome of pricing an order, before any receipt is rendered.
///
/// ## Invariant
/// `total = subtotal - discount + tax`; for non-negative items
/// `discount <= subtotal`, `tax >= 0` and `total >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderTotals {
    /// Subtotal after discount, the base the tax is charged on.
    #[inline]
    pub fn taxable(&self) -> Money {
        self.subtotal - self.discount
    }

    /// Whether a discount tier applied.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }
}

// =============================================================================
// Order Result
// =============================================================================

/// Everything the calculator hands back: exact totals plus the receipt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub total: Money,
    /// Multi-line receipt, every line terminated by `\n`.
    pub receipt: String,
}

impl OrderResult {
    /// Combines computed totals with their rendered receipt.
    pub fn new(totals: OrderTotals, receipt: String) -> Self {
        OrderResult {
            subtotal: totals.subtotal,
            discount: totals.discount,
            tax: totals.tax,
            total: totals.total,
            receipt,
        }
    }

    /// The numeric part of the result.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals {
            subtotal: self.subtotal,
            discount: self.discount,
            tax: self.tax,
            total: self.total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
