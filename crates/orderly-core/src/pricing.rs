//! # Pricing Module
//!
//! The order calculator: subtotal, tiered discount, tax, total.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      compute_order                                      │
//! │                                                                         │
//! │  items ──► validate_items ──► compute_totals ──► format_receipt        │
//! │                                   │                    │                │
//! │                                   ▼                    ▼                │
//! │             subtotal = Σ unit_price × quantity     receipt text         │
//! │             discount = subtotal × tier rate                            │
//! │             tax      = (subtotal - discount) × 8%                      │
//! │             total    = subtotal - discount + tax                       │
//! │                                   │                    │                │
//! │                                   └──────► OrderResult ◄┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Discount Tiers
//! Evaluated top to bottom, first match wins, comparisons are strict:
//!
//! | Subtotal        | Discount |
//! |-----------------|----------|
//! | > $100.00       | 10%      |
//! | > $50.00        | 5%       |
//! | otherwise       | none     |
//!
//! A subtotal of exactly $100.00 gets 5%; exactly $50.00 gets nothing.
//!
//! ## Example
//! ```rust
//! use orderly_core::{compute_order, LineItem, Money};
//!
//! let items = vec![
//!     LineItem::new("Widget", Money::from_cents(2500), 2),
//!     LineItem::new("Gadget", Money::from_cents(1550), 3),
//! ];
//!
//! let result = compute_order(&items, "Jane Doe", "123 Main St").unwrap();
//! assert_eq!(result.subtotal.to_string(), "$96.50");
//! assert_eq!(result.discount.to_string(), "$4.83");
//! assert_eq!(result.total.to_string(), "$99.01");
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::receipt::format_receipt;
use crate::types::{LineItem, OrderResult, OrderTotals, Rate};
use crate::validation::validate_items;

// =============================================================================
// Pricing Policy
// =============================================================================

/// Sales tax charged on the discounted subtotal (8%).
pub const TAX_RATE: Rate = Rate::from_bps(800);

/// A volume discount: `rate` applies when the subtotal is strictly above
/// `threshold_cents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTier {
    pub threshold_cents: i64,
    pub rate: Rate,
}

impl DiscountTier {
    /// Whether this tier applies to the given subtotal.
    #[inline]
    pub fn applies_to(&self, subtotal: Money) -> bool {
        subtotal > Money::from_cents(self.threshold_cents)
    }
}

/// Discount tiers, highest threshold first.
pub const DISCOUNT_TIERS: [DiscountTier; 2] = [
    DiscountTier {
        threshold_cents: 10_000,
        rate: Rate::from_bps(1000),
    },
    DiscountTier {
        threshold_cents: 5_000,
        rate: Rate::from_bps(500),
    },
];

/// Returns the discount rate for a subtotal, or `None` below every tier.
///
/// ## Example
/// ```rust
/// use orderly_core::pricing::discount_rate;
/// use orderly_core::{Money, Rate};
///
/// assert_eq!(discount_rate(Money::from_cents(10_001)), Some(Rate::from_bps(1000)));
/// assert_eq!(discount_rate(Money::from_cents(10_000)), Some(Rate::from_bps(500)));
/// assert_eq!(discount_rate(Money::from_cents(5_000)), None);
/// ```
pub fn discount_rate(subtotal: Money) -> Option<Rate> {
    DISCOUNT_TIERS
        .iter()
        .find(|tier| tier.applies_to(subtotal))
        .map(|tier| tier.rate)
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes the order totals. Pure arithmetic, no validation.
///
/// All values are exact; nothing is rounded here.
///
/// ## Errors
/// `CoreError::AmountOverflow` if a line total or sum leaves the decimal
/// range.
pub fn compute_totals(items: &[LineItem]) -> CoreResult<OrderTotals> {
    let subtotal = items
        .iter()
        .try_fold(Money::zero(), |acc, item| {
            let line_total = item.unit_price.checked_multiply_quantity(item.quantity)?;
            acc.checked_add(line_total)
        })
        .ok_or(CoreError::AmountOverflow {
            operation: "subtotal",
        })?;

    let discount = discount_rate(subtotal)
        .map(|rate| subtotal.apply_rate(rate))
        .unwrap_or_else(Money::zero);

    let mut totals = OrderTotals {
        subtotal,
        discount,
        ..OrderTotals::default()
    };
    totals.tax = totals.taxable().calculate_tax(TAX_RATE);
    totals.total = totals
        .taxable()
        .checked_add(totals.tax)
        .ok_or(CoreError::AmountOverflow { operation: "total" })?;

    Ok(totals)
}

/// Prices an order and renders its receipt.
///
/// Validates first: a negative unit price or quantity fails with
/// `CoreError::InvalidInput` before any arithmetic runs.
pub fn compute_order(
    items: &[LineItem],
    customer_name: &str,
    address: &str,
) -> CoreResult<OrderResult> {
    validate_items(items)?;
    compute_order_unchecked(items, customer_name, address)
}

/// Prices an order without validating it.
///
/// Negative prices and quantities flow through the arithmetic unchanged,
/// which can produce negative totals.
pub fn compute_order_unchecked(
    items: &[LineItem],
    customer_name: &str,
    address: &str,
) -> CoreResult<OrderResult> {
    let totals = compute_totals(items)?;
    let receipt = format_receipt(items, customer_name, address, &totals);
    Ok(OrderResult::new(totals, receipt))
}

// =============================================================================
// Unit Tests
// =============================================================================
