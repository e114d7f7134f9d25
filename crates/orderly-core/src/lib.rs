//! # orderly-core: Pure Order Pricing
//!
//! Computes an order's subtotal, tiered discount, tax and total from its
//! line items, and renders a plain-text receipt. Everything here is a pure
//! function with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Orderly Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    orderly-cli (`orderly`)                      │   │
//! │  │    read items ──► compute_order ──► print receipt / JSON        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ orderly-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────┐ │   │
//! │  │   │  types   │ │  money   │ │ pricing  │ │ receipt  │ │valid-│ │   │
//! │  │   │ LineItem │ │  Money   │ │ tiers    │ │ Receipt  │ │ation │ │   │
//! │  │   │  Rate    │ │ rounding │ │ TAX_RATE │ │  text    │ │      │ │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘ └──────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, OrderTotals, OrderResult, Rate)
//! - [`money`] - Exact decimal money with cent rounding for display
//! - [`pricing`] - Discount tiers, tax, and the order calculator
//! - [`receipt`] - Receipt text rendering
//! - [`validation`] - Input policy and item document parsing
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden state
//! 2. **Exact Money**: amounts are base-10 decimals, rounded only on display
//! 3. **Two Steps**: totals are computed first, the receipt is rendered from them
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use orderly_core::{compute_order, parse_items};
//!
//! let items = parse_items(r#"[
//!     { "name": "Widget", "price": 25.00, "quantity": 2 },
//!     { "name": "Gadget", "price": 15.50, "quantity": 3 }
//! ]"#).unwrap();
//!
//! let result = compute_order(&items, "Jane Doe", "123 Main St").unwrap();
//! assert!(result.receipt.contains("Discount: -$4.83\n"));
//! assert!(result.receipt.ends_with("Total: $99.01\n"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{
    compute_order, compute_order_unchecked, compute_totals, discount_rate, DISCOUNT_TIERS,
    TAX_RATE,
};
pub use receipt::{format_receipt, Receipt};
pub use types::*;
pub use validation::parse_items;
