//! # Receipt Rendering
//!
//! Turns line items and computed totals into receipt text.
//!
//! ## Layout
//! ```text
//! === ORDER RECEIPT ===
//! Customer: Jane Doe
//! Address: 123 Main St
//! ---
//! Widget x2 - $50.00          ◄── one line per item, input order
//! Gadget x3 - $46.50
//! ---
//! Subtotal: $96.50
//! Discount: -$4.83            ◄── only when a discount applied
//! Tax: $7.33
//! Total: $99.01
//! ```
//!
//! Every line ends with `\n`. Amounts are rounded to cents here and
//! nowhere else.

use std::fmt;

use crate::types::{LineItem, OrderTotals};

pub const RECEIPT_HEADER: &str = "=== ORDER RECEIPT ===";
pub const SECTION_RULE: &str = "---";

/// A receipt ready to render. Borrows everything; rendering is `Display`.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    items: &'a [LineItem],
    customer_name: &'a str,
    address: &'a str,
    totals: &'a OrderTotals,
}

impl<'a> Receipt<'a> {
    pub fn new(
        items: &'a [LineItem],
        customer_name: &'a str,
        address: &'a str,
        totals: &'a OrderTotals,
    ) -> Self {
        Receipt {
            items,
            customer_name,
            address,
            totals,
        }
    }
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RECEIPT_HEADER}")?;
        writeln!(f, "Customer: {}", self.customer_name)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "{SECTION_RULE}")?;

        for item in self.items {
            writeln!(f, "{} x{} - {}", item.name, item.quantity, item.line_total())?;
        }

        writeln!(f, "{SECTION_RULE}")?;
        writeln!(f, "Subtotal: {}", self.totals.subtotal)?;
        if self.totals.has_discount() {
            writeln!(f, "Discount: -{}", self.totals.discount)?;
        }
        writeln!(f, "Tax: {}", self.totals.tax)?;
        writeln!(f, "Total: {}", self.totals.total)
    }
}

/// Renders the receipt text for an order.
pub fn format_receipt(
    items: &[LineItem],
    customer_name: &str,
    address: &str,
    totals: &OrderTotals,
) -> String {
    Receipt::new(items, customer_name, address, totals).to_string()
}
