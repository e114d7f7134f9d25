//! # Validation Module
//!
//! Input policy for line items, and parsing of item documents.
//!
//! ## Validation Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      What Gets Rejected                                 │
//! │                                                                         │
//! │  parse_items (document shape)                                          │
//! │  ├── not a JSON array of objects          → InvalidFormat { items }    │
//! │  ├── price is not a number                → InvalidFormat              │
//! │  └── quantity is not a whole number       → InvalidFormat              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  validate_items (business rule, used by compute_order)                 │
//! │  ├── unit price < 0                       → MustBeNonNegative          │
//! │  └── quantity < 0                         → MustBeNonNegative          │
//! │                                                                         │
//! │  Accepted as-is: empty item list, empty names, zero price/quantity     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orderly_core::validation::{parse_items, validate_items};
//!
//! let items = parse_items(r#"[{ "name": "Widget", "price": 25.00, "quantity": 2 }]"#).unwrap();
//! assert!(validate_items(&items).is_ok());
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::LineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use orderly_core::money::Money;
/// use orderly_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "unitPrice".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (the line prints with a $0.00 total)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Item Validators
// =============================================================================

/// Validates one line item; errors name the field as `items[index].field`.
pub fn validate_line_item(index: usize, item: &LineItem) -> ValidationResult<()> {
    validate_unit_price(item.unit_price).map_err(|e| e.in_item(index))?;
    validate_quantity(item.quantity).map_err(|e| e.in_item(index))?;
    Ok(())
}

/// Validates every item, stopping at the first failure.
pub fn validate_items(items: &[LineItem]) -> ValidationResult<()> {
    items
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| validate_line_item(index, item))
}

// =============================================================================
// Item Document Parsing
// =============================================================================

/// Wire shape of one item: `{ "name": "...", "price": 25.00, "quantity": 2 }`.
///
/// Numbers are kept as their JSON source text (serde_json's
/// `arbitrary_precision`), so prices convert to decimals without ever
/// becoming an `f64`.
#[derive(Debug, Deserialize)]
struct RawLineItem {
    name: String,
    #[serde(alias = "unitPrice")]
    price: serde_json::Number,
    quantity: serde_json::Number,
}

impl RawLineItem {
    fn into_line_item(self, index: usize) -> ValidationResult<LineItem> {
        let unit_price = parse_price(&self.price).map_err(|e| e.in_item(index))?;
        let quantity = self.quantity.as_i64().ok_or_else(|| {
            ValidationError::InvalidFormat {
                field: "quantity".to_string(),
                reason: format!("expected a whole number, got {}", self.quantity),
            }
            .in_item(index)
        })?;

        Ok(LineItem::new(self.name, unit_price, quantity))
    }
}

fn parse_price(number: &serde_json::Number) -> ValidationResult<Money> {
    let text = number.to_string();
    let parsed = if text.contains(['e', 'E']) {
        Decimal::from_scientific(&text)
    } else {
        Decimal::from_str(&text)
    };

    parsed
        .map(Money::from_decimal)
        .map_err(|e| ValidationError::InvalidFormat {
            field: "unitPrice".to_string(),
            reason: format!("{text} is not a representable amount ({e})"),
        })
}

/// Parses a JSON array of items.
///
/// Accepts `price` or `unitPrice` for the unit price. Does not apply the
/// non-negative rule; [`crate::pricing::compute_order`] does that.
///
/// ## Example
/// ```rust
/// use orderly_core::money::Money;
/// use orderly_core::validation::parse_items;
///
/// let items = parse_items(r#"[
///     { "name": "Widget", "price": 25.00, "quantity": 2 },
///     { "name": "Gadget", "unitPrice": 15.50, "quantity": 3 }
/// ]"#).unwrap();
/// assert_eq!(items[1].unit_price, Money::from_cents(1550));
///
/// assert!(parse_items(r#"[{ "name": "Widget", "price": "abc", "quantity": 2 }]"#).is_err());
/// ```
pub fn parse_items(json: &str) -> CoreResult<Vec<LineItem>> {
    let raw: Vec<RawLineItem> =
        serde_json::from_str(json).map_err(|e| ValidationError::InvalidFormat {
            field: "items".to_string(),
            reason: e.to_string(),
        })?;

    let items = raw
        .into_iter()
        .enumerate()
        .map(|(index, item)| item.into_line_item(index))
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(items)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
        assert!(validate_unit_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(i64::MAX).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_items_reports_first_bad_index() {
        let items = vec![
            LineItem::new("Widget", Money::from_cents(2500), 2),
            LineItem::new("Refund", Money::from_cents(2500), -1),
            LineItem::new("Credit", Money::from_cents(-500), 1),
        ];

        let err = validate_items(&items).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MustBeNonNegative {
                field: "items[1].quantity".to_string()
            }
        );
    }

    #[test]
    fn test_validate_empty_items() {
        assert!(validate_items(&[]).is_ok());
    }

    #[test]
    fn test_parse_items_exact_prices() {
        let items = parse_items(
            r#"[{ "name": "Dime", "price": 0.1, "quantity": 3 },
                { "name": "Widget", "price": 25, "quantity": 2 }]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].unit_price, Money::from_cents(10));
        assert_eq!(items[0].line_total(), Money::from_cents(30));
        assert_eq!(items[1].unit_price, Money::from_cents(2500));
    }

    #[test]
    fn test_parse_items_keeps_every_price_digit() {
        let items = parse_items(
            r#"[{ "name": "Fine", "price": 0.123456789012345678901, "quantity": 1 },
                { "name": "Widget", "price": 25.00, "quantity": 2 }]"#,
        )
        .unwrap();

        assert_eq!(
            items[0].unit_price.amount(),
            Decimal::from_str("0.123456789012345678901").unwrap()
        );
        assert_eq!(items[0].unit_price.canonical().to_string(), "0.123456789012345678901");
        assert_eq!(items[1].unit_price.amount().to_string(), "25.00");
    }

    #[test]
    fn test_parse_items_keeps_negatives() {
        let items = parse_items(r#"[{ "name": "Credit", "price": -5.5, "quantity": -2 }]"#).unwrap();
        assert_eq!(items[0].unit_price, Money::from_cents(-550));
        assert_eq!(items[0].quantity, -2);
    }

    #[test]
    fn test_parse_items_scientific_price() {
        let items = parse_items(r#"[{ "name": "Big", "price": 1e3, "quantity": 1 }]"#).unwrap();
        assert_eq!(items[0].unit_price, Money::from_cents(100_000));
    }

    #[test]
    fn test_parse_items_rejects_fractional_quantity() {
        let err = parse_items(r#"[{ "name": "Widget", "price": 1, "quantity": 2.5 }]"#).unwrap_err();
        match err {
            CoreError::InvalidInput(ValidationError::InvalidFormat { field, .. }) => {
                assert_eq!(field, "items[0].quantity")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_items_rejects_malformed_shape() {
        assert!(parse_items("not json").is_err());
        assert!(parse_items(r#"{ "name": "Widget" }"#).is_err());
        assert!(parse_items(r#"[{ "name": "Widget", "quantity": 1 }]"#).is_err());
        assert!(parse_items(r#"[{ "name": "Widget", "price": "12", "quantity": 1 }]"#).is_err());
    }
}
