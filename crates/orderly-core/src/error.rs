//! # Error Types
//!
//! Domain-specific error types for orderly-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  orderly-core errors (this file)                                       │
//! │  ├── CoreError        - Pricing failures                               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  orderly-cli errors (app)                                              │
//! │  └── CliError         - What the terminal sees (code + exit status)    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError::InvalidInput → CliError → stderr   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while pricing an order.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Items failed validation (negative price or quantity, malformed shape).
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// A decimal operation exceeded the representable range.
    ///
    /// Only reachable with absurd inputs (quantities near `i64::MAX`).
    #[error("Amount overflow while computing {operation}")]
    AmountOverflow { operation: &'static str },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Numeric value is below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (non-numeric price, fractional quantity, bad JSON).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Scopes the field name to a line item, e.g. `quantity` → `items[2].quantity`.
    pub fn in_item(self, index: usize) -> Self {
        match self {
            ValidationError::MustBeNonNegative { field } => ValidationError::MustBeNonNegative {
                field: format!("items[{index}].{field}"),
            },
            ValidationError::InvalidFormat { field, reason } => ValidationError::InvalidFormat {
                field: format!("items[{index}].{field}"),
                reason,
            },
        }
    }

    /// The (possibly scoped) name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MustBeNonNegative { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must not be negative");

        let err = ValidationError::InvalidFormat {
            field: "unitPrice".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(err.to_string(), "unitPrice has invalid format: not a number");
    }

    #[test]
    fn test_in_item_scopes_field() {
        let err = ValidationError::MustBeNonNegative {
            field: "unitPrice".to_string(),
        }
        .in_item(3);
        assert_eq!(err.field(), "items[3].unitPrice");
        assert_eq!(err.to_string(), "items[3].unitPrice must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidInput(_)));
        assert_eq!(
            core_err.to_string(),
            "Invalid input: quantity must not be negative"
        );
    }

    #[test]
    fn test_overflow_message() {
        let err = CoreError::AmountOverflow {
            operation: "subtotal",
        };
        assert_eq!(err.to_string(), "Amount overflow while computing subtotal");
    }
}
