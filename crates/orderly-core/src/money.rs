//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    96.50 × 0.05 = 4.8249999999...  → "$4.82"  ❌ WRONG!                 │
//! │                                                                         │
//! │  Integer cents cannot hold it either:                                   │
//! │    9650 cents × 5% = 482.5 cents   → where does the half cent go?      │
//! │                                                                         │
//! │  OUR SOLUTION: Exact base-10 decimals                                   │
//! │    96.50 × 0.05 = 4.825 exactly                                        │
//! │    Rounded ONCE, at display time: 4.825 → $4.83                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orderly_core::money::Money;
//!
//! let price = Money::from_cents(1550); // $15.50
//!
//! let line_total = price * 3;                  // $46.50
//! let total = line_total + Money::from_cents(5000); // $96.50
//! assert_eq!(total.to_string(), "$96.50");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Rate;

/// Rounding applied whenever an amount is reduced to whole cents.
///
/// Half away from zero: `4.825 → 4.83`, `-0.005 → -0.01`.
pub const CENT_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in dollars, held as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal, not cents**: discounts and tax produce sub-cent values that
///   must survive until the receipt is rendered
/// - **Signed**: negative amounts are representable so unvalidated input
///   keeps its arithmetic
/// - **Serialized as a string**: `"4.825"`, never a lossy float, with
///   trailing zeros trimmed down to two decimal places (`"96.50"`)
///
/// ## Where Money is Used
/// ```text
/// LineItem.unit_price ──► line total ──► subtotal ──► discount
///                                             │
///                                             ▼
///                                   taxable ──► tax ──► total
///
/// Every amount is exact; only Display rounds to cents.
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(#[ts(as = "String")] Decimal);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use orderly_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// ## Example
    /// ```rust
    /// use orderly_core::money::Money;
    ///
    /// let price = Money::from_major_minor(25, 0); // $25.00
    /// assert_eq!(price.cents(), 2500);
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -$5.50
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money::from_cents(major * 100 - minor)
        } else {
            Money::from_cents(major * 100 + minor)
        }
    }

    /// Wraps an exact decimal dollar amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact dollar amount, unrounded.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Rounds to whole cents using [`CENT_ROUNDING`].
    ///
    /// ## Example
    /// ```rust
    /// use orderly_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let discount = Money::from_decimal(Decimal::new(4825, 3)); // 4.825
    /// assert_eq!(discount.round_to_cents(), Money::from_cents(483));
    /// ```
    pub fn round_to_cents(&self) -> Self {
        Money(self.0.round_dp_with_strategy(2, CENT_ROUNDING))
    }

    /// Returns the value in whole cents, rounded with [`CENT_ROUNDING`].
    ///
    /// Saturates at the `i64` bounds.
    pub fn cents(&self) -> i64 {
        let minor = self.minor_units();
        i64::try_from(minor).unwrap_or(if minor < 0 { i64::MIN } else { i64::MAX })
    }

    /// The exact amount with trailing zeros removed, keeping at least two
    /// decimal places: `4.825000 → 4.825`, `5.0000 → 5.00`.
    pub fn canonical(&self) -> Decimal {
        let mut amount = self.0.normalize();
        if amount.scale() < 2 {
            amount.rescale(2);
        }
        amount
    }

    fn minor_units(&self) -> i128 {
        let mut rounded = self.round_to_cents().0;
        rounded.rescale(2);
        rounded.mantissa()
    }

    /// Applies a rate to this amount, exactly.
    ///
    /// ## Example
    /// ```rust
    /// use orderly_core::money::Money;
    /// use orderly_core::types::Rate;
    /// use rust_decimal::Decimal;
    ///
    /// let subtotal = Money::from_cents(9650);        // $96.50
    /// let discount = subtotal.apply_rate(Rate::from_bps(500)); // 5%
    /// assert_eq!(discount.amount(), Decimal::new(4825, 3));    // 4.825, not rounded
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        Money(self.0 * rate.fraction())
    }

    /// Calculates tax on this amount. The result is exact; round at display.
    ///
    /// ## Example
    /// ```rust
    /// use orderly_core::money::Money;
    /// use orderly_core::types::Rate;
    /// use rust_decimal::Decimal;
    ///
    /// let taxable = Money::from_decimal(Decimal::new(91675, 3)); // 91.675
    /// let tax = taxable.calculate_tax(Rate::from_bps(800));      // 8%
    /// assert_eq!(tax.amount(), Decimal::new(7334, 3));           // 7.334
    /// assert_eq!(tax.to_string(), "$7.33");
    /// ```
    #[inline]
    pub fn calculate_tax(&self, rate: Rate) -> Money {
        self.apply_rate(rate)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use orderly_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1550); // $15.50
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 4650); // $46.50
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Like [`Money::multiply_quantity`], returning `None` on overflow.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `$` followed by the signed amount rounded to cents, e.g.
/// `$12.34` or `$-5.50`.
///
/// The sign is taken after rounding, so `-0.004` renders as `$0.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minor = self.minor_units();
        let sign = if minor < 0 { "-" } else { "" };
        let abs = minor.unsigned_abs();
        write!(f, "${}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.canonical())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer).map(Money)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
