//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! Binary floating point cannot represent most decimal prices exactly
//! (`0.1 + 0.2 != 0.3`), and multi-buy offers produce sub-cent intermediate
//! charges (half of $32.95 is $16.475) that integer cents cannot hold either.
//! Every monetary value in this crate is therefore a fixed-point
//! [`rust_decimal::Decimal`], and rounding happens exactly once, at the final
//! total.
//!
//! ## Rounding
//! The pinned rounding mode is **2 decimal places, midpoint away from zero**
//! (half-up): 54.375 rounds to 54.38 and 98.275 rounds to 98.28.
//!
//! ## Usage
//! ```rust
//! use checkout_core::Money;
//!
//! let price = Money::from_major_minor(10, 99); // $10.99
//! let total = price + Money::from_major_minor(5, 0);
//! assert_eq!(total.to_string(), "$15.99");
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value with exact decimal arithmetic.
///
/// ## Design Decisions
/// - **Decimal backing**: exact arithmetic for prices, discounts and
///   sub-cent intermediate values
/// - **Single field tuple struct**: zero-cost wrapper, serialized as the
///   bare decimal
/// - **Copy**: values are small and freely passed around
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps a raw decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50, not -$4.50.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Money;
    ///
    /// let price = Money::from_major_minor(32, 95);
    /// assert_eq!(price.to_string(), "$32.95");
    /// ```
    #[inline]
    pub fn from_major_minor(major: i64, minor: i64) -> Self {
        let units = if major < 0 {
            major * 100 - minor
        } else {
            major * 100 + minor
        };
        Money(Decimal::new(units, 2))
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the raw decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Half of this value, at full decimal precision.
    ///
    /// Used by every-other-unit offers; half of $32.95 is exactly $16.475,
    /// which only becomes $16.48 (or stays $16.47 as part of a larger sum)
    /// when the final total is rounded.
    #[inline]
    pub fn halved(&self) -> Self {
        Money(self.0 / Decimal::TWO)
    }

    /// Applies a percentage discount given in basis points (1000 = 10%)
    /// and returns the discounted amount.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Money;
    ///
    /// let subtotal = Money::from_major_minor(100, 0);
    /// let discounted = subtotal.percent_off(1000); // 10% off
    /// assert_eq!(discounted, Money::from_major_minor(90, 0));
    /// ```
    pub fn percent_off(&self, discount_bps: u32) -> Self {
        let rate = Decimal::new(i64::from(discount_bps), 4);
        Money(self.0 - self.0 * rate)
    }

    /// Rounds to 2 decimal places, midpoint away from zero (half-up).
    ///
    /// This is the single pinned rounding point of the pricing engine:
    /// subtotals and per-unit charges keep full precision, only the final
    /// total is rounded.
    pub fn rounded(&self) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays money as `$X.YY` with exactly two decimals.
///
/// Amounts with more precision are rounded half-up for display; the stored
/// value is untouched.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        shown.rescale(2);
        if shown.is_sign_negative() {
            write!(f, "-${}", shown.abs())
        } else {
            write!(f, "${shown}")
        }
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

/// Multiplication by integer quantity (line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
