//! # Money Module
//!
//! Provides the `Money` type for daily rates, commissions and rental totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    3 × 0.1 = 0.30000000000000004  ❌ WRONG!                             │
//! │                                                                         │
//! │  A rental of 7 days at €33.10/day must be exactly €231.70              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3310 cents × 7 = 23170 cents, always                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use toolrent_core::money::Money;
//!
//! let rate: Money = "33.10".parse().unwrap();
//! assert_eq!(rate.cents(), 3310);
//!
//! let total = rate.checked_multiply_days(7).unwrap() + Money::from_cents(500);
//! assert_eq!(total.to_string(), "€236.70");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents (EUR).
///
/// Signed so that the pass-through quote for an inverted period can go
/// negative, the same as the arithmetic it stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::money::Money;
    ///
    /// let rate = Money::from_cents(2500); // €25.00
    /// assert_eq!(rate.cents(), 2500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (euros and cents).
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(45, 0).cents(), 4500);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a daily amount by a number of days.
    ///
    /// Returns `None` when the product does not fit in an `i64` of cents.
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::money::Money;
    ///
    /// let rate = Money::from_cents(2500);
    /// assert_eq!(rate.checked_multiply_days(3), Some(Money::from_cents(7500)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_multiply_days(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_days(&self, days: i64) -> Option<Self> {
        match self.0.checked_mul(days) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"25"`, `"25.5"` or `"-3.10"` into exact cents.
///
/// ## Rules
/// - Optional leading `-` or `+`
/// - At most two fractional digits (`"1.999"` is rejected, never rounded)
/// - Surrounding whitespace is ignored
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const FIELD: &str = "amount";

        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: FIELD.to_string(),
            });
        }

        let (negative, digits) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (major_str, minor_str) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major_str.is_empty() && minor_str.is_empty() {
            return Err(ValidationError::invalid_format(FIELD, "no digits"));
        }
        if !major_str.bytes().all(|b| b.is_ascii_digit())
            || !minor_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValidationError::invalid_format(
                FIELD,
                format!("'{}' is not a decimal number", s),
            ));
        }
        if minor_str.len() > 2 {
            return Err(ValidationError::invalid_format(
                FIELD,
                "at most two decimal places are allowed",
            ));
        }

        let overflow = || ValidationError::invalid_format(FIELD, "value is too large");

        let major: i64 = if major_str.is_empty() {
            0
        } else {
            major_str.parse().map_err(|_| overflow())?
        };
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => minor_str.parse().map_err(|_| overflow())?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}€{}.{:02}",
            sign,
            self.major().abs(),
            self.cents_part()
        )
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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, days: i64) -> Self {
        Money(self.0 * days)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
