//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so every value carries exactly two
//! decimal places. Division is the only operation that can produce fractions
//! of a cent; it rounds half-up (away from zero on a tie).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use debt_destroyer::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    ///
    /// # Examples
    /// ```
    /// use debt_destroyer::models::Money;
    /// let amount = Money::from_dollars_cents(10, 50); // $10.50
    /// ```
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a Money amount from whole dollars
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Clamp negative amounts to zero
    pub fn floor_zero(self) -> Self {
        self.max(Self::zero())
    }

    /// Divide by an integer divisor, rounding half-up to the nearest cent
    ///
    /// # Examples
    /// ```
    /// use debt_destroyer::models::Money;
    /// assert_eq!(Money::from_dollars(100).div_round_half_up(12), Money::from_cents(833));
    /// assert_eq!(Money::from_dollars(100).div_round_half_up(6), Money::from_cents(1667));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_round_half_up(self, divisor: i64) -> Self {
        Self(div_round_half_up(self.0, divisor))
    }

    /// Largest amount a stored record may hold (99,999,999.99)
    pub const MAX_RECORD: Money = Money(9_999_999_999);

    /// Whether this amount is too large to be a stored record value
    pub const fn exceeds_record_limit(&self) -> bool {
        self.0 > Self::MAX_RECORD.0
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Plain decimal rendering without a currency symbol ("1234.50")
    pub fn to_decimal_string(&self) -> String {
        self.format_with_symbol("")
    }
}

/// Integer division rounding half away from zero
///
/// Shared by [`Money`] and the utilization ratio so both round the same way.
pub(crate) fn div_round_half_up(numerator: i64, divisor: i64) -> i64 {
    div_round_half_up_wide(numerator as i128, divisor as i128) as i64
}

pub(crate) fn div_round_half_up_wide(numerator: i128, divisor: i128) -> i128 {
    assert!(divisor != 0, "division by zero");
    let negative = (numerator < 0) != (divisor < 0);
    let (n, d) = (numerator.abs(), divisor.abs());
    let q = (2 * n + d) / (2 * d);
    if negative {
        -q
    } else {
        q
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.format_with_symbol("$");
        f.pad(&s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
