//! Exact decimal amount type.
//!
//! Wraps `rust_decimal` for storage, parsing and display. Anything that must
//! stay exact past `Decimal`'s 28 digits goes through [`Amount::to_exact`],
//! which widens to an unbounded `BigDecimal`.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// An exact base-10 amount.
///
/// Equality and ordering are by numeric value, so `1.0` and `1.00` compare
/// equal. The scale the value was created with is kept for display.
///
/// `+` panics on overflow and rounds once a sum needs more than 28
/// significant digits, exactly like `Decimal`. Use [`checked_add`] when
/// either matters.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use combo_finder::Amount;
///
/// let a = Amount::from_str("0.10").unwrap();
/// let b = Amount::from_str("0.20").unwrap();
/// assert_eq!(a + b, Amount::from_str("0.30").unwrap());
/// ```
///
/// [`checked_add`]: Amount::checked_add
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "rust_decimal::serde::str")] Decimal);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`.
    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Returns the underlying decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// The same value as an unbounded `BigDecimal`. Never loses digits.
    pub fn to_exact(&self) -> BigDecimal {
        BigDecimal::new(BigInt::from(self.0.mantissa()), i64::from(self.0.scale()))
    }

    /// Adds `rhs`, returning `None` on overflow or if the sum had to be
    /// rounded to fit.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let sum = Amount(self.0.checked_add(rhs.0)?);
        if sum.to_exact() == self.to_exact() + rhs.to_exact() {
            Some(sum)
        } else {
            None
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}
