//! Money type for representing currency amounts
//!
//! Wraps an exact base-10 `Decimal` so that summing many small amounts never
//! drifts the way binary floating point does. Values keep the scale they were
//! written with; rounding to cents only happens when an amount is displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// Represents an exact monetary amount
///
/// Positive values are inflows, negative values are outflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from an exact decimal
    pub fn new(value: Decimal) -> Self {
        Self(normalize_zero(value))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying exact value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add, or `None` if the sum is outside the representable range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self::new)
    }

    /// Subtract, or `None` if the difference is outside the representable range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self::new)
    }

    /// Divide evenly across `count` items, or zero when there is nothing to divide by
    pub fn divided_by(&self, count: usize) -> Self {
        if count == 0 {
            Self::zero()
        } else {
            Self::new(self.0 / Decimal::from(count))
        }
    }

    /// The amount rounded half-up to whole cents, always with two fractional digits
    pub fn rounded(&self) -> Decimal {
        let mut cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        cents.rescale(2);
        normalize_zero(cents)
    }

    /// Parse an exact amount from text
    ///
    /// Accepts plain decimals ("10.50", "-3", "+7.25") and exponent notation
    /// ("1.5e3"). Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let value = Decimal::from_str(s)
            .or_else(|e| {
                if s.contains(|c: char| c == 'e' || c == 'E') {
                    Decimal::from_scientific(s)
                } else {
                    Err(e)
                }
            })
            .map_err(|e| MoneyParseError::InvalidFormat {
                input: s.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self::new(value))
    }

    /// Format rounded to cents with a currency symbol: `-$1200.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let cents = self.rounded();
        let sign = if cents.is_sign_negative() { "-" } else { "" };
        format!("{}{}{}", sign, symbol, cents.abs())
    }

    /// Format rounded to cents with a currency symbol and thousands separators: `-$1,200.50`
    pub fn format_grouped(&self, symbol: &str) -> String {
        let cents = self.rounded();
        let sign = if cents.is_sign_negative() { "-" } else { "" };
        let magnitude = cents.abs().to_string();
        let (whole, fraction) = magnitude
            .split_once('.')
            .unwrap_or((magnitude.as_str(), "00"));
        format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction)
    }
}

/// Clear the sign bit on zero so `5 + -5` never prints as `-0`
fn normalize_zero(mut value: Decimal) -> Decimal {
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.value()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.0)
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

/// Serialized as the exact decimal string (`"1200.00"`), never as a float
impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("empty amount")]
    Empty,
    #[error("not an exact decimal: {reason}")]
    InvalidFormat { input: String, reason: String },
}
