//! Amount type for representing currency values
//!
//! Amounts are entered as free-form numbers (the page the tracker grew out of
//! accepted any decimal the user typed), so they are stored as `f64` and only
//! rounded when rendered. Sums are accumulated in insertion order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::reports::format::NumberFormat;

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Amount;
    /// let amount = Amount::new(10.5);
    /// assert_eq!(amount.value(), 10.5);
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is a finite number strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Parse an amount from user input
    ///
    /// Accepts plain decimal and exponent notation ("10", "10.50", ".5",
    /// "1e3"). Empty input, NaN, infinities and grouped numbers such as
    /// "1,000" are rejected.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let value: f64 = s
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(value))
    }

    /// Read an amount field the way the input box does: anything that is
    /// not a number counts as zero
    pub fn from_input(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&NumberFormat::default().format(self.0))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + *a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "No amount given"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("10").unwrap().value(), 10.0);
        assert_eq!(Amount::parse(" 10.50 ").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("-5").unwrap().value(), -5.0);
        assert_eq!(Amount::parse(".5").unwrap().value(), 0.5);
        assert_eq!(Amount::parse("1e3").unwrap().value(), 1000.0);
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(Amount::parse(""), Err(AmountParseError::Empty));
        assert_eq!(Amount::parse("   "), Err(AmountParseError::Empty));
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("1,000").is_err());
        assert!(Amount::parse("NaN").is_err());
        assert!(Amount::parse("inf").is_err());
    }

    #[test]
    fn test_from_input_defaults_to_zero() {
        assert_eq!(Amount::from_input("250").value(), 250.0);
        assert!(Amount::from_input("").is_zero());
        assert!(Amount::from_input("lots").is_zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(1000.0);
        let b = Amount::new(150.0);

        assert_eq!((a + b).value(), 1150.0);
        assert_eq!((a - b).value(), 850.0);
        assert_eq!((-a).value(), -1000.0);
    }

    #[test]
    fn test_is_checks() {
        assert!(Amount::zero().is_zero());
        assert!(Amount::new(0.01).is_positive());
        assert!(!Amount::new(0.0).is_positive());
        assert!(!Amount::new(f64::NAN).is_positive());
        assert!(Amount::new(-1.0).is_negative());
    }

    #[test]
    fn test_sum_in_order() {
        let amounts = vec![Amount::new(0.1), Amount::new(0.2), Amount::new(0.3)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total.value(), 0.1 + 0.2 + 0.3);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Amount::new(1000.0).to_string(), "1,000");
        assert_eq!(Amount::new(12.5).to_string(), "12.5");
    }

    #[test]
    fn test_serialization() {
        let a = Amount::new(10.5);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "10.5");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
