//! Money type for representing euro amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Display uses German conventions: `.` groups thousands, `,`
//! separates cents, and the `€` sign trails the number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::FinancialsError;

/// Represents a monetary amount stored as cents (hundredths of a euro)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use projectx_financials::models::Money;
    /// let amount = Money::from_cents(1050); // 10,50 €
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole euros
    ///
    /// # Examples
    /// ```
    /// use projectx_financials::models::Money;
    /// let amount = Money::from_euros(137_000);
    /// assert_eq!(amount.to_string(), "137.000,00 €");
    /// ```
    pub const fn from_euros(euros: i64) -> Self {
        Self(euros * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole euros portion (truncated toward zero)
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Clamp negative amounts to zero
    pub const fn non_negative(&self) -> Self {
        if self.0 < 0 {
            Self(0)
        } else {
            *self
        }
    }

    /// The amount in euros as a float, for chart coordinates and ratios
    pub fn as_euros_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `self` as a percentage of `base`, or `None` when `base` is zero
    pub fn percent_of(&self, base: Money) -> Option<f64> {
        if base.is_zero() {
            None
        } else {
            Some(self.0 as f64 / base.0 as f64 * 100.0)
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts the display format and its looser variants:
    /// "137.000,00 €", "137000,00", "-8.000 €", "1050,5"
    pub fn parse(s: &str) -> Result<Self, FinancialsError> {
        let invalid = || FinancialsError::MoneyParse(s.to_string());

        let trimmed = s.trim();
        let trimmed = trimmed.strip_suffix('€').unwrap_or(trimmed).trim_end();

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };

        let (whole, fraction) = match body.split_once(',') {
            Some((whole, fraction)) => (whole, fraction),
            None => (body, ""),
        };

        let digits: String = whole.chars().filter(|c| *c != '.').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let euros: i64 = digits.parse().map_err(|_| invalid())?;

        // Pad or truncate cents to 2 digits
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = euros
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }
}

/// Insert `.` between each group of three digits
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let formatted = format!(
            "{}{},{:02} €",
            sign,
            group_thousands(self.euros().abs()),
            self.cents_part()
        );
        // Route through `pad` so width/alignment specifiers work in reports
        f.pad(&formatted)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_euros() {
        let m = Money::from_euros(45_000);
        assert_eq!(m.cents(), 4_500_000);
        assert_eq!(m.euros(), 45_000);
        assert_eq!(m.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_euros(137_000).to_string(), "137.000,00 €");
        assert_eq!(Money::from_euros(20_000).to_string(), "20.000,00 €");
        assert_eq!(Money::from_cents(1050).to_string(), "10,50 €");
        assert_eq!(Money::from_cents(5).to_string(), "0,05 €");
        assert_eq!(Money::zero().to_string(), "0,00 €");
        assert_eq!(Money::from_euros(-8_000).to_string(), "-8.000,00 €");
        assert_eq!(Money::from_euros(1_234_567).to_string(), "1.234.567,00 €");
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:>12}", Money::from_euros(5)), "      5,00 €");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_euros(1000);
        let b = Money::from_euros(500);

        assert_eq!((a + b).euros(), 1500);
        assert_eq!((a - b).euros(), 500);
        assert_eq!((-a).euros(), -1000);
        assert_eq!((b - a).non_negative(), Money::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("137.000,00 €").unwrap(), Money::from_euros(137_000));
        assert_eq!(Money::parse("137000").unwrap(), Money::from_euros(137_000));
        assert_eq!(Money::parse("10,5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-8.000,00 €").unwrap(), Money::from_euros(-8_000));
        assert_eq!(Money::parse("0,05€").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("€").is_err());
        assert!(Money::parse("12a,00").is_err());
        assert!(Money::parse("12,x0").is_err());
    }

    #[test]
    fn test_format_then_parse_recovers_amount() {
        let original = Money::from_euros(137_000);
        let parsed = Money::parse(&original.to_string()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_percent_of() {
        let variance = Money::from_euros(12_000);
        let pct = variance.percent_of(Money::from_euros(125_000)).unwrap();
        assert!((pct - 9.6).abs() < 1e-9);
        assert_eq!(variance.percent_of(Money::zero()), None);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_euros(100),
            Money::from_euros(200),
            Money::from_euros(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.euros(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
