//! Money value object.
//!
//! Amounts are stored as whole paise (1/100 rupee) in an `i64`, so
//! equality checks such as "paid in full" are exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::ValidationError;

const PAISE_PER_RUPEE: i64 = 100;

/// An amount of Indian rupees in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero rupees.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from whole rupees.
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * PAISE_PER_RUPEE)
    }

    /// Creates an amount from paise.
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    /// Returns the amount in paise.
    pub fn paise(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Sum of two amounts, or `None` if it does not fit.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Returns `percent`% of this amount, rounded toward zero to the paisa.
    pub fn percent(&self, percent: i64) -> Self {
        Self(self.0 * percent / 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = PAISE_PER_RUPEE as u64;
        write!(f, "{}Rs. {}.{:02}", sign, abs / per, abs % per)
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    /// Parses a plain decimal rupee amount such as `1500`, `1500.5` or `-20.25`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("amount"));
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };

        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !is_digits(whole) || !is_digits(fraction) {
            return Err(ValidationError::invalid_format(
                "amount",
                "must be a number such as 2500 or 2500.50",
            ));
        }
        if fraction.len() > 2 {
            return Err(ValidationError::invalid_format(
                "amount",
                "at most two decimal places are allowed",
            ));
        }

        let rupees: i64 = whole
            .parse()
            .map_err(|_| ValidationError::invalid_format("amount", "amount is too large"))?;
        let paise: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().unwrap_or(0) * 10,
            _ => fraction.parse::<i64>().unwrap_or(0),
        };

        let total = rupees
            .checked_mul(PAISE_PER_RUPEE)
            .and_then(|p| p.checked_add(paise))
            .ok_or_else(|| ValidationError::invalid_format("amount", "amount is too large"))?;

        Ok(Money(if negative { -total } else { total }))
    }
}
