//! Whole-unit price representation.
//!
//! Bookinest prices carry no fractional currency: every amount is an integer
//! count of pesos. Display follows the es-AR convention used on the
//! storefront, a `"$ "` prefix with `.` as the thousands separator.

use core::fmt;
use core::iter::Sum;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a whole number.
    #[error("price must be a whole number: {0}")]
    NotAnInteger(String),
}

/// A whole-unit price.
///
/// Arithmetic saturates at the bounds of `i64` instead of wrapping.
///
/// ## Examples
///
/// ```
/// use bookinest_core::Price;
///
/// assert_eq!(Price::new(1000).display(), "$ 1.000");
/// assert_eq!(Price::new(1000).times(3), Price::new(3000));
/// assert_eq!("25900".parse::<Price>().unwrap(), Price::new(25_900));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// Currency prefix used by [`Price::display`].
    pub const PREFIX: &'static str = "$ ";

    /// Create a new price from a whole-unit amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the whole-unit amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Price of `qty` units at this unit price.
    #[must_use]
    pub fn times(self, qty: u64) -> Self {
        let qty = i64::try_from(qty).unwrap_or(i64::MAX);
        Self(self.0.saturating_mul(qty))
    }

    /// Format for display (e.g., `"$ 12.500"`).
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::PREFIX)?;
        if self.0 < 0 {
            f.write_str("-")?;
        }
        f.write_str(&group_thousands(self.0.unsigned_abs()))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, price| Self(acc.0.saturating_add(price.0)))
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| PriceError::NotAnInteger(trimmed.to_string()))
    }
}

/// Insert `.` between every group of three digits, counting from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
