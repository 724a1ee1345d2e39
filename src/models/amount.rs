//! Amount type for expense values
//!
//! Wraps a [`Decimal`] so amounts keep exactly the digits they were entered
//! with. Sign is never checked: refunds and corrections are plain negative
//! amounts.
//!
//! `Decimal` tops out near 7.9e28, so there is no `Add` impl here. Sums go
//! through [`Amount::checked_add`] and [`Amount::checked_sum`].

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// A decimal amount of money, currency-less
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Parse an amount from text
    ///
    /// Accepts "3.50", "-3.5", "12", "1e3" and "1.5e-2". Surrounding
    /// whitespace is ignored. Values outside the decimal range are rejected.
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LedgerError::invalid_amount());
        }

        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(Self)
            .map_err(|_| LedgerError::invalid_amount())
    }

    /// Add two amounts, `None` if the result leaves the decimal range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum amounts in iteration order, `None` on overflow
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(), Self::checked_add)
    }

    /// Format with exactly two decimal places, for display
    pub fn to_fixed(&self) -> String {
        format!("{:.2}", self.0.round_dp(2))
    }
}

impl fmt::Display for Amount {
    /// Writes the stored digits unchanged; this is the on-disk form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|_| de::Error::custom(format!("invalid amount {:?}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        Amount::parse(s).unwrap()
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!(amount("3.50"), Amount(Decimal::new(350, 2)));
        assert_eq!(amount(" 12 "), Amount(Decimal::new(12, 0)));
        assert_eq!(amount("-4.25"), Amount(Decimal::new(-425, 2)));
        assert_eq!(amount("1e3"), Amount(Decimal::new(1000, 0)));
        assert_eq!(amount("1.5e-2"), Amount(Decimal::new(15, 3)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "   ", "abc", "12,50", "$5", "1.2.3", "inf", "nan"] {
            let err = Amount::parse(bad).unwrap_err();
            assert!(err.is_validation(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(Amount::parse("1e30").unwrap_err().is_validation());
        assert!(Amount::parse("100000000000000000000000000000000").is_err());
    }

    #[test]
    fn test_display_keeps_digits() {
        assert_eq!(amount("3.50").to_string(), "3.50");
        assert_eq!(amount("12").to_string(), "12");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(amount("3.5").to_fixed(), "3.50");
        assert_eq!(amount("12").to_fixed(), "12.00");
        assert_eq!(amount("0.125").to_fixed(), "0.12");
        assert_eq!(amount("-7.456").to_fixed(), "-7.46");
        assert_eq!(Amount::zero().to_fixed(), "0.00");
    }

    #[test]
    fn test_decimal_equality_ignores_scale() {
        assert_eq!(amount("3.50"), amount("3.5"));
    }

    #[test]
    fn test_checked_sum() {
        let total = Amount::checked_sum([amount("3.50"), amount("12.00"), amount("-0.50")]);
        assert_eq!(total.unwrap().to_fixed(), "15.00");

        assert_eq!(Amount::checked_sum(std::iter::empty()), Some(Amount::zero()));
    }

    #[test]
    fn test_checked_add_overflow() {
        let big = amount("5e28");
        assert_eq!(big.checked_add(big), None);
        assert_eq!(Amount::checked_sum([big, big]), None);
        // Crossing back under the limit does not help once the running sum overflowed.
        assert_eq!(Amount::checked_sum([big, big, amount("-5e28")]), None);
        assert_eq!(big.checked_add(amount("-5e28")), Some(Amount::zero()));
    }
}
