//! Money: a non-negative, exact decimal amount.
//!
//! Backed by [`rust_decimal::Decimal`] so that sums of prices never pick up
//! binary floating point error. Equality is numeric: `1.0 == 1.00`.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A non-negative monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wrap a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PriceIsNegative`] when `amount < 0`.
    pub fn new(amount: Decimal) -> Result<Self, ValidationError> {
        if amount < Decimal::ZERO {
            return Err(ValidationError::PriceIsNegative);
        }
        Ok(Self(amount))
    }

    /// Wrap an amount that may be missing from the request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PriceIsNotProvided`] when `amount` is `None`,
    /// or [`ValidationError::PriceIsNegative`] when it is below zero.
    pub fn from_optional(amount: Option<Decimal>) -> Result<Self, ValidationError> {
        amount
            .ok_or(ValidationError::PriceIsNotProvided)
            .and_then(Self::new)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub fn amount(self) -> Decimal {
        self.0
    }

    /// Add two amounts.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PriceOverflow`] if the result does not fit.
    pub fn checked_add(self, other: Self) -> Result<Self, ValidationError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(ValidationError::PriceOverflow)
    }

    /// Multiply by an integer quantity.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PriceOverflow`] if the result does not fit.
    pub fn times(self, quantity: u64) -> Result<Self, ValidationError> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .map(Self)
            .ok_or(ValidationError::PriceOverflow)
    }

    /// Strict comparison.
    #[must_use]
    pub fn is_greater_than(self, other: Self) -> bool {
        self.0 > other.0
    }

    /// Sum a sequence of amounts, starting from [`Money::ZERO`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PriceOverflow`] if the total does not fit.
    pub fn sum<I>(amounts: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |total, amount| total.checked_add(amount))
    }
}

impl TryFrom<Decimal> for Money {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(value: i64) -> Money {
        Money::new(Decimal::from(value)).unwrap()
    }

    #[test]
    fn should_reject_negative_amount() {
        let result = Money::new(Decimal::from(-1));
        assert_eq!(result, Err(ValidationError::PriceIsNegative));
    }

    #[test]
    fn should_reject_missing_amount() {
        let result = Money::from_optional(None);
        assert_eq!(result, Err(ValidationError::PriceIsNotProvided));
    }

    #[test]
    fn should_accept_zero() {
        assert_eq!(Money::new(Decimal::ZERO).unwrap(), Money::ZERO);
    }

    #[test]
    fn should_produce_sum_not_smaller_than_either_operand() {
        let a = money(1000);
        let b = money(250);
        let total = a.checked_add(b).unwrap();
        assert!(total >= a);
        assert!(total >= b);
        assert_eq!(total, money(1250));
    }

    #[test]
    fn should_compare_strictly() {
        assert!(money(2).is_greater_than(money(1)));
        assert!(!money(1).is_greater_than(money(1)));
    }

    #[test]
    fn should_treat_different_scales_as_equal() {
        let a = Money::new(Decimal::new(10, 1)).unwrap();
        let b = Money::new(Decimal::new(100, 2)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn should_multiply_by_quantity_exactly() {
        let unit = Money::new(Decimal::new(1999, 2)).unwrap();
        assert_eq!(unit.times(3).unwrap(), Money::new(Decimal::new(5997, 2)).unwrap());
        assert_eq!(unit.times(0).unwrap(), Money::ZERO);
    }

    #[test]
    fn should_report_overflow_instead_of_panicking() {
        let huge = Money::new(Decimal::MAX).unwrap();
        assert_eq!(huge.checked_add(money(1)), Err(ValidationError::PriceOverflow));
        assert_eq!(huge.times(2), Err(ValidationError::PriceOverflow));
    }

    #[test]
    fn should_sum_empty_sequence_to_zero() {
        assert_eq!(Money::sum(Vec::new()).unwrap(), Money::ZERO);
    }

    #[test]
    fn should_reject_negative_amount_when_deserializing() {
        let result: Result<Money, _> = serde_json::from_str("-5");
        assert!(result.is_err());
    }

    #[test]
    fn should_deserialize_json_number() {
        let parsed: Money = serde_json::from_str("16000").unwrap();
        assert_eq!(parsed, money(16000));
    }
}
