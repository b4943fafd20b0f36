//! Signed monetary amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Currency;
use crate::error::{TenorError, TenorResult};

/// A signed monetary amount in a single currency.
///
/// The sign encodes direction: a negative amount is paid, a positive
/// amount is received. The relationship between the sign and any
/// enclosing long/short flag is a convention of the enclosing trade
/// and is not enforced here.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{Currency, CurrencyAmount};
/// use rust_decimal_macros::dec;
///
/// let premium = CurrencyAmount::of(Currency::USD, dec!(-15000));
/// assert!(premium.is_negative());
/// assert_eq!(premium.negated().amount(), dec!(15000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyAmount {
    /// Currency of the amount.
    currency: Currency,
    /// Signed amount, negative for pay and positive for receive.
    amount: Decimal,
}

impl CurrencyAmount {
    /// Creates an amount in the given currency.
    #[must_use]
    pub fn of(currency: Currency, amount: Decimal) -> Self {
        Self { currency, amount }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::of(currency, Decimal::ZERO)
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the amount with the sign flipped.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::of(self.currency, -self.amount)
    }

    /// Returns the amount with a positive sign.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::of(self.currency, self.amount.abs())
    }

    /// Checks whether the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Checks whether the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Checks whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Adds another amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::CurrencyMismatch` if the currencies differ.
    pub fn plus(&self, other: CurrencyAmount) -> TenorResult<Self> {
        if self.currency != other.currency {
            return Err(TenorError::CurrencyMismatch {
                expected: self.currency,
                actual: other.currency,
            });
        }
        Ok(Self::of(self.currency, self.amount + other.amount))
    }

    /// Subtracts another amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::CurrencyMismatch` if the currencies differ.
    pub fn minus(&self, other: CurrencyAmount) -> TenorResult<Self> {
        self.plus(other.negated())
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}
