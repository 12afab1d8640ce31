//! Money value object.
//!
//! A non-negative decimal amount tagged with its [`Currency`]. The amount may
//! not carry more decimal places than the currency defines (two for USD, zero
//! for JPY, ...). Arithmetic never mutates; it returns new, re-validated
//! values.

use acme_core::{DomainError, DomainResult, ValueObject};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// Currency used by [`Money::zero`].
pub const DEFAULT_CURRENCY: Currency = Currency::USD;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyFields")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Fails when `amount` is negative or has more decimal places than
    /// `currency.fraction_digits()`.
    pub fn new(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::invalid_argument(
                "amount cannot be null or negative",
            ));
        }
        if amount.scale() > currency.fraction_digits() {
            return Err(DomainError::invalid_argument(
                "amount scale cannot be greater than currency fraction digits",
            ));
        }
        Ok(Self { amount, currency })
    }

    /// Parse a decimal literal such as `"29.99"`.
    pub fn parse(amount: &str, currency: Currency) -> DomainResult<Self> {
        let decimal = amount
            .trim()
            .parse::<Decimal>()
            .map_err(|e| DomainError::invalid_argument(format!("invalid amount {amount:?}: {e}")))?;
        Self::new(decimal, currency)
    }

    /// Zero in the default reference currency (USD).
    ///
    /// Folding amounts of another currency onto this seed fails with a
    /// currency mismatch; use [`Money::zero_in`] when the currency is known.
    pub fn zero() -> Self {
        Self::zero_in(DEFAULT_CURRENCY)
    }

    pub fn zero_in(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Sum of two amounts in the same currency.
    ///
    /// Results that would need rounding (the decimal mantissa is exhausted)
    /// are reported as overflow.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        if self.currency != other.currency {
            return Err(DomainError::invalid_argument(
                "cannot add money with different currency",
            ));
        }
        let sum = self
            .amount
            .checked_add(other.amount)
            .filter(|sum| sum.scale() >= self.amount.scale().max(other.amount.scale()))
            .ok_or_else(|| DomainError::invalid_argument("money addition overflowed"))?;
        Money::new(sum, self.currency)
    }

    /// Amount scaled by an integer factor, same currency.
    ///
    /// The product goes back through [`Money::new`], so a negative factor on a
    /// non-zero amount is rejected.
    pub fn multiply(&self, multiplier: i64) -> DomainResult<Money> {
        let mut product = self
            .amount
            .checked_mul(Decimal::from(multiplier))
            .filter(|product| product.scale() >= self.amount.scale())
            .ok_or_else(|| DomainError::invalid_argument("money multiplication overflowed"))?;
        if product.is_zero() {
            product.set_sign_positive(true);
        }
        Money::new(product, self.currency)
    }
}

impl ValueObject for Money {}

/// Renders as `<amount> <currency code>`, e.g. `59.98 USD`.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[derive(Deserialize)]
struct MoneyFields {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<MoneyFields> for Money {
    type Error = DomainError;

    fn try_from(f: MoneyFields) -> Result<Self, Self::Error> {
        Money::new(f.amount, f.currency)
    }
}
