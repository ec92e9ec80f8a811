//! Money types for surfacing benefit prices
//!
//! Premium arithmetic happens on plain `f64` rates inside the pricing engine.
//! Once a price has been truncated to currency precision it is lifted into
//! [`Money`], which carries a `rust_decimal` amount and its currency so that
//! payroll and billing callers never see binary floating-point noise.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Currencies a quote can be surfaced in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    USD,
    CAD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::USD,
        Currency::CAD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
    ];

    // (ISO 4217 code, display symbol, minor unit digits)
    fn details(self) -> (&'static str, &'static str, u32) {
        match self {
            Currency::USD => ("USD", "$", 2),
            Currency::CAD => ("CAD", "C$", 2),
            Currency::EUR => ("EUR", "€", 2),
            Currency::GBP => ("GBP", "£", 2),
            Currency::JPY => ("JPY", "¥", 0),
        }
    }

    pub fn code(self) -> &'static str {
        self.details().0
    }

    pub fn symbol(self) -> &'static str {
        self.details().1
    }

    /// Digits after the decimal point in the minor unit (2 for cents)
    pub fn minor_digits(self) -> u32 {
        self.details().2
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    /// Parses an ISO code, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| MoneyError::UnknownCurrency(code.to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Cannot combine {0} amount with {1} amount")]
    CurrencyMismatch(String, String),

    #[error("Price {0} cannot be represented as money")]
    InvalidAmount(String),

    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// An exact amount in a currency, never finer than the currency's minor unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates Money, dropping any digits past the minor unit (`39.375` is `39.37`)
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        let amount = amount.round_dp_with_strategy(currency.minor_digits(), RoundingStrategy::ToZero);
        Self { amount, currency }
    }

    /// Creates Money from a count of minor units, e.g. `3937` cents
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(minor_units, currency.minor_digits()), currency)
    }

    /// Lifts an already truncated `f64` price into Money.
    ///
    /// `71.09_f64` is stored as `71.0899999...`, so the binary noise is snapped
    /// away two digits past the minor unit before truncating to it. A
    /// zero-decimal currency drops the cents: `43.75` is `¥43`.
    pub fn from_price(price: f64, currency: Currency) -> Result<Self, MoneyError> {
        let invalid = || MoneyError::InvalidAmount(price.to_string());
        if !price.is_finite() {
            return Err(invalid());
        }

        let amount = Decimal::from_f64(price).ok_or_else(invalid)?;
        Ok(Self::new(amount.round_dp(currency.minor_digits() + 2), currency))
    }

    pub fn zero(currency: Currency) -> Self {
        Self::from_minor(0, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Amount as `f64`, for callers that keep prices as plain numbers
    pub fn to_f64(&self) -> Option<f64> {
        self.amount.to_f64()
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Adds two amounts of the same currency
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.code().to_string(),
                other.currency.code().to_string(),
            ));
        }
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Totals amounts that must all be in `currency`; an empty input totals zero
    pub fn sum<'a, I>(amounts: I, currency: Currency) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(currency), |total, m| total.checked_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.currency.minor_digits() as usize;
        write!(f, "{}{:.*}", self.currency.symbol(), digits, self.amount)
    }
}
