//! ISO-4217 currencies known to the model.

use acme_core::{DomainError, DomainResult, ValueObject, ensure_not_blank};
use serde::{Deserialize, Serialize};

/// Supported currencies, with their canonical fraction digits.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    CHF,
    CAD,
    AUD,
    CNY,
    INR,
    MXN,
    BRL,
    PEN,
    /// Japanese Yen (no minor unit).
    JPY,
    KRW,
    CLP,
    /// Kuwaiti Dinar (three decimal places).
    KWD,
    BHD,
}

impl Currency {
    pub const ALL: [Currency; 16] = [
        Self::USD,
        Self::EUR,
        Self::GBP,
        Self::CHF,
        Self::CAD,
        Self::AUD,
        Self::CNY,
        Self::INR,
        Self::MXN,
        Self::BRL,
        Self::PEN,
        Self::JPY,
        Self::KRW,
        Self::CLP,
        Self::KWD,
        Self::BHD,
    ];

    /// Three-letter ISO code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CHF => "CHF",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::CNY => "CNY",
            Self::INR => "INR",
            Self::MXN => "MXN",
            Self::BRL => "BRL",
            Self::PEN => "PEN",
            Self::JPY => "JPY",
            Self::KRW => "KRW",
            Self::CLP => "CLP",
            Self::KWD => "KWD",
            Self::BHD => "BHD",
        }
    }

    /// Number of decimal places an amount in this currency may carry.
    pub const fn fraction_digits(&self) -> u32 {
        match self {
            Self::JPY | Self::KRW | Self::CLP => 0,
            Self::KWD | Self::BHD => 3,
            _ => 2,
        }
    }

    /// Look up a currency by ISO code (case-insensitive, surrounding
    /// whitespace ignored).
    pub fn from_code(code: &str) -> DomainResult<Self> {
        ensure_not_blank(code, "currency")?;
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| DomainError::invalid_argument(format!("unknown currency code: {code}")))
    }
}

impl ValueObject for Currency {}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code)
    }
}

impl core::str::FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
