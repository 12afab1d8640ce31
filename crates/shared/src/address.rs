//! Postal address value object.

use acme_core::{DomainError, DomainResult, ValueObject, ensure_not_blank};
use serde::{Deserialize, Serialize};

/// Physical address shared by the bounded contexts.
///
/// All five fields are required and non-blank. An address is replaced
/// wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressFields")]
pub struct Address {
    street: String,
    number: String,
    city: String,
    postal_code: String,
    country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        let address = Self {
            street: street.into(),
            number: number.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> DomainResult<()> {
        ensure_not_blank(&self.street, "street")?;
        ensure_not_blank(&self.number, "number")?;
        ensure_not_blank(&self.city, "city")?;
        ensure_not_blank(&self.postal_code, "postal code")?;
        ensure_not_blank(&self.country, "country")?;
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl ValueObject for Address {}

/// Renders as `street number, city, postal code, country`.
impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {}",
            self.street, self.number, self.city, self.postal_code, self.country
        )
    }
}

/// Unvalidated wire shape; deserialization goes through [`Address::new`].
#[derive(Deserialize)]
struct AddressFields {
    street: String,
    number: String,
    city: String,
    postal_code: String,
    country: String,
}

impl TryFrom<AddressFields> for Address {
    type Error = DomainError;

    fn try_from(f: AddressFields) -> Result<Self, Self::Error> {
        Address::new(f.street, f.number, f.city, f.postal_code, f.country)
    }
}
