//! Shared kernel (value objects exchanged between the CRM and Sales contexts).
//!
//! Everything here is immutable and validated at construction; the bounded
//! contexts only ever exchange these minimal types, never each other's
//! aggregates.

pub mod address;
pub mod currency;
pub mod customer_id;
pub mod money;

pub use address::Address;
pub use currency::Currency;
pub use customer_id::CustomerId;
pub use money::Money;
