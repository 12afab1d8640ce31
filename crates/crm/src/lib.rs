//! CRM bounded context (customers).
//!
//! Business rules for customers, implemented purely as deterministic domain
//! logic (no IO, no storage). Other contexts refer to a customer through its
//! [`CustomerId`] only.

pub mod customer;

pub use acme_shared::CustomerId;
pub use customer::Customer;
