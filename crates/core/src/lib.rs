//! `acme-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by every bounded
//! context (no IO, no logging setup, no storage).

pub mod aggregate;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use error::{DomainError, DomainResult, ensure_not_blank};
pub use id::Uuid;
pub use value_object::ValueObject;
