//! Sales bounded context (sales orders).
//!
//! This crate contains business rules for sales orders, implemented purely as
//! deterministic domain logic (no IO, no storage). Customers are referenced by
//! [`CustomerId`] only; the CRM context is never a dependency.

pub mod ids;
pub mod item;
pub mod order;

pub use acme_shared::{CustomerId, Money};
pub use ids::{ProductId, SalesOrderId};
pub use item::SalesOrderItem;
pub use order::SalesOrder;
