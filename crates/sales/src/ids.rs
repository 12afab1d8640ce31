//! Identifiers owned by the Sales context.

use acme_core::Uuid;
use serde::{Deserialize, Serialize};

/// Product reference carried by order lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct ProductId(Uuid);

acme_core::uuid_newtype!(ProductId, "Product ID");

/// Sales order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct SalesOrderId(Uuid);

acme_core::uuid_newtype!(SalesOrderId, "Sales order ID");
