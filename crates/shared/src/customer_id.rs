use acme_core::Uuid;
use serde::{Deserialize, Serialize};

/// Customer identifier. Owned by the CRM context, referenced by Sales.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct CustomerId(Uuid);

acme_core::uuid_newtype!(CustomerId, "Customer ID");
