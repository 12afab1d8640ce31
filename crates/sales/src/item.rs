use acme_core::{DomainError, DomainResult};
use acme_shared::Money;
use serde::Serialize;

use crate::ids::ProductId;

/// Order line: product, quantity, unit price.
///
/// Immutable once built: changing quantity or price means replacing the line,
/// so the constructor checks always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesOrderItem {
    product_id: ProductId,
    quantity: i64,
    unit_price: Money,
}

impl SalesOrderItem {
    pub fn new(product_id: ProductId, quantity: i64, unit_price: Money) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::invalid_argument(
                "quantity must be greater than zero",
            ));
        }
        if !unit_price.is_positive() {
            return Err(DomainError::invalid_argument(
                "unit price must be greater than zero",
            ));
        }

        Ok(Self {
            product_id,
            quantity,
            unit_price,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> &Money {
        &self.unit_price
    }

    /// Line amount: unit price × quantity.
    pub fn calculate_item_amount(&self) -> DomainResult<Money> {
        self.unit_price.multiply(self.quantity)
    }
}
