use chrono::{DateTime, Utc};
use serde::Serialize;

use acme_core::{AggregateRoot, DomainResult};
use acme_shared::{CustomerId, Money};

use crate::ids::{ProductId, SalesOrderId};
use crate::item::SalesOrderItem;

/// Aggregate root: SalesOrder.
///
/// Lines are append-only. `total_amount` is recomputed eagerly on every
/// accepted `add_item`, so it always equals the sum of the current lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesOrder {
    id: SalesOrderId,
    customer_id: CustomerId,
    order_date: DateTime<Utc>,
    items: Vec<SalesOrderItem>,
    total_amount: Money,
}

impl SalesOrder {
    /// Open an empty order for `customer_id`, dated now, with a fresh id.
    pub fn new(customer_id: CustomerId) -> Self {
        let order = Self {
            id: SalesOrderId::new(),
            customer_id,
            order_date: Utc::now(),
            items: Vec::new(),
            total_amount: Money::zero(),
        };
        tracing::debug!(order_id = %order.id, customer_id = %customer_id, "sales order created");
        order
    }

    pub fn id_typed(&self) -> SalesOrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn items(&self) -> &[SalesOrderItem] {
        &self.items
    }

    pub fn total_amount(&self) -> &Money {
        &self.total_amount
    }

    /// Append a line and refresh the cached total.
    ///
    /// The line and the new total are both computed before the order is
    /// touched: on any error (invalid line, currency mismatch with the USD
    /// total, overflow) the order is left exactly as it was.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        unit_price: Money,
    ) -> DomainResult<()> {
        let item = SalesOrderItem::new(product_id, quantity, unit_price)?;
        let total = Self::sum_items(self.items.iter().chain(core::iter::once(&item)))?;

        tracing::debug!(
            order_id = %self.id,
            product_id = %product_id,
            quantity,
            total = %total,
            "sales order item added"
        );
        self.items.push(item);
        self.total_amount = total;
        Ok(())
    }

    /// Sum of all line amounts, seeded at [`Money::zero`].
    pub fn calculate_order_total_amount(&self) -> DomainResult<Money> {
        Self::sum_items(self.items.iter())
    }

    fn sum_items<'a>(mut items: impl Iterator<Item = &'a SalesOrderItem>) -> DomainResult<Money> {
        items.try_fold(Money::zero(), |total, item| {
            total.add(&item.calculate_item_amount()?)
        })
    }

    /// Override the order date. Returns `self` for chaining.
    pub fn with_order_date(&mut self, order_date: DateTime<Utc>) -> &mut Self {
        self.order_date = order_date;
        tracing::debug!(order_id = %self.id, %order_date, "sales order date changed");
        self
    }

    /// Total followed by its currency code, e.g. `59.98 USD`.
    pub fn order_total_amount_as_string(&self) -> String {
        self.total_amount.to_string()
    }
}

impl AggregateRoot for SalesOrder {
    type Id = SalesOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
