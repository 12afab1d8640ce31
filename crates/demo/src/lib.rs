//! Demonstration driver: builds a customer and a sales order across the CRM
//! and Sales contexts and reports the results as plain text.

use std::io::Write;

use anyhow::Context;

use acme_core::AggregateRoot;
use acme_crm::Customer;
use acme_sales::{ProductId, SalesOrder};
use acme_shared::{Address, Currency, Money};

/// Run the fixed scenario, writing one human-readable line per step to `out`.
pub fn run_scenario<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "Hello and welcome!")?;

    // Shared kernel
    let address = Address::new("Street", "123", "City", "12345", "USA")?;
    writeln!(out, "First Address: {address}")?;
    let another_address = Address::new("Street", "456", "Anytown", "12345", "USA")?;
    writeln!(out, "Second Address: {another_address}")?;

    // CRM
    writeln!(out, "Creating a customer...")?;
    let mut customer = Customer::new("John Doe", "john.doe@gmail.com", address)?;
    writeln!(out, "Customer contact info: {}", customer.contact_info())?;
    writeln!(out, "Updating customer contact info...")?;
    let email = customer.email().to_string();
    customer
        .update_contact_info(email, another_address)
        .context("updating customer contact info")?;
    writeln!(out, "Customer contact info: {}", customer.contact_info())?;

    // Sales, linked to the customer by id only
    writeln!(out, "Creating a sales order...")?;
    let mut order = SalesOrder::new(*customer.id());
    let price = Money::parse("29.99", Currency::USD)?;
    order
        .add_item(ProductId::new(), 2, price)
        .context("adding item to sales order")?;
    writeln!(out, "Sales order total: {}", order.order_total_amount_as_string())?;

    tracing::info!(
        customer_id = %customer.id(),
        order_id = %order.id(),
        total = %order.total_amount(),
        "scenario completed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_reports_each_step() {
        let mut out = Vec::new();
        run_scenario(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Hello and welcome!\n"));
        assert!(text.contains("First Address: Street 123, City, 12345, USA\n"));
        assert!(text.ends_with("Sales order total: 59.98 USD\n"));
    }
}
