use acme_core::{AggregateRoot, DomainResult, ensure_not_blank};
use acme_shared::{Address, CustomerId};
use serde::Serialize;

/// Aggregate root: Customer.
///
/// The identifier and name are fixed at construction. Email and address can
/// only change together through [`Customer::update_contact_info`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    address: Address,
}

impl Customer {
    /// Register a new customer under a freshly generated [`CustomerId`].
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        address: Address,
    ) -> DomainResult<Self> {
        Self::with_id(CustomerId::new(), name, email, address)
    }

    /// Same as [`Customer::new`] with a caller-chosen identifier.
    pub fn with_id(
        id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        address: Address,
    ) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();
        ensure_not_blank(&name, "name")?;
        ensure_not_blank(&email, "email")?;

        tracing::debug!(customer_id = %id, "customer created");
        Ok(Self {
            id,
            name,
            email,
            address,
        })
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Replace email and address as one unit.
    ///
    /// Validation happens before any field is touched, so on error both keep
    /// their previous values.
    pub fn update_contact_info(
        &mut self,
        email: impl Into<String>,
        address: Address,
    ) -> DomainResult<()> {
        let email = email.into();
        ensure_not_blank(&email, "email")?;

        self.email = email;
        self.address = address;
        tracing::debug!(customer_id = %self.id, "customer contact info updated");
        Ok(())
    }

    /// `name <email>, address`.
    pub fn contact_info(&self) -> String {
        format!("{} <{}>, {}", self.name, self.email, self.address)
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acme_core::DomainError;

    fn first_address() -> Address {
        Address::new("Street", "123", "City", "12345", "USA").unwrap()
    }

    fn second_address() -> Address {
        Address::new("Street", "456", "Anytown", "12345", "USA").unwrap()
    }

    #[test]
    fn new_customer_formats_contact_info() {
        let customer = Customer::new("John Doe", "john.doe@gmail.com", first_address()).unwrap();
        assert_eq!(
            customer.contact_info(),
            "John Doe <john.doe@gmail.com>, Street 123, City, 12345, USA"
        );
        assert_eq!(customer.name(), "John Doe");
        assert_eq!(customer.email(), "john.doe@gmail.com");
        assert_eq!(customer.address(), &first_address());
    }

    #[test]
    fn new_customer_gets_fresh_id() {
        let a = Customer::new("A", "a@x.io", first_address()).unwrap();
        let b = Customer::new("A", "a@x.io", first_address()).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(*a.id(), a.id_typed());
    }

    #[test]
    fn with_id_keeps_supplied_id() {
        let id = CustomerId::new();
        let customer = Customer::with_id(id, "A", "a@x.io", first_address()).unwrap();
        assert_eq!(customer.id_typed(), id);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Customer::new("   ", "john.doe@gmail.com", first_address()).unwrap_err();
        assert_eq!(err, DomainError::invalid_argument("name cannot be null or blank"));
    }

    #[test]
    fn blank_email_is_rejected() {
        let err = Customer::new("John Doe", "", first_address()).unwrap_err();
        assert_eq!(err, DomainError::invalid_argument("email cannot be null or blank"));
    }

    #[test]
    fn update_contact_info_replaces_email_and_address() {
        let mut customer = Customer::new("John Doe", "john.doe@gmail.com", first_address()).unwrap();
        customer
            .update_contact_info("jd@example.com", second_address())
            .unwrap();
        assert_eq!(
            customer.contact_info(),
            "John Doe <jd@example.com>, Street 456, Anytown, 12345, USA"
        );
    }

    #[test]
    fn failed_update_leaves_state_untouched() {
        let mut customer = Customer::new("John Doe", "john.doe@gmail.com", first_address()).unwrap();
        let before = customer.clone();

        let err = customer.update_contact_info(" ", second_address()).unwrap_err();
        assert_eq!(err, DomainError::invalid_argument("email cannot be null or blank"));
        assert_eq!(customer, before);
    }

    #[test]
    fn serializes_id_transparently() {
        let customer = Customer::new("John Doe", "john.doe@gmail.com", first_address()).unwrap();
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], customer.id().to_string());
        assert_eq!(json["address"]["city"], "City");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: contact info is exactly `name <email>, address`.
            #[test]
            fn contact_info_format(
                name in "[A-Za-z][A-Za-z ]{0,30}",
                email in "[a-z]{1,10}@[a-z]{1,10}\\.[a-z]{2,3}",
                street in "[A-Za-z]{1,20}",
                number in "[0-9]{1,5}",
            ) {
                let address = Address::new(street, number, "City", "12345", "USA").unwrap();
                let customer = Customer::new(name.clone(), email.clone(), address.clone()).unwrap();
                prop_assert_eq!(customer.contact_info(), format!("{name} <{email}>, {address}"));
            }

            /// Property: a valid update is reflected; a blank email changes nothing.
            #[test]
            fn update_is_all_or_nothing(
                email in "[a-z]{1,10}@[a-z]{1,10}\\.[a-z]{2,3}",
                blank in "[ \t]{0,5}",
                city in "[A-Za-z]{1,20}",
            ) {
                let original = Address::new("Street", "123", "City", "12345", "USA").unwrap();
                let moved = Address::new("Street", "9", city, "12345", "USA").unwrap();
                let mut customer = Customer::new("Jane", "jane@x.io", original).unwrap();

                let before = customer.clone();
                prop_assert!(customer.update_contact_info(blank, moved.clone()).is_err());
                prop_assert_eq!(&customer, &before);

                customer.update_contact_info(email.clone(), moved.clone()).unwrap();
                prop_assert_eq!(customer.email(), email.as_str());
                prop_assert_eq!(customer.address(), &moved);
            }
        }
    }
}
