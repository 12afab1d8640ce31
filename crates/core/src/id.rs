//! Strongly-typed identifiers used across the bounded contexts.
//!
//! Each context declares its own newtype over [`Uuid`] and derives the common
//! behaviour through [`uuid_newtype!`](crate::uuid_newtype):
//!
//! ```ignore
//! use acme_core::Uuid;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
//! #[serde(try_from = "Uuid", into = "Uuid")]
//! pub struct CustomerId(Uuid);
//!
//! acme_core::uuid_newtype!(CustomerId, "Customer ID");
//! ```

pub use uuid::Uuid;

/// Implements construction, validation, parsing and formatting for a
/// `struct $t(Uuid)` identifier newtype.
///
/// The nil UUID stands for an absent identifier and is rejected everywhere a
/// caller can supply a value.
#[macro_export]
macro_rules! uuid_newtype {
    ($t:ident, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered, random tail). Prefer passing IDs
            /// explicitly in tests for determinism.
            pub fn new() -> Self {
                Self($crate::Uuid::now_v7())
            }

            /// Wrap a caller-supplied identifier.
            pub fn try_from_uuid(uuid: $crate::Uuid) -> $crate::DomainResult<Self> {
                if uuid.is_nil() {
                    return Err($crate::DomainError::invalid_argument(concat!(
                        $name,
                        " cannot be null"
                    )));
                }
                Ok(Self(uuid))
            }

            pub fn as_uuid(&self) -> &$crate::Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<$crate::Uuid> for $t {
            type Error = $crate::DomainError;

            fn try_from(value: $crate::Uuid) -> Result<Self, Self::Error> {
                Self::try_from_uuid(value)
            }
        }

        impl From<$t> for $crate::Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = <$crate::Uuid as core::str::FromStr>::from_str(s.trim()).map_err(|e| {
                    $crate::DomainError::invalid_argument(format!("{}: {}", $name, e))
                })?;
                Self::try_from_uuid(uuid)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::Uuid;
    use crate::DomainError;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(try_from = "Uuid", into = "Uuid")]
    struct WidgetId(Uuid);

    crate::uuid_newtype!(WidgetId, "Widget ID");

    #[test]
    fn new_generates_distinct_ids() {
        let a = WidgetId::new();
        let b = WidgetId::new();
        assert_ne!(a, b);
        assert!(!a.as_uuid().is_nil());
    }

    #[test]
    fn try_from_uuid_wraps_supplied_value() {
        let uuid = Uuid::now_v7();
        let id = WidgetId::try_from_uuid(uuid).unwrap();
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn nil_uuid_is_rejected() {
        let err = WidgetId::try_from_uuid(Uuid::nil()).unwrap_err();
        assert_eq!(err, DomainError::invalid_argument("Widget ID cannot be null"));
    }

    #[test]
    fn parse_round_trips_display() {
        let id = WidgetId::new();
        let parsed: WidgetId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_rejects_malformed_and_nil() {
        let err = "not-a-uuid".parse::<WidgetId>().unwrap_err();
        assert!(err.message().starts_with("Widget ID: "));

        let nil = "00000000-0000-0000-0000-000000000000".parse::<WidgetId>();
        assert!(nil.is_err());
    }

    #[test]
    fn serde_is_transparent_and_validating() {
        let id = WidgetId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        assert_eq!(serde_json::from_str::<WidgetId>(&json).unwrap(), id);

        let nil = serde_json::from_str::<WidgetId>("\"00000000-0000-0000-0000-000000000000\"");
        assert!(nil.is_err());
    }
}
