//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing an `AgentId` where a `BookingId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(TenantId, "Unique identifier for an agency tenant.");
typed_id!(BookingId, "Unique identifier for a booking.");
typed_id!(LeadId, "Unique identifier for a sales lead.");
typed_id!(AgentId, "Unique identifier for a sales agent.");
typed_id!(ExpenseId, "Unique identifier for an expense record.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_typed_ids_are_distinct_types() {
        let booking = BookingId::new();
        let roundtrip = BookingId::from_uuid(booking.into_inner());
        assert_eq!(booking, roundtrip);
    }

    #[test]
    fn test_id_display_parses_back() {
        let agent = AgentId::new();
        let parsed = AgentId::from_str(&agent.to_string()).unwrap();
        assert_eq!(agent, parsed);
    }

    #[test]
    fn test_id_rejects_garbage() {
        assert!(LeadId::from_str("not-a-uuid").is_err());
    }
}
