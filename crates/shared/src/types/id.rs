//! Typed IDs for accounts and banks.
//!
//! Each entity gets its own newtype so a `BankId` can never stand in for an
//! `AccountId`. Ids are UUID v7 and only ever minted, compared and logged.

use uuid::Uuid;

macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Mints a fresh, time-ordered id.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

typed_id!(AccountId, "Identifies a customer account for its whole life.");
typed_id!(BankId, "Identifies a bank; account back-references point at it.");
