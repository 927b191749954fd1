//! Strongly-typed names used as identifiers across the domain.
//!
//! The backend keys pharmacies and medicines by their display names, so these
//! are string newtypes rather than opaque ids.
//!
//! Names built with `From` or deserialized from the backend are kept verbatim,
//! because the backend must get back exactly the key it sent. Names typed by a
//! user go through `FromStr`, which trims. [`MedicineName::matches`] bridges the
//! two by comparing trimmed forms.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Name of a pharmacy (unique across the system).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PharmacyName(String);

/// Name of a medicine (unique within one pharmacy's inventory).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MedicineName(String);

macro_rules! impl_name_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Equal up to surrounding whitespace.
            pub fn matches(&self, other: &str) -> bool {
                self.0.trim() == other.trim()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        /// Parsing trims surrounding whitespace and rejects empty names.
        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_name(format!(
                        "{} cannot be empty",
                        $name
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

impl_name_newtype!(PharmacyName, "PharmacyName");
impl_name_newtype!(MedicineName, "MedicineName");
