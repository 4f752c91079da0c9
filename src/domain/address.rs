//! Address value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for a contact's address.
///
/// Addresses carry no length constraint, so construction is infallible.
/// Equality is case-insensitive.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create a new Address.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the address as a string slice.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

// Display support
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
