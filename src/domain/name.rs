//! Name value object.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for contact names.
///
/// The trimmed input must be 2 to 64 characters long, but the stored value
/// keeps the original string untouched, surrounding whitespace included.
/// Equality is case-insensitive; two names differing only in case compare
/// equal and hash equal.
///
/// # Example
///
/// ```
/// use rolodex::domain::Name;
///
/// let a = Name::new("John Smith").unwrap();
/// let b = Name::new("john smith").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.value(), "John Smith");
/// ```
#[derive(Debug, Clone, Eq)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating the trimmed length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the trimmed input is shorter
    /// than 2 or longer than 64 characters.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();

        let trimmed_len = value.trim().chars().count();
        if !(2..=64).contains(&trimmed_len) {
            return Err(ValidationError::InvalidName(value));
        }

        Ok(Self(value))
    }

    /// Get the name as a string slice (original, untrimmed form).
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-folded form used for equality, hashing and substring search.
    pub(crate) fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

// Hashes the folded value so the Eq/Hash contract holds for case-insensitive
// equality.
impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
