//! Tag value object.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for note tags.
///
/// The trimmed input must be 1 to 32 characters long; the stored value keeps
/// the original string. Equality is case-insensitive.
#[derive(Debug, Clone, Eq)]
pub struct Tag(String);

impl Tag {
    /// Create a new Tag, validating the trimmed length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` if the trimmed input is empty or
    /// longer than 32 characters.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();

        let trimmed_len = value.trim().chars().count();
        if !(1..=32).contains(&trimmed_len) {
            return Err(ValidationError::InvalidTag(value));
        }

        Ok(Self(value))
    }

    /// Get the tag as a string slice (original, untrimmed form).
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

// Hashes the folded value so the Eq/Hash contract holds for case-insensitive
// equality.
impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded().hash(state);
    }
}

// Serde support - serialize as string
impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
