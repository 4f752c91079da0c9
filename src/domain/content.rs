//! Content value object.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for note content.
///
/// The trimmed input must be 1 to 512 characters long; the stored value keeps
/// the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content(String);

impl Content {
    /// Create a new Content, validating the trimmed length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidContent` if the trimmed input is
    /// empty or longer than 512 characters.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();

        let trimmed_len = value.trim().chars().count();
        if !(1..=512).contains(&trimmed_len) {
            return Err(ValidationError::InvalidContent(value));
        }

        Ok(Self(value))
    }

    /// Get the content as a string slice (original, untrimmed form).
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Content {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Content {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Content::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
