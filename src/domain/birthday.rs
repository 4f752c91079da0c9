//! Birthday value object.

use crate::error::{ValidationError, ValidationResult};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical input and output format for birthdays.
const FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// Parses a `DD.MM.YYYY` string into a real calendar date at construction
/// time, so impossible dates (February 30th, the 29th in a non-leap year)
/// are rejected. `Display` formats the date back to the canonical string.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2028").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2028");
/// assert!(Birthday::new("29.02.2025").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input does not parse
    /// as a real calendar date in that format.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();

        match NaiveDate::parse_from_str(&value, FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(value)),
        }
    }

    /// Get the parsed calendar date.
    pub fn value(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as the canonical DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - canonical DD.MM.YYYY form
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("14.10.1990").unwrap();
        assert_eq!(
            birthday.value(),
            NaiveDate::from_ymd_opt(1990, 10, 14).unwrap()
        );
    }

    #[test]
    fn test_birthday_rejects_bad_format() {
        assert!(Birthday::new("1990-10-14").is_err());
        assert!(Birthday::new("14/10/1990").is_err());
        assert!(Birthday::new("14.10").is_err());
        assert!(Birthday::new("").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("32.01.2000").is_err());
        assert!(Birthday::new("30.02.2000").is_err());
        assert!(Birthday::new("01.13.2000").is_err());
    }

    #[test]
    fn test_birthday_leap_year_rules() {
        assert!(Birthday::new("29.02.2025").is_err()); // 2025 is not a leap year
        assert!(Birthday::new("29.02.2028").is_ok());
    }

    #[test]
    fn test_birthday_error_carries_raw_input() {
        let err = Birthday::new("31.02.2000").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidBirthday("31.02.2000".to_string())
        );
    }

    #[test]
    fn test_birthday_formats_back_to_canonical_string() {
        let birthday = Birthday::new("01.02.1995").unwrap();
        assert_eq!(birthday.to_string(), "01.02.1995");
    }

    #[test]
    fn test_birthday_equality_is_by_date() {
        assert_eq!(
            Birthday::new("14.10.1990").unwrap(),
            Birthday::new("14.10.1990").unwrap()
        );
        assert_ne!(
            Birthday::new("14.10.1990").unwrap(),
            Birthday::new("15.10.1990").unwrap()
        );
    }

    #[test]
    fn test_birthday_serialization_round_trip() {
        let birthday = Birthday::new("14.10.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"14.10.1990\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }
}
