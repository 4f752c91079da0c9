//! Substring search templates.
//!
//! Templates are validated, non-empty search strings used for containment
//! matching against stored values. They normalize at construction time, so
//! search code never re-trims or re-folds.

use crate::error::{ValidationError, ValidationResult};
use std::fmt;

/// A validated substring template for searching contact names.
///
/// The input is trimmed and case-folded at construction; name search compares
/// it against the folded name value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSearchTemplate(String);

impl NameSearchTemplate {
    /// Create a new template from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidNameSearchTemplate` if the input is
    /// empty after trimming.
    pub fn new(template: impl Into<String>) -> ValidationResult<Self> {
        let template = template.into();

        let trimmed = template.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidNameSearchTemplate(template));
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    /// Get the normalized (trimmed, case-folded) template value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameSearchTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated substring template for searching phone numbers.
///
/// The input is trimmed but not folded; phone search is a literal digit
/// substring match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumberSearchTemplate(String);

impl PhoneNumberSearchTemplate {
    /// Create a new template from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneNumberSearchTemplate` if the
    /// input is empty after trimming.
    pub fn new(template: impl Into<String>) -> ValidationResult<Self> {
        let template = template.into();

        let trimmed = template.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidPhoneNumberSearchTemplate(template));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the trimmed template value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumberSearchTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated substring template for searching tags.
///
/// The input is trimmed but not folded; tag search matches against the tag
/// value as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSearchTemplate(String);

impl TagSearchTemplate {
    /// Create a new template from raw input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTagSearchTemplate` if the input is
    /// empty after trimming.
    pub fn new(template: impl Into<String>) -> ValidationResult<Self> {
        let template = template.into();

        let trimmed = template.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidTagSearchTemplate(template));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the trimmed template value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagSearchTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
