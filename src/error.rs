//! Error types for the rolodex library.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every message carries the raw input that caused the failure, so callers can render
//! the error to a user without extra bookkeeping.

use thiserror::Error;

/// Errors raised while constructing a value object from raw input.
///
/// These are always recoverable: the caller prompts for corrected input and
/// retries with a different string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is shorter than 2 or longer than 64 characters after trimming.
    #[error("Invalid name: '{0}'. Name must not be empty and must be between 2 and 64 characters long.")]
    InvalidName(String),

    /// Phone number is not a bare 10-12 digit string.
    #[error("Invalid phone number: '{0}'.")]
    InvalidPhoneNumber(String),

    /// Email does not match the local-part@domain.tld shape.
    #[error("Invalid email: '{0}'.")]
    InvalidEmail(String),

    /// Tag is empty or longer than 32 characters after trimming.
    #[error("Invalid tag: '{0}'. Tag must not be empty and must be between 1 and 32 characters long.")]
    InvalidTag(String),

    /// Topic is empty or longer than 32 characters after trimming.
    #[error("Invalid topic: '{0}'. Topic must not be empty and must be between 1 and 32 characters long.")]
    InvalidTopic(String),

    /// Content is empty or longer than 512 characters after trimming.
    #[error("Invalid content: '{0}'. Content must not be empty and must be between 1 and 512 characters long.")]
    InvalidContent(String),

    /// Birthday is not a real calendar date in DD.MM.YYYY format.
    #[error("Invalid date format '{0}'. Use DD.MM.YYYY.")]
    InvalidBirthday(String),

    /// Name search template is empty after trimming.
    #[error("Invalid name search template: '{0}'.")]
    InvalidNameSearchTemplate(String),

    /// Phone number search template is empty after trimming.
    #[error("Invalid phone number search template: '{0}'.")]
    InvalidPhoneNumberSearchTemplate(String),

    /// Tag search template is empty after trimming.
    #[error("Invalid tag search template: '{0}'.")]
    InvalidTagSearchTemplate(String),
}

/// Errors raised by `replace` on a bounded collection.
///
/// `Unknown*` means the element to be replaced is absent; `Already*` means the
/// replacement would collide with an existing element. Neither case mutates
/// the list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplaceError {
    /// The phone number to replace is not in the list.
    #[error("Phone '{0}' is unknown.")]
    UnknownPhoneNumber(String),

    /// The replacement phone number is already in the list.
    #[error("Phone '{0}' is already used.")]
    AlreadyPhoneNumber(String),

    /// The email to replace is not in the list.
    #[error("Email '{0}' does not exist.")]
    UnknownEmail(String),

    /// The replacement email is already in the list.
    #[error("Email '{0}' is already used.")]
    AlreadyEmail(String),

    /// The tag to replace is not in the list.
    #[error("Tag '{0}' is unknown.")]
    UnknownTag(String),

    /// The replacement tag is already in the list.
    #[error("Tag '{0}' is already used.")]
    AlreadyTag(String),
}

/// Error raised by book-level operations when the named contact is missing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Contact `{0}` does not exist.")]
pub struct UnknownContactError(pub String);

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with ReplaceError
pub type ReplaceResult<T> = Result<T, ReplaceError>;
