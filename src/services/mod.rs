//! Book-level operations.
//!
//! Each function resolves a contact in a [`ContactBook`] by name and applies
//! one edit to it, raising [`UnknownContactError`] when the named contact is
//! missing. The collection-level contract is passed through unchanged: an
//! edit that hits a duplicate reports `Ok(None)` rather than an error.

use crate::domain::{Birthday, Email, Name, Phone};
use crate::error::UnknownContactError;
use crate::models::{Contact, ContactBook};
use tracing::debug;

/// Add an email address to the named contact.
///
/// Returns the contact when the email was added, or `Ok(None)` when the
/// contact already had it.
///
/// # Errors
///
/// Returns `UnknownContactError` if no contact with that name exists.
pub fn add_email<'a>(
    book: &'a mut ContactBook,
    name: &Name,
    email: Email,
) -> Result<Option<&'a Contact>, UnknownContactError> {
    let contact = book
        .find_mut(name)
        .ok_or_else(|| UnknownContactError(name.value().to_string()))?;

    if contact.add_email(email).is_none() {
        return Ok(None);
    }

    debug!(name = name.value(), "email added to contact");
    Ok(Some(contact))
}

/// Add a phone number to the named contact.
///
/// Returns the contact when the number was added, or `Ok(None)` when the
/// contact already had it.
///
/// # Errors
///
/// Returns `UnknownContactError` if no contact with that name exists.
pub fn add_phone<'a>(
    book: &'a mut ContactBook,
    name: &Name,
    phone: Phone,
) -> Result<Option<&'a Contact>, UnknownContactError> {
    let contact = book
        .find_mut(name)
        .ok_or_else(|| UnknownContactError(name.value().to_string()))?;

    if contact.add_phone(phone).is_none() {
        return Ok(None);
    }

    debug!(name = name.value(), "phone added to contact");
    Ok(Some(contact))
}

/// Set the named contact's birthday, replacing any existing one.
///
/// # Errors
///
/// Returns `UnknownContactError` if no contact with that name exists.
pub fn set_birthday<'a>(
    book: &'a mut ContactBook,
    name: &Name,
    birthday: Birthday,
) -> Result<&'a Contact, UnknownContactError> {
    let contact = book
        .find_mut(name)
        .ok_or_else(|| UnknownContactError(name.value().to_string()))?;

    contact.set_birthday(birthday);
    debug!(name = name.value(), "birthday set on contact");
    Ok(contact)
}
