//! Contact model: a named entry owning phone numbers, emails and a birthday.

use crate::collections::{Emails, Phones};
use crate::domain::{Birthday, Email, Name, Phone, PhoneNumberSearchTemplate};
use crate::error::ReplaceResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the book.
///
/// The name is the contact's identity and is immutable after construction;
/// phone numbers, emails and the birthday are edited through the methods
/// below, which delegate to the owned collections and preserve their
/// return and error contracts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    name: Name,

    #[serde(default, skip_serializing_if = "Phones::is_empty")]
    phones: Phones,

    #[serde(default, skip_serializing_if = "Emails::is_empty")]
    emails: Emails,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Contact {
    /// Create a contact with the given name and no other data.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Phones::new(),
            emails: Emails::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers.
    pub fn phones(&self) -> &Phones {
        &self.phones
    }

    /// Mutable access to the phone numbers.
    pub fn phones_mut(&mut self) -> &mut Phones {
        &mut self.phones
    }

    /// The contact's email addresses.
    pub fn emails(&self) -> &Emails {
        &self.emails
    }

    /// Mutable access to the email addresses.
    pub fn emails_mut(&mut self) -> &mut Emails {
        &mut self.emails
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number; `None` if it is already present.
    pub fn add_phone(&mut self, phone: Phone) -> Option<&Phone> {
        self.phones.add(phone)
    }

    /// Remove a phone number; `None` if it is absent.
    pub fn remove_phone(&mut self, phone: &Phone) -> Option<Phone> {
        self.phones.remove(phone)
    }

    /// Replace a phone number in place.
    ///
    /// # Errors
    ///
    /// `UnknownPhoneNumber` if `old` is absent, `AlreadyPhoneNumber` if `new`
    /// is already present.
    pub fn replace_phone(&mut self, old: &Phone, new: Phone) -> ReplaceResult<&Phone> {
        self.phones.replace(old, new)
    }

    /// Add an email address; `None` if it is already present.
    pub fn add_email(&mut self, email: Email) -> Option<&Email> {
        self.emails.add(email)
    }

    /// Remove an email address; `None` if it is absent.
    pub fn remove_email(&mut self, email: &Email) -> Option<Email> {
        self.emails.remove(email)
    }

    /// Replace an email address in place.
    ///
    /// # Errors
    ///
    /// `UnknownEmail` if `old` is absent, `AlreadyEmail` if `new` is already
    /// present.
    pub fn replace_email(&mut self, old: &Email, new: Email) -> ReplaceResult<&Email> {
        self.emails.replace(old, new)
    }

    /// Set the birthday, replacing any existing one.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Clear the birthday, returning the previous value.
    ///
    /// Clearing an already-absent birthday is not an error.
    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Whether any of the contact's phone numbers contains the template.
    pub fn contains_phone(&self, template: &PhoneNumberSearchTemplate) -> bool {
        self.phones.contains(template)
    }
}

// Each section renders only when non-empty; the collection renderers return
// an empty string for empty lists, which is what gates the separator.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}", self.name)?;

        let phones = self.phones.to_string();
        if !phones.is_empty() {
            write!(f, ", {}", phones)?;
        }

        let emails = self.emails.to_string();
        if !emails.is_empty() {
            write!(f, ", {}", emails)?;
        }

        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }

        Ok(())
    }
}
