//! ContactBook: a name-keyed, insertion-ordered store of contacts.

use crate::domain::{Name, NameSearchTemplate, PhoneNumberSearchTemplate};
use crate::models::Contact;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// A store of contacts keyed by name.
///
/// Holds at most one contact per name, with name equality being
/// case-insensitive. Contacts keep their insertion order, which is the order
/// search results and string rendering come back in. Lookups are linear
/// scans; the book is not a hash map so ordering never depends on key
/// hashing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Insert a contact unless its name is already taken.
    ///
    /// First write wins: when a contact with an equal name exists, the book
    /// is left untouched and `None` is returned.
    pub fn add(&mut self, contact: Contact) -> Option<&Contact> {
        if self.find(contact.name()).is_some() {
            debug!(name = contact.name().value(), "contact name already taken");
            return None;
        }

        debug!(name = contact.name().value(), "contact added");
        self.contacts.push(contact);
        self.contacts.last()
    }

    /// Look up a contact by exact name equality.
    pub fn find(&self, name: &Name) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.name() == name)
    }

    /// Look up a contact by exact name equality, mutably.
    pub fn find_mut(&mut self, name: &Name) -> Option<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|contact| contact.name() == name)
    }

    /// All contacts whose name contains the template, case-folded.
    ///
    /// Results come back in insertion order. Returns `None` - not an empty
    /// vector - when nothing matches.
    pub fn find_by_name(&self, template: &NameSearchTemplate) -> Option<Vec<&Contact>> {
        let matches: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|contact| contact.name().value().to_lowercase().contains(template.value()))
            .collect();

        if matches.is_empty() {
            return None;
        }
        Some(matches)
    }

    /// All contacts with a phone number containing the template.
    ///
    /// Results come back in insertion order. Returns `None` - not an empty
    /// vector - when nothing matches.
    pub fn find_by_phone(&self, template: &PhoneNumberSearchTemplate) -> Option<Vec<&Contact>> {
        let matches: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|contact| contact.contains_phone(template))
            .collect();

        if matches.is_empty() {
            return None;
        }
        Some(matches)
    }

    /// Remove and return the contact with the given name, if present.
    pub fn delete(&mut self, name: &Name) -> Option<Contact> {
        let index = self
            .contacts
            .iter()
            .position(|contact| contact.name() == name)?;

        debug!(name = name.value(), "contact deleted");
        Some(self.contacts.remove(index))
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the book is empty.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over the contacts in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

impl fmt::Display for ContactBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContactBook")?;
        for contact in &self.contacts {
            write!(f, "\n{}", contact)?;
        }
        Ok(())
    }
}

// Serde support - serialize as a plain sequence of contacts
impl Serialize for ContactBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.contacts.serialize(serializer)
    }
}

// Serde support - deserialize from a sequence, rejecting duplicate names
impl<'de> Deserialize<'de> for ContactBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let contacts = Vec::<Contact>::deserialize(deserializer)?;

        let mut book = Self::new();
        for contact in contacts {
            let name = contact.name().value().to_string();
            if book.add(contact).is_none() {
                return Err(D::Error::custom(format!("duplicate contact name '{}'", name)));
            }
        }
        Ok(book)
    }
}
