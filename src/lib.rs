//! rolodex - an in-memory contact and notes book with validated value objects.
//!
//! The library stores contacts (name, phones, emails, optional birthday) and
//! notes (topic, content, tags) in insertion-ordered collections, with
//! case-insensitive, substring-based search. Every scalar is a self-validating
//! value object, so invalid data cannot be represented once constructed.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (Name, Phone, Email, Tag, Topic, ...)
//! - **collections**: ordered, duplicate-free lists of one value-object type
//! - **models**: Contact/ContactBook and Note/Notes aggregates
//! - **services**: book-level operations that resolve a contact and edit it
//! - **error**: typed errors for validation, replacement and lookup failures
//!
//! Everything is synchronous and single-threaded; callers serialize access if
//! the structures are ever shared.
//!
//! # Example
//!
//! ```
//! use rolodex::domain::{Name, NameSearchTemplate, Phone};
//! use rolodex::models::{Contact, ContactBook};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut book = ContactBook::new();
//!
//! let mut contact = Contact::new(Name::new("John Smith")?);
//! contact.add_phone(Phone::new("1234567890")?);
//! book.add(contact);
//!
//! let matches = book.find_by_name(&NameSearchTemplate::new("john")?);
//! assert_eq!(matches.unwrap().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod collections;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;

pub use collections::{DistinctList, Emails, ListElement, Phones, Tags};
pub use domain::{
    Address, Birthday, Content, Email, Name, NameSearchTemplate, Phone,
    PhoneNumberSearchTemplate, Tag, TagSearchTemplate, Topic,
};
pub use error::{
    ReplaceError, ReplaceResult, UnknownContactError, ValidationError, ValidationResult,
};
pub use models::{Contact, ContactBook, Note, Notes};
