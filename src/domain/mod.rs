//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! names, phone numbers, email addresses, tags and birthdays. These value
//! objects provide validation at construction time and prevent invalid data
//! from being represented in the system.

pub mod address;
pub mod birthday;
pub mod content;
pub mod email;
pub mod name;
pub mod phone;
pub mod tag;
pub mod templates;
pub mod topic;

pub use address::Address;
pub use birthday::Birthday;
pub use content::Content;
pub use email::Email;
pub use name::Name;
pub use phone::Phone;
pub use tag::Tag;
pub use templates::{NameSearchTemplate, PhoneNumberSearchTemplate, TagSearchTemplate};
pub use topic::Topic;
