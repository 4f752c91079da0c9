//! Aggregate models: contacts, the contact book, notes and the notes store.
//!
//! Aggregates own their value objects and collections exclusively and enforce
//! the invariants that span them (one contact per name, one note per topic).

pub mod contact;
pub mod contact_book;
pub mod note;
pub mod notes;

pub use contact::Contact;
pub use contact_book::ContactBook;
pub use note::Note;
pub use notes::Notes;
