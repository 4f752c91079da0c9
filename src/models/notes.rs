//! Notes: an ordered, topic-deduplicated store of notes.

use crate::domain::Topic;
use crate::models::Note;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// An ordered collection of notes, deduplicated by topic.
///
/// Topic matching everywhere uses `Topic` equality, which is
/// case-insensitive. Notes keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notes {
    notes: Vec<Note>,
}

impl Notes {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Append a note unless one with an equal topic exists.
    ///
    /// Returns a reference to the stored note on success, or `None` without
    /// mutation when the topic is already taken.
    pub fn add(&mut self, note: Note) -> Option<&Note> {
        if self.index_of(note.topic()).is_some() {
            debug!(topic = note.topic().value(), "note topic already taken");
            return None;
        }

        debug!(topic = note.topic().value(), "note added");
        self.notes.push(note);
        self.notes.last()
    }

    /// Remove and return the first note with the given topic, if any.
    pub fn remove(&mut self, topic: &Topic) -> Option<Note> {
        let index = self.index_of(topic)?;
        debug!(topic = topic.value(), "note removed");
        Some(self.notes.remove(index))
    }

    /// The first note with the given topic, if any.
    pub fn find(&self, topic: &Topic) -> Option<&Note> {
        let index = self.index_of(topic)?;
        self.notes.get(index)
    }

    /// The first note with the given topic, mutably.
    pub fn find_mut(&mut self, topic: &Topic) -> Option<&mut Note> {
        let index = self.index_of(topic)?;
        self.notes.get_mut(index)
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterate over the notes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Index of the first note with the given topic.
    fn index_of(&self, topic: &Topic) -> Option<usize> {
        self.notes.iter().position(|note| note.topic() == topic)
    }
}

impl<'a> IntoIterator for &'a Notes {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl fmt::Display for Notes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for note in &self.notes {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}", note)?;
            first = false;
        }
        Ok(())
    }
}

// Serde support - serialize as a plain sequence of notes
impl Serialize for Notes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.notes.serialize(serializer)
    }
}

// Serde support - deserialize from a sequence, rejecting duplicate topics
impl<'de> Deserialize<'de> for Notes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let notes = Vec::<Note>::deserialize(deserializer)?;

        let mut collection = Self::new();
        for note in notes {
            let topic = note.topic().value().to_string();
            if collection.add(note).is_none() {
                return Err(D::Error::custom(format!("duplicate note topic '{}'", topic)));
            }
        }
        Ok(collection)
    }
}
