//! Note model: a topic-identified piece of content with tags.

use crate::collections::Tags;
use crate::domain::{Content, Tag, Topic};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A note: a topic, its content and a list of tags.
///
/// The topic alone is the note's identity: equality and hashing ignore the
/// content and tags. Two notes on the same topic with different text compare
/// equal, which is what lets [`Notes`](crate::models::Notes) deduplicate by
/// topic on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    topic: Topic,

    content: Content,

    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    tags: Tags,
}

impl Note {
    /// Create a note with no tags.
    pub fn new(topic: Topic, content: Content) -> Self {
        Self {
            topic,
            content,
            tags: Tags::new(),
        }
    }

    /// Create a note with an initial tag list.
    pub fn with_tags(topic: Topic, content: Content, tags: Tags) -> Self {
        Self {
            topic,
            content,
            tags,
        }
    }

    /// The note's topic.
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// The note's content.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Replace the note's content.
    pub fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    /// The note's tags.
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Mutable access to the tags.
    pub fn tags_mut(&mut self) -> &mut Tags {
        &mut self.tags
    }

    /// Add a tag; `None` if an equal tag is already present.
    pub fn add_tag(&mut self, tag: Tag) -> Option<&Tag> {
        self.tags.add(tag)
    }
}

// Identity is the topic alone.
impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.topic == other.topic
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.topic.hash(state);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Note topic: '{}', content: '{}'",
            self.topic, self.content
        )?;

        let tags = self.tags.to_string();
        if !tags.is_empty() {
            write!(f, ", {}", tags)?;
        }
        write!(f, ".")
    }
}
