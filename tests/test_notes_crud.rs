//! End-to-end tests for Notes operations.
//!
//! These tests cover topic-keyed add/find/remove, the topic-only identity of
//! notes and tag editing on a stored note.

use rolodex::collections::Tags;
use rolodex::domain::{Content, Tag, TagSearchTemplate, Topic};
use rolodex::error::ReplaceError;
use rolodex::models::{Note, Notes};

fn note(topic: &str, content: &str) -> Note {
    Note::new(Topic::new(topic).unwrap(), Content::new(content).unwrap())
}

#[test]
fn test_notes_crud_lifecycle() {
    let mut notes = Notes::new();

    assert!(notes.add(note("groceries", "Buy milk")).is_some());
    assert!(notes.add(note("chores", "Clean the garage")).is_some());
    assert_eq!(notes.len(), 2);

    let found = notes.find(&Topic::new("groceries").unwrap()).unwrap();
    assert_eq!(found.content().value(), "Buy milk");

    let removed = notes.remove(&Topic::new("GROCERIES").unwrap()).unwrap();
    assert_eq!(removed.content().value(), "Buy milk");
    assert_eq!(notes.len(), 1);
}

#[test]
fn test_same_topic_different_content_is_a_duplicate() {
    let mut notes = Notes::new();
    notes.add(note("groceries", "Buy milk"));

    // Identity is the topic alone; the second note is rejected even though
    // its content differs.
    assert!(notes.add(note("groceries", "Buy bread")).is_none());
    assert_eq!(notes.len(), 1);
    assert_eq!(
        notes
            .find(&Topic::new("groceries").unwrap())
            .unwrap()
            .content()
            .value(),
        "Buy milk"
    );
}

#[test]
fn test_tags_on_a_stored_note() {
    let mut notes = Notes::new();

    let mut tags = Tags::new();
    tags.add(Tag::new("shopping").unwrap());
    notes.add(Note::with_tags(
        Topic::new("groceries").unwrap(),
        Content::new("Buy milk").unwrap(),
        tags,
    ));

    let stored = notes.find_mut(&Topic::new("groceries").unwrap()).unwrap();

    // Duplicate tag differs only in case.
    assert!(stored.add_tag(Tag::new("SHOPPING").unwrap()).is_none());

    stored.add_tag(Tag::new("weekend").unwrap());
    assert_eq!(stored.tags().len(), 2);

    // Replace with a conflicting tag fails with the tag error kind.
    let err = stored
        .tags_mut()
        .replace(&Tag::new("weekend").unwrap(), Tag::new("shopping").unwrap())
        .unwrap_err();
    assert_eq!(err, ReplaceError::AlreadyTag("shopping".to_string()));

    // Substring containment is over the stored tag values.
    assert!(stored.tags().contains(&TagSearchTemplate::new("shop").unwrap()));
    assert!(!stored.tags().contains(&TagSearchTemplate::new("missing").unwrap()));
}

#[test]
fn test_notes_render_one_per_line() {
    let mut notes = Notes::new();
    notes.add(note("one", "first"));
    notes.add(note("two", "second"));

    let rendered = notes.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("'one'"));
    assert!(lines[1].contains("'two'"));
}

#[test]
fn test_notes_serde_round_trip() {
    let mut notes = Notes::new();
    let mut tagged = note("groceries", "Buy milk");
    tagged.add_tag(Tag::new("shopping").unwrap());
    notes.add(tagged);

    let json = serde_json::to_string(&notes).unwrap();
    let back: Notes = serde_json::from_str(&json).unwrap();

    let stored = back.find(&Topic::new("groceries").unwrap()).unwrap();
    assert_eq!(stored.content().value(), "Buy milk");
    assert_eq!(stored.tags().len(), 1);
}
