//! Ordered, duplicate-free collections of value objects.
//!
//! `Phones`, `Emails` and `Tags` share one linear-scan implementation,
//! [`DistinctList`], parameterized by the element type. Elements are kept in
//! insertion order and deduplicated by their own equality, which is
//! case-insensitive for tags and exact for phones and emails.

use crate::domain::{Email, Phone, PhoneNumberSearchTemplate, Tag, TagSearchTemplate};
use crate::error::{ReplaceError, ReplaceResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An element storable in a [`DistinctList`].
///
/// The trait supplies the raw string used in error messages and the
/// type-specific `replace` failure constructors, so one generic scan serves
/// all three collections without losing per-type error kinds.
pub trait ListElement: PartialEq {
    /// Raw string form of the element, used in error messages.
    fn raw(&self) -> &str;

    /// Error for replacing an element that is not in the list.
    fn unknown(raw: &str) -> ReplaceError;

    /// Error for a replacement value that is already in the list.
    fn conflict(raw: &str) -> ReplaceError;
}

impl ListElement for Phone {
    fn raw(&self) -> &str {
        self.value()
    }

    fn unknown(raw: &str) -> ReplaceError {
        ReplaceError::UnknownPhoneNumber(raw.to_string())
    }

    fn conflict(raw: &str) -> ReplaceError {
        ReplaceError::AlreadyPhoneNumber(raw.to_string())
    }
}

impl ListElement for Email {
    fn raw(&self) -> &str {
        self.value()
    }

    fn unknown(raw: &str) -> ReplaceError {
        ReplaceError::UnknownEmail(raw.to_string())
    }

    fn conflict(raw: &str) -> ReplaceError {
        ReplaceError::AlreadyEmail(raw.to_string())
    }
}

impl ListElement for Tag {
    fn raw(&self) -> &str {
        self.value()
    }

    fn unknown(raw: &str) -> ReplaceError {
        ReplaceError::UnknownTag(raw.to_string())
    }

    fn conflict(raw: &str) -> ReplaceError {
        ReplaceError::AlreadyTag(raw.to_string())
    }
}

/// An ordered sequence of distinct value objects.
///
/// Distinctness is enforced with the element type's equality on every
/// mutation; all scans are O(n). `add` and `remove` return the outcome value
/// rather than erroring on "duplicate" or "not found"; only `replace` signals
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinctList<T> {
    items: Vec<T>,
}

/// A list of phone numbers.
pub type Phones = DistinctList<Phone>;

/// A list of email addresses.
pub type Emails = DistinctList<Email>;

/// A list of tags.
pub type Tags = DistinctList<Tag>;

impl<T> DistinctList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: ListElement> DistinctList<T> {
    /// Append an element if no equal element is present.
    ///
    /// Returns a reference to the stored element on success, or `None`
    /// without mutating the list when an equal element already exists.
    pub fn add(&mut self, item: T) -> Option<&T> {
        if self.index_of(&item).is_some() {
            return None;
        }

        self.items.push(item);
        self.items.last()
    }

    /// Remove the first element equal to `item`.
    ///
    /// Returns the removed element, or `None` without mutation if no equal
    /// element exists.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        Some(self.items.remove(index))
    }

    /// Replace `old` with `new`, keeping the slot position.
    ///
    /// # Errors
    ///
    /// Returns the element type's "unknown" error if `old` is absent, or its
    /// "already used" error if `new` is already present. The list is left
    /// untouched in both cases.
    pub fn replace(&mut self, old: &T, new: T) -> ReplaceResult<&T> {
        let index = match self.index_of(old) {
            Some(index) => index,
            None => return Err(T::unknown(old.raw())),
        };

        if self.index_of(&new).is_some() {
            return Err(T::conflict(new.raw()));
        }

        self.items[index] = new;
        Ok(&self.items[index])
    }

    /// Index of the first element equal to `item`.
    fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }
}

impl DistinctList<Phone> {
    /// Whether any phone number contains the template as a literal substring.
    pub fn contains(&self, template: &PhoneNumberSearchTemplate) -> bool {
        self.items
            .iter()
            .any(|phone| phone.value().contains(template.value()))
    }
}

impl DistinctList<Tag> {
    /// Whether any tag contains the template as a substring of its stored value.
    pub fn contains(&self, template: &TagSearchTemplate) -> bool {
        self.items
            .iter()
            .any(|tag| tag.value().contains(template.value()))
    }
}

impl<T> Default for DistinctList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a DistinctList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// An empty list renders as an empty string; callers rely on that to decide
// whether to append a separator before the section.
impl fmt::Display for DistinctList<Phone> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return Ok(());
        }
        let joined: Vec<String> = self.items.iter().map(|p| p.to_string()).collect();
        write!(f, "phones: {}", joined.join("; "))
    }
}

impl fmt::Display for DistinctList<Email> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return Ok(());
        }
        let joined: Vec<String> = self.items.iter().map(|e| e.to_string()).collect();
        write!(f, "Emails: [{}]", joined.join(", "))
    }
}

impl fmt::Display for DistinctList<Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return Ok(());
        }
        let joined: Vec<String> = self.items.iter().map(|t| t.to_string()).collect();
        write!(f, "Tags: [{}]", joined.join("; "))
    }
}

// Serde support - serialize as a plain sequence of elements
impl<T: Serialize> Serialize for DistinctList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}

// Serde support - deserialize from a sequence, rejecting duplicates
impl<'de, T> Deserialize<'de> for DistinctList<T>
where
    T: Deserialize<'de> + ListElement,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;

        let mut list = Self::new();
        for item in items {
            let raw = item.raw().to_string();
            if list.add(item).is_none() {
                return Err(D::Error::custom(format!("duplicate element '{}'", raw)));
            }
        }
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(number: &str) -> Phone {
        Phone::new(number).unwrap()
    }

    fn tag(value: &str) -> Tag {
        Tag::new(value).unwrap()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut phones = Phones::new();
        assert!(phones.add(phone("1234567890")).is_some());
        assert!(phones.add(phone("0987654321")).is_some());

        let values: Vec<&str> = phones.iter().map(|p| p.value()).collect();
        assert_eq!(values, vec!["1234567890", "0987654321"]);
    }

    #[test]
    fn test_add_duplicate_is_rejected_without_mutation() {
        let mut phones = Phones::new();
        phones.add(phone("1234567890"));

        assert!(phones.add(phone("1234567890")).is_none());
        assert_eq!(phones.len(), 1);
    }

    #[test]
    fn test_add_duplicate_tag_differs_only_in_case() {
        let mut tags = Tags::new();
        tags.add(tag("Urgent"));

        assert!(tags.add(tag("urgent")).is_none());
        assert_eq!(tags.len(), 1);
        // First write wins: the stored casing is the original one.
        assert_eq!(tags.iter().next().unwrap().value(), "Urgent");
    }

    #[test]
    fn test_remove_returns_removed_element() {
        let mut phones = Phones::new();
        phones.add(phone("1234567890"));
        phones.add(phone("0987654321"));

        let removed = phones.remove(&phone("1234567890")).unwrap();
        assert_eq!(removed.value(), "1234567890");
        assert_eq!(phones.len(), 1);
    }

    #[test]
    fn test_remove_missing_returns_none() {
        let mut phones = Phones::new();
        phones.add(phone("1234567890"));

        assert!(phones.remove(&phone("0987654321")).is_none());
        assert_eq!(phones.len(), 1);
    }

    #[test]
    fn test_replace_keeps_position_and_length() {
        let mut phones = Phones::new();
        phones.add(phone("1111111111"));
        phones.add(phone("2222222222"));
        phones.add(phone("3333333333"));

        let replaced = phones
            .replace(&phone("2222222222"), phone("4444444444"))
            .unwrap();
        assert_eq!(replaced.value(), "4444444444");

        let values: Vec<&str> = phones.iter().map(|p| p.value()).collect();
        assert_eq!(values, vec!["1111111111", "4444444444", "3333333333"]);
    }

    #[test]
    fn test_replace_unknown_old_fails() {
        let mut phones = Phones::new();
        phones.add(phone("1111111111"));

        let err = phones
            .replace(&phone("9999999999"), phone("4444444444"))
            .unwrap_err();
        assert_eq!(
            err,
            ReplaceError::UnknownPhoneNumber("9999999999".to_string())
        );
        assert_eq!(phones.len(), 1);
    }

    #[test]
    fn test_replace_conflicting_new_fails() {
        let mut phones = Phones::new();
        phones.add(phone("1111111111"));
        phones.add(phone("2222222222"));

        let err = phones
            .replace(&phone("1111111111"), phone("2222222222"))
            .unwrap_err();
        assert_eq!(
            err,
            ReplaceError::AlreadyPhoneNumber("2222222222".to_string())
        );

        let values: Vec<&str> = phones.iter().map(|p| p.value()).collect();
        assert_eq!(values, vec!["1111111111", "2222222222"]);
    }

    #[test]
    fn test_email_replace_uses_email_error_kinds() {
        let mut emails = Emails::new();
        emails.add(Email::new("a@example.com").unwrap());

        let err = emails
            .replace(
                &Email::new("missing@example.com").unwrap(),
                Email::new("b@example.com").unwrap(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ReplaceError::UnknownEmail("missing@example.com".to_string())
        );

        let err = emails
            .replace(
                &Email::new("a@example.com").unwrap(),
                Email::new("a@example.com").unwrap(),
            )
            .unwrap_err();
        assert_eq!(err, ReplaceError::AlreadyEmail("a@example.com".to_string()));
    }

    #[test]
    fn test_contains_phone_substring() {
        let mut phones = Phones::new();
        phones.add(phone("1234567890"));

        let hit = PhoneNumberSearchTemplate::new("4567").unwrap();
        let miss = PhoneNumberSearchTemplate::new("999").unwrap();
        assert!(phones.contains(&hit));
        assert!(!phones.contains(&miss));
    }

    #[test]
    fn test_contains_tag_substring_is_case_sensitive() {
        let mut tags = Tags::new();
        tags.add(tag("Urgent"));

        assert!(tags.contains(&TagSearchTemplate::new("Urg").unwrap()));
        assert!(!tags.contains(&TagSearchTemplate::new("urg").unwrap()));
    }

    #[test]
    fn test_display_empty_renders_empty_string() {
        assert_eq!(Phones::new().to_string(), "");
        assert_eq!(Emails::new().to_string(), "");
        assert_eq!(Tags::new().to_string(), "");
    }

    #[test]
    fn test_display_labeled_lists() {
        let mut phones = Phones::new();
        phones.add(phone("1234567890"));
        phones.add(phone("0987654321"));
        assert_eq!(phones.to_string(), "phones: 1234567890; 0987654321");

        let mut emails = Emails::new();
        emails.add(Email::new("a@example.com").unwrap());
        assert_eq!(emails.to_string(), "Emails: [a@example.com]");

        let mut tags = Tags::new();
        tags.add(tag("urgent"));
        tags.add(tag("later"));
        assert_eq!(tags.to_string(), "Tags: [urgent; later]");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut phones = Phones::new();
        phones.add(phone("1234567890"));
        phones.add(phone("0987654321"));

        let json = serde_json::to_string(&phones).unwrap();
        assert_eq!(json, "[\"1234567890\",\"0987654321\"]");

        let back: Phones = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phones);
    }

    #[test]
    fn test_deserialize_rejects_duplicates() {
        let result: Result<Phones, _> =
            serde_json::from_str("[\"1234567890\",\"1234567890\"]");
        assert!(result.is_err());
    }
}
