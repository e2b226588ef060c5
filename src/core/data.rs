//! Core data structures for the persisted collections
//!
//! A to-do item is a bare string; a contact is a record whose fields may all
//! be absent. Both collections keep insertion order and allow duplicates.

use crate::utils::format::or_empty;
use serde::{Deserialize, Serialize};

/// Ordered list of free-text to-do items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<String>,
}

impl TodoList {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Append an item to the end of the list
    pub fn add(&mut self, item: String) {
        self.items.push(item);
    }

    /// Remove the first item equal to `item`. Returns false and leaves the
    /// list untouched when there is no such item.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl From<Vec<String>> for TodoList {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

/// A single contact; fields are stored verbatim, absent ones as `null`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    pub fn new(name: Option<String>, phone: Option<String>, email: Option<String>) -> Self {
        Self { name, phone, email }
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            or_empty(&self.name),
            or_empty(&self.phone),
            or_empty(&self.email)
        )
    }
}

/// Ordered contact collection with no uniqueness constraint on names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Remove every contact whose name equals `name` and return how many were
    /// dropped. `None` matches contacts stored without a name.
    pub fn remove_by_name(&mut self, name: Option<&str>) -> usize {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.name.as_deref() != name);
        before - self.contacts.len()
    }
}

impl From<Vec<Contact>> for ContactBook {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> Contact {
        Contact::new(Some(name.to_string()), None, None)
    }

    #[test]
    fn test_todo_add_keeps_order_and_duplicates() {
        let mut list = TodoList::default();
        list.add("a".to_string());
        list.add("b".to_string());
        list.add("a".to_string());
        assert_eq!(list.items(), ["a", "b", "a"]);
    }

    #[test]
    fn test_todo_remove_first_match_only() {
        let mut list = TodoList::from(vec!["a".to_string(), "b".to_string(), "a".to_string()]);
        assert!(list.remove("a"));
        assert_eq!(list.items(), ["b", "a"]);
    }

    #[test]
    fn test_todo_remove_missing_is_noop() {
        let mut list = TodoList::from(vec!["a".to_string()]);
        assert!(!list.remove("z"));
        assert_eq!(list.items(), ["a"]);
    }

    #[test]
    fn test_contact_display() {
        let c = Contact::new(
            Some("Bob".to_string()),
            Some("1".to_string()),
            Some("b@x".to_string()),
        );
        assert_eq!(c.to_string(), "Name: Bob, Phone: 1, Email: b@x");
    }

    #[test]
    fn test_contact_display_absent_fields_are_empty() {
        let c = Contact::new(Some("Ann".to_string()), None, None);
        assert_eq!(c.to_string(), "Name: Ann, Phone: , Email: ");
    }

    #[test]
    fn test_contact_serializes_absent_fields_as_null() {
        let json = serde_json::to_string(&contact("Ann")).unwrap();
        assert_eq!(json, r#"{"name":"Ann","phone":null,"email":null}"#);
    }

    #[test]
    fn test_contact_missing_keys_deserialize_as_absent() {
        let c: Contact = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
        assert_eq!(c, contact("Ann"));
    }

    #[test]
    fn test_remove_by_name_removes_all_matches() {
        let mut book = ContactBook::from(vec![contact("Bob"), contact("Ann"), contact("Bob")]);
        assert_eq!(book.remove_by_name(Some("Bob")), 2);
        assert_eq!(book.contacts(), [contact("Ann")]);
    }

    #[test]
    fn test_remove_by_name_without_match() {
        let mut book = ContactBook::from(vec![contact("Ann")]);
        assert_eq!(book.remove_by_name(Some("Bob")), 0);
        assert_eq!(book.contacts(), [contact("Ann")]);
    }

    #[test]
    fn test_remove_by_absent_name_matches_unnamed() {
        let mut book = ContactBook::from(vec![Contact::default(), contact("Ann")]);
        assert_eq!(book.remove_by_name(None), 1);
        assert_eq!(book.contacts(), [contact("Ann")]);
    }
}
