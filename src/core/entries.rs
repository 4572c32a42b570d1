use std::fmt;

use crate::shell::tokenizer;

/// A single `NAME=VALUE` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: Box<str>,
    value: Box<str>,
}

impl Entry {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parses `NAME=VALUE`, splitting at the first `=`.
    pub fn parse(text: &str) -> Option<Self> {
        tokenizer::split_assignment(text).map(|(name, value)| Self::new(name, value))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Ordered list of entries keyed by name.
///
/// Insertion order is preserved. Overwriting an existing name keeps its
/// position, and removing an entry shifts every later entry down by one, so
/// indices stay contiguous from zero.
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .map(Entry::value)
    }

    /// Inserts or overwrites `name`. Returns `true` when a new entry was appended.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.entries[index] = Entry::new(name, value);
                false
            }
            None => {
                self.entries.push(Entry::new(name, value));
                true
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.position(name).map(|index| self.entries.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for EntryList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (name, value) in iter {
            list.set(name.as_ref(), value.as_ref());
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_appends_in_insertion_order() {
        let mut list = EntryList::new();
        assert!(list.set("B", "2"));
        assert!(list.set("A", "1"));

        let names: Vec<&str> = list.iter().map(Entry::name).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut list: EntryList = [("A", "1"), ("B", "2"), ("C", "3")].into_iter().collect();
        assert!(!list.set("B", "two"));

        assert_eq!(list.position("B"), Some(1));
        assert_eq!(list.get("B"), Some("two"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_remove_renumbers() {
        let mut list: EntryList = [("A", "1"), ("B", "2"), ("C", "3")].into_iter().collect();

        let removed = list.remove("A").expect("A is present");
        assert_eq!(removed.to_string(), "A=1");
        assert_eq!(list.position("B"), Some(0));
        assert_eq!(list.position("C"), Some(1));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut list: EntryList = [("A", "1")].into_iter().collect();
        assert!(list.remove("NOPE").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_parse_keeps_extra_equals_and_empty_parts() {
        let entry = Entry::parse("ALIAS=a=b").expect("has '='");
        assert_eq!(entry.name(), "ALIAS");
        assert_eq!(entry.value(), "a=b");

        let entry = Entry::parse("=foo").expect("has '='");
        assert_eq!(entry.name(), "");
        assert_eq!(entry.value(), "foo");

        let entry = Entry::parse("EMPTY=").expect("has '='");
        assert_eq!(entry.value(), "");

        assert!(Entry::parse("plain").is_none());
    }
}
