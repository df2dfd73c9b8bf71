use std::collections::{HashMap, hash_map::Entry};

use crate::core::validate::TemplateLookup;

/// Position of a message definition in a `.properties` file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the properties file (e.g., "./src/main/resources/messages.properties").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

/// A single `key=value` definition from a properties file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub key: String,
    /// The message template, trimmed. May contain `{n}` placeholders.
    pub value: String,
    pub location: MessageLocation,
}

impl MessageEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, location: MessageLocation) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            location,
        }
    }
}

/// All message definitions loaded from the configured properties files.
///
/// When several files define the same key, the first definition loaded wins.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    entries: HashMap<String, MessageEntry>,
    files: Vec<String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a properties file contributed to this catalog.
    pub fn add_file(&mut self, file_path: impl Into<String>) {
        self.files.push(file_path.into());
    }

    /// Insert an entry unless the key is already defined.
    ///
    /// Returns false when an earlier definition shadows this one.
    pub fn insert(&mut self, entry: MessageEntry) -> bool {
        match self.entries.entry(entry.key.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = MessageEntry>) {
        for entry in entries {
            self.insert(entry);
        }
    }

    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Entries whose key contains `filter`, case-insensitively, sorted by key.
    ///
    /// An empty filter returns every entry.
    pub fn search(&self, filter: &str) -> Vec<&MessageEntry> {
        let needle = filter.to_lowercase();
        let mut found: Vec<&MessageEntry> = self
            .entries
            .values()
            .filter(|entry| needle.is_empty() || entry.key.to_lowercase().contains(&needle))
            .collect();
        found.sort_by(|a, b| a.key.cmp(&b.key));
        found
    }

    /// Properties files that were loaded, in load order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TemplateLookup for MessageCatalog {
    fn template(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.value.as_str())
    }
}
