//! Core data types for the document model.
//!
//! A document is an ordered list of sections, each an ordered list of
//! entries. Order is the serialization order.

use serde::{Deserialize, Serialize};

/// Line-break convention of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineBreak {
    /// `"\n"`
    #[default]
    Lf,

    /// `"\r\n"`
    CrLf,
}

impl LineBreak {
    pub fn as_str(self) -> &'static str {
        match self {
            LineBreak::Lf => "\n",
            LineBreak::CrLf => "\r\n",
        }
    }
}

/// One parsed line, or one logical multi-line value, inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// Text following `;`
    Comment { text: String },

    /// Raw line written back verbatim
    Raw { line: String },

    /// Assignment; `value` may contain embedded line breaks
    KeyValue { key: String, value: String },
}

impl Entry {
    pub fn comment(text: impl Into<String>) -> Self {
        Entry::Comment { text: text.into() }
    }

    pub fn raw(line: impl Into<String>) -> Self {
        Entry::Raw { line: line.into() }
    }

    pub fn key_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry::KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Key of a `KeyValue` entry; `None` for comments and raw lines.
    pub fn key(&self) -> Option<&str> {
        match self {
            Entry::KeyValue { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Entry::KeyValue { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_key_value(&self) -> bool {
        matches!(self, Entry::KeyValue { .. })
    }
}

/// A named group of entries.
///
/// The implicit global section before the first header has an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Section {
    /// Text between the header brackets
    pub name: String,

    /// Entries in file order
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn is_global(&self) -> bool {
        self.name.is_empty()
    }

    /// Index of the first `KeyValue` entry with `key`.
    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.key() == Some(key))
    }

    /// Value of the first `KeyValue` entry with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).and_then(|idx| self.entries[idx].value())
    }

    /// Keys of all `KeyValue` entries, in order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(Entry::key)
    }
}
