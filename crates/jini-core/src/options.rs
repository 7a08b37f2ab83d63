//! Load and save options.

use serde::{Deserialize, Serialize};

use crate::types::LineBreak;

/// Options controlling how a document is loaded or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Create an empty file when the source does not exist
    pub create_if_missing: bool,

    /// Line break used when the content has no line feed to vote with
    pub default_line_break: LineBreak,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    pub fn default_line_break(mut self, line_break: LineBreak) -> Self {
        self.default_line_break = line_break;
        self
    }
}

/// Options controlling how a document is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOptions {
    /// Write to a sibling temp file and rename it over the destination
    pub atomic: bool,
}

impl SaveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
}
