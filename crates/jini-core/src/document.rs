//! The `Ini` document: load, query, mutate, save.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{IniError, Result};
use crate::fs;
use crate::options::{LoadOptions, SaveOptions};
use crate::parser;
use crate::types::{Entry, LineBreak, Section};
use crate::writer;

/// An INI document held in memory.
///
/// Sections and entries keep file order, which is also the order they are
/// written back in. Lookups scan linearly and act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ini {
    file_name: PathBuf,
    line_break: LineBreak,
    sections: Vec<Section>,
}

impl Default for Ini {
    fn default() -> Self {
        Self {
            file_name: PathBuf::new(),
            line_break: LineBreak::default(),
            sections: vec![Section::default()],
        }
    }
}

impl Ini {
    /// Load the INI file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `IniError::NotFound` if the file does not exist and
    /// `create_if_missing` is false, or `IniError::Read` if it cannot be read.
    pub fn load(path: impl AsRef<Path>, create_if_missing: bool) -> Result<Self> {
        Self::load_with(
            path,
            &LoadOptions::new().create_if_missing(create_if_missing),
        )
    }

    /// Load the INI file at `path` using `options`.
    pub fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_source(path, options.create_if_missing)?;
        let text = String::from_utf8_lossy(&data);

        let mut ini = Self::parse_with(&text, options);
        ini.file_name = path.to_path_buf();

        debug!(
            "Loaded INI file {}: {} sections, {:?} line breaks",
            path.display(),
            ini.sections.len(),
            ini.line_break
        );
        Ok(ini)
    }

    /// Parse a document from text. The result has no file name.
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, &LoadOptions::default())
    }

    pub fn parse_with(text: &str, options: &LoadOptions) -> Self {
        let parsed = parser::parse(text, options.default_line_break);
        Self {
            file_name: PathBuf::new(),
            line_break: parsed.line_break,
            sections: parsed.sections,
        }
    }

    /// Path the document was loaded from and that `save` writes to.
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) {
        self.file_name = path.into();
    }

    pub fn line_break(&self) -> LineBreak {
        self.line_break
    }

    /// Switch the line-break convention, re-joining multi-line values.
    pub fn set_line_break(&mut self, line_break: LineBreak) {
        if line_break == self.line_break {
            return;
        }
        let (from, to) = (self.line_break.as_str(), line_break.as_str());
        for section in &mut self.sections {
            for entry in &mut section.entries {
                if let Entry::KeyValue { value, .. } = entry {
                    if value.contains(from) {
                        *value = value.replace(from, to);
                    }
                }
            }
        }
        self.line_break = line_break;
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section names in order, including the implicit `""` section.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.name.as_str())
    }

    /// First section named `name`.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.name == name)
    }

    /// Keys of the first section named `section`; empty if it is absent.
    pub fn keys<'a>(&'a self, section: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.section(section).into_iter().flat_map(Section::keys)
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.section(section).is_some()
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.section(section)
            .is_some_and(|s| s.position(key).is_some())
    }

    /// Value of `key` in `section`, or `default` when either is absent.
    ///
    /// The flag reports whether the key was found.
    pub fn get(&self, section: &str, key: &str, default: &str) -> (String, bool) {
        match self.section(section).and_then(|s| s.get(key)) {
            Some(value) => (value.to_string(), true),
            None => (default.to_string(), false),
        }
    }

    /// Set `key` in `section`, creating the section at the end if needed.
    ///
    /// An existing key is updated in place; a new key is appended.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        let value = value.into();
        let idx = match self.sections.iter().position(|s| s.name == section) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(section));
                self.sections.len() - 1
            }
        };

        let target = &mut self.sections[idx];
        match target.position(key) {
            Some(pos) => {
                if let Entry::KeyValue { value: current, .. } = &mut target.entries[pos] {
                    *current = value;
                }
            }
            None => target.entries.push(Entry::key_value(key, value)),
        }
    }

    /// Remove the first section named `section` with all its entries.
    ///
    /// The implicit global section is emptied rather than removed.
    pub fn del_section(&mut self, section: &str) {
        if section.is_empty() {
            if let Some(global) = self.section_mut("") {
                global.entries.clear();
            }
            return;
        }
        if let Some(idx) = self.sections.iter().position(|s| s.name == section) {
            self.sections.remove(idx);
        }
    }

    /// Remove the first `key` entry from `section`.
    pub fn del_key(&mut self, section: &str, key: &str) {
        if let Some(target) = self.section_mut(section) {
            if let Some(pos) = target.position(key) {
                target.entries.remove(pos);
            }
        }
    }

    /// Render the document as INI text.
    pub fn to_text(&self) -> String {
        writer::render(&self.sections, self.line_break)
    }

    /// Write the document to `path`, truncating or creating it.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_to_with(path, &SaveOptions::default())
    }

    pub fn save_to_with(&self, path: impl AsRef<Path>, options: &SaveOptions) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_text();
        if options.atomic {
            fs::write_atomic(path, text.as_bytes())?;
        } else {
            fs::write_truncate(path, text.as_bytes())?;
        }
        debug!("Saved INI file {} ({} bytes)", path.display(), text.len());
        Ok(())
    }

    /// Write the document back to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.file_name)
    }
}

impl FromStr for Ini {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Ini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
