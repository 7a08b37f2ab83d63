//! Serializer: renders sections back to INI text.

use crate::types::{Entry, LineBreak, Section};

/// Render `sections` using `line_break` after every line.
pub(crate) fn render(sections: &[Section], line_break: LineBreak) -> String {
    let eol = line_break.as_str();
    let mut out = String::new();

    for section in sections {
        if !section.is_global() {
            out.push('[');
            out.push_str(&section.name);
            out.push(']');
            out.push_str(eol);
        }
        for entry in &section.entries {
            match entry {
                Entry::Comment { text } => {
                    out.push(';');
                    out.push_str(text);
                }
                Entry::Raw { line } => out.push_str(line),
                Entry::KeyValue { key, .. } if key.is_empty() => continue,
                Entry::KeyValue { key, value } => {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                }
            }
            out.push_str(eol);
        }
    }

    out
}
