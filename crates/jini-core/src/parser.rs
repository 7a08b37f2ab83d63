//! Single-pass INI parser.
//!
//! Parsing is total: any text maps to some combination of comment, raw,
//! key/value and continuation lines. The line-break convention is decided
//! by majority vote once every line has been seen.

use crate::types::{Entry, LineBreak, Section};

/// Result of parsing a document body.
#[derive(Debug)]
pub(crate) struct Parsed {
    pub sections: Vec<Section>,
    pub line_break: LineBreak,
}

/// Classification of a single physical line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Comment(&'a str),
    Header(&'a str),
    Assignment { key: &'a str, value: &'a str },
    Other(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.starts_with(';') {
        return Line::Comment(&line.trim_start()[1..]);
    }
    // `[]` names nothing; it is kept as an ordinary line.
    if trimmed.len() > 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
        return Line::Header(&trimmed[1..trimmed.len() - 1]);
    }
    // `=` must leave room for a key on the left and a value on the right,
    // judged on the trimmed line so leading blanks never yield an empty key.
    if let Some(idx) = trimmed.find('=') {
        if idx > 0 && idx < trimmed.len() - 1 {
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if !key.is_empty() {
                    return Line::Assignment { key, value };
                }
            }
        }
    }
    Line::Other(line)
}

/// Parse `text` into sections.
///
/// `default_line_break` is used only when the text holds no line feed.
pub(crate) fn parse(text: &str, default_line_break: LineBreak) -> Parsed {
    let mut sections = vec![Section::default()];
    if text.is_empty() {
        return Parsed {
            sections,
            line_break: default_line_break,
        };
    }

    let line_feeds = text.matches('\n').count();
    let mut lines: Vec<&str> = text.split('\n').collect();
    if text.ends_with('\n') {
        lines.pop();
    }

    let mut crlf_lines = 0usize;
    for (idx, raw) in lines.into_iter().enumerate() {
        let line = match raw.strip_suffix('\r') {
            Some(stripped) => {
                if idx < line_feeds {
                    crlf_lines += 1;
                }
                stripped
            }
            None => raw,
        };

        match classify(line) {
            Line::Comment(text) => current(&mut sections).entries.push(Entry::comment(text)),
            Line::Header(name) => sections.push(Section::new(name)),
            Line::Assignment { key, value } => {
                current(&mut sections)
                    .entries
                    .push(Entry::key_value(key, value));
            }
            Line::Other(line) => {
                let section = current(&mut sections);
                match section.entries.last_mut() {
                    Some(Entry::KeyValue { value, .. }) => {
                        // Joined with LF for now; re-joined below once the vote is in.
                        value.push('\n');
                        value.push_str(line);
                    }
                    _ => section.entries.push(Entry::raw(line)),
                }
            }
        }
    }

    let line_break = detect_line_break(crlf_lines, line_feeds, default_line_break);
    if line_break == LineBreak::CrLf {
        for section in &mut sections {
            for entry in &mut section.entries {
                if let Entry::KeyValue { value, .. } = entry {
                    if value.contains('\n') {
                        *value = value.replace('\n', "\r\n");
                    }
                }
            }
        }
    }

    Parsed {
        sections,
        line_break,
    }
}

fn current(sections: &mut [Section]) -> &mut Section {
    let last = sections.len() - 1;
    &mut sections[last]
}

/// CRLF wins when at least half of the line-feed-terminated lines carry a
/// carriage return.
fn detect_line_break(crlf_lines: usize, line_feeds: usize, fallback: LineBreak) -> LineBreak {
    if line_feeds == 0 {
        fallback
    } else if crlf_lines * 2 >= line_feeds {
        LineBreak::CrLf
    } else {
        LineBreak::Lf
    }
}
