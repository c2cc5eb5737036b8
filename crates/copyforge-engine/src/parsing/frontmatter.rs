use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use super::lines::lines_with_spans;

/// The fence line that opens and closes a frontmatter block.
pub const FENCE: &str = "---";

static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9_-]+)\s*:\s*(.*?)\s*$").expect("header line pattern is valid")
});

/// Key/value metadata parsed from a document's frontmatter block.
///
/// Keys keep the order of their first appearance. A repeated key keeps that
/// position but takes the value of its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    entries: IndexMap<String, String>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Header {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut header = Header::new();
        for (k, v) in iter {
            header.insert(k, v);
        }
        header
    }
}

/// Splits `document` into its frontmatter header and body.
///
/// The document must open with a `---` line and contain a second `---` line
/// for a header to be recognised. Otherwise the header is empty and the body
/// is the whole document, untouched. The body starts right after the closing
/// fence's line terminator.
pub fn extract(document: &str) -> (Header, &str) {
    let mut lines = lines_with_spans(document);

    match lines.next() {
        Some(first) if is_fence(first.text) => {}
        _ => return (Header::new(), document),
    }

    let mut header = Header::new();
    for line in lines {
        if is_fence(line.text) {
            return (header, &document[line.span.end..]);
        }
        if let Some((key, value)) = parse_header_line(line.text) {
            header.insert(key, value);
        }
    }

    // Unterminated fence: nothing was a header after all.
    (Header::new(), document)
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

/// Parses `key: value` or `key: "value"`.
///
/// A quoted value ends at its first closing quote; anything after it is
/// dropped. An unclosed quote runs to the end of the line.
fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    let caps = HEADER_LINE.captures(line)?;
    let key = caps.get(1)?.as_str();
    let raw = caps.get(2)?.as_str();

    let value = match raw.strip_prefix('"') {
        Some(rest) => rest.split('"').next().unwrap_or(rest),
        None => raw,
    };
    Some((key, value))
}
