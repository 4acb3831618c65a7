//! Parse the leading `---` block of a CMS markdown document into flat key/value fields.
//!
//! This is deliberately not a YAML parser. Content files produced by the CMS only
//! use a small subset of YAML, and the fields are consumed as plain strings:
//!
//! - `key: value` scalars, optionally quoted
//! - `key: |` block scalars whose lines are indented by two spaces
//! - `key:` followed by indented `- item` lines (stored one item per line)
//! - `key: [a, b]` flow sequences (kept verbatim, split by [`Frontmatter::list`])

use std::collections::BTreeMap;


const DELIMITER: &str = "---";

/// Indentation stripped from block scalar continuation lines.
const BLOCK_INDENT: &str = "  ";

/// Flat string fields parsed from a document's frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: BTreeMap<String, String>,
}

impl Frontmatter {
    /// Non-empty value for `key`.
    ///
    /// Empty values are treated as unset, so callers never render a blank target.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Items of a list-valued field.
    ///
    /// Flow sequences (`[a, b]`) are split on commas, block sequences were stored
    /// one item per line, and any other value is a single item.
    pub fn list(&self, key: &str) -> Vec<String> {
        let Some(value) = self.get(key) else {
            return Vec::new();
        };

        if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
            return inner
                .split(',')
                .map(|item| unquote(item.trim()).trim())
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
        }

        value
            .lines()
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_string(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse the frontmatter of `text`.
///
/// A document without a leading `---` block yields empty fields rather than an error.
pub fn parse(text: &str) -> Frontmatter {
    parse_with_body(text).0
}

/// Parse the frontmatter of `text` and return the markdown body that follows it.
///
/// Without frontmatter the whole text is the body.
pub fn parse_with_body(text: &str) -> (Frontmatter, String) {
    match split_document(text) {
        Some((block, body)) => (parse_block(block), body.to_string()),
        None => (Frontmatter::default(), text.to_string()),
    }
}

/// Split a document into its frontmatter block and the body after the closing delimiter.
///
/// The opening delimiter must be the very first line. The block ends at the first
/// following line that starts with `---`.
fn split_document(text: &str) -> Option<(&str, &str)> {
    // Editors on Windows like to start files with a byte order mark.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let rest = text.strip_prefix(DELIMITER)?;
    let newline = rest.find('\n')?;
    if !rest[..newline].trim().is_empty() {
        return None;
    }
    let inner = &rest[newline + 1..];

    let (block, after) = if let Some(after) = inner.strip_prefix(DELIMITER) {
        ("", after)
    } else {
        let close = inner.find("\n---")?;
        (&inner[..close], &inner[close + 1 + DELIMITER.len()..])
    };

    // The remainder of the closing line is not part of the body.
    let body = after.find('\n').map_or("", |i| &after[i + 1..]);
    Some((block, body))
}

/// Multi-line value being accumulated across lines.
enum Pending<'a> {
    Block { key: &'a str, lines: Vec<&'a str> },
    Sequence { key: &'a str, items: Vec<&'a str> },
}

impl Pending<'_> {
    fn flush(self, fields: &mut Frontmatter) {
        match self {
            Pending::Block { key, lines } => fields.insert(key, lines.join("\n").trim()),
            Pending::Sequence { key, items } if !items.is_empty() => {
                fields.insert(key, items.join("\n"));
            }
            Pending::Sequence { .. } => {}
        }
    }
}

fn parse_block(block: &str) -> Frontmatter {
    let mut fields = Frontmatter::default();
    let mut pending: Option<Pending<'_>> = None;

    for raw in block.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        match pending.as_mut() {
            Some(Pending::Block { lines, .. }) => {
                if line.trim().is_empty() {
                    lines.push("");
                    continue;
                }
                if let Some(continuation) = line.strip_prefix(BLOCK_INDENT) {
                    lines.push(continuation);
                    continue;
                }
            }
            Some(Pending::Sequence { items, .. }) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Some(item) = sequence_item(line) {
                    let item = unquote(item);
                    if !item.is_empty() {
                        items.push(item);
                    }
                    continue;
                }
            }
            None => {}
        }

        // The line did not continue the pending value, so that value is complete.
        if let Some(done) = pending.take() {
            done.flush(&mut fields);
        }

        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            continue;
        }

        if is_block_indicator(value) {
            pending = Some(Pending::Block {
                key,
                lines: Vec::new(),
            });
        } else if value.is_empty() {
            fields.insert(key, "");
            pending = Some(Pending::Sequence {
                key,
                items: Vec::new(),
            });
        } else {
            fields.insert(key, unquote(value));
        }
    }

    if let Some(done) = pending {
        done.flush(&mut fields);
    }

    fields
}

fn is_block_indicator(value: &str) -> bool {
    matches!(value, "|" | "|-" | "|+")
}

/// Item text of a `- item` line, indented or not.
fn sequence_item(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed == "-" {
        return Some("");
    }
    trimmed.strip_prefix("- ").map(str::trim)
}

/// Strip one leading and one trailing quote character.
fn unquote(value: &str) -> &str {
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}
