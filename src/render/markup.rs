//! Escaping and inline markdown

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)]
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
#[allow(clippy::unwrap_used)]
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

/// Escape text for use in element content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Convert the about text to paragraph HTML
///
/// Supports `**bold**` and `*italic*` within a line; a blank line starts a new
/// paragraph and a single newline becomes `<br>`. The text is escaped first, so
/// authored HTML shows up literally.
pub fn inline_markdown(text: &str) -> String {
    let escaped = escape_html(text.trim()).replace("\r\n", "\n");
    let html = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let html = ITALIC.replace_all(&html, "<em>$1</em>");
    let html = html.replace("\n\n", "</p><p>").replace('\n', "<br>");
    format!("<p>{}</p>", html)
}
