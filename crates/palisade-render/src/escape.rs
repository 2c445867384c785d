//! HTML entity escaping for untrusted-ish fragments.

/// Escape the five HTML-significant characters: `& < > " '`.
///
/// Applied to implementation-guidance items and contributor names before
/// insertion. Framework descriptions are trusted authoring content and are
/// substituted raw.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
