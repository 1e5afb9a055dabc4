//! Small cleanups for terminal text.

use regex::Regex;
use std::sync::LazyLock;

/// Matches SGR-style escape sequences (`ESC ... m`).
static ANSI_SEQUENCE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\x1b[^m]*m").ok());

/// Uppercase the first character of `text`, leaving the rest unchanged.
///
/// ```
/// use datakit_text::ucfirst;
///
/// assert_eq!(ucfirst("hello World"), "Hello World");
/// ```
#[must_use]
pub fn ucfirst(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Remove ANSI color and style sequences from `text`.
#[must_use]
pub fn remove_ansi(text: &str) -> String {
    match ANSI_SEQUENCE.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

/// Remove trailing spaces from every line of `text`.
#[must_use]
pub fn strip_trailing_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| line.trim_end_matches(' '))
        .collect::<Vec<_>>()
        .join("\n")
}
