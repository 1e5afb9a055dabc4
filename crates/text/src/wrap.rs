//! Greedy word wrapping by display width.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;
use unicode_width::UnicodeWidthStr;

/// Width used by [`WrapOptions::default`].
pub const DEFAULT_WIDTH: usize = 80;

/// How [`wrap_with`] lays out text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct WrapOptions {
    /// Maximum display width of a line. Zero is treated as one.
    pub width: usize,
    /// Split words wider than `width` across lines instead of letting them
    /// overflow.
    pub break_long_words: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            break_long_words: true,
        }
    }
}

impl WrapOptions {
    /// Options for lines of at most `width` columns.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Set whether long words are split.
    #[must_use]
    pub const fn break_long_words(mut self, enabled: bool) -> Self {
        self.break_long_words = enabled;
        self
    }
}

/// Wrap `text` to `width` columns. See [`wrap_with`].
///
/// ```
/// use datakit_text::wrap;
///
/// assert_eq!(wrap("the quick brown fox", 10), "the quick\nbrown fox");
/// ```
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    wrap_with(text, &WrapOptions::new(width))
}

/// Wrap `text` according to `options`.
///
/// Paragraphs are separated by blank lines and wrapped independently. Within
/// a paragraph, line breaks and runs of whitespace collapse to single
/// spaces. Paragraphs are rejoined with exactly one blank line and the
/// result has no trailing newline.
#[must_use]
pub fn wrap_with(text: &str, options: &WrapOptions) -> String {
    let width = options.width.max(1);
    let paragraphs = paragraphs(text);
    trace!(paragraphs = paragraphs.len(), width, "Wrapping text");

    paragraphs
        .iter()
        .map(|words| fill(words, width, options.break_long_words).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Words of each blank-line separated paragraph.
fn paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.extend(line.split_whitespace());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

fn fill(words: &[&str], width: usize, break_long_words: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in words {
        let word_width = word.width();

        if break_long_words && word_width > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let mut chunks = split_by_width(word, width);
            let last = chunks.pop().unwrap_or_default();
            lines.extend(chunks);
            line_width = last.width();
            line = last;
        } else if line.is_empty() {
            line.push_str(word);
            line_width = word_width;
        } else if line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
        } else {
            lines.push(std::mem::replace(&mut line, (*word).to_string()));
            line_width = word_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Split `word` into chunks of at most `width` columns. A single character
/// wider than `width` gets a chunk of its own.
fn split_by_width(word: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0;

    for c in word.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if !chunk.is_empty() && chunk_width + char_width > width {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(c);
        chunk_width += char_width;
    }

    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}
