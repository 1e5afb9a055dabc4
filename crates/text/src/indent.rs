//! Indenting blocks of text.

/// One level of indentation.
pub const INDENT_UNIT: &str = "  ";

/// Indent every non-blank line of `text` by `levels` units of two spaces.
///
/// ```
/// use datakit_text::indent;
///
/// assert_eq!(indent("a\n\nb\n", 1), "  a\n\n  b\n");
/// ```
#[must_use]
pub fn indent(text: &str, levels: usize) -> String {
    indent_with(text, &INDENT_UNIT.repeat(levels))
}

/// Prefix every non-blank line of `text` with `prefix`.
///
/// Blank and whitespace-only lines are left alone. Line endings, including
/// a trailing newline, are kept.
#[must_use]
pub fn indent_with(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            out.push_str(prefix);
        }
        out.push_str(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_levels() {
        assert_eq!(indent("a\nb", 0), "a\nb");
        assert_eq!(indent("a\nb", 2), "    a\n    b");
    }

    #[test]
    fn test_blank_lines_untouched() {
        assert_eq!(indent("a\n   \nb", 1), "  a\n   \n  b");
    }

    #[test]
    fn test_trailing_newline_kept() {
        assert_eq!(indent("a\n", 1), "  a\n");
        assert_eq!(indent("", 3), "");
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(indent_with("x\r\ny", "> "), "> x\r\n> y");
    }
}
