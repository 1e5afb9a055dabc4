//! Helpers for laying out plain and terminal text.
//!
//! Besides indenting and wrapping, the crate scores fuzzy string matches
//! and lays out JSON records as aligned tables.
//!
//! Widths are measured in terminal columns with `unicode-width`, so wide
//! characters count double when wrapping.

mod clean;
mod indent;
mod matching;
mod records;
mod size;
mod wrap;

pub use clean::{remove_ansi, strip_trailing_whitespace, ucfirst};
pub use indent::{INDENT_UNIT, indent, indent_with};
pub use matching::{Criterion, Weighted, close_matches, equal, first_match, levenshtein, levenshtein_ratio, same_size};
pub use records::{RecordsOptions, Total, record, records};
pub use size::{BINARY_UNITS, DECIMAL_UNITS, SizeUnits, format_size};
pub use wrap::{DEFAULT_WIDTH, WrapOptions, wrap, wrap_with};
