//! Laying out JSON records as aligned text tables.

use crate::clean::{remove_ansi, strip_trailing_whitespace};
use crate::indent::{INDENT_UNIT, indent};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

/// A summary shown under a column of [`records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Total {
    /// Sum of the numeric values. Other values are skipped.
    Sum,
    /// Number of rows.
    Count,
}

impl Total {
    fn compute(self, rows: &[&Map<String, Value>], field: &str) -> String {
        match self {
            Self::Count => rows.len().to_string(),
            Self::Sum => {
                let numbers: Vec<&serde_json::Number> = rows
                    .iter()
                    .filter_map(|row| row.get(field).and_then(Value::as_number))
                    .collect();
                if let Some(ints) = numbers.iter().map(|n| n.as_i64()).collect::<Option<Vec<i64>>>() {
                    ints.into_iter().fold(0_i64, i64::saturating_add).to_string()
                } else {
                    numbers
                        .iter()
                        .filter_map(|n| n.as_f64())
                        .sum::<f64>()
                        .to_string()
                }
            }
        }
    }
}

/// How [`records`] lays out rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordsOptions {
    /// Columns to show, in order. `None` uses the keys of the first row.
    pub fields: Option<Vec<String>>,
    /// Fields to group rows by, outermost first. Each group gets a
    /// `field: value` heading and its rows are indented one level.
    pub group_by: Vec<String>,
    /// Columns that get a total line under the rows.
    pub totals: BTreeMap<String, Total>,
}

impl RecordsOptions {
    /// Show only `fields`, in that order.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Group rows by `fields`, outermost first.
    #[must_use]
    pub fn group_by<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Add a total under `field`.
    #[must_use]
    pub fn total(mut self, field: impl Into<String>, total: Total) -> Self {
        self.totals.insert(field.into(), total);
        self
    }
}

/// Render `rows` as left-aligned columns separated by one space.
///
/// Column widths ignore ANSI sequences, so colored cells stay aligned.
/// Strings are shown without quotes, and missing or null values are blank.
/// Trailing spaces are removed from every line.
///
/// ```
/// use datakit_text::{RecordsOptions, Total, records};
/// use serde_json::json;
///
/// let rows = [json!({"foo": 1, "bar": "x"}), json!({"foo": 23, "bar": "abc"})];
/// let rows: Vec<_> = rows.iter().filter_map(|row| row.as_object()).collect();
///
/// let options = RecordsOptions::default().fields(["bar", "foo"]).total("foo", Total::Sum);
/// assert_eq!(records(rows, &options), "x   1\nabc 23\n------\n    24");
/// ```
#[must_use]
pub fn records<'a>(rows: impl IntoIterator<Item = &'a Map<String, Value>>, options: &RecordsOptions) -> String {
    let rows: Vec<&Map<String, Value>> = rows.into_iter().collect();
    let fields: Vec<&str> = match &options.fields {
        Some(fields) => fields.iter().map(String::as_str).collect(),
        None => rows
            .first()
            .map(|row| row.keys().map(String::as_str).collect())
            .unwrap_or_default(),
    };
    render_rows(&rows, &fields, &options.group_by, &options.totals, "")
}

fn render_rows(
    rows: &[&Map<String, Value>],
    fields: &[&str],
    group_by: &[String],
    totals: &BTreeMap<String, Total>,
    prefix: &str,
) -> String {
    if let Some((head, rest)) = group_by.split_first() {
        let mut groups: Vec<(String, Vec<&Map<String, Value>>)> = Vec::new();
        for &row in rows {
            let value = cell(row.get(head));
            match groups.iter_mut().find(|(key, _)| *key == value) {
                Some((_, members)) => members.push(row),
                None => groups.push((value, vec![row])),
            }
        }
        let nested = format!("{prefix}{INDENT_UNIT}");
        return groups
            .iter()
            .map(|(value, members)| {
                let body = render_rows(members, fields, rest, totals, &nested);
                format!("{prefix}{head}: {value}\n{body}")
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut lines: Vec<Vec<String>> = rows
        .iter()
        .map(|row| fields.iter().map(|field| cell(row.get(*field))).collect())
        .collect();
    let has_totals = fields.iter().any(|field| totals.contains_key(*field));
    if has_totals {
        lines.push(
            fields
                .iter()
                .map(|field| {
                    totals
                        .get(*field)
                        .map(|total| total.compute(rows, field))
                        .unwrap_or_default()
                })
                .collect(),
        );
    }

    let widths: Vec<usize> = (0..fields.len())
        .map(|column| {
            lines
                .iter()
                .map(|cells| visible_width(&cells[column]))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out: Vec<String> = lines.iter().map(|cells| layout(cells, &widths)).collect();
    if has_totals && let Some(total) = out.pop() {
        let bar_width = widths.iter().sum::<usize>() + fields.len().saturating_sub(1);
        out.push("-".repeat(bar_width));
        out.push(total);
    }

    let text = out
        .iter()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n");
    strip_trailing_whitespace(&text)
}

/// Render the chosen `fields` of one record, one `field: value` per line.
///
/// A single field renders as its bare value. Multi-line values start on the
/// line after their name, indented one level.
///
/// ```
/// use datakit_text::record;
/// use serde_json::json;
///
/// let row = json!({"foo": 1, "bar": "x", "wiz": "xxx"});
/// let row = row.as_object().unwrap();
/// assert_eq!(record(row, &["foo", "bar"]), "foo: 1\nbar: x");
/// assert_eq!(record(row, &["wiz"]), "xxx");
/// ```
#[must_use]
pub fn record(row: &Map<String, Value>, fields: &[&str]) -> String {
    if let [field] = fields {
        return cell(row.get(*field));
    }
    fields
        .iter()
        .map(|field| {
            let value = cell(row.get(*field));
            if value.contains('\n') {
                format!("{field}:\n{}", indent(&value, 1))
            } else {
                format!("{field}: {value}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

fn visible_width(text: &str) -> usize {
    remove_ansi(text).width()
}

fn layout(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(visible_width(cell));
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Map<String, Value>> {
        [json!({"foo": 1, "bar": "x"}), json!({"foo": 23, "bar": "abc"})]
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_columns_are_aligned() {
        let rows = sample();
        let options = RecordsOptions::default().fields(["foo", "bar"]);
        assert_eq!(records(&rows, &options), "1  x\n23 abc");
    }

    #[test]
    fn test_fields_default_to_first_row() {
        let rows = sample();
        assert_eq!(records(&rows, &RecordsOptions::default()), "1  x\n23 abc");
    }

    #[test]
    fn test_group_by() {
        let rows = sample();
        let options = RecordsOptions::default().fields(["bar"]).group_by(["foo"]);
        assert_eq!(records(&rows, &options), "foo: 1\n  x\nfoo: 23\n  abc");
    }

    #[test]
    fn test_nested_group_by() {
        let rows = sample();
        let options = RecordsOptions::default()
            .fields(["foo", "bar"])
            .group_by(["foo", "bar"]);
        assert_eq!(
            records(&rows, &options),
            "foo: 1\n  bar: x\n    1 x\nfoo: 23\n  bar: abc\n    23 abc"
        );
    }

    #[test]
    fn test_group_members_keep_first_seen_order() {
        let rows: Vec<Map<String, Value>> = [
            json!({"k": "b", "v": 1}),
            json!({"k": "a", "v": 2}),
            json!({"k": "b", "v": 3}),
        ]
        .into_iter()
        .filter_map(|row| row.as_object().cloned())
        .collect();
        let options = RecordsOptions::default().fields(["v"]).group_by(["k"]);
        assert_eq!(records(&rows, &options), "k: b\n  1\n  3\nk: a\n  2");
    }

    #[test]
    fn test_totals() {
        let rows = sample();
        let options = RecordsOptions::default()
            .fields(["bar", "foo"])
            .total("foo", Total::Sum)
            .total("bar", Total::Count);
        assert_eq!(records(&rows, &options), "x   1\nabc 23\n------\n2   24");
    }

    #[test]
    fn test_float_sum() {
        let rows: Vec<Map<String, Value>> = [json!({"n": 1.5}), json!({"n": 2})]
            .into_iter()
            .filter_map(|row| row.as_object().cloned())
            .collect();
        let options = RecordsOptions::default().total("n", Total::Sum);
        assert_eq!(records(&rows, &options), "1.5\n2\n---\n3.5");
    }

    #[test]
    fn test_ansi_cells_stay_aligned() {
        let rows: Vec<Map<String, Value>> = [
            json!({"a": "\u{1b}[31mred\u{1b}[0m", "b": 1}),
            json!({"a": "plain", "b": 2}),
        ]
        .into_iter()
        .filter_map(|row| row.as_object().cloned())
        .collect();
        let rendered = records(&rows, &RecordsOptions::default());
        assert_eq!(remove_ansi(&rendered), "red   1\nplain 2");
    }

    #[test]
    fn test_missing_and_null_cells_are_blank() {
        let rows: Vec<Map<String, Value>> = [json!({"a": null, "b": 1}), json!({"b": 2})]
            .into_iter()
            .filter_map(|row| row.as_object().cloned())
            .collect();
        let options = RecordsOptions::default().fields(["a", "b"]);
        assert_eq!(records(&rows, &options), " 1\n 2");
    }

    #[test]
    fn test_no_rows() {
        assert_eq!(records(Vec::<&Map<String, Value>>::new(), &RecordsOptions::default()), "");
    }

    #[test]
    fn test_record_multiline_value() {
        let row = json!({"name": "job", "log": "line one\nline two"});
        let row = row.as_object().unwrap();
        assert_eq!(
            record(row, &["name", "log"]),
            "name: job\nlog:\n  line one\n  line two"
        );
    }
}
