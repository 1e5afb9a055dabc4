//! Path-based access into nested JSON values.
//!
//! Objects are indexed by key. Arrays are indexed by an integer token, where
//! negative indices count from the end (`-1` is the last element).

use crate::error::{Error, Result};
use crate::tokenizer::Tokenizer;
use serde_json::{Map, Value};
use std::mem;
use tracing::debug;

/// Resolve an array index token against an array of length `len`.
fn resolve_index(token: &str, len: usize) -> Result<usize> {
    let index: i64 = token.parse().map_err(|_| Error::IndexNotInteger {
        key: token.to_string(),
    })?;

    let resolved = if index < 0 {
        i64::try_from(len).ok().and_then(|len| {
            let from_end = len + index;
            usize::try_from(from_end).ok()
        })
    } else {
        usize::try_from(index).ok()
    };

    resolved
        .filter(|idx| *idx < len)
        .ok_or(Error::IndexOutOfRange { index, len })
}

fn child<'a>(value: &'a Value, token: &str) -> Result<&'a Value> {
    match value {
        Value::Object(map) => map.get(token).ok_or_else(|| Error::MissingKey {
            key: token.to_string(),
        }),
        Value::Array(items) => Ok(&items[resolve_index(token, items.len())?]),
        leaf => Err(Error::not_traversable(token, leaf)),
    }
}

fn child_mut<'a>(value: &'a mut Value, token: &str) -> Result<&'a mut Value> {
    match value {
        Value::Object(map) => map.get_mut(token).ok_or_else(|| Error::MissingKey {
            key: token.to_string(),
        }),
        Value::Array(items) => {
            let idx = resolve_index(token, items.len())?;
            Ok(&mut items[idx])
        }
        leaf => Err(Error::not_traversable(token, leaf)),
    }
}

/// Get the value at `tokens`. An empty token list returns `value` itself.
///
/// # Errors
///
/// Fails when a key is missing, an array index is invalid, or a token tries
/// to descend into a leaf.
///
/// ```
/// use datakit_mdict::get_at;
/// use serde_json::json;
///
/// let value = json!({"a": {"x": 1, "b": [10, 20]}});
/// assert_eq!(get_at(&value, &["a", "x"])?, &json!(1));
/// assert_eq!(get_at(&value, &["a", "b", "-1"])?, &json!(20));
/// # Ok::<(), datakit_mdict::Error>(())
/// ```
pub fn get_at<'a, S: AsRef<str>>(value: &'a Value, tokens: &[S]) -> Result<&'a Value> {
    tokens
        .iter()
        .try_fold(value, |current, token| child(current, token.as_ref()))
}

/// Mutable counterpart of [`get_at`].
///
/// # Errors
///
/// Same as [`get_at`].
pub fn get_at_mut<'a, S: AsRef<str>>(value: &'a mut Value, tokens: &[S]) -> Result<&'a mut Value> {
    tokens
        .iter()
        .try_fold(value, |current, token| child_mut(current, token.as_ref()))
}

/// Set the value at `tokens`, returning the value it replaced.
///
/// Missing intermediate keys are created as empty objects. Array elements
/// can be replaced but arrays are never extended. An empty token list
/// replaces `value` entirely.
///
/// # Errors
///
/// Fails when a token tries to descend into a leaf or an array index is
/// invalid.
pub fn set_at<S: AsRef<str>>(value: &mut Value, tokens: &[S], new: Value) -> Result<Option<Value>> {
    let Some((last, parents)) = tokens.split_last() else {
        return Ok(Some(mem::replace(value, new)));
    };

    let mut cursor = value;
    for token in parents {
        let token = token.as_ref();
        cursor = match cursor {
            Value::Object(map) => map.entry(token).or_insert_with(|| {
                debug!(key = token, "Creating intermediate object");
                Value::Object(Map::new())
            }),
            Value::Array(items) => {
                let idx = resolve_index(token, items.len())?;
                &mut items[idx]
            }
            leaf => return Err(Error::not_traversable(token, leaf)),
        };
    }

    let last = last.as_ref();
    match cursor {
        Value::Object(map) => Ok(map.insert(last.to_string(), new)),
        Value::Array(items) => {
            let idx = resolve_index(last, items.len())?;
            Ok(Some(mem::replace(&mut items[idx], new)))
        }
        leaf => Err(Error::not_traversable(last, leaf)),
    }
}

/// Remove and return the value at `tokens`.
///
/// Removing from an array shifts the following elements down.
///
/// # Errors
///
/// Fails with [`Error::EmptyKey`] on an empty token list, and otherwise like
/// [`get_at`].
pub fn delete_at<S: AsRef<str>>(value: &mut Value, tokens: &[S]) -> Result<Value> {
    let (last, parents) = tokens.split_last().ok_or(Error::EmptyKey)?;
    let last = last.as_ref();

    match get_at_mut(value, parents)? {
        Value::Object(map) => map.shift_remove(last).ok_or_else(|| Error::MissingKey {
            key: last.to_string(),
        }),
        Value::Array(items) => {
            let idx = resolve_index(last, items.len())?;
            Ok(items.remove(idx))
        }
        leaf => Err(Error::not_traversable(last, leaf)),
    }
}

/// Get the value at a `.`-delimited `path`. See [`get_at`].
///
/// # Errors
///
/// Same as [`get_at`].
pub fn get<'a>(value: &'a Value, path: &str) -> Result<&'a Value> {
    get_at(value, &Tokenizer::default().tokenize(path))
}

/// Set the value at a `.`-delimited `path`. See [`set_at`].
///
/// # Errors
///
/// Same as [`set_at`].
pub fn set(value: &mut Value, path: &str, new: Value) -> Result<Option<Value>> {
    set_at(value, &Tokenizer::default().tokenize(path), new)
}

/// Remove the value at a `.`-delimited `path`. See [`delete_at`].
///
/// # Errors
///
/// Same as [`delete_at`].
pub fn delete(value: &mut Value, path: &str) -> Result<Value> {
    delete_at(value, &Tokenizer::default().tokenize(path))
}
