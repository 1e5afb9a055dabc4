//! Converting between nested objects and flat path-keyed maps.

use crate::access::set_at;
use crate::error::{Error, Result};
use crate::tokenizer::Tokenizer;
use serde_json::{Map, Value};
use tracing::trace;

/// Flatten nested objects into a single map keyed by joined paths.
///
/// Keys are joined with `tokenizer`, so delimiters inside keys are escaped.
/// Nested empty objects contribute no entry. Arrays are leaves.
///
/// `depth` limits how many levels are flattened: `Some(0)` returns a copy of
/// `map`, `None` flattens everything.
///
/// ```
/// use datakit_mdict::{Tokenizer, flatten};
/// use serde_json::json;
///
/// let nested = json!({"a": {"b": 1, "c": {"x": 9}}, "d": 3});
/// let flat = flatten(nested.as_object().unwrap(), &Tokenizer::default(), Some(1));
/// assert_eq!(serde_json::Value::Object(flat), json!({"a.b": 1, "a.c": {"x": 9}, "d": 3}));
/// ```
#[must_use]
pub fn flatten(map: &Map<String, Value>, tokenizer: &Tokenizer, depth: Option<usize>) -> Map<String, Value> {
    let mut flat = Map::new();
    let mut prefix = Vec::new();
    flatten_into(&mut flat, &mut prefix, map, tokenizer, depth);
    flat
}

fn flatten_into(
    flat: &mut Map<String, Value>,
    prefix: &mut Vec<String>,
    map: &Map<String, Value>,
    tokenizer: &Tokenizer,
    depth: Option<usize>,
) {
    for (key, value) in map {
        prefix.push(key.clone());
        match value {
            Value::Object(inner) if depth != Some(0) => {
                flatten_into(flat, prefix, inner, tokenizer, depth.map(|d| d - 1));
            }
            _ => {
                flat.insert(tokenizer.join(prefix.iter()), value.clone());
            }
        }
        prefix.pop();
    }
}

/// How [`inflate_with`] splits flat keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InflateOptions {
    /// Split keys into at most `depth + 1` tokens, keeping the remainder
    /// joined as the last key. `None` splits every delimiter.
    pub depth: Option<usize>,
    /// Trim surrounding whitespace from every token, so `"a . b"` lands at
    /// `a` then `b`.
    pub strip: bool,
}

impl InflateOptions {
    /// Options that split keys at most `depth` times.
    #[must_use]
    pub const fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Set whether tokens are trimmed.
    #[must_use]
    pub const fn strip(mut self, enabled: bool) -> Self {
        self.strip = enabled;
        self
    }
}

/// Rebuild nested objects from a flat path-keyed map.
///
/// Keys are processed in sorted order, so a key that is both a leaf and a
/// section (`"a"` and `"a.b"`) always fails the same way. With
/// `Some(depth)`, keys are split into at most `depth + 1` tokens and the
/// remainder is kept joined as the last key.
///
/// # Errors
///
/// Returns [`Error::NotTraversable`] when a key descends into a value set by
/// a shorter key.
pub fn inflate(flat: &Map<String, Value>, tokenizer: &Tokenizer, depth: Option<usize>) -> Result<Map<String, Value>> {
    inflate_with(
        flat,
        tokenizer,
        &InflateOptions {
            depth,
            strip: false,
        },
    )
}

/// Rebuild nested objects from a flat map according to `options`.
/// See [`inflate`].
///
/// # Errors
///
/// Same as [`inflate`].
pub fn inflate_with(
    flat: &Map<String, Value>,
    tokenizer: &Tokenizer,
    options: &InflateOptions,
) -> Result<Map<String, Value>> {
    let mut keys: Vec<&String> = flat.keys().collect();
    keys.sort();

    let mut root = Value::Object(Map::new());
    for key in keys {
        let mut tokens = tokenizer.tokenize(key);
        if options.strip {
            for token in &mut tokens {
                *token = token.trim().to_string();
            }
        }
        if let Some(depth) = options.depth
            && tokens.len() > depth.saturating_add(1)
        {
            let rest = tokens.split_off(depth);
            tokens.push(tokenizer.join(&rest));
        }
        trace!(key = %key, tokens = tokens.len(), "Inflating key");
        set_at(&mut root, &tokens, flat[key.as_str()].clone())?;
    }

    match root {
        Value::Object(map) => Ok(map),
        other => Err(Error::not_an_object(&other)),
    }
}
