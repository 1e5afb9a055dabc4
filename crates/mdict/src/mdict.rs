//! A JSON object addressed by delimited paths.

use crate::access::{delete_at, get_at, get_at_mut, set_at};
use crate::error::{Error, Result};
use crate::flatten::flatten;
use crate::tokenizer::Tokenizer;
use serde_json::{Map, Value};
use std::fmt;

/// An owned JSON object whose values are addressed by path strings.
///
/// Paths are split with the dictionary's [`Tokenizer`] (`.` by default).
///
/// ```
/// use datakit_mdict::{MDict, Tokenizer};
/// use serde_json::json;
///
/// let mut dict = MDict::try_from(json!({"a": {"b": {"y": 0}}, "x": 1}))?
///     .with_tokenizer(Tokenizer::new('/'));
///
/// assert_eq!(dict.get("a/b/y")?, &json!(0));
/// dict.set("a/b/z", 2)?;
/// assert_eq!(dict.to_string(), r#"m{"a":{"b":{"y":0,"z":2}},"x":1}"#);
/// # Ok::<(), datakit_mdict::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MDict {
    root: Value,
    tokenizer: Tokenizer,
}

impl MDict {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::from(Map::new())
    }

    /// Split paths with `tokenizer`.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// The tokenizer used for paths.
    #[must_use]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// The underlying value, always an object.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consume the dictionary, returning the underlying value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.root
    }

    fn tokens(&self, path: &str) -> Vec<String> {
        self.tokenizer.tokenize(path)
    }

    /// Value at `path`.
    ///
    /// # Errors
    ///
    /// See [`get_at`].
    pub fn get(&self, path: &str) -> Result<&Value> {
        get_at(&self.root, &self.tokens(path))
    }

    /// Value at `path`, or `default` when a key along it is missing.
    ///
    /// Other failures, such as descending into a leaf, are still reported.
    ///
    /// # Errors
    ///
    /// See [`get_at`], except for [`Error::MissingKey`].
    pub fn get_or<'a>(&'a self, path: &str, default: &'a Value) -> Result<&'a Value> {
        match self.get(path) {
            Err(Error::MissingKey { .. }) => Ok(default),
            other => other,
        }
    }

    /// Whether a value exists at `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }

    /// Mutable value at `path`.
    ///
    /// # Errors
    ///
    /// See [`get_at`].
    pub fn get_mut(&mut self, path: &str) -> Result<&mut Value> {
        let tokens = self.tokens(path);
        get_at_mut(&mut self.root, &tokens)
    }

    /// Set the value at `path`, creating intermediate objects.
    ///
    /// # Errors
    ///
    /// See [`set_at`].
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        let tokens = self.tokens(path);
        set_at(&mut self.root, &tokens, value.into())
    }

    /// Remove and return the value at `path`.
    ///
    /// # Errors
    ///
    /// See [`delete_at`].
    pub fn remove(&mut self, path: &str) -> Result<Value> {
        let tokens = self.tokens(path);
        delete_at(&mut self.root, &tokens)
    }

    /// Copy of the object at `path` as a dictionary with the same tokenizer.
    ///
    /// # Errors
    ///
    /// Fails like [`MDict::get`], or with [`Error::NotAnObject`] when the
    /// value at `path` is not an object.
    pub fn subdict(&self, path: &str) -> Result<Self> {
        match self.get(path)? {
            Value::Object(map) => Ok(Self::from(map.clone()).with_tokenizer(self.tokenizer)),
            other => Err(Error::not_an_object(other)),
        }
    }

    /// Flat view keyed by joined paths. See [`flatten`](crate::flatten()).
    #[must_use]
    pub fn flatten(&self, depth: Option<usize>) -> Map<String, Value> {
        match &self.root {
            Value::Object(map) => flatten(map, &self.tokenizer, depth),
            _ => Map::new(),
        }
    }
}

impl Default for MDict {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Map<String, Value>> for MDict {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            root: Value::Object(map),
            tokenizer: Tokenizer::default(),
        }
    }
}

impl TryFrom<Value> for MDict {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(Error::not_an_object(&other)),
        }
    }
}

impl fmt::Display for MDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> MDict {
        MDict::try_from(json!({"a": {"b": {"y": 0}}, "x": 1}))
            .unwrap()
            .with_tokenizer(Tokenizer::new('/'))
    }

    #[test]
    fn test_get() {
        let dict = sample();
        assert_eq!(dict.get("x").unwrap(), &json!(1));
        assert_eq!(dict.get("a/b/y").unwrap(), &json!(0));
        assert_eq!(
            dict.get("a/b/z").unwrap_err().to_string(),
            "Missing key 'z' in object"
        );
    }

    #[test]
    fn test_get_or() {
        let dict = sample();
        let default = json!(3);
        assert_eq!(dict.get_or("a/b/z", &default).unwrap(), &json!(3));
        assert_eq!(dict.get_or("x", &default).unwrap(), &json!(1));
        assert!(matches!(
            dict.get_or("x/y", &default),
            Err(Error::NotTraversable { .. })
        ));
    }

    #[test]
    fn test_set_and_remove() {
        let mut dict = sample();
        dict.set("a/b/z", 2).unwrap();
        assert_eq!(dict.as_value(), &json!({"a": {"b": {"y": 0, "z": 2}}, "x": 1}));

        dict.remove("a/b").unwrap();
        assert_eq!(dict.to_string(), r#"m{"a":{},"x":1}"#);
        assert!(!dict.contains("a/b"));
    }

    #[test]
    fn test_get_mut() {
        let mut dict = sample();
        *dict.get_mut("a/b/y").unwrap() = json!("changed");
        assert_eq!(dict.get("a/b/y").unwrap(), &json!("changed"));
    }

    #[test]
    fn test_subdict_inherits_tokenizer() {
        let dict = sample();
        let sub = dict.subdict("a").unwrap();
        assert_eq!(sub.tokenizer().delimiter(), '/');
        assert_eq!(sub.get("b/y").unwrap(), &json!(0));
        assert_eq!(sub.to_string(), r#"m{"b":{"y":0}}"#);
    }

    #[test]
    fn test_subdict_of_leaf() {
        assert_eq!(
            sample().subdict("x").unwrap_err(),
            Error::NotAnObject { found: "number" }
        );
    }

    #[test]
    fn test_flatten_uses_tokenizer() {
        let flat = sample().flatten(None);
        assert_eq!(Value::Object(flat), json!({"a/b/y": 0, "x": 1}));
    }

    #[test]
    fn test_try_from_non_object() {
        assert!(MDict::try_from(json!([1, 2])).is_err());
        assert_eq!(MDict::new().to_string(), "m{}");
    }
}
