//! Errors raised while walking nested values.

use serde_json::Value;

/// Leaf renderings at least this long are left out of error messages.
const LEAF_PREVIEW_LIMIT: usize = 15;

/// Errors that can occur when accessing nested values by path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An object has no entry for the key.
    #[error("Missing key '{key}' in object")]
    MissingKey {
        /// The key that was looked up.
        key: String,
    },

    /// Tried to descend into a value that is neither an object nor an array.
    #[error("Can't query subvalue '{key}' of a leaf{}", preview_suffix(.leaf.as_deref()))]
    NotTraversable {
        /// The key that was looked up.
        key: String,
        /// Short rendering of the leaf, when it is short enough to be useful.
        leaf: Option<String>,
    },

    /// An array was indexed with something that is not an integer.
    #[error("Non-integer index '{key}' provided on an array")]
    IndexNotInteger {
        /// The offending token.
        key: String,
    },

    /// An array index is outside the array bounds.
    #[error("Index {index} is out of range ({len} elements in array)")]
    IndexOutOfRange {
        /// The requested index, possibly negative.
        index: i64,
        /// Length of the array.
        len: usize,
    },

    /// The operation needs at least one key.
    #[error("Empty key")]
    EmptyKey,

    /// A value was classified under a key that already holds a leaf.
    #[error("Class '{key}' already holds a value and can't be descended into")]
    ClassConflict {
        /// Debug rendering of the key.
        key: String,
    },

    /// The root value is not an object.
    #[error("Expected an object, found {found}")]
    NotAnObject {
        /// JSON type name of the value found.
        found: &'static str,
    },
}

impl Error {
    pub(crate) fn not_traversable(key: &str, leaf: &Value) -> Self {
        let rendered = leaf.to_string();
        Self::NotTraversable {
            key: key.to_string(),
            leaf: (rendered.chars().count() < LEAF_PREVIEW_LIMIT).then_some(rendered),
        }
    }

    pub(crate) fn class_conflict(key: &impl std::fmt::Debug) -> Self {
        Self::ClassConflict {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn not_an_object(value: &Value) -> Self {
        Self::NotAnObject {
            found: type_name(value),
        }
    }
}

/// Result type for nested value access.
pub type Result<T> = std::result::Result<T, Error>;

fn preview_suffix(leaf: Option<&str>) -> String {
    leaf.map(|leaf| format!(" (leaf value is {leaf})"))
        .unwrap_or_default()
}

pub(crate) const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
