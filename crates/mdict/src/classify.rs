//! Sorting values into a hierarchy of keys.

use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::debug;

/// One step of splitting a value, as returned by the `split` function given
/// to [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Split<K, T> {
    /// Store the value under the key and stop.
    Leaf(K, T),
    /// Descend into the key and keep splitting the remaining value.
    Branch(K, T),
}

/// A hierarchy built by [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree<K, T> {
    /// A classified value.
    Leaf(T),
    /// A level of keys.
    Node(BTreeMap<K, Self>),
}

impl<K, T> Tree<K, T> {
    /// Whether this is a classified value.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// The value of a leaf.
    #[must_use]
    pub const fn leaf(&self) -> Option<&T> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Node(_) => None,
        }
    }

    /// The children of a node.
    #[must_use]
    pub const fn children(&self) -> Option<&BTreeMap<K, Self>> {
        match self {
            Self::Leaf(_) => None,
            Self::Node(children) => Some(children),
        }
    }
}

impl<K: ToString, T: Into<Value>> From<Tree<K, T>> for Value {
    fn from(tree: Tree<K, T>) -> Self {
        match tree {
            Tree::Leaf(value) => value.into(),
            Tree::Node(children) => Self::Object(
                children
                    .into_iter()
                    .map(|(key, child)| (key.to_string(), child.into()))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}

/// Classify `values` into a hierarchy.
///
/// `split` is applied to each value and then to whatever remains of it after
/// each [`Split::Branch`], until it returns a [`Split::Leaf`]. A leaf
/// replaces anything already stored under its key.
///
/// With `Some(depth)`, a value never descends more than `depth` levels: the
/// remainder after the last allowed branch is stored as a leaf. `Some(0)`
/// behaves like `Some(1)`.
///
/// ```
/// use datakit_mdict::{Split, classify};
/// use serde_json::{Value, json};
///
/// let by_initial = |word: &'static str| match word.len() {
///     1 => Split::Leaf(word, word),
///     _ => Split::Branch(&word[..1], &word[1..]),
/// };
/// let tree = classify(["ab", "ac", "b"], by_initial, None)?;
/// assert_eq!(Value::from(tree), json!({"a": {"b": "b", "c": "c"}, "b": "b"}));
/// # Ok::<(), datakit_mdict::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::ClassConflict`] when a value has to descend into a key
/// that already holds a leaf.
pub fn classify<K, T, F>(values: impl IntoIterator<Item = T>, mut split: F, depth: Option<usize>) -> Result<Tree<K, T>>
where
    K: Ord + Clone + Debug,
    F: FnMut(T) -> Split<K, T>,
{
    let mut root = BTreeMap::new();
    for value in values {
        let mut level = &mut root;
        let mut value = value;
        let mut remaining = depth;
        loop {
            match split(value) {
                Split::Leaf(key, leaf) => {
                    level.insert(key, Tree::Leaf(leaf));
                    break;
                }
                Split::Branch(key, rest) => {
                    let slot = level
                        .entry(key.clone())
                        .or_insert_with(|| Tree::Node(BTreeMap::new()));
                    if slot.is_leaf() {
                        debug!(key = ?key, "Class already holds a value");
                        return Err(Error::class_conflict(&key));
                    }
                    if matches!(remaining, Some(0 | 1)) {
                        *slot = Tree::Leaf(rest);
                        break;
                    }
                    level = match slot {
                        Tree::Node(children) => children,
                        Tree::Leaf(_) => return Err(Error::class_conflict(&key)),
                    };
                    value = rest;
                    remaining = remaining.map(|d| d - 1);
                }
            }
        }
    }
    Ok(Tree::Node(root))
}
