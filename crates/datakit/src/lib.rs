//! Convenience utilities for nested data, dependency graphs and text.
//!
//! This crate re-exports the workspace libraries under one roof:
//!
//! - [`graph`]: cycle detection, leaf discovery and dependency-respecting
//!   reordering over graphs given as a `children_of` function
//! - [`mdict`]: escaped path tokenizing and path-keyed access to
//!   [`serde_json::Value`](https://docs.rs/serde_json) trees
//! - [`text`]: indentation, word wrapping and terminal text cleanup
//!
//! The most used functions are also available at the crate root.
//!
//! ```
//! use datakit::{reorder, tokenize, ucfirst};
//! use std::collections::HashMap;
//!
//! let deps = HashMap::from([(2, vec![1])]);
//! assert_eq!(reorder([3, 2, 1], datakit::graph::adapter::from_map(&deps))?, [3, 1, 2]);
//! assert_eq!(tokenize("a.b", '.'), ["a", "b"]);
//! assert_eq!(ucfirst("wrap"), "Wrap");
//! # Ok::<(), datakit::graph::Error<i32>>(())
//! ```

pub use datakit_graph as graph;
pub use datakit_mdict as mdict;
pub use datakit_text as text;

pub use datakit_graph::{cycle_exists, leafage, reorder};
pub use datakit_mdict::{MDict, Tokenizer, join, merge, tokenize};
pub use datakit_text::{indent, ucfirst, wrap};
