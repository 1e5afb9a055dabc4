//! Graph algorithms over implicitly defined graphs.
//!
//! Graphs are never materialized: every algorithm takes the node(s) to start
//! from and a `children_of` function returning the direct successors of a
//! node. Any `FnMut(&N) -> impl IntoIterator<Item = N>` works, and the
//! [`adapter`] module builds one from a `HashMap` or a petgraph `DiGraphMap`.
//!
//! # Key Functions
//!
//! - [`cycle_exists`] / [`find_cycle`]: is a cycle reachable from a node?
//! - [`leafage`]: lazily yield the leaves reachable from a set of nodes
//! - [`reorder`]: reorder items so dependencies come first, pulling each
//!   dependency forward just before its first dependent
//! - [`invert`]: parents-of relation for a set of items
//! - [`validate_order`]: list the dependencies an order violates
//!
//! # Example
//!
//! ```
//! use datakit_graph::{adapter, cycle_exists, reorder};
//! use std::collections::HashMap;
//!
//! // "test" needs "build", which needs "fetch".
//! let deps = HashMap::from([("build", vec!["fetch"]), ("test", vec!["build"])]);
//!
//! assert!(!cycle_exists("test", adapter::from_map(&deps)));
//!
//! let order = reorder(["test", "fetch", "build"], adapter::from_map(&deps))?;
//! assert_eq!(order, ["fetch", "build", "test"]);
//! # Ok::<(), datakit_graph::Error<&str>>(())
//! ```
//!
//! Traversals are iterative and call `children_of` at most once per node they
//! expand.

pub mod adapter;
mod cycle;
mod error;
mod invert;
mod leafage;
mod reorder;
mod traversal;
mod validation;

pub use cycle::{cycle_exists, find_cycle};
pub use error::{Error, Result};
pub use invert::{Parents, invert};
pub use leafage::{Leafage, leafage};
pub use reorder::reorder;
pub use validation::{ValidationResult, Violation, validate_order};
