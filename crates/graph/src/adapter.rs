//! Children-of functions built from concrete graph structures.
//!
//! The algorithms in this crate only need a `children_of` closure. These
//! helpers build one from an adjacency map or a petgraph [`DiGraphMap`].

use petgraph::Direction;
use petgraph::graphmap::{DiGraphMap, NodeTrait};
use std::collections::HashMap;
use std::hash::Hash;

/// Children from an adjacency map. Nodes without an entry have no children.
///
/// ```
/// use datakit_graph::{adapter, cycle_exists};
/// use std::collections::HashMap;
///
/// let graph = HashMap::from([(1, vec![2]), (2, vec![1])]);
/// assert!(cycle_exists(1, adapter::from_map(&graph)));
/// ```
pub fn from_map<N>(map: &HashMap<N, Vec<N>>) -> impl FnMut(&N) -> Vec<N> + '_
where
    N: Eq + Hash + Clone,
{
    move |node: &N| map.get(node).cloned().unwrap_or_default()
}

/// Children from the outgoing edges of a [`DiGraphMap`].
///
/// Nodes missing from the graph have no children.
pub fn from_graph_map<N, E>(graph: &DiGraphMap<N, E>) -> impl FnMut(&N) -> Vec<N> + '_
where
    N: NodeTrait,
{
    move |node: &N| {
        graph
            .neighbors_directed(*node, Direction::Outgoing)
            .collect()
    }
}
