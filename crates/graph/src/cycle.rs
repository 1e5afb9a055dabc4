//! Cycle detection over implicit graphs.

use crate::traversal::Walker;
use std::hash::Hash;
use tracing::debug;

/// Check whether a directed cycle is reachable from `start`.
///
/// The graph is given by `children_of`, which is called at most once per
/// reachable node. The search stops at the first cycle found. Nodes that have
/// been fully explored are not explored again when reached through another
/// path, so shared sub-graphs cost linear time.
///
/// # Example
///
/// ```
/// use datakit_graph::cycle_exists;
/// use std::collections::HashMap;
///
/// let graph = HashMap::from([(1, vec![2, 3]), (2, vec![1])]);
/// let children = |n: &i32| graph.get(n).cloned().unwrap_or_default();
///
/// assert!(cycle_exists(1, children));
/// assert!(!cycle_exists(3, children));
/// ```
pub fn cycle_exists<N, F, I>(start: N, children_of: F) -> bool
where
    N: Eq + Hash + Clone,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    find_cycle(start, children_of).is_some()
}

/// Find a directed cycle reachable from `start`.
///
/// Returns the cycle as a path that starts and ends on the same node, e.g.
/// `[2, 3, 2]`, or `None` when everything reachable from `start` is acyclic.
pub fn find_cycle<N, F, I>(start: N, mut children_of: F) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut expand = |node: &N| children_of(node).into_iter().collect::<Vec<_>>();
    let mut walker = Walker::new();

    match walker.walk(start, &mut expand, &mut |_| {}) {
        Ok(()) => None,
        Err(cycle) => {
            debug!("Cycle of length {} found", cycle.len() - 1);
            Some(cycle)
        }
    }
}
