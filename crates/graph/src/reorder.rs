//! Dependency-respecting reordering that pulls dependencies forward just in time.

use crate::traversal::Walker;
use crate::{Error, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// Reorder `items` so that every dependency comes before its dependents.
///
/// Only dependencies that are themselves in `items` are considered; edges to
/// other nodes are ignored. Items are taken in their original order, and an
/// item is only pulled forward when something earlier depends on it, right
/// before its first dependent. Sibling dependencies are pulled in their
/// original relative order, and an already valid order is returned unchanged.
///
/// Dependencies are always pulled forward, never the dependent pushed back,
/// so the result does not necessarily move the fewest items possible.
///
/// Duplicate items keep their first position only.
///
/// # Errors
///
/// Returns [`Error::CycleDetected`] if the dependencies among `items` form a
/// cycle.
///
/// # Example
///
/// ```
/// use datakit_graph::reorder;
/// use std::collections::HashMap;
///
/// let graph = HashMap::from([(2, vec![1]), (3, vec![2])]);
/// let sorted = reorder(vec![1, 3, 2], |n: &i32| graph.get(n).cloned().unwrap_or_default())?;
///
/// assert_eq!(sorted, vec![1, 2, 3]);
/// # Ok::<(), datakit_graph::Error<i32>>(())
/// ```
pub fn reorder<N, S, F, I>(items: S, mut children_of: F) -> Result<Vec<N>, N>
where
    N: Eq + Hash + Clone + Debug,
    S: IntoIterator<Item = N>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut items: Vec<N> = items.into_iter().collect();
    let mut position: HashMap<N, usize> = HashMap::with_capacity(items.len());
    items.retain(|item| {
        let next = position.len();
        match position.entry(item.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(next);
                true
            }
        }
    });

    // In-set dependencies, in original item order.
    let mut expand = |node: &N| {
        let mut deps: Vec<(usize, N)> = children_of(node)
            .into_iter()
            .filter_map(|dep| position.get(&dep).map(|&pos| (pos, dep)))
            .collect();
        deps.sort_by_key(|(pos, _)| *pos);
        deps.dedup_by_key(|(pos, _)| *pos);
        deps.into_iter().map(|(_, dep)| dep).collect::<Vec<_>>()
    };

    let mut sorted = Vec::with_capacity(items.len());
    let mut walker = Walker::new();

    for item in &items {
        if walker.is_done(item) {
            continue;
        }
        walker
            .walk(item.clone(), &mut expand, &mut |node: &N| {
                sorted.push(node.clone());
            })
            .map_err(|cycle| {
                debug!("Reorder aborted on cycle {:?}", cycle);
                Error::CycleDetected { cycle }
            })?;
    }

    let moved = sorted
        .iter()
        .zip(&items)
        .filter(|(after, before)| after != before)
        .count();
    trace!("Reordered {} items, {} positions changed", items.len(), moved);

    Ok(sorted)
}
