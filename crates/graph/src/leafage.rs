//! Leaf discovery over implicit graphs.

use std::collections::HashSet;
use std::hash::Hash;

/// Lazily yields the leaves reachable from a set of start nodes.
///
/// Created by [`leafage`].
pub struct Leafage<S: Iterator, F> {
    starts: S,
    stack: Vec<S::Item>,
    expanded: HashSet<S::Item>,
    children_of: F,
}

/// Get every leaf (node without children) reachable from `starts`.
///
/// Leaves are yielded once each, in depth-first discovery order: start nodes
/// are explored in the given order and children in the order `children_of`
/// returns them. A start node without children is itself a leaf.
///
/// Start nodes are pulled lazily, so `starts` may be unbounded.
///
/// Nodes are expanded at most once, so the iterator terminates even when the
/// graph has cycles. Cycles are not reported, though: call
/// [`cycle_exists`](crate::cycle_exists) first if that matters.
///
/// # Example
///
/// ```
/// use datakit_graph::leafage;
/// use std::collections::HashMap;
///
/// let graph = HashMap::from([(1, vec![2, 3]), (2, vec![1])]);
/// let mut leaves: Vec<_> = leafage([1, 4], |n: &i32| graph.get(n).cloned().unwrap_or_default())
///     .collect();
/// leaves.sort_unstable();
///
/// assert_eq!(leaves, vec![3, 4]);
/// ```
pub fn leafage<N, S, F, I>(starts: S, children_of: F) -> Leafage<S::IntoIter, F>
where
    N: Eq + Hash + Clone,
    S: IntoIterator<Item = N>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    Leafage {
        starts: starts.into_iter(),
        stack: Vec::new(),
        expanded: HashSet::new(),
        children_of,
    }
}

impl<N, S, F, I> Iterator for Leafage<S, F>
where
    N: Eq + Hash + Clone,
    S: Iterator<Item = N>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        loop {
            let node = match self.stack.pop() {
                Some(node) => node,
                None => self.starts.next()?,
            };

            if !self.expanded.insert(node.clone()) {
                continue;
            }

            let children: Vec<N> = (self.children_of)(&node).into_iter().collect();
            if children.is_empty() {
                return Some(node);
            }

            // Reversed so the first child is explored first.
            self.stack.extend(
                children
                    .into_iter()
                    .rev()
                    .filter(|child| !self.expanded.contains(child)),
            );
        }
    }
}
