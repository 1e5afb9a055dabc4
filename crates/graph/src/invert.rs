//! Reverse (parents-of) relation for a set of items.

use std::collections::HashMap;
use std::hash::Hash;

/// The parents of each node, restricted to edges leaving a set of items.
///
/// Built by [`invert`].
#[derive(Debug, Clone)]
pub struct Parents<N> {
    parents: HashMap<N, Vec<N>>,
}

impl<N> Parents<N>
where
    N: Eq + Hash,
{
    /// The items that list `node` as a child, in item order.
    ///
    /// Unknown nodes have no parents.
    #[must_use]
    pub fn parents_of(&self, node: &N) -> &[N] {
        self.parents.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes with at least one parent.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether no item has any child.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Invert `children_of` over `items`.
///
/// `children_of` is called once per item. A parent appears at most once for
/// each child even if it lists that child several times.
///
/// # Example
///
/// ```
/// use datakit_graph::invert;
/// use std::collections::HashMap;
///
/// let graph = HashMap::from([(2, vec![1])]);
/// let parents = invert([2, 1, 3], |n: &i32| graph.get(n).cloned().unwrap_or_default());
///
/// assert_eq!(parents.parents_of(&1), &[2]);
/// assert!(parents.parents_of(&2).is_empty());
/// ```
pub fn invert<N, S, F, I>(items: S, mut children_of: F) -> Parents<N>
where
    N: Eq + Hash + Clone,
    S: IntoIterator<Item = N>,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut parents: HashMap<N, Vec<N>> = HashMap::new();

    for item in items {
        for child in children_of(&item) {
            let entry = parents.entry(child).or_default();
            if !entry.contains(&item) {
                entry.push(item.clone());
            }
        }
    }

    Parents { parents }
}
