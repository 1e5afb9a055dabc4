//! Depth-first traversal shared by the graph algorithms.
//!
//! The walker keeps a three-state visited set (absent means unvisited) and an
//! explicit frame stack, so traversal depth is bounded by heap memory rather
//! than the call stack.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Visit state of a node during a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mark {
    /// The node is on the current path.
    InProgress,
    /// The node and everything reachable from it has been explored.
    Done,
}

struct Frame<N> {
    node: N,
    children: Vec<N>,
    next: usize,
}

/// A depth-first walker whose visited set persists across [`Walker::walk`]
/// calls, so nodes finished from one root are never re-explored from another.
pub(crate) struct Walker<N> {
    marks: HashMap<N, Mark>,
    stack: Vec<Frame<N>>,
}

impl<N> Walker<N>
where
    N: Eq + Hash + Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            marks: HashMap::new(),
            stack: Vec::new(),
        }
    }

    /// Whether `node` has been fully explored.
    pub(crate) fn is_done(&self, node: &N) -> bool {
        self.marks.get(node) == Some(&Mark::Done)
    }

    /// Walk everything reachable from `root` that is not already done.
    ///
    /// `expand` is called exactly once per newly entered node and returns its
    /// children in visiting order. `finish` is called in post-order, once a
    /// node's children are all done.
    ///
    /// Returns the cycle path `[a, .., a]` when a node is reached again while
    /// still in progress. The walk stops at the first cycle.
    pub(crate) fn walk<E, F>(
        &mut self,
        root: N,
        expand: &mut E,
        finish: &mut F,
    ) -> std::result::Result<(), Vec<N>>
    where
        E: FnMut(&N) -> Vec<N>,
        F: FnMut(&N),
    {
        if self.marks.contains_key(&root) {
            return Ok(());
        }
        self.enter(root, expand);

        while let Some(frame) = self.stack.last_mut() {
            if frame.next < frame.children.len() {
                let child = frame.children[frame.next].clone();
                frame.next += 1;

                match self.marks.get(&child) {
                    Some(Mark::Done) => {}
                    Some(Mark::InProgress) => return Err(self.cycle_to(&child)),
                    None => self.enter(child, expand),
                }
            } else if let Some(frame) = self.stack.pop() {
                finish(&frame.node);
                self.marks.insert(frame.node, Mark::Done);
            }
        }

        Ok(())
    }

    fn enter<E>(&mut self, node: N, expand: &mut E)
    where
        E: FnMut(&N) -> Vec<N>,
    {
        let children = expand(&node);
        if let Entry::Vacant(entry) = self.marks.entry(node.clone()) {
            entry.insert(Mark::InProgress);
        }
        self.stack.push(Frame {
            node,
            children,
            next: 0,
        });
    }

    /// The path from the in-progress `node` down the current stack and back.
    fn cycle_to(&self, node: &N) -> Vec<N> {
        let start = self
            .stack
            .iter()
            .position(|frame| &frame.node == node)
            .unwrap_or(0);
        let mut cycle: Vec<N> = self.stack[start..]
            .iter()
            .map(|frame| frame.node.clone())
            .collect();
        cycle.push(node.clone());
        cycle
    }
}
