//! Validation of item orders against their dependencies.

use std::collections::HashMap;
use std::hash::Hash;

/// A dependency that does not come before its dependent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation<N> {
    /// The dependent item.
    pub node: N,
    /// The dependency placed at or after `node`.
    pub dependency: N,
}

/// Result of order validation.
#[derive(Debug, Clone)]
pub struct ValidationResult<N> {
    /// Whether every in-set dependency comes strictly before its dependent.
    pub is_valid: bool,
    /// Offending `(node, dependency)` pairs, in order of `node`.
    pub violations: Vec<Violation<N>>,
}

impl<N> ValidationResult<N> {
    /// Create a valid result.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            violations: vec![],
        }
    }

    /// Create an invalid result with violations.
    #[must_use]
    pub fn invalid(violations: Vec<Violation<N>>) -> Self {
        Self {
            is_valid: false,
            violations,
        }
    }
}

/// Check that `order` lists every in-set dependency before its dependent.
///
/// Dependencies outside `order` are ignored, as in [`reorder`](crate::reorder).
/// A self-dependency is always a violation. For duplicated items the first
/// occurrence counts.
#[must_use]
pub fn validate_order<N, F, I>(order: &[N], mut children_of: F) -> ValidationResult<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut position: HashMap<&N, usize> = HashMap::with_capacity(order.len());
    for (idx, node) in order.iter().enumerate() {
        position.entry(node).or_insert(idx);
    }

    let mut violations = Vec::new();
    for (idx, node) in order.iter().enumerate() {
        if position.get(node) != Some(&idx) {
            continue;
        }
        for dependency in children_of(node) {
            if let Some(&dep_idx) = position.get(&dependency)
                && dep_idx >= idx
            {
                violations.push(Violation {
                    node: node.clone(),
                    dependency,
                });
            }
        }
    }

    if violations.is_empty() {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(violations)
    }
}
