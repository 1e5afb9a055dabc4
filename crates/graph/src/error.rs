//! Error types for graph operations.

use std::fmt::Debug;

/// Result type for graph operations over nodes of type `N`.
pub type Result<T, N> = std::result::Result<T, Error<N>>;

/// Errors that can occur during graph operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<N: Debug> {
    /// The dependencies among the given items form a cycle.
    #[error("Cycle detected among items: {}", format_cycle(.cycle))]
    CycleDetected {
        /// The cycle as a path that starts and ends on the same node.
        cycle: Vec<N>,
    },
}

impl<N: Debug> Error<N> {
    /// The nodes taking part in the cycle, if this is a cycle error.
    #[must_use]
    pub fn cycle(&self) -> &[N] {
        match self {
            Self::CycleDetected { cycle } => cycle,
        }
    }
}

fn format_cycle<N: Debug>(cycle: &[N]) -> String {
    cycle
        .iter()
        .map(|node| format!("{node:?}"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_display() {
        let err = Error::CycleDetected {
            cycle: vec![1, 2, 1],
        };
        assert_eq!(err.to_string(), "Cycle detected among items: 1 -> 2 -> 1");
        assert_eq!(err.cycle(), &[1, 2, 1]);
    }

    #[test]
    fn test_cycle_display_strings() {
        let err = Error::CycleDetected {
            cycle: vec!["a".to_string(), "a".to_string()],
        };
        assert_eq!(err.to_string(), "Cycle detected among items: \"a\" -> \"a\"");
    }
}
