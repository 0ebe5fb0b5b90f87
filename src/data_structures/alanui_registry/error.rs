//! Error types for the Alanui Transition Registry.
//!
//! This module defines the closed set of errors that registry operations
//! can return. Both kinds carry the offending path for diagnostics so
//! callers can handle them programmatically instead of string matching.

/// Errors that can occur in Alanui Transition Registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlanuiRegistryError {
    /// No transition is registered for the given path. `failed_at` is
    /// the index of the symbol with no matching child, or the path
    /// length when every symbol matched but no endpoint is bound at the
    /// end (a pass-through interior node).
    #[error("no transition registered for path {path:?} (walk failed at symbol index {failed_at})")]
    NotFound {
        /// The path that failed to resolve.
        path: Vec<String>,
        /// Index of the symbol at which the walk failed.
        failed_at: usize,
    },

    /// An endpoint is already bound at the target path. Insertion is
    /// write-once per path; this signals a conflict in the automaton
    /// specification, not a runtime fault.
    #[error("a transition endpoint is already bound for path {path:?}")]
    AlreadyAssigned {
        /// The path whose endpoint slot was already bound.
        path: Vec<String>,
    },
}

/// Result type for Alanui Transition Registry operations.
pub type AlanuiRegistryResult<T> = Result<T, AlanuiRegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlanuiRegistryError::NotFound {
            path: vec!["u".to_string(), "w".to_string()],
            failed_at: 1,
        };
        assert_eq!(
            err.to_string(),
            "no transition registered for path [\"u\", \"w\"] (walk failed at symbol index 1)"
        );

        let err = AlanuiRegistryError::AlreadyAssigned {
            path: vec!["u".to_string(), "v".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "a transition endpoint is already bound for path [\"u\", \"v\"]"
        );
    }
}
