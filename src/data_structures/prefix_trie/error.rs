// Copyright (c) 2025 Lehua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix trie.
//!
//! Queries on the trie are total and never fail. The only failure is running
//! out of memory while growing the tree, and only [`Trie::try_store`]
//! reports it as a value.
//!
//! [`Trie::try_store`]: super::Trie::try_store

use std::collections::TryReserveError;

/// Errors that can occur in prefix trie operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// Memory for the new path could not be reserved.
    #[error("Failed to allocate {requested} trie node(s): {source}")]
    AllocationFailed {
        /// Number of nodes the insertion needed to create.
        requested: usize,
        /// The underlying reservation failure.
        #[source]
        source: TryReserveError,
    },
}

/// Result type for prefix trie operations
pub type TrieResult<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation_failure() -> TryReserveError {
        let mut v: Vec<u64> = Vec::new();
        v.try_reserve(usize::MAX).unwrap_err()
    }

    #[test]
    fn test_error_display() {
        let err = TrieError::AllocationFailed {
            requested: 3,
            source: reservation_failure(),
        };
        assert!(err.to_string().starts_with("Failed to allocate 3 trie node(s)"));
    }

    #[test]
    fn test_error_source_is_exposed() {
        let err = TrieError::AllocationFailed {
            requested: 1,
            source: reservation_failure(),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
