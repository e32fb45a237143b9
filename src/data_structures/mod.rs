//! Data structures for Lehua.
//!
//! This module contains the prefix trie and its supporting types.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - No recursion proportional to input length
//! - Allocation failure is either fatal or reported, never half-applied

pub mod prefix_trie;

// Re-export common data structures
pub use prefix_trie::{NodeId, Trie, TrieError, TrieNode, TrieResult, Words};
