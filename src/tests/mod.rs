//! Test modules for Lehua.
//!
//! This module contains the in-crate test suites:
//! - Unit tests for configuration and error handling
//! - Scenario and property-based tests for the prefix trie
//! - Test fixtures and proptest strategies shared between suites


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{small_alphabet_word, word_list_strategy, TestFixture};
