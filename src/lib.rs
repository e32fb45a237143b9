//! Lehua Prefix Trie Library
//!
//! This library contains an in-memory prefix tree for storing a set of
//! strings and answering prefix queries, together with the configuration,
//! error handling and word-list loading used by the `lehua` binary.
//!
//! # Architecture
//!
//! - `data_structures::prefix_trie` is the core and has no dependency on
//!   the rest of the crate besides `tracing`
//! - `wordlist` and `output` bridge files and terminals to the trie
//! - `cli` parses arguments and runs one subcommand
//! - `config` and `error` follow the same layout as the binary expects

pub mod cli;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod output;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lehua.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
