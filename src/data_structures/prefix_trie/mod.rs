// Copyright (c) 2025 Lehua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix Trie Implementation
//!
//! A prefix tree storing a set of strings over a finite alphabet. It answers
//! two kinds of query: enumerate every stored string that starts with a
//! prefix, and find the longest prefix of an input that exists as a path in
//! the tree.
//!
//! # Symbols
//!
//! The trie is generic over its symbol type `S`. Any `Copy + Ord` type
//! works; `u8` indexes byte strings and `char` indexes Unicode scalar
//! values. Symbols are treated as opaque: there is no normalization, case
//! folding or grapheme segmentation.
//!
//! # Representation
//!
//! Nodes are kept in an arena owned by the trie and refer to their children
//! by index. Dropping the trie drops the arena in one step, and enumeration
//! runs on an explicit work stack, so neither depends on call-stack depth.
//!
//! # Example
//!
//! ```
//! use lehua_lib::data_structures::prefix_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.store_str("car");
//! trie.store_str("cards");
//! trie.store_str("cat");
//!
//! assert_eq!(trie.words_starting_with_str("car"), vec!["car", "cards"]);
//!
//! // Path existence is enough; "ca" itself was never stored.
//! assert_eq!(trie.longest_prefix_str("cab"), "ca");
//! ```

mod error;
mod iter;
mod node;

use std::collections::TryReserveError;

use tracing::{debug, trace, warn};

pub use error::{TrieError, TrieResult};
pub use iter::Words;
pub use node::{NodeId, TrieNode};

/// A prefix tree over symbols of type `S`.
///
/// Key properties:
/// * Insertion is monotonic: nodes are only ever added, and a node that
///   ends a stored string keeps doing so
/// * Enumeration yields a stored string before its extensions, siblings in
///   ascending symbol order
/// * `longest_prefix` matches on path existence, not on stored strings
///
/// The trie is a plain owned value. It performs no internal locking; share
/// it across threads behind whatever lock the caller already uses.
#[derive(Debug, Clone)]
pub struct Trie<S> {
    /// Node arena; index 0 is the root and represents the empty prefix
    nodes: Vec<TrieNode<S>>,
}

impl<S: Copy + Ord> Trie<S> {
    /// Creates an empty trie holding only a non-terminal root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
        }
    }

    /// Stores `s`, creating any nodes its path is missing.
    ///
    /// Storing the empty sequence marks the root terminal. Storing a string
    /// that is already present changes nothing.
    ///
    /// # Returns
    ///
    /// `true` if `s` was not stored before this call.
    ///
    /// # Aborts
    ///
    /// Does not return if memory for the new nodes cannot be allocated; the
    /// process aborts. Use [`Trie::try_store`] to get the failure as a value.
    pub fn store(&mut self, s: &[S]) -> bool {
        let (from, matched) = self.walk(s);
        let missing = &s[matched..];

        self.nodes.reserve(missing.len());
        let fresh = missing.iter().map(|_| TrieNode::new());
        let end = self.attach(from, missing, fresh);
        self.finish(end, missing.len())
    }

    /// Stores `s`, reporting allocation failure instead of aborting.
    ///
    /// Every allocation the new path needs is reserved before the first
    /// node is linked, so on error the trie is exactly as it was.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if `s` was not stored before this call.
    /// * `Err(TrieError)` - If memory for the new path could not be reserved.
    pub fn try_store(&mut self, s: &[S]) -> TrieResult<bool> {
        let (from, matched) = self.walk(s);
        let missing = &s[matched..];

        let fresh = match self.reserve_path(from, missing.len()) {
            Ok(fresh) => fresh,
            Err(source) => {
                warn!(requested = missing.len(), error = %source, "trie insertion refused");
                return Err(TrieError::AllocationFailed {
                    requested: missing.len(),
                    source,
                });
            }
        };

        let end = self.attach(from, missing, fresh.into_iter());
        Ok(self.finish(end, missing.len()))
    }

    /// Returns every stored string that starts with `prefix`.
    ///
    /// An absent prefix yields an empty vector. The empty prefix yields
    /// every stored string. A prefix that is itself stored yields itself
    /// followed by its extensions.
    pub fn words_starting_with(&self, prefix: &[S]) -> Vec<Vec<S>> {
        let words: Vec<Vec<S>> = self
            .iter_prefix(prefix)
            .map(Iterator::collect)
            .unwrap_or_default();
        debug!(prefix_len = prefix.len(), matches = words.len(), "prefix enumeration");
        words
    }

    /// Lazily enumerates the stored strings that start with `prefix`.
    ///
    /// # Returns
    ///
    /// `None` if no path for `prefix` exists in the trie.
    pub fn iter_prefix(&self, prefix: &[S]) -> Option<Words<'_, S>> {
        self.navigate(prefix)
            .map(|start| Words::new(&self.nodes, start, prefix))
    }

    /// Returns the longest prefix of `s` that exists as a path in the trie.
    ///
    /// Whether any stored string ends on that path is irrelevant; an
    /// internal node counts as much as a terminal one.
    pub fn longest_prefix(&self, s: &[S]) -> Vec<S> {
        let (_, matched) = self.walk(s);
        s[..matched].to_vec()
    }

    /// Returns `true` if `s` itself was stored.
    pub fn contains(&self, s: &[S]) -> bool {
        self.navigate(s)
            .is_some_and(|id| self.nodes[id.index()].is_terminal())
    }

    /// Returns `true` if nothing, not even the empty string, is stored.
    pub fn is_empty(&self) -> bool {
        let root = &self.nodes[NodeId::ROOT.index()];
        root.is_leaf() && !root.is_terminal()
    }

    /// Number of nodes in the trie, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode<S> {
        &self.nodes[NodeId::ROOT.index()]
    }

    /// Looks up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode<S>> {
        self.nodes.get(id.index())
    }

    /// Follows `s` from the root as far as edges exist.
    ///
    /// Returns the deepest node reached and how many symbols of `s` were
    /// consumed to get there.
    fn walk(&self, s: &[S]) -> (NodeId, usize) {
        let mut node = NodeId::ROOT;
        for (matched, &symbol) in s.iter().enumerate() {
            match self.nodes[node.index()].child(symbol) {
                Some(next) => node = next,
                None => return (node, matched),
            }
        }
        (node, s.len())
    }

    /// Returns the node spelled by `prefix`, if its whole path exists.
    fn navigate(&self, prefix: &[S]) -> Option<NodeId> {
        match self.walk(prefix) {
            (node, matched) if matched == prefix.len() => Some(node),
            _ => None,
        }
    }

    /// Reserves everything needed to hang `count` new nodes below `from`.
    ///
    /// Only capacities change here; no node is linked.
    fn reserve_path(
        &mut self,
        from: NodeId,
        count: usize,
    ) -> Result<Vec<TrieNode<S>>, TryReserveError> {
        let mut fresh = Vec::new();
        if count == 0 {
            return Ok(fresh);
        }

        fresh.try_reserve_exact(count)?;
        for _ in 1..count {
            fresh.push(TrieNode::try_with_child_slot()?);
        }
        fresh.push(TrieNode::new());

        self.nodes.try_reserve(count)?;
        self.nodes[from.index()].try_reserve_edge()?;
        Ok(fresh)
    }

    /// Appends `fresh` nodes to the arena and links them along `missing`,
    /// starting below `from`. Returns the last node of the path.
    fn attach<I>(&mut self, from: NodeId, missing: &[S], fresh: I) -> NodeId
    where
        I: Iterator<Item = TrieNode<S>>,
    {
        let mut node = from;
        for (&symbol, child_node) in missing.iter().zip(fresh) {
            let child = NodeId::new(self.nodes.len());
            self.nodes.push(child_node);
            self.nodes[node.index()].link(symbol, child);
            node = child;
        }
        node
    }

    /// Marks `end` terminal and reports whether that was news.
    fn finish(&mut self, end: NodeId, created: usize) -> bool {
        let node = &mut self.nodes[end.index()];
        let is_new = !node.is_terminal();
        node.mark_terminal();
        trace!(created, is_new, total_nodes = self.nodes.len(), "stored string");
        is_new
    }
}

impl Trie<char> {
    /// Stores the characters of `s`.
    pub fn store_str(&mut self, s: &str) -> bool {
        let symbols: Vec<char> = s.chars().collect();
        self.store(&symbols)
    }

    /// Fallible counterpart of [`Trie::store_str`].
    pub fn try_store_str(&mut self, s: &str) -> TrieResult<bool> {
        let symbols: Vec<char> = s.chars().collect();
        self.try_store(&symbols)
    }

    /// [`Trie::words_starting_with`] for string input and output.
    pub fn words_starting_with_str(&self, prefix: &str) -> Vec<String> {
        let symbols: Vec<char> = prefix.chars().collect();
        self.words_starting_with(&symbols)
            .into_iter()
            .map(|word| word.into_iter().collect())
            .collect()
    }

    /// [`Trie::longest_prefix`] for string input and output.
    pub fn longest_prefix_str(&self, s: &str) -> String {
        let symbols: Vec<char> = s.chars().collect();
        self.longest_prefix(&symbols).into_iter().collect()
    }

    /// [`Trie::contains`] for string input.
    pub fn contains_str(&self, s: &str) -> bool {
        let symbols: Vec<char> = s.chars().collect();
        self.contains(&symbols)
    }
}

impl<S: Copy + Ord> Default for Trie<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Copy + Ord> Extend<Vec<S>> for Trie<S> {
    fn extend<I: IntoIterator<Item = Vec<S>>>(&mut self, iter: I) {
        for word in iter {
            self.store(&word);
        }
    }
}

impl<S: Copy + Ord> FromIterator<Vec<S>> for Trie<S> {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<'a> Extend<&'a str> for Trie<char> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.store_str(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie<char> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn set(words: Vec<String>) -> BTreeSet<String> {
        words.into_iter().collect()
    }

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = Trie::new();

        // Test initial state
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);

        // Test insertion
        assert!(trie.store_str("hello"));
        assert!(!trie.is_empty());
        assert_eq!(trie.node_count(), 6);
        assert!(trie.contains_str("hello"));
        assert!(!trie.contains_str("hell"));

        // Storing again is a no-op
        assert!(!trie.store_str("hello"));
        assert_eq!(trie.node_count(), 6);

        // A shorter word reuses the path
        assert!(trie.store_str("hell"));
        assert_eq!(trie.node_count(), 6);
        assert!(trie.contains_str("hell"));
    }

    #[test]
    fn test_empty_trie_queries() {
        let trie = Trie::<char>::new();
        assert!(trie.words_starting_with_str("anything").is_empty());
        assert!(trie.words_starting_with_str("").is_empty());
        assert_eq!(trie.longest_prefix_str("anything"), "");
        assert!(trie.iter_prefix(&['a']).is_none());
    }

    #[test]
    fn test_trie_prefix_search() {
        let mut trie = Trie::new();
        trie.store_str("ab");
        trie.store_str("abc");
        trie.store_str("abd");
        trie.store_str("banana");

        assert_eq!(
            set(trie.words_starting_with_str("ab")),
            set(vec!["ab".into(), "abc".into(), "abd".into()])
        );
        assert_eq!(trie.words_starting_with_str("abc"), vec!["abc"]);
        assert!(trie.words_starting_with_str("orange").is_empty());
        assert_eq!(trie.longest_prefix_str("abz"), "ab");
    }

    #[test]
    fn test_internal_node_prefix_returns_descendants() {
        let mut trie = Trie::new();
        trie.store_str("car");
        trie.store_str("cards");

        assert_eq!(trie.words_starting_with_str("ca"), vec!["car", "cards"]);
        assert_eq!(trie.words_starting_with_str("car"), vec!["car", "cards"]);
        assert_eq!(trie.words_starting_with_str("card"), vec!["cards"]);
    }

    #[test]
    fn test_longest_prefix_ignores_terminal_flag() {
        let mut trie = Trie::new();
        trie.store_str("cat");
        trie.store_str("car");

        assert_eq!(trie.longest_prefix_str("ca"), "ca");
        assert_eq!(trie.longest_prefix_str("cart"), "car");
        assert_eq!(trie.longest_prefix_str("dog"), "");
        assert_eq!(trie.longest_prefix_str(""), "");
    }

    #[test]
    fn test_empty_string_marks_root() {
        let mut trie = Trie::new();
        assert!(trie.store_str(""));
        assert!(!trie.is_empty());
        assert!(trie.root().is_terminal());
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.words_starting_with_str(""), vec![""]);

        trie.store_str("a");
        assert_eq!(trie.words_starting_with_str(""), vec!["", "a"]);
    }

    #[test]
    fn test_byte_symbols() {
        let mut trie: Trie<u8> = [b"\x00\xff".to_vec(), b"\x00".to_vec()]
            .into_iter()
            .collect();
        assert_eq!(
            trie.words_starting_with(&[0]),
            vec![vec![0u8], vec![0u8, 0xff]]
        );
        assert_eq!(trie.longest_prefix(&[0, 0xff, 7]), vec![0u8, 0xff]);
        assert!(trie.store(&[1]));
    }

    #[test]
    fn test_try_store_matches_store() {
        let mut fallible = Trie::new();
        let mut infallible = Trie::new();
        for word in ["ab", "abc", "", "b", "abc"] {
            let expected = infallible.store_str(word);
            assert_eq!(fallible.try_store_str(word).unwrap(), expected);
        }
        assert_eq!(fallible.node_count(), infallible.node_count());
        assert_eq!(
            fallible.words_starting_with_str(""),
            infallible.words_starting_with_str("")
        );
    }

    #[test]
    fn test_failed_try_store_leaves_trie_unchanged() {
        // Zero-sized symbols let the path be long enough that reserving its
        // nodes overflows capacity.
        let mut trie = Trie::<()>::new();
        let huge = vec![(); usize::MAX / 2];

        let result = trie.try_store(&huge);
        assert!(matches!(
            result,
            Err(TrieError::AllocationFailed { requested, .. }) if requested == huge.len()
        ));
        assert_eq!(trie.node_count(), 1);
        assert!(trie.is_empty());
        assert!(trie.root().is_leaf());
        assert!(!trie.contains(&[()]));

        // The trie is still usable afterwards.
        assert!(trie.try_store(&[(), ()]).unwrap());
        assert_eq!(trie.node_count(), 3);
        assert_eq!(trie.words_starting_with(&[]), vec![vec![(), ()]]);
    }

    #[test]
    fn test_nodes_are_reachable_by_id() {
        let mut trie = Trie::new();
        trie.store(b"ab");
        let (_, a) = trie.root().children()[0];
        let a_node = trie.node(a).unwrap();
        assert!(!a_node.is_terminal());
        let (symbol, b) = a_node.children()[0];
        assert_eq!(symbol, b'b');
        assert!(trie.node(b).unwrap().is_terminal());
        assert!(trie.node(NodeId::new(99)).is_none());
    }

    #[test]
    fn test_collect_from_str() {
        let trie: Trie<char> = ["dog", "dot", "do"].into_iter().collect();
        assert_eq!(trie.words_starting_with_str("do"), vec!["do", "dog", "dot"]);
        assert_eq!(trie.longest_prefix_str("cat"), "");
    }

    #[test]
    fn test_unicode_scalars_are_atomic() {
        let mut trie = Trie::new();
        trie.store_str("héllo");
        trie.store_str("hé");
        assert_eq!(trie.words_starting_with_str("hé"), vec!["hé", "héllo"]);
        assert_eq!(trie.longest_prefix_str("hex"), "h");
    }
}
