// Copyright (c) 2025 Lehua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node storage for the prefix trie.
//!
//! Nodes live in a flat arena owned by the [`Trie`](super::Trie) and refer to
//! their children by [`NodeId`]. A node is never shared between two parents,
//! so the arena always describes a tree rooted at index 0.

use std::collections::TryReserveError;

/// Index of a node inside the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, present in every trie.
    pub const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the prefix trie.
///
/// The edge leading into a node carries the symbol; the node itself only
/// records its outgoing edges and whether a stored string ends here.
#[derive(Debug, Clone)]
pub struct TrieNode<S> {
    /// Outgoing edges, sorted by symbol
    children: Vec<(S, NodeId)>,

    /// Whether some stored string ends exactly at this node
    is_terminal: bool,
}

impl<S: Copy + Ord> TrieNode<S> {
    /// Creates a new node with no children that does not end a string.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            is_terminal: false,
        }
    }

    /// Creates a node with room for exactly one child, failing instead of
    /// aborting when the allocation cannot be satisfied.
    pub(crate) fn try_with_child_slot() -> Result<Self, TryReserveError> {
        let mut children = Vec::new();
        children.try_reserve_exact(1)?;
        Ok(Self {
            children,
            is_terminal: false,
        })
    }

    /// Returns the child reached by `symbol`, if that edge exists.
    pub fn child(&self, symbol: S) -> Option<NodeId> {
        self.children
            .binary_search_by(|(s, _)| s.cmp(&symbol))
            .ok()
            .map(|pos| self.children[pos].1)
    }

    /// Links `child` under `symbol`, keeping the edge list sorted.
    ///
    /// Callers only link a symbol that has no edge yet; an existing edge is
    /// left untouched.
    pub(crate) fn link(&mut self, symbol: S, child: NodeId) {
        if let Err(pos) = self.children.binary_search_by(|(s, _)| s.cmp(&symbol)) {
            self.children.insert(pos, (symbol, child));
        }
    }

    /// Reserves space for one more outgoing edge.
    pub(crate) fn try_reserve_edge(&mut self) -> Result<(), TryReserveError> {
        self.children.try_reserve(1)
    }

    /// Outgoing edges in ascending symbol order.
    pub fn children(&self) -> &[(S, NodeId)] {
        &self.children
    }

    /// Whether a stored string ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Marks this node as the end of a stored string. Never reverts.
    pub(crate) fn mark_terminal(&mut self) {
        self.is_terminal = true;
    }

    /// A node with no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl<S: Copy + Ord> Default for TrieNode<S> {
    fn default() -> Self {
        Self::new()
    }
}
