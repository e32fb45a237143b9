// Copyright (c) 2025 Lehua Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy enumeration of stored strings below a node.
//!
//! The walk is depth-first and driven by an explicit work stack, so the call
//! stack stays flat no matter how long the stored strings are. A single
//! symbol buffer holds the path to the node being visited; each stack frame
//! remembers how much of that buffer belonged to its parent.

use std::iter::FusedIterator;

use super::node::{NodeId, TrieNode};

/// A pending visit on the work stack.
#[derive(Debug, Clone, Copy)]
struct Frame<S> {
    /// Node to visit
    node: NodeId,
    /// Buffer length at the parent before this edge is appended
    depth: usize,
    /// Symbol on the edge into `node`; `None` for the starting node
    symbol: Option<S>,
}

/// Iterator over every stored string that starts with a given prefix.
///
/// Strings come out in pre-order with children in ascending symbol order,
/// so a stored string is always yielded before its extensions. Each item
/// includes the prefix.
///
/// Created by [`Trie::iter_prefix`](super::Trie::iter_prefix).
#[derive(Debug, Clone)]
pub struct Words<'a, S> {
    nodes: &'a [TrieNode<S>],
    stack: Vec<Frame<S>>,
    buffer: Vec<S>,
}

impl<'a, S: Copy + Ord> Words<'a, S> {
    /// Starts an enumeration at `start`, whose path from the root spells
    /// `prefix`.
    pub(crate) fn new(nodes: &'a [TrieNode<S>], start: NodeId, prefix: &[S]) -> Self {
        Self {
            nodes,
            stack: vec![Frame {
                node: start,
                depth: prefix.len(),
                symbol: None,
            }],
            buffer: prefix.to_vec(),
        }
    }
}

impl<S: Copy + Ord> Iterator for Words<'_, S> {
    type Item = Vec<S>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            self.buffer.truncate(frame.depth);
            if let Some(symbol) = frame.symbol {
                self.buffer.push(symbol);
            }

            let node = &self.nodes[frame.node.index()];
            let depth = self.buffer.len();
            // Reverse push so the smallest symbol is popped first.
            self.stack
                .extend(node.children().iter().rev().map(|&(symbol, child)| Frame {
                    node: child,
                    depth,
                    symbol: Some(symbol),
                }));

            if node.is_terminal() {
                return Some(self.buffer.clone());
            }
        }
        None
    }
}

impl<S: Copy + Ord> FusedIterator for Words<'_, S> {}
