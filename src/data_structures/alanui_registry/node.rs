//! Node implementation for the Alanui Transition Registry.
//!
//! Nodes are the fundamental building blocks of the registry trie. Each
//! node owns a map from symbol to child node and an optional transition
//! endpoint, and is wrapped in its own reader/writer lock by the parent
//! that installs it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// A node in the Alanui Transition Registry.
///
/// Each node represents one symbol of a registered path. A node whose
/// `terminal` slot is bound marks the exact end of an inserted path;
/// nodes with an empty slot are pass-through interior nodes.
///
/// The `RwLock` wrapping a node is that node's own lock and guards
/// exactly this node's `children` map and `terminal` slot. It is never
/// the same lock instance as an ancestor's or descendant's.
#[derive(Debug)]
pub struct RegistryNode<T> {
    /// Map of symbols to child nodes.
    pub children: HashMap<String, Arc<RwLock<RegistryNode<T>>>>,

    /// The transition endpoint bound at this node, if any. Transitions
    /// from `None` to `Some` exactly once and is immutable afterwards.
    pub terminal: Option<T>,
}

impl<T> RegistryNode<T> {
    /// Creates a new empty registry node.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            terminal: None,
        }
    }
}

impl<T> Default for RegistryNode<T> {
    fn default() -> Self {
        Self::new()
    }
}
