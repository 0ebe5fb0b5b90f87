//! Alanui Transition Registry implementation.
//!
//! This module provides a concurrent trie-based registry that maps
//! ordered symbol sequences (paths) to opaque transition endpoints. It
//! is the routing core of a probabilistic finite automaton engine: given
//! the symbols consumed so far, it resolves the endpoint representing
//! the next automaton state to signal.
//!
//! Key features:
//! * Write-once binding: each path maps to at most one endpoint
//! * Thread-safe with one independent reader/writer lock per node
//! * Lock hold times bounded to a single map probe or slot access
//! * Memory efficient representation for shared path prefixes

mod node;
mod error;

use std::sync::Arc;

use parking_lot::RwLock;

pub use error::{AlanuiRegistryError, AlanuiRegistryResult};
use node::RegistryNode;

#[cfg(test)]
mod tests;

/// Alanui Transition Registry is a concurrent trie mapping symbol
/// sequences to transition endpoints.
///
/// The endpoint type `T` is caller-opaque: the registry never inspects
/// it, it only requires that it can be cloned out on lookup. The
/// registry is populated by an automaton builder via [`insert`] and
/// queried by an automaton executor via [`lookup`]; both may run
/// concurrently from any number of threads for the registry's whole
/// lifetime. There is no removal and no teardown protocol.
///
/// [`insert`]: AlanuiRegistry::insert
/// [`lookup`]: AlanuiRegistry::lookup
///
/// # Example
///
/// ```
/// use alanui_pfa_lib::data_structures::alanui_registry::AlanuiRegistry;
///
/// let registry = AlanuiRegistry::new();
///
/// registry.insert(&["u", "v"], 7).unwrap();
/// assert_eq!(registry.lookup(&["u", "v"]), Ok(7));
///
/// // Binding is write-once per path.
/// assert!(registry.insert(&["u", "v"], 8).is_err());
/// assert_eq!(registry.lookup(&["u", "v"]), Ok(7));
/// ```
#[derive(Debug)]
pub struct AlanuiRegistry<T> {
    /// The root node of the trie. The empty path resolves to this
    /// node's own terminal slot.
    root: Arc<RwLock<RegistryNode<T>>>,
}

impl<T: Clone> AlanuiRegistry<T> {
    /// Creates a new empty registry containing just a root node.
    pub fn new() -> Self {
        Self {
            root: Arc::new(RwLock::new(RegistryNode::new())),
        }
    }

    /// Binds `endpoint` to `path`, creating interior nodes as needed.
    ///
    /// The walk descends one symbol at a time from the root. Missing
    /// children are created with an atomic create-or-fetch under the
    /// parent's write lock, so two callers racing to create the same
    /// (parent, symbol) edge both continue through the single node that
    /// won installation. Binding is write-once: if an endpoint is
    /// already bound at `path`, the call fails with
    /// [`AlanuiRegistryError::AlreadyAssigned`] and mutates nothing
    /// further. Interior nodes created on the way to a failed bind
    /// remain as valid empty nodes, which is harmless and idempotent
    /// for future inserts along the same prefix.
    ///
    /// An empty `path` binds the root node's own terminal slot.
    pub fn insert<S: AsRef<str>>(&self, path: &[S], endpoint: T) -> AlanuiRegistryResult<()> {
        let mut node = Arc::clone(&self.root);

        for symbol in path {
            let symbol = symbol.as_ref();

            // Fast path: probe under the read lock, the child usually
            // exists already once the automaton is warm.
            let existing = node.read().children.get(symbol).cloned();

            let next = match existing {
                Some(child) => child,
                None => {
                    // A racing inserter may have installed the child
                    // between the read probe and this acquisition;
                    // entry() hands back whichever node won.
                    let mut parent = node.write();
                    Arc::clone(
                        parent
                            .children
                            .entry(symbol.to_owned())
                            .or_insert_with(|| Arc::new(RwLock::new(RegistryNode::new()))),
                    )
                }
            };

            // Descend without holding the parent's lock.
            node = next;
        }

        // Racing binders for the same path are linearized here; the
        // loser observes the bound slot and fails deterministically.
        let mut end = node.write();
        if end.terminal.is_some() {
            drop(end);
            tracing::debug!(depth = path.len(), "endpoint already bound, insert rejected");
            return Err(AlanuiRegistryError::AlreadyAssigned {
                path: owned_path(path),
            });
        }
        end.terminal = Some(endpoint);
        drop(end);

        tracing::trace!(depth = path.len(), "transition endpoint bound");
        Ok(())
    }

    /// Resolves the endpoint bound at exactly `path`.
    ///
    /// The walk takes each node's read lock only for the single child
    /// probe, releases it, then descends, so lookups on disjoint
    /// subtrees never contend. Fails with
    /// [`AlanuiRegistryError::NotFound`] when a symbol has no child
    /// (`failed_at` is that symbol's index) or when the full path lands
    /// on a pass-through interior node with no bound endpoint
    /// (`failed_at` is the path length).
    ///
    /// An empty `path` resolves the root node's own terminal slot.
    pub fn lookup<S: AsRef<str>>(&self, path: &[S]) -> AlanuiRegistryResult<T> {
        let mut node = Arc::clone(&self.root);

        for (index, symbol) in path.iter().enumerate() {
            let next = node.read().children.get(symbol.as_ref()).cloned();
            match next {
                Some(child) => node = child,
                None => {
                    return Err(AlanuiRegistryError::NotFound {
                        path: owned_path(path),
                        failed_at: index,
                    });
                }
            }
        }

        let end = node.read();
        match end.terminal.as_ref() {
            Some(endpoint) => Ok(endpoint.clone()),
            None => Err(AlanuiRegistryError::NotFound {
                path: owned_path(path),
                failed_at: path.len(),
            }),
        }
    }

    /// Checks whether an endpoint is bound at exactly `path`, without
    /// cloning it out.
    pub fn contains<S: AsRef<str>>(&self, path: &[S]) -> bool {
        let mut node = Arc::clone(&self.root);

        for symbol in path {
            let next = node.read().children.get(symbol.as_ref()).cloned();
            match next {
                Some(child) => node = child,
                None => return false,
            }
        }

        let bound = node.read().terminal.is_some();
        bound
    }

    /// Returns the number of bound endpoints in the registry.
    ///
    /// This traverses the entire trie under read locks, so it is an
    /// O(n) operation intended for diagnostics and tests, not the
    /// execution hot path.
    pub fn len(&self) -> usize {
        let root = self.root.read();
        Self::count_bound(&root)
    }

    /// Checks whether the registry has no bound endpoints and no
    /// interior nodes.
    pub fn is_empty(&self) -> bool {
        let root = self.root.read();
        root.children.is_empty() && root.terminal.is_none()
    }

    /// Counts bound terminal slots in the subtree rooted at `node`.
    fn count_bound(node: &RegistryNode<T>) -> usize {
        let mut count = usize::from(node.terminal.is_some());

        for child in node.children.values() {
            let child_node = child.read();
            count += Self::count_bound(&child_node);
        }

        count
    }
}

impl<T: Clone> Default for AlanuiRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies a borrowed path into owned symbols for error reporting.
fn owned_path<S: AsRef<str>>(path: &[S]) -> Vec<String> {
    path.iter().map(|s| s.as_ref().to_owned()).collect()
}
