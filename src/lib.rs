//! Alanui PFA Library
//!
//! This library contains the routing core of a probabilistic finite
//! automaton (PFA) execution engine: a concurrent, trie-shaped registry
//! that maps ordered symbol sequences to opaque transition endpoints.
//! An external automaton builder populates the registry during setup,
//! and an external automaton executor resolves next-state endpoints
//! while stepping through an incoming symbol stream.
//!
//! # Architecture
//!
//! The library is designed with the following principles in mind:
//! - Fine-grained locking: one independent reader/writer lock per node,
//!   never shared across the tree
//! - Lock hold times bounded to a single map probe or slot access
//! - Comprehensive error handling and propagation
//! - No global state: one registry value per automaton instance

// Re-export public modules
pub mod data_structures;

/// Version information for the Alanui PFA library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
