//! Data structures for the Alanui PFA library.
//!
//! This module contains the specialized data structures that make up the
//! automaton routing core. All implementations adhere to the strict
//! project requirements:
//! - No unsafe code
//! - Fine-grained, per-node locking
//! - Bounded lock hold times in every operation

pub mod alanui_registry;

// Re-export common data structures
pub use alanui_registry::{AlanuiRegistry, AlanuiRegistryError, AlanuiRegistryResult};
