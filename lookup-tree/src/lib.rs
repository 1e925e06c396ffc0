//! An in-memory, ordered key-value index: a B-tree variant with a fixed
//! per-node leaf capacity, duplicate rejection on insert, and split with
//! promotion to the parent (or a new root) when a node overflows.
//!
//! Deletion, range iteration, rebalancing, concurrency and persistence are
//! out of scope — see the companion `vcpu` crate for the rest of this
//! workspace.

mod leaf;
mod node;
mod tree;

pub use tree::{LookupResult, Tree};

#[cfg(test)]
mod test;
