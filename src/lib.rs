//! Dynamic Merkle Tree implementation
//!
//! This crate provides a merkle tree over an ordered list of content items where the
//! number of children per internal node (the branching factor) is configurable.
//!
//! The tree supports:
//! - Any branching factor of 2 or more
//! - Padding of the leaf layer with duplicates of the last leaf
//! - Appending and updating contents, each followed by a full rebuild
//! - Concurrent readers through a per-tree reader/writer lock
//! - Flexible hashing through the `Hasher` trait, SHA-256 by default
//!
//! ```
//! use dmerkle::{Content, DMerkleTree};
//! use sha2::{Digest, Sha256};
//!
//! #[derive(Clone)]
//! struct Text(String);
//!
//! impl Content<32> for Text {
//!     type Error = std::convert::Infallible;
//!
//!     fn calculate_hash(&self) -> Result<[u8; 32], Self::Error> {
//!         Ok(Sha256::digest(self.0.as_bytes()).into())
//!     }
//!
//!     fn equals(&self, other: &Self) -> Result<bool, Self::Error> {
//!         Ok(self.0 == other.0)
//!     }
//! }
//!
//! let contents = ["Hello", "Hi", "Hey", "Hola"].map(|s| Text(s.to_string())).to_vec();
//! let tree = DMerkleTree::<32, Text>::new(contents, 2).unwrap();
//! assert_eq!(
//!     hex::encode(tree.root_hash()),
//!     "5f30cc80133b9394156e24b233f0c4be32b24e44bb3381f02c7ba52619d0febc"
//! );
//! ```

mod content;
mod error;
mod node;
mod tree;

pub use content::{Content, ThreadSafe};
pub use error::TreeError;
pub use node::{Branch, Hasher, Leaf, Node, NodeId};
pub use tree::{
    DMerkleTree, MerkleArena, RebuildMode, TreeBuilder, TreeConfig, DEFAULT_BRANCHING_FACTOR,
};

#[cfg(test)]
mod tests;
