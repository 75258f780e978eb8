use std::fmt::Display;

use super::{Hasher, NodeId};

/// A branch is a node that has between 1 and `branching_factor` children.
/// Its hash is the hash of the concatenation of the children hashes, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch<const HASH_SIZE: usize> {
    children: Vec<NodeId>,
    node_hash: [u8; HASH_SIZE],
    parent: Option<NodeId>,
}

impl<const HASH_SIZE: usize> Branch<HASH_SIZE> {
    /// Creates a new [`Branch`]. This function performs a hash.
    ///
    /// `digests` must hold the hashes of `children`, in the same order.
    pub fn new<H: Hasher<HASH_SIZE>>(children: Vec<NodeId>, digests: &[[u8; HASH_SIZE]]) -> Self {
        debug_assert_eq!(children.len(), digests.len());
        Self {
            children,
            node_hash: H::hash(digests.concat().as_slice()),
            parent: None,
        }
    }

    /// Returns the hash of the node. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        self.node_hash
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }
}

impl<const HASH_SIZE: usize> Display for Branch<HASH_SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Branch {{ children: {}, hash: {} }}",
            self.children.len(),
            hex::encode(self.hash().as_slice())
        )
    }
}
