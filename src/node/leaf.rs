use std::fmt::Display;

use super::NodeId;
use crate::Content;

/// A Leaf is a node that has no children and wraps one content item.
/// They are the last row of the tree.
///
/// Padding leaves are copies of the last real leaf flagged as `duplicate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<const HASH_SIZE: usize, C> {
    content: C,
    duplicate: bool,
    node_hash: [u8; HASH_SIZE],
    parent: Option<NodeId>,
}

impl<const HASH_SIZE: usize, C: Content<HASH_SIZE>> Leaf<HASH_SIZE, C> {
    /// Creates a new [`Leaf`]. This function asks the content for its hash.
    pub fn new(content: C) -> Result<Self, C::Error> {
        let node_hash = content.calculate_hash()?;
        Ok(Self {
            content,
            duplicate: false,
            node_hash,
            parent: None,
        })
    }
}

impl<const HASH_SIZE: usize, C: Clone> Leaf<HASH_SIZE, C> {
    /// Creates a padding leaf carrying the hash and content of `last`. No hashing.
    pub fn duplicate_of(last: &Self) -> Self {
        Self {
            content: last.content.clone(),
            duplicate: true,
            node_hash: last.node_hash,
            parent: None,
        }
    }
}

impl<const HASH_SIZE: usize, C> Leaf<HASH_SIZE, C> {
    /// Returns the hash of the node. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        self.node_hash
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn is_duplicate(&self) -> bool {
        self.duplicate
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }
}

impl<const HASH_SIZE: usize, C> Display for Leaf<HASH_SIZE, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Leaf {{ duplicate: {}, hash: {} }}",
            self.duplicate,
            hex::encode(self.hash().as_slice())
        )
    }
}
