mod branch;
mod leaf;

use sha2::{Digest, Sha256};
use std::fmt::{Debug, Display};

pub use branch::Branch;
pub use leaf::Leaf;

impl Hasher<32> for Sha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Simple hash trait required to hash the nodes in the tree
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
pub trait Hasher<const HASH_SIZE: usize> {
    fn hash(data: &[u8]) -> [u8; HASH_SIZE];
}

/// Position of a node in its [`MerkleArena`](crate::MerkleArena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All possible nodes in the tree.
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
/// * `C` - The content type held by the leaves
#[derive(Clone)]
pub enum Node<const HASH_SIZE: usize, C> {
    /// A leaf wrapping one content item, real or padding
    Leaf(Leaf<HASH_SIZE, C>),
    /// An internal node with up to `branching_factor` children
    Branch(Branch<HASH_SIZE>),
}

impl<const HASH_SIZE: usize, C> Debug for Node<HASH_SIZE, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(leaf) => write!(
                f,
                "Leaf {{ duplicate: {}, hash: {:?}, parent: {:?} }}",
                leaf.is_duplicate(),
                leaf.hash(),
                leaf.parent()
            ),
            Self::Branch(branch) => write!(
                f,
                "Branch {{ children: {:?}, hash: {:?}, parent: {:?} }}",
                branch.children(),
                branch.hash(),
                branch.parent()
            ),
        }
    }
}

impl<const HASH_SIZE: usize, C> Display for Node<HASH_SIZE, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(leaf) => write!(f, "{}", leaf),
            Self::Branch(branch) => write!(f, "{}", branch),
        }
    }
}

impl<const HASH_SIZE: usize, C> Node<HASH_SIZE, C> {
    /// Returns the hash of the node. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        match self {
            Self::Leaf(leaf) => leaf.hash(),
            Self::Branch(branch) => branch.hash(),
        }
    }

    /// Returns the parent of the node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Self::Leaf(leaf) => leaf.parent(),
            Self::Branch(branch) => branch.parent(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns `true` for padding leaves.
    pub fn is_duplicate(&self) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.is_duplicate(),
            Self::Branch(_) => false,
        }
    }

    /// Returns the ordered children of the node. Empty for leaves.
    pub fn children(&self) -> &[NodeId] {
        match self {
            Self::Leaf(_) => &[],
            Self::Branch(branch) => branch.children(),
        }
    }

    /// Returns the content of a leaf.
    pub fn content(&self) -> Option<&C> {
        match self {
            Self::Leaf(leaf) => Some(leaf.content()),
            Self::Branch(_) => None,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        match self {
            Self::Leaf(leaf) => leaf.set_parent(parent),
            Self::Branch(branch) => branch.set_parent(parent),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Branch, Leaf, Node, NodeId};
    use crate::tests::Text;
    use hex_literal::hex;
    use sha2::Sha256;

    #[test]
    fn test_sha256_hasher() {
        assert_eq!(
            <Sha256 as super::Hasher<32>>::hash(b"Hello"),
            hex!("185f8db32271fe25f561a6fc938b2e264306ec304eda518007d1764826381969")
        );
    }

    #[test]
    fn test_node_accessors() {
        let leaf = Node::<32, Text>::Leaf(Leaf::new(Text::from("Hello")).unwrap());
        assert!(leaf.is_leaf());
        assert!(!leaf.is_duplicate());
        assert!(leaf.children().is_empty());
        assert_eq!(leaf.content(), Some(&Text::from("Hello")));
        assert_eq!(leaf.parent(), None);

        let branch = Node::<32, Text>::Branch(Branch::new::<Sha256>(
            vec![NodeId(0), NodeId(1)],
            &[leaf.hash(), leaf.hash()],
        ));
        assert!(!branch.is_leaf());
        assert_eq!(branch.children(), &[NodeId(0), NodeId(1)]);
        assert_eq!(branch.content(), None);
    }

    #[test]
    fn test_node_display() {
        let leaf = Node::<32, Text>::Leaf(Leaf::new(Text::from("Hello")).unwrap());
        assert_eq!(
            format!("{}", leaf),
            "Leaf { duplicate: false, hash: 185f8db32271fe25f561a6fc938b2e264306ec304eda518007d1764826381969 }"
        );
        let mut branch = Node::<32, Text>::Branch(Branch::new::<Sha256>(
            vec![NodeId(0), NodeId(1)],
            &[leaf.hash(), leaf.hash()],
        ));
        branch.set_parent(NodeId(7));
        assert_eq!(branch.parent(), Some(NodeId(7)));
        assert!(format!("{}", branch).starts_with("Branch { children: 2, hash: "));
        assert!(format!("{:?}", branch).ends_with("parent: Some(NodeId(7)) }"));
    }
}
