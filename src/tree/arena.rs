//! Immutable node storage for one built tree.

use std::marker::PhantomData;

use crate::{
    node::{Hasher, Leaf, Node, NodeId},
    Content, TreeError,
};

/// All the nodes of one built tree, stored layer by layer.
///
/// Children and parents reference each other through [`NodeId`]s, the leaves come
/// first and the root is the last node. An arena never changes once built: a
/// mutation of a [`DMerkleTree`](crate::DMerkleTree) builds a new one.
#[derive(Debug, Clone)]
pub struct MerkleArena<const HASH_SIZE: usize, C, H> {
    nodes: Vec<Node<HASH_SIZE, C>>,
    layers: Vec<Vec<NodeId>>,
    logical_len: usize,
    _phantom: PhantomData<fn() -> H>,
}

impl<const HASH_SIZE: usize, C, H> MerkleArena<HASH_SIZE, C, H> {
    /// `layers` must be non-empty, leaves first, with a single node in the last one.
    pub(crate) fn from_parts(
        nodes: Vec<Node<HASH_SIZE, C>>,
        layers: Vec<Vec<NodeId>>,
        logical_len: usize,
    ) -> Self {
        Self {
            nodes,
            layers,
            logical_len,
            _phantom: PhantomData,
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(self.nodes.len() - 1)
    }

    pub fn root(&self) -> &Node<HASH_SIZE, C> {
        &self.nodes[self.root_id().index()]
    }

    pub fn root_hash(&self) -> [u8; HASH_SIZE] {
        self.root().hash()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<HASH_SIZE, C>> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> &[Node<HASH_SIZE, C>] {
        &self.nodes
    }

    /// Node ids grouped by level, leaves first and root last.
    pub fn layers(&self) -> &[Vec<NodeId>] {
        &self.layers
    }

    /// Number of levels, leaves and root included.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Leaves in order, padding duplicates included.
    pub fn leaves(&self) -> impl Iterator<Item = &Leaf<HASH_SIZE, C>> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Leaf(leaf) => Some(leaf),
            Node::Branch(_) => None,
        })
    }

    /// Number of leaves, padding duplicates included.
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Number of real leaves.
    pub fn logical_len(&self) -> usize {
        self.logical_len
    }
}

impl<const HASH_SIZE: usize, C: Clone, H> MerkleArena<HASH_SIZE, C, H> {
    /// Content of every leaf, padding duplicates included.
    pub fn contents(&self) -> Vec<C> {
        self.leaves().map(|leaf| leaf.content().clone()).collect()
    }

    /// Content of the real leaves only.
    pub fn logical_contents(&self) -> Vec<C> {
        self.leaves()
            .filter(|leaf| !leaf.is_duplicate())
            .map(|leaf| leaf.content().clone())
            .collect()
    }
}

impl<const HASH_SIZE: usize, C: Content<HASH_SIZE>, H: Hasher<HASH_SIZE>>
    MerkleArena<HASH_SIZE, C, H>
{
    /// Checks layer by layer that every branch hash is the hash of its children
    /// hashes and that every child points back to its parent.
    pub fn verify(&self) -> Result<(), TreeError<C::Error>> {
        let root = self.root_id();
        if self.root().parent().is_some() {
            return Err(TreeError::Corrupted { node: root });
        }
        for layer in &self.layers {
            for &id in layer {
                let node = self.node(id).ok_or(TreeError::Corrupted { node: id })?;
                let Node::Branch(branch) = node else {
                    if node.parent().is_none() && id != root {
                        return Err(TreeError::Corrupted { node: id });
                    }
                    continue;
                };
                if branch.children().is_empty() {
                    return Err(TreeError::Corrupted { node: id });
                }
                let mut data = Vec::with_capacity(branch.children().len() * HASH_SIZE);
                for &child in branch.children() {
                    let child_node = self.node(child).ok_or(TreeError::Corrupted { node: id })?;
                    if child_node.parent() != Some(id) {
                        return Err(TreeError::Corrupted { node: child });
                    }
                    data.extend_from_slice(&child_node.hash());
                }
                if H::hash(&data) != branch.hash() {
                    return Err(TreeError::Corrupted { node: id });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use sha2::Sha256;

    use crate::{
        node::{Branch, Node, NodeId},
        tests::{texts, Text},
        TreeBuilder, TreeError,
    };

    fn build(contents: &[&str], branching_factor: usize) -> super::MerkleArena<32, Text, Sha256> {
        TreeBuilder::<32, Text, Sha256>::new(branching_factor)
            .unwrap()
            .build(texts(contents))
            .unwrap()
    }

    #[test]
    fn test_layers() {
        let arena = build(&["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"], 3);
        let sizes: Vec<usize> = arena.layers().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![12, 4, 2, 1]);
        assert_eq!(arena.depth(), 4);
        assert_eq!(arena.leaf_count(), 12);
        assert_eq!(arena.logical_len(), 10);
        assert_eq!(arena.nodes().len(), 19);
        assert_eq!(arena.root_id(), NodeId(18));
        assert_eq!(arena.root().parent(), None);
        arena.verify().unwrap();
    }

    #[test]
    fn test_contents() {
        let arena = build(&["a", "b", "c"], 2);
        assert_eq!(arena.contents(), texts(&["a", "b", "c", "c"]));
        assert_eq!(arena.logical_contents(), texts(&["a", "b", "c"]));
        assert_eq!(arena.leaves().filter(|leaf| leaf.is_duplicate()).count(), 1);
    }

    #[test]
    fn test_leaves_link_to_parents() {
        let arena = build(&["a", "b", "c", "d"], 2);
        for id in &arena.layers()[0] {
            let parent = arena.node(*id).unwrap().parent().unwrap();
            assert!(arena.node(parent).unwrap().children().contains(id));
        }
        assert!(arena.node(NodeId(100)).is_none());
    }

    #[test]
    fn test_verify_detects_bad_hash() {
        let mut arena = build(&["a", "b", "c", "d"], 2);
        // Replace the first branch with one hashing its children in reverse order.
        let forged = Branch::new::<Sha256>(
            vec![NodeId(0), NodeId(1)],
            &[arena.nodes[1].hash(), arena.nodes[0].hash()],
        );
        let mut forged = Node::Branch(forged);
        forged.set_parent(NodeId(6));
        arena.nodes[4] = forged;
        assert_eq!(
            arena.verify().unwrap_err(),
            TreeError::Corrupted { node: NodeId(4) }
        );
    }

    #[test]
    fn test_verify_detects_bad_parent() {
        let mut arena = build(&["a", "b", "c", "d"], 2);
        arena.nodes[3].set_parent(NodeId(4));
        assert_eq!(
            arena.verify().unwrap_err(),
            TreeError::Corrupted { node: NodeId(3) }
        );
    }
}
