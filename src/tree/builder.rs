//! Builds a [`MerkleArena`] from an ordered list of content items.
//!
//! The leaves are padded up to a multiple of the branching factor with copies of
//! the last real leaf. Layers above are grouped by `branching_factor` and hashed
//! until a single node is left. Only the leaf layer is padded: an intermediate
//! layer whose size is not a multiple of the branching factor ends with a
//! shorter group.

use std::marker::PhantomData;

use crate::{
    node::{Branch, Hasher, Leaf, Node, NodeId},
    Content, MerkleArena, TreeError,
};

/// Helper struct to build a dynamic merkle tree.
/// * `HASH_SIZE` - size of the hash digest in bytes.
/// * `C` - content held by the leaves.
/// * `H` - Hasher that will be used to hash internal nodes.
#[derive(Debug, Clone)]
pub struct TreeBuilder<const HASH_SIZE: usize, C, H> {
    branching_factor: usize,
    _phantom: PhantomData<fn() -> (C, H)>,
}

impl<const HASH_SIZE: usize, C, H> TreeBuilder<HASH_SIZE, C, H> {
    pub fn branching_factor(&self) -> usize {
        self.branching_factor
    }
}

impl<const HASH_SIZE: usize, C: Content<HASH_SIZE>, H: Hasher<HASH_SIZE>>
    TreeBuilder<HASH_SIZE, C, H>
{
    /// Creates a builder. Fails if `branching_factor < 2`.
    pub fn new(branching_factor: usize) -> Result<Self, TreeError<C::Error>> {
        if branching_factor < 2 {
            return Err(TreeError::InvalidBranchingFactor(branching_factor));
        }
        Ok(Self {
            branching_factor,
            _phantom: PhantomData,
        })
    }

    /// Hashes every content item into a leaf, in order, then pads the leaves to a
    /// multiple of the branching factor with duplicates of the last one.
    pub fn build_leaves(
        &self,
        contents: impl IntoIterator<Item = C>,
    ) -> Result<Vec<Leaf<HASH_SIZE, C>>, TreeError<C::Error>> {
        let mut leaves = contents
            .into_iter()
            .map(|content| Leaf::new(content).map_err(TreeError::Hash))
            .collect::<Result<Vec<_>, _>>()?;
        let Some(last) = leaves.last().cloned() else {
            return Err(TreeError::EmptyInput);
        };
        let remainder = leaves.len() % self.branching_factor;
        if remainder != 0 {
            let missing = self.branching_factor - remainder;
            leaves
                .try_reserve_exact(missing)
                .map_err(|_| TreeError::PaddingOverflow { requested: missing })?;
            leaves.extend((0..missing).map(|_| Leaf::duplicate_of(&last)));
        }
        Ok(leaves)
    }

    /// Groups `layer` by `branching_factor`, pushes one branch per group into `nodes`
    /// and links the children back to it. Returns the ids of the new branches.
    ///
    /// A layer no longer than the branching factor collapses into a single node.
    pub fn build_layer(
        &self,
        nodes: &mut Vec<Node<HASH_SIZE, C>>,
        layer: &[NodeId],
    ) -> Result<Vec<NodeId>, TreeError<C::Error>> {
        let mut parents = Vec::with_capacity(layer.len().div_ceil(self.branching_factor));
        for group in layer.chunks(self.branching_factor) {
            let digests = group
                .iter()
                .map(|id| {
                    nodes
                        .get(id.index())
                        .map(Node::hash)
                        .ok_or(TreeError::Corrupted { node: *id })
                })
                .collect::<Result<Vec<_>, _>>()?;
            let parent = NodeId(nodes.len());
            nodes.push(Node::Branch(Branch::new::<H>(group.to_vec(), &digests)));
            for child in group {
                nodes[child.index()].set_parent(parent);
            }
            parents.push(parent);
        }
        Ok(parents)
    }

    /// Builds the whole tree: leaves, then layers until one root remains.
    pub fn build(
        &self,
        contents: impl IntoIterator<Item = C>,
    ) -> Result<MerkleArena<HASH_SIZE, C, H>, TreeError<C::Error>> {
        let leaves = self.build_leaves(contents)?;
        let logical_len = leaves.iter().filter(|leaf| !leaf.is_duplicate()).count();

        let mut nodes: Vec<Node<HASH_SIZE, C>> = leaves.into_iter().map(Node::Leaf).collect();
        let mut layers = vec![(0..nodes.len()).map(NodeId).collect::<Vec<_>>()];
        loop {
            let Some(current) = layers.last() else {
                return Err(TreeError::EmptyInput);
            };
            let parents = self.build_layer(&mut nodes, current)?;
            tracing::trace!(
                children = current.len(),
                parents = parents.len(),
                "reduced layer"
            );
            let done = parents.len() == 1;
            layers.push(parents);
            if done {
                break;
            }
        }
        tracing::debug!(
            leaves = layers[0].len(),
            logical_len,
            depth = layers.len(),
            branching_factor = self.branching_factor,
            "built merkle tree"
        );
        Ok(MerkleArena::from_parts(nodes, layers, logical_len))
    }
}
