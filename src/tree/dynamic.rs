//! Mutable dynamic merkle tree

use std::{fmt::Debug, sync::Arc};

use parking_lot::RwLock;
use sha2::Sha256;

use crate::{
    node::Hasher,
    tree::{RebuildMode, TreeConfig},
    Content, MerkleArena, TreeBuilder, TreeError,
};

struct TreeState<const HASH_SIZE: usize, C, H> {
    arena: Arc<MerkleArena<HASH_SIZE, C, H>>,
    root_hash: [u8; HASH_SIZE],
}

impl<const HASH_SIZE: usize, C, H> TreeState<HASH_SIZE, C, H> {
    fn new(arena: MerkleArena<HASH_SIZE, C, H>) -> Self {
        Self {
            root_hash: arena.root_hash(),
            arena: Arc::new(arena),
        }
    }
}

/// Merkle tree with a configurable branching factor over an ordered list of contents.
/// * `HASH_SIZE` - size of the hash digest in bytes.
/// * `C` - content held by the leaves.
/// * `H` - Hasher that will be used to hash internal nodes, SHA-256 by default.
///
/// Every mutation rebuilds the whole tree from the leaf contents and swaps it in
/// under the write lock. Readers always see a fully built tree.
pub struct DMerkleTree<const HASH_SIZE: usize, C, H = Sha256> {
    builder: TreeBuilder<HASH_SIZE, C, H>,
    rebuild_mode: RebuildMode,
    state: RwLock<TreeState<HASH_SIZE, C, H>>,
}

impl<const HASH_SIZE: usize, C: Content<HASH_SIZE>, H: Hasher<HASH_SIZE>>
    DMerkleTree<HASH_SIZE, C, H>
{
    /// Creates a tree over `contents` with the default [`RebuildMode`].
    pub fn new(contents: Vec<C>, branching_factor: usize) -> Result<Self, TreeError<C::Error>> {
        Self::with_config(contents, TreeConfig::new(branching_factor))
    }

    pub fn with_config(contents: Vec<C>, config: TreeConfig) -> Result<Self, TreeError<C::Error>> {
        let builder = TreeBuilder::new(config.branching_factor)?;
        let arena = builder.build(contents)?;
        Ok(Self {
            builder,
            rebuild_mode: config.rebuild_mode,
            state: RwLock::new(TreeState::new(arena)),
        })
    }

    /// Root hash of the tree. NO HASHING IS DONE HERE.
    pub fn root_hash(&self) -> [u8; HASH_SIZE] {
        self.state.read().root_hash
    }

    /// Current tree. It stays readable after a mutation but is not updated by it.
    pub fn snapshot(&self) -> Arc<MerkleArena<HASH_SIZE, C, H>> {
        self.state.read().arena.clone()
    }

    pub fn config(&self) -> TreeConfig {
        TreeConfig {
            branching_factor: self.builder.branching_factor(),
            rebuild_mode: self.rebuild_mode,
        }
    }

    pub fn branching_factor(&self) -> usize {
        self.builder.branching_factor()
    }

    pub fn rebuild_mode(&self) -> RebuildMode {
        self.rebuild_mode
    }

    /// Number of leaves, padding duplicates included.
    pub fn len(&self) -> usize {
        self.state.read().arena.leaf_count()
    }

    /// Number of real leaves.
    pub fn logical_len(&self) -> usize {
        self.state.read().arena.logical_len()
    }

    /// A built tree always has at least one leaf.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content of every leaf, padding duplicates included.
    pub fn contents(&self) -> Vec<C> {
        self.state.read().arena.contents()
    }

    /// Content of the real leaves only.
    pub fn logical_contents(&self) -> Vec<C> {
        self.state.read().arena.logical_contents()
    }

    /// Index of the first leaf whose content equals `content`.
    pub fn position(&self, content: &C) -> Result<Option<usize>, TreeError<C::Error>> {
        let arena = self.snapshot();
        for (index, leaf) in arena.leaves().enumerate() {
            if leaf.content().equals(content).map_err(TreeError::Comparison)? {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Appends `contents` after the current leaves and rebuilds the tree.
    pub fn append(&self, contents: Vec<C>) -> Result<(), TreeError<C::Error>> {
        let mut state = self.state.write();
        let count = contents.len();
        let mut all = self.rebuild_source(&state.arena);
        all.extend(contents);
        self.commit(&mut state, all)?;
        tracing::debug!(appended = count, leaves = state.arena.leaf_count(), "appended contents");
        Ok(())
    }

    /// Replaces the content of the leaf at `index` and rebuilds the tree.
    ///
    /// With [`RebuildMode::Padded`] the index addresses every leaf, duplicates included,
    /// and replacing a duplicate leaves the real leaf it copies untouched.
    /// With [`RebuildMode::Logical`] only the real leaves can be addressed.
    pub fn update(&self, index: usize, content: C) -> Result<(), TreeError<C::Error>> {
        let mut state = self.state.write();
        let len = match self.rebuild_mode {
            RebuildMode::Padded => state.arena.leaf_count(),
            RebuildMode::Logical => state.arena.logical_len(),
        };
        if index >= len {
            tracing::warn!(index, len, "rejected update out of range");
            return Err(TreeError::IndexOutOfRange { index, len });
        }
        let mut all = self.rebuild_source(&state.arena);
        all[index] = content;
        self.commit(&mut state, all)?;
        tracing::debug!(index, "updated content");
        Ok(())
    }

    /// Rebuilds the tree from its current contents.
    pub fn rebuild(&self) -> Result<(), TreeError<C::Error>> {
        let mut state = self.state.write();
        let all = self.rebuild_source(&state.arena);
        self.commit(&mut state, all)
    }

    fn rebuild_source(&self, arena: &MerkleArena<HASH_SIZE, C, H>) -> Vec<C> {
        match self.rebuild_mode {
            RebuildMode::Padded => arena.contents(),
            RebuildMode::Logical => arena.logical_contents(),
        }
    }

    /// Builds the new tree first so a failure keeps the committed one.
    fn commit(
        &self,
        state: &mut TreeState<HASH_SIZE, C, H>,
        contents: Vec<C>,
    ) -> Result<(), TreeError<C::Error>> {
        match self.builder.build(contents) {
            Ok(arena) => {
                *state = TreeState::new(arena);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "rebuild failed, keeping previous tree");
                Err(err)
            }
        }
    }
}

impl<const HASH_SIZE: usize, C, H> Debug for DMerkleTree<HASH_SIZE, C, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("DMerkleTree")
            .field("root_hash", &hex::encode(state.root_hash.as_slice()))
            .field("leaves", &state.arena.leaf_count())
            .field("branching_factor", &self.builder.branching_factor())
            .field("rebuild_mode", &self.rebuild_mode)
            .finish()
    }
}
