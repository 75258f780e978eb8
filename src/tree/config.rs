//! Tree configuration

/// Default number of children per internal node
pub const DEFAULT_BRANCHING_FACTOR: usize = 2;

/// Which leaves a mutation rebuilds from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RebuildMode {
    /// Rebuild from every current leaf, padding duplicates included.
    ///
    /// Duplicates left by a previous padding are treated as real content by the
    /// next `append`/`update`, so padding can cascade.
    #[default]
    Padded,
    /// Rebuild from the real leaves only and pad again from scratch.
    Logical,
}

/// Configuration of a [`DMerkleTree`](crate::DMerkleTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    pub branching_factor: usize,
    pub rebuild_mode: RebuildMode,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCHING_FACTOR)
    }
}

impl TreeConfig {
    pub fn new(branching_factor: usize) -> Self {
        Self {
            branching_factor,
            rebuild_mode: RebuildMode::default(),
        }
    }

    pub fn with_branching_factor(mut self, branching_factor: usize) -> Self {
        self.branching_factor = branching_factor;
        self
    }

    pub fn with_rebuild_mode(mut self, rebuild_mode: RebuildMode) -> Self {
        self.rebuild_mode = rebuild_mode;
        self
    }

    /// Rebuild from the real leaves only (see [`RebuildMode::Logical`])
    pub fn logical(mut self) -> Self {
        self.rebuild_mode = RebuildMode::Logical;
        self
    }
}
