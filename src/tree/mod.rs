mod arena;
mod builder;
mod config;
mod dynamic;

pub use arena::MerkleArena;
pub use builder::TreeBuilder;
pub use config::{RebuildMode, TreeConfig, DEFAULT_BRANCHING_FACTOR};
pub use dynamic::DMerkleTree;
