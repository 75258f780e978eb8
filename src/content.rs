//! Items stored in the leaves of the tree

use std::fmt::{Debug, Display};

/// Thread safety marker trait
#[cfg(feature = "multi-thread")]
pub trait ThreadSafe: Send + Sync {}
#[cfg(feature = "multi-thread")]
impl<T: Send + Sync> ThreadSafe for T {}

#[cfg(not(feature = "multi-thread"))]
pub trait ThreadSafe {}
#[cfg(not(feature = "multi-thread"))]
impl<T> ThreadSafe for T {}

/// An item that can be stored in a leaf.
///
/// The tree never looks inside a content item. It only asks for its digest when
/// (re)building and keeps a clone of it so later rebuilds can hash it again.
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the digest in bytes, must match the tree hasher
pub trait Content<const HASH_SIZE: usize>: Clone + ThreadSafe {
    /// Error returned when hashing or comparing fails
    type Error: Debug + Display;

    /// Deterministic digest of the logical contents of the item.
    fn calculate_hash(&self) -> Result<[u8; HASH_SIZE], Self::Error>;

    /// Compares two items.
    fn equals(&self, other: &Self) -> Result<bool, Self::Error>;
}
