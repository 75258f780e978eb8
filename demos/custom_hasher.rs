//! Example of implementing a custom hasher for the dynamic merkle tree
//!
//! This example demonstrates:
//! - Creating a custom hasher implementation
//! - Using it with the tree
//! - Comparing the root with the default SHA256 tree

use dmerkle::{Content, DMerkleTree, Hasher};
use sha2::{Digest, Sha256};

// Custom hasher that uses SHA256 but adds a prefix to the input
#[derive(Clone)]
struct PrefixedSha256;

impl Hasher<32> for PrefixedSha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        // Add a custom prefix to the input
        hasher.update(b"custom_prefix:");
        hasher.update(data);
        hasher.finalize().into()
    }
}

#[derive(Clone)]
struct Bytes(Vec<u8>);

impl Content<32> for Bytes {
    type Error = std::convert::Infallible;

    fn calculate_hash(&self) -> Result<[u8; 32], Self::Error> {
        Ok(Sha256::digest(&self.0).into())
    }

    fn equals(&self, other: &Self) -> Result<bool, Self::Error> {
        Ok(self.0 == other.0)
    }
}

fn main() {
    let contents = vec![Bytes(vec![1, 2, 3]), Bytes(vec![4, 5, 6]), Bytes(vec![7, 8, 9])];

    // Create a new ternary tree with our custom hasher
    let tree = DMerkleTree::<32, Bytes, PrefixedSha256>::new(contents.clone(), 3).unwrap();
    println!("Root hash with custom hasher: {}", hex::encode(tree.root_hash()));

    // Compare with standard SHA256
    let standard_tree = DMerkleTree::<32, Bytes, Sha256>::new(contents, 3).unwrap();
    println!(
        "Root hash with standard SHA256: {}",
        hex::encode(standard_tree.root_hash())
    );

    // Note that the hashes are different due to our custom prefix
    println!("\nThe hashes are different because our custom hasher adds a prefix to the input.");
}
