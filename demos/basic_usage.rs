//! Basic example of using the dynamic merkle tree
//!
//! This example demonstrates:
//! - Implementing `Content` for a custom type
//! - Creating a new tree
//! - Appending and updating contents
//! - Getting the root hash

use dmerkle::{Content, DMerkleTree};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone)]
struct Text(String);

impl Content<32> for Text {
    type Error = std::convert::Infallible;

    fn calculate_hash(&self) -> Result<[u8; 32], Self::Error> {
        Ok(Sha256::digest(self.0.as_bytes()).into())
    }

    fn equals(&self, other: &Self) -> Result<bool, Self::Error> {
        Ok(self.0 == other.0)
    }
}

fn text(value: &str) -> Text {
    Text(value.to_string())
}

fn main() {
    // Create a binary tree over 4 contents using SHA256
    let contents = vec![text("Hello"), text("Hi"), text("Hey"), text("Hola")];
    let tree = DMerkleTree::<32, Text>::new(contents, 2).unwrap();
    println!("Root hash: {}", hex::encode(tree.root_hash()));

    // Append two more contents, the whole tree is rebuilt
    tree.append(vec![text("BABABA"), text("LALALA")]).unwrap();
    println!("Root hash after append: {}", hex::encode(tree.root_hash()));

    // Replace the 4th leaf
    tree.update(3, text("Hola Hola")).unwrap();
    println!("Root hash after update: {}", hex::encode(tree.root_hash()));

    // Walk the current tree layer by layer
    let snapshot = tree.snapshot();
    for (level, layer) in snapshot.layers().iter().enumerate() {
        println!("Level {}: {} nodes", level, layer.len());
    }
    println!("Position of \"Hey\": {:?}", tree.position(&text("Hey")).unwrap());
}
