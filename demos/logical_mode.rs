//! Padded versus logical rebuilds
//!
//! With the default `RebuildMode::Padded`, padding leaves become real contents on the
//! next mutation. `RebuildMode::Logical` only keeps the real leaves and pads again.

use dmerkle::{Content, DMerkleTree, TreeConfig};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone)]
struct Text(&'static str);

impl Content<32> for Text {
    type Error = std::convert::Infallible;

    fn calculate_hash(&self) -> Result<[u8; 32], Self::Error> {
        Ok(Sha256::digest(self.0.as_bytes()).into())
    }

    fn equals(&self, other: &Self) -> Result<bool, Self::Error> {
        Ok(self.0 == other.0)
    }
}

fn main() {
    let contents = vec![Text("a"), Text("b"), Text("c")];

    let padded = DMerkleTree::<32, Text>::new(contents.clone(), 2).unwrap();
    let logical = DMerkleTree::<32, Text>::with_config(contents, TreeConfig::new(2).logical()).unwrap();

    for tree in [&padded, &logical] {
        tree.append(vec![Text("d")]).unwrap();
        tree.append(vec![Text("e")]).unwrap();
        println!("{:?}", tree);
        println!("  leaves: {:?}", tree.contents());
        println!("  real leaves: {}", tree.logical_len());
    }
}
