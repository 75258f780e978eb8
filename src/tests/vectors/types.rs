use serde::{Deserialize, Serialize};

use crate::{tests::Text, RebuildMode, TreeConfig};

/// Root of a tree built in one go
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestRootCase {
    pub comment: Option<String>,
    pub branching_factor: usize,
    pub contents: Vec<String>,
    pub root: String,
}

/// One mutation applied to a tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TestOperation {
    Append(Vec<String>),
    Update { index: usize, content: String },
}

/// Root and leaves of a tree after a series of mutations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestMutationCase {
    pub comment: Option<String>,
    pub branching_factor: usize,
    pub rebuild_mode: String,
    pub contents: Vec<String>,
    pub operations: Vec<TestOperation>,
    pub leaves: Vec<String>,
    pub root: String,
}

impl TestMutationCase {
    pub fn config(&self) -> TreeConfig {
        let mode = match self.rebuild_mode.as_str() {
            "logical" => RebuildMode::Logical,
            _ => RebuildMode::Padded,
        };
        TreeConfig::new(self.branching_factor).with_rebuild_mode(mode)
    }
}

/// Test vectors file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestVectors {
    pub valid_test_cases: Vec<TestRootCase>,
    pub mutation_test_cases: Vec<TestMutationCase>,
}

/// Converts hex encoded test data into a root hash
pub fn root_as_bytes(root: &str) -> Result<[u8; 32], hex::FromHexError> {
    let bytes = hex::decode(root)?;
    bytes
        .try_into()
        .map_err(|_| hex::FromHexError::InvalidStringLength)
}

pub fn to_texts(values: &[String]) -> Vec<Text> {
    values.iter().map(|value| Text::from(value.as_str())).collect()
}
