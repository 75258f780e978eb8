mod types;

use std::{fs, path::PathBuf};

use sha2::Sha256;

use crate::{
    tests::{
        vectors::types::{root_as_bytes, to_texts, TestOperation, TestVectors},
        Text,
    },
    DMerkleTree,
};

type Tree = DMerkleTree<32, Text, Sha256>;

fn load_test_vectors() -> TestVectors {
    let path = PathBuf::from("src/tests/vectors/roots.json");
    let json = fs::read_to_string(&path).unwrap();
    serde_json::from_str::<TestVectors>(&json).unwrap()
}

#[test]
fn test_root_vectors() {
    let test_vectors = load_test_vectors();
    assert!(!test_vectors.valid_test_cases.is_empty());
    for case in &test_vectors.valid_test_cases {
        let comment = case.comment.as_deref().unwrap_or("unnamed test");
        println!("Running test case: {}", comment);

        let tree = Tree::new(to_texts(&case.contents), case.branching_factor).unwrap();
        assert_eq!(tree.root_hash(), root_as_bytes(&case.root).unwrap(), "{}", comment);
        assert_eq!(tree.logical_len(), case.contents.len(), "{}", comment);
        assert_eq!(tree.len() % case.branching_factor, 0, "{}", comment);
        tree.snapshot().verify().unwrap();
    }
}

#[test]
fn test_mutation_vectors() {
    let test_vectors = load_test_vectors();
    assert!(!test_vectors.mutation_test_cases.is_empty());
    for case in &test_vectors.mutation_test_cases {
        let comment = case.comment.as_deref().unwrap_or("unnamed test");
        println!("Running mutation case: {}", comment);

        let tree = Tree::with_config(to_texts(&case.contents), case.config()).unwrap();
        for operation in &case.operations {
            match operation {
                TestOperation::Append(values) => tree.append(to_texts(values)).unwrap(),
                TestOperation::Update { index, content } => tree
                    .update(*index, Text::from(content.as_str()))
                    .unwrap(),
            }
        }
        assert_eq!(tree.contents(), to_texts(&case.leaves), "{}", comment);
        assert_eq!(tree.root_hash(), root_as_bytes(&case.root).unwrap(), "{}", comment);
        // A fresh build over the resulting leaves gives the same root.
        let fresh = Tree::new(to_texts(&case.leaves), case.branching_factor).unwrap();
        assert_eq!(tree.root_hash(), fresh.root_hash(), "{}", comment);
    }
}
