//! Tests for the dynamic merkle tree implementation

use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::Content;

mod vectors;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot process {0}")]
pub struct TextError(pub String);

/// Text content hashed with SHA-256. A failing text errors on hash and comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    value: String,
    fail: bool,
}

impl Text {
    pub fn failing(value: &str) -> Self {
        Self {
            value: value.to_string(),
            fail: true,
        }
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self {
            value: value.to_string(),
            fail: false,
        }
    }
}

impl Content<32> for Text {
    type Error = TextError;

    fn calculate_hash(&self) -> Result<[u8; 32], TextError> {
        if self.fail {
            return Err(TextError(self.value.clone()));
        }
        Ok(Sha256::digest(self.value.as_bytes()).into())
    }

    fn equals(&self, other: &Self) -> Result<bool, TextError> {
        for text in [other, self] {
            if text.fail {
                return Err(TextError(text.value.clone()));
            }
        }
        Ok(self.value == other.value)
    }
}

pub fn texts(values: &[&str]) -> Vec<Text> {
    values.iter().map(|value| Text::from(*value)).collect()
}

#[test]
fn test_text_equals() {
    assert!(Text::from("Hello").equals(&Text::from("Hello")).unwrap());
    assert!(!Text::from("Hello").equals(&Text::from("Hi")).unwrap());
    assert_eq!(
        Text::failing("a").equals(&Text::from("b")).unwrap_err(),
        TextError("a".to_string())
    );
}
