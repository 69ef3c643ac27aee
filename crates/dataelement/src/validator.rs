use serde::{Deserialize, Serialize};

/// A declarative correctness check attached to an element.
///
/// A validator names one attribute and the string value it must hold. It is
/// plain data so elements carrying one still serialize, compare, and hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Validator {
    key: String,
    expected: String,
}

impl Validator {
    pub fn new(key: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            expected: expected.into(),
        }
    }

    /// Checks a serialized element against the rule.
    pub fn check(&self, document: &serde_json::Value) -> bool {
        document
            .get(&self.key)
            .and_then(serde_json::Value::as_str)
            .is_some_and(|value| value == self.expected)
    }
}
