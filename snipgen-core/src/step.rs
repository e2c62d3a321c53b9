//! The step record handed to the snippet generator.

use serde::{Deserialize, Serialize};

/// A natural-language test step awaiting a snippet.
///
/// Produced by an upstream feature-file parser; this crate only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseRequest {
    /// Step phrase without its keyword, e.g. `I have 3 apples`
    pub text: String,
    /// Grammatical keyword as written in the source, e.g. `Given `
    pub keyword: String,
    /// Step carries a doc-string block
    #[serde(default)]
    pub has_block_text: bool,
    /// Step carries a data table
    #[serde(default)]
    pub has_table: bool,
}

impl PhraseRequest {
    /// Create a request with no attachments.
    pub fn new(keyword: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyword: keyword.into(),
            has_block_text: false,
            has_table: false,
        }
    }

    /// Mark the step as carrying a doc-string block.
    pub fn with_block_text(mut self) -> Self {
        self.has_block_text = true;
        self
    }

    /// Mark the step as carrying a data table.
    pub fn with_table(mut self) -> Self {
        self.has_table = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_attachments() {
        let step = PhraseRequest::new("Given ", "I have 3 apples")
            .with_block_text()
            .with_table();
        assert_eq!(step.text, "I have 3 apples");
        assert!(step.has_block_text);
        assert!(step.has_table);
    }

    #[test]
    fn test_deserialize_defaults_attachments() {
        let step: PhraseRequest =
            serde_json::from_str(r#"{"text": "I wait", "keyword": "When "}"#).unwrap();
        assert_eq!(step, PhraseRequest::new("When ", "I wait"));
    }
}
