//! Argument type inference.
//!
//! Each placeholder found by the primary scan contributes its entry's
//! semantic type. The literal `any` token instead expands into every
//! generator type named in the rest of the phrase, and marks the step as
//! property style.
//!
//! The outer scan keeps going after an `any` expansion, so the remainder
//! of the phrase is read twice: once by the generator-type sub-scan and
//! once more against the primary table. `any 3 integers` therefore infers
//! `[Integer, Integer]`, and a second `any` expands its own remainder again.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::pattern::{scan, PatternTable, SemanticType};
use crate::step::PhraseRequest;

/// The token that switches a step to property-based rendering.
pub const ANY_TOKEN: &str = "any";

/// Inferred argument types of a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inference {
    /// Argument types in declaration order, attachments last
    pub argument_types: Vec<SemanticType>,
    /// Whether the phrase contains the `any` placeholder
    pub property_style: bool,
}

/// Infers argument types from phrases using a primary and a generator-type table.
#[derive(Debug, Clone, Copy)]
pub struct TypeInferencer<'a> {
    primary: &'a PatternTable,
    generator_types: &'a PatternTable,
}

impl<'a> TypeInferencer<'a> {
    pub fn new(primary: &'a PatternTable, generator_types: &'a PatternTable) -> Self {
        Self {
            primary,
            generator_types,
        }
    }

    /// Infer the argument types of a step, attachments included.
    pub fn infer(&self, step: &PhraseRequest) -> Inference {
        let mut inference = self.infer_phrase(&step.text);
        if step.has_block_text {
            inference.argument_types.push(SemanticType::String);
        }
        if step.has_table {
            inference.argument_types.push(SemanticType::DataTable);
        }
        inference
    }

    /// Argument types of a step, attachments included.
    pub fn infer_types(&self, step: &PhraseRequest) -> Vec<SemanticType> {
        self.infer(step).argument_types
    }

    /// Infer types from phrase text alone.
    pub fn infer_phrase(&self, text: &str) -> Inference {
        let mut inference = Inference::default();

        for m in &scan(text, self.primary) {
            let Some(index) = m.entry else { continue };
            if m.text == ANY_TOKEN {
                inference.property_style = true;
                let expanded = self.generator_arguments(&text[m.end..]);
                trace!(position = m.start, types = ?expanded, "Expanded any placeholder");
                inference.argument_types.extend(expanded);
            } else if let Some(entry) = self.primary.get(index) {
                inference.argument_types.push(entry.semantic_type());
            }
        }

        inference
    }

    /// Whether any primary match in `text` is the literal `any` token.
    pub fn is_property_style(&self, text: &str) -> bool {
        scan(text, self.primary)
            .placeholders()
            .fold(false, |found, m| found || m.text == ANY_TOKEN)
    }

    /// Types named by the generator-type table in `remainder`.
    pub fn generator_arguments(&self, remainder: &str) -> Vec<SemanticType> {
        scan(remainder, self.generator_types)
            .placeholders()
            .filter_map(|m| m.entry)
            .filter_map(|i| self.generator_types.get(i))
            .map(|e| e.semantic_type())
            .collect()
    }
}
