//! # snipgen-core
//!
//! Step-definition snippet generation for natural-language test steps.
//!
//! Given an undefined step such as `I have 3 apples`, the generator derives
//! an anchored regex for the step, the argument types of its variable parts,
//! and a ready-to-paste step definition.
//!
//! ## Core Components
//!
//! - **Pattern**: ordered pattern tables and the first-fit phrase scanner
//! - **Inference**: argument types, including `any ...` generator expansion
//! - **Compiler**: escaped, anchored step patterns with optional named groups
//! - **Snippet**: plain and property-based rendering variants
//! - **Generator**: the pipeline tying them together
//!
//! ## Example
//!
//! ```
//! use snipgen_core::{NameStyle, ConcatenatingNameGenerator, PhraseRequest, SnippetGenerator};
//!
//! let generator = SnippetGenerator::default()
//!     .with_function_name_generator(ConcatenatingNameGenerator::new(NameStyle::Underscore));
//!
//! let step = PhraseRequest::new("Given ", "I have 3 apples");
//! assert_eq!(generator.pattern_for(&step.text), r"^I have (\d+) apples$");
//!
//! let snippet = generator.get_snippet(&step).unwrap();
//! assert!(snippet.contains("public void i_have_apples(int arg1)"));
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod generator;
pub mod inference;
pub mod pattern;
mod proptest;
pub mod snippet;
pub mod step;

// Re-exports for convenience
pub use compiler::{escape_literal, NamedGroups, PatternCompiler};
pub use config::SnippetConfig;
pub use error::{Error, Result};
pub use generator::SnippetGenerator;
pub use inference::{Inference, TypeInferencer, ANY_TOKEN};
pub use pattern::{
    scan, PatternEntry, PatternSpec, PatternTable, PatternTables, ScanMatch, ScanResult,
    SemanticType,
};
pub use snippet::{
    untyped_arguments, CodeKeyword, ConcatenatingNameGenerator, FunctionNameGenerator,
    KeywordResolver, NameStyle, ParameterStyle, PlainSnippet, PropertySnippet, Snippet,
    SnippetParts, REGEXP_HINT,
};
pub use step::PhraseRequest;
