//! The snippet generation pipeline.
//!
//! [`SnippetGenerator`] owns the pattern tables and the snippet variants and
//! runs one step through inference, pattern compilation, naming and
//! rendering. It holds no mutable state and can be shared across threads.

use tracing::debug;

use crate::compiler::{NamedGroups, PatternCompiler};
use crate::config::SnippetConfig;
use crate::error::Result;
use crate::inference::{Inference, TypeInferencer};
use crate::pattern::{scan, PatternTables, SemanticType};
use crate::snippet::{
    CodeKeyword, ConcatenatingNameGenerator, FunctionNameGenerator, KeywordResolver,
    PlainSnippet, PropertySnippet, Snippet, SnippetParts, REGEXP_HINT,
};
use crate::step::PhraseRequest;

/// Generates step-definition snippets for undefined steps.
pub struct SnippetGenerator {
    tables: PatternTables,
    snippet: Box<dyn Snippet>,
    property_snippet: Option<Box<dyn Snippet>>,
    function_names: Option<Box<dyn FunctionNameGenerator>>,
    keywords: Box<dyn KeywordResolver>,
}

impl Default for SnippetGenerator {
    fn default() -> Self {
        Self::new(PlainSnippet::new()).with_property_snippet(PropertySnippet::new())
    }
}

impl SnippetGenerator {
    /// Create a generator with a single snippet variant and the built-in tables.
    ///
    /// Property-style steps render with `snippet` until a property snippet
    /// is added.
    pub fn new(snippet: impl Snippet + 'static) -> Self {
        Self {
            tables: PatternTables::default(),
            snippet: Box::new(snippet),
            property_snippet: None,
            function_names: None,
            keywords: Box::new(CodeKeyword),
        }
    }

    /// Build a generator with both built-in variants from configuration.
    pub fn from_config(config: &SnippetConfig) -> Result<Self> {
        let tables = config.tables()?;
        let named_groups = config.named_groups()?;

        let plain = PlainSnippet::new()
            .with_style(config.parameter_style)
            .with_named_groups(named_groups.clone());
        let property = PropertySnippet::new().with_named_groups(named_groups);

        let mut generator = Self::new(plain)
            .with_property_snippet(property)
            .with_tables(tables);
        if let Some(style) = config.function_names {
            generator =
                generator.with_function_name_generator(ConcatenatingNameGenerator::new(style));
        }
        Ok(generator)
    }

    pub fn with_property_snippet(mut self, snippet: impl Snippet + 'static) -> Self {
        self.property_snippet = Some(Box::new(snippet));
        self
    }

    pub fn with_tables(mut self, tables: PatternTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_function_name_generator(
        mut self,
        generator: impl FunctionNameGenerator + 'static,
    ) -> Self {
        self.function_names = Some(Box::new(generator));
        self
    }

    pub fn with_keyword_resolver(mut self, resolver: impl KeywordResolver + 'static) -> Self {
        self.keywords = Box::new(resolver);
        self
    }

    pub fn tables(&self) -> &PatternTables {
        &self.tables
    }

    pub fn inferencer(&self) -> TypeInferencer<'_> {
        TypeInferencer::new(&self.tables.primary, &self.tables.generator_types)
    }

    /// Anchored step pattern for `text`, using the plain snippet's group markers.
    pub fn pattern_for(&self, text: &str) -> String {
        self.compile_with(text, self.snippet.named_groups())
    }

    /// Argument types of a step, attachments included.
    pub fn argument_types(&self, step: &PhraseRequest) -> Vec<SemanticType> {
        self.inferencer().infer_types(step)
    }

    /// Whether the step renders as a property test.
    pub fn is_property_style(&self, text: &str) -> bool {
        self.inferencer().is_property_style(text)
    }

    /// Function name for `text`, or `None` without a name generator.
    ///
    /// Placeholder values are blanked out first so they never reach the name.
    pub fn function_name(&self, text: &str) -> Option<String> {
        let generator = self.function_names.as_ref()?;
        let sentence: String = scan(text, &self.tables.primary)
            .iter()
            .map(|m| if m.is_placeholder() { " " } else { m.text })
            .collect();
        Some(generator.generate_function_name(&sentence))
    }

    /// Render the snippet for one step.
    pub fn get_snippet(&self, step: &PhraseRequest) -> Result<String> {
        let Inference {
            argument_types,
            property_style,
        } = self.inferencer().infer(step);

        let snippet = match (&self.property_snippet, property_style) {
            (Some(property), true) => property.as_ref(),
            _ => self.snippet.as_ref(),
        };

        let pattern = self.compile_with(&step.text, snippet.named_groups());
        let function_name = self.function_name(&step.text);
        let keyword = self.keywords.code_keyword_for(&step.keyword);

        debug!(
            snippet = snippet.name(),
            arguments = argument_types.len(),
            "Rendering snippet"
        );

        snippet.render(&SnippetParts {
            keyword: &keyword,
            pattern: &pattern,
            function_name: function_name.as_deref(),
            argument_types: &argument_types,
            attachments: usize::from(step.has_block_text) + usize::from(step.has_table),
            hint: REGEXP_HINT,
            has_table: step.has_table,
        })
    }

    fn compile_with(&self, text: &str, named_groups: Option<&NamedGroups>) -> String {
        PatternCompiler::new(&self.tables.primary)
            .with_named_groups(named_groups)
            .compile(text)
    }
}
