//! Plain step-definition stubs.

use serde::{Deserialize, Serialize};

use super::{untyped_arguments, Snippet};
use crate::compiler::NamedGroups;
use crate::error::Result;
use crate::pattern::SemanticType;

const TEMPLATE: &str = "@{0}(\"{1}\")\n\
                        public void {2}({3}) throws Throwable {\n    \
                        // {4}\n\
                        {5}    throw new PendingException();\n\
                        }\n";

const TABLE_HINT: &str = "    // For automatic transformation, change DataTable to one of\n    \
                          // List<YourType>, List<List<E>>, List<Map<K,V>> or Map<K,V>.\n    \
                          // E,K,V must be a scalar (String, Integer, Date, enum etc)\n";

/// How parameters are declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterStyle {
    /// `String arg1, int arg2`
    #[default]
    Typed,
    /// `arg1, arg2`
    Untyped,
}

/// Annotated, pending step-definition stub.
#[derive(Debug, Clone, Default)]
pub struct PlainSnippet {
    style: ParameterStyle,
    named_groups: Option<NamedGroups>,
}

impl PlainSnippet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: ParameterStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_named_groups(mut self, named_groups: Option<NamedGroups>) -> Self {
        self.named_groups = named_groups;
        self
    }

    /// Parameter type for a plain stub; bare integers bind to the primitive.
    fn parameter_type(argument_type: SemanticType) -> &'static str {
        match argument_type {
            SemanticType::Integer => "int",
            other => other.declaration_name(),
        }
    }
}

impl Snippet for PlainSnippet {
    fn name(&self) -> &str {
        "plain"
    }

    fn template(&self) -> &str {
        TEMPLATE
    }

    fn table_hint(&self) -> &str {
        TABLE_HINT
    }

    fn arguments(&self, argument_types: &[SemanticType], _attachments: usize) -> Result<String> {
        Ok(match self.style {
            ParameterStyle::Untyped => untyped_arguments(argument_types),
            ParameterStyle::Typed => argument_types
                .iter()
                .enumerate()
                .map(|(i, t)| format!("{} arg{}", Self::parameter_type(*t), i + 1))
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    fn named_groups(&self) -> Option<&NamedGroups> {
        self.named_groups.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippet::{SnippetParts, REGEXP_HINT};
    use pretty_assertions::assert_eq;
    use SemanticType::*;

    fn parts<'a>(pattern: &'a str, types: &'a [SemanticType], has_table: bool) -> SnippetParts<'a> {
        SnippetParts {
            keyword: "Given",
            pattern,
            function_name: Some("i_have_apples"),
            argument_types: types,
            attachments: usize::from(has_table),
            hint: REGEXP_HINT,
            has_table,
        }
    }

    #[test]
    fn test_typed_arguments() {
        let snippet = PlainSnippet::new();
        assert_eq!(
            snippet.arguments(&[String, Integer, DataTable], 1).unwrap(),
            "String arg1, int arg2, DataTable arg3"
        );
    }

    #[test]
    fn test_untyped_arguments() {
        let snippet = PlainSnippet::new().with_style(ParameterStyle::Untyped);
        assert_eq!(snippet.arguments(&[String, Integer], 0).unwrap(), "arg1, arg2");
    }

    #[test]
    fn test_render_stub() {
        let snippet = PlainSnippet::new();
        let rendered = snippet
            .render(&parts(r"^I have (\d+) apples$", &[Integer], false))
            .unwrap();
        assert_eq!(
            rendered,
            "@Given(\"^I have (\\\\d+) apples$\")\n\
             public void i_have_apples(int arg1) throws Throwable {\n    \
             // Write code here that turns the phrase above into concrete actions\n    \
             throw new PendingException();\n\
             }\n"
        );
    }

    #[test]
    fn test_render_escapes_quotes() {
        let snippet = PlainSnippet::new();
        let rendered = snippet
            .render(&parts(r#"^I have "([^"]*)" apples$"#, &[String], false))
            .unwrap();
        assert!(rendered.starts_with(r#"@Given("^I have \"([^\"]*)\" apples$")"#));
    }

    #[test]
    fn test_render_with_table_hint() {
        let snippet = PlainSnippet::new();
        let rendered = snippet
            .render(&parts("^the following users:$", &[DataTable], true))
            .unwrap();
        assert!(rendered.contains("(DataTable arg1)"));
        assert!(rendered.contains("// For automatic transformation, change DataTable"));
        assert!(rendered.contains("etc)\n    throw new PendingException();"));
    }

    #[test]
    fn test_render_without_function_name() {
        let snippet = PlainSnippet::new();
        let mut parts = parts("^I wait$", &[], false);
        parts.function_name = None;
        assert!(snippet.render(&parts).unwrap().contains("public void () throws"));
    }
}
