//! Snippet rendering.
//!
//! A [`Snippet`] is one rendering variant: a fixed template plus the rules
//! for declaring arguments. Two variants ship with the crate:
//!
//! - [`PlainSnippet`]: an annotated, pending step-definition stub
//! - [`PropertySnippet`]: an annotated property test whose parameters are
//!   bound to value generators
//!
//! Templates use the positional placeholders `{0}` to `{5}`:
//!
//! | Placeholder | Content |
//! |---|---|
//! | `{0}` | code keyword |
//! | `{1}` | step pattern, escaped for a string literal |
//! | `{2}` | function name |
//! | `{3}` | argument list |
//! | `{4}` | hint comment |
//! | `{5}` | table hint, empty without a table |

mod naming;
mod plain;
mod property;

pub use naming::{
    CodeKeyword, ConcatenatingNameGenerator, FunctionNameGenerator, KeywordResolver, NameStyle,
};
pub use plain::{ParameterStyle, PlainSnippet};
pub use property::PropertySnippet;

use crate::compiler::NamedGroups;
use crate::error::Result;
use crate::pattern::SemanticType;

/// Hint comment placed in every generated body.
pub const REGEXP_HINT: &str = "Write code here that turns the phrase above into concrete actions";

/// Everything a snippet needs to render one step.
#[derive(Debug, Clone, Copy)]
pub struct SnippetParts<'a> {
    /// Code keyword, e.g. `Given`
    pub keyword: &'a str,
    /// Compiled, unescaped step pattern
    pub pattern: &'a str,
    pub function_name: Option<&'a str>,
    pub argument_types: &'a [SemanticType],
    /// How many trailing argument types come from step attachments
    pub attachments: usize,
    pub hint: &'a str,
    /// Step carries a data table
    pub has_table: bool,
}

/// A snippet rendering variant.
pub trait Snippet: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Template with `{0}`..`{5}` placeholders.
    fn template(&self) -> &str;

    /// Comment block inserted when the step carries a data table.
    fn table_hint(&self) -> &str;

    /// Render the argument list for `argument_types`, whose last
    /// `attachments` entries are the doc-string and table parameters.
    fn arguments(&self, argument_types: &[SemanticType], attachments: usize) -> Result<String>;

    /// Named-group markers for compiled patterns, if the target needs them.
    fn named_groups(&self) -> Option<&NamedGroups> {
        None
    }

    /// Escape a compiled pattern for embedding in a string literal.
    fn escape_pattern(&self, pattern: &str) -> String {
        pattern.replace('\\', "\\\\").replace('"', "\\\"")
    }

    /// Render the complete snippet.
    fn render(&self, parts: &SnippetParts<'_>) -> Result<String> {
        let arguments = self.arguments(parts.argument_types, parts.attachments)?;
        let pattern = self.escape_pattern(parts.pattern);
        let table_hint = if parts.has_table { self.table_hint() } else { "" };

        Ok(fill_template(
            self.template(),
            &[
                parts.keyword,
                &pattern,
                parts.function_name.unwrap_or_default(),
                &arguments,
                parts.hint,
                table_hint,
            ],
        ))
    }
}

/// `arg1, arg2, ...` with one name per argument type.
pub fn untyped_arguments(argument_types: &[SemanticType]) -> String {
    (1..=argument_types.len())
        .map(|n| format!("arg{n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Substitute `{n}` placeholders in a single pass.
///
/// Substituted values are never re-scanned. Braces that do not form a
/// placeholder with a valid index are copied through.
pub(crate) fn fill_template(template: &str, values: &[&str]) -> String {
    let extra: usize = values.iter().map(|v| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|i| values.get(i))
                .map(|value| (close, *value))
        });
        match placeholder {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_positional() {
        assert_eq!(fill_template("{1}-{0}-{1}", &["a", "b"]), "b-a-b");
    }

    #[test]
    fn test_fill_template_keeps_code_braces() {
        assert_eq!(
            fill_template("void {0}() {\n}\n", &["run"]),
            "void run() {\n}\n"
        );
    }

    #[test]
    fn test_fill_template_does_not_rescan_values() {
        assert_eq!(fill_template("{0}{1}", &["{1}", "x"]), "{1}x");
    }

    #[test]
    fn test_fill_template_out_of_range_is_literal() {
        assert_eq!(fill_template("{7} {x}", &["a"]), "{7} {x}");
    }

    #[test]
    fn test_untyped_arguments() {
        use SemanticType::*;
        assert_eq!(untyped_arguments(&[String, Integer, DataTable]), "arg1, arg2, arg3");
        assert_eq!(untyped_arguments(&[]), "");
    }
}
