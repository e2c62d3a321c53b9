//! Property-based test snippets.
//!
//! Every argument is bound to a value generator. Container types take
//! their element types from the arguments that follow them:
//!
//! ```text
//! [ArrayList, String, Integer]
//! @From(ArrayListGenerator.class) ArrayList<@From(StringGenerator.class) String> arg1,
//! @From(IntegerGenerator.class) Integer arg2
//! ```
//!
//! Map types take two element types, key first.

use super::Snippet;
use crate::compiler::NamedGroups;
use crate::error::{Error, Result};
use crate::pattern::SemanticType;

const TEMPLATE: &str = "@{0}(\"{1}\")\n\
                        @Property\n\
                        public void {2}({3}) throws Throwable {\n    \
                        // {4}\n\
                        {5}    throw new PendingException();\n\
                        }\n";

const TABLE_HINT: &str = "    // The DataTable argument is supplied by the step, not generated.\n";

/// Annotated property test with generator-bound parameters.
#[derive(Debug, Clone, Default)]
pub struct PropertySnippet {
    named_groups: Option<NamedGroups>,
}

impl PropertySnippet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_named_groups(mut self, named_groups: Option<NamedGroups>) -> Self {
        self.named_groups = named_groups;
        self
    }
}

impl Snippet for PropertySnippet {
    fn name(&self) -> &str {
        "property"
    }

    fn template(&self) -> &str {
        TEMPLATE
    }

    fn table_hint(&self) -> &str {
        TABLE_HINT
    }

    fn arguments(&self, argument_types: &[SemanticType], attachments: usize) -> Result<String> {
        let first_attachment = argument_types.len().saturating_sub(attachments);
        let mut writer = ArgumentWriter::default();
        for (i, argument_type) in argument_types.iter().enumerate() {
            writer.push(*argument_type, i >= first_attachment)?;
        }
        writer.finish()
    }

    fn named_groups(&self) -> Option<&NamedGroups> {
        self.named_groups.as_ref()
    }
}

/// A container still waiting for element types.
#[derive(Debug)]
struct OpenContainer {
    container: SemanticType,
    remaining: usize,
}

/// Builds the parameter list one type at a time.
///
/// A container opens a bracket and defers the argument name; each finished
/// element counts down its container, and a container with no slots left
/// closes its bracket and counts as a finished element itself. Only a
/// finished top-level declaration gets a name and advances the index.
#[derive(Debug)]
struct ArgumentWriter {
    out: String,
    open: Vec<OpenContainer>,
    next_index: usize,
}

impl Default for ArgumentWriter {
    fn default() -> Self {
        Self {
            out: String::new(),
            open: Vec::new(),
            next_index: 1,
        }
    }
}

impl ArgumentWriter {
    fn push(&mut self, argument_type: SemanticType, is_attachment: bool) -> Result<()> {
        // Attachment parameters never fill a generic slot.
        if let (true, Some(open)) = (is_attachment, self.open.last()) {
            return Err(Error::unsupported_argument_type(
                "property",
                format!("{} attachment inside {}", argument_type, open.container),
            ));
        }

        if self.open.is_empty() && self.next_index > 1 {
            self.out.push_str(", ");
        }

        if argument_type == SemanticType::DataTable {
            if let Some(open) = self.open.last() {
                return Err(Error::unsupported_argument_type(
                    "property",
                    format!("{} inside {}", argument_type, open.container),
                ));
            }
            // Supplied by the step itself.
            self.out.push_str(argument_type.declaration_name());
            self.finish_element();
            return Ok(());
        }

        let name = argument_type.declaration_name();
        self.out.push_str(&format!("@From({name}Generator.class) {name}"));

        if argument_type.is_container() {
            self.out.push('<');
            self.open.push(OpenContainer {
                container: argument_type,
                remaining: argument_type.generic_arity(),
            });
        } else {
            self.finish_element();
        }
        Ok(())
    }

    fn finish_element(&mut self) {
        loop {
            let Some(open) = self.open.last_mut() else {
                self.out.push_str(&format!(" arg{}", self.next_index));
                self.next_index += 1;
                return;
            };
            open.remaining -= 1;
            if open.remaining > 0 {
                self.out.push_str(", ");
                return;
            }
            self.open.pop();
            self.out.push('>');
        }
    }

    fn finish(self) -> Result<String> {
        match self.open.last() {
            Some(open) => Err(Error::unresolved_element_type(
                open.container.declaration_name(),
            )),
            None => Ok(self.out),
        }
    }
}
