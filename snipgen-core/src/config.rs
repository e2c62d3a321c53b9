//! Generator configuration.
//!
//! Everything is optional; an empty config yields the built-in tables,
//! positional groups, typed parameters and no function names.
//!
//! ```json
//! {
//!   "primary_patterns": [
//!     { "pattern": "\"([^\"]*)\"", "semantic_type": "string" },
//!     { "pattern": "(\\d+)", "semantic_type": "long" }
//!   ],
//!   "named_group_start": "?<arg",
//!   "named_group_end": ">",
//!   "parameter_style": "untyped",
//!   "function_names": "camel_case"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::compiler::NamedGroups;
use crate::error::{Error, Result};
use crate::pattern::{PatternSpec, PatternTable, PatternTables};
use crate::snippet::{NameStyle, ParameterStyle};

/// Declarative snippet generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetConfig {
    /// Replaces the built-in primary table
    pub primary_patterns: Option<Vec<PatternSpec>>,
    /// Replaces the built-in generator-type table
    pub generator_patterns: Option<Vec<PatternSpec>>,
    pub named_group_start: Option<String>,
    pub named_group_end: Option<String>,
    /// Parameter declarations of the plain snippet
    pub parameter_style: ParameterStyle,
    /// Function name synthesis; `None` leaves names empty
    pub function_names: Option<NameStyle>,
}

impl SnippetConfig {
    /// Decode a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compile the configured tables, falling back to the built-ins.
    pub fn tables(&self) -> Result<PatternTables> {
        let primary = match &self.primary_patterns {
            Some(specs) => PatternTable::from_specs(specs)?,
            None => PatternTable::primary(),
        };
        let generator_types = match &self.generator_patterns {
            Some(specs) => PatternTable::from_specs(specs)?,
            None => PatternTable::generator_types(),
        };
        Ok(PatternTables {
            primary,
            generator_types,
        })
    }

    /// Named-group markers; empty strings count as absent.
    pub fn named_groups(&self) -> Result<Option<NamedGroups>> {
        let start = self.named_group_start.as_deref().unwrap_or_default();
        let end = self.named_group_end.as_deref().unwrap_or_default();
        match (start.is_empty(), end.is_empty()) {
            (true, true) => Ok(None),
            (false, false) => Ok(NamedGroups::new(start, end)),
            _ => Err(Error::config(
                "named_group_start and named_group_end must be set together",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::SemanticType;

    #[test]
    fn test_empty_config_uses_builtins() {
        let config = SnippetConfig::from_json("{}").unwrap();
        let tables = config.tables().unwrap();
        assert_eq!(tables.primary.len(), 5);
        assert_eq!(tables.generator_types.len(), 19);
        assert!(config.named_groups().unwrap().is_none());
        assert_eq!(config.parameter_style, ParameterStyle::Typed);
    }

    #[test]
    fn test_full_config() {
        let config = SnippetConfig::from_json(
            r#"{
                "primary_patterns": [{"pattern": "(\\d+)", "semantic_type": "long"}],
                "named_group_start": "?<arg",
                "named_group_end": ">",
                "parameter_style": "untyped",
                "function_names": "camel_case"
            }"#,
        )
        .unwrap();

        let tables = config.tables().unwrap();
        assert_eq!(tables.primary.len(), 1);
        assert_eq!(tables.primary.entries()[0].semantic_type(), SemanticType::Long);

        let names = config.named_groups().unwrap().unwrap();
        assert_eq!((names.start(), names.end()), ("?<arg", ">"));
        assert_eq!(config.function_names, Some(NameStyle::CamelCase));
    }

    #[test]
    fn test_malformed_pattern_reported_when_tables_are_built() {
        let config = SnippetConfig {
            generator_patterns: Some(vec![PatternSpec::new("(?i)list[", SemanticType::ArrayList)]),
            ..SnippetConfig::default()
        };
        assert!(matches!(config.tables(), Err(Error::InvalidPattern { .. })));
    }

    #[test]
    fn test_one_named_group_marker_is_an_error() {
        let config = SnippetConfig {
            named_group_start: Some("?<arg".to_string()),
            ..SnippetConfig::default()
        };
        assert!(matches!(config.named_groups(), Err(Error::Config(_))));
    }

    #[test]
    fn test_unknown_type_reported_when_tables_are_built() {
        let config = SnippetConfig::from_json(
            r#"{"primary_patterns": [{"pattern": "x", "semantic_type": "tuple"}]}"#,
        )
        .unwrap();
        let err = config.tables().unwrap_err();
        assert!(matches!(err, Error::UnknownSemanticType(ref name) if name == "tuple"));
    }
}
