//! Ordered pattern tables.
//!
//! A table is a list of (matcher, semantic type) entries. Order is
//! precedence: the scanner takes the first entry that matches at the
//! current position, never the longest or most specific one.

use std::sync::LazyLock;

use regex::Regex;
use regex_automata::meta;
use regex_automata::{Anchored, Input};
use serde::{Deserialize, Serialize};

use super::types::SemanticType;
use crate::error::{Error, Result};

/// Declarative form of a table entry, as found in configuration.
///
/// The type is kept by its configuration name and checked when the table
/// is built, together with the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Regex source
    pub pattern: String,
    /// snake_case name of the type assigned to matches
    pub semantic_type: String,
}

impl PatternSpec {
    pub fn new(pattern: impl Into<String>, semantic_type: SemanticType) -> Self {
        Self {
            pattern: pattern.into(),
            semantic_type: semantic_type.config_name().to_string(),
        }
    }
}

/// A compiled table entry.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    source: Regex,
    matcher: meta::Regex,
    semantic_type: SemanticType,
}

impl PatternEntry {
    /// Compile an entry, reporting a malformed matcher immediately.
    pub fn new(pattern: &str, semantic_type: SemanticType) -> Result<Self> {
        let source = Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e))?;
        let matcher = meta::Regex::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e))?;
        Ok(Self {
            source,
            matcher,
            semantic_type,
        })
    }

    pub fn semantic_type(&self) -> SemanticType {
        self.semantic_type
    }

    /// End of the match starting exactly at `pos`, if any.
    ///
    /// The search is anchored at `pos` but sees the whole text, so
    /// look-around assertions such as `\b` keep their context.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        let input = Input::new(text).range(pos..).anchored(Anchored::Yes);
        self.matcher.search(&input).map(|m| m.end())
    }

    /// Text substituted for a match when compiling a step pattern.
    pub fn capture_form(&self) -> &str {
        self.source.as_str()
    }

    /// Number of capturing groups the capture form introduces.
    pub fn capture_groups(&self) -> usize {
        self.source.captures_len() - 1
    }

    /// Whether matches become capture groups rather than literal text.
    pub fn is_capturing(&self) -> bool {
        self.capture_groups() > 0
    }
}

/// Immutable, ordered list of pattern entries.
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// Compile a table from declarative specs.
    ///
    /// Fails on the first malformed matcher or unknown type name.
    pub fn from_specs(specs: &[PatternSpec]) -> Result<Self> {
        let entries = specs
            .iter()
            .map(|s| PatternEntry::new(&s.pattern, s.semantic_type.parse()?))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// The built-in primary table: quoted strings, integers and the
    /// `any` placeholder idioms.
    pub fn primary() -> Self {
        DEFAULT_PRIMARY.clone()
    }

    /// The built-in generator-type table used inside `any` expansions.
    pub fn generator_types() -> Self {
        DEFAULT_GENERATOR_TYPES.clone()
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PatternEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two tables a snippet generator works with.
#[derive(Debug, Clone)]
pub struct PatternTables {
    pub primary: PatternTable,
    pub generator_types: PatternTable,
}

impl Default for PatternTables {
    fn default() -> Self {
        Self {
            primary: PatternTable::primary(),
            generator_types: PatternTable::generator_types(),
        }
    }
}

// ============================================================================
// Built-in tables
// ============================================================================

const PRIMARY_PATTERNS: &[(&str, SemanticType)] = &[
    (r#""([^"]*)""#, SemanticType::String),
    (r"(\d+)", SemanticType::Integer),
    ("any", SemanticType::String),
    (r#"any "([^"]*)" from "([^"]*)""#, SemanticType::String),
    (r#"any "([^"]*)" to "([^"]*)""#, SemanticType::String),
];

const GENERATOR_TYPE_PATTERNS: &[(&str, SemanticType)] = &[
    ("(?i)byte(s)?", SemanticType::Byte),
    ("(?i)short(s)?", SemanticType::Short),
    ("(?i)int(eger)?(s)?", SemanticType::Integer),
    ("(?i)long(s)?", SemanticType::Long),
    ("(?i)float(s)?", SemanticType::Float),
    ("(?i)double(s)?", SemanticType::Double),
    ("(?i)boolean(s)?", SemanticType::Boolean),
    ("(?i)char(acter)?(s)?", SemanticType::Character),
    ("(?i)big( )?decimal(s)?", SemanticType::BigDecimal),
    ("(?i)big( )?integer(s)?", SemanticType::BigInteger),
    ("(?i)date(s)?", SemanticType::Date),
    ("(?i)enum(eration)?(s)?", SemanticType::Enum),
    ("(?i)string(s)?", SemanticType::String),
    ("(?i)(array(s)?|list(s)?|array( )?list(s)?)", SemanticType::ArrayList),
    ("(?i)linked( )?list(s)?", SemanticType::LinkedList),
    ("(?i)hash( )?set(s)?", SemanticType::HashSet),
    ("(?i)linked( )?hash( )?set(s)?", SemanticType::LinkedHashSet),
    ("(?i)hash( )?map(s)?", SemanticType::HashMap),
    ("(?i)linked( )?hash( )?map(s)?", SemanticType::LinkedHashMap),
];

fn builtin(patterns: &[(&str, SemanticType)]) -> PatternTable {
    let specs: Vec<_> = patterns
        .iter()
        .map(|(p, t)| PatternSpec::new(*p, *t))
        .collect();
    PatternTable::from_specs(&specs).expect("invalid regex")
}

static DEFAULT_PRIMARY: LazyLock<PatternTable> = LazyLock::new(|| builtin(PRIMARY_PATTERNS));

static DEFAULT_GENERATOR_TYPES: LazyLock<PatternTable> =
    LazyLock::new(|| builtin(GENERATOR_TYPE_PATTERNS));
