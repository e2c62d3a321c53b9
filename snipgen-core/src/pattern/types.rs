//! Semantic argument types inferred from step phrases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Abstract value-kind of a step argument.
///
/// Independent of any target language; snippets map each variant to a
/// declaration through [`SemanticType::declaration_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Character,
    BigDecimal,
    BigInteger,
    Date,
    Enum,
    String,
    /// Ordered list
    ArrayList,
    LinkedList,
    HashSet,
    LinkedHashSet,
    HashMap,
    LinkedHashMap,
    /// Tabular step attachment
    DataTable,
}

impl SemanticType {
    /// Every variant, in declaration order.
    pub const ALL: [SemanticType; 20] = [
        Self::Byte,
        Self::Short,
        Self::Integer,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Boolean,
        Self::Character,
        Self::BigDecimal,
        Self::BigInteger,
        Self::Date,
        Self::Enum,
        Self::String,
        Self::ArrayList,
        Self::LinkedList,
        Self::HashSet,
        Self::LinkedHashSet,
        Self::HashMap,
        Self::LinkedHashMap,
        Self::DataTable,
    ];

    /// Declaration name used in generated code.
    pub const fn declaration_name(self) -> &'static str {
        match self {
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Character => "Character",
            Self::BigDecimal => "BigDecimal",
            Self::BigInteger => "BigInteger",
            Self::Date => "Date",
            Self::Enum => "Enum",
            Self::String => "String",
            Self::ArrayList => "ArrayList",
            Self::LinkedList => "LinkedList",
            Self::HashSet => "HashSet",
            Self::LinkedHashSet => "LinkedHashSet",
            Self::HashMap => "HashMap",
            Self::LinkedHashMap => "LinkedHashMap",
            Self::DataTable => "DataTable",
        }
    }

    /// Number of generic parameters the declaration takes.
    pub const fn generic_arity(self) -> usize {
        match self {
            Self::ArrayList | Self::LinkedList | Self::HashSet | Self::LinkedHashSet => 1,
            Self::HashMap | Self::LinkedHashMap => 2,
            _ => 0,
        }
    }

    /// Whether the declaration needs generic parameters.
    pub const fn is_container(self) -> bool {
        self.generic_arity() > 0
    }

    /// snake_case name, as used in configuration.
    pub fn config_name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Character => "character",
            Self::BigDecimal => "big_decimal",
            Self::BigInteger => "big_integer",
            Self::Date => "date",
            Self::Enum => "enum",
            Self::String => "string",
            Self::ArrayList => "array_list",
            Self::LinkedList => "linked_list",
            Self::HashSet => "hash_set",
            Self::LinkedHashSet => "linked_hash_set",
            Self::HashMap => "hash_map",
            Self::LinkedHashMap => "linked_hash_map",
            Self::DataTable => "data_table",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.declaration_name())
    }
}

impl FromStr for SemanticType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.config_name() == s)
            .ok_or_else(|| Error::UnknownSemanticType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_arity() {
        assert_eq!(SemanticType::Integer.generic_arity(), 0);
        assert_eq!(SemanticType::ArrayList.generic_arity(), 1);
        assert_eq!(SemanticType::LinkedHashSet.generic_arity(), 1);
        assert_eq!(SemanticType::HashMap.generic_arity(), 2);
        assert!(!SemanticType::DataTable.is_container());
    }

    #[test]
    fn test_config_name_matches_serde() {
        for ty in SemanticType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.config_name()));
            assert_eq!(ty.config_name().parse::<SemanticType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "tuple".parse::<SemanticType>().unwrap_err();
        assert!(matches!(err, Error::UnknownSemanticType(name) if name == "tuple"));
    }
}
