//! Error types for snipgen-core.

use thiserror::Error;

/// Result type alias using snipgen-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building pattern tables or rendering snippets.
#[derive(Error, Debug)]
pub enum Error {
    /// A pattern table entry does not compile
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration names a semantic type that does not exist
    #[error("Unknown semantic type: {0}")]
    UnknownSemanticType(String),

    /// The render variant cannot declare this argument type
    #[error("Unsupported argument type for {snippet} snippet: {argument_type}")]
    UnsupportedArgumentType {
        snippet: String,
        argument_type: String,
    },

    /// A generic container ran out of element types
    #[error("Unresolved element type for container {container}")]
    UnresolvedElementType { container: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(
        pattern: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }

    /// Create an unsupported argument type error.
    pub fn unsupported_argument_type(
        snippet: impl Into<String>,
        argument_type: impl Into<String>,
    ) -> Self {
        Self::UnsupportedArgumentType {
            snippet: snippet.into(),
            argument_type: argument_type.into(),
        }
    }

    /// Create an unresolved element type error.
    pub fn unresolved_element_type(container: impl Into<String>) -> Self {
        Self::UnresolvedElementType {
            container: container.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
