//! Error types for schema parsing.

use thiserror::Error;

/// Errors raised while building a [`SchemaModel`](crate::SchemaModel) from
/// an introspection document.
#[derive(Debug, Error)]
pub enum SchemaParseError {
    /// The source is not valid JSON.
    #[error("Schema source is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A section of the document has the wrong shape.
    #[error("Malformed {context}: {source}")]
    Malformed {
        /// Where in the document the problem was found.
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A required structural field is absent.
    #[error("Missing required field '{field}' ({context})")]
    MissingField {
        /// The missing field name (e.g. `name`, `queryType.name`).
        field: String,
        /// Human-readable location, e.g. `field in User.posts`.
        context: String,
    },

    /// A `NON_NULL` reference directly wraps another `NON_NULL`.
    #[error("NON_NULL type reference wraps another NON_NULL ({context})")]
    DoubleNonNull {
        /// Human-readable location of the offending reference.
        context: String,
    },

    /// The same type name was declared twice.
    #[error("Type '{name}' is declared more than once")]
    DuplicateType {
        /// The duplicated type name.
        name: String,
    },
}

impl SchemaParseError {
    pub(crate) fn missing(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }
}

/// Errors raised when parsing a wire string such as `[String!]!`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeReferenceError {
    /// The input (or a list element) had no type name.
    #[error("Expected a type name at position {position} in '{input}'")]
    MissingName { input: String, position: usize },

    /// A `[` was never closed.
    #[error("Unclosed list bracket in '{input}'")]
    UnclosedList { input: String },

    /// Characters remained after a complete reference.
    #[error("Unexpected trailing input at position {position} in '{input}'")]
    TrailingInput { input: String, position: usize },

    /// `!` was applied twice to the same layer.
    #[error("Double non-null marker in '{input}'")]
    DoubleNonNull { input: String },
}
