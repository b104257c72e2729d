//! Error types for the clientgen generator.

use clientgen_schema::SchemaParseError;
use thiserror::Error;

/// Errors that can occur during a generation run.
///
/// Every variant is fatal: a run either writes all artifacts and advances the
/// fingerprint, or fails without advancing it.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A required configuration field is missing or invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The schema document could not be parsed.
    #[error("Failed to parse schema: {0}")]
    SchemaParse(#[from] SchemaParseError),

    /// A field references a type name found in no schema table.
    #[error("Unresolved type '{name}' referenced by {context}")]
    UnresolvedType {
        /// The type name that could not be found.
        name: String,
        /// Where the reference appears, e.g. `field User.posts`.
        context: String,
    },

    /// Generated code failed syntax validation.
    #[error("Code generation failed: {0}")]
    CodeGen(String),

    /// Two artifacts in the same group resolved to the same generated name.
    ///
    /// This happens when the schema already defines a type whose name carries
    /// a category suffix, e.g. both `User` and `UserDTO`.
    #[error(
        "Naming collision in '{group}' output: '{name}' is generated more than once. Rename one of the schema types or change the naming suffixes"
    )]
    NamingCollision {
        /// The output group holding both artifacts.
        group: String,
        /// The generated name both artifacts share.
        name: String,
    },

    /// Failed to read the schema source or fingerprint marker.
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("Failed to write output file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    pub(crate) fn unresolved(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnresolvedType {
            name: name.into(),
            context: context.into(),
        }
    }
}
