//! Naming conventions for generated identifiers.
//!
//! Every generator obtains the name of every artifact (its own and the ones it
//! references) through a single [`NamingConvention`]. That is what keeps a
//! value type, the projection pointing at it and the operation returning it
//! in agreement.
//!
//! ## Default Policy
//!
//! [`SuffixNaming`] capitalizes the first letter of the schema name and
//! appends a category suffix:
//!
//! | Category | Suffix | `user` becomes |
//! |----------|--------|----------------|
//! | object type | `DTO` | `UserDTO` |
//! | input type | `Input` | `UserInput` |
//! | query operation | `Query` | `UserQuery` |
//! | mutation operation | `Mutation` | `UserMutation` |
//! | projection | `Projection` | `UserProjection` |
//! | enum / interface / union | none | `User` |
//!
//! A name already ending with its suffix is left alone, so applying a
//! category function twice yields the same result as applying it once.

use std::fmt::Debug;

use serde::Deserialize;

use crate::errors::GeneratorError;

/// Strategy converting schema names into generated identifiers.
pub trait NamingConvention: Debug + Send + Sync {
    /// Value type generated for an object type.
    fn object_type(&self, name: &str) -> String;
    /// Input type generated for an input-object type.
    fn input_type(&self, name: &str) -> String;
    /// Operation wrapper generated for a Query root field.
    fn query_operation(&self, field_name: &str) -> String;
    /// Operation wrapper generated for a Mutation root field.
    fn mutation_operation(&self, field_name: &str) -> String;
    /// Enum generated for a schema enum.
    fn enumeration(&self, name: &str) -> String;
    /// Closed enum generated for an interface.
    fn interface(&self, name: &str) -> String;
    /// Closed enum generated for a union.
    fn union(&self, name: &str) -> String;
    /// Field-selection builder generated for an object, interface or union.
    fn projection(&self, name: &str) -> String;

    /// Variant name of `member` inside an interface or union enum.
    fn member_variant(&self, member: &str) -> String {
        to_pascal_case(member)
    }
}

/// Per-category suffixes used by [`SuffixNaming`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingSuffixes {
    pub object: String,
    pub input: String,
    pub query: String,
    pub mutation: String,
    pub projection: String,
    pub enumeration: String,
    pub interface: String,
    pub union: String,
}

impl Default for NamingSuffixes {
    fn default() -> Self {
        Self {
            object: "DTO".to_string(),
            input: "Input".to_string(),
            query: "Query".to_string(),
            mutation: "Mutation".to_string(),
            projection: "Projection".to_string(),
            enumeration: String::new(),
            interface: String::new(),
            union: String::new(),
        }
    }
}

impl NamingSuffixes {
    /// Checks every suffix is alphanumeric so that generated names are valid
    /// Rust identifiers.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::Config`] naming the offending category.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let categories = [
            ("object", &self.object),
            ("input", &self.input),
            ("query", &self.query),
            ("mutation", &self.mutation),
            ("projection", &self.projection),
            ("enumeration", &self.enumeration),
            ("interface", &self.interface),
            ("union", &self.union),
        ];

        for (category, suffix) in categories {
            if !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(GeneratorError::Config(format!(
                    "{category} suffix '{suffix}' must contain only letters and numbers"
                )));
            }
        }

        // Operations and projections share namespaces with value types, so an
        // empty suffix would make them collide.
        for (category, suffix) in [
            ("query", &self.query),
            ("mutation", &self.mutation),
            ("projection", &self.projection),
        ] {
            if suffix.is_empty() {
                return Err(GeneratorError::Config(format!(
                    "{category} suffix cannot be empty"
                )));
            }
        }

        Ok(())
    }
}

/// The default capitalize-and-suffix naming policy.
///
/// ## Examples
///
/// ```
/// use clientgen::naming::{NamingConvention, SuffixNaming};
///
/// let naming = SuffixNaming::default();
/// assert_eq!(naming.object_type("user"), "UserDTO");
/// assert_eq!(naming.object_type("UserDTO"), "UserDTO");
/// assert_eq!(naming.mutation_operation("createUser"), "CreateUserMutation");
/// assert_eq!(naming.enumeration("episode"), "Episode");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixNaming {
    suffixes: NamingSuffixes,
}

impl SuffixNaming {
    pub fn new(suffixes: NamingSuffixes) -> Self {
        Self { suffixes }
    }

    pub fn suffixes(&self) -> &NamingSuffixes {
        &self.suffixes
    }
}

impl NamingConvention for SuffixNaming {
    fn object_type(&self, name: &str) -> String {
        with_suffix(name, &self.suffixes.object)
    }

    fn input_type(&self, name: &str) -> String {
        with_suffix(name, &self.suffixes.input)
    }

    fn query_operation(&self, field_name: &str) -> String {
        with_suffix(field_name, &self.suffixes.query)
    }

    fn mutation_operation(&self, field_name: &str) -> String {
        with_suffix(field_name, &self.suffixes.mutation)
    }

    fn enumeration(&self, name: &str) -> String {
        with_suffix(name, &self.suffixes.enumeration)
    }

    fn interface(&self, name: &str) -> String {
        with_suffix(name, &self.suffixes.interface)
    }

    fn union(&self, name: &str) -> String {
        with_suffix(name, &self.suffixes.union)
    }

    fn projection(&self, name: &str) -> String {
        with_suffix(name, &self.suffixes.projection)
    }
}

/// Capitalizes `name` and appends `suffix` unless it is already present.
fn with_suffix(name: &str, suffix: &str) -> String {
    let capitalized = capitalize(name);
    if capitalized.ends_with(suffix) {
        capitalized
    } else {
        format!("{capitalized}{suffix}")
    }
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits a camelCase, PascalCase or snake_case name into words.
///
/// Handles various patterns:
/// - "createUser" -> ["create", "User"]
/// - "UserDTO" -> ["User", "DTO"]
/// - "HTTPClient" -> ["HTTP", "Client"]
/// - "NEW_HOPE" -> ["NEW", "HOPE"]
pub fn split_camel_case(s: &str) -> Vec<&str> {
    let mut words = Vec::new();

    for segment in s.split('_').filter(|segment| !segment.is_empty()) {
        let chars: Vec<(usize, char)> = segment.char_indices().collect();
        let mut word_start = 0;

        for i in 1..chars.len() {
            let (offset, current) = chars[i];
            let prev = chars[i - 1].1;

            // Split before uppercase that follows lowercase or a digit: "createUser" -> "create", "User"
            // Split before uppercase followed by lowercase when preceded by uppercase: "HTTPClient" -> "HTTP", "Client"
            let is_new_word = current.is_uppercase()
                && (prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (i + 1 < chars.len() && chars[i + 1].1.is_lowercase() && prev.is_uppercase()));

            if is_new_word {
                if offset > word_start {
                    words.push(&segment[word_start..offset]);
                }
                word_start = offset;
            }
        }

        if word_start < segment.len() {
            words.push(&segment[word_start..]);
        }
    }

    words
}

/// Converts a schema name to snake_case ("createdAt" -> "created_at",
/// "UserDTO" -> "user_dto").
pub fn to_snake_case(name: &str) -> String {
    split_camel_case(name)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Converts a schema name to PascalCase ("NEW_HOPE" -> "NewHope",
/// "createdAt" -> "CreatedAt").
pub fn to_pascal_case(name: &str) -> String {
    split_camel_case(name)
        .iter()
        .map(|word| capitalize(&word.to_lowercase()))
        .collect()
}
