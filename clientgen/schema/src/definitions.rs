//! Definitions for each kind of schema type.
//!
//! These are plain immutable records. Ordering of fields, arguments, enum
//! values and union members follows the source document.

use crate::type_ref::TypeReference;

/// A field argument, or a field of an input-object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDefinition {
    pub name: String,
    pub description: Option<String>,
    pub type_ref: TypeReference,
    /// The default value literal exactly as it appears in the schema.
    pub default_value: Option<String>,
}

impl ArgumentDefinition {
    /// An argument is required when its type is non-null and it has no default.
    ///
    /// ## Examples
    ///
    /// ```
    /// use clientgen_schema::{ArgumentDefinition, TypeReference};
    ///
    /// let mut arg = ArgumentDefinition {
    ///     name: "first".to_string(),
    ///     description: None,
    ///     type_ref: TypeReference::named("Int").non_null(),
    ///     default_value: None,
    /// };
    /// assert!(arg.is_required());
    ///
    /// arg.default_value = Some("10".to_string());
    /// assert!(!arg.is_required());
    /// ```
    pub fn is_required(&self) -> bool {
        self.type_ref.is_non_null() && self.default_value.is_none()
    }
}

/// A field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub description: Option<String>,
    pub type_ref: TypeReference,
    pub arguments: Vec<ArgumentDefinition>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// An object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDefinition>,
    /// Names of the interfaces this type implements.
    pub interfaces: Vec<String>,
}

/// An interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDefinition {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDefinition>,
    pub interfaces: Vec<String>,
    /// Names of the concrete object types implementing this interface.
    pub possible_types: Vec<String>,
}

/// An input-object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTypeDefinition {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<ArgumentDefinition>,
}

/// A single value of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDefinition {
    pub name: String,
    pub description: Option<String>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// An enum type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValueDefinition>,
}

/// A union type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionDefinition {
    pub name: String,
    pub description: Option<String>,
    /// Member object type names, in declaration order.
    pub members: Vec<String>,
}

/// A custom scalar type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarDefinition {
    pub name: String,
    pub description: Option<String>,
}
