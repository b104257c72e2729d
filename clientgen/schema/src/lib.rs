//! Clientgen Schema Library
//!
//! This crate provides the immutable schema model consumed by the `clientgen`
//! code generator, together with the parser that builds it from a
//! GraphQL introspection result.
//!
//! ## Core Types
//!
//! - [`TypeReference`] - The wire type algebra (`Named`, `NonNull`, `List`)
//! - [`FieldDefinition`] - A field of an object or interface type
//! - [`ArgumentDefinition`] - A field argument or input-object field
//! - [`TypeDefinition`] - An object type
//! - [`InterfaceDefinition`] - An interface type with its possible types
//! - [`InputTypeDefinition`] - An input-object type
//! - [`EnumDefinition`] / [`EnumValueDefinition`] - Enumerations
//! - [`UnionDefinition`] - A union with its member names
//! - [`ScalarDefinition`] - A custom scalar
//! - [`SchemaModel`] - The root container with one lookup table per kind
//!
//! ## Examples
//!
//! ```
//! use clientgen_schema::{parse_schema, TypeKind};
//!
//! let source = r#"{
//!   "__schema": {
//!     "queryType": { "name": "Query" },
//!     "types": [
//!       {
//!         "kind": "OBJECT",
//!         "name": "Query",
//!         "fields": [
//!           { "name": "hello", "args": [],
//!             "type": { "kind": "SCALAR", "name": "String" } }
//!         ]
//!       }
//!     ]
//!   }
//! }"#;
//!
//! let model = parse_schema(source).unwrap();
//! assert_eq!(model.query_type_name, "Query");
//! assert_eq!(model.kind_of("Query"), Some(TypeKind::Object));
//! assert_eq!(model.kind_of("String"), Some(TypeKind::Scalar));
//! ```

pub mod definitions;
pub mod errors;
pub mod model;
pub mod parser;
pub mod type_ref;

pub use definitions::{
    ArgumentDefinition, EnumDefinition, EnumValueDefinition, FieldDefinition,
    InputTypeDefinition, InterfaceDefinition, ScalarDefinition, TypeDefinition, UnionDefinition,
};
pub use errors::{SchemaParseError, TypeReferenceError};
pub use model::{BUILT_IN_SCALARS, SchemaModel, TypeKind};
pub use parser::{parse_document, parse_schema};
pub use type_ref::TypeReference;
