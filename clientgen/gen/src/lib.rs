//! clientgen code generator library.
//!
//! This crate turns a GraphQL introspection schema into a strongly-typed Rust
//! client. The generated code includes:
//!
//! - A serde struct per object type and a closed enum per interface
//! - Input structs with separate builders that enforce required fields
//! - Enums with wire-name conversions
//! - One wrapper per query and mutation field, implementing `GraphQLOperation`
//! - Projections: builders that record which fields a query selects
//! - Closed enums for unions, tagged on `__typename`
//!
//! ## Modules
//!
//! - [`orchestrator`] - Full runs: read, skip, generate, write
//! - [`codegen`] - The seven generators and their shared context
//! - [`type_mapper`] - GraphQL type references to Rust types
//! - [`naming`] - Generated type names
//! - [`output`] - Module assembly, validation, formatting and file writing
//! - [`config`] - `clientgen.toml` and validated settings
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use clientgen::config::GeneratorConfig;
//! use clientgen::orchestrator::run;
//!
//! let config = GeneratorConfig {
//!     schema_path: "schema.json".into(),
//!     output_dir: "src/graphql".into(),
//!     namespace: "crate::graphql".to_string(),
//!     ..GeneratorConfig::default()
//! };
//!
//! let report = run(&config).unwrap();
//! println!("{} artifacts", report.artifact_count());
//! ```
//!
//! ## Generated Code Structure
//!
//! For a schema with `type User { id: ID! }` and `user(id: ID!): User`:
//!
//! ```text
//! // type/user_dto.rs
//! pub struct UserDTO { pub id: String }
//!
//! // projection/user_projection.rs
//! pub struct UserProjection { ... }
//! impl UserProjection { pub fn id(self) -> Self; }
//!
//! // query/user_query.rs
//! pub struct UserQuery { pub id: String, pub projection: UserProjection }
//! impl support::GraphQLOperation for UserQuery {
//!     type Response = Option<UserDTO>;
//!     ...
//! }
//! ```

pub mod artifact;
pub mod codegen;
pub mod config;
pub mod errors;
pub mod fingerprint;
pub mod idents;
pub mod naming;
pub mod orchestrator;
pub mod output;
pub mod type_mapper;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;

pub use artifact::{Artifact, ArtifactGroup};
pub use config::{GeneratorConfig, GeneratorSettings, Namespace};
pub use errors::GeneratorError;
pub use orchestrator::{GenerationOutcome, GenerationReport, generate_artifacts, run};
