//! Code generation for each artifact family.
//!
//! Each submodule holds one [`Generator`]. Generators never call each other:
//! they read the shared [`GenerationContext`] and refer to other artifacts
//! purely by the names the [`NamingConvention`] gives them.
//!
//! ## Submodules
//!
//! - [`value_type`] - Structs for object types, enums for interfaces
//! - [`input_type`] - Input structs and their builders
//! - [`enumeration`] - Enums with wire-string conversions
//! - [`query`] / [`mutation`] - Operation wrappers, built on [`operation`]
//! - [`projection`] - Field-selection builders
//! - [`union`] - Closed enums for unions
//!
//! ## Output Format
//!
//! Generators build `proc_macro2::TokenStream`s and turn them into
//! [`Artifact`]s, which validates them with `syn` and formats them with
//! `prettyplease`.

pub mod docs;
pub mod enumeration;
pub mod input_type;
pub mod mutation;
pub mod operation;
pub mod projection;
pub mod query;
pub mod union;
pub mod value_type;

use std::collections::HashSet;

use clientgen_schema::SchemaModel;
use proc_macro2::{Ident, TokenStream};
use quote::quote;

pub use crate::artifact::{Artifact, ArtifactGroup};
use crate::config::{GeneratorSettings, Namespace};
use crate::errors::GeneratorError;
use crate::idents;
use crate::naming::NamingConvention;
use crate::type_mapper::TypeMapper;

pub use enumeration::EnumGenerator;
pub use input_type::InputTypeGenerator;
pub use mutation::MutationGenerator;
pub use operation::{OperationKind, OperationTemplate};
pub use projection::ProjectionGenerator;
pub use query::QueryGenerator;
pub use union::UnionGenerator;
pub use value_type::ValueTypeGenerator;

/// A producer of one family of artifacts.
pub trait Generator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produces every artifact of this family for the schema in `ctx`.
    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<Artifact>, GeneratorError>;
}

/// Everything a generator reads.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    pub model: &'a SchemaModel,
    pub mapper: TypeMapper<'a>,
    pub naming: &'a dyn NamingConvention,
    pub namespace: &'a Namespace,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        model: &'a SchemaModel,
        settings: &'a GeneratorSettings,
        naming: &'a dyn NamingConvention,
    ) -> Self {
        Self {
            model,
            mapper: TypeMapper::new(model, &settings.custom_scalars, naming, &settings.namespace),
            naming,
            namespace: &settings.namespace,
        }
    }

    /// `use <namespace>::support;`, which [`support`](Self::support) paths rely on.
    pub fn support_import(&self) -> TokenStream {
        let namespace = self.namespace;
        quote! { use #namespace::support; }
    }

    /// Path to an item of the generated `support` module, e.g. `support::BuildError`.
    pub fn support(&self, item: &str) -> TokenStream {
        let ident = idents::type_ident(item);
        quote! { support::#ident }
    }
}

/// `#[serde(rename)]` when the Rust field name differs from the wire name.
pub(crate) fn serde_rename(wire_name: &str) -> TokenStream {
    if idents::field_name(wire_name) == wire_name {
        TokenStream::new()
    } else {
        quote! { #[serde(rename = #wire_name)] }
    }
}

/// The Rust member names (fields, variants or methods) of one generated item.
///
/// Distinct schema names can case-fold to the same identifier, e.g. `ADMIN`
/// and `Admin` or `userId` and `user_id`. Claiming each identifier here turns
/// that into a [`GeneratorError::NamingCollision`] instead of an artifact
/// that does not compile.
#[derive(Debug)]
pub(crate) struct MemberNames {
    owner: String,
    claimed: HashSet<String>,
}

impl MemberNames {
    /// `owner` names the item in errors, e.g. `enumeration/Role`.
    pub(crate) fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            claimed: HashSet::new(),
        }
    }

    /// Records `ident`, failing if it was already claimed.
    pub(crate) fn claim(&mut self, ident: &Ident) -> Result<(), GeneratorError> {
        let name = ident.to_string();
        if self.claimed.insert(name.clone()) {
            Ok(())
        } else {
            Err(GeneratorError::NamingCollision {
                group: self.owner.clone(),
                name,
            })
        }
    }
}

/// All generators, in the order their artifacts are reported and written.
pub fn all_generators() -> Vec<Box<dyn Generator>> {
    vec![
        Box::new(ValueTypeGenerator),
        Box::new(InputTypeGenerator),
        Box::new(EnumGenerator),
        Box::new(QueryGenerator),
        Box::new(MutationGenerator),
        Box::new(ProjectionGenerator),
        Box::new(UnionGenerator),
    ]
}
