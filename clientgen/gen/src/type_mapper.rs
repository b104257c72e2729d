//! Resolution of wire type references into Rust types.
//!
//! Every generator goes through [`TypeMapper`] for every field and argument
//! type, so a reference to `User` reads the same wherever it appears.
//!
//! ## Resolution Order
//!
//! For a named type:
//!
//! 1. Custom scalar overrides from the configuration
//! 2. Built-in scalars (`String`, `ID`, `Int`, `Float`, `Boolean`)
//! 3. Declared custom scalars without an override (`serde_json::Value`)
//! 4. Enum, input, object, interface and union tables
//!
//! Anything else is an [`GeneratorError::UnresolvedType`].

use std::collections::BTreeMap;

use clientgen_schema::{SchemaModel, TypeKind, TypeReference};
use proc_macro2::TokenStream;
use quote::quote;

use crate::artifact::ArtifactGroup;
use crate::config::Namespace;
use crate::errors::GeneratorError;
use crate::idents;
use crate::naming::NamingConvention;

/// Built-in scalar types and the Rust type each maps to.
const BUILT_IN_MAPPINGS: &[(&str, BuiltinScalar)] = &[
    ("String", BuiltinScalar::String),
    ("ID", BuiltinScalar::String),
    ("Int", BuiltinScalar::Int),
    ("Float", BuiltinScalar::Float),
    ("Boolean", BuiltinScalar::Boolean),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinScalar {
    String,
    Int,
    Float,
    Boolean,
}

/// What a resolved type points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
    Builtin(BuiltinScalar),
    /// A custom scalar override, holding the configured Rust type path.
    Custom(String),
    /// A declared scalar without an override.
    Opaque,
    /// The generated names of the referenced artifacts.
    Enum(String),
    Input(String),
    Object(String),
    Interface(String),
    Union(String),
    List(Box<ResolvedType>),
}

/// A target type plus the nullability of its outermost layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub target: TargetType,
    pub nullable: bool,
}

impl ResolvedType {
    /// Same target, forced nullable.
    pub fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    /// Same target, forced non-null.
    pub fn non_null(self) -> Self {
        Self {
            nullable: false,
            ..self
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self.target, TargetType::List(_))
    }
}

/// Whether composite references are boxed when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boxing {
    /// Render references as-is.
    None,
    /// Box object, interface, union and input references that are not inside
    /// a `Vec`, so that self-referential structs have a finite size.
    Composite,
}

/// Resolves wire type references against a schema.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    model: &'a SchemaModel,
    custom_scalars: &'a BTreeMap<String, String>,
    naming: &'a dyn NamingConvention,
    namespace: &'a Namespace,
}

impl<'a> TypeMapper<'a> {
    pub fn new(
        model: &'a SchemaModel,
        custom_scalars: &'a BTreeMap<String, String>,
        naming: &'a dyn NamingConvention,
        namespace: &'a Namespace,
    ) -> Self {
        Self {
            model,
            custom_scalars,
            naming,
            namespace,
        }
    }

    /// Resolves a type reference.
    ///
    /// `context` names where the reference appears and ends up in the error
    /// message, e.g. `field User.posts`.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::UnresolvedType`] if the base name is in no
    /// table.
    pub fn resolve(
        &self,
        type_ref: &TypeReference,
        context: &str,
    ) -> Result<ResolvedType, GeneratorError> {
        match type_ref {
            TypeReference::NonNull(inner) => Ok(self.resolve(inner, context)?.non_null()),
            TypeReference::List(inner) => Ok(ResolvedType {
                target: TargetType::List(Box::new(self.resolve(inner, context)?)),
                nullable: true,
            }),
            TypeReference::Named(name) => Ok(ResolvedType {
                target: self.resolve_named(name, context)?,
                nullable: true,
            }),
        }
    }

    fn resolve_named(&self, name: &str, context: &str) -> Result<TargetType, GeneratorError> {
        if let Some(target) = self.custom_scalars.get(name) {
            return Ok(TargetType::Custom(target.clone()));
        }

        if let Some((_, scalar)) = BUILT_IN_MAPPINGS.iter().find(|(wire, _)| *wire == name) {
            return Ok(TargetType::Builtin(*scalar));
        }

        let target = match self.model.kind_of(name) {
            Some(TypeKind::Scalar) => TargetType::Opaque,
            Some(TypeKind::Enum) => TargetType::Enum(self.naming.enumeration(name)),
            Some(TypeKind::InputObject) => TargetType::Input(self.naming.input_type(name)),
            Some(TypeKind::Object) => TargetType::Object(self.naming.object_type(name)),
            Some(TypeKind::Interface) => TargetType::Interface(self.naming.interface(name)),
            Some(TypeKind::Union) => TargetType::Union(self.naming.union(name)),
            None => return Err(GeneratorError::unresolved(name, context)),
        };

        Ok(target)
    }

    /// Renders a resolved type as Rust type tokens.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::Config`] if a custom scalar target does not
    /// parse, which validated settings rule out.
    pub fn render(
        &self,
        resolved: &ResolvedType,
        boxing: Boxing,
    ) -> Result<TokenStream, GeneratorError> {
        let base = match &resolved.target {
            TargetType::Builtin(BuiltinScalar::String) => quote! { String },
            TargetType::Builtin(BuiltinScalar::Int) => quote! { i32 },
            TargetType::Builtin(BuiltinScalar::Float) => quote! { f64 },
            TargetType::Builtin(BuiltinScalar::Boolean) => quote! { bool },
            TargetType::Custom(path) => {
                let ty = syn::parse_str::<syn::Type>(path).map_err(|e| {
                    GeneratorError::Config(format!("custom scalar type '{path}': {e}"))
                })?;
                quote! { #ty }
            }
            TargetType::Opaque => quote! { serde_json::Value },
            TargetType::Enum(name) => self.group_path(ArtifactGroup::Enumeration, name),
            TargetType::Input(name) => {
                self.boxed(self.group_path(ArtifactGroup::Input, name), boxing)
            }
            TargetType::Object(name) | TargetType::Interface(name) => {
                self.boxed(self.group_path(ArtifactGroup::Type, name), boxing)
            }
            TargetType::Union(name) => {
                self.boxed(self.group_path(ArtifactGroup::Union, name), boxing)
            }
            TargetType::List(inner) => {
                let inner = self.render(inner, Boxing::None)?;
                quote! { Vec<#inner> }
            }
        };

        if resolved.nullable {
            Ok(quote! { Option<#base> })
        } else {
            Ok(base)
        }
    }

    /// Absolute path to a generated item, e.g. `crate::graphql::r#type::UserDTO`.
    pub fn group_path(&self, group: ArtifactGroup, name: &str) -> TokenStream {
        let namespace = self.namespace;
        let module = group.module_ident();
        let ident = idents::type_ident(name);
        quote! { #namespace::#module::#ident }
    }

    fn boxed(&self, path: TokenStream, boxing: Boxing) -> TokenStream {
        match boxing {
            Boxing::None => path,
            Boxing::Composite => quote! { Box<#path> },
        }
    }

    pub fn model(&self) -> &'a SchemaModel {
        self.model
    }

    pub fn naming(&self) -> &'a dyn NamingConvention {
        self.naming
    }
}
