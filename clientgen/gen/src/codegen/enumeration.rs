//! Enum generation.
//!
//! Values keep their wire spelling through `#[serde(rename)]` while the Rust
//! variants are PascalCase (`NEW_HOPE` becomes `NewHope`).

use clientgen_schema::EnumDefinition;
use proc_macro2::TokenStream;
use quote::quote;
use tracing::debug;

use super::docs::{deprecated_attr, doc_attrs, doc_attrs_with};
use super::{Artifact, ArtifactGroup, GenerationContext, Generator, MemberNames};
use crate::errors::GeneratorError;
use crate::idents::type_ident;
use crate::naming::to_pascal_case;

/// Generates one Rust enum per schema enum.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumGenerator;

impl Generator for EnumGenerator {
    fn name(&self) -> &'static str {
        "enumeration"
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<Artifact>, GeneratorError> {
        let artifacts = ctx
            .model
            .enums
            .values()
            .map(|definition| generate_enum(ctx, definition))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = artifacts.len(), "Generated enumerations.");
        Ok(artifacts)
    }
}

/// Generates a single enum with its wire-string conversions.
pub fn generate_enum(
    ctx: &GenerationContext<'_>,
    definition: &EnumDefinition,
) -> Result<Artifact, GeneratorError> {
    let name = ctx.naming.enumeration(&definition.name);
    let ident = type_ident(&name);

    let mut variants = Vec::with_capacity(definition.values.len());
    let mut all = Vec::with_capacity(definition.values.len());
    let mut to_wire = Vec::with_capacity(definition.values.len());
    let mut from_wire = Vec::with_capacity(definition.values.len());
    let mut members = MemberNames::new(format!("{}/{name}", ArtifactGroup::Enumeration));

    for value in &definition.values {
        let wire = value.name.as_str();
        let variant = type_ident(&to_pascal_case(wire));
        members.claim(&variant)?;
        let docs = doc_attrs(value.description.as_deref());
        let deprecated = deprecated_attr(value.is_deprecated, value.deprecation_reason.as_deref());

        variants.push(quote! {
            #docs
            #deprecated
            #[serde(rename = #wire)]
            #variant,
        });
        all.push(quote! { Self::#variant });
        to_wire.push(quote! { Self::#variant => #wire, });
        from_wire.push(quote! { #wire => Some(Self::#variant), });
    }

    let docs = doc_attrs_with(
        definition.description.as_deref(),
        &format!("Generated from the `{}` enum.", definition.name),
    );
    let type_name = definition.name.as_str();
    let methods = conversions(&to_wire, &from_wire);

    let tokens = quote! {
        use serde::{Deserialize, Serialize};

        #docs
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum #ident {
            #(#variants)*
        }

        impl #ident {
            /// Every value, in schema order.
            pub const ALL: &'static [Self] = &[#(#all),*];

            #methods
        }

        impl std::fmt::Display for #ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_wire_str())
            }
        }

        impl std::str::FromStr for #ident {
            type Err = String;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::from_wire_str(value)
                    .ok_or_else(|| format!("unknown {} value '{}'", #type_name, value))
            }
        }
    };

    Artifact::from_tokens(ArtifactGroup::Enumeration, name, &tokens)
}

fn conversions(to_wire: &[TokenStream], from_wire: &[TokenStream]) -> TokenStream {
    quote! {
        /// The value as it appears on the wire.
        pub fn as_wire_str(&self) -> &'static str {
            match *self {
                #(#to_wire)*
            }
        }

        /// Parses a wire value, returning `None` for unknown values.
        pub fn from_wire_str(value: &str) -> Option<Self> {
            match value {
                #(#from_wire)*
                _ => None,
            }
        }
    }
}
