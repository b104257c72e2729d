//! Input type generation.
//!
//! Each input-object type becomes a serde struct plus a separate builder.
//! Required fields (non-null without a default) are plain `T`; everything
//! else is `Option<T>` and left out of the serialized object when unset, so
//! the server applies its own default.

use clientgen_schema::{ArgumentDefinition, InputTypeDefinition};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use tracing::debug;

use super::docs::{doc_attrs, doc_attrs_with};
use super::{Artifact, ArtifactGroup, GenerationContext, Generator, MemberNames, serde_rename};
use crate::errors::GeneratorError;
use crate::idents::{field_ident, field_name, type_ident};
use crate::type_mapper::Boxing;

/// Generates input structs and their builders.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTypeGenerator;

impl Generator for InputTypeGenerator {
    fn name(&self) -> &'static str {
        "input-type"
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<Artifact>, GeneratorError> {
        let artifacts = ctx
            .model
            .inputs
            .values()
            .map(|input| generate_input_type(ctx, input))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = artifacts.len(), "Generated input types.");
        Ok(artifacts)
    }
}

/// A resolved input field.
struct InputField {
    ident: Ident,
    setter: Ident,
    wire: String,
    required: bool,
    /// The field type without the outer `Option`.
    value_ty: TokenStream,
    docs: TokenStream,
}

/// Generates the struct and builder for one input-object type.
pub fn generate_input_type(
    ctx: &GenerationContext<'_>,
    input: &InputTypeDefinition,
) -> Result<Artifact, GeneratorError> {
    let name = ctx.naming.input_type(&input.name);
    let ident = type_ident(&name);
    let builder_ident = format_ident!("{}Builder", ident);
    let build_error = ctx.support("BuildError");

    let fields = input
        .fields
        .iter()
        .map(|field| input_field(ctx, &input.name, field))
        .collect::<Result<Vec<_>, _>>()?;

    let owner = format!("{}/{name}", ArtifactGroup::Input);
    let mut field_names = MemberNames::new(owner.clone());
    let mut builder_methods = MemberNames::new(format!("{owner}Builder"));
    builder_methods.claim(&format_ident!("build"))?;
    for field in &fields {
        field_names.claim(&field.ident)?;
        builder_methods.claim(&field.setter)?;
    }

    let struct_fields = fields.iter().map(|field| {
        let InputField {
            ident,
            wire,
            value_ty,
            docs,
            ..
        } = field;
        let rename = serde_rename(wire);
        if field.required {
            quote! {
                #docs
                #rename
                pub #ident: #value_ty,
            }
        } else {
            quote! {
                #docs
                #rename
                #[serde(skip_serializing_if = "Option::is_none")]
                pub #ident: Option<#value_ty>,
            }
        }
    });

    let builder_fields = fields.iter().map(|InputField { ident, value_ty, .. }| {
        quote! { #ident: Option<#value_ty>, }
    });

    let setters = fields.iter().map(
        |InputField {
             ident,
             setter,
             value_ty,
             docs,
             ..
         }| {
            quote! {
                #docs
                pub fn #setter(mut self, value: impl Into<#value_ty>) -> Self {
                    self.#ident = Some(value.into());
                    self
                }
            }
        },
    );

    let type_name = name.as_str();
    let assignments = fields.iter().map(|field| {
        let InputField { ident, wire, .. } = field;
        if field.required {
            quote! { #ident: self.#ident.ok_or(#build_error::missing(#type_name, #wire))?, }
        } else {
            quote! { #ident: self.#ident, }
        }
    });

    let docs = doc_attrs_with(
        input.description.as_deref(),
        &format!("Generated from the `{}` input type.", input.name),
    );
    let builder_doc = format!(" Builder for [`{name}`].");

    let support = ctx.support_import();

    let tokens = quote! {
        use serde::{Deserialize, Serialize};

        #support

        #docs
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct #ident {
            #(#struct_fields)*
        }

        impl #ident {
            /// Starts building a value field by field.
            pub fn builder() -> #builder_ident {
                <#builder_ident as Default>::default()
            }
        }

        #[doc = #builder_doc]
        #[derive(Debug, Clone, Default)]
        pub struct #builder_ident {
            #(#builder_fields)*
        }

        impl #builder_ident {
            #(#setters)*

            /// Finishes the value, failing on the first unset required field.
            pub fn build(self) -> Result<#ident, #build_error> {
                Ok(#ident {
                    #(#assignments)*
                })
            }
        }
    };

    Artifact::from_tokens(ArtifactGroup::Input, name, &tokens)
}

fn input_field(
    ctx: &GenerationContext<'_>,
    owner: &str,
    field: &ArgumentDefinition,
) -> Result<InputField, GeneratorError> {
    let context = format!("input field {owner}.{}", field.name);
    let resolved = ctx.mapper.resolve(&field.type_ref, &context)?;
    let value_ty = ctx.mapper.render(&resolved.non_null(), Boxing::Composite)?;

    let snake = field_name(&field.name);
    let setter = if snake == "build" {
        format_ident!("set_build")
    } else {
        field_ident(&field.name)
    };

    let mut description = field.description.clone().unwrap_or_default();
    if let Some(default) = &field.default_value {
        if !description.is_empty() {
            description.push_str("\n\n");
        }
        description.push_str(&format!("Defaults to `{default}` on the server."));
    }

    Ok(InputField {
        ident: field_ident(&field.name),
        setter,
        wire: field.name.clone(),
        required: field.is_required(),
        value_ty,
        docs: doc_attrs(Some(description.as_str())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::with_sample_context;

    fn create_user_input() -> Artifact {
        let artifacts = with_sample_context(|ctx| InputTypeGenerator.generate(ctx)).unwrap();
        assert_eq!(artifacts.len(), 1);
        artifacts.into_iter().next().unwrap()
    }

    #[test]
    fn struct_fields_by_requiredness() {
        let input = create_user_input();
        assert_eq!(input.name, "CreateUserInput");
        assert_eq!(input.group, ArtifactGroup::Input);
        assert_eq!(input.file_name, "create_user_input.rs");

        let code = &input.contents;
        assert!(code.contains("pub name: String,"));
        assert!(code.contains("pub email: Option<String>,"));
        // Non-null with a default is optional for the client.
        assert!(code.contains("pub role: Option<crate::graphql::enumeration::Role>,"));
        assert!(
            code.contains("pub manager: Option<Box<crate::graphql::input::CreateUserInput>>,")
        );
        assert_eq!(code.matches("skip_serializing_if = \"Option::is_none\"").count(), 3);
        assert!(code.contains("Defaults to `MEMBER` on the server."));
    }

    #[test]
    fn builder_is_a_separate_type() {
        let code = create_user_input().contents;
        assert!(code.contains("pub struct CreateUserInputBuilder"));
        assert!(code.contains("pub fn builder() -> CreateUserInputBuilder"));
        assert!(code.contains("pub fn name(mut self, value: impl Into<String>) -> Self"));
        assert!(code.contains("use crate::graphql::support;"));
        assert!(code.contains("pub fn build(self) -> Result<CreateUserInput, support::BuildError>"));
        assert!(code.contains("BuildError::missing"));
        assert!(code.contains("\"CreateUserInput\""));
        assert!(code.contains("email: self.email,"));
    }

    #[test]
    fn build_setter_is_renamed() {
        let artifact = with_sample_context(|ctx| {
            let input = InputTypeDefinition {
                name: "JobInput".to_string(),
                description: None,
                fields: vec![ArgumentDefinition {
                    name: "build".to_string(),
                    description: None,
                    type_ref: clientgen_schema::TypeReference::named("Int"),
                    default_value: None,
                }],
            };
            generate_input_type(ctx, &input)
        })
        .unwrap();

        assert!(artifact.contents.contains("pub fn set_build(mut self"));
        assert!(artifact.contents.contains("pub build: Option<i32>,"));
    }

    #[test]
    fn fields_folding_to_one_ident_are_rejected() {
        let err = with_sample_context(|ctx| {
            let input = InputTypeDefinition {
                name: "FilterInput".to_string(),
                description: None,
                fields: ["userId", "user_id"]
                    .iter()
                    .map(|name| ArgumentDefinition {
                        name: (*name).to_string(),
                        description: None,
                        type_ref: clientgen_schema::TypeReference::named("ID"),
                        default_value: None,
                    })
                    .collect(),
            };
            generate_input_type(ctx, &input)
        })
        .unwrap_err();

        assert!(matches!(
            err,
            GeneratorError::NamingCollision { ref group, ref name }
                if group == "input/FilterInput" && name == "user_id"
        ));
    }
}
