//! Value type generation for object and interface types.
//!
//! Every non-root object type becomes a serde struct with one field per
//! schema field. Nullable fields are `Option`, composite references outside a
//! `Vec` are boxed, so `User.bestFriend: User` is `Option<Box<UserDTO>>`.
//!
//! Interfaces cannot be field types in Rust, so each interface becomes a
//! closed enum over its possible types, written to the same `type` group.
//! Each value type converts into every interface it implements and every
//! union that lists it.

use clientgen_schema::{FieldDefinition, InterfaceDefinition, TypeDefinition};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use tracing::{debug, warn};

use super::docs::{deprecated_attr, doc_attrs, doc_attrs_with};
use super::union::closed_enum;
use super::{Artifact, ArtifactGroup, GenerationContext, Generator, MemberNames, serde_rename};
use crate::errors::GeneratorError;
use crate::idents::{field_ident, type_ident};
use crate::type_mapper::Boxing;

/// Generates value structs for object types and enums for interfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueTypeGenerator;

impl Generator for ValueTypeGenerator {
    fn name(&self) -> &'static str {
        "value-type"
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<Artifact>, GeneratorError> {
        let mut artifacts = ctx
            .model
            .data_objects()
            .map(|object| generate_value_type(ctx, object))
            .collect::<Result<Vec<_>, _>>()?;

        for interface in ctx.model.interfaces.values() {
            artifacts.push(generate_interface(ctx, interface)?);
        }

        debug!(count = artifacts.len(), "Generated value types.");
        Ok(artifacts)
    }
}

/// Generates the value struct for one object type.
pub fn generate_value_type(
    ctx: &GenerationContext<'_>,
    object: &TypeDefinition,
) -> Result<Artifact, GeneratorError> {
    let name = ctx.naming.object_type(&object.name);
    let ident = type_ident(&name);

    let mut members = MemberNames::new(format!("{}/{name}", ArtifactGroup::Type));
    let fields = object
        .fields
        .iter()
        .map(|field| {
            members.claim(&field_ident(&field.name))?;
            value_field(ctx, &object.name, field)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let conversions = conversions(ctx, object, &ident);
    let docs = doc_attrs_with(
        object.description.as_deref(),
        &format!("Generated from the `{}` object type.", object.name),
    );

    let tokens = quote! {
        use serde::{Deserialize, Serialize};

        #docs
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct #ident {
            #(#fields)*
        }

        #(#conversions)*
    };

    Artifact::from_tokens(ArtifactGroup::Type, name, &tokens)
}

/// Generates the closed enum for one interface.
pub fn generate_interface(
    ctx: &GenerationContext<'_>,
    interface: &InterfaceDefinition,
) -> Result<Artifact, GeneratorError> {
    let name = ctx.naming.interface(&interface.name);

    // Interface fields are still resolved so that a dangling reference fails
    // the run the same way it would on an object.
    for field in &interface.fields {
        let context = format!("field {}.{}", interface.name, field.name);
        ctx.mapper.resolve(&field.type_ref, &context)?;
    }

    let docs = doc_attrs_with(
        interface.description.as_deref(),
        &format!("Generated from the `{}` interface.", interface.name),
    );
    let tokens = closed_enum(ctx, &name, &docs, &interface.possible_types, &interface.name)?;
    Artifact::from_tokens(ArtifactGroup::Type, name, &tokens)
}

fn value_field(
    ctx: &GenerationContext<'_>,
    owner: &str,
    field: &FieldDefinition,
) -> Result<TokenStream, GeneratorError> {
    let context = format!("field {owner}.{}", field.name);
    let resolved = ctx.mapper.resolve(&field.type_ref, &context)?;
    let ty = ctx.mapper.render(&resolved, Boxing::Composite)?;

    let ident = field_ident(&field.name);
    let rename = serde_rename(&field.name);
    let docs = doc_attrs(field.description.as_deref());
    let deprecated = deprecated_attr(field.is_deprecated, field.deprecation_reason.as_deref());

    Ok(quote! {
        #docs
        #deprecated
        #rename
        pub #ident: #ty,
    })
}

/// `From` impls into each implemented interface and each containing union.
fn conversions(
    ctx: &GenerationContext<'_>,
    object: &TypeDefinition,
    ident: &Ident,
) -> Vec<TokenStream> {
    let variant = type_ident(&ctx.naming.member_variant(&object.name));
    let mut targets = Vec::new();

    for interface_name in &object.interfaces {
        match ctx.model.interfaces.get(interface_name) {
            Some(interface) if interface.possible_types.contains(&object.name) => {
                targets.push(ctx.mapper.group_path(
                    ArtifactGroup::Type,
                    &ctx.naming.interface(interface_name),
                ));
            }
            Some(_) => warn!(
                object = %object.name,
                interface = %interface_name,
                "Interface does not list this implementor; skipping conversion."
            ),
            None => warn!(
                object = %object.name,
                interface = %interface_name,
                "Object implements an undeclared interface; skipping conversion."
            ),
        }
    }

    for union_name in ctx.model.unions_containing(&object.name) {
        targets.push(
            ctx.mapper
                .group_path(ArtifactGroup::Union, &ctx.naming.union(union_name)),
        );
    }

    targets
        .into_iter()
        .map(|target| {
            quote! {
                impl From<#ident> for #target {
                    fn from(value: #ident) -> Self {
                        Self::#variant(value)
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::with_sample_context;

    fn find<'a>(artifacts: &'a [Artifact], name: &str) -> &'a Artifact {
        artifacts
            .iter()
            .find(|a| a.name == name)
            .unwrap_or_else(|| panic!("no artifact named {name}"))
    }

    #[test]
    fn one_artifact_per_data_object_and_interface() {
        let artifacts = with_sample_context(|ctx| ValueTypeGenerator.generate(ctx)).unwrap();
        let names: Vec<_> = artifacts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["PostDTO", "UserDTO", "Node"]);
        assert!(artifacts.iter().all(|a| a.group == ArtifactGroup::Type));
    }

    #[test]
    fn user_fields_follow_nullability() {
        let artifacts = with_sample_context(|ctx| ValueTypeGenerator.generate(ctx)).unwrap();
        let user = find(&artifacts, "UserDTO");

        assert!(user.contents.contains("pub struct UserDTO"));
        assert!(user.contents.contains("pub id: String,"));
        assert!(user.contents.contains("pub name: String,"));
        assert!(user.contents.contains("pub email: Option<String>,"));
        assert!(user.contents.contains("pub role: crate::graphql::enumeration::Role,"));
        assert!(user.contents.contains("pub posts: Vec<crate::graphql::r#type::PostDTO>,"));
        assert!(
            user.contents
                .contains("pub best_friend: Option<Box<crate::graphql::r#type::UserDTO>>,")
        );
        assert!(user.contents.contains("pub profile: Option<serde_json::Value>,"));
        assert!(user.contents.contains("#[serde(rename = \"bestFriend\")]"));
        assert!(user.contents.contains("/// Primary contact address."));
    }

    #[test]
    fn custom_scalar_override_is_used() {
        let artifacts = with_sample_context(|ctx| ValueTypeGenerator.generate(ctx)).unwrap();
        let user = find(&artifacts, "UserDTO");
        assert!(user.contents.contains("pub created_at: Option<String>,"));
    }

    #[test]
    fn deprecated_fields_carry_reason() {
        let artifacts = with_sample_context(|ctx| ValueTypeGenerator.generate(ctx)).unwrap();
        let post = find(&artifacts, "PostDTO");
        assert!(post.contents.contains("#[deprecated(note = \"Use id instead.\")]"));
        assert!(post.contents.contains("pub legacy_id: Option<i32>,"));
    }

    #[test]
    fn conversions_into_interfaces_and_unions() {
        let artifacts = with_sample_context(|ctx| ValueTypeGenerator.generate(ctx)).unwrap();
        let user = find(&artifacts, "UserDTO");
        assert!(user.contents.contains("impl From<UserDTO> for crate::graphql::r#type::Node"));
        assert!(
            user.contents
                .contains("impl From<UserDTO> for crate::graphql::union::SearchResult")
        );
        assert!(user.contents.contains("Self::User(value)"));
    }

    #[test]
    fn interface_enum_covers_possible_types() {
        let artifacts = with_sample_context(|ctx| ValueTypeGenerator.generate(ctx)).unwrap();
        let node = find(&artifacts, "Node");
        assert_eq!(node.file_name, "node.rs");
        assert!(node.contents.contains("pub enum Node"));
        assert!(node.contents.contains("Post(crate::graphql::r#type::PostDTO)"));
        assert!(node.contents.contains("User(crate::graphql::r#type::UserDTO)"));
        assert!(node.contents.contains("An object with a global identifier."));
    }

    #[tracing_test::traced_test]
    #[test]
    fn unlisted_implementor_is_warned_not_converted() {
        let artifact = with_sample_context(|ctx| {
            let orphan = TypeDefinition {
                name: "Comment".to_string(),
                description: None,
                fields: vec![],
                interfaces: vec!["Node".to_string()],
            };
            generate_value_type(ctx, &orphan)
        })
        .unwrap();

        assert!(!artifact.contents.contains("impl From<CommentDTO>"));
        assert!(logs_contain("Interface does not list this implementor"));
    }

    #[test]
    fn unresolved_field_type_fails() {
        let err = with_sample_context(|ctx| {
            let broken = TypeDefinition {
                name: "Broken".to_string(),
                description: None,
                fields: vec![FieldDefinition {
                    name: "ghost".to_string(),
                    description: None,
                    type_ref: clientgen_schema::TypeReference::named("Ghost"),
                    arguments: vec![],
                    is_deprecated: false,
                    deprecation_reason: None,
                }],
                interfaces: vec![],
            };
            generate_value_type(ctx, &broken)
        })
        .unwrap_err();

        assert!(matches!(
            err,
            GeneratorError::UnresolvedType { name, context } if name == "Ghost" && context == "field Broken.ghost"
        ));
    }

    fn scalar_field(name: &str, type_ref: &str) -> FieldDefinition {
        FieldDefinition {
            name: name.to_string(),
            description: None,
            type_ref: type_ref.parse().unwrap(),
            arguments: vec![],
            is_deprecated: false,
            deprecation_reason: None,
        }
    }

    #[test]
    fn digit_leading_field_is_a_valid_ident() {
        let artifact = with_sample_context(|ctx| {
            let image = TypeDefinition {
                name: "Image".to_string(),
                description: None,
                fields: vec![scalar_field("_2x", "String"), scalar_field("_1080P", "String")],
                interfaces: vec![],
            };
            generate_value_type(ctx, &image)
        })
        .unwrap();

        assert!(artifact.contents.contains("pub _2x: Option<String>,"));
        assert!(artifact.contents.contains("#[serde(rename = \"_1080P\")]"));
        assert!(artifact.contents.contains("pub _1080_p: Option<String>,"));
    }

    #[test]
    fn fields_folding_to_one_ident_are_rejected() {
        let err = with_sample_context(|ctx| {
            let account = TypeDefinition {
                name: "Account".to_string(),
                description: None,
                fields: vec![scalar_field("userId", "ID!"), scalar_field("user_id", "ID!")],
                interfaces: vec![],
            };
            generate_value_type(ctx, &account)
        })
        .unwrap_err();

        assert!(matches!(
            err,
            GeneratorError::NamingCollision { ref group, ref name }
                if group == "type/AccountDTO" && name == "user_id"
        ));
    }
}
