//! Closed enum generation for unions.
//!
//! A union `SearchResult = User | Post` becomes
//!
//! ```ignore
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! #[serde(tag = "__typename")]
//! pub enum SearchResult {
//!     User(crate::graphql::r#type::UserDTO),
//!     Post(crate::graphql::r#type::PostDTO),
//! }
//! ```
//!
//! The variant set is exactly the declared member list. Interfaces use the
//! same shape over their possible types (see [`value_type`](super::value_type)).

use clientgen_schema::UnionDefinition;
use proc_macro2::TokenStream;
use quote::quote;
use tracing::debug;

use super::docs::doc_attrs_with;
use super::{Artifact, ArtifactGroup, GenerationContext, Generator, MemberNames};
use crate::errors::GeneratorError;
use crate::idents::type_ident;

/// Generates one closed enum per union.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnionGenerator;

impl Generator for UnionGenerator {
    fn name(&self) -> &'static str {
        "union"
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<Artifact>, GeneratorError> {
        let artifacts = ctx
            .model
            .unions
            .values()
            .map(|union| generate_union(ctx, union))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = artifacts.len(), "Generated union types.");
        Ok(artifacts)
    }
}

/// Generates the closed enum for a single union.
pub fn generate_union(
    ctx: &GenerationContext<'_>,
    union: &UnionDefinition,
) -> Result<Artifact, GeneratorError> {
    let name = ctx.naming.union(&union.name);
    let docs = doc_attrs_with(
        union.description.as_deref(),
        &format!("Generated from the `{}` union.", union.name),
    );
    let tokens = closed_enum(ctx, &name, &docs, &union.members, &union.name)?;
    Artifact::from_tokens(ArtifactGroup::Union, name, &tokens)
}

/// Builds a `__typename`-tagged enum with one variant per member object type.
///
/// `owner` is the schema name of the union or interface, used in errors.
pub(crate) fn closed_enum(
    ctx: &GenerationContext<'_>,
    name: &str,
    docs: &TokenStream,
    members: &[String],
    owner: &str,
) -> Result<TokenStream, GeneratorError> {
    let ident = type_ident(name);

    let mut variants = Vec::with_capacity(members.len());
    let mut typename_arms = Vec::with_capacity(members.len());
    let mut variant_names = MemberNames::new(name);
    for member in members {
        let target = member_path(ctx, member, owner)?;
        let variant = type_ident(&ctx.naming.member_variant(member));
        variant_names.claim(&variant)?;
        variants.push(quote! {
            #[serde(rename = #member)]
            #variant(#target),
        });
        typename_arms.push(quote! { Self::#variant(_) => #member, });
    }

    let tag = if members.is_empty() {
        TokenStream::new()
    } else {
        quote! { #[serde(tag = "__typename")] }
    };

    Ok(quote! {
        use serde::{Deserialize, Serialize};

        #docs
        #[derive(Debug, Clone, Serialize, Deserialize)]
        #tag
        pub enum #ident {
            #(#variants)*
        }

        impl #ident {
            /// The `__typename` of the wrapped value.
            pub fn typename(&self) -> &'static str {
                match *self {
                    #(#typename_arms)*
                }
            }
        }
    })
}

/// Path to the value type of a member, which must be an object type.
fn member_path(
    ctx: &GenerationContext<'_>,
    member: &str,
    owner: &str,
) -> Result<TokenStream, GeneratorError> {
    if !ctx.model.objects.contains_key(member) {
        return Err(GeneratorError::unresolved(member, format!("member of {owner}")));
    }
    Ok(ctx
        .mapper
        .group_path(ArtifactGroup::Type, &ctx.naming.object_type(member)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::with_sample_context;

    #[test]
    fn variants_are_exactly_the_members() {
        let artifacts = with_sample_context(|ctx| UnionGenerator.generate(ctx)).unwrap();
        assert_eq!(artifacts.len(), 1);

        let search = &artifacts[0];
        assert_eq!(search.name, "SearchResult");
        assert_eq!(search.file_name, "search_result.rs");
        assert!(search.contents.contains("pub enum SearchResult"));
        assert!(search.contents.contains("#[serde(tag = \"__typename\")]"));
        assert!(search.contents.contains("User(crate::graphql::r#type::UserDTO)"));
        assert!(search.contents.contains("Post(crate::graphql::r#type::PostDTO)"));
        assert_eq!(search.contents.matches("#[serde(rename =").count(), 2);
        assert!(search.contents.contains("Anything a search can return."));
    }

    #[test]
    fn non_object_member_is_unresolved() {
        let err = with_sample_context(|ctx| {
            let union = UnionDefinition {
                name: "Broken".to_string(),
                description: None,
                members: vec!["Role".to_string()],
            };
            generate_union(ctx, &union)
        })
        .unwrap_err();

        assert!(matches!(
            err,
            GeneratorError::UnresolvedType { name, context } if name == "Role" && context == "member of Broken"
        ));
    }

    #[test]
    fn empty_union_has_no_tag() {
        let artifact = with_sample_context(|ctx| {
            let union = UnionDefinition {
                name: "Nothing".to_string(),
                description: None,
                members: vec![],
            };
            generate_union(ctx, &union)
        })
        .unwrap();

        assert!(artifact.contents.contains("pub enum Nothing {}"));
        assert!(!artifact.contents.contains("__typename\")]"));
    }

    #[test]
    fn repeated_member_is_a_collision() {
        let err = with_sample_context(|ctx| {
            let union = UnionDefinition {
                name: "Twice".to_string(),
                description: None,
                members: vec!["User".to_string(), "User".to_string()],
            };
            generate_union(ctx, &union)
        })
        .unwrap_err();

        assert!(matches!(
            err,
            GeneratorError::NamingCollision { ref group, ref name } if group == "Twice" && name == "User"
        ));
    }
}
