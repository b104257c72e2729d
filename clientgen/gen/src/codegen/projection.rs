//! Projection (field-selection builder) generation.
//!
//! A projection records which fields of a type a query selects. Leaf fields
//! are recorded by name, in call order and without duplicates. Composite
//! fields take a closure that configures the projection of the field's type:
//!
//! ```ignore
//! let projection = UserProjection::default()
//!     .id()
//!     .name()
//!     .posts(|posts| posts.id().title());
//!
//! assert_eq!(Selection::render(&projection), "id name posts { id title }");
//! ```
//!
//! Interface and union projections always select `__typename` first and
//! offer `on_<member>` selectors that render as inline fragments.
//!
//! Projections reference each other by name only, so a cycle such as
//! `User.posts -> Post.author -> User` is just two builders pointing at each
//! other through boxed optional fields.

use clientgen_schema::{FieldDefinition, TypeKind};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use tracing::debug;

use super::docs::doc_attrs_with;
use super::{Artifact, ArtifactGroup, GenerationContext, Generator, MemberNames};
use crate::errors::GeneratorError;
use crate::idents::{field_ident, field_name, type_ident};

/// Storage field holding the selected leaf names.
const LEAVES_FIELD: &str = "leaves";

/// Generates one projection per non-root object, interface and union.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionGenerator;

impl Generator for ProjectionGenerator {
    fn name(&self) -> &'static str {
        "projection"
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<Artifact>, GeneratorError> {
        let mut artifacts = Vec::new();

        for object in ctx.model.data_objects() {
            artifacts.push(generate_projection(
                ctx,
                ProjectionSource {
                    name: &object.name,
                    description: object.description.as_deref(),
                    fields: &object.fields,
                    fragments: &[],
                    abstract_type: false,
                },
            )?);
        }

        for interface in ctx.model.interfaces.values() {
            artifacts.push(generate_projection(
                ctx,
                ProjectionSource {
                    name: &interface.name,
                    description: interface.description.as_deref(),
                    fields: &interface.fields,
                    fragments: &interface.possible_types,
                    abstract_type: true,
                },
            )?);
        }

        for union in ctx.model.unions.values() {
            artifacts.push(generate_projection(
                ctx,
                ProjectionSource {
                    name: &union.name,
                    description: union.description.as_deref(),
                    fields: &[],
                    fragments: &union.members,
                    abstract_type: true,
                },
            )?);
        }

        debug!(count = artifacts.len(), "Generated projections.");
        Ok(artifacts)
    }
}

/// The schema type a projection is generated for.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionSource<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub fields: &'a [FieldDefinition],
    /// Concrete types selectable through inline fragments.
    pub fragments: &'a [String],
    /// Whether `__typename` is always selected.
    pub abstract_type: bool,
}

/// A selector method and the storage and rendering that back it.
enum Selector {
    Leaf {
        method: Ident,
        wire: String,
    },
    Nested {
        method: Ident,
        storage: Ident,
        projection: TokenStream,
        /// Text in front of the braces: `posts` or `... on User`.
        label: String,
        doc: String,
    },
}

/// Generates the projection for one object, interface or union.
pub fn generate_projection(
    ctx: &GenerationContext<'_>,
    source: ProjectionSource<'_>,
) -> Result<Artifact, GeneratorError> {
    let name = ctx.naming.projection(source.name);
    let ident = type_ident(&name);
    let selection = ctx.support("Selection");
    let leaves = format_ident!("{}", LEAVES_FIELD);

    let mut selectors = Vec::new();
    for field in source.fields {
        if let Some(selector) = field_selector(ctx, source.name, field)? {
            selectors.push(selector);
        }
    }
    for member in source.fragments {
        selectors.push(fragment_selector(ctx, source.name, member)?);
    }

    let owner = format!("{}/{name}", ArtifactGroup::Projection);
    let mut method_names = MemberNames::new(owner.clone());
    let mut storage_names = MemberNames::new(owner);
    storage_names.claim(&leaves)?;

    let mut storage_fields = Vec::new();
    let mut methods = Vec::new();
    let mut renders = Vec::new();

    for selector in &selectors {
        match selector {
            Selector::Leaf { method, wire } => {
                method_names.claim(method)?;
                let doc = format!(" Selects `{wire}`.");
                methods.push(quote! {
                    #[doc = #doc]
                    pub fn #method(mut self) -> Self {
                        if !self.#leaves.contains(&#wire) {
                            self.#leaves.push(#wire);
                        }
                        self
                    }
                });
            }
            Selector::Nested {
                method,
                storage,
                projection,
                label,
                doc,
            } => {
                method_names.claim(method)?;
                storage_names.claim(storage)?;
                storage_fields.push(quote! { #storage: Option<Box<#projection>>, });
                methods.push(quote! {
                    #[doc = #doc]
                    pub fn #method(mut self, configure: impl FnOnce(#projection) -> #projection) -> Self {
                        self.#storage = Some(Box::new(configure(<#projection as Default>::default())));
                        self
                    }
                });
                let template = format!("{label} {{{{ {{}} }}}}");
                renders.push(quote! {
                    if let Some(sub) = &self.#storage {
                        parts.push(format!(#template, #selection::render(sub.as_ref())));
                    }
                });
            }
        }
    }

    let initial_parts = if source.abstract_type {
        quote! {
            let mut parts = vec!["__typename".to_string()];
            parts.extend(self.#leaves.iter().map(|leaf| leaf.to_string()));
        }
    } else {
        quote! {
            let mut parts: Vec<String> = self.#leaves.iter().map(|leaf| leaf.to_string()).collect();
        }
    };

    let docs = doc_attrs_with(
        source.description,
        &format!("Field selection for `{}`.", source.name),
    );
    let support = ctx.support_import();

    let tokens = quote! {
        #support

        #docs
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct #ident {
            #leaves: Vec<&'static str>,
            #(#storage_fields)*
        }

        impl #ident {
            #(#methods)*
        }

        impl #selection for #ident {
            fn render(&self) -> String {
                #initial_parts
                #(#renders)*
                parts.join(" ")
            }
        }
    };

    Artifact::from_tokens(ArtifactGroup::Projection, name, &tokens)
}

fn field_selector(
    ctx: &GenerationContext<'_>,
    owner: &str,
    field: &FieldDefinition,
) -> Result<Option<Selector>, GeneratorError> {
    let context = format!("field {owner}.{}", field.name);
    // Resolving surfaces dangling references even for fields we skip below.
    ctx.mapper.resolve(&field.type_ref, &context)?;

    if field.arguments.iter().any(|arg| arg.is_required()) {
        debug!(
            field = %context,
            "Skipping field with required arguments in projection."
        );
        return Ok(None);
    }

    let base = field.type_ref.base_name();
    let composite = ctx
        .model
        .kind_of(base)
        .is_some_and(TypeKind::is_composite);

    if !composite {
        return Ok(Some(Selector::Leaf {
            method: field_ident(&field.name),
            wire: field.name.clone(),
        }));
    }

    if ctx.model.is_root_type(base) {
        debug!(field = %context, "Skipping field returning a root type in projection.");
        return Ok(None);
    }

    let projection = ctx
        .mapper
        .group_path(ArtifactGroup::Projection, &ctx.naming.projection(base));

    Ok(Some(Selector::Nested {
        method: field_ident(&field.name),
        storage: storage_ident(&field.name),
        projection,
        label: field.name.clone(),
        doc: format!(" Selects `{}` with the sub-selection built by `configure`.", field.name),
    }))
}

fn fragment_selector(
    ctx: &GenerationContext<'_>,
    owner: &str,
    member: &str,
) -> Result<Selector, GeneratorError> {
    if !ctx.model.objects.contains_key(member) {
        return Err(GeneratorError::unresolved(member, format!("member of {owner}")));
    }

    let projection = ctx
        .mapper
        .group_path(ArtifactGroup::Projection, &ctx.naming.projection(member));
    let method = format_ident!("on_{}", field_name(member));

    Ok(Selector::Nested {
        storage: method.clone(),
        method,
        projection,
        label: format!("... on {member}"),
        doc: format!(" Selects fields of `{member}` through an inline fragment."),
    })
}

/// Storage for a nested selection; only the leaves vector name is reserved.
fn storage_ident(field: &str) -> Ident {
    let name = field_name(field);
    if name == LEAVES_FIELD {
        format_ident!("{}_field", name)
    } else {
        field_ident(field)
    }
}
