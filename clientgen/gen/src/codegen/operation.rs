//! Operation wrapper generation shared by the query and mutation generators.
//!
//! For a root field `createUser(input: CreateUserInput!): User` on the
//! mutation type this produces `CreateUserMutation`: a struct holding every
//! argument plus the projection of `User`, a builder enforcing the required
//! ones, and an implementation of the generated `GraphQLOperation` trait that
//! renders
//!
//! ```text
//! mutation CreateUser($input: CreateUserInput!) { createUser(input: $input) { id name } }
//! ```

use clientgen_schema::{ArgumentDefinition, FieldDefinition, TypeDefinition, TypeKind};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use strum::Display;

use super::docs::{deprecated_attr, doc_attrs, doc_attrs_with};
use super::{Artifact, ArtifactGroup, GenerationContext, MemberNames};
use crate::errors::GeneratorError;
use crate::idents::{field_ident, field_name, type_ident};
use crate::naming::{NamingConvention, capitalize};
use crate::type_mapper::Boxing;

/// Argument names that would clash with builder members.
const RESERVED_ARGUMENTS: &[&str] = &["build", "projection"];

/// The root operation type a wrapper belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    pub fn group(self) -> ArtifactGroup {
        match self {
            Self::Query => ArtifactGroup::Query,
            Self::Mutation => ArtifactGroup::Mutation,
        }
    }

    /// Generated wrapper name for a root field.
    pub fn wrapper_name(self, naming: &dyn NamingConvention, field_name: &str) -> String {
        match self {
            Self::Query => naming.query_operation(field_name),
            Self::Mutation => naming.mutation_operation(field_name),
        }
    }
}

/// The static parts of an operation document.
///
/// Renders exactly what the generated `operation()` method renders through
/// `support::render_operation`.
///
/// ## Examples
///
/// ```
/// use clientgen::codegen::{OperationKind, OperationTemplate};
/// use clientgen_schema::{ArgumentDefinition, FieldDefinition};
///
/// let field = FieldDefinition {
///     name: "createUser".to_string(),
///     description: None,
///     type_ref: "User".parse().unwrap(),
///     arguments: vec![ArgumentDefinition {
///         name: "input".to_string(),
///         description: None,
///         type_ref: "CreateUserInput!".parse().unwrap(),
///         default_value: None,
///     }],
///     is_deprecated: false,
///     deprecation_reason: None,
/// };
///
/// let template = OperationTemplate::new(OperationKind::Mutation, &field);
/// assert_eq!(
///     template.render(Some("id name")),
///     "mutation CreateUser($input: CreateUserInput!) { createUser(input: $input) { id name } }"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationTemplate {
    /// `mutation CreateUser($input: CreateUserInput!)`
    pub header: String,
    /// `createUser(input: $input)`
    pub field_call: String,
}

impl OperationTemplate {
    pub fn new(kind: OperationKind, field: &FieldDefinition) -> Self {
        let operation_name = capitalize(&field.name);

        let header = if field.arguments.is_empty() {
            format!("{kind} {operation_name}")
        } else {
            let variables: Vec<String> = field.arguments.iter().map(variable_definition).collect();
            format!("{kind} {operation_name}({})", variables.join(", "))
        };

        let field_call = if field.arguments.is_empty() {
            field.name.clone()
        } else {
            let arguments: Vec<String> = field
                .arguments
                .iter()
                .map(|arg| format!("{0}: ${0}", arg.name))
                .collect();
            format!("{}({})", field.name, arguments.join(", "))
        };

        Self { header, field_call }
    }

    /// Renders the full document; an empty selection is omitted.
    pub fn render(&self, selection: Option<&str>) -> String {
        match selection.filter(|selection| !selection.is_empty()) {
            Some(selection) => format!("{} {{ {} {{ {} }} }}", self.header, self.field_call, selection),
            None => format!("{} {{ {} }}", self.header, self.field_call),
        }
    }
}

/// `$name: Type`, with the schema default appended when there is one.
fn variable_definition(arg: &ArgumentDefinition) -> String {
    match &arg.default_value {
        Some(default) => format!("${}: {} = {}", arg.name, arg.type_ref, default),
        None => format!("${}: {}", arg.name, arg.type_ref),
    }
}

/// A resolved operation argument.
struct OperationArgument {
    ident: Ident,
    wire: String,
    required: bool,
    value_ty: TokenStream,
    docs: TokenStream,
}

/// Generates every operation wrapper for the fields of `root`.
pub fn generate_operations(
    ctx: &GenerationContext<'_>,
    kind: OperationKind,
    root: &TypeDefinition,
) -> Result<Vec<Artifact>, GeneratorError> {
    root.fields
        .iter()
        .filter(|field| !field.name.starts_with("__"))
        .map(|field| generate_operation(ctx, kind, &root.name, field))
        .collect()
}

/// Generates the wrapper for a single root field.
pub fn generate_operation(
    ctx: &GenerationContext<'_>,
    kind: OperationKind,
    root: &str,
    field: &FieldDefinition,
) -> Result<Artifact, GeneratorError> {
    let name = kind.wrapper_name(ctx.naming, &field.name);
    let ident = type_ident(&name);
    let builder_ident = format_ident!("{}Builder", ident);
    let template = OperationTemplate::new(kind, field);

    let context = format!("field {root}.{}", field.name);
    let response = ctx.mapper.resolve(&field.type_ref, &context)?;
    let response_ty = ctx.mapper.render(&response, Boxing::None)?;

    let base = field.type_ref.base_name();
    let projection = ctx
        .model
        .kind_of(base)
        .is_some_and(TypeKind::is_composite)
        .then(|| {
            ctx.mapper
                .group_path(ArtifactGroup::Projection, &ctx.naming.projection(base))
        });

    let arguments = field
        .arguments
        .iter()
        .map(|arg| operation_argument(ctx, root, &field.name, arg))
        .collect::<Result<Vec<_>, _>>()?;

    // Builder setters share these names, alongside `build` and `projection`.
    let mut members = MemberNames::new(format!("{}/{name}", kind.group()));
    for reserved in RESERVED_ARGUMENTS {
        members.claim(&format_ident!("{}", reserved))?;
    }
    for argument in &arguments {
        members.claim(&argument.ident)?;
    }

    let build_error = ctx.support("BuildError");
    let selection = ctx.support("Selection");
    let operation_trait = ctx.support("GraphQLOperation");
    let render_operation = ctx.support("render_operation");
    let type_name = name.as_str();

    let mut struct_fields = Vec::new();
    let mut builder_fields = Vec::new();
    let mut setters = Vec::new();
    let mut assignments = Vec::new();
    let mut variables = Vec::new();

    for OperationArgument {
        ident,
        wire,
        required,
        value_ty,
        docs,
    } in &arguments
    {
        if *required {
            struct_fields.push(quote! { #docs pub #ident: #value_ty, });
            assignments.push(quote! { #ident: self.#ident.ok_or(#build_error::missing(#type_name, #wire))?, });
        } else {
            struct_fields.push(quote! { #docs pub #ident: Option<#value_ty>, });
            assignments.push(quote! { #ident: self.#ident, });
        }
        builder_fields.push(quote! { #ident: Option<#value_ty>, });
        setters.push(quote! {
            #docs
            pub fn #ident(mut self, value: impl Into<#value_ty>) -> Self {
                self.#ident = Some(value.into());
                self
            }
        });
        variables.push(quote! {
            {
                let value = serde_json::to_value(&self.#ident)?;
                if !value.is_null() {
                    variables.insert(#wire.to_string(), value);
                }
            }
        });
    }

    let rendered_selection = match &projection {
        Some(projection) => {
            struct_fields.push(quote! {
                /// Fields selected from the response.
                pub projection: #projection,
            });
            builder_fields.push(quote! { projection: Option<#projection>, });
            setters.push(quote! {
                /// Chooses the fields the response selects.
                pub fn projection(mut self, configure: impl FnOnce(#projection) -> #projection) -> Self {
                    self.projection = Some(configure(<#projection as Default>::default()));
                    self
                }
            });
            assignments.push(quote! {
                projection: self.projection.ok_or(#build_error::missing(#type_name, "projection"))?,
            });
            quote! { Some(#selection::render(&self.projection).as_str()) }
        }
        None => quote! { None },
    };

    let variables_binding = if variables.is_empty() {
        quote! { let variables = serde_json::Map::new(); }
    } else {
        quote! { let mut variables = serde_json::Map::new(); }
    };

    let header = template.header.as_str();
    let field_call = template.field_call.as_str();
    let operation_name = capitalize(&field.name);
    let field_wire = field.name.as_str();
    let shape = template.render(projection.as_ref().map(|_| "…"));
    let docs = doc_attrs_with(field.description.as_deref(), &format!("Sends `{shape}`."));
    let deprecated = deprecated_attr(field.is_deprecated, field.deprecation_reason.as_deref());
    let builder_doc = format!(" Builder for [`{name}`].");
    let support = ctx.support_import();

    let tokens = quote! {
        #support

        #docs
        #deprecated
        #[derive(Debug, Clone)]
        pub struct #ident {
            #(#struct_fields)*
        }

        impl #ident {
            pub const OPERATION_HEADER: &'static str = #header;
            pub const FIELD_CALL: &'static str = #field_call;

            /// Starts building the operation.
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

            /// Finishes the operation, failing on the first unset required value.
            pub fn build(self) -> Result<#ident, #build_error> {
                Ok(#ident {
                    #(#assignments)*
                })
            }
        }

        impl #operation_trait for #ident {
            type Response = #response_ty;

            const OPERATION_NAME: &'static str = #operation_name;
            const FIELD_NAME: &'static str = #field_wire;

            fn operation(&self) -> String {
                #render_operation(Self::OPERATION_HEADER, Self::FIELD_CALL, #rendered_selection)
            }

            fn variables(&self) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
                #variables_binding
                #(#variables)*
                Ok(variables)
            }
        }
    };

    Artifact::from_tokens(kind.group(), name, &tokens)
}

fn operation_argument(
    ctx: &GenerationContext<'_>,
    root: &str,
    field: &str,
    arg: &ArgumentDefinition,
) -> Result<OperationArgument, GeneratorError> {
    let context = format!("argument {root}.{field}({})", arg.name);
    let resolved = ctx.mapper.resolve(&arg.type_ref, &context)?;
    let value_ty = ctx.mapper.render(&resolved.non_null(), Boxing::None)?;

    let snake = field_name(&arg.name);
    let ident = if RESERVED_ARGUMENTS.contains(&snake.as_str()) {
        format_ident!("{}_arg", snake)
    } else {
        field_ident(&arg.name)
    };

    Ok(OperationArgument {
        ident,
        wire: arg.name.clone(),
        required: arg.is_required(),
        value_ty,
        docs: doc_attrs(arg.description.as_deref()),
    })
}
