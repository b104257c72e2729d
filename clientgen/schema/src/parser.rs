//! Builds a [`SchemaModel`] from a GraphQL introspection result.
//!
//! The parser accepts the `__schema` section either at the document root or
//! one level under the `data` result wrapper. Each type entry is dispatched
//! on its `kind` tag through [`CLASSIFIERS`]; kinds with no classifier are
//! skipped so that documents from newer servers still parse.
//!
//! The parser performs no cross-reference validation. A field referencing an
//! undeclared type parses fine and fails later, when the generator tries to
//! resolve it.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::definitions::{
    ArgumentDefinition, EnumDefinition, EnumValueDefinition, FieldDefinition,
    InputTypeDefinition, InterfaceDefinition, ScalarDefinition, TypeDefinition, UnionDefinition,
};
use crate::errors::SchemaParseError;
use crate::model::{BUILT_IN_SCALARS, SchemaModel};
use crate::type_ref::TypeReference;

/// Key holding the schema section.
const SCHEMA_KEY: &str = "__schema";

/// Generic result wrapper key the schema section may be nested under.
const WRAPPER_KEY: &str = "data";

/// Prefix reserved for introspection types (`__Type`, `__Field`, ...).
const INTROSPECTION_PREFIX: &str = "__";

/// Turns one raw type entry into a definition inside the model.
type Classifier = fn(&RawType, &str, &mut SchemaModel) -> Result<(), SchemaParseError>;

/// Kind tag → classifier.
///
/// Any kind not listed here (including future additions to the introspection
/// format) is skipped silently.
const CLASSIFIERS: &[(&str, Classifier)] = &[
    ("OBJECT", classify_object),
    ("INTERFACE", classify_interface),
    ("INPUT_OBJECT", classify_input),
    ("ENUM", classify_enum),
    ("UNION", classify_union),
    ("SCALAR", classify_scalar),
];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    query_type: Option<RawName>,
    mutation_type: Option<RawName>,
    subscription_type: Option<RawName>,
    types: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RawName {
    name: Option<String>,
}

/// The part of a type entry read before dispatch.
#[derive(Debug, Deserialize)]
struct RawHeader {
    kind: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawType {
    kind: Option<String>,
    name: Option<String>,
    description: Option<String>,
    fields: Option<Vec<RawField>>,
    input_fields: Option<Vec<RawInputValue>>,
    interfaces: Option<Vec<RawTypeRef>>,
    enum_values: Option<Vec<RawEnumValue>>,
    possible_types: Option<Vec<RawTypeRef>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    name: Option<String>,
    description: Option<String>,
    args: Option<Vec<RawInputValue>>,
    #[serde(rename = "type")]
    type_ref: Option<RawTypeRef>,
    is_deprecated: Option<bool>,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInputValue {
    name: Option<String>,
    description: Option<String>,
    #[serde(rename = "type")]
    type_ref: Option<RawTypeRef>,
    default_value: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnumValue {
    name: Option<String>,
    description: Option<String>,
    is_deprecated: Option<bool>,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeRef {
    kind: Option<String>,
    name: Option<String>,
    of_type: Option<Box<RawTypeRef>>,
}

/// Parses an introspection document from its JSON source text.
///
/// ## Errors
///
/// - [`SchemaParseError::InvalidJson`] if `source` is not JSON
/// - any error from [`parse_document`]
pub fn parse_schema(source: &str) -> Result<SchemaModel, SchemaParseError> {
    let document: Value = serde_json::from_str(source).map_err(SchemaParseError::InvalidJson)?;
    parse_document(&document)
}

/// Parses an already-decoded introspection document.
///
/// ## Examples
///
/// ```
/// use clientgen_schema::{parse_document, SchemaParseError};
/// use serde_json::json;
///
/// let err = parse_document(&json!({ "data": {} })).unwrap_err();
/// assert!(matches!(err, SchemaParseError::MissingField { ref field, .. } if field == "__schema"));
/// ```
///
/// ## Errors
///
/// - [`SchemaParseError::MissingField`] when the schema section, `queryType.name`,
///   `types`, or a type/field/argument `name`, `kind` or `type` is absent
/// - [`SchemaParseError::Malformed`] when a section has the wrong JSON shape
/// - [`SchemaParseError::DoubleNonNull`] for `NON_NULL` wrapping `NON_NULL`
/// - [`SchemaParseError::DuplicateType`] when a type name is declared twice
pub fn parse_document(document: &Value) -> Result<SchemaModel, SchemaParseError> {
    let section = locate_schema_section(document).ok_or_else(|| {
        SchemaParseError::missing(SCHEMA_KEY, format!("document root or '{WRAPPER_KEY}' wrapper"))
    })?;

    let raw = RawSchema::deserialize(section).map_err(|source| SchemaParseError::Malformed {
        context: "schema section".to_string(),
        source,
    })?;

    let query_type_name = raw
        .query_type
        .and_then(|q| q.name)
        .ok_or_else(|| SchemaParseError::missing("queryType.name", "schema section"))?;

    let mut model = SchemaModel::new(query_type_name);
    model.mutation_type_name = raw.mutation_type.and_then(|m| m.name);
    model.subscription_type_name = raw.subscription_type.and_then(|s| s.name);

    let entries = raw
        .types
        .ok_or_else(|| SchemaParseError::missing("types", "schema section"))?;

    for (index, entry) in entries.iter().enumerate() {
        classify(entry, index, &mut model)?;
    }

    debug!(
        types = model.type_count(),
        query = %model.query_type_name,
        "Parsed schema document."
    );

    Ok(model)
}

fn locate_schema_section(document: &Value) -> Option<&Value> {
    document.get(SCHEMA_KEY).or_else(|| {
        document
            .get(WRAPPER_KEY)
            .and_then(|wrapper| wrapper.get(SCHEMA_KEY))
    })
}

fn classify(entry: &Value, index: usize, model: &mut SchemaModel) -> Result<(), SchemaParseError> {
    let malformed = |source| SchemaParseError::Malformed {
        context: format!("type entry #{index}"),
        source,
    };

    // Only the tag is read up front; the rest of the entry may have a shape
    // this parser does not know.
    let header = RawHeader::deserialize(entry).map_err(malformed)?;
    let name = header
        .name
        .as_deref()
        .ok_or_else(|| SchemaParseError::missing("name", format!("type entry #{index}")))?;
    let kind = header
        .kind
        .as_deref()
        .ok_or_else(|| SchemaParseError::missing("kind", format!("type {name}")))?;

    if name.starts_with(INTROSPECTION_PREFIX) || BUILT_IN_SCALARS.contains(&name) {
        return Ok(());
    }

    match CLASSIFIERS.iter().find(|(tag, _)| *tag == kind) {
        Some((_, classifier)) => {
            let raw = RawType::deserialize(entry).map_err(malformed)?;
            classifier(&raw, name, model)
        }
        None => {
            debug!(kind, name, "Skipping type with unrecognized kind.");
            Ok(())
        }
    }
}

fn classify_object(raw: &RawType, name: &str, model: &mut SchemaModel) -> Result<(), SchemaParseError> {
    model.insert_object(TypeDefinition {
        name: name.to_string(),
        description: raw.description.clone(),
        fields: parse_fields(raw.fields.as_deref(), name)?,
        interfaces: parse_names(raw.interfaces.as_deref(), &format!("interface of {name}"))?,
    })
}

fn classify_interface(
    raw: &RawType,
    name: &str,
    model: &mut SchemaModel,
) -> Result<(), SchemaParseError> {
    model.insert_interface(InterfaceDefinition {
        name: name.to_string(),
        description: raw.description.clone(),
        fields: parse_fields(raw.fields.as_deref(), name)?,
        interfaces: parse_names(raw.interfaces.as_deref(), &format!("interface of {name}"))?,
        possible_types: parse_names(
            raw.possible_types.as_deref(),
            &format!("possible type of {name}"),
        )?,
    })
}

fn classify_input(raw: &RawType, name: &str, model: &mut SchemaModel) -> Result<(), SchemaParseError> {
    let fields = raw
        .input_fields
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|value| parse_input_value(value, "input field", name, None))
        .collect::<Result<Vec<_>, _>>()?;

    model.insert_input(InputTypeDefinition {
        name: name.to_string(),
        description: raw.description.clone(),
        fields,
    })
}

fn classify_enum(raw: &RawType, name: &str, model: &mut SchemaModel) -> Result<(), SchemaParseError> {
    let values = raw
        .enum_values
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|value| -> Result<EnumValueDefinition, SchemaParseError> {
            let value_name = value
                .name
                .clone()
                .ok_or_else(|| SchemaParseError::missing("name", format!("enum value in {name}")))?;
            Ok(EnumValueDefinition {
                name: value_name,
                description: value.description.clone(),
                is_deprecated: value.is_deprecated.unwrap_or(false),
                deprecation_reason: value.deprecation_reason.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    model.insert_enum(EnumDefinition {
        name: name.to_string(),
        description: raw.description.clone(),
        values,
    })
}

fn classify_union(raw: &RawType, name: &str, model: &mut SchemaModel) -> Result<(), SchemaParseError> {
    model.insert_union(UnionDefinition {
        name: name.to_string(),
        description: raw.description.clone(),
        members: parse_names(raw.possible_types.as_deref(), &format!("member of {name}"))?,
    })
}

fn classify_scalar(raw: &RawType, name: &str, model: &mut SchemaModel) -> Result<(), SchemaParseError> {
    model.insert_scalar(ScalarDefinition {
        name: name.to_string(),
        description: raw.description.clone(),
    })
}

fn parse_fields(
    fields: Option<&[RawField]>,
    owner: &str,
) -> Result<Vec<FieldDefinition>, SchemaParseError> {
    fields
        .unwrap_or_default()
        .iter()
        .map(|field| -> Result<FieldDefinition, SchemaParseError> {
            let name = field
                .name
                .clone()
                .ok_or_else(|| SchemaParseError::missing("name", format!("field in {owner}")))?;
            let context = format!("field in {owner}.{name}");
            let type_ref = field
                .type_ref
                .as_ref()
                .ok_or_else(|| SchemaParseError::missing("type", context.clone()))?;
            let type_ref = parse_type_ref(type_ref, &context)?;
            let arguments = field
                .args
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|arg| parse_input_value(arg, "argument", owner, Some(&name)))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(FieldDefinition {
                name,
                description: field.description.clone(),
                type_ref,
                arguments,
                is_deprecated: field.is_deprecated.unwrap_or(false),
                deprecation_reason: field.deprecation_reason.clone(),
            })
        })
        .collect()
}

/// Parses an argument (when `field` is set) or an input-object field.
fn parse_input_value(
    value: &RawInputValue,
    what: &str,
    owner: &str,
    field: Option<&str>,
) -> Result<ArgumentDefinition, SchemaParseError> {
    let location = match field {
        Some(field) => format!("{owner}.{field}"),
        None => owner.to_string(),
    };
    let name = value
        .name
        .clone()
        .ok_or_else(|| SchemaParseError::missing("name", format!("{what} in {location}")))?;
    let context = match field {
        Some(_) => format!("{what} in {location}({name})"),
        None => format!("{what} in {location}.{name}"),
    };
    let type_ref = value
        .type_ref
        .as_ref()
        .ok_or_else(|| SchemaParseError::missing("type", context.clone()))?;

    Ok(ArgumentDefinition {
        type_ref: parse_type_ref(type_ref, &context)?,
        name,
        description: value.description.clone(),
        default_value: value.default_value.clone(),
    })
}

/// Extracts the names from a list of named references (interfaces,
/// possible types, union members).
fn parse_names(refs: Option<&[RawTypeRef]>, context: &str) -> Result<Vec<String>, SchemaParseError> {
    refs.unwrap_or_default()
        .iter()
        .map(|r| {
            r.name
                .clone()
                .ok_or_else(|| SchemaParseError::missing("name", context))
        })
        .collect()
}

fn parse_type_ref(raw: &RawTypeRef, context: &str) -> Result<TypeReference, SchemaParseError> {
    let kind = raw
        .kind
        .as_deref()
        .ok_or_else(|| SchemaParseError::missing("kind", context))?;

    match kind {
        "NON_NULL" => {
            let inner = parse_wrapped(raw, context)?;
            if inner.is_non_null() {
                return Err(SchemaParseError::DoubleNonNull {
                    context: context.to_string(),
                });
            }
            Ok(inner.non_null())
        }
        "LIST" => Ok(TypeReference::list(parse_wrapped(raw, context)?)),
        _ => raw
            .name
            .as_deref()
            .map(TypeReference::named)
            .ok_or_else(|| SchemaParseError::missing("name", context)),
    }
}

fn parse_wrapped(raw: &RawTypeRef, context: &str) -> Result<TypeReference, SchemaParseError> {
    let inner = raw
        .of_type
        .as_deref()
        .ok_or_else(|| SchemaParseError::missing("ofType", context))?;
    parse_type_ref(inner, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeKind;
    use serde_json::json;

    fn named(kind: &str, name: &str) -> Value {
        json!({ "kind": kind, "name": name, "ofType": null })
    }

    fn non_null(inner: Value) -> Value {
        json!({ "kind": "NON_NULL", "name": null, "ofType": inner })
    }

    fn list(inner: Value) -> Value {
        json!({ "kind": "LIST", "name": null, "ofType": inner })
    }

    fn field(name: &str, type_ref: Value) -> Value {
        json!({ "name": name, "args": [], "type": type_ref, "isDeprecated": false })
    }

    fn document(types: Vec<Value>) -> Value {
        json!({
            "__schema": {
                "queryType": { "name": "Query" },
                "mutationType": { "name": "Mutation" },
                "subscriptionType": null,
                "types": types
            }
        })
    }

    fn user_type() -> Value {
        json!({
            "kind": "OBJECT",
            "name": "User",
            "description": "A registered user",
            "fields": [
                field("id", non_null(named("SCALAR", "ID"))),
                field("name", non_null(named("SCALAR", "String"))),
                field("email", named("SCALAR", "String")),
                field("posts", non_null(list(non_null(named("OBJECT", "Post"))))),
            ],
            "interfaces": [named("INTERFACE", "Node")]
        })
    }

    #[test]
    fn parses_objects_with_nested_references() {
        let model = parse_document(&document(vec![user_type()])).unwrap();

        assert_eq!(model.query_type_name, "Query");
        assert_eq!(model.mutation_type_name.as_deref(), Some("Mutation"));
        assert_eq!(model.subscription_type_name, None);

        let user = &model.objects["User"];
        assert_eq!(user.description.as_deref(), Some("A registered user"));
        assert_eq!(user.interfaces, vec!["Node"]);
        let wire: Vec<_> = user.fields.iter().map(|f| f.type_ref.to_wire_string()).collect();
        assert_eq!(wire, vec!["ID!", "String!", "String", "[Post!]!"]);
    }

    #[test]
    fn accepts_schema_under_data_wrapper() {
        let wrapped = json!({ "data": document(vec![user_type()]) });
        let model = parse_document(&wrapped).unwrap();
        assert!(model.objects.contains_key("User"));
    }

    #[test]
    fn missing_schema_section_names_the_field() {
        let err = parse_document(&json!({ "data": { "other": 1 } })).unwrap_err();
        match err {
            SchemaParseError::MissingField { field, .. } => assert_eq!(field, "__schema"),
            other => panic!("unexpected error: {other}"),
        }
        let err = parse_schema("{}").unwrap_err();
        assert!(err.to_string().contains("__schema"));
    }

    #[test]
    fn missing_query_type_name_fails() {
        let doc = json!({ "__schema": { "queryType": {}, "types": [] } });
        let err = parse_document(&doc).unwrap_err();
        assert!(matches!(err, SchemaParseError::MissingField { ref field, .. } if field == "queryType.name"));
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(
            parse_schema("{ not json"),
            Err(SchemaParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn malformed_entry_carries_index() {
        let doc = document(vec![json!({ "kind": "OBJECT", "name": "User", "fields": "nope" })]);
        let err = parse_document(&doc).unwrap_err();
        assert!(matches!(err, SchemaParseError::Malformed { ref context, .. } if context == "type entry #0"));
    }

    #[test]
    fn missing_kind_and_name_fail_with_context() {
        let err = parse_document(&document(vec![json!({ "name": "User" })])).unwrap_err();
        assert!(matches!(
            err,
            SchemaParseError::MissingField { ref field, ref context } if field == "kind" && context == "type User"
        ));

        let err = parse_document(&document(vec![json!({ "kind": "OBJECT" })])).unwrap_err();
        assert!(matches!(err, SchemaParseError::MissingField { ref field, .. } if field == "name"));
    }

    #[test]
    fn missing_field_type_reports_field_path() {
        let doc = document(vec![json!({
            "kind": "OBJECT",
            "name": "User",
            "fields": [ { "name": "posts", "args": [] } ]
        })]);
        let err = parse_document(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required field 'type' (field in User.posts)"
        );
    }

    #[test]
    fn named_reference_without_name_fails() {
        let doc = document(vec![json!({
            "kind": "OBJECT",
            "name": "Query",
            "fields": [ {
                "name": "user",
                "args": [ { "name": "id", "type": { "kind": "SCALAR" } } ],
                "type": named("OBJECT", "User")
            } ]
        })]);
        let err = parse_document(&doc).unwrap_err();
        assert!(matches!(
            err,
            SchemaParseError::MissingField { ref context, .. } if context == "argument in Query.user(id)"
        ));
    }

    #[test]
    fn double_non_null_is_rejected() {
        let doc = document(vec![json!({
            "kind": "OBJECT",
            "name": "User",
            "fields": [ field("id", non_null(non_null(named("SCALAR", "ID")))) ]
        })]);
        assert!(matches!(
            parse_document(&doc),
            Err(SchemaParseError::DoubleNonNull { .. })
        ));
    }

    #[test]
    fn drops_introspection_types_and_built_in_scalars() {
        let doc = document(vec![
            json!({ "kind": "OBJECT", "name": "__Type", "fields": [] }),
            json!({ "kind": "SCALAR", "name": "String" }),
            json!({ "kind": "SCALAR", "name": "DateTime", "description": "ISO-8601" }),
        ]);
        let model = parse_document(&doc).unwrap();
        assert!(model.objects.is_empty());
        assert_eq!(model.scalars.len(), 1);
        assert_eq!(model.kind_of("DateTime"), Some(TypeKind::Scalar));
    }

    #[test]
    #[tracing_test::traced_test]
    fn skips_unrecognized_kinds() {
        let doc = document(vec![
            json!({ "kind": "INPUT_UNION", "name": "Future" }),
            user_type(),
        ]);
        let model = parse_document(&doc).unwrap();
        assert_eq!(model.kind_of("Future"), None);
        assert_eq!(model.type_count(), 1);
        assert!(logs_contain("Skipping type with unrecognized kind"));
    }

    #[test]
    fn unrecognized_kinds_may_use_unknown_shapes() {
        let doc = document(vec![
            json!({
                "kind": "DIRECTIVE_SET",
                "name": "Future",
                "fields": "not a list",
                "interfaces": { "shape": "different" }
            }),
            user_type(),
        ]);
        let model = parse_document(&doc).unwrap();
        assert_eq!(model.kind_of("Future"), None);
        assert_eq!(model.kind_of("User"), Some(TypeKind::Object));
    }

    #[test]
    fn classifies_every_kind() {
        let doc = document(vec![
            user_type(),
            json!({
                "kind": "INTERFACE",
                "name": "Node",
                "fields": [ field("id", non_null(named("SCALAR", "ID"))) ],
                "possibleTypes": [ named("OBJECT", "User") ]
            }),
            json!({
                "kind": "INPUT_OBJECT",
                "name": "CreateUserInput",
                "inputFields": [
                    { "name": "name", "type": non_null(named("SCALAR", "String")), "defaultValue": null },
                    { "name": "role", "type": non_null(named("ENUM", "Role")), "defaultValue": "MEMBER" }
                ]
            }),
            json!({
                "kind": "ENUM",
                "name": "Role",
                "enumValues": [
                    { "name": "ADMIN", "isDeprecated": false },
                    { "name": "MEMBER", "isDeprecated": true, "deprecationReason": "Use USER" }
                ]
            }),
            json!({
                "kind": "UNION",
                "name": "SearchResult",
                "possibleTypes": [ named("OBJECT", "User"), named("OBJECT", "Post") ]
            }),
        ]);
        let model = parse_document(&doc).unwrap();

        assert_eq!(model.interfaces["Node"].possible_types, vec!["User"]);
        let input = &model.inputs["CreateUserInput"];
        assert!(input.fields[0].is_required());
        assert!(!input.fields[1].is_required());
        assert_eq!(input.fields[1].default_value.as_deref(), Some("MEMBER"));

        let role = &model.enums["Role"];
        assert!(role.values[1].is_deprecated);
        assert_eq!(role.values[1].deprecation_reason.as_deref(), Some("Use USER"));

        assert_eq!(model.unions["SearchResult"].members, vec!["User", "Post"]);
    }

    #[test]
    fn duplicate_declarations_fail() {
        let doc = document(vec![user_type(), user_type()]);
        assert!(matches!(
            parse_document(&doc),
            Err(SchemaParseError::DuplicateType { .. })
        ));
    }
}
