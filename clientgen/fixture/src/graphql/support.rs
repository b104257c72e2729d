// This code was automatically generated by clientgen. Do not edit manually.

//! Support types shared by the generated client.
use std::fmt;
/// A builder was finished without one of its required values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildError {
    type_name: &'static str,
    field: &'static str,
}
impl BuildError {
    pub fn missing(type_name: &'static str, field: &'static str) -> Self {
        Self { type_name, field }
    }
    /// The type whose builder failed.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
    /// Wire name of the missing field or argument.
    pub fn field(&self) -> &'static str {
        self.field
    }
}
impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: missing required field '{}'", self.type_name, self.field)
    }
}
impl std::error::Error for BuildError {}
/// A field selection rendered as the body of a selection set.
pub trait Selection {
    /// Renders the selected fields without the surrounding braces.
    fn render(&self) -> String;
}
/// A generated query or mutation wrapper.
pub trait GraphQLOperation {
    /// The decoded value of the root field.
    type Response: serde::de::DeserializeOwned;
    const OPERATION_NAME: &'static str;
    const FIELD_NAME: &'static str;
    /// The operation document.
    fn operation(&self) -> String;
    /// Variables for every argument that has a non-null value.
    fn variables(
        &self,
    ) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error>;
    /// The JSON request body: query, variables and operation name.
    fn request_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut body = serde_json::Map::new();
        body.insert("query".to_string(), serde_json::Value::String(self.operation()));
        body.insert(
            "variables".to_string(),
            serde_json::Value::Object(self.variables()?),
        );
        body.insert(
            "operationName".to_string(),
            serde_json::Value::String(Self::OPERATION_NAME.to_string()),
        );
        Ok(serde_json::Value::Object(body))
    }
    /// Decodes this operation's field out of a response `data` object.
    fn parse_response(
        data: &serde_json::Value,
    ) -> Result<Self::Response, serde_json::Error> {
        let field = data
            .get(Self::FIELD_NAME)
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        serde_json::from_value(field)
    }
}
/// Joins an operation header, root field call and selection into a document.
pub fn render_operation(
    header: &str,
    field_call: &str,
    selection: Option<&str>,
) -> String {
    match selection.filter(|selection| !selection.is_empty()) {
        Some(selection) => format!("{header} {{ {field_call} {{ {selection} }} }}"),
        None => format!("{header} {{ {field_call} }}"),
    }
}
