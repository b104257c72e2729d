// This code was automatically generated by clientgen. Do not edit manually.

use crate::graphql::support;
/// Sends `query Node($id: ID!) { node(id: $id) { … } }`.
#[derive(Debug, Clone)]
pub struct NodeQuery {
    pub id: String,
    /// Fields selected from the response.
    pub projection: crate::graphql::projection::NodeProjection,
}
impl NodeQuery {
    pub const OPERATION_HEADER: &'static str = "query Node($id: ID!)";
    pub const FIELD_CALL: &'static str = "node(id: $id)";
    /// Starts building the operation.
    pub fn builder() -> NodeQueryBuilder {
        <NodeQueryBuilder as Default>::default()
    }
}
/// Builder for [`NodeQuery`].
#[derive(Debug, Clone, Default)]
pub struct NodeQueryBuilder {
    id: Option<String>,
    projection: Option<crate::graphql::projection::NodeProjection>,
}
impl NodeQueryBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }
    /// Chooses the fields the response selects.
    pub fn projection(
        mut self,
        configure: impl FnOnce(
            crate::graphql::projection::NodeProjection,
        ) -> crate::graphql::projection::NodeProjection,
    ) -> Self {
        self.projection = Some(
            configure(<crate::graphql::projection::NodeProjection as Default>::default()),
        );
        self
    }
    /// Finishes the operation, failing on the first unset required value.
    pub fn build(self) -> Result<NodeQuery, support::BuildError> {
        Ok(NodeQuery {
            id: self.id.ok_or(support::BuildError::missing("NodeQuery", "id"))?,
            projection: self
                .projection
                .ok_or(support::BuildError::missing("NodeQuery", "projection"))?,
        })
    }
}
impl support::GraphQLOperation for NodeQuery {
    type Response = Option<crate::graphql::r#type::Node>;
    const OPERATION_NAME: &'static str = "Node";
    const FIELD_NAME: &'static str = "node";
    fn operation(&self) -> String {
        support::render_operation(
            Self::OPERATION_HEADER,
            Self::FIELD_CALL,
            Some(support::Selection::render(&self.projection).as_str()),
        )
    }
    fn variables(
        &self,
    ) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
        let mut variables = serde_json::Map::new();
        {
            let value = serde_json::to_value(&self.id)?;
            if !value.is_null() {
                variables.insert("id".to_string(), value);
            }
        }
        Ok(variables)
    }
}
