// This code was automatically generated by clientgen. Do not edit manually.

use crate::graphql::support;
/// Looks up a single user.
///
/// Sends `query User($id: ID!) { user(id: $id) { … } }`.
#[derive(Debug, Clone)]
pub struct UserQuery {
    pub id: String,
    /// Fields selected from the response.
    pub projection: crate::graphql::projection::UserProjection,
}
impl UserQuery {
    pub const OPERATION_HEADER: &'static str = "query User($id: ID!)";
    pub const FIELD_CALL: &'static str = "user(id: $id)";
    /// Starts building the operation.
    pub fn builder() -> UserQueryBuilder {
        <UserQueryBuilder as Default>::default()
    }
}
/// Builder for [`UserQuery`].
#[derive(Debug, Clone, Default)]
pub struct UserQueryBuilder {
    id: Option<String>,
    projection: Option<crate::graphql::projection::UserProjection>,
}
impl UserQueryBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }
    /// Chooses the fields the response selects.
    pub fn projection(
        mut self,
        configure: impl FnOnce(
            crate::graphql::projection::UserProjection,
        ) -> crate::graphql::projection::UserProjection,
    ) -> Self {
        self.projection = Some(
            configure(<crate::graphql::projection::UserProjection as Default>::default()),
        );
        self
    }
    /// Finishes the operation, failing on the first unset required value.
    pub fn build(self) -> Result<UserQuery, support::BuildError> {
        Ok(UserQuery {
            id: self.id.ok_or(support::BuildError::missing("UserQuery", "id"))?,
            projection: self
                .projection
                .ok_or(support::BuildError::missing("UserQuery", "projection"))?,
        })
    }
}
impl support::GraphQLOperation for UserQuery {
    type Response = Option<crate::graphql::r#type::UserDTO>;
    const OPERATION_NAME: &'static str = "User";
    const FIELD_NAME: &'static str = "user";
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
