// This code was automatically generated by clientgen. Do not edit manually.

use crate::graphql::support;
/// Sends `query Users($first: Int! = 10, $role: Role) { users(first: $first, role: $role) { … } }`.
#[derive(Debug, Clone)]
pub struct UsersQuery {
    pub first: Option<i32>,
    pub role: Option<crate::graphql::enumeration::Role>,
    /// Fields selected from the response.
    pub projection: crate::graphql::projection::UserProjection,
}
impl UsersQuery {
    pub const OPERATION_HEADER: &'static str = "query Users($first: Int! = 10, $role: Role)";
    pub const FIELD_CALL: &'static str = "users(first: $first, role: $role)";
    /// Starts building the operation.
    pub fn builder() -> UsersQueryBuilder {
        <UsersQueryBuilder as Default>::default()
    }
}
/// Builder for [`UsersQuery`].
#[derive(Debug, Clone, Default)]
pub struct UsersQueryBuilder {
    first: Option<i32>,
    role: Option<crate::graphql::enumeration::Role>,
    projection: Option<crate::graphql::projection::UserProjection>,
}
impl UsersQueryBuilder {
    pub fn first(mut self, value: impl Into<i32>) -> Self {
        self.first = Some(value.into());
        self
    }
    pub fn role(mut self, value: impl Into<crate::graphql::enumeration::Role>) -> Self {
        self.role = Some(value.into());
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
    pub fn build(self) -> Result<UsersQuery, support::BuildError> {
        Ok(UsersQuery {
            first: self.first,
            role: self.role,
            projection: self
                .projection
                .ok_or(support::BuildError::missing("UsersQuery", "projection"))?,
        })
    }
}
impl support::GraphQLOperation for UsersQuery {
    type Response = Vec<crate::graphql::r#type::UserDTO>;
    const OPERATION_NAME: &'static str = "Users";
    const FIELD_NAME: &'static str = "users";
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
            let value = serde_json::to_value(&self.first)?;
            if !value.is_null() {
                variables.insert("first".to_string(), value);
            }
        }
        {
            let value = serde_json::to_value(&self.role)?;
            if !value.is_null() {
                variables.insert("role".to_string(), value);
            }
        }
        Ok(variables)
    }
}
