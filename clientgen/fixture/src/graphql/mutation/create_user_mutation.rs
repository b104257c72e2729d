// This code was automatically generated by clientgen. Do not edit manually.

use crate::graphql::support;
/// Sends `mutation CreateUser($input: CreateUserInput!) { createUser(input: $input) { … } }`.
#[derive(Debug, Clone)]
pub struct CreateUserMutation {
    pub input: crate::graphql::input::CreateUserInput,
    /// Fields selected from the response.
    pub projection: crate::graphql::projection::UserProjection,
}
impl CreateUserMutation {
    pub const OPERATION_HEADER: &'static str = "mutation CreateUser($input: CreateUserInput!)";
    pub const FIELD_CALL: &'static str = "createUser(input: $input)";
    /// Starts building the operation.
    pub fn builder() -> CreateUserMutationBuilder {
        <CreateUserMutationBuilder as Default>::default()
    }
}
/// Builder for [`CreateUserMutation`].
#[derive(Debug, Clone, Default)]
pub struct CreateUserMutationBuilder {
    input: Option<crate::graphql::input::CreateUserInput>,
    projection: Option<crate::graphql::projection::UserProjection>,
}
impl CreateUserMutationBuilder {
    pub fn input(
        mut self,
        value: impl Into<crate::graphql::input::CreateUserInput>,
    ) -> Self {
        self.input = Some(value.into());
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
    pub fn build(self) -> Result<CreateUserMutation, support::BuildError> {
        Ok(CreateUserMutation {
            input: self
                .input
                .ok_or(support::BuildError::missing("CreateUserMutation", "input"))?,
            projection: self
                .projection
                .ok_or(support::BuildError::missing("CreateUserMutation", "projection"))?,
        })
    }
}
impl support::GraphQLOperation for CreateUserMutation {
    type Response = Option<crate::graphql::r#type::UserDTO>;
    const OPERATION_NAME: &'static str = "CreateUser";
    const FIELD_NAME: &'static str = "createUser";
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
            let value = serde_json::to_value(&self.input)?;
            if !value.is_null() {
                variables.insert("input".to_string(), value);
            }
        }
        Ok(variables)
    }
}
