// This code was automatically generated by clientgen. Do not edit manually.

use crate::graphql::support;
/// Sends `mutation DeleteUser($id: ID!) { deleteUser(id: $id) }`.
#[derive(Debug, Clone)]
pub struct DeleteUserMutation {
    pub id: String,
}
impl DeleteUserMutation {
    pub const OPERATION_HEADER: &'static str = "mutation DeleteUser($id: ID!)";
    pub const FIELD_CALL: &'static str = "deleteUser(id: $id)";
    /// Starts building the operation.
    pub fn builder() -> DeleteUserMutationBuilder {
        <DeleteUserMutationBuilder as Default>::default()
    }
}
/// Builder for [`DeleteUserMutation`].
#[derive(Debug, Clone, Default)]
pub struct DeleteUserMutationBuilder {
    id: Option<String>,
}
impl DeleteUserMutationBuilder {
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }
    /// Finishes the operation, failing on the first unset required value.
    pub fn build(self) -> Result<DeleteUserMutation, support::BuildError> {
        Ok(DeleteUserMutation {
            id: self.id.ok_or(support::BuildError::missing("DeleteUserMutation", "id"))?,
        })
    }
}
impl support::GraphQLOperation for DeleteUserMutation {
    type Response = bool;
    const OPERATION_NAME: &'static str = "DeleteUser";
    const FIELD_NAME: &'static str = "deleteUser";
    fn operation(&self) -> String {
        support::render_operation(Self::OPERATION_HEADER, Self::FIELD_CALL, None)
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
