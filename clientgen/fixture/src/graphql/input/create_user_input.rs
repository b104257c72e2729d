// This code was automatically generated by clientgen. Do not edit manually.

use serde::{Deserialize, Serialize};
use crate::graphql::support;
/// Generated from the `CreateUserInput` input type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Defaults to `MEMBER` on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<crate::graphql::enumeration::Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<Box<crate::graphql::input::CreateUserInput>>,
}
impl CreateUserInput {
    /// Starts building a value field by field.
    pub fn builder() -> CreateUserInputBuilder {
        <CreateUserInputBuilder as Default>::default()
    }
}
/// Builder for [`CreateUserInput`].
#[derive(Debug, Clone, Default)]
pub struct CreateUserInputBuilder {
    name: Option<String>,
    email: Option<String>,
    role: Option<crate::graphql::enumeration::Role>,
    manager: Option<Box<crate::graphql::input::CreateUserInput>>,
}
impl CreateUserInputBuilder {
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }
    /// Defaults to `MEMBER` on the server.
    pub fn role(mut self, value: impl Into<crate::graphql::enumeration::Role>) -> Self {
        self.role = Some(value.into());
        self
    }
    pub fn manager(
        mut self,
        value: impl Into<Box<crate::graphql::input::CreateUserInput>>,
    ) -> Self {
        self.manager = Some(value.into());
        self
    }
    /// Finishes the value, failing on the first unset required field.
    pub fn build(self) -> Result<CreateUserInput, support::BuildError> {
        Ok(CreateUserInput {
            name: self
                .name
                .ok_or(support::BuildError::missing("CreateUserInput", "name"))?,
            email: self.email,
            role: self.role,
            manager: self.manager,
        })
    }
}
