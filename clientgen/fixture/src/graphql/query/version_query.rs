// This code was automatically generated by clientgen. Do not edit manually.

use crate::graphql::support;
/// Sends `query Version { version }`.
#[derive(Debug, Clone)]
pub struct VersionQuery {}
impl VersionQuery {
    pub const OPERATION_HEADER: &'static str = "query Version";
    pub const FIELD_CALL: &'static str = "version";
    /// Starts building the operation.
    pub fn builder() -> VersionQueryBuilder {
        <VersionQueryBuilder as Default>::default()
    }
}
/// Builder for [`VersionQuery`].
#[derive(Debug, Clone, Default)]
pub struct VersionQueryBuilder {}
impl VersionQueryBuilder {
    /// Finishes the operation, failing on the first unset required value.
    pub fn build(self) -> Result<VersionQuery, support::BuildError> {
        Ok(VersionQuery {})
    }
}
impl support::GraphQLOperation for VersionQuery {
    type Response = String;
    const OPERATION_NAME: &'static str = "Version";
    const FIELD_NAME: &'static str = "version";
    fn operation(&self) -> String {
        support::render_operation(Self::OPERATION_HEADER, Self::FIELD_CALL, None)
    }
    fn variables(
        &self,
    ) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
        let variables = serde_json::Map::new();
        Ok(variables)
    }
}
