// This code was automatically generated by clientgen. Do not edit manually.

use crate::graphql::support;
/// Sends `query Search($term: String!) { search(term: $term) { … } }`.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub term: String,
    /// Fields selected from the response.
    pub projection: crate::graphql::projection::SearchResultProjection,
}
impl SearchQuery {
    pub const OPERATION_HEADER: &'static str = "query Search($term: String!)";
    pub const FIELD_CALL: &'static str = "search(term: $term)";
    /// Starts building the operation.
    pub fn builder() -> SearchQueryBuilder {
        <SearchQueryBuilder as Default>::default()
    }
}
/// Builder for [`SearchQuery`].
#[derive(Debug, Clone, Default)]
pub struct SearchQueryBuilder {
    term: Option<String>,
    projection: Option<crate::graphql::projection::SearchResultProjection>,
}
impl SearchQueryBuilder {
    pub fn term(mut self, value: impl Into<String>) -> Self {
        self.term = Some(value.into());
        self
    }
    /// Chooses the fields the response selects.
    pub fn projection(
        mut self,
        configure: impl FnOnce(
            crate::graphql::projection::SearchResultProjection,
        ) -> crate::graphql::projection::SearchResultProjection,
    ) -> Self {
        self.projection = Some(
            configure(
                <crate::graphql::projection::SearchResultProjection as Default>::default(),
            ),
        );
        self
    }
    /// Finishes the operation, failing on the first unset required value.
    pub fn build(self) -> Result<SearchQuery, support::BuildError> {
        Ok(SearchQuery {
            term: self.term.ok_or(support::BuildError::missing("SearchQuery", "term"))?,
            projection: self
                .projection
                .ok_or(support::BuildError::missing("SearchQuery", "projection"))?,
        })
    }
}
impl support::GraphQLOperation for SearchQuery {
    type Response = Vec<crate::graphql::union::SearchResult>;
    const OPERATION_NAME: &'static str = "Search";
    const FIELD_NAME: &'static str = "search";
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
            let value = serde_json::to_value(&self.term)?;
            if !value.is_null() {
                variables.insert("term".to_string(), value);
            }
        }
        Ok(variables)
    }
}
