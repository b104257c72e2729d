// This code was automatically generated by clientgen. Do not edit manually.

use crate::graphql::support;
/// Anything a search can return.
///
/// Field selection for `SearchResult`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResultProjection {
    leaves: Vec<&'static str>,
    on_user: Option<Box<crate::graphql::projection::UserProjection>>,
    on_post: Option<Box<crate::graphql::projection::PostProjection>>,
}
impl SearchResultProjection {
    /// Selects fields of `User` through an inline fragment.
    pub fn on_user(
        mut self,
        configure: impl FnOnce(
            crate::graphql::projection::UserProjection,
        ) -> crate::graphql::projection::UserProjection,
    ) -> Self {
        self.on_user = Some(
            Box::new(
                configure(
                    <crate::graphql::projection::UserProjection as Default>::default(),
                ),
            ),
        );
        self
    }
    /// Selects fields of `Post` through an inline fragment.
    pub fn on_post(
        mut self,
        configure: impl FnOnce(
            crate::graphql::projection::PostProjection,
        ) -> crate::graphql::projection::PostProjection,
    ) -> Self {
        self.on_post = Some(
            Box::new(
                configure(
                    <crate::graphql::projection::PostProjection as Default>::default(),
                ),
            ),
        );
        self
    }
}
impl support::Selection for SearchResultProjection {
    fn render(&self) -> String {
        let mut parts = vec!["__typename".to_string()];
        parts.extend(self.leaves.iter().map(|leaf| leaf.to_string()));
        if let Some(sub) = &self.on_user {
            parts
                .push(
                    format!(
                        "... on User {{ {} }}", support::Selection::render(sub.as_ref())
                    ),
                );
        }
        if let Some(sub) = &self.on_post {
            parts
                .push(
                    format!(
                        "... on Post {{ {} }}", support::Selection::render(sub.as_ref())
                    ),
                );
        }
        parts.join(" ")
    }
}
