// This code was automatically generated by clientgen. Do not edit manually.

use crate::graphql::support;
/// An object with a global identifier.
///
/// Field selection for `Node`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeProjection {
    leaves: Vec<&'static str>,
    on_post: Option<Box<crate::graphql::projection::PostProjection>>,
    on_user: Option<Box<crate::graphql::projection::UserProjection>>,
}
impl NodeProjection {
    /// Selects `id`.
    pub fn id(mut self) -> Self {
        if !self.leaves.contains(&"id") {
            self.leaves.push("id");
        }
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
}
impl support::Selection for NodeProjection {
    fn render(&self) -> String {
        let mut parts = vec!["__typename".to_string()];
        parts.extend(self.leaves.iter().map(|leaf| leaf.to_string()));
        if let Some(sub) = &self.on_post {
            parts
                .push(
                    format!(
                        "... on Post {{ {} }}", support::Selection::render(sub.as_ref())
                    ),
                );
        }
        if let Some(sub) = &self.on_user {
            parts
                .push(
                    format!(
                        "... on User {{ {} }}", support::Selection::render(sub.as_ref())
                    ),
                );
        }
        parts.join(" ")
    }
}
