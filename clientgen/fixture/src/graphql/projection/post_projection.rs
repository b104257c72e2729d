// This code was automatically generated by clientgen. Do not edit manually.

use crate::graphql::support;
/// Field selection for `Post`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostProjection {
    leaves: Vec<&'static str>,
    author: Option<Box<crate::graphql::projection::UserProjection>>,
}
impl PostProjection {
    /// Selects `id`.
    pub fn id(mut self) -> Self {
        if !self.leaves.contains(&"id") {
            self.leaves.push("id");
        }
        self
    }
    /// Selects `title`.
    pub fn title(mut self) -> Self {
        if !self.leaves.contains(&"title") {
            self.leaves.push("title");
        }
        self
    }
    /// Selects `author` with the sub-selection built by `configure`.
    pub fn author(
        mut self,
        configure: impl FnOnce(
            crate::graphql::projection::UserProjection,
        ) -> crate::graphql::projection::UserProjection,
    ) -> Self {
        self.author = Some(
            Box::new(
                configure(
                    <crate::graphql::projection::UserProjection as Default>::default(),
                ),
            ),
        );
        self
    }
    /// Selects `legacyId`.
    pub fn legacy_id(mut self) -> Self {
        if !self.leaves.contains(&"legacyId") {
            self.leaves.push("legacyId");
        }
        self
    }
}
impl support::Selection for PostProjection {
    fn render(&self) -> String {
        let mut parts: Vec<String> = self
            .leaves
            .iter()
            .map(|leaf| leaf.to_string())
            .collect();
        if let Some(sub) = &self.author {
            parts
                .push(
                    format!("author {{ {} }}", support::Selection::render(sub.as_ref())),
                );
        }
        parts.join(" ")
    }
}
