// This code was automatically generated by clientgen. Do not edit manually.

use crate::graphql::support;
/// A registered account.
///
/// Field selection for `User`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProjection {
    leaves: Vec<&'static str>,
    posts: Option<Box<crate::graphql::projection::PostProjection>>,
    best_friend: Option<Box<crate::graphql::projection::UserProjection>>,
}
impl UserProjection {
    /// Selects `id`.
    pub fn id(mut self) -> Self {
        if !self.leaves.contains(&"id") {
            self.leaves.push("id");
        }
        self
    }
    /// Selects `name`.
    pub fn name(mut self) -> Self {
        if !self.leaves.contains(&"name") {
            self.leaves.push("name");
        }
        self
    }
    /// Selects `email`.
    pub fn email(mut self) -> Self {
        if !self.leaves.contains(&"email") {
            self.leaves.push("email");
        }
        self
    }
    /// Selects `role`.
    pub fn role(mut self) -> Self {
        if !self.leaves.contains(&"role") {
            self.leaves.push("role");
        }
        self
    }
    /// Selects `posts` with the sub-selection built by `configure`.
    pub fn posts(
        mut self,
        configure: impl FnOnce(
            crate::graphql::projection::PostProjection,
        ) -> crate::graphql::projection::PostProjection,
    ) -> Self {
        self.posts = Some(
            Box::new(
                configure(
                    <crate::graphql::projection::PostProjection as Default>::default(),
                ),
            ),
        );
        self
    }
    /// Selects `bestFriend` with the sub-selection built by `configure`.
    pub fn best_friend(
        mut self,
        configure: impl FnOnce(
            crate::graphql::projection::UserProjection,
        ) -> crate::graphql::projection::UserProjection,
    ) -> Self {
        self.best_friend = Some(
            Box::new(
                configure(
                    <crate::graphql::projection::UserProjection as Default>::default(),
                ),
            ),
        );
        self
    }
    /// Selects `createdAt`.
    pub fn created_at(mut self) -> Self {
        if !self.leaves.contains(&"createdAt") {
            self.leaves.push("createdAt");
        }
        self
    }
    /// Selects `profile`.
    pub fn profile(mut self) -> Self {
        if !self.leaves.contains(&"profile") {
            self.leaves.push("profile");
        }
        self
    }
}
impl support::Selection for UserProjection {
    fn render(&self) -> String {
        let mut parts: Vec<String> = self
            .leaves
            .iter()
            .map(|leaf| leaf.to_string())
            .collect();
        if let Some(sub) = &self.posts {
            parts
                .push(
                    format!("posts {{ {} }}", support::Selection::render(sub.as_ref())),
                );
        }
        if let Some(sub) = &self.best_friend {
            parts
                .push(
                    format!(
                        "bestFriend {{ {} }}", support::Selection::render(sub.as_ref())
                    ),
                );
        }
        parts.join(" ")
    }
}
