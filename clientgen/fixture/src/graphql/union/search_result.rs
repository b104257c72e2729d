// This code was automatically generated by clientgen. Do not edit manually.

use serde::{Deserialize, Serialize};
/// Anything a search can return.
///
/// Generated from the `SearchResult` union.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum SearchResult {
    #[serde(rename = "User")]
    User(crate::graphql::r#type::UserDTO),
    #[serde(rename = "Post")]
    Post(crate::graphql::r#type::PostDTO),
}
impl SearchResult {
    /// The `__typename` of the wrapped value.
    pub fn typename(&self) -> &'static str {
        match *self {
            Self::User(_) => "User",
            Self::Post(_) => "Post",
        }
    }
}
