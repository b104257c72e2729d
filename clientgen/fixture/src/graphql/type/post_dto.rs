// This code was automatically generated by clientgen. Do not edit manually.

use serde::{Deserialize, Serialize};
/// Generated from the `Post` object type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDTO {
    pub id: String,
    pub title: String,
    pub author: Box<crate::graphql::r#type::UserDTO>,
    #[deprecated(note = "Use id instead.")]
    #[serde(rename = "legacyId")]
    pub legacy_id: Option<i32>,
}
impl From<PostDTO> for crate::graphql::r#type::Node {
    fn from(value: PostDTO) -> Self {
        Self::Post(value)
    }
}
impl From<PostDTO> for crate::graphql::union::SearchResult {
    fn from(value: PostDTO) -> Self {
        Self::Post(value)
    }
}
