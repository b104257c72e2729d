// This code was automatically generated by clientgen. Do not edit manually.

use serde::{Deserialize, Serialize};
/// A registered account.
///
/// Generated from the `User` object type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDTO {
    pub id: String,
    pub name: String,
    /// Primary contact address.
    pub email: Option<String>,
    pub role: crate::graphql::enumeration::Role,
    pub posts: Vec<crate::graphql::r#type::PostDTO>,
    #[serde(rename = "bestFriend")]
    pub best_friend: Option<Box<crate::graphql::r#type::UserDTO>>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    pub profile: Option<serde_json::Value>,
}
impl From<UserDTO> for crate::graphql::r#type::Node {
    fn from(value: UserDTO) -> Self {
        Self::User(value)
    }
}
impl From<UserDTO> for crate::graphql::union::SearchResult {
    fn from(value: UserDTO) -> Self {
        Self::User(value)
    }
}
