// This code was automatically generated by clientgen. Do not edit manually.

use serde::{Deserialize, Serialize};
/// An object with a global identifier.
///
/// Generated from the `Node` interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Node {
    #[serde(rename = "Post")]
    Post(crate::graphql::r#type::PostDTO),
    #[serde(rename = "User")]
    User(crate::graphql::r#type::UserDTO),
}
impl Node {
    /// The `__typename` of the wrapped value.
    pub fn typename(&self) -> &'static str {
        match *self {
            Self::Post(_) => "Post",
            Self::User(_) => "User",
        }
    }
}
