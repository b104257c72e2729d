// This code was automatically generated by clientgen. Do not edit manually.

//! Generated `type` artifacts.
pub mod post_dto;
pub mod user_dto;
pub mod node;
pub use post_dto::*;
pub use user_dto::*;
pub use node::*;
