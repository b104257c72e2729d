// This code was automatically generated by clientgen. Do not edit manually.

//! Generated `mutation` artifacts.
pub mod create_user_mutation;
pub mod delete_user_mutation;
pub use create_user_mutation::*;
pub use delete_user_mutation::*;
