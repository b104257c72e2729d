// This code was automatically generated by clientgen. Do not edit manually.

//! Generated `query` artifacts.
pub mod user_query;
pub mod users_query;
pub mod search_query;
pub mod node_query;
pub mod version_query;
pub use user_query::*;
pub use users_query::*;
pub use search_query::*;
pub use node_query::*;
pub use version_query::*;
