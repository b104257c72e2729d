// This code was automatically generated by clientgen. Do not edit manually.

//! Generated `projection` artifacts.
pub mod post_projection;
pub mod user_projection;
pub mod node_projection;
pub mod search_result_projection;
pub use post_projection::*;
pub use user_projection::*;
pub use node_projection::*;
pub use search_result_projection::*;
