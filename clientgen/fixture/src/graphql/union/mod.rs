// This code was automatically generated by clientgen. Do not edit manually.

//! Generated `union` artifacts.
pub mod search_result;
pub use search_result::*;
