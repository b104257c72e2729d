// This code was automatically generated by clientgen. Do not edit manually.

//! Generated `input` artifacts.
pub mod create_user_input;
pub use create_user_input::*;
