// This code was automatically generated by clientgen. Do not edit manually.

//! GraphQL client types generated by clientgen.
//!
//! Mount this directory at the namespace it was generated for.
#![allow(deprecated)]
pub mod support;
pub mod r#type;
pub mod input;
pub mod enumeration;
pub mod query;
pub mod mutation;
pub mod projection;
pub mod union;
