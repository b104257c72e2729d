// This code was automatically generated by clientgen. Do not edit manually.

//! Generated `enumeration` artifacts.
pub mod role;
pub use role::*;
