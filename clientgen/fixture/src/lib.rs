//! The client clientgen generates for `clientgen/gen/tests/fixtures/schema.json`.
//!
//! `build.rs` writes `src/graphql` before this crate compiles, so the tests
//! under `tests/` run the generated code rather than inspect its text.

pub mod graphql;
