//! Shared test fixtures for clientgen tests.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clientgen_schema::{SchemaModel, parse_schema};

use crate::config::{GeneratorConfig, GeneratorSettings};
use crate::naming::SuffixNaming;

/// Introspection document covering every kind: two roots, an interface, a
/// union, an enum with a deprecated value, a recursive input and two custom
/// scalars.
pub const SAMPLE_SCHEMA: &str = include_str!("../tests/fixtures/schema.json");

/// Parses [`SAMPLE_SCHEMA`].
pub fn sample_model() -> SchemaModel {
    parse_schema(SAMPLE_SCHEMA).expect("sample schema parses")
}

/// Validated settings mounting the output at `crate::graphql`.
pub fn sample_settings() -> GeneratorSettings {
    sample_config(PathBuf::from("schema.json"), PathBuf::from("out"))
        .validate()
        .expect("sample config validates")
}

/// A configuration with `DateTime` mapped to `String`.
pub fn sample_config(schema_path: PathBuf, output_dir: PathBuf) -> GeneratorConfig {
    let mut custom_scalars = BTreeMap::new();
    custom_scalars.insert("DateTime".to_string(), "String".to_string());

    GeneratorConfig {
        schema_path,
        output_dir,
        namespace: "crate::graphql".to_string(),
        custom_scalars,
        ..GeneratorConfig::default()
    }
}

/// Runs `f` with a [`GenerationContext`](crate::codegen::GenerationContext)
/// over the sample schema.
pub fn with_sample_context<T>(f: impl FnOnce(&crate::codegen::GenerationContext<'_>) -> T) -> T {
    let model = sample_model();
    let settings = sample_settings();
    let naming = SuffixNaming::new(settings.suffixes.clone());
    let ctx = crate::codegen::GenerationContext::new(&model, &settings, &naming);
    f(&ctx)
}
