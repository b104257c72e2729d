//! Generates `src/graphql` from the generator's sample schema.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clientgen::GeneratorConfig;

fn main() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let schema_path = manifest_dir.join("../gen/tests/fixtures/schema.json");

    println!("cargo:rerun-if-changed={}", schema_path.display());
    println!("cargo:rerun-if-changed=build.rs");

    let mut custom_scalars = BTreeMap::new();
    custom_scalars.insert("DateTime".to_string(), "String".to_string());

    let config = GeneratorConfig {
        schema_path,
        output_dir: manifest_dir.join("src/graphql"),
        namespace: "crate::graphql".to_string(),
        custom_scalars,
        skip_if_unchanged: false,
        ..GeneratorConfig::default()
    };

    if let Err(e) = clientgen::run(&config) {
        panic!("failed to generate the fixture client: {e}");
    }
}
