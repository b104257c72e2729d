//! Generator configuration.
//!
//! [`GeneratorConfig`] is the raw surface: what a TOML file or the command line
//! provides. [`GeneratorConfig::validate`] turns it into [`GeneratorSettings`],
//! the checked form every later phase works with.
//!
//! ## File Format
//!
//! ```toml
//! schema_path = "schema.json"
//! output_dir = "src/graphql"
//! namespace = "crate::graphql"
//! skip_if_unchanged = true
//!
//! [custom_scalars]
//! DateTime = "chrono::DateTime<chrono::Utc>"
//!
//! [naming]
//! object = "DTO"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::{Ident, Span, TokenStream};
use quote::{ToTokens, quote};
use serde::Deserialize;
use tracing::debug;

use crate::errors::GeneratorError;
use crate::naming::NamingSuffixes;

/// Default file name looked up by the CLI when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "clientgen.toml";

/// Raw generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Introspection JSON document to read.
    pub schema_path: PathBuf,
    /// Directory the generated module tree is written to.
    pub output_dir: PathBuf,
    /// Rust path at which `output_dir` is mounted, e.g. `crate::graphql`.
    pub namespace: String,
    /// Custom scalar name to Rust type path.
    pub custom_scalars: BTreeMap<String, String>,
    pub naming: NamingSuffixes,
    /// Skip generation when the schema is unchanged since the last run.
    pub skip_if_unchanged: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::new(),
            output_dir: PathBuf::new(),
            namespace: String::new(),
            custom_scalars: BTreeMap::new(),
            naming: NamingSuffixes::default(),
            skip_if_unchanged: true,
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from TOML text.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::Config`] for malformed TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, GeneratorError> {
        toml::from_str(source).map_err(|e| GeneratorError::Config(e.to_string()))
    }

    /// Loads a configuration file.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::Read`] when the file cannot be read and
    /// [`GeneratorError::Config`] when it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        debug!(path = %path.display(), "Loading configuration file.");
        let source = fs::read_to_string(path).map_err(|e| GeneratorError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks every field and produces the settings used by generation.
    ///
    /// Performs no I/O.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::Config`] when:
    /// - the schema path, output directory or namespace is empty
    /// - the namespace is not a Rust path
    /// - a custom scalar target is not a Rust type
    /// - a naming suffix contains anything but letters and digits
    pub fn validate(&self) -> Result<GeneratorSettings, GeneratorError> {
        if self.schema_path.as_os_str().is_empty() {
            return Err(GeneratorError::Config("schema path is required".to_string()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(GeneratorError::Config(
                "output directory is required".to_string(),
            ));
        }

        let namespace = Namespace::parse(&self.namespace)?;

        for (scalar, target) in &self.custom_scalars {
            if scalar.trim().is_empty() {
                return Err(GeneratorError::Config(
                    "custom scalar names cannot be empty".to_string(),
                ));
            }
            syn::parse_str::<syn::Type>(target).map_err(|e| {
                GeneratorError::Config(format!(
                    "custom scalar '{scalar}' maps to '{target}', which is not a Rust type: {e}"
                ))
            })?;
        }

        self.naming.validate()?;

        Ok(GeneratorSettings {
            namespace,
            custom_scalars: self.custom_scalars.clone(),
            suffixes: self.naming.clone(),
        })
    }
}

/// Validated settings consumed by the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub namespace: Namespace,
    /// Custom scalar overrides; every target is known to parse as a type.
    pub custom_scalars: BTreeMap<String, String>,
    pub suffixes: NamingSuffixes,
}

/// A Rust module path such as `crate::graphql`.
///
/// Stored as plain segments so it can be shared across threads and turned
/// into tokens wherever a generated reference needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    /// Parses and checks a `::`-separated module path.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::Config`] for empty input, a leading `::`, or
    /// anything `syn` does not accept as a path without generics.
    pub fn parse(path: &str) -> Result<Self, GeneratorError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(GeneratorError::Config("namespace is required".to_string()));
        }

        let parsed = syn::parse_str::<syn::Path>(path).map_err(|e| {
            GeneratorError::Config(format!("namespace '{path}' is not a Rust path: {e}"))
        })?;

        if parsed.leading_colon.is_some() {
            return Err(GeneratorError::Config(format!(
                "namespace '{path}' must not start with '::'"
            )));
        }

        let segments = parsed
            .segments
            .iter()
            .map(|segment| {
                if segment.arguments.is_empty() {
                    Ok(segment.ident.to_string())
                } else {
                    Err(GeneratorError::Config(format!(
                        "namespace '{path}' must not contain generic arguments"
                    )))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("::"))
    }
}

impl ToTokens for Namespace {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let segments = self.segments.iter().map(|segment| match segment.strip_prefix("r#") {
            Some(raw) => Ident::new_raw(raw, Span::call_site()),
            None => Ident::new(segment, Span::call_site()),
        });
        tokens.extend(quote! { #(#segments)::* });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> GeneratorConfig {
        GeneratorConfig {
            schema_path: PathBuf::from("schema.json"),
            output_dir: PathBuf::from("out"),
            namespace: "crate::graphql".to_string(),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn parses_toml_with_defaults() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            schema_path = "schema.json"
            output_dir = "src/graphql"
            namespace = "crate::graphql"

            [custom_scalars]
            DateTime = "String"

            [naming]
            object = "Model"
            "#,
        )
        .unwrap();

        assert!(config.skip_if_unchanged);
        assert_eq!(config.custom_scalars["DateTime"], "String");
        assert_eq!(config.naming.object, "Model");
        assert_eq!(config.naming.input, "Input");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = GeneratorConfig::from_toml_str("schema = \"x.json\"").unwrap_err();
        assert!(matches!(err, GeneratorError::Config(_)));
    }

    #[test]
    fn validate_requires_paths_and_namespace() {
        let mut config = minimal();
        config.schema_path = PathBuf::new();
        assert!(matches!(config.validate(), Err(GeneratorError::Config(msg)) if msg.contains("schema path")));

        let mut config = minimal();
        config.output_dir = PathBuf::new();
        assert!(matches!(config.validate(), Err(GeneratorError::Config(msg)) if msg.contains("output")));

        let mut config = minimal();
        config.namespace = "  ".to_string();
        assert!(matches!(config.validate(), Err(GeneratorError::Config(msg)) if msg.contains("namespace")));
    }

    #[test]
    fn validate_rejects_bad_namespace_and_scalars() {
        let mut config = minimal();
        config.namespace = "crate::graph ql".to_string();
        assert!(config.validate().is_err());

        let mut config = minimal();
        config.namespace = "::graphql".to_string();
        assert!(config.validate().is_err());

        let mut config = minimal();
        config
            .custom_scalars
            .insert("DateTime".to_string(), "not a type!".to_string());
        assert!(matches!(config.validate(), Err(GeneratorError::Config(msg)) if msg.contains("DateTime")));
    }

    #[test]
    fn namespace_renders_as_path_tokens() {
        let settings = minimal().validate().unwrap();
        assert_eq!(settings.namespace.segments(), ["crate", "graphql"]);
        assert_eq!(settings.namespace.to_string(), "crate::graphql");

        let tokens = settings.namespace.to_token_stream().to_string();
        assert_eq!(tokens, "crate :: graphql");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, GeneratorError::Read { .. }));
    }
}
