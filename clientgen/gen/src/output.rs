//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: assembling the
//! module tree around the generated artifacts, validating and formatting each
//! file, and writing everything to disk atomically.
//!
//! ## Output Structure
//!
//! ```text
//! <output_dir>/
//! ├── mod.rs            # pub mod for support and every group
//! ├── support.rs        # BuildError, Selection, GraphQLOperation, render_operation
//! ├── type/
//! │   ├── mod.rs        # pub mod + pub use for each artifact
//! │   └── user_dto.rs
//! ├── input/ ... enumeration/ ... query/ ... mutation/ ... projection/ ... union/
//! └── .clientgen-fingerprint
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use quote::quote;
use tracing::debug;

use crate::artifact::{Artifact, ArtifactGroup};
use crate::errors::GeneratorError;
use crate::idents;

/// Notice prepended to every generated file.
const GENERATED_NOTICE: &str =
    "// This code was automatically generated by clientgen. Do not edit manually.";

/// A file ready to be written, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub relative_path: PathBuf,
    pub contents: String,
}

/// Assembles the `support` module shared by all generated code.
///
/// Contains:
/// - `BuildError`, returned by every generated builder
/// - the `Selection` trait implemented by projections
/// - the `GraphQLOperation` trait implemented by query and mutation wrappers
/// - `render_operation`, which joins header, field call and selection
pub fn assemble_support_module() -> TokenStream {
    quote! {
        //! Support types shared by the generated client.

        use std::fmt;

        /// A builder was finished without one of its required values.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct BuildError {
            type_name: &'static str,
            field: &'static str,
        }

        impl BuildError {
            pub fn missing(type_name: &'static str, field: &'static str) -> Self {
                Self { type_name, field }
            }

            /// The type whose builder failed.
            pub fn type_name(&self) -> &'static str {
                self.type_name
            }

            /// Wire name of the missing field or argument.
            pub fn field(&self) -> &'static str {
                self.field
            }
        }

        impl fmt::Display for BuildError {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}: missing required field '{}'", self.type_name, self.field)
            }
        }

        impl std::error::Error for BuildError {}

        /// A field selection rendered as the body of a selection set.
        pub trait Selection {
            /// Renders the selected fields without the surrounding braces.
            fn render(&self) -> String;
        }

        /// A generated query or mutation wrapper.
        pub trait GraphQLOperation {
            /// The decoded value of the root field.
            type Response: serde::de::DeserializeOwned;

            const OPERATION_NAME: &'static str;
            const FIELD_NAME: &'static str;

            /// The operation document.
            fn operation(&self) -> String;

            /// Variables for every argument that has a non-null value.
            fn variables(&self) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error>;

            /// The JSON request body: query, variables and operation name.
            fn request_body(&self) -> Result<serde_json::Value, serde_json::Error> {
                let mut body = serde_json::Map::new();
                body.insert("query".to_string(), serde_json::Value::String(self.operation()));
                body.insert("variables".to_string(), serde_json::Value::Object(self.variables()?));
                body.insert(
                    "operationName".to_string(),
                    serde_json::Value::String(Self::OPERATION_NAME.to_string()),
                );
                Ok(serde_json::Value::Object(body))
            }

            /// Decodes this operation's field out of a response `data` object.
            fn parse_response(data: &serde_json::Value) -> Result<Self::Response, serde_json::Error> {
                let field = data.get(Self::FIELD_NAME).cloned().unwrap_or(serde_json::Value::Null);
                serde_json::from_value(field)
            }
        }

        /// Joins an operation header, root field call and selection into a document.
        pub fn render_operation(header: &str, field_call: &str, selection: Option<&str>) -> String {
            match selection.filter(|selection| !selection.is_empty()) {
                Some(selection) => format!("{header} {{ {field_call} {{ {selection} }} }}"),
                None => format!("{header} {{ {field_call} }}"),
            }
        }
    }
}

/// Assembles the root `mod.rs` declaring `support` and every group.
pub fn assemble_root_module() -> TokenStream {
    let groups = ArtifactGroup::ALL.iter().map(|group| group.module_ident());

    quote! {
        //! GraphQL client types generated by clientgen.
        //!
        //! Mount this directory at the namespace it was generated for.

        #![allow(deprecated)]

        pub mod support;

        #(pub mod #groups;)*
    }
}

/// Assembles a group's `mod.rs`, declaring and re-exporting each artifact.
pub fn assemble_group_module(group: ArtifactGroup, artifacts: &[&Artifact]) -> TokenStream {
    let doc = format!(" Generated `{group}` artifacts.");
    let modules = artifacts
        .iter()
        .map(|artifact| idents::ident(artifact.module_name()));
    let exports = modules.clone();

    quote! {
        #![doc = #doc]

        #(pub mod #modules;)*

        #(pub use #exports::*;)*
    }
}

/// Validates generated code using syn.
///
/// Parses the token stream as a complete Rust file to ensure it's syntactically
/// valid before writing to disk.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGen` if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGen(format!("Generated code is invalid: {}", e)))
}

/// Formats generated code using prettyplease, prepending the generated-code
/// notice as a regular comment.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!("{GENERATED_NOTICE}\n\n{formatted}")
}

fn render(tokens: &TokenStream, relative_path: PathBuf) -> Result<OutputFile, GeneratorError> {
    let file = validate_code(tokens).map_err(|e| match e {
        GeneratorError::CodeGen(msg) => {
            GeneratorError::CodeGen(format!("{}: {msg}", relative_path.display()))
        }
        other => other,
    })?;

    Ok(OutputFile {
        relative_path,
        contents: format_code(&file),
    })
}

/// Assembles every file of the output tree: the root module, `support.rs`,
/// each group's `mod.rs` and the artifacts themselves.
///
/// Artifacts keep the order they are given in within their group.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGen` if an assembled module is invalid.
pub fn assemble_output(artifacts: &[Artifact]) -> Result<Vec<OutputFile>, GeneratorError> {
    let mut files = vec![
        render(&assemble_root_module(), PathBuf::from("mod.rs"))?,
        render(&assemble_support_module(), PathBuf::from("support.rs"))?,
    ];

    for group in ArtifactGroup::ALL {
        let members: Vec<&Artifact> = artifacts.iter().filter(|a| a.group == group).collect();
        let index = assemble_group_module(group, &members);
        files.push(render(&index, Path::new(group.dir_name()).join("mod.rs"))?);

        files.extend(members.into_iter().map(|artifact| OutputFile {
            relative_path: artifact.relative_path(),
            contents: artifact.contents.clone(),
        }));
    }

    Ok(files)
}

/// Writes every file under `output_dir`.
///
/// ## Errors
///
/// Returns `GeneratorError::Write` on the first file that cannot be written.
pub fn write_output(output_dir: &Path, files: &[OutputFile]) -> Result<(), GeneratorError> {
    for file in files {
        write_atomic(&output_dir.join(&file.relative_path), &file.contents)?;
    }
    debug!(files = files.len(), dir = %output_dir.display(), "Wrote output files.");
    Ok(())
}

/// Writes content to a file atomically using temp file + rename.
///
/// This pattern ensures that:
/// - The file is never left in a partially-written state
/// - Other processes see either the old or new content, never a mix
///
/// ## Errors
///
/// Returns `GeneratorError::Write` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::Write {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::Write {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::Write {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn artifact(group: ArtifactGroup, name: &str) -> Artifact {
        let ident = idents::type_ident(name);
        Artifact::from_tokens(group, name, &quote! { pub struct #ident; }).unwrap()
    }

    #[test]
    fn support_module_is_valid_rust() {
        let file = validate_code(&assemble_support_module()).unwrap();
        let code = format_code(&file);
        assert!(code.contains("pub struct BuildError"));
        assert!(code.contains("pub trait Selection"));
        assert!(code.contains("pub trait GraphQLOperation"));
        assert!(code.contains("pub fn render_operation("));
    }

    #[test]
    fn root_module_declares_every_group() {
        let code = format_code(&validate_code(&assemble_root_module()).unwrap());
        assert!(code.contains("#![allow(deprecated)]"));
        assert!(code.contains("pub mod support;"));
        assert!(code.contains("pub mod r#type;"));
        for group in ["input", "enumeration", "query", "mutation", "projection", "union"] {
            assert!(code.contains(&format!("pub mod {group};")), "missing {group}");
        }
    }

    #[test]
    fn group_module_reexports_artifacts() {
        let user = artifact(ArtifactGroup::Type, "UserDTO");
        let post = artifact(ArtifactGroup::Type, "PostDTO");
        let code = format_code(
            &validate_code(&assemble_group_module(ArtifactGroup::Type, &[&post, &user])).unwrap(),
        );

        assert!(code.contains("//! Generated `type` artifacts."));
        assert!(code.contains("pub mod post_dto;"));
        assert!(code.contains("pub mod user_dto;"));
        assert!(code.contains("pub use user_dto::*;"));
    }

    #[test]
    fn assemble_output_lists_every_file() {
        let artifacts = vec![
            artifact(ArtifactGroup::Type, "UserDTO"),
            artifact(ArtifactGroup::Enumeration, "Role"),
        ];
        let files = assemble_output(&artifacts).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.relative_path.clone()).collect();

        assert_eq!(paths[0], PathBuf::from("mod.rs"));
        assert_eq!(paths[1], PathBuf::from("support.rs"));
        assert!(paths.contains(&PathBuf::from("type/mod.rs")));
        assert!(paths.contains(&PathBuf::from("type/user_dto.rs")));
        assert!(paths.contains(&PathBuf::from("enumeration/role.rs")));
        assert!(paths.contains(&PathBuf::from("union/mod.rs")));
        // root + support + seven indexes + two artifacts
        assert_eq!(files.len(), 11);
    }

    #[test]
    fn write_atomic_creates_parents_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/file.rs");

        write_atomic(&path, "content").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn write_output_writes_relative_paths() {
        let dir = TempDir::new().unwrap();
        let files = assemble_output(&[artifact(ArtifactGroup::Union, "SearchResult")]).unwrap();

        write_output(dir.path(), &files).unwrap();

        assert!(dir.path().join("mod.rs").exists());
        assert!(dir.path().join("support.rs").exists());
        assert!(dir.path().join("union/search_result.rs").exists());
        assert!(dir.path().join("projection/mod.rs").exists());
    }
}
