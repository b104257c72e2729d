//! Generated artifacts and the output groups they belong to.

use std::path::PathBuf;

use proc_macro2::{Ident, TokenStream};
use strum::{AsRefStr, Display, EnumString};

use crate::errors::GeneratorError;
use crate::idents;
use crate::output::{format_code, validate_code};

/// Output directory (and module) an artifact is written to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ArtifactGroup {
    Type,
    Input,
    Enumeration,
    Query,
    Mutation,
    Projection,
    Union,
}

impl ArtifactGroup {
    /// Every group, in output order.
    pub const ALL: [ArtifactGroup; 7] = [
        Self::Type,
        Self::Input,
        Self::Enumeration,
        Self::Query,
        Self::Mutation,
        Self::Projection,
        Self::Union,
    ];

    /// Directory name under the output root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Input => "input",
            Self::Enumeration => "enumeration",
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Projection => "projection",
            Self::Union => "union",
        }
    }

    /// Module identifier for the group; `type` is emitted as `r#type`.
    pub fn module_ident(self) -> Ident {
        idents::ident(self.dir_name())
    }
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub group: ArtifactGroup,
    /// The primary generated type name, e.g. `UserDTO`.
    pub name: String,
    /// File name within the group directory, e.g. `user_dto.rs`.
    pub file_name: String,
    /// Formatted Rust source.
    pub contents: String,
}

impl Artifact {
    /// Validates and formats `tokens` into an artifact.
    ///
    /// ## Errors
    ///
    /// Returns [`GeneratorError::CodeGen`] if the tokens are not a valid Rust
    /// file.
    pub fn from_tokens(
        group: ArtifactGroup,
        name: impl Into<String>,
        tokens: &TokenStream,
    ) -> Result<Self, GeneratorError> {
        let name = name.into();
        let file = validate_code(tokens).map_err(|e| match e {
            GeneratorError::CodeGen(msg) => {
                GeneratorError::CodeGen(format!("{group}/{name}: {msg}"))
            }
            other => other,
        })?;

        Ok(Self {
            group,
            file_name: format!("{}.rs", module_stem(&name)),
            name,
            contents: format_code(&file),
        })
    }

    /// Module name of the file, without the `.rs` extension.
    pub fn module_name(&self) -> &str {
        self.file_name.trim_end_matches(".rs")
    }

    /// Path relative to the output root, e.g. `type/user_dto.rs`.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.group.dir_name()).join(&self.file_name)
    }
}

/// File stem for an artifact. `mod.rs` is the group index, so `Mod` is
/// written to `mod_.rs`.
fn module_stem(name: &str) -> String {
    let stem = idents::field_name(name);
    if stem == "mod" {
        format!("{stem}_")
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn group_names() {
        assert_eq!(ArtifactGroup::Type.to_string(), "type");
        assert_eq!(ArtifactGroup::Type.module_ident().to_string(), "r#type");
        assert_eq!(ArtifactGroup::Union.module_ident().to_string(), "union");
        assert_eq!("enumeration".parse::<ArtifactGroup>().unwrap(), ArtifactGroup::Enumeration);
        for group in ArtifactGroup::ALL {
            assert_eq!(group.as_ref(), group.dir_name());
        }
    }

    #[test]
    fn from_tokens_formats_and_names_file() {
        let artifact = Artifact::from_tokens(
            ArtifactGroup::Type,
            "UserDTO",
            &quote! { pub struct UserDTO { pub id: String } },
        )
        .unwrap();

        assert_eq!(artifact.file_name, "user_dto.rs");
        assert_eq!(artifact.module_name(), "user_dto");
        assert_eq!(artifact.relative_path(), PathBuf::from("type/user_dto.rs"));
        assert!(artifact.contents.starts_with("// This code was automatically generated"));
        assert!(artifact.contents.contains("pub struct UserDTO"));
    }

    #[test]
    fn from_tokens_rejects_invalid_code() {
        let err = Artifact::from_tokens(ArtifactGroup::Input, "Broken", &quote! { pub struct })
            .unwrap_err();
        assert!(matches!(err, GeneratorError::CodeGen(msg) if msg.contains("input/Broken")));
    }

    #[test]
    fn type_named_mod_does_not_replace_the_index() {
        let artifact = Artifact::from_tokens(
            ArtifactGroup::Enumeration,
            "Mod",
            &quote! { pub enum Mod { On } },
        )
        .unwrap();

        assert_eq!(artifact.file_name, "mod_.rs");
        assert_eq!(artifact.module_name(), "mod_");
        assert_eq!(artifact.relative_path(), PathBuf::from("enumeration/mod_.rs"));
    }
}
