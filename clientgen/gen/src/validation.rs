//! Validation of the generated artifact set before anything is written.
//!
//! Suffix-based naming can map two schema types onto one generated name,
//! for example an object `User` (suffixed to `UserDTO`) next to an object
//! that is already called `UserDTO`. Writing both would silently overwrite
//! one file with the other, so the run is rejected instead.
//!
//! ## Validation Checks
//!
//! - **Type names**: no two artifacts in a group share a generated name
//! - **File names**: no two artifacts in a group map to the same file, which
//!   catches names like `UserDto` and `UserDTO` that differ only in case
//!   boundaries

use std::collections::HashSet;

use tracing::debug;

use crate::artifact::Artifact;
use crate::errors::GeneratorError;

/// Checks that every artifact has a unique name and file within its group.
///
/// ## Errors
///
/// Returns [`GeneratorError::NamingCollision`] for the first duplicate found.
pub fn check_collisions(artifacts: &[Artifact]) -> Result<(), GeneratorError> {
    let mut names = HashSet::new();
    let mut files = HashSet::new();

    for artifact in artifacts {
        if !names.insert((artifact.group, artifact.name.as_str())) {
            return Err(GeneratorError::NamingCollision {
                group: artifact.group.to_string(),
                name: artifact.name.clone(),
            });
        }
        if !files.insert((artifact.group, artifact.file_name.as_str())) {
            return Err(GeneratorError::NamingCollision {
                group: artifact.group.to_string(),
                name: artifact.file_name.clone(),
            });
        }
    }

    debug!(artifacts = artifacts.len(), "No naming collisions found.");
    Ok(())
}
