//! Schema fingerprints for incremental generation.
//!
//! A fingerprint is the hex BLAKE3 digest of the raw schema source. It is
//! stored next to the generated files after a successful run; a later run
//! whose schema hashes to the same value can skip generation entirely.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::GeneratorError;
use crate::output::write_atomic;

/// Marker file holding the fingerprint, relative to the output directory.
pub const FINGERPRINT_FILE: &str = ".clientgen-fingerprint";

/// Computes the fingerprint of a schema source.
///
/// ## Examples
///
/// ```
/// use clientgen::fingerprint::compute;
///
/// let fp = compute("{}");
/// assert_eq!(fp.len(), 64); // 32 bytes = 64 hex chars
/// assert_eq!(fp, compute("{}"));
/// ```
#[inline]
pub fn compute(source: &str) -> String {
    blake3::hash(source.as_bytes()).to_hex().to_string()
}

/// Path of the marker file inside `output_dir`.
pub fn marker_path(output_dir: &Path) -> PathBuf {
    output_dir.join(FINGERPRINT_FILE)
}

/// Reads the fingerprint stored by the last successful run, if any.
///
/// ## Errors
///
/// Returns `GeneratorError::Read` if the marker exists but cannot be read.
pub fn read_stored(output_dir: &Path) -> Result<Option<String>, GeneratorError> {
    let path = marker_path(output_dir);
    match fs::read_to_string(&path) {
        Ok(contents) => Ok(Some(contents.trim().to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GeneratorError::Read {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

/// Persists `fingerprint` as the marker for `output_dir`.
pub fn store(output_dir: &Path, fingerprint: &str) -> Result<(), GeneratorError> {
    write_atomic(&marker_path(output_dir), &format!("{fingerprint}\n"))
}
