//! End-to-end generation runs.
//!
//! A run validates the configuration, reads the schema, optionally skips when
//! the schema is unchanged, runs every generator in parallel, checks the
//! results for collisions and writes the output tree. The fingerprint is only
//! advanced once every file has been written, so a failed run is retried in
//! full next time.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clientgen_schema::{SchemaModel, parse_schema};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::artifact::{Artifact, ArtifactGroup};
use crate::codegen::{GenerationContext, all_generators};
use crate::config::{GeneratorConfig, GeneratorSettings};
use crate::errors::GeneratorError;
use crate::fingerprint;
use crate::naming::SuffixNaming;
use crate::output::{assemble_output, write_output};
use crate::validation::check_collisions;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Every artifact was written.
    Success { artifact_count: usize },
    /// The schema matched the stored fingerprint; nothing was written.
    Skipped,
}

/// Summary of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub outcome: GenerationOutcome,
    /// Artifacts written per group; empty when skipped.
    pub per_group: BTreeMap<ArtifactGroup, usize>,
    pub output_dir: PathBuf,
    /// Fingerprint of the schema source that was read.
    pub fingerprint: String,
}

impl GenerationReport {
    /// Number of artifacts written.
    pub fn artifact_count(&self) -> usize {
        match self.outcome {
            GenerationOutcome::Success { artifact_count } => artifact_count,
            GenerationOutcome::Skipped => 0,
        }
    }
}

/// Runs generation for `config`.
///
/// ## Errors
///
/// - `GeneratorError::Config` if the configuration is invalid (before any I/O)
/// - `GeneratorError::Read` if the schema cannot be read
/// - `GeneratorError::SchemaParse`, `UnresolvedType`, `CodeGen` or
///   `NamingCollision` if generation fails
/// - `GeneratorError::Write` if an output file cannot be written
pub fn run(config: &GeneratorConfig) -> Result<GenerationReport, GeneratorError> {
    let settings = config.validate()?;

    let source = fs::read_to_string(&config.schema_path).map_err(|e| GeneratorError::Read {
        path: config.schema_path.display().to_string(),
        source: e,
    })?;
    let fingerprint = fingerprint::compute(&source);

    if config.skip_if_unchanged
        && fingerprint::read_stored(&config.output_dir)?.as_deref() == Some(fingerprint.as_str())
    {
        info!(
            schema = %config.schema_path.display(),
            "Schema unchanged since last run; skipping generation."
        );
        return Ok(GenerationReport {
            outcome: GenerationOutcome::Skipped,
            per_group: BTreeMap::new(),
            output_dir: config.output_dir.clone(),
            fingerprint,
        });
    }

    let model = parse_schema(&source)?;
    info!(
        types = model.type_count(),
        schema = %config.schema_path.display(),
        "Parsed schema."
    );

    let artifacts = generate_artifacts(&model, &settings)?;
    let files = assemble_output(&artifacts)?;

    fs::create_dir_all(&config.output_dir).map_err(|e| GeneratorError::Write {
        path: config.output_dir.display().to_string(),
        source: e,
    })?;
    write_output(&config.output_dir, &files)?;
    fingerprint::store(&config.output_dir, &fingerprint)?;

    info!(
        artifacts = artifacts.len(),
        output = %config.output_dir.display(),
        "Generation complete."
    );

    Ok(GenerationReport {
        outcome: GenerationOutcome::Success {
            artifact_count: artifacts.len(),
        },
        per_group: count_per_group(&artifacts),
        output_dir: config.output_dir.clone(),
        fingerprint,
    })
}

/// Runs every generator over `model` without touching the filesystem.
///
/// Generators run in parallel; the result keeps the fixed generator order,
/// so the same model always yields the same artifact list.
///
/// ## Errors
///
/// Returns the first generator error in generator order, or
/// `GeneratorError::NamingCollision` if two artifacts share a name.
pub fn generate_artifacts(
    model: &SchemaModel,
    settings: &GeneratorSettings,
) -> Result<Vec<Artifact>, GeneratorError> {
    let naming = SuffixNaming::new(settings.suffixes.clone());
    let ctx = GenerationContext::new(model, settings, &naming);
    let generators = all_generators();

    let batches = generators
        .par_iter()
        .map(|generator| {
            let artifacts = generator.generate(&ctx)?;
            debug!(
                generator = generator.name(),
                count = artifacts.len(),
                "Generator finished."
            );
            Ok(artifacts)
        })
        .collect::<Result<Vec<Vec<Artifact>>, GeneratorError>>()?;

    let artifacts: Vec<Artifact> = batches.into_iter().flatten().collect();
    check_collisions(&artifacts)?;
    Ok(artifacts)
}

/// Counts artifacts per output group.
pub fn count_per_group(artifacts: &[Artifact]) -> BTreeMap<ArtifactGroup, usize> {
    let mut counts = BTreeMap::new();
    for artifact in artifacts {
        *counts.entry(artifact.group).or_insert(0) += 1;
    }
    counts
}
