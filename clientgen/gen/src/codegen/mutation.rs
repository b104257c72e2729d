//! Mutation operation wrappers: one artifact per field of the mutation root
//! type, when the schema declares one.

use tracing::debug;

use super::operation::{OperationKind, generate_operations};
use super::{Artifact, GenerationContext, Generator};
use crate::errors::GeneratorError;

/// Generates a wrapper for every mutation root field.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutationGenerator;

impl Generator for MutationGenerator {
    fn name(&self) -> &'static str {
        "mutation"
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<Artifact>, GeneratorError> {
        let Some(root) = ctx.model.mutation_type() else {
            debug!("Schema has no mutation root type.");
            return Ok(Vec::new());
        };

        let artifacts = generate_operations(ctx, OperationKind::Mutation, root)?;
        debug!(count = artifacts.len(), "Generated mutation operations.");
        Ok(artifacts)
    }
}
