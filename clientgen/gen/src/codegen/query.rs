//! Query operation wrappers: one artifact per field of the query root type.

use tracing::{debug, warn};

use super::operation::{OperationKind, generate_operations};
use super::{Artifact, GenerationContext, Generator};
use crate::errors::GeneratorError;

/// Generates a wrapper for every query root field.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryGenerator;

impl Generator for QueryGenerator {
    fn name(&self) -> &'static str {
        "query"
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<Artifact>, GeneratorError> {
        let Some(root) = ctx.model.query_type() else {
            warn!(
                root = %ctx.model.query_type_name,
                "Query root type is not defined in the schema; no query operations generated."
            );
            return Ok(Vec::new());
        };

        let artifacts = generate_operations(ctx, OperationKind::Query, root)?;
        debug!(count = artifacts.len(), "Generated query operations.");
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::ArtifactGroup;
    use crate::test_utils::with_sample_context;

    fn find<'a>(artifacts: &'a [Artifact], name: &str) -> &'a Artifact {
        artifacts
            .iter()
            .find(|a| a.name == name)
            .unwrap_or_else(|| panic!("no artifact named {name}"))
    }

    #[test]
    fn one_wrapper_per_root_field() {
        let artifacts = with_sample_context(|ctx| QueryGenerator.generate(ctx)).unwrap();
        let names: Vec<_> = artifacts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["UserQuery", "UsersQuery", "SearchQuery", "NodeQuery", "VersionQuery"]
        );
        assert!(artifacts.iter().all(|a| a.group == ArtifactGroup::Query));
    }

    #[test]
    fn optional_arguments_and_list_response() {
        let artifacts = with_sample_context(|ctx| QueryGenerator.generate(ctx)).unwrap();
        let users = &find(&artifacts, "UsersQuery").contents;

        assert!(users.contains("pub const OPERATION_HEADER: &'static str"));
        assert!(users.contains("\"query Users($first: Int! = 10, $role: Role)\""));
        assert!(users.contains("\"users(first: $first, role: $role)\""));
        assert!(users.contains("first: Option<i32>,"));
        assert!(users.contains("role: Option<crate::graphql::enumeration::Role>,"));
        assert!(users.contains("type Response = Vec<crate::graphql::r#type::UserDTO>;"));
        assert!(users.contains("projection: crate::graphql::projection::UserProjection,"));
        assert!(users.contains("first: self.first,"));
    }

    #[test]
    fn abstract_returns_use_abstract_projections() {
        let artifacts = with_sample_context(|ctx| QueryGenerator.generate(ctx)).unwrap();

        let search = &find(&artifacts, "SearchQuery").contents;
        assert!(search.contains("projection: crate::graphql::projection::SearchResultProjection,"));
        assert!(search.contains("type Response = Vec<crate::graphql::union::SearchResult>;"));

        let node = &find(&artifacts, "NodeQuery").contents;
        assert!(node.contains("projection: crate::graphql::projection::NodeProjection,"));
        assert!(node.contains("type Response = Option<crate::graphql::r#type::Node>;"));
    }

    #[test]
    fn scalar_return_has_no_projection() {
        let artifacts = with_sample_context(|ctx| QueryGenerator.generate(ctx)).unwrap();
        let version = &find(&artifacts, "VersionQuery").contents;

        assert!(!version.contains("projection"));
        assert!(version.contains("type Response = String;"));
        assert!(version.contains("let variables = serde_json::Map::new();"));
        assert!(version.contains("pub const OPERATION_HEADER: &'static str = \"query Version\";"));
    }

    #[test]
    fn missing_query_root_yields_nothing() {
        let mut model = crate::test_utils::sample_model();
        model.objects.remove("Query");
        let settings = crate::test_utils::sample_settings();
        let naming = crate::naming::SuffixNaming::default();
        let ctx = GenerationContext::new(&model, &settings, &naming);

        assert!(QueryGenerator.generate(&ctx).unwrap().is_empty());
    }
}
