use tracing::debug;
use crate::catalog::{self, Assessment};
use crate::cli::commands::TreeSourceArgs;
use crate::errors::AttackTreeError;

/// Title used when the built-in narrative is left out.
pub const CUSTOM_TITLE: &str = "Attack Trees";

/// Build the assessment from the built-in catalog and any loaded trees.
pub fn assemble_assessment(include_builtin: bool, paths: &[String]) -> Result<Assessment, AttackTreeError> {
    let mut assessment = if include_builtin {
        catalog::skymap_assessment()
    } else {
        Assessment::from_trees(CUSTOM_TITLE, Vec::new())
    };

    if !paths.is_empty() {
        let loaded = catalog::load_trees(paths)?;
        debug!(count = loaded.len(), "Appending loaded trees");
        assessment.extend_trees(loaded);
    }

    if assessment.scenarios.is_empty() {
        return Err(AttackTreeError::Config("No attack trees to process".into()));
    }
    Ok(assessment)
}

pub fn assessment_from_args(source: &TreeSourceArgs) -> Result<Assessment, AttackTreeError> {
    assemble_assessment(!source.no_builtin, &source.trees)
}
