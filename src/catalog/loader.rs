use std::path::{Path, PathBuf};
use serde::Deserialize;
use tracing::{info, warn};
use crate::errors::AttackTreeError;
use crate::models::document::{AttackTreeReport, TreeDocument};
use crate::models::tree::AttackTree;
use super::schema::TREE_SCHEMA;

const MAX_TREE_FILE_BYTES: u64 = 4 * 1_048_576;

/// Accepted layouts of a tree definition file.
#[derive(Deserialize)]
#[serde(untagged)]
enum TreeFile {
    Report(AttackTreeReport),
    Many(Vec<TreeDocument>),
    One(TreeDocument),
}

impl TreeFile {
    fn into_documents(self) -> Vec<TreeDocument> {
        match self {
            TreeFile::Report(report) => report.trees,
            TreeFile::Many(trees) => trees,
            TreeFile::One(tree) => vec![tree],
        }
    }
}

/// Load trees from a list of file paths or glob patterns, in order.
pub fn load_trees(patterns: &[String]) -> Result<Vec<AttackTree>, AttackTreeError> {
    let mut trees = Vec::new();
    for pattern in patterns {
        for path in expand_pattern(pattern)? {
            trees.extend(load_tree_file(&path)?);
        }
    }
    Ok(trees)
}

fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, AttackTreeError> {
    if !pattern.contains(|c: char| matches!(c, '*' | '?' | '[')) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let entries = glob::glob(pattern)
        .map_err(|e| AttackTreeError::Config(format!("Invalid tree pattern '{}': {}", pattern, e)))?;
    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Skipping unreadable tree path"),
        }
    }
    paths.sort();

    if paths.is_empty() {
        warn!(pattern, "Tree pattern matched no files");
    }
    Ok(paths)
}

/// Load every tree defined in one YAML or JSON file.
pub fn load_tree_file(path: &Path) -> Result<Vec<AttackTree>, AttackTreeError> {
    if !path.exists() {
        return Err(AttackTreeError::Config(format!("Tree file not found: {}", path.display())));
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_TREE_FILE_BYTES {
        return Err(AttackTreeError::Config(format!(
            "Tree file exceeds 4MB limit: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let value: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|e| {
        AttackTreeError::InvalidTree(format!("{}: {}", path.display(), e))
    })?;

    validate_schema(&value, path)?;

    let file: TreeFile = serde_yaml::from_value(value).map_err(|e| {
        AttackTreeError::InvalidTree(format!("{}: {}", path.display(), e))
    })?;

    let trees: Vec<AttackTree> = file.into_documents().into_iter().map(AttackTree::from).collect();
    for tree in &trees {
        let duplicates = tree.duplicate_ids();
        if !duplicates.is_empty() {
            warn!(tree = %tree.name, ids = ?duplicates, "Duplicate node ids will be merged in diagrams");
        }
    }

    info!(path = %path.display(), count = trees.len(), "Loaded attack trees");
    Ok(trees)
}

/// Check a definition against the tree schema. Violations are reported as
/// warnings; the typed parse decides whether the file is usable.
fn validate_schema(value: &serde_yaml::Value, path: &Path) -> Result<(), AttackTreeError> {
    let json_value = serde_json::to_value(value)
        .map_err(|e| AttackTreeError::InvalidTree(format!("{}: {}", path.display(), e)))?;

    let compiled = jsonschema::JSONSchema::compile(&TREE_SCHEMA)
        .map_err(|e| AttackTreeError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        for e in errors {
            warn!(
                file = %path.display(),
                validation_error = %format!("{} at {}", e, e.instance_path),
                "Tree schema warning"
            );
        }
    }

    Ok(())
}
