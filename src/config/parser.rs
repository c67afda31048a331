use std::path::Path;
use crate::errors::AttackTreeError;
use super::types::AttackTreeConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub fn parse_config(path: &Path) -> Result<AttackTreeConfig, AttackTreeError> {
    if !path.exists() {
        return Err(AttackTreeError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > 1_048_576 {
        return Err(AttackTreeError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = std::fs::read_to_string(path)?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
    if yaml.is_null() {
        return Ok(AttackTreeConfig::default());
    }

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: AttackTreeConfig = serde_yaml::from_value(yaml)?;

    // Semantic conflict detection
    validate_conflicts(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), AttackTreeError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| AttackTreeError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| AttackTreeError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only: unknown keys and odd file names are warned about.
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Detect problems visible in the config file alone. Checks that command
/// line flags can override run on the resolved settings instead.
fn validate_conflicts(config: &AttackTreeConfig) -> Result<(), AttackTreeError> {
    if let Some(generated) = config.report.as_ref().and_then(|r| r.generated.as_deref()) {
        if generated.trim().is_empty() {
            warn!("Report generation date is empty");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_overridable_settings_are_not_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attacktree.yaml");
        fs::write(&path, r#"
output:
  json_file: "report"
  markdown_file: "report"
trees:
  include_builtin: false
"#).unwrap();

        let config = parse_config(&path).unwrap();
        assert_eq!(config.output.unwrap().json_file.as_deref(), Some("report"));
        assert!(!config.trees.unwrap().include_builtin);
    }

    #[test]
    fn test_validate_conflicts_empty_config() {
        let config = AttackTreeConfig::default();
        assert!(validate_conflicts(&config).is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("attacktree.yaml");
        fs::write(&path, r#"
report:
  title: "Custom Attack Trees"
  generated: "2025-12-26"
output:
  directory: "reports"
  markdown_file: "trees.md"
trees:
  include_builtin: false
  paths: ["extra/*.yaml"]
"#).unwrap();

        let config = parse_config(&path).unwrap();
        let report = config.report.unwrap();
        assert_eq!(report.title.as_deref(), Some("Custom Attack Trees"));
        assert_eq!(report.generated.as_deref(), Some("2025-12-26"));
        assert!(report.based_on.is_none());
        let output = config.output.unwrap();
        assert_eq!(output.markdown_path(), std::path::PathBuf::from("reports/trees.md"));
        let trees = config.trees.unwrap();
        assert!(!trees.include_builtin);
        assert_eq!(trees.paths, vec!["extra/*.yaml"]);
    }

    #[test]
    fn test_parse_empty_config_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.yaml");
        fs::write(&path, "").unwrap();
        let config = parse_config(&path).unwrap();
        assert!(config.output.is_none());
    }

    #[test]
    fn test_parse_missing_config() {
        let err = parse_config(Path::new("/nonexistent/attacktree.yaml")).unwrap_err();
        assert!(matches!(err, AttackTreeError::Config(_)));
    }
}
