use std::path::PathBuf;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_DIR: &str = "docs/security";
pub const DEFAULT_JSON_FILE: &str = "attack-trees-report.json";
pub const DEFAULT_MARKDOWN_FILE: &str = "attack-trees-analysis.md";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AttackTreeConfig {
    pub report: Option<ReportConfig>,
    pub output: Option<OutputConfig>,
    pub trees: Option<TreesConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReportConfig {
    pub title: Option<String>,
    /// Date printed in both reports. Defaults to today.
    pub generated: Option<String>,
    pub based_on: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub directory: Option<String>,
    pub json_file: Option<String>,
    pub markdown_file: Option<String>,
}

impl OutputConfig {
    pub fn json_path(&self) -> PathBuf {
        self.dir().join(self.json_file.as_deref().unwrap_or(DEFAULT_JSON_FILE))
    }

    pub fn markdown_path(&self) -> PathBuf {
        self.dir().join(self.markdown_file.as_deref().unwrap_or(DEFAULT_MARKDOWN_FILE))
    }

    fn dir(&self) -> PathBuf {
        PathBuf::from(self.directory.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TreesConfig {
    #[serde(default = "default_true")]
    pub include_builtin: bool,
    /// Tree definition files or glob patterns.
    #[serde(default)]
    pub paths: Vec<String>,
}

impl Default for TreesConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            paths: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AttackTreeConfig::default();
        assert!(config.report.is_none());
        assert!(config.output.is_none());
        assert!(config.trees.is_none());
    }

    #[test]
    fn test_output_default_paths() {
        let output = OutputConfig::default();
        assert_eq!(output.json_path(), PathBuf::from("docs/security/attack-trees-report.json"));
        assert_eq!(output.markdown_path(), PathBuf::from("docs/security/attack-trees-analysis.md"));
    }

    #[test]
    fn test_output_overrides() {
        let output = OutputConfig {
            directory: Some("out".to_string()),
            json_file: Some("trees.json".to_string()),
            markdown_file: None,
        };
        assert_eq!(output.json_path(), PathBuf::from("out/trees.json"));
        assert_eq!(output.markdown_path(), PathBuf::from("out/attack-trees-analysis.md"));
    }

    #[test]
    fn test_trees_config_defaults_include_builtin() {
        let parsed: TreesConfig = serde_yaml::from_str("paths: [extra.yaml]").unwrap();
        assert!(parsed.include_builtin);
        assert_eq!(parsed.paths, vec!["extra.yaml"]);
        assert!(TreesConfig::default().include_builtin);
    }
}
