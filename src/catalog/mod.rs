//! Built-in security assessment of the Skymap starmap application: four
//! attack trees plus the analyst narrative that accompanies them.

pub mod system_compromise;
pub mod data_exfiltration;
pub mod denial_of_service;
pub mod network_recon;
pub mod remediation;
pub mod loader;
pub mod schema;

use crate::models::tree::AttackTree;

pub use loader::{load_tree_file, load_trees};

/// Authored narrative for one scenario.
#[derive(Debug, Clone, Default)]
pub struct ScenarioAnalysis {
    pub easiest_path: String,
    pub difficulty: String,
    pub cost: String,
    pub detection_risk: String,
    pub time: String,
    pub impact: String,
    pub root_causes: Vec<String>,
    pub mitigations: Vec<String>,
}

/// An attack tree with its optional authored analysis.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub tree: AttackTree,
    pub analysis: Option<ScenarioAnalysis>,
}

impl Scenario {
    pub fn new(tree: AttackTree) -> Self {
        Self { tree, analysis: None }
    }

    pub fn with_analysis(mut self, analysis: ScenarioAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct RemediationItem {
    pub title: String,
    /// Where the fix applies, e.g. "src-tauri/src/lib.rs".
    pub location: Option<String>,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RemediationPhase {
    pub title: String,
    pub items: Vec<RemediationItem>,
}

#[derive(Debug, Clone, Default)]
pub struct Conclusion {
    pub summary: String,
    pub primary_issues: Vec<String>,
    pub call_to_action: String,
}

/// Everything the report builder needs.
#[derive(Debug, Clone, Default)]
pub struct Assessment {
    pub title: String,
    pub based_on: String,
    pub introduction: String,
    /// Executive summary bullets beyond the derived counts.
    pub key_findings: Vec<String>,
    pub scenarios: Vec<Scenario>,
    pub remediation: Vec<RemediationPhase>,
    pub conclusion: Option<Conclusion>,
    pub references: Vec<String>,
}

impl Assessment {
    /// Assessment made only of the given trees, without authored narrative.
    pub fn from_trees(title: impl Into<String>, trees: Vec<AttackTree>) -> Self {
        Self {
            title: title.into(),
            scenarios: trees.into_iter().map(Scenario::new).collect(),
            ..Default::default()
        }
    }

    pub fn trees(&self) -> impl Iterator<Item = &AttackTree> {
        self.scenarios.iter().map(|s| &s.tree)
    }

    /// Append trees that carry no authored analysis.
    pub fn extend_trees(&mut self, trees: Vec<AttackTree>) {
        self.scenarios.extend(trees.into_iter().map(Scenario::new));
    }

    /// Find a tree by case-insensitive name or by root id.
    pub fn find_tree(&self, query: &str) -> Option<&AttackTree> {
        self.trees().find(|t| t.name.eq_ignore_ascii_case(query) || t.root.id == query)
    }

    pub fn total_leaf_attacks(&self) -> usize {
        self.trees().map(|t| t.all_leaf_attacks().len()).sum()
    }

    pub fn total_unmitigated_attacks(&self) -> usize {
        self.trees().map(|t| t.unmitigated_attacks().len()).sum()
    }
}

pub const SKYMAP_TITLE: &str = "Skymap Application Security Attack Trees";
pub const SKYMAP_SOURCE: &str =
    "Security Vulnerability Report (llmdoc/agent/security-vulnerability-report.md)";

/// The four built-in trees, in report order.
pub fn builtin_trees() -> Vec<AttackTree> {
    vec![
        system_compromise::build_tree(),
        data_exfiltration::build_tree(),
        denial_of_service::build_tree(),
        network_recon::build_tree(),
    ]
}

/// Built-in assessment with trees and the full narrative.
pub fn skymap_assessment() -> Assessment {
    Assessment {
        title: SKYMAP_TITLE.to_string(),
        based_on: SKYMAP_SOURCE.to_string(),
        introduction: "This document presents attack tree analysis for the Skymap React + Tauri starmap application.\n\
            Attack trees systematically map attacker goals to the paths they can take to achieve them."
            .to_string(),
        key_findings: vec![
            "**Most paths are TRIVIAL to LOW difficulty** due to missing security controls".to_string(),
            "**Highest risk:** Complete system compromise via unrestricted Tauri command access".to_string(),
        ],
        scenarios: vec![
            system_compromise::scenario(),
            data_exfiltration::scenario(),
            denial_of_service::scenario(),
            network_recon::scenario(),
        ],
        remediation: remediation::remediation_plan(),
        conclusion: Some(remediation::conclusion()),
        references: remediation::references(),
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_tree_order_and_severity() {
        let trees = builtin_trees();
        let names: Vec<&str> = trees.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec![
            "Complete System Compromise",
            "Data Exfiltration",
            "Denial of Service",
            "Internal Network Reconnaissance",
        ]);
        let severities: Vec<&str> = trees.iter().map(|t| t.severity.as_str()).collect();
        assert_eq!(severities, vec!["CRITICAL", "CRITICAL", "HIGH", "HIGH"]);
    }

    #[test]
    fn test_builtin_counts() {
        let assessment = skymap_assessment();
        assert_eq!(assessment.scenarios.len(), 4);
        assert_eq!(assessment.total_leaf_attacks(), 19);
        // A7 (Find App Data Directory) is the only leaf without mitigations.
        assert_eq!(assessment.total_unmitigated_attacks(), 1);
    }

    #[test]
    fn test_builtin_ids_unique_per_tree() {
        for tree in builtin_trees() {
            let ids: Vec<&str> = tree.nodes().iter().map(|n| n.id.as_str()).collect();
            let unique: HashSet<&str> = ids.iter().copied().collect();
            assert_eq!(ids.len(), unique.len(), "duplicate ids in {}", tree.name);
        }
    }

    #[test]
    fn test_every_builtin_scenario_has_analysis() {
        assert!(skymap_assessment().scenarios.iter().all(|s| s.analysis.is_some()));
    }

    #[test]
    fn test_find_tree() {
        let assessment = skymap_assessment();
        assert_eq!(assessment.find_tree("denial of service").map(|t| t.root.id.as_str()), Some("G3"));
        assert_eq!(assessment.find_tree("G4").map(|t| t.name.as_str()), Some("Internal Network Reconnaissance"));
        assert!(assessment.find_tree("Ransomware").is_none());
    }

    #[test]
    fn test_from_trees_has_no_narrative() {
        let assessment = Assessment::from_trees("Custom", builtin_trees());
        assert_eq!(assessment.scenarios.len(), 4);
        assert!(assessment.scenarios.iter().all(|s| s.analysis.is_none()));
        assert!(assessment.remediation.is_empty());
        assert!(assessment.conclusion.is_none());
    }
}
