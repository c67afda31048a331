use std::path::{Path, PathBuf};
use tracing::info;
use crate::catalog::Assessment;
use crate::errors::AttackTreeError;
use crate::models::document::AttackTreeReport;
use crate::models::tree::AttackTree;
use crate::reporting::formatter::{
    format_conclusion, format_diagram_section, format_executive_summary, format_references,
    format_remediation_plan, format_scenario_analysis,
};

/// Header values shared by both reports.
#[derive(Debug, Clone)]
pub struct ReportMeta {
    /// Falls back to the assessment's own title.
    pub title: Option<String>,
    pub generated: String,
    /// Source document the findings come from.
    pub based_on: Option<String>,
}

impl ReportMeta {
    fn title_for<'a>(&'a self, assessment: &'a Assessment) -> &'a str {
        self.title.as_deref().unwrap_or(&assessment.title)
    }
}

#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

pub fn build_json_report(assessment: &Assessment, meta: &ReportMeta) -> AttackTreeReport {
    let trees: Vec<AttackTree> = assessment.trees().cloned().collect();
    AttackTreeReport::new(meta.title_for(assessment), meta.generated.clone(), &trees)
}

pub fn build_markdown_report(assessment: &Assessment, meta: &ReportMeta) -> String {
    let mut blocks = vec![format!("# {}", meta.title_for(assessment))];

    let mut header = format!("**Generated:** {}", meta.generated);
    let based_on = meta.based_on.as_deref().unwrap_or(&assessment.based_on);
    if !based_on.is_empty() {
        header.push_str(&format!("\n**Based on:** {}", based_on));
    }
    blocks.push(header);

    blocks.push(format_executive_summary(assessment));

    blocks.push("## Attack Scenarios".to_string());
    blocks.push(
        assessment
            .trees()
            .map(format_diagram_section)
            .collect::<Vec<_>>()
            .join("\n"),
    );

    blocks.push("## Detailed Analysis".to_string());
    for (i, scenario) in assessment.scenarios.iter().enumerate() {
        blocks.push(format_scenario_analysis(i + 1, scenario));
    }

    if !assessment.remediation.is_empty() {
        blocks.push(format_remediation_plan(&assessment.remediation));
    }
    if let Some(conclusion) = &assessment.conclusion {
        blocks.push(format_conclusion(conclusion));
    }
    if !assessment.references.is_empty() {
        blocks.push(format_references(&assessment.references));
    }

    let mut report = blocks.join("\n\n");
    report.push('\n');
    report
}

/// Write the JSON report and the markdown narrative, creating parent
/// directories as needed.
pub fn write_reports(
    assessment: &Assessment,
    meta: &ReportMeta,
    paths: &ReportPaths,
) -> Result<(), AttackTreeError> {
    let report = build_json_report(assessment, meta);
    let json = serde_json::to_string_pretty(&report)?;
    write_file(&paths.json, &json)?;
    info!(path = %paths.json.display(), trees = report.trees.len(), "JSON report written");

    let markdown = build_markdown_report(assessment, meta);
    write_file(&paths.markdown, &markdown)?;
    info!(path = %paths.markdown.display(), "Markdown report written");

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), AttackTreeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn meta() -> ReportMeta {
        ReportMeta {
            title: None,
            generated: "2025-12-26".to_string(),
            based_on: None,
        }
    }

    #[test]
    fn test_markdown_section_order() {
        let md = build_markdown_report(&catalog::skymap_assessment(), &meta());
        let headings = [
            "# Skymap Application Security Attack Trees",
            "**Generated:** 2025-12-26\n**Based on:** Security Vulnerability Report",
            "## Executive Summary",
            "## Attack Scenarios",
            "## Complete System Compromise\n\nSeverity: CRITICAL",
            "## Internal Network Reconnaissance\n\nSeverity: HIGH",
            "## Detailed Analysis",
            "### 1. Complete System Compromise (CRITICAL)",
            "### 4. Internal Network Reconnaissance (HIGH)",
            "## Prioritized Remediation Plan",
            "## Conclusion",
            "## References",
        ];
        let mut last = 0;
        for heading in headings {
            let pos = md.find(heading).unwrap_or_else(|| panic!("missing {}", heading));
            assert!(pos >= last, "{} out of order", heading);
            last = pos;
        }
        assert!(md.ends_with("https://tauri.app/v1/guides/security/\n"));
    }

    #[test]
    fn test_diagram_blocks_are_adjacent() {
        let md = build_markdown_report(&catalog::skymap_assessment(), &meta());
        assert_eq!(md.matches("```mermaid\n").count(), 4);
        assert!(md.contains("```\n## Data Exfiltration\n"));
    }

    #[test]
    fn test_custom_trees_skip_authored_sections() {
        let assessment = Assessment::from_trees("Custom", vec![catalog::network_recon::build_tree()]);
        let md = build_markdown_report(&assessment, &ReportMeta {
            title: None,
            generated: "2026-01-01".to_string(),
            based_on: None,
        });
        assert!(md.starts_with("# Custom\n\n**Generated:** 2026-01-01\n\n## Executive Summary"));
        assert!(md.contains("**Easiest Path:** Enumerate Internal IPs → Port Scan via URLs → Access Cloud Metadata"));
        assert!(!md.contains("## Prioritized Remediation Plan"));
        assert!(!md.contains("## Conclusion"));
    }

    #[test]
    fn test_json_report_shape() {
        let report = build_json_report(&catalog::skymap_assessment(), &meta());
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.starts_with("{\n  \"title\": \"Skymap Application Security Attack Trees\",\n  \"generated\": \"2025-12-26\",\n  \"trees\": ["));
        assert!(json.contains("\"time_hours\": 0.5"));
        assert_eq!(report.trees.len(), 4);
    }

    #[test]
    fn test_explicit_title_overrides_assessment() {
        let meta = ReportMeta { title: Some("Quarterly Review".to_string()), ..meta() };
        let assessment = catalog::skymap_assessment();
        assert_eq!(build_json_report(&assessment, &meta).title, "Quarterly Review");
        assert!(build_markdown_report(&assessment, &meta).starts_with("# Quarterly Review\n"));
    }
}
