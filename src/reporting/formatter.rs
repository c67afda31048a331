use crate::analysis::Metric;
use crate::catalog::{Assessment, Conclusion, RemediationPhase, Scenario, ScenarioAnalysis};
use crate::models::tree::AttackTree;
use crate::utils::formatting::{format_duration_hours, format_range};
use super::mermaid::MermaidExporter;

pub fn format_diagram_section(tree: &AttackTree) -> String {
    format!(
        "## {}\n\nSeverity: {}\n\n```mermaid\n{}\n```",
        tree.name,
        tree.severity,
        MermaidExporter::new(tree).export(),
    )
}

pub fn format_executive_summary(assessment: &Assessment) -> String {
    let mut out = String::from("## Executive Summary\n\n");
    if !assessment.introduction.is_empty() {
        out.push_str(&assessment.introduction);
        out.push_str("\n\n");
    }
    out.push_str(&format!(
        "**Critical Findings:**\n- **{} major attack scenarios** identified\n- **{} unique attack paths** documented",
        assessment.scenarios.len(),
        assessment.total_leaf_attacks(),
    ));
    for finding in &assessment.key_findings {
        out.push_str(&format!("\n- {}", finding));
    }
    out
}

/// Analysis derived from the model for trees without an authored one.
pub fn derive_analysis(tree: &AttackTree) -> ScenarioAnalysis {
    let path = tree.best_path(Metric::Difficulty);
    let leaves: Vec<_> = path.leaves().collect();

    let easiest_path = if leaves.is_empty() {
        tree.root.name.clone()
    } else {
        leaves.iter().map(|n| n.name.as_str()).collect::<Vec<_>>().join(" → ")
    };

    let range = |metric: Metric| -> String {
        let min = leaves.iter().min_by_key(|n| metric.value_of(&n.attributes));
        let max = leaves.iter().max_by_key(|n| metric.value_of(&n.attributes));
        match (min, max) {
            (Some(lo), Some(hi)) => match metric {
                Metric::Difficulty => format_range(lo.attributes.difficulty, hi.attributes.difficulty),
                Metric::Cost => format_range(lo.attributes.cost, hi.attributes.cost),
                Metric::DetectionRisk => format_range(lo.attributes.detection_risk, hi.attributes.detection_risk),
            },
            _ => "n/a".to_string(),
        }
    };

    let mut mitigations: Vec<String> = Vec::new();
    for leaf in &leaves {
        for m in &leaf.mitigations {
            if !mitigations.contains(m) {
                mitigations.push(m.clone());
            }
        }
    }

    ScenarioAnalysis {
        easiest_path,
        difficulty: range(Metric::Difficulty),
        cost: range(Metric::Cost),
        detection_risk: range(Metric::DetectionRisk),
        time: format_duration_hours(path.total_hours()),
        impact: tree.description.clone(),
        root_causes: leaves
            .iter()
            .filter(|n| !n.is_mitigated())
            .map(|n| format!("{} has no recorded mitigation", n.name))
            .collect(),
        mitigations,
    }
}

pub fn format_scenario_analysis(index: usize, scenario: &Scenario) -> String {
    let tree = &scenario.tree;
    let derived;
    let analysis = match &scenario.analysis {
        Some(authored) => authored,
        None => {
            derived = derive_analysis(tree);
            &derived
        }
    };

    let mut out = format!(
        "### {}. {} ({})\n\n**Easiest Path:** {}\n- **Difficulty:** {}\n- **Cost:** {}\n- **Detection Risk:** {}\n- **Time:** {}",
        index,
        tree.name,
        tree.severity,
        analysis.easiest_path,
        analysis.difficulty,
        analysis.cost,
        analysis.detection_risk,
        analysis.time,
    );

    if !analysis.impact.is_empty() {
        out.push_str(&format!("\n\n**Impact:** {}", analysis.impact));
    }
    if !analysis.root_causes.is_empty() {
        out.push_str("\n\n**Root Causes:**");
        for cause in &analysis.root_causes {
            out.push_str(&format!("\n- {}", cause));
        }
    }
    if !analysis.mitigations.is_empty() {
        out.push_str("\n\n**Recommended Mitigations:**");
        for (i, m) in analysis.mitigations.iter().enumerate() {
            out.push_str(&format!("\n{}. {}", i + 1, m));
        }
    }
    out
}

/// Remediation phases. Item numbers continue across phases and action
/// bullets are indented to line up with the item title.
pub fn format_remediation_plan(phases: &[RemediationPhase]) -> String {
    let mut blocks = vec!["## Prioritized Remediation Plan".to_string()];
    let mut number = 0;
    for phase in phases {
        blocks.push(format!("### {}", phase.title));
        for item in &phase.items {
            number += 1;
            let mut block = format!("{}. **{}**", number, item.title);
            if let Some(location) = &item.location {
                block.push_str(&format!(" ({})", location));
            }
            let indent = " ".repeat(number.to_string().len() + 2);
            for action in &item.actions {
                block.push_str(&format!("\n{}- {}", indent, action));
            }
            blocks.push(block);
        }
    }
    blocks.join("\n\n")
}

pub fn format_conclusion(conclusion: &Conclusion) -> String {
    let issues = conclusion
        .primary_issues
        .iter()
        .enumerate()
        .map(|(i, issue)| format!("{}. {}", i + 1, issue))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "## Conclusion\n\n{}\n\n{}\n\n{}",
        conclusion.summary, issues, conclusion.call_to_action
    )
}

pub fn format_references(references: &[String]) -> String {
    let items = references
        .iter()
        .map(|r| format!("- {}", r))
        .collect::<Vec<_>>()
        .join("\n");
    format!("## References\n\n{}", items)
}
