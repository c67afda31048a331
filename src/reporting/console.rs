use console::style;
use crate::analysis::path::AttackPath;
use crate::catalog::Assessment;
use crate::models::tree::AttackTree;
use crate::utils::formatting::format_hours;

const RULE_WIDTH: usize = 80;

/// Heading block printed above the per-tree paths.
pub fn render_paths_header(path_label: &str, metric: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{}\n{}\n{}",
        style(&rule).dim(),
        style(format!("{} ATTACK PATHS (By {})", path_label.to_uppercase(), capitalize(metric))).bold(),
        style(&rule).dim(),
    )
}

/// Leaf steps of one tree's best path, with their risk attributes.
pub fn render_tree_path(tree: &AttackTree, path: &AttackPath<'_>) -> String {
    let mut out = format!(
        "\n{} ({}):",
        style(&tree.name).white().bold(),
        severity_style(&tree.severity),
    );
    for node in path.leaves() {
        let attrs = &node.attributes;
        out.push_str(&format!("\n  {} {}", style("→").cyan(), node.name));
        out.push_str(&format!("\n    Difficulty: {}", attrs.difficulty));
        out.push_str(&format!("\n    Cost: {}", attrs.cost));
        out.push_str(&format!("\n    Detection: {}", attrs.detection_risk));
        out.push_str(&format!("\n    Time: {}", format_hours(attrs.time_hours)));
        if !node.file_refs.is_empty() {
            out.push_str(&format!("\n    Files: {}", style(node.file_refs.join(", ")).dim()));
        }
    }
    out
}

/// Aggregate counts over every tree of the assessment.
pub fn render_totals(assessment: &Assessment) -> String {
    format!(
        "\n{}\n  - {} attack scenarios analyzed\n  - {} total attack paths identified\n  - {} unmitigated attacks found",
        style("Summary:").bold(),
        assessment.scenarios.len(),
        assessment.total_leaf_attacks(),
        assessment.total_unmitigated_attacks(),
    )
}

pub fn render_generated(file_name: &str) -> String {
    format!("{} Generated {}", style("✓").green(), file_name)
}

fn severity_style(severity: &str) -> console::StyledObject<&str> {
    match severity.to_ascii_uppercase().as_str() {
        "CRITICAL" => style(severity).red().bold(),
        "HIGH" => style(severity).red(),
        "MEDIUM" => style(severity).yellow(),
        _ => style(severity).dim(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
