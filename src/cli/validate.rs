use console::style;
use tracing::info;
use crate::analysis::{validate_tree, TreeIssue};
use crate::catalog::Assessment;
use crate::cli::commands::ValidateArgs;
use crate::cli::sources::assessment_from_args;
use crate::errors::AttackTreeError;

pub fn handle_validate(args: ValidateArgs, quiet: bool) -> Result<(), AttackTreeError> {
    let assessment = assessment_from_args(&args.source)?;
    let report = collect_issues(&assessment);

    for (tree, issues) in &report {
        for issue in issues {
            println!("{} {}: {}", style("✗").red(), tree, issue);
        }
    }

    let total: usize = report.iter().map(|(_, issues)| issues.len()).sum();
    if total > 0 {
        return Err(AttackTreeError::InvalidTree(format!(
            "{} structural issue(s) found in {} tree(s)",
            total,
            report.len()
        )));
    }

    info!(trees = assessment.scenarios.len(), "All attack trees are well formed");
    if !quiet {
        for tree in assessment.trees() {
            println!("{} {} ({} nodes)", style("✓").green(), tree.name, tree.node_count());
        }
    }
    Ok(())
}

/// Issues per tree name, for trees that have any.
pub fn collect_issues(assessment: &Assessment) -> Vec<(String, Vec<TreeIssue>)> {
    assessment
        .trees()
        .map(|tree| (tree.name.clone(), validate_tree(tree)))
        .filter(|(_, issues)| !issues.is_empty())
        .collect()
}
