use serde::Serialize;
use crate::analysis::{Metric, PathSummary};
use crate::catalog::Assessment;
use crate::cli::commands::PathsArgs;
use crate::cli::sources::assessment_from_args;
use crate::errors::AttackTreeError;
use crate::reporting::console::{render_paths_header, render_totals, render_tree_path};
use tracing::info;

#[derive(Debug, Serialize)]
struct TreePaths {
    tree: String,
    severity: String,
    path: PathSummary,
}

pub fn handle_paths(args: PathsArgs, quiet: bool) -> Result<(), AttackTreeError> {
    let assessment = assessment_from_args(&args.source)?;
    info!(metric = %args.metric, trees = assessment.scenarios.len(), "Searching best attack paths");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&path_summaries(&assessment, args.metric))?);
        return Ok(());
    }

    println!("{}", render_paths_header(args.metric.path_label(), args.metric.as_str()));
    for tree in assessment.trees() {
        println!("{}", render_tree_path(tree, &tree.best_path(args.metric)));
    }
    if !quiet {
        println!("{}", render_totals(&assessment));
    }
    Ok(())
}

fn path_summaries(assessment: &Assessment, metric: Metric) -> Vec<TreePaths> {
    assessment
        .trees()
        .map(|tree| TreePaths {
            tree: tree.name.clone(),
            severity: tree.severity.clone(),
            path: tree.best_path(metric).summary(),
        })
        .collect()
}
