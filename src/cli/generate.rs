use std::path::Path;
use tracing::info;
use crate::analysis::Metric;
use crate::catalog::Assessment;
use crate::cli::commands::GenerateArgs;
use crate::cli::sources::assemble_assessment;
use crate::config::{parse_config, AttackTreeConfig, OutputConfig};
use crate::errors::AttackTreeError;
use crate::reporting::console::{render_generated, render_paths_header, render_totals, render_tree_path};
use crate::reporting::{write_reports, ReportMeta, ReportPaths};

/// Fully resolved inputs of a `generate` run.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub meta: ReportMeta,
    pub paths: ReportPaths,
    pub include_builtin: bool,
    pub tree_paths: Vec<String>,
}

pub fn handle_generate(args: GenerateArgs, quiet: bool) -> Result<(), AttackTreeError> {
    let config = match &args.config {
        Some(path) => parse_config(Path::new(path))?,
        None => AttackTreeConfig::default(),
    };
    let settings = build_report_settings(&args, &config)?;
    let assessment = assemble_assessment(settings.include_builtin, &settings.tree_paths)?;

    info!(
        trees = assessment.scenarios.len(),
        json = %settings.paths.json.display(),
        markdown = %settings.paths.markdown.display(),
        "Generating attack tree reports"
    );
    write_reports(&assessment, &settings.meta, &settings.paths)?;

    if !quiet {
        print_summary(&assessment, &settings.paths);
    }
    Ok(())
}

/// Resolve every setting as CLI flag, then config file, then default.
/// Tree paths given on the command line replace the configured ones.
/// Conflicts are checked only after the merge.
pub fn build_report_settings(
    args: &GenerateArgs,
    config: &AttackTreeConfig,
) -> Result<ReportSettings, AttackTreeError> {
    let report = config.report.clone().unwrap_or_default();
    let trees = config.trees.clone().unwrap_or_default();
    let output = config.output.clone().unwrap_or_default();

    let include_builtin = !args.source.no_builtin && trees.include_builtin;
    let tree_paths = if args.source.trees.is_empty() {
        trees.paths
    } else {
        args.source.trees.clone()
    };
    if !include_builtin && tree_paths.is_empty() {
        return Err(AttackTreeError::Config(
            "Built-in trees are disabled and no tree paths are configured".into(),
        ));
    }

    let output = OutputConfig {
        directory: args.output.clone().or(output.directory),
        json_file: args.json_file.clone().or(output.json_file),
        markdown_file: args.markdown_file.clone().or(output.markdown_file),
    };
    let paths = ReportPaths {
        json: output.json_path(),
        markdown: output.markdown_path(),
    };
    if paths.json == paths.markdown {
        return Err(AttackTreeError::Config(format!(
            "JSON and markdown reports would both be written to {}",
            paths.json.display()
        )));
    }

    let meta = ReportMeta {
        title: report.title,
        generated: args
            .generated
            .clone()
            .or(report.generated)
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
        based_on: report.based_on,
    };

    Ok(ReportSettings { meta, paths, include_builtin, tree_paths })
}

fn print_summary(assessment: &Assessment, paths: &ReportPaths) {
    let metric = Metric::Difficulty;
    println!("{}", render_paths_header(metric.path_label(), metric.as_str()));
    for tree in assessment.trees() {
        println!("{}", render_tree_path(tree, &tree.best_path(metric)));
    }
    println!("{}", render_totals(assessment));
    println!();
    for path in [&paths.json, &paths.markdown] {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        println!("{}", render_generated(&name));
    }
}
