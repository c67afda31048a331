use clap::{Parser, Subcommand, Args};
use crate::analysis::Metric;

#[derive(Parser)]
#[command(name = "attacktree", version, about = "Attack tree modeling, path scoring and report generation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the JSON report and markdown analysis
    Generate(GenerateArgs),
    /// Print the best attack path of every tree
    Paths(PathsArgs),
    /// Print or write one tree's Mermaid diagram
    Export(ExportArgs),
    /// Check tree definitions for structural problems
    Validate(ValidateArgs),
}

/// Where trees come from. Shared by every subcommand.
#[derive(Args, Clone, Debug, Default)]
pub struct TreeSourceArgs {
    /// Additional tree definition file or glob pattern (repeatable)
    #[arg(long = "trees", value_name = "PATH")]
    pub trees: Vec<String>,

    /// Leave out the built-in Skymap trees
    #[arg(long)]
    pub no_builtin: bool,
}

#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output directory for both reports
    #[arg(short, long)]
    pub output: Option<String>,

    /// File name of the JSON report
    #[arg(long)]
    pub json_file: Option<String>,

    /// File name of the markdown analysis
    #[arg(long)]
    pub markdown_file: Option<String>,

    /// Date printed in the reports (defaults to today)
    #[arg(long)]
    pub generated: Option<String>,

    #[command(flatten)]
    pub source: TreeSourceArgs,
}

#[derive(Args, Clone, Debug)]
pub struct PathsArgs {
    /// Attribute to minimize
    #[arg(short, long, value_enum, default_value_t = Metric::Difficulty)]
    pub metric: Metric,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub source: TreeSourceArgs,
}

#[derive(Args, Clone, Debug)]
pub struct ExportArgs {
    /// Tree name (case-insensitive) or root node id
    pub tree: String,

    /// Write the diagram to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    #[command(flatten)]
    pub source: TreeSourceArgs,
}

#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: TreeSourceArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::parse_from([
            "attacktree", "-vv", "generate", "--output", "out", "--trees", "a.yaml",
            "--trees", "more/*.yaml", "--no-builtin", "--generated", "2025-12-26",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.output.as_deref(), Some("out"));
                assert_eq!(args.source.trees, vec!["a.yaml", "more/*.yaml"]);
                assert!(args.source.no_builtin);
                assert_eq!(args.generated.as_deref(), Some("2025-12-26"));
                assert!(args.config.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_paths_metric() {
        let cli = Cli::parse_from(["attacktree", "paths", "--metric", "detection", "--json"]);
        match cli.command {
            Commands::Paths(args) => {
                assert_eq!(args.metric, Metric::DetectionRisk);
                assert!(args.json);
            }
            _ => panic!("expected paths"),
        }

        let cli = Cli::parse_from(["attacktree", "paths"]);
        match cli.command {
            Commands::Paths(args) => assert_eq!(args.metric, Metric::Difficulty),
            _ => panic!("expected paths"),
        }
    }

    #[test]
    fn test_parse_export_positional() {
        let cli = Cli::parse_from(["attacktree", "--no-color", "export", "G3", "-o", "dos.mmd"]);
        assert!(cli.no_color);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.tree, "G3");
                assert_eq!(args.output.as_deref(), Some("dos.mmd"));
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_rejects_unknown_metric() {
        assert!(Cli::try_parse_from(["attacktree", "paths", "--metric", "speed"]).is_err());
    }
}
