use attacktree::cli;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        git_hash = option_env!("GIT_HASH").unwrap_or("unknown"),
        build_date = option_env!("BUILD_DATE").unwrap_or("unknown"),
        "attacktree starting"
    );

    let quiet = cli.quiet;
    let result = match cli.command {
        cli::Commands::Generate(args) => cli::generate::handle_generate(args, quiet),
        cli::Commands::Paths(args) => cli::paths::handle_paths(args, quiet),
        cli::Commands::Export(args) => cli::export::handle_export(args),
        cli::Commands::Validate(args) => cli::validate::handle_validate(args, quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
