mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use commands::links::LinksArgs;
use commands::progress::{ResetArgs, ToggleArgs};
use commands::projection::ProjectArgs;
use commands::theme::ThemeArgs;
use commands::BoardContext;

/// Daily grind board: categorized links, progress, and an earnings toy
#[derive(Parser)]
#[command(
    name = "grind",
    version,
    about = "Daily grind board: categorized links, progress, and an earnings toy",
    long_about = "A CLI for working through the grind board. Lists categorized \
                  external links, tracks per-link completion in a single local \
                  store, and projects hypothetical earnings with a linear or \
                  compounding formula."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Path to the local store file (default: platform data dir)
    #[arg(long, env = "GRIND_STORE", global = true)]
    store: Option<PathBuf>,

    /// Path to a custom board JSON file (default: built-in board)
    #[arg(long, env = "GRIND_BOARD", global = true)]
    board: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project hypothetical earnings (linear or compounding)
    Project(ProjectArgs),
    /// List the board, grouped by category
    Links(LinksArgs),
    /// List every tag on the board
    Tags,
    /// Flip completion state for a link
    Toggle(ToggleArgs),
    /// Clear all completion state
    Reset(ResetArgs),
    /// Progress summary: percent, level, per-category counts
    Stats,
    /// Show, set, or flip the color theme
    Theme(ThemeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Project(args) => commands::projection::run_project(args),
        Commands::Links(args) => BoardContext::resolve(cli.board.as_deref(), cli.store.as_deref())
            .and_then(|ctx| commands::links::run_links(args, &ctx)),
        Commands::Tags => BoardContext::resolve(cli.board.as_deref(), cli.store.as_deref())
            .and_then(|ctx| commands::links::run_tags(&ctx)),
        Commands::Toggle(args) => BoardContext::resolve(cli.board.as_deref(), cli.store.as_deref())
            .and_then(|ctx| commands::progress::run_toggle(args, &ctx)),
        Commands::Reset(args) => BoardContext::resolve(cli.board.as_deref(), cli.store.as_deref())
            .and_then(|ctx| commands::progress::run_reset(args, &ctx)),
        Commands::Stats => BoardContext::resolve(cli.board.as_deref(), cli.store.as_deref())
            .and_then(|ctx| commands::progress::run_stats(&ctx)),
        Commands::Theme(args) => BoardContext::resolve(cli.board.as_deref(), cli.store.as_deref())
            .and_then(|ctx| commands::theme::run_theme(args, &ctx)),
        Commands::Version => {
            println!("grind {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
