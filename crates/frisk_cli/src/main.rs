//! # Commands
//!
//! - `frisk scan` - Scan a directory tree for leaked secrets
//! - `frisk rules` - List detection rules

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use console::style;

use crate::ui::colors;

const REPO_URL: &str = "https://github.com/spikermint/frisk";

#[derive(Debug, Parser)]
#[command(
    name = "frisk",
    version,
    styles = ui::clap_styles(),
    arg_required_else_help = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(visible_alias = "s")]
    Scan(ScanArgs),

    #[command(visible_alias = "r")]
    Rules(RulesArgs),
}

/// Arguments for the `frisk scan` command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Directory to scan for secrets.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output findings as JSON.
    #[arg(long)]
    pub json: bool,

    /// Exit with code 1 when secrets are found.
    #[arg(long)]
    pub fail_on_detect: bool,
}

/// Arguments for the `frisk rules` command.
#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// Filter rules by group name.
    #[arg(short, long)]
    pub group: Option<String>,

    /// Filter rules by severity level.
    #[arg(short, long)]
    pub severity: Option<String>,

    /// Show rule details including regex and keywords.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).without_time())
            .with(EnvFilter::from_default_env())
            .init();
    }

    let cli = parse_cli();

    if let Err(e) = run(cli.command) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(ui::exit::ERROR);
    }
}

fn parse_cli() -> Cli {
    let cmd = Cli::command().about(build_about()).after_help(build_after_help());

    let matches = cmd.get_matches();

    #[expect(clippy::expect_used, reason = "clap already validated args; this cannot fail")]
    Cli::from_arg_matches(&matches).expect("failed to parse arguments")
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Scan(args) => commands::scan::run(&args),
        Command::Rules(args) => {
            commands::rules::run(args.group.as_deref(), args.severity.as_deref(), args.verbose)
        }
    }
}

fn build_about() -> String {
    format!(
        r"
  {} is a fast, local-first secret-leak scanner for source trees.

  Catches AWS keys, GitHub tokens, hardcoded API keys, and private
  key material before they reach your repository. Works offline.",
        colors::accent().apply_to("frisk").bold()
    )
}

fn build_after_help() -> String {
    format!(
        r"
  {}
    frisk scan                     Scan the current directory
    frisk scan src/                Scan a specific path
    frisk scan . --json            Output findings as JSON
    frisk scan . --fail-on-detect  Exit 1 when secrets are found
    frisk rules                    List detection rules

  Learn more: {}",
        style("Examples:").bold(),
        colors::accent().apply_to(REPO_URL).underlined()
    )
}
