mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    assist, edit, prompt, sections, templates, AssistArgs, EditArgs, PromptArgs, SectionsArgs,
    TemplatesArgs,
};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Pagecraft CLI - compose pages from a catalog of sections
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog sections, optionally filtered
    Sections(SectionsArgs),

    /// List page templates
    Templates(TemplatesArgs),

    /// Apply editor actions to a page document
    Edit(EditArgs),

    /// Print the AI completion request for one section
    Prompt(PromptArgs),

    /// Review (and optionally merge) an AI completion for one section
    Assist(AssistArgs),
}

fn init_tracing(cwd: &str) {
    // A broken config is reported by the command itself
    let level = Config::load(cwd)
        .map(|config| config.log_level)
        .unwrap_or_else(|_| Config::default().log_level);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();
    init_tracing(&cwd);

    match cli.command {
        Command::Sections(args) => sections(args, &cwd),
        Command::Templates(args) => templates(args, &cwd),
        Command::Edit(args) => edit(args, &cwd),
        Command::Prompt(args) => prompt(args, &cwd),
        Command::Assist(args) => assist(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
