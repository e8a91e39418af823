use crate::commands::{open_page, save_page};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{AiProposal, Dispatch};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AssistArgs {
    /// Page document (JSON) containing the section
    pub page: PathBuf,

    /// Instance id of the section to rewrite
    #[arg(short, long)]
    pub section: String,

    /// File holding the raw AI completion text
    #[arg(short, long)]
    pub completion: PathBuf,

    /// Merge the proposal into the page
    #[arg(long)]
    pub apply: bool,

    /// Only merge these keys (defaults to every changed key)
    #[arg(short, long, value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Write the result here instead of overwriting the page
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn assist(args: AssistArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let (page, mut store) = open_page(&args.page, &config, cwd)?;

    let section = store
        .state()
        .get(&args.section)
        .ok_or_else(|| anyhow::anyhow!("No section with id {} in {}", args.section, args.page.display()))?;
    let label = store.registry().label_for(&section.section_id).to_string();

    let content = std::fs::read_to_string(&args.completion)
        .with_context(|| format!("Failed to read completion {}", args.completion.display()))?;

    let proposal = match AiProposal::from_completion(&args.section, &section.props, &content) {
        Ok(proposal) => proposal,
        Err(err) => {
            tracing::debug!(error = %err, "completion rejected");
            anyhow::bail!(err.guidance());
        }
    };

    println!("🤖 {} {} ({})", "Proposal for".green().bold(), label, args.section);

    if !proposal.has_changes() {
        println!("   {}", "No visible changes detected. Try a different prompt.".yellow());
        return Ok(());
    }

    for key in &proposal.changed_keys {
        let before = section
            .props
            .get(key)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "(unset)".to_string());
        println!("   {}", key.bold());
        println!("     {} {}", "-".red(), before.red());
        println!("     {} {}", "+".green(), proposal.proposed[key].to_string().green());
    }

    if !args.apply {
        println!();
        println!("   Re-run with {} to merge these changes", "--apply".bold());
        return Ok(());
    }

    let action = if args.keys.is_empty() {
        proposal.accept_all()
    } else {
        proposal.accept(&args.keys)
    };

    if store.dispatch(action) == Dispatch::Unchanged {
        println!("   {}", "Nothing to merge".yellow());
        return Ok(());
    }
    save_page(page, &store, args.out.as_deref())?;

    println!();
    println!("✨ {} changes merged", "Done".green().bold());
    Ok(())
}
