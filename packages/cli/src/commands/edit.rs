use crate::commands::{open_page, save_page};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{Action, CompositionStore, Dispatch};
use pagecraft_sections::{merged_props, validate};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Page document (JSON) to edit
    pub page: PathBuf,

    /// JSON array of actions to apply in order
    #[arg(short, long)]
    pub actions: Option<PathBuf>,

    /// Start from a registered page template before applying actions
    #[arg(short, long)]
    pub template: Option<String>,

    /// Write the result here instead of overwriting the page
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let (page, mut store) = open_page(&args.page, &config, cwd)?;

    println!("✏️  {} {}", "Editing".green().bold(), args.page.display());

    let mut actions = Vec::new();
    if let Some(template_id) = &args.template {
        let template = store
            .registry()
            .template(template_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown template: {}", template_id))?;
        actions.push(Action::ApplyTemplate { refs: template.sections.clone() });
    }
    if let Some(path) = &args.actions {
        actions.extend(read_actions(path)?);
    }

    let mut applied = 0;
    for action in actions {
        let label = action.describe();
        match store.dispatch(action) {
            Dispatch::Applied => {
                applied += 1;
                println!("   {} {}", "✓".green(), label);
            }
            Dispatch::Unchanged => println!("   {} {} (no change)", "-".dimmed(), label),
        }
    }

    report_schema_issues(&store);
    save_page(page, &store, args.out.as_deref())?;

    println!();
    println!("✨ {} {} action(s) applied", "Done".green().bold(), applied);
    println!(
        "   Sections: {}",
        store
            .state()
            .sections()
            .iter()
            .map(|s| store.registry().label_for(&s.section_id))
            .collect::<Vec<_>>()
            .join(" → ")
    );

    Ok(())
}

fn read_actions(path: &Path) -> Result<Vec<Action>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read actions {}", path.display()))?;
    let actions = serde_json::from_str(&content)
        .with_context(|| format!("Invalid actions file {}", path.display()))?;
    Ok(actions)
}

fn report_schema_issues(store: &CompositionStore) {
    for section in store.state().sections() {
        let Some(def) = store.registry().get_by_id(&section.section_id) else {
            println!(
                "   {} {} is not in the catalog and will not render",
                "Warning:".yellow(),
                section.section_id
            );
            continue;
        };

        for issue in validate(&def.props_schema, &merged_props(def, &section.props)) {
            println!("   {} {} ({}): {}", "Warning:".yellow(), def.name, section.id, issue);
        }
    }
}
