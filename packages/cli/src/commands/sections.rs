use crate::commands::load_registry;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_sections::{section_categories, SectionCategory, SectionDefinition};

#[derive(Args, Debug)]
pub struct SectionsArgs {
    /// Only list sections in this category (e.g. hero, pricing)
    #[arg(short, long)]
    pub category: Option<SectionCategory>,

    /// Case-insensitive search over name, description, and tags
    #[arg(short, long, default_value = "")]
    pub search: String,
}

pub fn sections(args: SectionsArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let registry = load_registry(&config, cwd)?;

    let found = registry.search_in(&args.search, args.category);

    if found.is_empty() {
        println!("{}", "No sections found".yellow());
        return Ok(());
    }

    for info in section_categories() {
        let in_category: Vec<&&SectionDefinition> =
            found.iter().filter(|s| s.category == info.id).collect();
        if in_category.is_empty() {
            continue;
        }

        println!(
            "{} {}",
            info.label.bold(),
            format!("({})", in_category.len()).dimmed()
        );
        for section in in_category {
            print_section(section);
        }
        println!();
    }

    println!("   {} of {} sections", found.len(), registry.section_count());
    Ok(())
}

fn print_section(section: &SectionDefinition) {
    println!("   {}  {}", section.id.cyan(), section.name);
    if !section.description.is_empty() {
        println!("      {}", section.description.dimmed());
    }
    if !section.tags.is_empty() {
        println!("      {}", section.tags.join(", ").dimmed());
    }
}
