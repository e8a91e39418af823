use crate::commands::load_registry;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_sections::{PageTemplate, SectionRegistry, TemplateCategory};

#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Only list templates in this category (e.g. saas, realestate)
    #[arg(short, long)]
    pub category: Option<TemplateCategory>,
}

pub fn templates(args: TemplatesArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let registry = load_registry(&config, cwd)?;

    let found: Vec<&PageTemplate> = match args.category {
        Some(category) => registry.templates_by_category(category),
        None => registry.all_templates().collect(),
    };

    if found.is_empty() {
        println!("{}", "No templates found".yellow());
        return Ok(());
    }

    for template in &found {
        print_template(template, &registry);
    }

    println!("   {} of {} templates", found.len(), registry.template_count());
    Ok(())
}

fn print_template(template: &PageTemplate, registry: &SectionRegistry) {
    println!(
        "{}  {} {}",
        template.id.cyan(),
        template.name.bold(),
        format!("[{}]", template.category.label()).dimmed()
    );
    if !template.description.is_empty() {
        println!("   {}", template.description.dimmed());
    }

    for (i, section_ref) in template.sections.iter().enumerate() {
        let id = section_ref.section_id.as_str();
        if registry.contains(id) {
            println!("   {}. {}", i + 1, registry.label_for(id));
        } else {
            // skipped when the template is applied
            println!("   {}. {} {}", i + 1, id.red(), "(unknown section)".red());
        }
    }
    println!();
}
