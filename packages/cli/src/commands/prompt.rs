use crate::commands::open_page;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use pagecraft_editor::{AiRequest, PageSection};
use pagecraft_sections::SectionRegistry;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Page document (JSON) containing the section
    pub page: PathBuf,

    /// Instance id of the section to rewrite
    #[arg(short, long)]
    pub section: String,

    /// What the operator wants changed
    #[arg(short, long)]
    pub instruction: String,

    #[arg(long, default_value_t = AiRequest::DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    #[arg(long, default_value_t = AiRequest::DEFAULT_TEMPERATURE)]
    pub temperature: f32,
}

/// Print the completion request for a section as JSON, ready for a transport
pub fn prompt(args: PromptArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let (_, store) = open_page(&args.page, &config, cwd)?;

    let instruction = args.instruction.trim();
    if instruction.is_empty() {
        anyhow::bail!("Instruction must not be empty");
    }

    let section = store
        .state()
        .get(&args.section)
        .ok_or_else(|| anyhow::anyhow!("No section with id {} in {}", args.section, args.page.display()))?;

    let request = AiRequest::new(build_prompt(store.registry(), section, instruction)?)
        .with_max_tokens(args.max_tokens)
        .with_temperature(args.temperature);

    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn build_prompt(registry: &SectionRegistry, section: &PageSection, instruction: &str) -> Result<String> {
    let subject = match registry.get_by_id(&section.section_id) {
        Some(def) if !def.description.is_empty() => format!("\"{}\" ({})", def.name, def.description),
        Some(def) => format!("\"{}\"", def.name),
        None => format!("\"{}\"", section.section_id),
    };

    Ok(format!(
        "You are a content assistant for a page builder, editing a {subject} section.\n\n\
         Current section props (JSON):\n{props}\n\n\
         User instruction: {instruction}\n\n\
         Reply with ONLY a valid JSON object holding the updated props. Keep the same keys \
         and structure and change only text/content values as asked. No explanation.",
        props = serde_json::to_string_pretty(&section.props)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_sections::{Props, RegistryBuilder, SectionCategory, SectionDefinition};
    use serde_json::json;

    #[test]
    fn test_prompt_names_section_and_embeds_props() {
        let mut builder = RegistryBuilder::new();
        builder
            .register(vec![SectionDefinition::new("faq-1", SectionCategory::Faq, "FAQ Accordion")
                .with_description("Collapsible questions")])
            .unwrap();
        let registry = builder.build();

        let props: Props = json!({ "heading": "Questions" }).as_object().cloned().unwrap();
        let section = PageSection::new("s_1", "faq-1", props);

        let text = build_prompt(&registry, &section, "Make it friendlier").unwrap();
        assert!(text.contains("\"FAQ Accordion\" (Collapsible questions)"));
        assert!(text.contains("\"heading\": \"Questions\""));
        assert!(text.contains("User instruction: Make it friendlier"));
    }

    #[test]
    fn test_prompt_falls_back_to_section_id() {
        let registry = RegistryBuilder::new().build();
        let section = PageSection::new("s_1", "retired-1", Props::new());

        let text = build_prompt(&registry, &section, "Shorter").unwrap();
        assert!(text.contains("editing a \"retired-1\" section"));
    }
}
