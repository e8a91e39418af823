//! # Renderer Dispatch
//!
//! Section rendering lives outside the engine. Hosts register one renderer
//! per section id in a [`RendererTable`]; the engine only hands over
//! `(props, custom_classes)` and never looks at the output type.

use crate::registry::SectionRegistry;
use crate::types::{Props, SectionDefinition};
use std::collections::HashMap;

/// Renders one section kind into some host-specific output
pub trait SectionRenderer<O> {
    fn render(&self, props: &Props, custom_classes: Option<&str>) -> O;
}

impl<O, F> SectionRenderer<O> for F
where
    F: Fn(&Props, Option<&str>) -> O,
{
    fn render(&self, props: &Props, custom_classes: Option<&str>) -> O {
        self(props, custom_classes)
    }
}

/// Result of rendering one placed section
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome<O> {
    Rendered(O),

    /// The section id is not in the registry (the catalog entry went away)
    UnknownSection(String),

    /// The definition exists but no renderer was registered for it
    MissingRenderer(String),
}

/// Lookup table from section id to renderer
pub struct RendererTable<O> {
    renderers: HashMap<String, Box<dyn SectionRenderer<O> + Send + Sync>>,
}

impl<O> RendererTable<O> {
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    pub fn register<R>(&mut self, section_id: impl Into<String>, renderer: R) -> &mut Self
    where
        R: SectionRenderer<O> + Send + Sync + 'static,
    {
        self.renderers.insert(section_id.into(), Box::new(renderer));
        self
    }

    pub fn contains(&self, section_id: &str) -> bool {
        self.renderers.contains_key(section_id)
    }

    /// Render a placed section with the definition's defaults filled in
    pub fn render_section(
        &self,
        registry: &SectionRegistry,
        section_id: &str,
        props: &Props,
        custom_classes: Option<&str>,
    ) -> RenderOutcome<O> {
        let Some(def) = registry.get_by_id(section_id) else {
            tracing::debug!(section_id, "render skipped: unknown section");
            return RenderOutcome::UnknownSection(section_id.to_string());
        };

        match self.renderers.get(section_id) {
            Some(renderer) => {
                RenderOutcome::Rendered(renderer.render(&merged_props(def, props), custom_classes))
            }
            None => RenderOutcome::MissingRenderer(section_id.to_string()),
        }
    }
}

impl<O> Default for RendererTable<O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Definition defaults overlaid with instance props (instance wins)
pub fn merged_props(def: &SectionDefinition, props: &Props) -> Props {
    let mut merged = def.default_props.clone();
    for (key, value) in props {
        merged.insert(key.clone(), value.clone());
    }
    merged
}
