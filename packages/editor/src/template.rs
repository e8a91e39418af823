//! # Template Expander
//!
//! Turns a list of section references into a fresh composition. A
//! reference to an unknown section is dropped; the rest still expand.

use crate::composition::PageSection;
use crate::id_generator::IDGenerator;
use pagecraft_sections::{SectionRegistry, TemplateSectionRef};

/// Expand template refs, in order, skipping unknown section ids
///
/// Each section gets the definition's defaults with the ref's props laid
/// over them key by key.
pub fn expand(
    registry: &SectionRegistry,
    refs: &[TemplateSectionRef],
    ids: &mut IDGenerator,
) -> Vec<PageSection> {
    refs.iter()
        .filter_map(|r| {
            let Some(def) = registry.get_by_id(&r.section_id) else {
                tracing::debug!(section_id = %r.section_id, "template ref dropped: unknown section");
                return None;
            };

            let mut props = def.default_props.clone();
            if let Some(overrides) = &r.props {
                for (key, value) in overrides {
                    props.insert(key.clone(), value.clone());
                }
            }

            Some(PageSection::new(ids.new_id(), r.section_id.clone(), props))
        })
        .collect()
}

/// Expand a registered page template; `None` if the template id is unknown
pub fn expand_template(
    registry: &SectionRegistry,
    template_id: &str,
    ids: &mut IDGenerator,
) -> Option<Vec<PageSection>> {
    let template = registry.template(template_id)?;
    Some(expand(registry, &template.sections, ids))
}
