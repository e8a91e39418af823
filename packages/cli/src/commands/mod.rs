pub mod assist;
pub mod edit;
pub mod prompt;
pub mod sections;
pub mod templates;

pub use assist::{assist, AssistArgs};
pub use edit::{edit, EditArgs};
pub use prompt::{prompt, PromptArgs};
pub use sections::{sections, SectionsArgs};
pub use templates::{templates, TemplatesArgs};

use crate::config::Config;
use anyhow::{Context, Result};
use pagecraft_editor::{CompositionStore, IDGenerator, PageFile};
use pagecraft_sections::{CatalogPackage, SectionRegistry};
use std::path::Path;
use std::sync::Arc;

/// Build the registry from every catalog listed in the config
pub(crate) fn load_registry(config: &Config, cwd: &str) -> Result<Arc<SectionRegistry>> {
    let paths = config.catalog_paths(cwd);
    let registry = CatalogPackage::load_all(&paths, config.duplicate_policy)
        .context("Failed to load section catalogs")?;
    Ok(Arc::new(registry))
}

/// Open a page file and a store over its sections
pub(crate) fn open_page(
    path: &Path,
    config: &Config,
    cwd: &str,
) -> Result<(PageFile, CompositionStore)> {
    let registry = load_registry(config, cwd)?;
    let page = PageFile::load(path)
        .with_context(|| format!("Failed to open page {}", path.display()))?;

    let store = CompositionStore::with_state(registry, page.document().editor_state())
        .with_history_depth(config.history_depth)
        .with_id_generator(IDGenerator::new(&config.id_prefix));

    Ok((page, store))
}

/// Write the store's sections back, to `out` if given
pub(crate) fn save_page(
    mut page: PageFile,
    store: &CompositionStore,
    out: Option<&Path>,
) -> Result<()> {
    page.replace_sections(store.state().sections().to_vec());

    match out {
        Some(out) => page.save_as(out)?,
        None if page.is_dirty() => page.save()?,
        None => {}
    }
    Ok(())
}
