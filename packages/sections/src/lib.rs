//! # Pagecraft Sections
//!
//! The section catalog: definitions, page templates, and the registry that
//! serves them to the editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog packages (JSON)                     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ RegistryBuilder: collect + duplicate policy │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ SectionRegistry: immutable, shared via Arc  │
//! │  - lookup by id / category                  │
//! │  - search by name, description, tags        │
//! │  - page templates                           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The registry is built once, before any editing session starts. Nothing
//! registers itself as a side effect of being loaded.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_sections::{CatalogPackage, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! builder.add_package(CatalogPackage::load("catalog.json")?)?;
//! let registry = builder.build();
//!
//! let heroes = registry.search("hero");
//! ```

mod catalog;
mod category;
mod errors;
mod registry;
mod render;
mod schema;
mod types;

pub use catalog::CatalogPackage;
pub use category::{section_categories, CategoryInfo, SectionCategory, TemplateCategory};
pub use errors::{CatalogError, RegistryError};
pub use registry::{DuplicatePolicy, RegistryBuilder, SectionRegistry};
pub use render::{merged_props, RenderOutcome, RendererTable, SectionRenderer};
pub use schema::{
    add_list_item, blank_item, move_item, move_list_item, remove_list_item, update_list_item,
    validate, SchemaIssue,
};
pub use types::{
    PageTemplate, PropField, PropFieldType, Props, SectionDefinition, SelectOption,
    TemplateSectionRef,
};
