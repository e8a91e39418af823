//! # Section Registry
//!
//! Catalog of section definitions and page templates.
//!
//! ## Design
//!
//! - A [`RegistryBuilder`] collects every catalog package up front
//! - [`RegistryBuilder::build`] freezes it into a [`SectionRegistry`]
//! - The registry is read-only afterwards and safe to share across threads
//! - Iteration always follows registration order
//!
//! ## Duplicate ids
//!
//! Under [`DuplicatePolicy::Overwrite`] the last definition registered for
//! an id wins, but the entry keeps the position of the first registration.
//! [`DuplicatePolicy::Reject`] refuses the whole batch instead.

use crate::catalog::CatalogPackage;
use crate::category::{SectionCategory, TemplateCategory};
use crate::errors::RegistryError;
use crate::types::{PageTemplate, SectionDefinition};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What to do when an id is registered twice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Last write wins (logged)
    #[default]
    Overwrite,

    /// Fail registration
    Reject,
}

/// Collects definitions before the registry is frozen
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    policy: DuplicatePolicy,
    sections: IndexMap<String, SectionDefinition>,
    templates: IndexMap<String, PageTemplate>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Register a batch of section definitions
    ///
    /// With [`DuplicatePolicy::Reject`] the batch is checked as a whole and
    /// nothing is registered if any id collides.
    pub fn register(
        &mut self,
        defs: impl IntoIterator<Item = SectionDefinition>,
    ) -> Result<&mut Self, RegistryError> {
        let defs: Vec<SectionDefinition> = defs.into_iter().collect();

        if self.policy == DuplicatePolicy::Reject {
            let mut seen = HashSet::new();
            for def in &defs {
                if self.sections.contains_key(&def.id) || !seen.insert(def.id.as_str()) {
                    return Err(RegistryError::DuplicateSection(def.id.clone()));
                }
            }
        }

        for def in defs {
            let id = def.id.clone();
            if self.sections.insert(id.clone(), def).is_some() {
                tracing::warn!(section_id = %id, "section definition overwritten");
            }
        }

        Ok(self)
    }

    /// Register a batch of page templates
    pub fn register_templates(
        &mut self,
        templates: impl IntoIterator<Item = PageTemplate>,
    ) -> Result<&mut Self, RegistryError> {
        let templates: Vec<PageTemplate> = templates.into_iter().collect();

        if self.policy == DuplicatePolicy::Reject {
            let mut seen = HashSet::new();
            for tpl in &templates {
                if self.templates.contains_key(&tpl.id) || !seen.insert(tpl.id.as_str()) {
                    return Err(RegistryError::DuplicateTemplate(tpl.id.clone()));
                }
            }
        }

        for tpl in templates {
            let id = tpl.id.clone();
            if self.templates.insert(id.clone(), tpl).is_some() {
                tracing::warn!(template_id = %id, "page template overwritten");
            }
        }

        Ok(self)
    }

    /// Register everything a catalog package provides
    pub fn add_package(&mut self, package: CatalogPackage) -> Result<&mut Self, RegistryError> {
        self.register(package.sections)?;
        self.register_templates(package.templates)?;
        Ok(self)
    }

    /// Freeze into an immutable registry
    pub fn build(self) -> SectionRegistry {
        tracing::debug!(
            sections = self.sections.len(),
            templates = self.templates.len(),
            "section registry built"
        );

        SectionRegistry {
            sections: self.sections,
            templates: self.templates,
        }
    }
}

/// Immutable catalog of section definitions and page templates
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: IndexMap<String, SectionDefinition>,
    templates: IndexMap<String, PageTemplate>,
}

impl SectionRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&SectionDefinition> {
        self.sections.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sections.contains_key(id)
    }

    pub fn all_sections(&self) -> impl Iterator<Item = &SectionDefinition> {
        self.sections.values()
    }

    pub fn by_category(&self, category: SectionCategory) -> Vec<&SectionDefinition> {
        self.sections
            .values()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Case-insensitive substring search over name, description, and tags
    pub fn search(&self, query: &str) -> Vec<&SectionDefinition> {
        let needle = query.to_lowercase();
        self.sections
            .values()
            .filter(|s| s.matches(&needle))
            .collect()
    }

    /// Search narrowed to a category, as the section picker does
    ///
    /// A blank query lists the category (or everything).
    pub fn search_in(&self, query: &str, category: Option<SectionCategory>) -> Vec<&SectionDefinition> {
        let query = query.trim();
        let in_category = |s: &&SectionDefinition| category.map_or(true, |c| s.category == c);

        if query.is_empty() {
            self.sections.values().filter(in_category).collect()
        } else {
            self.search(query).into_iter().filter(in_category).collect()
        }
    }

    /// Display name for a section id, falling back to the id itself
    pub fn label_for<'a>(&'a self, section_id: &'a str) -> &'a str {
        self.get_by_id(section_id)
            .map(|s| s.name.as_str())
            .unwrap_or(section_id)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn template(&self, id: &str) -> Option<&PageTemplate> {
        self.templates.get(id)
    }

    pub fn all_templates(&self) -> impl Iterator<Item = &PageTemplate> {
        self.templates.values()
    }

    pub fn templates_by_category(&self, category: TemplateCategory) -> Vec<&PageTemplate> {
        self.templates
            .values()
            .filter(|t| t.category == category)
            .collect()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}
