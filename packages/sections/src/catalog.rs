//! Catalog packages
//!
//! A package is a JSON file bundling section definitions and page
//! templates:
//!
//! ```json
//! { "sections": [ ... ], "templates": [ ... ] }
//! ```

use crate::errors::CatalogError;
use crate::registry::{DuplicatePolicy, RegistryBuilder, SectionRegistry};
use crate::types::{PageTemplate, SectionDefinition};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogPackage {
    #[serde(default)]
    pub sections: Vec<SectionDefinition>,

    #[serde(default)]
    pub templates: Vec<PageTemplate>,
}

impl CatalogPackage {
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let package = Self::from_json(&source)?;
        tracing::info!(
            path = %path.display(),
            sections = package.sections.len(),
            templates = package.templates.len(),
            "loaded catalog package"
        );
        Ok(package)
    }

    /// Load several packages in order and build one registry from them
    pub fn load_all<P: AsRef<Path>>(
        paths: &[P],
        policy: DuplicatePolicy,
    ) -> Result<SectionRegistry, CatalogError> {
        let mut builder = RegistryBuilder::with_policy(policy);
        for path in paths {
            builder.add_package(Self::load(path)?)?;
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PACKAGE: &str = r#"{
        "sections": [
            { "id": "cta-1", "category": "cta", "name": "Simple CTA", "defaultProps": { "label": "Go" } }
        ],
        "templates": [
            {
                "id": "launch",
                "category": "landing",
                "name": "Launch",
                "sections": [ { "sectionId": "cta-1", "props": { "label": "Start" } } ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_package() {
        let package = CatalogPackage::from_json(PACKAGE).unwrap();
        assert_eq!(package.sections.len(), 1);
        assert_eq!(package.templates[0].sections[0].section_id, "cta-1");
    }

    #[test]
    fn test_sections_and_templates_are_optional() {
        let package = CatalogPackage::from_json("{}").unwrap();
        assert!(package.sections.is_empty());
        assert!(package.templates.is_empty());
    }

    #[test]
    fn test_load_all_from_files() {
        let mut first = tempfile::NamedTempFile::new().unwrap();
        first.write_all(PACKAGE.as_bytes()).unwrap();

        let mut second = tempfile::NamedTempFile::new().unwrap();
        second
            .write_all(br#"{ "sections": [ { "id": "faq-1", "category": "faq", "name": "FAQ" } ] }"#)
            .unwrap();

        let registry =
            CatalogPackage::load_all(&[first.path(), second.path()], DuplicatePolicy::Overwrite)
                .unwrap();
        assert_eq!(registry.section_count(), 2);
        assert_eq!(registry.template_count(), 1);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = CatalogPackage::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
