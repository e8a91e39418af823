//! # Page Documents
//!
//! The persisted page record. Only `sections` belongs to the editor; every
//! other field (title, slug, status, template, SEO, ...) is carried through
//! untouched.
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Save
//!   ↓      ↓      ↓
//! File  Sections File
//! ```

use crate::composition::PageSection;
use crate::errors::EditorError;
use crate::store::EditorState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Publication status stored alongside a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Draft,
    Published,
    Archived,
}

/// Persisted page: sections plus opaque metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub sections: Vec<PageSection>,

    #[serde(flatten)]
    pub metadata: serde_json::Map<String, Value>,
}

impl PageDocument {
    pub fn from_json(source: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title").and_then(Value::as_str)
    }

    /// Status, if present and recognized
    pub fn status(&self) -> Option<PageStatus> {
        self.metadata
            .get("status")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Fresh editor state over these sections, nothing selected
    pub fn editor_state(&self) -> EditorState {
        EditorState::new(self.sections.clone())
    }
}

/// File-backed page document
#[derive(Debug)]
pub struct PageFile {
    pub path: PathBuf,

    /// Increments each time the sections change
    pub version: u64,

    document: PageDocument,
    dirty: bool,
}

impl PageFile {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, EditorError> {
        let path = path.into();
        let source = std::fs::read_to_string(&path)?;
        let document = PageDocument::from_json(&source)?;

        tracing::debug!(path = %path.display(), sections = document.sections.len(), "page loaded");

        Ok(Self {
            path,
            version: 0,
            document,
            dirty: false,
        })
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn sections(&self) -> &[PageSection] {
        &self.document.sections
    }

    /// Replace the sections; metadata is left alone
    pub fn replace_sections(&mut self, sections: Vec<PageSection>) {
        if sections != self.document.sections {
            self.document.sections = sections;
            self.version += 1;
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn save(&mut self) -> Result<(), EditorError> {
        std::fs::write(&self.path, self.document.to_json_pretty()?)?;
        self.dirty = false;
        Ok(())
    }

    /// Write to another path; the file stays bound to its original path
    pub fn save_as(&self, path: &Path) -> Result<(), EditorError> {
        std::fs::write(path, self.document.to_json_pretty()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_sections::Props;
    use serde_json::json;

    const PAGE: &str = r#"{
        "title": "Home",
        "slug": "home",
        "status": "published",
        "seo": { "description": "Welcome" },
        "sections": [
            { "id": "s_1", "sectionId": "hero-1", "props": { "heading": "Hi" } },
            { "id": "s_2", "sectionId": "faq-1", "props": {}, "customClasses": "bg-white" }
        ]
    }"#;

    #[test]
    fn test_metadata_round_trips_untouched() {
        let doc = PageDocument::from_json(PAGE).unwrap();

        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.title(), Some("Home"));
        assert_eq!(doc.status(), Some(PageStatus::Published));
        assert_eq!(doc.sections[1].custom_classes.as_deref(), Some("bg-white"));

        let value: Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["seo"], json!({ "description": "Welcome" }));
        assert_eq!(value["slug"], "home");
    }

    #[test]
    fn test_unknown_status_is_none() {
        let doc = PageDocument::from_json(r#"{ "status": "scheduled" }"#).unwrap();
        assert_eq!(doc.status(), None);
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn test_file_dirty_tracking() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), PAGE).unwrap();

        let mut page = PageFile::load(file.path()).unwrap();
        assert!(!page.is_dirty());

        page.replace_sections(page.sections().to_vec());
        assert!(!page.is_dirty());
        assert_eq!(page.version, 0);

        page.replace_sections(vec![PageSection::new("s_9", "cta-1", Props::new())]);
        assert!(page.is_dirty());
        assert_eq!(page.version, 1);

        page.save().unwrap();
        assert!(!page.is_dirty());

        let reloaded = PageFile::load(file.path()).unwrap();
        assert_eq!(reloaded.sections()[0].id, "s_9");
        assert_eq!(reloaded.document().title(), Some("Home"));
    }
}
