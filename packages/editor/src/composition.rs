//! Placed sections
//!
//! A composition is an ordered `Vec<PageSection>`; position is the only
//! ordering there is. Selection is an index into it, never a reference.

use pagecraft_sections::Props;
use serde::{Deserialize, Serialize};

/// One placed instance of a section definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSection {
    /// Unique within its composition, stable across edits
    pub id: String,

    /// Registry id; may dangle if the catalog entry was removed
    pub section_id: String,

    #[serde(default)]
    pub props: Props,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_classes: Option<String>,
}

impl PageSection {
    pub fn new(id: impl Into<String>, section_id: impl Into<String>, props: Props) -> Self {
        Self {
            id: id.into(),
            section_id: section_id.into(),
            props,
            custom_classes: None,
        }
    }
}

/// Index of the section being edited, if any
pub type Selection = Option<usize>;

pub fn position_of(sections: &[PageSection], id: &str) -> Option<usize> {
    sections.iter().position(|s| s.id == id)
}
