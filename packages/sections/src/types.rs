//! Catalog data types
//!
//! Field names serialize in camelCase so catalog packages and persisted
//! pages share one JSON vocabulary.

use crate::category::{SectionCategory, TemplateCategory};
use serde::{Deserialize, Serialize};

/// Free-form section properties, keyed by prop name
pub type Props = serde_json::Map<String, serde_json::Value>;

/// Editor widget kind for a single prop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropFieldType {
    Text,
    Textarea,
    Richtext,
    Image,
    Images,
    Color,
    Select,
    Toggle,
    Url,
    Number,
    Items,
}

/// One choice of a `select` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// A typed, editable field in a section's prop schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropField {
    pub key: String,
    pub label: String,

    #[serde(rename = "type")]
    pub field_type: PropFieldType,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Choices for `select` fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,

    /// Shape of each entry for `items` fields (one level of nesting)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_fields: Vec<PropField>,
}

impl PropField {
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: PropFieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            required: false,
            placeholder: None,
            options: Vec::new(),
            item_fields: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_item_fields(mut self, item_fields: Vec<PropField>) -> Self {
        self.item_fields = item_fields;
        self
    }
}

/// Immutable catalog entry describing one reusable section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDefinition {
    pub id: String,
    pub category: SectionCategory,
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub default_props: Props,

    #[serde(default)]
    pub props_schema: Vec<PropField>,
}

impl SectionDefinition {
    pub fn new(id: impl Into<String>, category: SectionCategory, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            default_props: Props::new(),
            props_schema: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default_props(mut self, props: Props) -> Self {
        self.default_props = props;
        self
    }

    pub fn with_schema(mut self, schema: Vec<PropField>) -> Self {
        self.props_schema = schema;
        self
    }

    /// Case-insensitive substring match against name, description, and tags.
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Reference to a section inside a page template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSectionRef {
    pub section_id: String,

    /// Overrides applied on top of the definition's defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,
}

impl TemplateSectionRef {
    pub fn new(section_id: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            props: None,
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = Some(props);
        self
    }
}

/// Named, ordered list of section references used to seed a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTemplate {
    pub id: String,
    pub category: TemplateCategory,
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub sections: Vec<TemplateSectionRef>,
}
