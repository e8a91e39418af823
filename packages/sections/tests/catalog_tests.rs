//! Integration tests for building a registry from catalog packages

use pagecraft_sections::{
    CatalogPackage, DuplicatePolicy, RegistryBuilder, RegistryError, SectionCategory,
    TemplateCategory,
};

const MARKETING: &str = r#"{
    "sections": [
        {
            "id": "hero-1",
            "category": "hero",
            "name": "Centered Hero",
            "description": "Headline, subheading and a call to action",
            "tags": ["landing", "headline"],
            "defaultProps": { "heading": "Build faster", "ctaLabel": "Get started" },
            "propsSchema": [
                { "key": "heading", "label": "Heading", "type": "text", "required": true },
                { "key": "ctaLabel", "label": "Button label", "type": "text" }
            ]
        },
        {
            "id": "pricing-1",
            "category": "pricing",
            "name": "Three Tiers",
            "tags": ["plans"]
        }
    ],
    "templates": [
        {
            "id": "saas",
            "category": "saas",
            "name": "SaaS",
            "sections": [
                { "sectionId": "hero-1" },
                { "sectionId": "pricing-1" }
            ]
        }
    ]
}"#;

const OVERRIDES: &str = r#"{
    "sections": [
        { "id": "hero-1", "category": "hero", "name": "Brand Hero" }
    ]
}"#;

#[test]
fn test_later_package_overrides_shared_id() {
    let mut builder = RegistryBuilder::new();
    builder
        .add_package(CatalogPackage::from_json(MARKETING).unwrap())
        .unwrap()
        .add_package(CatalogPackage::from_json(OVERRIDES).unwrap())
        .unwrap();
    let registry = builder.build();

    assert_eq!(registry.section_count(), 2);
    assert_eq!(registry.label_for("hero-1"), "Brand Hero");

    // Overridden entry stays first
    let first = registry.all_sections().next().unwrap();
    assert_eq!(first.id, "hero-1");
}

#[test]
fn test_strict_policy_rejects_override() {
    let mut builder = RegistryBuilder::with_policy(DuplicatePolicy::Reject);
    builder
        .add_package(CatalogPackage::from_json(MARKETING).unwrap())
        .unwrap();

    let err = builder
        .add_package(CatalogPackage::from_json(OVERRIDES).unwrap())
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateSection("hero-1".to_string()));
}

#[test]
fn test_picker_queries() {
    let mut builder = RegistryBuilder::new();
    builder
        .add_package(CatalogPackage::from_json(MARKETING).unwrap())
        .unwrap();
    let registry = builder.build();

    assert_eq!(registry.search("PLANS").len(), 1);
    assert_eq!(registry.search("call to action")[0].id, "hero-1");
    assert!(registry.search_in("plans", Some(SectionCategory::Hero)).is_empty());
    assert_eq!(registry.by_category(SectionCategory::Pricing).len(), 1);
    assert_eq!(registry.templates_by_category(TemplateCategory::Saas)[0].sections.len(), 2);
}
