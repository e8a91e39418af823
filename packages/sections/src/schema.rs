//! Prop schema helpers
//!
//! Validation here is advisory: the editor surfaces issues next to fields,
//! but the composition store accepts any props.

use crate::types::{PropField, PropFieldType, Props};
use serde_json::Value;
use thiserror::Error;

/// Problem found when checking props against a schema
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaIssue {
    #[error("{key} is required")]
    MissingRequired { key: String },

    #[error("{key}: {value:?} is not one of the allowed options")]
    InvalidOption { key: String, value: String },

    #[error("{key} must be a list")]
    ExpectedList { key: String },
}

/// Empty entry for an `items` field: toggles start false, numbers 0, the rest ""
pub fn blank_item(item_fields: &[PropField]) -> Props {
    item_fields
        .iter()
        .map(|f| {
            let value = match f.field_type {
                PropFieldType::Toggle => Value::Bool(false),
                PropFieldType::Number => Value::from(0),
                _ => Value::String(String::new()),
            };
            (f.key.clone(), value)
        })
        .collect()
}

/// Check props against a schema, returning every issue in schema order
pub fn validate(schema: &[PropField], props: &Props) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    check_fields(schema, props, "", &mut issues);
    issues
}

fn check_fields(schema: &[PropField], props: &Props, prefix: &str, issues: &mut Vec<SchemaIssue>) {
    for field in schema {
        let key = format!("{}{}", prefix, field.key);
        let value = props.get(&field.key);

        if field.required && is_blank(value) {
            issues.push(SchemaIssue::MissingRequired { key });
            continue;
        }

        let Some(value) = value.filter(|v| !v.is_null()) else {
            continue;
        };

        match field.field_type {
            PropFieldType::Select if !field.options.is_empty() => {
                if let Some(s) = value.as_str() {
                    if !field.options.iter().any(|o| o.value == s) {
                        issues.push(SchemaIssue::InvalidOption {
                            key,
                            value: s.to_string(),
                        });
                    }
                }
            }
            PropFieldType::Images => {
                if !value.is_array() {
                    issues.push(SchemaIssue::ExpectedList { key });
                }
            }
            PropFieldType::Items => match value.as_array() {
                Some(items) => {
                    for (i, item) in items.iter().enumerate() {
                        if let Some(item) = item.as_object() {
                            let prefix = format!("{}[{}].", key, i);
                            check_fields(&field.item_fields, item, &prefix, issues);
                        }
                    }
                }
                None => issues.push(SchemaIssue::ExpectedList { key }),
            },
            _ => {}
        }
    }
}

/// Relocate the element at `from` to `to` (array move, not swap). Both must be in range.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

/// Append a blank entry to an `items` field
///
/// A missing or non-list value is treated as an empty list.
pub fn add_list_item(props: &Props, field: &PropField) -> Props {
    let mut items = list_at(props, &field.key);
    items.push(Value::Object(blank_item(&field.item_fields)));
    with_list(props, &field.key, items)
}

/// Drop the entry at `index`; out of range is a no-op
pub fn remove_list_item(props: &Props, key: &str, index: usize) -> Props {
    let mut items = list_at(props, key);
    if index >= items.len() {
        return props.clone();
    }
    items.remove(index);
    with_list(props, key, items)
}

/// Set one sub-key of the entry at `index`
///
/// Out of range indices and entries that are not objects are left alone.
pub fn update_list_item(
    props: &Props,
    key: &str,
    index: usize,
    sub_key: &str,
    value: Value,
) -> Props {
    let mut items = list_at(props, key);
    let Some(Value::Object(item)) = items.get_mut(index) else {
        return props.clone();
    };
    item.insert(sub_key.to_string(), value);
    with_list(props, key, items)
}

/// Move the entry at `from` to `to`; out of range or equal indices are a no-op
pub fn move_list_item(props: &Props, key: &str, from: usize, to: usize) -> Props {
    let mut items = list_at(props, key);
    if from == to || from >= items.len() || to >= items.len() {
        return props.clone();
    }
    move_item(&mut items, from, to);
    with_list(props, key, items)
}

fn list_at(props: &Props, key: &str) -> Vec<Value> {
    match props.get(key) {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

fn with_list(props: &Props, key: &str, items: Vec<Value>) -> Props {
    let mut next = props.clone();
    next.insert(key.to_string(), Value::Array(items));
    next
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SelectOption;
    use serde_json::json;

    fn props(value: Value) -> Props {
        value.as_object().cloned().unwrap()
    }

    fn schema() -> Vec<PropField> {
        vec![
            PropField::new("heading", "Heading", PropFieldType::Text).required(),
            PropField::new("align", "Alignment", PropFieldType::Select).with_options(vec![
                SelectOption { label: "Left".into(), value: "left".into() },
                SelectOption { label: "Center".into(), value: "center".into() },
            ]),
            PropField::new("features", "Features", PropFieldType::Items).with_item_fields(vec![
                PropField::new("title", "Title", PropFieldType::Text).required(),
                PropField::new("highlight", "Highlight", PropFieldType::Toggle),
                PropField::new("order", "Order", PropFieldType::Number),
            ]),
        ]
    }

    #[test]
    fn test_blank_item_defaults_by_type() {
        let schema = schema();
        let item = blank_item(&schema[2].item_fields);
        assert_eq!(Value::Object(item), json!({ "title": "", "highlight": false, "order": 0 }));
    }

    #[test]
    fn test_valid_props_have_no_issues() {
        let props = props(json!({
            "heading": "Hello",
            "align": "center",
            "features": [ { "title": "Fast" } ]
        }));
        assert!(validate(&schema(), &props).is_empty());
    }

    #[test]
    fn test_reports_each_issue() {
        let props = props(json!({
            "heading": "  ",
            "align": "right",
            "features": [ { "title": "Ok" }, { "title": "" } ]
        }));

        let issues = validate(&schema(), &props);
        assert_eq!(
            issues,
            vec![
                SchemaIssue::MissingRequired { key: "heading".into() },
                SchemaIssue::InvalidOption { key: "align".into(), value: "right".into() },
                SchemaIssue::MissingRequired { key: "features[1].title".into() },
            ]
        );
    }

    #[test]
    fn test_items_must_be_list() {
        let props = props(json!({ "heading": "x", "features": "nope" }));
        let issues = validate(&schema(), &props);
        assert_eq!(issues, vec![SchemaIssue::ExpectedList { key: "features".into() }]);
        assert_eq!(issues[0].to_string(), "features must be a list");
    }

    fn features(titles: &[&str]) -> Props {
        let items: Vec<Value> = titles.iter().map(|t| json!({ "title": t })).collect();
        props(json!({ "heading": "Why us", "features": items }))
    }

    fn titles(props: &Props) -> Vec<&str> {
        props["features"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["title"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_add_list_item_appends_blank() {
        let schema = schema();
        let added = add_list_item(&features(&["Fast"]), &schema[2]);

        assert_eq!(titles(&added), vec!["Fast", ""]);
        assert_eq!(added["features"][1], json!({ "title": "", "highlight": false, "order": 0 }));
        assert_eq!(added["heading"], "Why us");

        let from_nothing = add_list_item(&props(json!({ "features": "broken" })), &schema[2]);
        assert_eq!(from_nothing["features"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_list_item() {
        let start = features(&["a", "b", "c"]);
        assert_eq!(titles(&remove_list_item(&start, "features", 1)), vec!["a", "c"]);
        assert_eq!(remove_list_item(&start, "features", 3), start);
        assert_eq!(remove_list_item(&start, "missing", 0), start);
    }

    #[test]
    fn test_update_list_item_sets_one_sub_key() {
        let start = features(&["a", "b"]);
        let updated = update_list_item(&start, "features", 1, "highlight", json!(true));

        assert_eq!(updated["features"][1], json!({ "title": "b", "highlight": true }));
        assert_eq!(updated["features"][0], json!({ "title": "a" }));
        assert_eq!(update_list_item(&start, "features", 2, "title", json!("x")), start);

        let scalars = props(json!({ "features": [1, 2] }));
        assert_eq!(update_list_item(&scalars, "features", 0, "title", json!("x")), scalars);
    }

    #[test]
    fn test_move_list_item_is_array_move() {
        let start = features(&["a", "b", "c", "d"]);

        assert_eq!(titles(&move_list_item(&start, "features", 0, 2)), vec!["b", "c", "a", "d"]);
        assert_eq!(titles(&move_list_item(&start, "features", 3, 1)), vec!["a", "d", "b", "c"]);
        assert_eq!(move_list_item(&start, "features", 1, 1), start);
        assert_eq!(move_list_item(&start, "features", 0, 4), start);
        assert_eq!(move_list_item(&start, "features", 4, 0), start);
    }
}
