//! # AI Patch Merger
//!
//! Turns a free-form completion into a props proposal, diffs it against the
//! section's current props, and merges the keys the operator accepted.
//!
//! ## Parsing
//!
//! Strategies are tried in order; the first one that yields a JSON object
//! wins:
//!
//! 1. A fenced code block (```` ```json ... ``` ```` or plain ```` ``` ````)
//! 2. A bare object: first `{` through last `}`
//! 3. The whole trimmed text
//!
//! ## Merging
//!
//! Merge, not replace: keys the proposal does not mention, and keys the
//! operator did not accept, keep their current values.

use crate::errors::AiError;
use pagecraft_sections::Props;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Which parse strategy produced the proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    FencedBlock,
    BareObject,
    WholeText,
}

fn fenced_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("fenced block pattern"))
}

fn bare_object() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("bare object pattern"))
}

/// Extract a props object from completion text
pub fn parse_completion(text: &str) -> Result<Props, AiError> {
    parse_completion_traced(text).map(|(props, _)| props)
}

/// Like [`parse_completion`], also reporting the winning strategy
pub fn parse_completion_traced(text: &str) -> Result<(Props, ParseStrategy), AiError> {
    let text = text.trim();

    let fenced = fenced_block()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim());
    if let Some(props) = fenced.and_then(as_object) {
        return Ok((props, ParseStrategy::FencedBlock));
    }

    let bare = bare_object().find(text).map(|m| m.as_str());
    if let Some(props) = bare.and_then(as_object) {
        return Ok((props, ParseStrategy::BareObject));
    }

    if let Some(props) = as_object(text) {
        return Ok((props, ParseStrategy::WholeText));
    }

    tracing::debug!(len = text.len(), "completion did not contain a JSON object");
    Err(AiError::MalformedResponse)
}

fn as_object(candidate: &str) -> Option<Props> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Keys of `proposed` whose value differs from `current`, in key order
///
/// A key missing from `current` always counts as changed, even when the
/// proposal sets it to `null`.
pub fn changed_keys(current: &Props, proposed: &Props) -> Vec<String> {
    proposed
        .iter()
        .filter(|(key, value)| match current.get(key.as_str()) {
            Some(existing) => !values_equal(existing, value),
            None => true,
        })
        .map(|(key, _)| key.clone())
        .collect()
}

/// Structural equality as canonical JSON text would see it: numbers compare
/// by value, so `1` and `1.0` are equal.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                x == y
            } else if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                x == y
            } else {
                x.as_f64() == y.as_f64()
            }
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

/// `current` with each accepted key replaced by its proposed value
pub fn merge<I, S>(current: &Props, proposed: &Props, accepted: I) -> Props
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let accepted: HashSet<String> = accepted.into_iter().map(|k| k.as_ref().to_string()).collect();

    let mut merged = current.clone();
    for (key, value) in proposed {
        if accepted.contains(key) {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Merge every changed key (the default "Apply Changes" action)
pub fn merge_all(current: &Props, proposed: &Props) -> Props {
    merge(current, proposed, changed_keys(current, proposed))
}
