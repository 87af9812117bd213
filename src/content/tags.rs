//! Tag normalization and splitting

use serde_yaml::Value;

/// Tags as written in the front-matter: a single comma-separated string or a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTags {
    Text(String),
    List(Vec<String>),
}

impl Default for RawTags {
    fn default() -> Self {
        RawTags::List(Vec::new())
    }
}

impl RawTags {
    /// Read tags from a front-matter value.
    ///
    /// Scalars become `Text`, sequences become `List` (non-scalar items are
    /// dropped). Null and mappings hold no tags.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Sequence(items) => Some(RawTags::List(
                items.iter().filter_map(scalar_text).collect(),
            )),
            Value::Tagged(tagged) => Self::from_value(&tagged.value),
            other => scalar_text(other).map(RawTags::Text),
        }
    }
}

/// Textual form of a YAML scalar (`2024` -> `"2024"`); `None` for anything else
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Canonical slug of a tag, used both for URLs and for matching `/tag/<slug>`
pub fn normalize_tag(raw: &str) -> String {
    slug::slugify(raw)
}

/// Turn front-matter tags into a list.
///
/// A string is split on commas and every piece trimmed; empty pieces are kept.
/// A list is returned as written, without trimming.
pub fn split_tags(raw: &RawTags) -> Vec<String> {
    match raw {
        RawTags::Text(s) => s.split(',').map(|tag| tag.trim().to_string()).collect(),
        RawTags::List(tags) => tags.clone(),
    }
}

/// Default title for an article without one: `my-post` -> `My Post`
pub fn title_from_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
