//! Normalization of text-list fields.
//!
//! The content API is inconsistent about paragraph-style fields. The same
//! logical field may arrive as:
//!
//! - a bare string: `"One paragraph"`
//! - a list of strings: `["A", "B"]`
//! - a list of single-field objects: `[{"paragraph": "A"}, {"step": "B"}]`
//!
//! [`TextList`] accepts all three and always holds an ordered list of
//! strings. List items that carry no text (`null`, `{"paragraph": null}`,
//! an object with none of the known keys) are dropped rather than failing
//! the enclosing document. It serializes back as a plain JSON array.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// An ordered list of text blocks (paragraphs, steps, bullet points).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TextList(Vec<String>);

impl TextList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for TextList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl From<&str> for TextList {
    fn from(item: &str) -> Self {
        Self(vec![item.to_string()])
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTextList {
    One(String),
    Many(Vec<RawTextItem>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTextItem {
    Plain(String),
    Tagged(TaggedText),
    Other(IgnoredAny),
}

/// `{"paragraph": ...}`, `{"step": ...}` or `{"text": ...}`.
#[derive(Deserialize)]
struct TaggedText {
    #[serde(default, alias = "step", alias = "text")]
    paragraph: Option<String>,
}

impl<'de> Deserialize<'de> for TextList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = match RawTextList::deserialize(deserializer)? {
            RawTextList::One(item) => vec![item],
            RawTextList::Many(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    RawTextItem::Plain(s) => Some(s),
                    RawTextItem::Tagged(t) => t.paragraph,
                    RawTextItem::Other(_) => None,
                })
                .collect(),
        };
        Ok(Self(items))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> TextList {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn bare_string_becomes_single_element() {
        assert_eq!(parse(json!("X")), TextList::new(["X"]));
    }

    #[test]
    fn string_sequence_is_unchanged() {
        assert_eq!(parse(json!(["A", "B"])), TextList::new(["A", "B"]));
    }

    #[test]
    fn tagged_objects_are_flattened_in_order() {
        let list = parse(json!([
            {"paragraph": "First"},
            {"step": "Second"},
            {"text": "Third"}
        ]));
        assert_eq!(list.as_slice(), ["First", "Second", "Third"]);
    }

    #[test]
    fn mixed_items_are_accepted() {
        let list = parse(json!(["Plain", {"paragraph": "Tagged"}]));
        assert_eq!(list.as_slice(), ["Plain", "Tagged"]);
    }

    #[test]
    fn non_text_field_is_rejected() {
        assert!(serde_json::from_value::<TextList>(json!(42)).is_err());
        assert!(serde_json::from_value::<TextList>(json!({"paragraph": "x"})).is_err());
    }

    #[test]
    fn textless_items_are_dropped() {
        let list = parse(json!([
            "Kept",
            null,
            {"paragraph": null},
            {"other": "x"},
            7,
            {"step": "Also kept"}
        ]));
        assert_eq!(list.as_slice(), ["Kept", "Also kept"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let value = serde_json::to_value(TextList::new(["A", "B"])).unwrap();
        assert_eq!(value, json!(["A", "B"]));
    }
}
