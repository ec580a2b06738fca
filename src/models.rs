//! Payload types for the JSON columns of a document row.

use crate::error::{DocumentField, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping from chapter path to HTML content, kept in stored order
pub type ChaptersHtml = Map<String, Value>;

/// Parsed `metadata` column.
///
/// Only `chapters` is interpreted; everything else is carried in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub chapters: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentMetadata {
    /// Book title, when the ingester recorded one
    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(Value::as_str)
    }

    /// Chapter entries that carry both a path and a title, in order
    pub fn descriptors(&self) -> impl Iterator<Item = ChapterDescriptor> + '_ {
        self.chapters.iter().filter_map(ChapterDescriptor::from_value)
    }

    /// Every string path listed in the chapter list, including untitled entries
    pub fn chapter_paths(&self) -> Vec<&str> {
        self.chapters
            .iter()
            .filter_map(|c| c.get("path").and_then(Value::as_str))
            .collect()
    }
}

/// A chapter entry from `metadata.chapters`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDescriptor {
    pub path: String,
    pub title: String,
}

impl ChapterDescriptor {
    /// Returns `None` unless `path` and `title` are both non-empty strings.
    pub fn from_value(value: &Value) -> Option<Self> {
        let path = non_empty_str(value, "path")?;
        let title = non_empty_str(value, "title")?;
        Some(Self {
            path: path.to_string(),
            title: title.to_string(),
        })
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Parse the `metadata` column of document `id`
pub fn parse_metadata(id: i64, raw: &str) -> Result<DocumentMetadata> {
    serde_json::from_str(raw).map_err(|source| Error::MalformedDocument {
        id,
        field: DocumentField::Metadata,
        source,
    })
}

/// Parse the `chapters_html` column of document `id`; anything but a JSON object is malformed
pub fn parse_chapters_html(id: i64, raw: &str) -> Result<ChaptersHtml> {
    serde_json::from_str(raw).map_err(|source| Error::MalformedDocument {
        id,
        field: DocumentField::ChaptersHtml,
        source,
    })
}

/// Chapter content as text. Non-string values are shown as JSON.
pub fn content_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// First `max_chars` characters of `text`
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_requires_path_and_title() {
        assert_eq!(
            ChapterDescriptor::from_value(&json!({"path": "ch1.xhtml", "title": "Intro"})),
            Some(ChapterDescriptor {
                path: "ch1.xhtml".to_string(),
                title: "Intro".to_string(),
            })
        );
        assert!(ChapterDescriptor::from_value(&json!({"path": "ch2.xhtml"})).is_none());
        assert!(ChapterDescriptor::from_value(&json!({"path": "", "title": "Empty"})).is_none());
        assert!(ChapterDescriptor::from_value(&json!({"path": 3, "title": "Number"})).is_none());
        assert!(ChapterDescriptor::from_value(&json!("ch3.xhtml")).is_none());
    }

    #[test]
    fn test_metadata_keeps_unknown_fields() {
        let meta = parse_metadata(
            1,
            r#"{"title":"Book","author":"A","chapters":[{"path":"a","title":"A"},{"path":"b"}]}"#,
        )
        .unwrap();
        assert_eq!(meta.title(), Some("Book"));
        assert_eq!(meta.chapters.len(), 2);
        assert_eq!(meta.descriptors().count(), 1);
        assert_eq!(meta.chapter_paths(), vec!["a", "b"]);
        assert_eq!(meta.extra.get("author"), Some(&json!("A")));
    }

    #[test]
    fn test_metadata_without_chapters_is_empty() {
        let meta = parse_metadata(1, r#"{"title":"Book"}"#).unwrap();
        assert!(meta.chapters.is_empty());
    }

    #[test]
    fn test_malformed_columns_are_typed_errors() {
        let err = parse_metadata(7, "not json").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedDocument {
                id: 7,
                field: DocumentField::Metadata,
                ..
            }
        ));

        let err = parse_chapters_html(7, "[1, 2]").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedDocument {
                field: DocumentField::ChaptersHtml,
                ..
            }
        ));
    }

    #[test]
    fn test_chapters_html_keeps_stored_order() {
        let html = parse_chapters_html(1, r#"{"z.xhtml":"z","a.xhtml":"a"}"#).unwrap();
        let keys: Vec<&String> = html.keys().collect();
        assert_eq!(keys, vec!["z.xhtml", "a.xhtml"]);
    }

    #[test]
    fn test_preview_counts_characters() {
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("hello", 3), "hel");
        assert_eq!(preview("héllo", 2), "hé");
        assert_eq!(content_text(&json!(42)), "42");
    }
}
