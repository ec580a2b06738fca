//! Chapter command - print the stored HTML of one chapter

use crate::db::DocumentDb;
use crate::error::{Error, Result};
use crate::models::{content_text, parse_chapters_html, parse_metadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// HTML stored for one chapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterContent {
    pub id: i64,
    pub index: usize,
    pub path: String,
    pub html: String,
}

/// Look up chapter `index` of document `id`.
///
/// The index is the zero-based position in `metadata.chapters`.
pub async fn cmd_chapter(db: &DocumentDb, id: i64, index: usize) -> Result<ChapterContent> {
    info!("Reading chapter {} of document {}", index, id);

    let doc = db
        .get_document(id)
        .await?
        .ok_or(Error::DocumentNotFound(id))?;

    let metadata = parse_metadata(doc.id, &doc.metadata)?;
    let html = parse_chapters_html(doc.id, &doc.chapters_html)?;

    let entry = metadata
        .chapters
        .get(index)
        .ok_or(Error::ChapterOutOfRange {
            id,
            index,
            count: metadata.chapters.len(),
        })?;
    let path = entry
        .get("path")
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())
        .ok_or(Error::ChapterWithoutPath { id, index })?;

    let content = html.get(path).ok_or_else(|| Error::ChapterNotFound {
        id,
        path: path.to_string(),
    })?;

    Ok(ChapterContent {
        id,
        index,
        path: path.to_string(),
        html: content_text(content),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cmd_seed;
    use crate::db::tests::setup_test_db;

    const METADATA: &str = r#"{"chapters":[
        {"path":"ch1.xhtml","title":"Intro"},
        {"path":"ch2.xhtml","title":"Body"}
    ]}"#;

    #[tokio::test]
    async fn test_chapter_after_seed() {
        let (db, _tmp) = setup_test_db().await;
        db.insert_raw(5, METADATA, "{}").await;
        cmd_seed(&db, 5).await.unwrap();

        let chapter = cmd_chapter(&db, 5, 1).await.unwrap();
        assert_eq!(chapter.path, "ch2.xhtml");
        assert!(chapter.html.contains("<h1>Body</h1>"));
    }

    #[tokio::test]
    async fn test_chapter_errors() {
        let (db, _tmp) = setup_test_db().await;
        db.insert_raw(5, METADATA, r#"{"ch1.xhtml":"<p>one</p>"}"#)
            .await;

        assert!(matches!(
            cmd_chapter(&db, 5, 2).await.unwrap_err(),
            Error::ChapterOutOfRange {
                index: 2,
                count: 2,
                ..
            }
        ));
        assert!(matches!(
            cmd_chapter(&db, 5, 1).await.unwrap_err(),
            Error::ChapterNotFound { .. }
        ));
        assert!(matches!(
            cmd_chapter(&db, 6, 0).await.unwrap_err(),
            Error::DocumentNotFound(6)
        ));
        assert_eq!(cmd_chapter(&db, 5, 0).await.unwrap().html, "<p>one</p>");
    }

    #[tokio::test]
    async fn test_chapter_index_counts_pathless_entries() {
        let (db, _tmp) = setup_test_db().await;
        db.insert_raw(
            5,
            r#"{"chapters":[{"title":"Cover"},{"path":"a.xhtml","title":"A"}]}"#,
            r#"{"a.xhtml":"<p>a</p>"}"#,
        )
        .await;

        assert!(matches!(
            cmd_chapter(&db, 5, 0).await.unwrap_err(),
            Error::ChapterWithoutPath { id: 5, index: 0 }
        ));

        let chapter = cmd_chapter(&db, 5, 1).await.unwrap();
        assert_eq!(chapter.path, "a.xhtml");
        assert_eq!(chapter.html, "<p>a</p>");

        assert!(matches!(
            cmd_chapter(&db, 5, 2).await.unwrap_err(),
            Error::ChapterOutOfRange { count: 2, .. }
        ));
    }
}
