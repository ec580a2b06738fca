//! Inspect command - list the chapter keys stored for a document

use crate::config::Config;
use crate::db::DocumentDb;
use crate::error::Result;
use crate::models::parse_chapters_html;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Chapter keys found in a document's `chapters_html`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectReport {
    pub id: i64,
    pub chapter_paths: Vec<String>,
    pub chapter_count: usize,
}

/// Inspect the configured document. `None` when the row does not exist.
pub async fn cmd_inspect(config: &Config, db: &DocumentDb) -> Result<Option<InspectReport>> {
    let id = config.inspect_document_id;
    info!("Inspecting document {}", id);

    let Some(doc) = db.get_document(id).await? else {
        return Ok(None);
    };

    let html = parse_chapters_html(doc.id, &doc.chapters_html)?;
    let chapter_paths: Vec<String> = html.keys().cloned().collect();

    Ok(Some(InspectReport {
        id: doc.id,
        chapter_count: chapter_paths.len(),
        chapter_paths,
    }))
}

/// Print inspection result to console
pub fn print_inspect_report(report: &InspectReport) {
    println!("ID: {}", report.id);
    println!("Chapter paths: {:?}", report.chapter_paths);
    println!("Number of chapters with HTML: {}", report.chapter_count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tests::setup_test_db;
    use crate::error::Error;

    #[tokio::test]
    async fn test_inspect_lists_keys_and_count() {
        let (db, _tmp) = setup_test_db().await;
        db.insert_raw(
            1,
            "{}",
            r#"{"ch1.xhtml":"<p>1</p>","ch2.xhtml":"<p>2</p>","ch3.xhtml":"<p>3</p>"}"#,
        )
        .await;

        let report = cmd_inspect(&Config::default(), &db).await.unwrap().unwrap();
        assert_eq!(report.id, 1);
        assert_eq!(report.chapter_count, 3);
        assert_eq!(
            report.chapter_paths,
            vec!["ch1.xhtml", "ch2.xhtml", "ch3.xhtml"]
        );
    }

    #[tokio::test]
    async fn test_inspect_missing_document() {
        let (db, _tmp) = setup_test_db().await;
        db.insert_raw(2, "{}", "{}").await;

        assert!(cmd_inspect(&Config::default(), &db).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_inspect_uses_configured_id() {
        let (db, _tmp) = setup_test_db().await;
        db.insert_raw(8, "{}", r#"{"a.xhtml":""}"#).await;

        let config = Config {
            inspect_document_id: 8,
            ..Config::default()
        };
        let report = cmd_inspect(&config, &db).await.unwrap().unwrap();
        assert_eq!(report.chapter_count, 1);
    }

    #[tokio::test]
    async fn test_inspect_malformed_chapters_html() {
        let (db, _tmp) = setup_test_db().await;
        db.insert_raw(1, "{}", "<html>").await;

        let err = cmd_inspect(&Config::default(), &db).await.unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { id: 1, .. }));
    }
}
