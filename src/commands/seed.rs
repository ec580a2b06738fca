//! Seed command - fill `chapters_html` with placeholder pages
//!
//! The new mapping is built only from `metadata.chapters` and replaces the
//! stored one wholesale.

use crate::db::DocumentDb;
use crate::error::{Error, Result};
use crate::models::{parse_metadata, ChapterDescriptor, ChaptersHtml, DocumentMetadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// Seed statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReport {
    pub id: i64,
    pub chapters_written: usize,
    pub chapters_skipped: usize,
}

/// Render the placeholder page for one chapter
pub fn render_sample_chapter(chapter: &ChapterDescriptor) -> String {
    let title = escape_html(&chapter.title);
    let path = escape_html(&chapter.path);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
</head>
<body>
    <h1>{title}</h1>
    <p>This is sample HTML content for chapter: {path}</p>
    <p>In a real EPUB, this would contain the actual chapter content.</p>
</body>
</html>
"#
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build a fresh path-to-HTML mapping from the chapter list.
///
/// Entries without a non-empty `path` and `title` are left out. A repeated
/// path keeps its first position and the last entry's content.
pub fn build_sample_chapters(metadata: &DocumentMetadata) -> ChaptersHtml {
    let mut html = ChaptersHtml::new();
    for (index, entry) in metadata.chapters.iter().enumerate() {
        match ChapterDescriptor::from_value(entry) {
            Some(chapter) => {
                let page = render_sample_chapter(&chapter);
                html.insert(chapter.path, Value::String(page));
            }
            None => debug!("Skipping chapter {} without path or title", index),
        }
    }
    html
}

/// Replace the `chapters_html` of document `id` with placeholder pages
pub async fn cmd_seed(db: &DocumentDb, id: i64) -> Result<SeedReport> {
    info!("Looking for document with ID: {}", id);

    let doc = db
        .get_document(id)
        .await?
        .ok_or(Error::DocumentNotFound(id))?;

    let metadata = parse_metadata(doc.id, &doc.metadata)?;
    let html = build_sample_chapters(&metadata);
    let serialized = serde_json::to_string(&html)?;

    if db.replace_chapters_html(doc.id, &serialized).await? == 0 {
        return Err(Error::DocumentNotFound(id));
    }

    info!("Wrote {} chapters to document {}", html.len(), doc.id);

    Ok(SeedReport {
        id: doc.id,
        chapters_written: html.len(),
        chapters_skipped: metadata.chapters.len() - metadata.descriptors().count(),
    })
}

/// Print seed result to console
pub fn print_seed_report(report: &SeedReport) {
    println!(
        "Updated document {} with sample HTML content for {} chapters.",
        report.id, report.chapters_written
    );
}
