//! List command - one line per stored document

use crate::db::DocumentDb;
use crate::error::Result;
use crate::models::{parse_chapters_html, parse_metadata};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Summary of one document row. Counts are `None` when the column is malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: i64,
    pub title: Option<String>,
    pub chapter_count: Option<usize>,
    pub html_entry_count: Option<usize>,
}

/// Summarize every document
pub async fn cmd_list(db: &DocumentDb) -> Result<Vec<DocumentSummary>> {
    info!("Listing documents");

    let docs = db.list_documents().await?;
    let mut result = Vec::with_capacity(docs.len());

    for doc in docs {
        let metadata = parse_metadata(doc.id, &doc.metadata)
            .inspect_err(|e| debug!("{}", e))
            .ok();
        let html = parse_chapters_html(doc.id, &doc.chapters_html)
            .inspect_err(|e| debug!("{}", e))
            .ok();

        result.push(DocumentSummary {
            id: doc.id,
            title: metadata
                .as_ref()
                .and_then(|m| m.title())
                .map(str::to_string),
            chapter_count: metadata.as_ref().map(|m| m.chapters.len()),
            html_entry_count: html.as_ref().map(|h| h.len()),
        });
    }

    Ok(result)
}

fn count_cell(count: Option<usize>) -> String {
    count.map_or_else(|| "invalid".to_string(), |n| n.to_string())
}

/// Print document list to console
pub fn print_documents(docs: &[DocumentSummary]) {
    if docs.is_empty() {
        println!("No documents found.");
        return;
    }

    println!("{:>6}  {:>8}  {:>8}  TITLE", "ID", "CHAPTERS", "HTML");
    for doc in docs {
        println!(
            "{:>6}  {:>8}  {:>8}  {}",
            doc.id,
            count_cell(doc.chapter_count),
            count_cell(doc.html_entry_count),
            doc.title.as_deref().unwrap_or("-")
        );
    }
}
