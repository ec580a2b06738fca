//! Debug command - report on both JSON columns of a document
//!
//! Each column is parsed independently; a decode failure in one is reported
//! and does not stop the other from being examined.

use crate::config::Config;
use crate::db::DocumentDb;
use crate::error::Result;
use crate::models::{content_text, preview, ChaptersHtml, DocumentMetadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// Outcome of parsing the `metadata` column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetadataStatus {
    Parsed { preview: String },
    Invalid { error: String },
}

/// Outcome of parsing the `chapters_html` column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChaptersHtmlStatus {
    Empty,
    Entries {
        count: usize,
        first_key: String,
        sample: String,
    },
    Invalid {
        error: String,
    },
}

/// Per-field diagnostics for one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugReport {
    pub id: i64,
    pub metadata: MetadataStatus,
    pub chapters_html: ChaptersHtmlStatus,
    /// `chapters_html` keys that `metadata.chapters` does not list
    pub unlisted_keys: Vec<String>,
}

/// Examine document `id`. `None` when the row does not exist.
pub async fn cmd_debug(config: &Config, db: &DocumentDb, id: i64) -> Result<Option<DebugReport>> {
    info!("Debugging document {}", id);

    let Some(doc) = db.get_document(id).await? else {
        return Ok(None);
    };

    let (metadata, parsed_metadata) = match serde_json::from_str::<Value>(&doc.metadata) {
        Ok(value) => {
            let pretty = serde_json::to_string_pretty(&value)?;
            let status = MetadataStatus::Parsed {
                preview: preview(&pretty, config.metadata_preview_chars).to_string(),
            };
            (status, serde_json::from_value::<DocumentMetadata>(value).ok())
        }
        Err(e) => (MetadataStatus::Invalid { error: e.to_string() }, None),
    };

    let (chapters_html, parsed_html) = match serde_json::from_str::<ChaptersHtml>(&doc.chapters_html)
    {
        Ok(html) => (summarize_chapters(&html, config.content_preview_chars), Some(html)),
        Err(e) => (ChaptersHtmlStatus::Invalid { error: e.to_string() }, None),
    };

    let unlisted_keys = match (&parsed_metadata, &parsed_html) {
        (Some(meta), Some(html)) => {
            let listed = meta.chapter_paths();
            html.keys()
                .filter(|key| !listed.contains(&key.as_str()))
                .cloned()
                .collect()
        }
        _ => Vec::new(),
    };

    Ok(Some(DebugReport {
        id: doc.id,
        metadata,
        chapters_html,
        unlisted_keys,
    }))
}

fn summarize_chapters(html: &ChaptersHtml, max_chars: usize) -> ChaptersHtmlStatus {
    match html.iter().next() {
        None => ChaptersHtmlStatus::Empty,
        Some((key, value)) => {
            let content = content_text(value);
            ChaptersHtmlStatus::Entries {
                count: html.len(),
                first_key: key.clone(),
                sample: preview(&content, max_chars).to_string(),
            }
        }
    }
}

/// Print debug report to console
pub fn print_debug_report(report: &DebugReport) {
    println!("Document ID: {}", report.id);

    match &report.metadata {
        MetadataStatus::Parsed { preview } => println!("Metadata: {}...", preview),
        MetadataStatus::Invalid { error } => println!("Failed to parse metadata JSON: {}", error),
    }

    match &report.chapters_html {
        ChaptersHtmlStatus::Empty => println!("chapters_html is empty!"),
        ChaptersHtmlStatus::Entries {
            count,
            first_key,
            sample,
        } => {
            println!("chapters_html contains {} entries", count);
            println!("First chapter key: {}", first_key);
            println!("Sample content: {}...", sample);
        }
        ChaptersHtmlStatus::Invalid { error } => {
            println!("Failed to parse chapters_html JSON: {}", error)
        }
    }

    if !report.unlisted_keys.is_empty() {
        println!(
            "Keys not listed in metadata chapters: {}",
            report.unlisted_keys.join(", ")
        );
    }
}
