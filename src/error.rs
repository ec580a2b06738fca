//! Custom error types for epubdb

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for epubdb operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database not found at {}: run 'epubdb init' or pass --db", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error("Document with ID {0} not found.")]
    DocumentNotFound(i64),

    #[error("Document {id} has malformed {field} JSON: {source}")]
    MalformedDocument {
        id: i64,
        field: DocumentField,
        #[source]
        source: serde_json::Error,
    },

    #[error("Document {id} has {count} chapters, index {index} is out of range")]
    ChapterOutOfRange { id: i64, index: usize, count: usize },

    #[error("Chapter {index} of document {id} has no path")]
    ChapterWithoutPath { id: i64, index: usize },

    #[error("Document {id} has no HTML stored for chapter '{path}'")]
    ChapterNotFound { id: i64, path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// The JSON columns of a document row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentField {
    Metadata,
    ChaptersHtml,
}

impl std::fmt::Display for DocumentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentField::Metadata => write!(f, "metadata"),
            DocumentField::ChaptersHtml => write!(f, "chapters_html"),
        }
    }
}

/// Result type alias for epubdb
pub type Result<T> = std::result::Result<T, Error>;
