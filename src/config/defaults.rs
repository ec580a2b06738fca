//! Default values for configuration

/// Default database file, relative to the working directory
pub fn default_db_path() -> String {
    std::env::var("EPUBDB_DB_PATH").unwrap_or_else(|_| "epub_documents.db".to_string())
}

/// Document examined by `inspect`
pub fn default_inspect_document_id() -> i64 {
    1
}

/// Document examined by `debug` when no ID is given
pub fn default_debug_document_id() -> i64 {
    4
}

/// Document rewritten by `seed` when no ID is given
pub fn default_seed_document_id() -> i64 {
    5
}

/// Maximum characters of pretty-printed metadata shown by `debug`
pub fn default_metadata_preview_chars() -> usize {
    200
}

/// Maximum characters of chapter content shown by `debug`
pub fn default_content_preview_chars() -> usize {
    100
}
