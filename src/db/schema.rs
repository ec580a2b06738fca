//! SQLite schema definition

/// SQL schema for the document database, as laid down by the ingester
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    metadata TEXT NOT NULL,
    chapters_html TEXT NOT NULL
);
"#;
