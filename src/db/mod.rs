//! Document storage using SQLite
//!
//! Every command owns one `DocumentDb` for the duration of the run. The pool
//! is capped at a single connection; it is closed explicitly on success and
//! released on drop otherwise.

mod schema;

pub use schema::*;

use crate::error::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::path::Path;
use tracing::{debug, info};

/// A stored EPUB document with its raw JSON columns
#[derive(Debug, Clone, FromRow)]
pub struct Document {
    pub id: i64,
    pub metadata: String,
    pub chapters_html: String,
}

/// Document database handle
pub struct DocumentDb {
    pool: SqlitePool,
}

impl DocumentDb {
    /// Open an existing database file
    pub async fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatabaseNotFound(path.to_path_buf()));
        }
        Self::connect(path, false).await
    }

    /// Open the database, creating the file if it does not exist yet
    pub async fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Self::connect(path, true).await
    }

    async fn connect(path: &Path, create: bool) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(create);

        debug!("Connecting to SQLite database at {:?}", path);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create the `documents` table if missing. Returns true when it was created.
    pub async fn init_schema(&self) -> Result<bool> {
        if self.has_documents_table().await? {
            return Ok(false);
        }
        info!("Creating documents table");
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(true)
    }

    /// Check whether the `documents` table exists
    pub async fn has_documents_table(&self) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'documents'",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// Get document by ID
    pub async fn get_document(&self, id: i64) -> Result<Option<Document>> {
        let doc = sqlx::query_as::<_, Document>(
            "SELECT id, metadata, chapters_html FROM documents WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(doc)
    }

    /// List all documents ordered by ID
    pub async fn list_documents(&self) -> Result<Vec<Document>> {
        let docs = sqlx::query_as::<_, Document>(
            "SELECT id, metadata, chapters_html FROM documents ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(docs)
    }

    /// Overwrite the `chapters_html` column of one document in a transaction.
    ///
    /// Returns the number of rows changed (0 when the document is gone).
    pub async fn replace_chapters_html(&self, id: i64, chapters_html: &str) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("UPDATE documents SET chapters_html = ? WHERE id = ?")
            .bind(chapters_html)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Close the connection, waiting for it to be released
    pub async fn close(self) {
        self.pool.close().await;
    }

    /// Insert a raw row; documents are normally written by the ingester
    #[cfg(test)]
    pub(crate) async fn insert_raw(&self, id: i64, metadata: &str, chapters_html: &str) {
        sqlx::query("INSERT INTO documents (id, metadata, chapters_html) VALUES (?, ?, ?)")
            .bind(id)
            .bind(metadata)
            .bind(chapters_html)
            .execute(&self.pool)
            .await
            .unwrap();
    }
}
