//! Init command implementation

use crate::db::DocumentDb;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Init result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitReport {
    pub db_path: String,
    pub created_file: bool,
    pub created_table: bool,
}

/// Create the database file and `documents` table when missing.
///
/// Existing tables and rows are left as they are.
pub async fn cmd_init(db_path: &Path) -> Result<InitReport> {
    info!("Initializing database at {:?}", db_path);

    let created_file = !db_path.exists();
    let db = DocumentDb::create(db_path).await?;
    let created_table = db.init_schema().await;
    db.close().await;

    Ok(InitReport {
        db_path: db_path.display().to_string(),
        created_file,
        created_table: created_table?,
    })
}

/// Print init result to console
pub fn print_init_report(report: &InitReport) {
    if report.created_table {
        println!("✓ Created documents table in {}", report.db_path);
    } else {
        println!("✓ Database {} already has a documents table", report.db_path);
    }
}
