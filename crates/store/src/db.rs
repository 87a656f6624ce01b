//! Database bootstrap: connection opening and schema creation.

use faqdesk_core::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

/// Open (or create) the faqdesk database and ensure the schema exists.
pub fn open_store(db_path: &Path) -> AppResult<Connection> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::Store(format!("Failed to create data directory: {}", e)))?;
    }

    let conn = Connection::open(db_path)
        .map_err(|e| AppError::Store(format!("Failed to open database: {}", e)))?;

    init_schema(&conn)?;

    tracing::debug!("Opened faqdesk store at {:?}", db_path);
    Ok(conn)
}

/// Open an in-memory database with the full schema. Used by tests and
/// callers that want a throwaway store.
pub fn open_store_in_memory() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()
        .map_err(|e| AppError::Store(format!("Failed to open in-memory database: {}", e)))?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS faq (
            id TEXT PRIMARY KEY,
            tag TEXT,
            question TEXT NOT NULL UNIQUE,
            answer TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS pending (
            question TEXT PRIMARY KEY,
            answer TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS users (
            username TEXT PRIMARY KEY,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS audit_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            at TEXT NOT NULL,
            username TEXT NOT NULL,
            action TEXT NOT NULL,
            details TEXT NOT NULL
        );
        "#,
    )
    .map_err(|e| AppError::Store(format!("Failed to create tables: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_store_creates_schema() {
        let dir = TempDir::new().unwrap();
        let conn = open_store(&dir.path().join("nested/faqdesk.db")).unwrap();

        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('faq', 'pending', 'users', 'audit_log')",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(table_count, 4);
    }

    #[test]
    fn test_open_store_is_reentrant() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("faqdesk.db");
        open_store(&path).unwrap();
        // Re-opening an existing database must not fail on CREATE TABLE.
        open_store(&path).unwrap();
    }

    #[test]
    fn test_faq_question_is_unique() {
        let conn = open_store_in_memory().unwrap();
        conn.execute(
            "INSERT INTO faq (id, tag, question, answer) VALUES ('1', NULL, 'q', 'a')",
            [],
        )
        .unwrap();
        let dup = conn.execute(
            "INSERT INTO faq (id, tag, question, answer) VALUES ('2', NULL, 'q', 'b')",
            [],
        );
        assert!(dup.is_err());
    }
}
