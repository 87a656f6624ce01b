//! Append-only audit log.

use chrono::{DateTime, Utc};
use faqdesk_core::{AppError, AppResult, AuditRecord};
use rusqlite::{params, Connection};

/// Audit log access. Writes are fire-and-forget appends; the core never
/// consumes a return value beyond error propagation.
pub struct AuditLog<'a> {
    conn: &'a Connection,
}

impl<'a> AuditLog<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Append one record with the current timestamp.
    pub fn record(&self, username: &str, action: &str, details: &str) -> AppResult<()> {
        self.conn
            .execute(
                "INSERT INTO audit_log (at, username, action, details) VALUES (?1, ?2, ?3, ?4)",
                params![Utc::now().to_rfc3339(), username, action, details],
            )
            .map_err(|e| AppError::Store(format!("Failed to append audit record: {}", e)))?;

        Ok(())
    }

    /// Load the full log, oldest first.
    pub fn load_all(&self) -> AppResult<Vec<AuditRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT at, username, action, details FROM audit_log ORDER BY id")
            .map_err(|e| AppError::Store(format!("Failed to prepare audit query: {}", e)))?;

        let records = stmt
            .query_map([], |row| {
                let at: String = row.get(0)?;
                Ok((at, row.get::<_, String>(1)?, row.get::<_, String>(2)?, row.get::<_, String>(3)?))
            })
            .map_err(|e| AppError::Store(format!("Failed to load audit log: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Store(format!("Failed to read audit row: {}", e)))?;

        records
            .into_iter()
            .map(|(at, username, action, details)| {
                let at = DateTime::parse_from_rfc3339(&at)
                    .map_err(|e| AppError::Store(format!("Malformed audit timestamp: {}", e)))?
                    .with_timezone(&Utc);
                Ok(AuditRecord {
                    at,
                    username,
                    action,
                    details,
                })
            })
            .collect()
    }
}
