//! Pending moderation queue repository.

use faqdesk_core::{AppError, AppResult, PendingEntry};
use rusqlite::{params, Connection};

/// Read/write access to the pending set.
pub trait PendingRepository {
    /// Load all pending entries in submission order.
    fn load_all(&self) -> AppResult<Vec<PendingEntry>>;

    /// Insert a candidate unless one with the same question text is
    /// already queued. Returns true if the candidate was inserted.
    fn insert_if_absent(&self, entry: &PendingEntry) -> AppResult<bool>;

    /// Remove the candidate with the given question text.
    /// Returns true if a candidate was removed.
    fn remove_by_question(&self, question: &str) -> AppResult<bool>;

    /// Look up a single pending entry by question text.
    fn find_by_question(&self, question: &str) -> AppResult<Option<PendingEntry>>;
}

/// SQLite-backed pending repository.
pub struct SqlitePendingRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqlitePendingRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl PendingRepository for SqlitePendingRepository<'_> {
    fn load_all(&self) -> AppResult<Vec<PendingEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT question, answer FROM pending ORDER BY rowid")
            .map_err(|e| AppError::Store(format!("Failed to prepare pending query: {}", e)))?;

        let entries = stmt
            .query_map([], |row| {
                Ok(PendingEntry {
                    question: row.get(0)?,
                    answer: row.get(1)?,
                })
            })
            .map_err(|e| AppError::Store(format!("Failed to load pending set: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Store(format!("Failed to read pending row: {}", e)))?;

        Ok(entries)
    }

    fn insert_if_absent(&self, entry: &PendingEntry) -> AppResult<bool> {
        let inserted = self
            .conn
            .execute(
                "INSERT OR IGNORE INTO pending (question, answer) VALUES (?1, ?2)",
                params![entry.question, entry.answer],
            )
            .map_err(|e| AppError::Store(format!("Failed to insert pending entry: {}", e)))?;

        Ok(inserted > 0)
    }

    fn remove_by_question(&self, question: &str) -> AppResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM pending WHERE question = ?1", params![question])
            .map_err(|e| AppError::Store(format!("Failed to remove pending entry: {}", e)))?;

        Ok(removed > 0)
    }

    fn find_by_question(&self, question: &str) -> AppResult<Option<PendingEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT question, answer FROM pending WHERE question = ?1")
            .map_err(|e| AppError::Store(format!("Failed to prepare pending lookup: {}", e)))?;

        let mut rows = stmt
            .query_map(params![question], |row| {
                Ok(PendingEntry {
                    question: row.get(0)?,
                    answer: row.get(1)?,
                })
            })
            .map_err(|e| AppError::Store(format!("Failed to look up pending entry: {}", e)))?;

        match rows.next() {
            Some(row) => Ok(Some(row.map_err(|e| {
                AppError::Store(format!("Failed to read pending row: {}", e))
            })?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_store_in_memory;

    fn entry(question: &str, answer: &str) -> PendingEntry {
        PendingEntry::new(question, answer).unwrap()
    }

    #[test]
    fn test_double_submission_leaves_one_row() {
        let conn = open_store_in_memory().unwrap();
        let repo = SqlitePendingRepository::new(&conn);

        assert!(repo.insert_if_absent(&entry("q?", "a")).unwrap());
        assert!(!repo.insert_if_absent(&entry("q?", "a")).unwrap());
        assert!(!repo.insert_if_absent(&entry("q?", "different answer")).unwrap());

        assert_eq!(repo.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_then_resubmit_succeeds() {
        let conn = open_store_in_memory().unwrap();
        let repo = SqlitePendingRepository::new(&conn);

        repo.insert_if_absent(&entry("q?", "a")).unwrap();
        assert!(repo.remove_by_question("q?").unwrap());
        assert!(repo.insert_if_absent(&entry("q?", "a")).unwrap());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let conn = open_store_in_memory().unwrap();
        let repo = SqlitePendingRepository::new(&conn);
        assert!(!repo.remove_by_question("never queued").unwrap());
    }

    #[test]
    fn test_find_by_question() {
        let conn = open_store_in_memory().unwrap();
        let repo = SqlitePendingRepository::new(&conn);

        repo.insert_if_absent(&entry("q?", "a")).unwrap();
        let found = repo.find_by_question("q?").unwrap().unwrap();
        assert_eq!(found.answer, "a");
        assert!(repo.find_by_question("other?").unwrap().is_none());
    }
}
