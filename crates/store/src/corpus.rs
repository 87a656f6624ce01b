//! Curated corpus repository.

use faqdesk_core::{AppError, AppResult, FaqEntry};
use rusqlite::{params, Connection};

/// Read/write access to the curated set.
///
/// `insert_if_absent` is the only way entries are created; it never
/// violates the question-uniqueness invariant, even under retried
/// requests.
pub trait CorpusRepository {
    /// Load the full curated set in insertion order.
    fn load_all(&self) -> AppResult<Vec<FaqEntry>>;

    /// Insert an entry unless one with the same question text exists.
    /// Returns true if the entry was inserted.
    fn insert_if_absent(&self, entry: &FaqEntry) -> AppResult<bool>;

    /// Remove the entry with the given question text.
    /// Returns true if an entry was removed.
    fn remove_by_question(&self, question: &str) -> AppResult<bool>;
}

/// SQLite-backed corpus repository.
pub struct SqliteCorpusRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteCorpusRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl CorpusRepository for SqliteCorpusRepository<'_> {
    fn load_all(&self) -> AppResult<Vec<FaqEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, tag, question, answer FROM faq ORDER BY rowid")
            .map_err(|e| AppError::Store(format!("Failed to prepare corpus query: {}", e)))?;

        let entries = stmt
            .query_map([], |row| {
                Ok(FaqEntry {
                    id: row.get(0)?,
                    tag: row.get(1)?,
                    question: row.get(2)?,
                    answer: row.get(3)?,
                })
            })
            .map_err(|e| AppError::Store(format!("Failed to load corpus: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::Store(format!("Failed to read corpus row: {}", e)))?;

        Ok(entries)
    }

    fn insert_if_absent(&self, entry: &FaqEntry) -> AppResult<bool> {
        let inserted = self
            .conn
            .execute(
                "INSERT OR IGNORE INTO faq (id, tag, question, answer) VALUES (?1, ?2, ?3, ?4)",
                params![entry.id, entry.tag, entry.question, entry.answer],
            )
            .map_err(|e| AppError::Store(format!("Failed to insert FAQ entry: {}", e)))?;

        Ok(inserted > 0)
    }

    fn remove_by_question(&self, question: &str) -> AppResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM faq WHERE question = ?1", params![question])
            .map_err(|e| AppError::Store(format!("Failed to remove FAQ entry: {}", e)))?;

        Ok(removed > 0)
    }
}
