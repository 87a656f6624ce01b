//! SQLite-backed persistence for faqdesk.
//!
//! Provides the repository traits consumed by the service layer and their
//! SQLite implementations: the curated corpus, the pending moderation
//! queue, user accounts and the append-only audit log.
//!
//! Uniqueness invariants (one curated entry and at most one pending entry
//! per question text) are enforced by `UNIQUE` columns at the store level,
//! so idempotent "insert if absent" semantics hold regardless of caller
//! behavior. Multi-row mutations run inside SQLite transactions.

pub mod audit;
pub mod auth;
pub mod corpus;
pub mod db;
pub mod pending;

// Re-export commonly used items
pub use audit::AuditLog;
pub use auth::{authenticate, has_accounts, register_user, reset_password};
pub use corpus::{CorpusRepository, SqliteCorpusRepository};
pub use db::{open_store, open_store_in_memory};
pub use pending::{PendingRepository, SqlitePendingRepository};
