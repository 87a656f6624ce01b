//! Moderation workflow: operator decisions over the pending queue.
//!
//! Each candidate question moves through `absent -> pending -> curated`,
//! with rejection returning it to `absent` (resubmission is allowed).
//! Every operation takes an explicit [`Actor`] instead of ambient session
//! state, and every effect is idempotent: repeated operator clicks and
//! retried requests never violate the uniqueness invariants.

use faqdesk_core::{
    AppError, AppResult, AuditRecord, FaqEntry, ModerationDecision, PendingEntry, Role,
};
use faqdesk_store::{
    AuditLog, CorpusRepository, PendingRepository, SqliteCorpusRepository,
    SqlitePendingRepository,
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

/// The authenticated account performing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub username: String,
    pub role: Role,
}

impl Actor {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }
}

/// Outcome of an approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApproveOutcome {
    /// The pending entry was moved into the curated set
    Approved,

    /// The question was already curated; the pending entry was cleared
    /// without inserting a duplicate
    AlreadyCurated,

    /// No pending entry with that question exists
    NotPending,
}

/// Outcome of a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectOutcome {
    /// The pending entry was discarded
    Rejected,

    /// No pending entry with that question exists
    NotPending,
}

fn require_admin(actor: &Actor) -> AppResult<()> {
    if !actor.role.is_admin() {
        return Err(AppError::Forbidden(format!(
            "'{}' is not an operator",
            actor.username
        )));
    }
    Ok(())
}

/// Approve a pending question into the curated set.
///
/// The curated insert and the pending removal are applied as one unit
/// inside a transaction. If the question is no longer pending (for
/// example a concurrent reject got there first), nothing changes.
pub fn approve(conn: &mut Connection, actor: &Actor, question: &str) -> AppResult<ApproveOutcome> {
    require_admin(actor)?;

    let tx = conn
        .transaction()
        .map_err(|e| AppError::Store(format!("Failed to begin transaction: {}", e)))?;

    let outcome = {
        let corpus = SqliteCorpusRepository::new(&tx);
        let pending = SqlitePendingRepository::new(&tx);

        let Some(candidate) = pending.find_by_question(question)? else {
            tracing::info!("Approve skipped, question not pending: '{}'", question);
            return Ok(ApproveOutcome::NotPending);
        };

        let entry = FaqEntry::new(None, candidate.question, candidate.answer)?;
        let inserted = corpus.insert_if_absent(&entry)?;

        // Unconditional: the pending entry is consumed either way.
        pending.remove_by_question(question)?;

        if inserted {
            ApproveOutcome::Approved
        } else {
            ApproveOutcome::AlreadyCurated
        }
    };

    tx.commit()
        .map_err(|e| AppError::Store(format!("Failed to commit approval: {}", e)))?;

    tracing::info!("Approved pending question: '{}' ({:?})", question, outcome);
    AuditLog::new(conn).record(&actor.username, "approve", question)?;

    Ok(outcome)
}

/// Reject (discard) a pending question. No-op if it is not pending.
pub fn reject(conn: &Connection, actor: &Actor, question: &str) -> AppResult<RejectOutcome> {
    require_admin(actor)?;

    let pending = SqlitePendingRepository::new(conn);
    let removed = pending.remove_by_question(question)?;

    if !removed {
        tracing::info!("Reject skipped, question not pending: '{}'", question);
        return Ok(RejectOutcome::NotPending);
    }

    tracing::info!("Rejected pending question: '{}'", question);
    AuditLog::new(conn).record(&actor.username, "reject", question)?;

    Ok(RejectOutcome::Rejected)
}

/// Insert a curated entry directly, bypassing the pending queue.
/// Returns false when the question already exists in the curated set.
pub fn add_entry(
    conn: &Connection,
    actor: &Actor,
    tag: Option<String>,
    question: &str,
    answer: &str,
) -> AppResult<bool> {
    require_admin(actor)?;

    let entry = FaqEntry::new(tag, question, answer)?;
    let corpus = SqliteCorpusRepository::new(conn);
    let inserted = corpus.insert_if_absent(&entry)?;

    if inserted {
        tracing::info!("Added curated entry: '{}'", entry.question);
        AuditLog::new(conn).record(&actor.username, "add", &entry.question)?;
    } else {
        tracing::info!("Add skipped, question already curated: '{}'", entry.question);
    }

    Ok(inserted)
}

/// Remove a curated entry. Returns false when no entry matched.
pub fn remove_entry(conn: &Connection, actor: &Actor, question: &str) -> AppResult<bool> {
    require_admin(actor)?;

    let corpus = SqliteCorpusRepository::new(conn);
    let removed = corpus.remove_by_question(question)?;

    if removed {
        tracing::info!("Removed curated entry: '{}'", question);
        AuditLog::new(conn).record(&actor.username, "remove", question)?;
    }

    Ok(removed)
}

/// Outcome of applying a [`ModerationDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionOutcome {
    Approve(ApproveOutcome),
    Reject(RejectOutcome),
}

/// Apply one operator decision against the pending and curated sets.
pub fn decide(
    conn: &mut Connection,
    actor: &Actor,
    decision: &ModerationDecision,
) -> AppResult<DecisionOutcome> {
    match decision {
        ModerationDecision::Approve(question) => {
            Ok(DecisionOutcome::Approve(approve(conn, actor, question)?))
        }
        ModerationDecision::Reject(question) => {
            Ok(DecisionOutcome::Reject(reject(conn, actor, question)?))
        }
    }
}

/// List the pending queue (operator only).
pub fn list_pending(conn: &Connection, actor: &Actor) -> AppResult<Vec<PendingEntry>> {
    require_admin(actor)?;
    SqlitePendingRepository::new(conn).load_all()
}

/// Read the audit log (operator only).
pub fn list_audit(conn: &Connection, actor: &Actor) -> AppResult<Vec<AuditRecord>> {
    require_admin(actor)?;
    AuditLog::new(conn).load_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ask, submit, AskOutcome, SubmitOutcome};
    use faqdesk_store::open_store_in_memory;

    fn admin() -> Actor {
        Actor::new("ops", Role::Admin)
    }

    fn seed_corpus(conn: &Connection, question: &str, answer: &str) {
        SqliteCorpusRepository::new(conn)
            .insert_if_absent(&FaqEntry::new(None, question, answer).unwrap())
            .unwrap();
    }

    fn seed_pending(conn: &Connection, question: &str, answer: &str) {
        SqlitePendingRepository::new(conn)
            .insert_if_absent(&PendingEntry::new(question, answer).unwrap())
            .unwrap();
    }

    #[test]
    fn test_non_admin_is_refused() {
        let mut conn = open_store_in_memory().unwrap();
        let user = Actor::new("someone", Role::User);

        assert!(matches!(
            approve(&mut conn, &user, "q?"),
            Err(AppError::Forbidden(_))
        ));
        assert!(reject(&conn, &user, "q?").is_err());
        assert!(add_entry(&conn, &user, None, "q?", "a").is_err());
        assert!(remove_entry(&conn, &user, "q?").is_err());
        assert!(list_pending(&conn, &user).is_err());
        assert!(list_audit(&conn, &user).is_err());
    }

    #[test]
    fn test_approve_moves_pending_to_curated() {
        let mut conn = open_store_in_memory().unwrap();
        seed_pending(&conn, "What is the weather today?", "It's sunny.");

        let outcome = approve(&mut conn, &admin(), "What is the weather today?").unwrap();
        assert_eq!(outcome, ApproveOutcome::Approved);

        let curated = SqliteCorpusRepository::new(&conn).load_all().unwrap();
        assert_eq!(curated.len(), 1);
        assert_eq!(curated[0].answer, "It's sunny.");
        assert!(SqlitePendingRepository::new(&conn).load_all().unwrap().is_empty());
    }

    #[test]
    fn test_approve_not_pending_is_noop() {
        let mut conn = open_store_in_memory().unwrap();

        let outcome = approve(&mut conn, &admin(), "never submitted").unwrap();
        assert_eq!(outcome, ApproveOutcome::NotPending);
        assert!(SqliteCorpusRepository::new(&conn).load_all().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_approval_never_duplicates_curated_entry() {
        // Models the duplicate-approval race: the question is already
        // curated while a stale pending row still exists.
        let mut conn = open_store_in_memory().unwrap();
        seed_corpus(&conn, "q?", "a");
        seed_pending(&conn, "q?", "stale answer");

        let outcome = approve(&mut conn, &admin(), "q?").unwrap();
        assert_eq!(outcome, ApproveOutcome::AlreadyCurated);

        let curated = SqliteCorpusRepository::new(&conn).load_all().unwrap();
        assert_eq!(curated.len(), 1);
        assert_eq!(curated[0].answer, "a");
        // The stale pending row is still consumed.
        assert!(SqlitePendingRepository::new(&conn).load_all().unwrap().is_empty());
    }

    #[test]
    fn test_reject_then_resubmit() {
        let mut conn = open_store_in_memory().unwrap();
        seed_pending(&conn, "Q1", "A1");

        assert_eq!(reject(&conn, &admin(), "Q1").unwrap(), RejectOutcome::Rejected);
        assert!(SqlitePendingRepository::new(&conn).load_all().unwrap().is_empty());
        assert!(SqliteCorpusRepository::new(&conn).load_all().unwrap().is_empty());

        // A later approval attempt is a no-op.
        assert_eq!(
            approve(&mut conn, &admin(), "Q1").unwrap(),
            ApproveOutcome::NotPending
        );

        // The question can be submitted again.
        seed_pending(&conn, "Q1", "A1");
        assert_eq!(
            SqlitePendingRepository::new(&conn).load_all().unwrap().len(),
            1
        );
    }

    #[test]
    fn test_reject_not_pending_is_noop() {
        let conn = open_store_in_memory().unwrap();
        assert_eq!(
            reject(&conn, &admin(), "nothing").unwrap(),
            RejectOutcome::NotPending
        );
    }

    #[test]
    fn test_add_entry_is_idempotent() {
        let conn = open_store_in_memory().unwrap();

        assert!(add_entry(&conn, &admin(), Some("billing".to_string()), "q?", "a").unwrap());
        assert!(!add_entry(&conn, &admin(), None, "q?", "b").unwrap());

        let curated = SqliteCorpusRepository::new(&conn).load_all().unwrap();
        assert_eq!(curated.len(), 1);
        assert_eq!(curated[0].tag.as_deref(), Some("billing"));
    }

    #[test]
    fn test_decide_dispatches_both_decisions() {
        let mut conn = open_store_in_memory().unwrap();
        seed_pending(&conn, "Q1", "A1");
        seed_pending(&conn, "Q2", "A2");

        let approved = decide(
            &mut conn,
            &admin(),
            &ModerationDecision::Approve("Q1".to_string()),
        )
        .unwrap();
        assert_eq!(approved, DecisionOutcome::Approve(ApproveOutcome::Approved));

        let rejected = decide(
            &mut conn,
            &admin(),
            &ModerationDecision::Reject("Q2".to_string()),
        )
        .unwrap();
        assert_eq!(rejected, DecisionOutcome::Reject(RejectOutcome::Rejected));

        assert!(list_pending(&conn, &admin()).unwrap().is_empty());
        assert_eq!(SqliteCorpusRepository::new(&conn).load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_moderation_is_audited() {
        let mut conn = open_store_in_memory().unwrap();
        seed_pending(&conn, "Q1", "A1");
        seed_pending(&conn, "Q2", "A2");

        approve(&mut conn, &admin(), "Q1").unwrap();
        reject(&conn, &admin(), "Q2").unwrap();

        let log = list_audit(&conn, &admin()).unwrap();
        let actions: Vec<(&str, &str)> = log
            .iter()
            .map(|r| (r.action.as_str(), r.details.as_str()))
            .collect();
        assert_eq!(actions, vec![("approve", "Q1"), ("reject", "Q2")]);
        assert!(log.iter().all(|r| r.username == "ops"));
    }

    #[test]
    fn test_end_to_end_unknown_submit_approve() {
        // Scenario: an unknown query is submitted, approved, and becomes
        // answerable.
        let mut conn = open_store_in_memory().unwrap();
        seed_corpus(&conn, "How do I reset my password?", "Use the reset link.");

        let corpus = SqliteCorpusRepository::new(&conn);
        let pending = SqlitePendingRepository::new(&conn);

        let query = "What is the weather today?";
        assert!(matches!(
            ask(&corpus, query).unwrap(),
            AskOutcome::Unknown { .. }
        ));

        assert_eq!(
            submit(&corpus, &pending, query, "It's sunny.").unwrap(),
            SubmitOutcome::Queued
        );

        drop((corpus, pending));
        assert_eq!(
            approve(&mut conn, &admin(), query).unwrap(),
            ApproveOutcome::Approved
        );

        let corpus = SqliteCorpusRepository::new(&conn);
        match ask(&corpus, query).unwrap() {
            AskOutcome::Answered { entry, score } => {
                assert_eq!(entry.answer, "It's sunny.");
                assert!((score - 1.0).abs() < 1e-9);
            }
            other => panic!("expected an answer, got {:?}", other),
        }
        assert!(list_pending(&conn, &admin()).unwrap().is_empty());
    }
}
