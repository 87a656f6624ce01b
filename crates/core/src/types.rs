//! Shared domain type definitions.
//!
//! These are the data contracts shared by the matcher, the stores and the
//! service layer: curated FAQ entries, pending submissions, match results
//! and the operator role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A curated question/answer pair in the knowledge base.
///
/// The `question` text is unique within the curated set (case-sensitive,
/// exact string). Entries are never mutated in place; an edit is modeled
/// as a removal plus a new entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Opaque unique identifier
    pub id: String,

    /// Optional category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Question text (unique within the curated set)
    pub question: String,

    /// Answer text
    pub answer: String,
}

impl FaqEntry {
    /// Create a new entry with a fresh identifier, validating both texts.
    pub fn new(
        tag: Option<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> AppResult<Self> {
        let question = non_blank(question.into(), "question")?;
        let answer = non_blank(answer.into(), "answer")?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            tag,
            question,
            answer,
        })
    }
}

/// A candidate question/answer pair awaiting moderation.
///
/// The `question` text is unique within the pending set, which caps open
/// submissions at one per question text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingEntry {
    /// Question text (unique within the pending set)
    pub question: String,

    /// Candidate answer text
    pub answer: String,
}

impl PendingEntry {
    /// Create a pending entry, validating both texts.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            question: non_blank(question.into(), "question")?,
            answer: non_blank(answer.into(), "answer")?,
        })
    }
}

/// Result of matching one query against the corpus.
///
/// Transient: produced fresh per query and never cached, because the
/// corpus can change between any two calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Best-matching curated entry, if the score cleared the threshold
    pub entry: Option<FaqEntry>,

    /// Cosine similarity of the best candidate, in [0, 1]
    pub score: f64,
}

impl MatchResult {
    /// A no-match result carrying the best (rejected) score.
    pub fn none(score: f64) -> Self {
        Self { entry: None, score }
    }
}

/// An operator decision on a pending question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModerationDecision {
    /// Move the pending entry into the curated set
    Approve(String),

    /// Discard the pending entry
    Reject(String),
}

/// Account role. Authorization is a single binary check: admin or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Stable string form used in the users table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Parse the stored string form.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(AppError::Invalid(format!("Unknown role: {}", other))),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// One line of the append-only audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// When the action happened
    pub at: DateTime<Utc>,

    /// Acting account
    pub username: String,

    /// Short action name (e.g., "approve", "reject")
    pub action: String,

    /// Free-form detail text
    pub details: String,
}

/// Validate that a text field is non-empty after trimming, returning the
/// trimmed form.
fn non_blank(value: String, field: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Invalid(format!("{} must not be blank", field)));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_entry_gets_unique_id() {
        let a = FaqEntry::new(None, "How do I reset my password?", "Use the reset link.").unwrap();
        let b = FaqEntry::new(None, "How do I reset my password?", "Use the reset link.").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_blank_question_rejected() {
        let result = FaqEntry::new(None, "   ", "answer");
        assert!(matches!(result, Err(AppError::Invalid(_))));
    }

    #[test]
    fn test_pending_entry_trims_fields() {
        let entry = PendingEntry::new("  What is the weather today?  ", " It's sunny. ").unwrap();
        assert_eq!(entry.question, "What is the weather today?");
        assert_eq!(entry.answer, "It's sunny.");
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse("admin").unwrap(), Role::Admin);
        assert_eq!(Role::parse(Role::User.as_str()).unwrap(), Role::User);
        assert!(Role::parse("root").is_err());
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }
}
