//! Answer service: end-to-end query answering and submission.
//!
//! Composes the similarity matcher with the corpus and pending stores. A
//! query is matched against a fresh snapshot of the curated set; when no
//! curated entry clears the threshold, the submitter may queue the
//! question (with a candidate answer) for moderation.

pub mod moderation;

use faqdesk_core::{AppResult, FaqEntry, PendingEntry};
use faqdesk_store::{CorpusRepository, PendingRepository};
use serde::{Deserialize, Serialize};

pub use moderation::{
    add_entry, approve, decide, list_audit, list_pending, reject, remove_entry, Actor,
    ApproveOutcome, DecisionOutcome, RejectOutcome,
};

/// Outcome of answering one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AskOutcome {
    /// A curated entry cleared the threshold
    Answered { entry: FaqEntry, score: f64 },

    /// Best candidate scored below the threshold
    Unknown { score: f64 },

    /// The curated set is empty; nothing to match against
    EmptyCorpus,
}

/// Outcome of queueing a candidate question.
///
/// The duplicate variants are informational, not errors: double
/// submissions are expected and harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// The candidate was queued for moderation
    Queued,

    /// An identical question is already awaiting moderation
    AlreadyPending,

    /// The question already has a curated answer
    AlreadyCurated,
}

/// Answer one query against the current curated set.
///
/// The corpus snapshot is loaded fresh per call and the matcher keeps no
/// state, so the answer always reflects the corpus as of this call.
pub fn ask(corpus: &dyn CorpusRepository, query: &str) -> AppResult<AskOutcome> {
    let entries = corpus.load_all()?;

    if entries.is_empty() {
        tracing::info!("Query against empty knowledge base");
        return Ok(AskOutcome::EmptyCorpus);
    }

    let result = faqdesk_matcher::match_query(query, &entries);

    match result.entry {
        Some(entry) => {
            tracing::info!(
                "Answered query with entry '{}' (score {:.3})",
                entry.question,
                result.score
            );
            Ok(AskOutcome::Answered {
                entry,
                score: result.score,
            })
        }
        None => {
            tracing::info!("No curated match for query (best score {:.3})", result.score);
            Ok(AskOutcome::Unknown {
                score: result.score,
            })
        }
    }
}

/// Queue a candidate question/answer pair for moderation.
///
/// A question that already has a curated answer is not queued, and a
/// question already pending stays queued exactly once.
pub fn submit(
    corpus: &dyn CorpusRepository,
    pending: &dyn PendingRepository,
    question: &str,
    answer: &str,
) -> AppResult<SubmitOutcome> {
    let candidate = PendingEntry::new(question, answer)?;

    // A question that is already answerable does not need moderation.
    let curated = corpus.load_all()?;
    if curated.iter().any(|e| e.question == candidate.question) {
        tracing::info!("Submission skipped, question already curated: '{}'", candidate.question);
        return Ok(SubmitOutcome::AlreadyCurated);
    }

    if pending.insert_if_absent(&candidate)? {
        tracing::info!("Queued candidate question: '{}'", candidate.question);
        Ok(SubmitOutcome::Queued)
    } else {
        tracing::info!("Submission skipped, question already pending: '{}'", candidate.question);
        Ok(SubmitOutcome::AlreadyPending)
    }
}
