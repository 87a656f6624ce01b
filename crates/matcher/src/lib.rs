//! Lexical similarity matching for the FAQ corpus.
//!
//! Given the curated corpus and one query, the matcher vectorizes every
//! question plus the query with TF-IDF over that joint set, scores the
//! query against each question with cosine similarity, and returns the
//! best entry or a "no match" verdict.
//!
//! The matcher keeps no state between calls: the corpus can be edited by
//! an operator between any two queries, so the whole index is recomputed
//! per call. At the expected corpus scale (tens to low hundreds of
//! entries) this costs well under a millisecond.

pub mod tfidf;
pub mod tokenize;

use faqdesk_core::{FaqEntry, MatchResult};

use tfidf::{cosine_similarity, tfidf_vectors};
use tokenize::tokenize;

/// Minimum cosine similarity for a match to be accepted.
///
/// A best score strictly below this classifies the query as "unknown"
/// even though a nominal best match exists; low-confidence answers are
/// more likely wrong than helpful.
pub const MATCH_THRESHOLD: f64 = 0.3;

/// Whether a score clears the acceptance threshold.
///
/// Acceptance is inclusive: a score exactly at the threshold matches.
pub fn is_confident(score: f64) -> bool {
    score >= MATCH_THRESHOLD
}

/// Match one query against the corpus.
///
/// Returns the best-matching entry with its score, or `entry: None` when
/// the corpus is empty (score 0.0) or the best score falls below
/// [`MATCH_THRESHOLD`]. Ties are broken by corpus order: the lowest index
/// wins.
pub fn match_query(query: &str, corpus: &[FaqEntry]) -> MatchResult {
    if corpus.is_empty() {
        return MatchResult::none(0.0);
    }

    // Joint document set: every corpus question in order, query last.
    let mut documents: Vec<Vec<String>> = corpus
        .iter()
        .map(|entry| tokenize(&entry.question))
        .collect();
    documents.push(tokenize(query));

    let vectors = tfidf_vectors(&documents);
    let query_vector = &vectors[corpus.len()];
    let question_vectors = &vectors[..corpus.len()];

    let mut best_index = 0usize;
    let mut best_score = f64::MIN;

    for (index, vector) in question_vectors.iter().enumerate() {
        let score = cosine_similarity(query_vector, vector);
        // Strictly-greater keeps the first occurrence on ties.
        if score > best_score {
            best_index = index;
            best_score = score;
        }
    }

    let best_score = best_score.clamp(0.0, 1.0);

    tracing::debug!(
        "Best match for query: index {} of {} with score {:.3}",
        best_index,
        corpus.len(),
        best_score
    );

    if !is_confident(best_score) {
        return MatchResult::none(best_score);
    }

    MatchResult {
        entry: Some(corpus[best_index].clone()),
        score: best_score,
    }
}
