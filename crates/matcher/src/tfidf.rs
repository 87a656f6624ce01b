//! TF-IDF weighting over a joint document set.
//!
//! The vectorizer is rebuilt from scratch for every call: IDF weights are
//! a function of the document set handed in, never of a cached index, so
//! the scores always reflect the current corpus.

use std::collections::{HashMap, HashSet};

/// Sparse term-weight vector, L2-normalized unless the document had no
/// usable tokens (in which case it is empty).
pub type TermVector = HashMap<String, f64>;

/// Compute one TF-IDF vector per document.
///
/// Raw term counts are weighted by smoothed inverse document frequency
/// (`ln((1 + n) / (1 + df)) + 1`) and each vector is L2-normalized, so two
/// identical documents produce identical unit vectors.
pub fn tfidf_vectors(documents: &[Vec<String>]) -> Vec<TermVector> {
    let n_docs = documents.len() as f64;

    // Document frequency: how many documents contain each term.
    let mut df: HashMap<&str, usize> = HashMap::new();
    for tokens in documents {
        let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    documents
        .iter()
        .map(|tokens| {
            let mut tf: HashMap<&str, usize> = HashMap::new();
            for token in tokens {
                *tf.entry(token).or_insert(0) += 1;
            }

            let mut vector: TermVector = tf
                .into_iter()
                .map(|(term, count)| {
                    let doc_freq = df.get(term).copied().unwrap_or(0) as f64;
                    let idf = ((1.0 + n_docs) / (1.0 + doc_freq)).ln() + 1.0;
                    (term.to_string(), count as f64 * idf)
                })
                .collect();

            normalize(&mut vector);
            vector
        })
        .collect()
}

/// Scale a vector to unit length. Zero vectors are left untouched.
fn normalize(vector: &mut TermVector) {
    let norm: f64 = vector.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.values_mut() {
            *weight /= norm;
        }
    }
}

/// Cosine similarity between two sparse term vectors.
///
/// Defined as 0.0 when either vector has zero norm, so out-of-vocabulary
/// queries compare cleanly instead of producing NaN.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    // Iterate the smaller map
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let dot: f64 = small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|v| w * v))
        .sum();

    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    fn vectors_for(texts: &[&str]) -> Vec<TermVector> {
        let docs: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t)).collect();
        tfidf_vectors(&docs)
    }

    #[test]
    fn test_identical_documents_have_identical_vectors() {
        let vectors = vectors_for(&["reset my password", "reset my password"]);
        assert!((cosine_similarity(&vectors[0], &vectors[1]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents_are_orthogonal() {
        let vectors = vectors_for(&["reset password", "weather forecast"]);
        assert_eq!(cosine_similarity(&vectors[0], &vectors[1]), 0.0);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let vectors = vectors_for(&["reset my password please"]);
        let norm: f64 = vectors[0].values().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_document_yields_zero_vector() {
        let vectors = vectors_for(&["is it the", "reset password"]);
        assert!(vectors[0].is_empty());
        assert_eq!(cosine_similarity(&vectors[0], &vectors[1]), 0.0);
    }

    #[test]
    fn test_rare_terms_weigh_more_than_common_ones() {
        // "password" appears in every document, "billing" only in one.
        let vectors = vectors_for(&[
            "password billing",
            "password reset",
            "password expiry",
        ]);
        let billing = vectors[0].get("billing").copied().unwrap();
        let password = vectors[0].get("password").copied().unwrap();
        assert!(billing > password);
    }
}
