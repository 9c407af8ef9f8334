//! Public data types shared across the engine: document status, the
//! ranked result record, and the internal per-document metadata record.

use serde::{Deserialize, Serialize};

/// A document's lifecycle category. Opaque to scoring except via the
/// predicate the caller supplies to `find_top_documents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl Default for Status {
    fn default() -> Self {
        Status::Actual
    }
}

/// Internal, owned record for a single ingested document.
#[derive(Debug, Clone)]
pub(crate) struct DocumentMeta {
    pub rating: i32,
    pub status: Status,
    pub text: String,
}

/// A single ranked search result.
///
/// Equality is the corrected definition from the spec (the source's
/// `operator==` compared `rating` against itself on both sides by typo):
/// id and rating compare exactly, relevance compares within `EPS`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Document {
    pub id: i32,
    pub relevance: f64,
    pub rating: i32,
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.rating == other.rating
            && (self.relevance - other.relevance).abs() < crate::config::EPS
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Average of `ratings`, truncated toward zero; `0` for an empty slice.
///
/// Rust's `i32` division already truncates toward zero, matching the
/// source's `accumulate(...) / size` behaviour on negative ratings.
pub(crate) fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i32 = ratings.iter().sum();
    sum / ratings.len() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_rating_matches_fixtures() {
        assert_eq!(average_rating(&[7, 2, 7]), 5);
        assert_eq!(average_rating(&[1, 2, 8, 9, 6, 10, 12]), 6);
        assert_eq!(average_rating(&[-7, -2, -7]), -5);
        assert_eq!(average_rating(&[-1, -2, -8, -9, -6, -10, -12]), -6);
        assert_eq!(average_rating(&[8, -3]), 2);
        assert_eq!(average_rating(&[]), 0);
    }

    #[test]
    fn document_equality_ignores_subepsilon_relevance_drift() {
        let a = Document { id: 1, relevance: 0.5, rating: 3 };
        let b = Document { id: 1, relevance: 0.5 + 1e-9, rating: 3 };
        assert_eq!(a, b);

        let c = Document { id: 1, relevance: 0.5 + 1e-3, rating: 3 };
        assert_ne!(a, c);
    }
}
