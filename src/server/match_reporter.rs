//! Match Reporter (§4.F): for a single (query, doc-id) pair, the matched
//! plus-terms or an empty result if any minus-term hits.

use rayon::join;

use crate::error::{Result, SearchError};
use crate::index::parse_query;
use crate::server::Server;
use crate::types::Status;

impl Server {
    /// Returns the sorted, deduped plus-terms of `query` that appear in
    /// `id`'s forward index, or `(vec![], status)` if any minus-term also
    /// appears there. Fails if `id < 0` or unknown.
    ///
    /// Sequential and parallel modes must agree byte-for-byte; `parallel`
    /// only controls whether the "any minus hit" and "collect plus" passes
    /// run concurrently via `rayon::join`, which is an implementation
    /// detail invisible in the result.
    pub fn match_document(&self, query: &str, id: i32, parallel: bool) -> Result<(Vec<String>, Status)> {
        if id < 0 || !self.store.contains(id) {
            return Err(SearchError::InvalidDocumentId(id));
        }

        let parsed = parse_query(query, self.store.stop_words())?;
        let forward = self.store.terms_for_doc(id);
        let status = self.store.meta(id).expect("validated above").status;

        let Some(forward) = forward else {
            return Ok((Vec::new(), status));
        };

        let any_minus_hit = |words: &[&str]| words.iter().any(|w| forward.contains_key(*w));
        let collect_plus = |words: &[&str]| -> Vec<String> {
            let mut matched: Vec<String> = words
                .iter()
                .filter(|w| forward.contains_key(**w))
                .map(|w| w.to_string())
                .collect();
            matched.sort();
            matched.dedup();
            matched
        };

        let (minus_hit, mut matched) = if parallel {
            join(
                || any_minus_hit(&parsed.minus_words),
                || collect_plus(&parsed.plus_words),
            )
        } else {
            (any_minus_hit(&parsed.minus_words), collect_plus(&parsed.plus_words))
        };

        if minus_hit {
            matched.clear();
        }

        Ok((matched, status))
    }
}
