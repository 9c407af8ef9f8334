//! Scorer (§4.E): TF-IDF relevance accumulation, minus-term exclusion, and
//! ranked top-k selection, in both sequential and parallel flavors.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::error::Result;
use crate::index::{parse_query, QueryVector, ShardedAccumulator};
use crate::server::Server;
use crate::types::{Document, Status};

impl Server {
    /// Ranked top-k documents matching `query` and satisfying `predicate`.
    ///
    /// Sequential mode iterates `plus_words`/`minus_words` exactly as
    /// parsed (duplicates contribute more than once); parallel mode sorts
    /// and dedups both before iterating, matching the source this engine
    /// is grounded on. See SPEC_FULL.md §2 for why this asymmetry is kept
    /// rather than "fixed": the two modes agree on every duplicate-free
    /// query, which covers every case this engine's callers produce.
    pub fn find_top_documents<P>(&self, query: &str, predicate: P, parallel: bool) -> Result<Vec<Document>>
    where
        P: Fn(i32, Status, i32) -> bool + Sync,
    {
        let parsed = parse_query(query, self.store.stop_words())?;
        if parsed.plus_words.is_empty() {
            return Ok(Vec::new());
        }

        let relevance = if parallel {
            self.accumulate_parallel(&parsed, &predicate)
        } else {
            self.accumulate_sequential(&parsed, &predicate)
        };

        let mut relevance = self.apply_minus_exclusion(relevance, &parsed, parallel);
        Ok(self.rank_and_truncate(&mut relevance))
    }

    /// Status-filtered overload: `predicate = |_, doc_status, _| doc_status == status`.
    pub fn find_top_documents_status(
        &self,
        query: &str,
        status: Status,
        parallel: bool,
    ) -> Result<Vec<Document>> {
        self.find_top_documents(query, move |_, doc_status, _| doc_status == status, parallel)
    }

    fn accumulate_sequential<P>(&self, parsed: &QueryVector<'_>, predicate: &P) -> BTreeMap<i32, f64>
    where
        P: Fn(i32, Status, i32) -> bool,
    {
        let mut relevance = BTreeMap::new();
        let doc_count = self.store.document_count();

        for term in &parsed.plus_words {
            let Some(postings) = self.store.postings(term) else { continue };
            if postings.is_empty() {
                // A tombstoned term (every holder removed) has an empty
                // posting list; ln(N/0) must never be evaluated.
                continue;
            }
            let idf = idf(doc_count, postings.len());
            for (&doc_id, &tf) in postings.iter() {
                let Some(meta) = self.store.meta(doc_id) else { continue };
                if predicate(doc_id, meta.status, meta.rating) {
                    *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
                }
            }
        }

        relevance
    }

    fn accumulate_parallel<P>(&self, parsed: &QueryVector<'_>, predicate: &P) -> BTreeMap<i32, f64>
    where
        P: Fn(i32, Status, i32) -> bool + Sync,
    {
        let mut plus_words = parsed.plus_words.clone();
        plus_words.sort_unstable();
        plus_words.dedup();

        let accumulator = ShardedAccumulator::new(self.config.shard_count);
        let doc_count = self.store.document_count();

        plus_words.par_iter().for_each(|term| {
            let Some(postings) = self.store.postings(term) else { return };
            if postings.is_empty() {
                return;
            }
            let idf = idf(doc_count, postings.len());
            for (&doc_id, &tf) in postings.iter() {
                let Some(meta) = self.store.meta(doc_id) else { continue };
                if predicate(doc_id, meta.status, meta.rating) {
                    accumulator.get_ref(doc_id).add(tf * idf);
                }
            }
        });

        accumulator.build_ordinary_map()
    }

    fn apply_minus_exclusion(
        &self,
        mut relevance: BTreeMap<i32, f64>,
        parsed: &QueryVector<'_>,
        parallel: bool,
    ) -> BTreeMap<i32, f64> {
        let mut minus_words = parsed.minus_words.clone();
        if parallel {
            minus_words.sort_unstable();
            minus_words.dedup();
        }

        for term in &minus_words {
            if let Some(postings) = self.store.postings(term) {
                for doc_id in postings.keys() {
                    relevance.remove(doc_id);
                }
            }
        }

        relevance
    }

    fn rank_and_truncate(&self, relevance: &mut BTreeMap<i32, f64>) -> Vec<Document> {
        let mut docs: Vec<Document> = relevance
            .iter()
            .filter_map(|(&id, &rel)| {
                self.store.meta(id).map(|meta| Document {
                    id,
                    relevance: rel,
                    rating: meta.rating,
                })
            })
            .collect();

        let eps = self.config.eps;
        docs.sort_by(|a, b| {
            if (a.relevance - b.relevance).abs() < eps {
                b.rating.cmp(&a.rating)
            } else {
                b.relevance.partial_cmp(&a.relevance).unwrap_or(std::cmp::Ordering::Equal)
            }
        });
        docs.truncate(self.config.max_result_document_count);
        docs
    }
}

fn idf(total_docs: usize, docs_with_term: usize) -> f64 {
    (total_docs as f64 / docs_with_term as f64).ln()
}
