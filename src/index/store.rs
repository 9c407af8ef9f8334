//! Index Store (§4.D) and Removal Operator (§4.H): the dual inverted
//! indices, document metadata, and the id set, plus consistent removal.
//!
//! `doc_to_term` (forward index) and `term_to_doc` (inverted index) must
//! mirror each other exactly (§3). The forward index and document
//! metadata are keyed by `BTreeMap<i32, _>` so `ids()` falls out as plain
//! ascending key iteration, with no separate id set to keep in sync.
//!
//! `term_to_doc`'s outer map is a `DashMap` rather than a `BTreeMap`: it is
//! the structure the parallel removal path (§4.H, §9 note (a)) fans out
//! over one term at a time, and `DashMap::get_mut` locks only the shard
//! holding that one key, leaving every other term's posting list free for
//! concurrent access — which is exactly the "outer map read-only, inner
//! maps mutated independently" discipline the spec requires.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use dashmap::DashMap;
use rayon::prelude::*;

use crate::error::{Result, SearchError};
use crate::index::stopwords::StopWords;
use crate::index::tokenizer;
use crate::types::{average_rating, DocumentMeta, Status};

pub(crate) struct IndexStore {
    documents: BTreeMap<i32, DocumentMeta>,
    doc_to_term: BTreeMap<i32, BTreeMap<String, f64>>,
    term_to_doc: DashMap<String, BTreeMap<i32, f64>>,
    stop_words: StopWords,
}

impl IndexStore {
    pub(crate) fn new(stop_words: StopWords) -> Self {
        Self {
            documents: BTreeMap::new(),
            doc_to_term: BTreeMap::new(),
            term_to_doc: DashMap::new(),
            stop_words,
        }
    }

    pub(crate) fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub(crate) fn add(
        &mut self,
        id: i32,
        text: &str,
        status: Status,
        ratings: &[i32],
    ) -> Result<()> {
        if id < 0 || self.documents.contains_key(&id) {
            return Err(SearchError::InvalidDocumentId(id));
        }

        // Validate the whole document before mutating anything: a control
        // byte anywhere in the text aborts with no partial index entry.
        let raw_tokens: Vec<&str> = tokenizer::split(text).collect();
        for token in &raw_tokens {
            if tokenizer::has_control_byte(token) {
                return Err(SearchError::InvalidWord(token.to_string()));
            }
        }

        let non_stop: Vec<&str> = raw_tokens
            .into_iter()
            .filter(|token| !self.stop_words.contains(token))
            .collect();
        let tf_increment = 1.0 / non_stop.len() as f64;

        let rating = average_rating(ratings);
        self.documents.insert(
            id,
            DocumentMeta {
                rating,
                status,
                text: text.to_string(),
            },
        );

        let forward = self.doc_to_term.entry(id).or_default();
        for term in non_stop {
            *forward.entry(term.to_string()).or_insert(0.0) += tf_increment;
            let mut postings = self.term_to_doc.entry(term.to_string()).or_default();
            *postings.entry(id).or_insert(0.0) += tf_increment;
        }

        Ok(())
    }

    /// No-op if `id` is absent. Otherwise removes it from both indices,
    /// the metadata map, and (implicitly) the id set in one pass.
    pub(crate) fn remove(&mut self, id: i32, parallel: bool) {
        let Some(terms) = self.doc_to_term.remove(&id) else {
            return;
        };
        let terms: Vec<String> = terms.into_keys().collect();

        let erase_one = |term: &String| {
            if let Some(mut postings) = self.term_to_doc.get_mut(term) {
                postings.remove(&id);
            }
        };

        if parallel {
            terms.par_iter().for_each(erase_one);
        } else {
            terms.iter().for_each(erase_one);
        }

        self.documents.remove(&id);
    }

    pub(crate) fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.documents.keys().copied()
    }

    pub(crate) fn contains(&self, id: i32) -> bool {
        self.documents.contains_key(&id)
    }

    pub(crate) fn meta(&self, id: i32) -> Option<&DocumentMeta> {
        self.documents.get(&id)
    }

    pub(crate) fn word_frequencies(&self, id: i32) -> &BTreeMap<String, f64> {
        static EMPTY: OnceLock<BTreeMap<String, f64>> = OnceLock::new();
        self.doc_to_term
            .get(&id)
            .unwrap_or_else(|| EMPTY.get_or_init(BTreeMap::new))
    }

    pub(crate) fn terms_for_doc(&self, id: i32) -> Option<&BTreeMap<String, f64>> {
        self.doc_to_term.get(&id)
    }

    pub(crate) fn postings(
        &self,
        term: &str,
    ) -> Option<dashmap::mapref::one::Ref<'_, String, BTreeMap<i32, f64>>> {
        self.term_to_doc.get(term)
    }
}
