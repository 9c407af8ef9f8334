//! The `Server` struct itself: construction, ingestion, removal, and the
//! plain accessors (§6 public API surface).

use std::collections::BTreeMap;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::index::{tokenizer, IndexStore, StopWords};
use crate::types::Status;

/// The search engine: owns every document's text and both inverted
/// indices. `&mut Server` is required for `add`/`remove`; every read
/// (`find_top_documents`, `match_document`, `process_queries`, ...) takes
/// `&Server`. That split is what gives §5's "single writer, then
/// fan-out reads" contract for free from the borrow checker — no
/// internal locking is needed at this level.
pub struct Server {
    pub(crate) store: IndexStore,
    pub(crate) config: EngineConfig,
}

impl Server {
    /// Builds a server from any iterable of string-like stop words.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(stop_words, EngineConfig::default())
    }

    /// As `new`, with an overridden `EngineConfig`.
    pub fn with_config<I, S>(stop_words: I, config: EngineConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = StopWords::new(stop_words)?;
        Ok(Self {
            store: IndexStore::new(stop_words),
            config,
        })
    }

    /// Builds a server whose stop words are obtained by splitting
    /// `stop_words` on ASCII space via the Tokenizer.
    pub fn new_from_string(stop_words: &str) -> Result<Self> {
        Self::new(tokenizer::split(stop_words))
    }

    /// Ingests one document. Fails (with no index mutation at all) if
    /// `id < 0`, `id` is already present, or the text contains a token
    /// with a control byte.
    pub fn add(&mut self, id: i32, text: &str, status: Status, ratings: &[i32]) -> Result<()> {
        self.store.add(id, text, status, ratings)
    }

    /// Removes `id`, consistently, from both indices and the metadata
    /// map. A no-op if `id` is absent. `parallel` fans the per-term
    /// posting-list erasure out across threads.
    pub fn remove(&mut self, id: i32, parallel: bool) {
        self.store.remove(id, parallel)
    }

    pub fn document_count(&self) -> usize {
        self.store.document_count()
    }

    /// Document ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.store.ids()
    }

    /// Per-term frequencies for `id`; an empty map if `id` is absent.
    pub fn get_word_frequencies(&self, id: i32) -> BTreeMap<String, f64> {
        self.store.word_frequencies(id).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_from_string_splits_on_space() {
        let server = Server::new_from_string("and with").unwrap();
        assert!(server.store.stop_words().contains("and"));
        assert!(server.store.stop_words().contains("with"));
    }

    #[test]
    fn add_then_ids_reports_ascending() {
        let mut server = Server::new(Vec::<&str>::new()).unwrap();
        server.add(5, "a", Status::Actual, &[]).unwrap();
        server.add(1, "b", Status::Actual, &[]).unwrap();
        server.add(3, "c", Status::Actual, &[]).unwrap();
        assert_eq!(server.ids().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(server.document_count(), 3);
    }

    #[test]
    fn get_word_frequencies_empty_for_missing_doc() {
        let server = Server::new(Vec::<&str>::new()).unwrap();
        assert!(server.get_word_frequencies(99).is_empty());
    }

    #[test]
    fn stop_words_excluded_scenario() {
        // S2: stop-words "cat city"
        let mut server = Server::new_from_string("cat city").unwrap();
        server.add(42, "cat in the city", Status::Actual, &[1, 2, 3]).unwrap();
        let freqs = server.get_word_frequencies(42);
        assert!(freqs.contains_key("in"));
        assert!(freqs.contains_key("the"));
        assert!(!freqs.contains_key("cat"));
        assert!(!freqs.contains_key("city"));
    }
}
