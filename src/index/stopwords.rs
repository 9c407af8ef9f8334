//! The immutable stop-word set established at `Server` construction.

use std::collections::BTreeSet;

use crate::error::{Result, SearchError};
use crate::index::tokenizer;

/// Ordered, immutable-after-construction set of stop words.
#[derive(Debug, Clone, Default)]
pub(crate) struct StopWords(BTreeSet<String>);

impl StopWords {
    /// Builds the set from any iterable of string-likes, validating each
    /// entry contains no control byte. Empty entries are silently dropped
    /// (matching the source's `MakeUniqueNonEmptyStrings`).
    pub(crate) fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if tokenizer::has_control_byte(word) {
                return Err(SearchError::InvalidStopWord(word.to_string()));
            }
            set.insert(word.to_string());
        }
        Ok(Self(set))
    }

    pub(crate) fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_control_bytes() {
        let err = StopWords::new(["fine", "bad\u{0001}word"]).unwrap_err();
        assert_eq!(err, SearchError::InvalidStopWord("bad\u{0001}word".to_string()));
    }

    #[test]
    fn drops_empty_entries_and_dedups() {
        let stops = StopWords::new(["and", "", "and", "with"]).unwrap();
        assert!(stops.contains("and"));
        assert!(stops.contains("with"));
        assert!(!stops.contains(""));
    }
}
