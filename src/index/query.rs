//! Query parsing: classifies raw query tokens into plus/minus/stop-word
//! categories per §4.C.

use crate::error::{Result, SearchError};
use crate::index::stopwords::StopWords;
use crate::index::tokenizer;

/// The parsed form of a raw query string: mandatory-include and
/// must-exclude term sequences, borrowed from the original query.
/// Duplicates are preserved here; deduplication (where required) happens
/// downstream in the scorer/match-reporter, per execution mode.
#[derive(Debug, Clone, Default)]
pub(crate) struct QueryVector<'q> {
    pub plus_words: Vec<&'q str>,
    pub minus_words: Vec<&'q str>,
}

/// Parses `query` against `stop_words`, in input order.
pub(crate) fn parse<'q>(query: &'q str, stop_words: &StopWords) -> Result<QueryVector<'q>> {
    let mut result = QueryVector::default();

    for token in tokenizer::split(query) {
        let (is_minus, stripped) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token),
        };

        if stripped.is_empty() {
            return Err(SearchError::EmptyQueryWord);
        }
        if stripped.starts_with('-') {
            return Err(SearchError::DoubleMinus(token.to_string()));
        }
        if tokenizer::has_control_byte(stripped) {
            return Err(SearchError::InvalidQuerySymbol(token.to_string()));
        }

        if stop_words.contains(stripped) {
            continue;
        }

        if is_minus {
            result.minus_words.push(stripped);
        } else {
            result.plus_words.push(stripped);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(words: &[&str]) -> StopWords {
        StopWords::new(words.to_vec()).unwrap()
    }

    #[test]
    fn classifies_plus_minus_and_stop_words() {
        let sw = stops(&["and", "with"]);
        let q = parse("curly and funny -not", &sw).unwrap();
        assert_eq!(q.plus_words, vec!["curly", "funny"]);
        assert_eq!(q.minus_words, vec!["not"]);
    }

    #[test]
    fn preserves_duplicates_and_order() {
        let sw = stops(&[]);
        let q = parse("cat cat -dog -dog", &sw).unwrap();
        assert_eq!(q.plus_words, vec!["cat", "cat"]);
        assert_eq!(q.minus_words, vec!["dog", "dog"]);
    }

    #[test]
    fn rejects_double_minus() {
        let sw = stops(&[]);
        assert_eq!(parse("--bad", &sw).unwrap_err(), SearchError::DoubleMinus("--bad".to_string()));
    }

    #[test]
    fn rejects_bare_minus() {
        let sw = stops(&[]);
        assert_eq!(parse("-", &sw).unwrap_err(), SearchError::EmptyQueryWord);
        assert_eq!(parse("good -", &sw).unwrap_err(), SearchError::EmptyQueryWord);
    }

    #[test]
    fn rejects_control_byte_in_query_word() {
        let sw = stops(&[]);
        let err = parse("bad\u{0002}word", &sw).unwrap_err();
        assert_eq!(err, SearchError::InvalidQuerySymbol("bad\u{0002}word".to_string()));
    }
}
