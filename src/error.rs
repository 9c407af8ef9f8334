//! Error types for the search engine core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Failure categories raised by the engine. Every fallible operation aborts
/// on the first error; no partial index mutation is ever observed by a caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("stop word '{0}' contains a control character")]
    InvalidStopWord(String),

    #[error("invalid document id {0}")]
    InvalidDocumentId(i32),

    #[error("word '{0}' in document contains a control character")]
    InvalidWord(String),

    #[error("query word is empty")]
    EmptyQueryWord,

    #[error("query word '{0}' starts with a double minus")]
    DoubleMinus(String),

    #[error("query word '{0}' contains a control character")]
    InvalidQuerySymbol(String),
}
