//! The indexing engine: tokenizer, stop-word set, query parser, dual
//! inverted/forward indices, and the concurrent accumulator the scorer
//! uses in parallel mode.

mod query;
mod sharded_map;
mod stopwords;
mod store;
pub(crate) mod tokenizer;

pub(crate) use query::{parse as parse_query, QueryVector};
pub(crate) use sharded_map::ShardedAccumulator;
pub(crate) use stopwords::StopWords;
pub(crate) use store::IndexStore;
