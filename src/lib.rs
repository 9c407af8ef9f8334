//! In-memory document search engine with TF-IDF ranking, mandatory/exclusion
//! query terms, and a parallel batch query driver.
//!
//! The engine is a plain owned object (`Server`); there is no persistence,
//! no wire protocol, and no background task. Mutating calls (`add`,
//! `remove`) take `&mut Server`; every read (`find_top_documents`,
//! `match_document`, `process_queries`, ...) takes `&Server`, which is also
//! the engine's entire concurrency contract — see `server::core`.

mod config;
mod error;
mod index;
mod server;
mod types;

pub use config::{EngineConfig, EPS, MAX_RESULT_DOCUMENT_COUNT, SHARD_COUNT};
pub use error::{Result, SearchError};
pub use server::Server;
pub use types::{Document, Status};
