//! Engine configuration: the tunable constants behind ranking and parallelism.

/// Maximum number of documents `find_top_documents` ever returns.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevance-comparison tolerance used for rank tie-breaking.
pub const EPS: f64 = 1e-6;

/// Shard count for the concurrent relevance accumulator.
pub const SHARD_COUNT: usize = 16;

/// Bundled, overridable engine constants.
///
/// Mirrors the small `Copy` config-struct-with-`Default` shape used
/// throughout the storage engine (see `BM25Config`): a handful of numeric
/// knobs, one `Default` impl, passed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Results kept after ranking (§4.E step 7).
    pub max_result_document_count: usize,
    /// Tie-break tolerance for relevance comparisons (§4.E step 6).
    pub eps: f64,
    /// Shard count for the concurrent accumulator (§4.B).
    pub shard_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_result_document_count: MAX_RESULT_DOCUMENT_COUNT,
            eps: EPS,
            shard_count: SHARD_COUNT,
        }
    }
}
