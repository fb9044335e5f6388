//! Configuration types for candidate extraction
//!
//! This module defines the configuration axes of the extraction strategy:
//! - Granularity: how a section is decomposed into search units
//! - QueryMode: how a search unit is turned into a weighted query
//! - RankingMode: which scoring mode is requested from the backend
//! - ExtractorConfig: per-extractor settings with builder methods
//!
//! Granularity and QueryMode are closed enums on purpose: the segmenter and
//! query builder dispatch over them exhaustively, so adding a mode forces
//! every call site to handle it.

use serde::{Deserialize, Serialize};

// ============================================================================
// Granularity
// ============================================================================

/// Search granularity - how a section is split into search units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Granularity {
    /// One search unit: the whole section unchanged (default)
    #[default]
    Whole,
    /// One search unit per period-delimited sentence fragment
    Sentence,
}

// ============================================================================
// QueryMode
// ============================================================================

/// Query construction mode - how a search unit becomes a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QueryMode {
    /// Match the unit's full text verbatim against each field (default)
    #[default]
    Raw,
    /// Tokenize the unit and match each distinct token against each field
    Tokenized,
}

// ============================================================================
// RankingMode
// ============================================================================

/// Scoring mode requested from the search backend
///
/// `DfsQueryThenFetch` asks the backend to recompute global term statistics
/// before scoring, trading early-exit performance for precise relevance.
/// In-process backends already score against exact corpus statistics and may
/// treat the two modes identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankingMode {
    /// Precise scoring: gather distributed term statistics, then score (default)
    #[default]
    DfsQueryThenFetch,
    /// Standard scoring with per-shard statistics
    QueryThenFetch,
}

// ============================================================================
// ExtractorConfig
// ============================================================================

/// Configuration for a candidate extractor
///
/// Field names and clause boosts are NOT configurable - they are fixed
/// constants in the query builder for output compatibility. This struct
/// carries only the deployment-level knobs.
///
/// # Default Values
///
/// - granularity: [`Granularity::Whole`]
/// - query_mode: [`QueryMode::Raw`]
/// - max_hits: 10 (per query, not per section)
/// - index: `"wiki"`
/// - doc_type: `"article"`
///
/// # Examples
///
/// ```
/// use candex_core::{ExtractorConfig, Granularity, QueryMode};
///
/// let config = ExtractorConfig::new(25, Granularity::Sentence, QueryMode::Tokenized);
///
/// assert_eq!(config.max_hits, 25);
/// assert_eq!(config.index, "wiki");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// How to split a section into search units
    pub granularity: Granularity,

    /// How to turn a search unit into a query
    pub query_mode: QueryMode,

    /// Maximum hits requested per query (applied per query, not per section)
    pub max_hits: usize,

    /// Name of the index to query
    pub index: String,

    /// Document type within the index
    pub doc_type: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            granularity: Granularity::default(),
            query_mode: QueryMode::default(),
            max_hits: 10,
            index: "wiki".to_string(),
            doc_type: "article".to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Create a config with explicit hit budget, granularity and query mode
    pub fn new(max_hits: usize, granularity: Granularity, query_mode: QueryMode) -> Self {
        ExtractorConfig {
            granularity,
            query_mode,
            max_hits,
            ..ExtractorConfig::default()
        }
    }

    /// Builder: set granularity
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Builder: set query mode
    pub fn with_query_mode(mut self, query_mode: QueryMode) -> Self {
        self.query_mode = query_mode;
        self
    }

    /// Builder: set per-query hit budget
    pub fn with_max_hits(mut self, max_hits: usize) -> Self {
        self.max_hits = max_hits;
        self
    }

    /// Builder: set the target index name
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Builder: set the document type within the index
    pub fn with_doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type.into();
        self
    }
}
