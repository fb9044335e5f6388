//! Candidate extraction orchestration
//!
//! This module ties the strategy together:
//!
//! ```text
//! section
//!    │
//!    ▼
//! segment ──► units ──► build_query ──► SearchIndex::search ──► hits
//!                                                                │
//!                                                                ▼
//!                                                       Extraction (append)
//! ```
//!
//! Units are processed strictly sequentially in input order. The first
//! backend failure aborts the whole call: no retries, no partial result.

use std::sync::Arc;

use candex_core::{
    Document, Extraction, ExtractorConfig, Query, RankingMode, RawHit, Result, SearchIndex,
    Tokenize,
};
use tracing::debug;

use crate::builder::build_query;
use crate::segmenter::segment;

// ============================================================================
// CandidateSource
// ============================================================================

/// Trait for candidate-extraction strategies
///
/// The consuming pipeline holds strategy objects behind this seam, so an
/// extractor backed by a different index or strategy slots in without
/// touching call sites.
pub trait CandidateSource {
    /// Extract ranked topic candidates for one section
    ///
    /// # Errors
    ///
    /// Propagates backend failures
    /// ([`BackendUnavailable`](candex_core::Error::BackendUnavailable),
    /// [`QueryRejected`](candex_core::Error::QueryRejected)); the whole call
    /// fails, candidates from earlier units are not delivered.
    fn candidates(&self, section: &str) -> Result<Extraction>;
}

// ============================================================================
// CandidateExtractor
// ============================================================================

/// Search-index-backed candidate extractor
///
/// Holds shared handles to the collaborators plus the strategy
/// configuration. Stateless across calls: every extraction owns its
/// Extraction exclusively, so one extractor can serve concurrent calls as
/// long as the handles allow it (both traits require `Send + Sync`).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use candex_core::ExtractorConfig;
/// use candex_search::{CandidateExtractor, LowercaseTokenizer, MemoryIndex};
///
/// let extractor = CandidateExtractor::new(
///     Arc::new(MemoryIndex::new()),
///     Arc::new(LowercaseTokenizer),
///     ExtractorConfig::default(),
/// );
///
/// let extraction = extractor.extract("Paris is the capital of France.").unwrap();
/// assert!(extraction.is_empty());
/// ```
pub struct CandidateExtractor {
    index: Arc<dyn SearchIndex>,
    tokenizer: Arc<dyn Tokenize>,
    config: ExtractorConfig,
}

impl CandidateExtractor {
    /// Create an extractor over explicit collaborator handles
    ///
    /// Handle lifecycle (connect on startup, dispose on shutdown) belongs to
    /// the caller; the extractor only borrows shared ownership.
    pub fn new(
        index: Arc<dyn SearchIndex>,
        tokenizer: Arc<dyn Tokenize>,
        config: ExtractorConfig,
    ) -> Self {
        CandidateExtractor {
            index,
            tokenizer,
            config,
        }
    }

    /// The extractor's configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract ranked topic candidates for one section
    ///
    /// Segments the section per the configured granularity, builds and
    /// executes one query per unit in order, and appends every returned hit
    /// to the section's Extraction in arrival order. No cross-unit merging,
    /// deduplication or re-ranking.
    ///
    /// # Errors
    ///
    /// Fail-fast on the first backend error; see [`CandidateSource::candidates`].
    pub fn extract(&self, section: &str) -> Result<Extraction> {
        let mut extraction = Extraction::new(section);
        let units = segment(section, self.config.granularity);
        debug!(
            target: "candex::extract",
            units = units.len(),
            granularity = ?self.config.granularity,
            query_mode = ?self.config.query_mode,
            "segmented section"
        );

        for unit in units {
            let query = build_query(unit, self.config.query_mode, self.tokenizer.as_ref());
            let hits = self.execute(&query)?;
            debug!(
                target: "candex::extract",
                clauses = query.len(),
                hits = hits.len(),
                "executed unit query"
            );
            for hit in hits {
                extraction.add(Document::from_raw_fields(hit.fields), hit.score);
            }
        }

        Ok(extraction)
    }

    /// Execute one unit's query, requesting precise-scoring ranking
    fn execute(&self, query: &Query) -> Result<Vec<RawHit>> {
        self.index.search(
            &self.config.index,
            &self.config.doc_type,
            query,
            0,
            self.config.max_hits,
            RankingMode::DfsQueryThenFetch,
        )
    }
}

impl CandidateSource for CandidateExtractor {
    fn candidates(&self, section: &str) -> Result<Extraction> {
        self.extract(section)
    }
}
