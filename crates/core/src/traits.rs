//! Capability traits for external collaborators
//!
//! This module defines the contracts through which the extraction core talks
//! to its collaborators: the full-text search index and the tokenizer. Both
//! are consumed behind trait objects so the core can be exercised against an
//! in-memory index and a deterministic tokenizer, decoupled from any live
//! backend.
//!
//! Thread safety: both traits require `Send + Sync`. Concurrent extraction
//! calls are independent as long as the shared handles are safe for
//! concurrent use - a property owned by the implementation, not by the core.

use std::collections::BTreeSet;

use crate::document::RawHit;
use crate::error::Result;
use crate::query::Query;
use crate::types::RankingMode;

/// Full-text search index abstraction
///
/// The core never owns index storage, ranking internals, transport, retry
/// policy, or timeouts - all of that lives behind this seam.
pub trait SearchIndex: Send + Sync {
    /// Execute a query, returning up to `limit` top-scoring hits from `offset`
    ///
    /// Hits arrive in backend rank order. Zero hits is a valid outcome.
    /// `ranking` requests a scoring mode; backends with exact corpus
    /// statistics may treat the modes identically.
    ///
    /// # Errors
    ///
    /// - [`Error::BackendUnavailable`](crate::Error::BackendUnavailable) if
    ///   the index cannot be reached.
    /// - [`Error::QueryRejected`](crate::Error::QueryRejected) if the backend
    ///   considers the query malformed.
    fn search(
        &self,
        index: &str,
        doc_type: &str,
        query: &Query,
        offset: usize,
        limit: usize,
        ranking: RankingMode,
    ) -> Result<Vec<RawHit>>;
}

/// Tokenizer abstraction
///
/// Splits a text unit into a set of lexical tokens: duplicates collapsed,
/// deterministic iteration order so that query construction is reproducible.
pub trait Tokenize: Send + Sync {
    /// Tokenize text into a set of distinct tokens
    ///
    /// Always succeeds; empty or whitespace-only input yields an empty set.
    fn tokens(&self, text: &str) -> BTreeSet<String>;
}
