//! Extraction result type
//!
//! An Extraction is owned by one section for its lifetime: created empty at
//! the start of an extraction call, appended to by the aggregator as hits
//! arrive, and handed to the caller as the final output. No mutation after
//! return.
//!
//! # Invariant
//!
//! Every candidate was produced by a query derived from this extraction's
//! section (directly or via one of its search units). Candidate order is
//! search-unit processing order and, within a unit, the order the backend
//! returned hits - no cross-unit re-sorting, no deduplication. A document
//! matched by two units appears twice, possibly with different scores.

use crate::document::{Candidate, Document};
use serde::{Deserialize, Serialize};

// ============================================================================
// Extraction
// ============================================================================

/// Ordered, append-only candidates for one section
///
/// # Examples
///
/// ```
/// use candex_core::{Document, Extraction};
///
/// let mut extraction = Extraction::new("Paris is the capital of France.");
/// extraction.add(Document::from_raw_fields(serde_json::Map::new()), 1.5);
///
/// assert_eq!(extraction.len(), 1);
/// assert_eq!(extraction.section(), "Paris is the capital of France.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    section: String,
    candidates: Vec<Candidate>,
}

impl Extraction {
    /// Create an empty extraction bound to a section
    pub fn new(section: impl Into<String>) -> Self {
        Extraction {
            section: section.into(),
            candidates: vec![],
        }
    }

    /// Append one candidate in arrival order
    pub fn add(&mut self, document: Document, score: f32) {
        self.candidates.push(Candidate::new(document, score));
    }

    /// The originating section text
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Candidates in arrival order
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if no candidates were collected (a valid, successful outcome)
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Consume the extraction, yielding its candidates
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}
