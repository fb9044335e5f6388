//! Core types and contracts for Candex
//!
//! This crate defines the foundational types used throughout the system:
//! - Granularity, QueryMode, RankingMode: closed configuration enums
//! - ExtractorConfig: per-extractor settings
//! - WeightedClause, Query: weighted boolean query model
//! - RawHit, Document, Candidate: what comes back from the backend
//! - Extraction: section-bound, append-only result
//! - Error: error type hierarchy
//! - Traits: collaborator contracts (SearchIndex, Tokenize)

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod document;
pub mod error;
pub mod query;
pub mod result;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use document::{Candidate, Document, RawFields, RawHit};
pub use error::{Error, Result};
pub use query::{Query, WeightedClause};
pub use result::Extraction;
pub use traits::{SearchIndex, Tokenize};
pub use types::{ExtractorConfig, Granularity, QueryMode, RankingMode};
