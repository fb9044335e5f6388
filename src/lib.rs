//! Candex - candidate topic extraction over a pluggable full-text index
//!
//! Candex extracts candidate topic mentions from a block of text by querying
//! a full-text search index and collecting the scored documents. A section
//! is decomposed into search units (whole, or per-sentence), each unit
//! becomes a weighted boolean query, and the hits accumulate into one
//! ordered result per section.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use candex::{CandidateExtractor, ExtractorConfig, LowercaseTokenizer, MemoryIndex};
//!
//! let index = Arc::new(MemoryIndex::new());
//! let extractor = CandidateExtractor::new(
//!     index,
//!     Arc::new(LowercaseTokenizer),
//!     ExtractorConfig::default(),
//! );
//!
//! let extraction = extractor.extract("Paris is the capital of France.")?;
//! for candidate in extraction.candidates() {
//!     println!("{:?} ({})", candidate.document.title(), candidate.score);
//! }
//! # Ok::<(), candex::Error>(())
//! ```
//!
//! # Architecture
//!
//! The search index and tokenizer are external collaborators behind the
//! [`SearchIndex`] and [`Tokenize`] traits; [`MemoryIndex`] and
//! [`LowercaseTokenizer`] are the in-process implementations.

// Re-export the public API from the member crates
pub use candex_core::*;
pub use candex_search::*;
