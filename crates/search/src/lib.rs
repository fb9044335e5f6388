//! Candidate-extraction strategy logic for Candex
//!
//! This crate provides:
//! - Segmenter: section -> search units per configured granularity
//! - Query builder: search unit -> weighted boolean query
//! - CandidateExtractor: orchestration over a pluggable search index
//! - CandidateSource trait for strategy objects
//! - LowercaseTokenizer default tokenizer
//! - MemoryIndex in-process backend
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use candex_core::{ExtractorConfig, Granularity, QueryMode};
//! use candex_search::{CandidateExtractor, LowercaseTokenizer, MemoryIndex};
//!
//! let index = Arc::new(MemoryIndex::new());
//! let extractor = CandidateExtractor::new(
//!     index,
//!     Arc::new(LowercaseTokenizer),
//!     ExtractorConfig::new(10, Granularity::Sentence, QueryMode::Tokenized),
//! );
//! let extraction = extractor.extract("Cats purr. Dogs bark.")?;
//! # Ok::<(), candex_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod extractor;
pub mod memory;
pub mod segmenter;
pub mod tokenizer;

// Re-export commonly used items
pub use builder::{
    build_query, BOOST_LINKS, BOOST_REDIRECTS, BOOST_TITLE, FIELD_LINKS, FIELD_REDIRECTS,
    FIELD_TITLE,
};
pub use extractor::{CandidateExtractor, CandidateSource};
pub use memory::MemoryIndex;
pub use segmenter::segment;
pub use tokenizer::LowercaseTokenizer;
