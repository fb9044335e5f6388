//! Comprehensive end-to-end extraction tests
//!
//! Exercises the re-exported facade across all mode combinations, including
//! the worked examples from the documented behavior: query counts per
//! granularity, clause shapes per query mode, candidate ordering, and
//! whole-call failure semantics.

use std::sync::{Arc, Mutex};

use candex::{
    CandidateExtractor, CandidateSource, Error, ExtractorConfig, Granularity, LowercaseTokenizer,
    MemoryIndex, Query, QueryMode, RankingMode, RawFields, RawHit, Result, SearchIndex,
};
use serde_json::json;

// ============================================================================
// Test Helpers
// ============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn article(title: &str, links: &[&str], redirects: &[&str]) -> RawFields {
    let mut fields = RawFields::new();
    fields.insert("title".to_string(), json!(title));
    fields.insert("links".to_string(), json!(links));
    fields.insert("redirects".to_string(), json!(redirects));
    fields
}

fn wiki() -> Arc<MemoryIndex> {
    let index = MemoryIndex::new();
    index.add_document(
        "wiki",
        "article",
        article("Paris", &["capital", "France", "Seine"], &["City of Light"]),
    );
    index.add_document(
        "wiki",
        "article",
        article("France", &["Paris", "Europe", "capital"], &["French Republic"]),
    );
    index.add_document("wiki", "article", article("Cat", &["purr", "pet"], &["Felis"]));
    index.add_document("wiki", "article", article("Dog", &["bark", "pet"], &["Canis"]));
    Arc::new(index)
}

fn extractor(config: ExtractorConfig) -> CandidateExtractor {
    CandidateExtractor::new(wiki(), Arc::new(LowercaseTokenizer), config)
}

/// Index wrapper counting executed queries
struct CountingIndex {
    inner: Arc<MemoryIndex>,
    calls: Mutex<usize>,
}

impl CountingIndex {
    fn new(inner: Arc<MemoryIndex>) -> Self {
        CountingIndex {
            inner,
            calls: Mutex::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl SearchIndex for CountingIndex {
    fn search(
        &self,
        index: &str,
        doc_type: &str,
        query: &Query,
        offset: usize,
        limit: usize,
        ranking: RankingMode,
    ) -> Result<Vec<RawHit>> {
        *self.calls.lock().unwrap() += 1;
        self.inner.search(index, doc_type, query, offset, limit, ranking)
    }
}

// ============================================================================
// Worked Examples
// ============================================================================

/// "Paris is the capital of France." under Sentence+Raw: one non-empty unit
/// (plus the trailing empty fragment), candidates from the sentence text
#[test]
fn test_example_paris_sentence_raw() {
    init_tracing();
    let counting = Arc::new(CountingIndex::new(wiki()));
    let extractor = CandidateExtractor::new(
        counting.clone(),
        Arc::new(LowercaseTokenizer),
        ExtractorConfig::new(10, Granularity::Sentence, QueryMode::Raw),
    );

    let extraction = extractor.extract("Paris is the capital of France.").unwrap();

    // "Paris is the capital of France" + trailing "" fragment
    assert_eq!(counting.calls(), 2);
    assert!(!extraction.is_empty());
    assert_eq!(extraction.candidates()[0].document.title(), Some("Paris"));
}

/// "Cats purr. Dogs bark." under Sentence granularity: queries issued in
/// fragment order
#[test]
fn test_example_cats_dogs_unit_order() {
    init_tracing();
    let counting = Arc::new(CountingIndex::new(wiki()));
    let extractor = CandidateExtractor::new(
        counting.clone(),
        Arc::new(LowercaseTokenizer),
        ExtractorConfig::new(10, Granularity::Sentence, QueryMode::Raw),
    );

    let extraction = extractor.extract("Cats purr. Dogs bark.").unwrap();

    assert_eq!(counting.calls(), 3);
    let titles: Vec<_> = extraction
        .candidates()
        .iter()
        .map(|c| c.document.title().unwrap())
        .collect();
    assert_eq!(titles, vec!["Cat", "Dog"]);
}

/// Backend returning zero hits leaves a valid, empty, non-error result
#[test]
fn test_example_zero_hits_valid_result() {
    let extractor = extractor(ExtractorConfig::default());

    let extraction = extractor.extract("xylophone zymurgy").unwrap();

    assert!(extraction.is_empty());
    assert_eq!(extraction.section(), "xylophone zymurgy");
}

/// Redirects participate in matching at their reduced weight
#[test]
fn test_redirect_field_matches() {
    let extractor = extractor(ExtractorConfig::default());

    let extraction = extractor.extract("Felis").unwrap();

    assert_eq!(extraction.len(), 1);
    assert_eq!(extraction.candidates()[0].document.title(), Some("Cat"));
    // redirects boost only
    assert!((extraction.candidates()[0].score - 0.1).abs() < 1e-6);
}

// ============================================================================
// Mode Matrix
// ============================================================================

/// Every granularity x query-mode combination produces a valid extraction
#[test]
fn test_all_mode_combinations_succeed() {
    init_tracing();
    let section = "Cats purr. The capital of France is Paris.";

    for granularity in [Granularity::Whole, Granularity::Sentence] {
        for query_mode in [QueryMode::Raw, QueryMode::Tokenized] {
            let config = ExtractorConfig::new(10, granularity, query_mode);
            let extraction = extractor(config).extract(section).unwrap();

            assert_eq!(extraction.section(), section);
            assert!(
                !extraction.is_empty(),
                "no candidates for {granularity:?}/{query_mode:?}"
            );
        }
    }
}

/// Tokenized mode surfaces documents that share no verbatim phrase with the
/// section, only tokens
#[test]
fn test_tokenized_mode_token_level_recall() {
    let config = ExtractorConfig::new(10, Granularity::Whole, QueryMode::Tokenized);
    let extraction = extractor(config).extract("pet pet pet").unwrap();

    let titles: Vec<_> = extraction
        .candidates()
        .iter()
        .map(|c| c.document.title().unwrap())
        .collect();
    assert!(titles.contains(&"Cat"));
    assert!(titles.contains(&"Dog"));
}

/// A document matched by two sentences appears twice, no deduplication
#[test]
fn test_duplicate_candidates_across_units() {
    let config = ExtractorConfig::new(10, Granularity::Sentence, QueryMode::Raw);
    let extraction = extractor(config).extract("pet. pet").unwrap();

    let cat_count = extraction
        .candidates()
        .iter()
        .filter(|c| c.document.title() == Some("Cat"))
        .count();
    assert_eq!(cat_count, 2);
}

/// max_hits caps hits per query, not per section
#[test]
fn test_max_hits_is_per_query() {
    let config = ExtractorConfig::new(1, Granularity::Sentence, QueryMode::Raw);
    let extraction = extractor(config).extract("pet. pet").unwrap();

    // Two units, each capped at one hit
    assert_eq!(extraction.len(), 2);
}

// ============================================================================
// Failure Semantics
// ============================================================================

/// Unavailable backend fails the call through the facade types
#[test]
fn test_backend_unavailable_propagates() {
    struct DownIndex;

    impl SearchIndex for DownIndex {
        fn search(
            &self,
            _index: &str,
            _doc_type: &str,
            _query: &Query,
            _offset: usize,
            _limit: usize,
            _ranking: RankingMode,
        ) -> Result<Vec<RawHit>> {
            Err(Error::BackendUnavailable("no route to host".to_string()))
        }
    }

    let extractor = CandidateExtractor::new(
        Arc::new(DownIndex),
        Arc::new(LowercaseTokenizer),
        ExtractorConfig::default(),
    );

    let err = extractor.candidates("anything").unwrap_err();
    assert!(err.to_string().contains("search backend unavailable"));
}
