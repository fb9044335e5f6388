//! In-memory search index
//!
//! An in-process [`SearchIndex`] implementation used as the test backend and
//! as an embeddable backend for small corpora. It holds document field maps
//! per `index/doc_type` collection and scores them with match-query
//! semantics: each clause contributes `boost x |overlapping terms|` between
//! the clause text and the targeted field.
//!
//! Corpus statistics are exact here, so both [`RankingMode`] variants score
//! identically. Remote backends (the seam this stands in for) implement
//! [`SearchIndex`] themselves.
//!
//! # Thread Safety
//!
//! Uses DashMap for concurrent access. Multiple readers/writers supported.

use candex_core::{Query, RankingMode, RawFields, RawHit, Result, SearchIndex};
use dashmap::DashMap;
use std::collections::BTreeSet;

// ============================================================================
// MemoryIndex
// ============================================================================

/// In-memory index of raw document field maps
///
/// # Examples
///
/// ```
/// use candex_search::MemoryIndex;
/// use serde_json::json;
///
/// let index = MemoryIndex::new();
/// let mut fields = serde_json::Map::new();
/// fields.insert("title".to_string(), json!("Paris"));
/// index.add_document("wiki", "article", fields);
///
/// assert_eq!(index.doc_count("wiki", "article"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryIndex {
    /// "index/doc_type" -> documents in insertion order
    collections: DashMap<String, Vec<RawFields>>,
}

impl MemoryIndex {
    /// Create an empty index
    pub fn new() -> Self {
        MemoryIndex {
            collections: DashMap::new(),
        }
    }

    /// Add a document's raw fields to a collection
    ///
    /// Insertion order is preserved and breaks score ties during search.
    pub fn add_document(&self, index: &str, doc_type: &str, fields: RawFields) {
        self.collections
            .entry(collection_key(index, doc_type))
            .or_default()
            .push(fields);
    }

    /// Number of documents in a collection
    pub fn doc_count(&self, index: &str, doc_type: &str) -> usize {
        self.collections
            .get(&collection_key(index, doc_type))
            .map(|docs| docs.len())
            .unwrap_or(0)
    }
}

impl SearchIndex for MemoryIndex {
    fn search(
        &self,
        index: &str,
        doc_type: &str,
        query: &Query,
        offset: usize,
        limit: usize,
        _ranking: RankingMode,
    ) -> Result<Vec<RawHit>> {
        let Some(docs) = self.collections.get(&collection_key(index, doc_type)) else {
            return Ok(vec![]);
        };

        let mut scored: Vec<(usize, f32)> = docs
            .iter()
            .enumerate()
            .map(|(pos, fields)| (pos, score_document(fields, query)))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        // Stable sort keeps insertion order among equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|(pos, score)| RawHit::new(docs[pos].clone(), score))
            .collect())
    }
}

fn collection_key(index: &str, doc_type: &str) -> String {
    format!("{index}/{doc_type}")
}

// ============================================================================
// Scoring
// ============================================================================

/// Sum of `boost x |clause terms found in field terms|` over all clauses
fn score_document(fields: &RawFields, query: &Query) -> f32 {
    query
        .clauses()
        .iter()
        .map(|clause| {
            let field_terms = match fields.get(&clause.field) {
                Some(value) => value_terms(value),
                None => return 0.0,
            };
            let matches = analyze(&clause.text)
                .filter(|term| field_terms.contains(term))
                .count();
            clause.boost * matches as f32
        })
        .sum()
}

/// Terms of a field value: strings and arrays of strings are analyzed,
/// other JSON shapes contribute nothing
fn value_terms(value: &serde_json::Value) -> BTreeSet<String> {
    match value {
        serde_json::Value::String(s) => analyze(s).collect(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .flat_map(|s| analyze(s).collect::<Vec<_>>())
            .collect(),
        _ => BTreeSet::new(),
    }
}

/// Field analyzer: lowercase, split on non-alphanumeric, drop empties
fn analyze(text: &str) -> impl Iterator<Item = String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect::<Vec<_>>()
        .into_iter()
}
