//! Document and hit types
//!
//! This module defines what comes back from the search backend:
//! - RawHit: raw field payload plus backend score, as delivered on the wire
//! - Document: structured view over a hit's raw fields
//! - Candidate: a (document, score) pair appended to an extraction result
//!
//! Document construction from raw fields is total: whatever JSON object the
//! backend returns becomes a Document, and typed access is per-accessor.

use serde::{Deserialize, Serialize};

/// Raw field map of one index entry, as returned by the backend
pub type RawFields = serde_json::Map<String, serde_json::Value>;

// ============================================================================
// RawHit
// ============================================================================

/// One scored hit as delivered by the search backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHit {
    /// Source fields of the matched index entry
    pub fields: RawFields,

    /// Relevance score from the backend ranking function (non-negative)
    pub score: f32,
}

impl RawHit {
    /// Create a new raw hit
    pub fn new(fields: RawFields, score: f32) -> Self {
        RawHit { fields, score }
    }
}

// ============================================================================
// Document
// ============================================================================

/// Structured representation of one matched index entry
///
/// Wraps the raw field map delivered by the backend. Construction never
/// fails; accessors return `None` for absent or differently-typed fields.
///
/// # Examples
///
/// ```
/// use candex_core::Document;
/// use serde_json::json;
///
/// let mut fields = serde_json::Map::new();
/// fields.insert("title".to_string(), json!("Paris"));
///
/// let doc = Document::from_raw_fields(fields);
/// assert_eq!(doc.title(), Some("Paris"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    fields: RawFields,
}

impl Document {
    /// Construct a document from a raw field map (total, never fails)
    pub fn from_raw_fields(fields: RawFields) -> Self {
        Document { fields }
    }

    /// Raw value of a field, if present
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.fields.get(field)
    }

    /// The document title, if present as a string field
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(|v| v.as_str())
    }

    /// The full raw field map
    pub fn fields(&self) -> &RawFields {
        &self.fields
    }
}

// ============================================================================
// Candidate
// ============================================================================

/// A candidate topic: one matched document with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// The matched document
    pub document: Document,

    /// Relevance score (non-negative; higher = more relevant)
    pub score: f32,
}

impl Candidate {
    /// Create a new candidate
    pub fn new(document: Document, score: f32) -> Self {
        Candidate { document, score }
    }
}
