//! Weighted boolean query model
//!
//! This module defines the query representation handed to the search
//! backend:
//! - WeightedClause: one (field, match text, boost) "should" condition
//! - Query: a disjunction of weighted clauses
//!
//! A query with zero clauses is legal: it executes as a well-formed query
//! that matches nothing, never as an error.

use serde::{Deserialize, Serialize};

// ============================================================================
// WeightedClause
// ============================================================================

/// One "should" condition in a boolean query
///
/// A clause matches `text` against `field`, contributing `boost`-weighted
/// score to documents that match. Boost is a positive real; higher means
/// stronger influence on relevance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedClause {
    /// Field the clause matches against
    pub field: String,

    /// Text to match (full unit text or a single token)
    pub text: String,

    /// Score multiplier for documents matching this clause
    pub boost: f32,
}

impl WeightedClause {
    /// Create a new weighted clause
    pub fn new(field: impl Into<String>, text: impl Into<String>, boost: f32) -> Self {
        WeightedClause {
            field: field.into(),
            text: text.into(),
            boost,
        }
    }
}

// ============================================================================
// Query
// ============================================================================

/// A disjunction of weighted clauses ("should" semantics)
///
/// Documents matching more clauses, or clauses with higher boosts,
/// accumulate more score. Clause order is the order clauses were added.
///
/// # Examples
///
/// ```
/// use candex_core::{Query, WeightedClause};
///
/// let query = Query::bool()
///     .should(WeightedClause::new("links", "paris", 1.0))
///     .should(WeightedClause::new("title", "paris", 0.1));
///
/// assert_eq!(query.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Query {
    clauses: Vec<WeightedClause>,
}

impl Query {
    /// Create an empty boolean query
    pub fn bool() -> Self {
        Query { clauses: vec![] }
    }

    /// Add a "should" clause, returning the extended query
    pub fn should(mut self, clause: WeightedClause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// The clauses in insertion order
    pub fn clauses(&self) -> &[WeightedClause] {
        &self.clauses
    }

    /// Number of clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Check if the query has no clauses (legal; matches nothing)
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
