//! Query construction
//!
//! This module turns one search unit into a weighted boolean query. Every
//! clause triple targets the same three fields with fixed boosts:
//!
//! | field       | boost |
//! |-------------|-------|
//! | `links`     | 1.0   |
//! | `title`     | 0.1   |
//! | `redirects` | 0.1   |
//!
//! The fields and boosts are constants, not configuration: downstream
//! consumers depend on the exact weighting for output compatibility.

use candex_core::{Query, QueryMode, Tokenize, WeightedClause};

/// Field holding inbound link anchor texts
pub const FIELD_LINKS: &str = "links";
/// Field holding the document title
pub const FIELD_TITLE: &str = "title";
/// Field holding redirect titles pointing at the document
pub const FIELD_REDIRECTS: &str = "redirects";

/// Boost for the `links` field
pub const BOOST_LINKS: f32 = 1.0;
/// Boost for the `title` field
pub const BOOST_TITLE: f32 = 0.1;
/// Boost for the `redirects` field
pub const BOOST_REDIRECTS: f32 = 0.1;

/// Build the query for one search unit under the given mode
///
/// - [`QueryMode::Raw`]: exactly three clauses matching the unit verbatim.
/// - [`QueryMode::Tokenized`]: three clauses per distinct token of the unit,
///   all combined into one disjunction; an empty token set yields an empty
///   (non-matching, non-error) query.
pub fn build_query(unit: &str, mode: QueryMode, tokenizer: &dyn Tokenize) -> Query {
    match mode {
        QueryMode::Raw => raw_query(unit),
        QueryMode::Tokenized => token_query(unit, tokenizer),
    }
}

/// Three fixed-field clauses matching the unit's full text verbatim
fn raw_query(unit: &str) -> Query {
    should_all_fields(Query::bool(), unit)
}

/// Three fixed-field clauses per distinct token of the unit
fn token_query(unit: &str, tokenizer: &dyn Tokenize) -> Query {
    let mut query = Query::bool();
    for token in tokenizer.tokens(unit) {
        query = should_all_fields(query, &token);
    }
    query
}

fn should_all_fields(query: Query, text: &str) -> Query {
    query
        .should(WeightedClause::new(FIELD_LINKS, text, BOOST_LINKS))
        .should(WeightedClause::new(FIELD_TITLE, text, BOOST_TITLE))
        .should(WeightedClause::new(FIELD_REDIRECTS, text, BOOST_REDIRECTS))
}
