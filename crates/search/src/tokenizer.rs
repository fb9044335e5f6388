//! Default tokenizer
//!
//! The tokenizer seam is a capability trait ([`Tokenize`]); this module
//! provides the in-repo implementation:
//! - Lowercase
//! - Split on non-alphanumeric characters
//! - Filter tokens shorter than 2 characters
//! - Collect into a set (duplicates collapsed, deterministic order)
//!
//! Deployments backed by a real index analyzer implement [`Tokenize`] over
//! that analyzer instead.

use candex_core::Tokenize;
use std::collections::BTreeSet;

/// Simple deterministic tokenizer
///
/// # Example
///
/// ```
/// use candex_core::Tokenize;
/// use candex_search::LowercaseTokenizer;
///
/// let tokens = LowercaseTokenizer.tokens("Cats purr, cats sleep!");
/// assert_eq!(tokens.into_iter().collect::<Vec<_>>(), vec!["cats", "purr", "sleep"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseTokenizer;

impl Tokenize for LowercaseTokenizer {
    fn tokens(&self, text: &str) -> BTreeSet<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= 2)
            .map(String::from)
            .collect()
    }
}
