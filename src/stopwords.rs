//! Stopword filtering.
//!
//! The base set is the standard Portuguese list from the `stop-words` crate.
//! Settings can add words (`include_stop_words`) and carve out exceptions
//! (`keep_stop_words`); exceptions win over base membership.
//!
//! Independently of the stop set, every token that is not purely alphanumeric
//! is dropped — this is what removes the punctuation tokens produced by the
//! tokenizer.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Order-preserving stopword filter with a resolved effective stop set.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stop_set: HashSet<String>,
}

impl StopwordFilter {
    /// Build the effective stop set: (Portuguese base ∪ `include`) − `keep`.
    pub fn new(keep: &[String], include: &[String]) -> Self {
        let mut stop_set: HashSet<String> = get(LANGUAGE::Portuguese).into_iter().collect();
        for word in include {
            stop_set.insert(word.clone());
        }
        for word in keep {
            stop_set.remove(word);
        }
        Self { stop_set }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stop_set.contains(token)
    }

    fn is_alphanumeric(token: &str) -> bool {
        !token.is_empty() && token.chars().all(char::is_alphanumeric)
    }

    /// Drop stopwords and non-alphanumeric tokens, preserving order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stopword(t) && Self::is_alphanumeric(t))
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
