//! Word tokenizer.
//!
//! Lowercases the input and splits it into word tokens and standalone
//! punctuation marks with a single fixed pattern.  Punctuation tokens are kept
//! here on purpose — the stopword filter drops every non-alphanumeric token in
//! the next stage, so the split/drop responsibilities stay separate.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words (`\w+`) or single non-space punctuation characters.
static RE_TOKENIZE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+|[^\w\s]").unwrap());

/// Split raw text into an ordered sequence of lowercase tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    RE_TOKENIZE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(
            tokenize("Hahaha that was funny hahaha"),
            vec!["hahaha", "that", "was", "funny", "hahaha"]
        );
    }

    #[test]
    fn test_punctuation_becomes_separate_tokens() {
        assert_eq!(tokenize("Oi, tudo bem?"), vec!["oi", ",", "tudo", "bem", "?"]);
    }

    #[test]
    fn test_accented_words_stay_whole() {
        assert_eq!(tokenize("não é você"), vec!["não", "é", "você"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }
}
