//! Token normalizers: laughter canonicalization and pattern-group replacement.
//!
//! Both stages test tokens with *prefix-anchored* matches: the pattern has to
//! match at the start of the token but not necessarily cover all of it.  A
//! canonical token that happens to be a prefix of an unrelated longer token
//! will therefore match too.  This looseness is a documented part of the
//! contract — do not tighten it to full-token matching.

use anyhow::{Context, Result};
use fancy_regex::Regex;
use indexmap::IndexMap;

/// Join a pattern group into a single prefix-anchored alternation.
fn compile_alternation(patterns: &[String]) -> Result<Regex, fancy_regex::Error> {
    let alternation = patterns
        .iter()
        .map(|p| format!("({})", p))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\A(?:{})", alternation))
}

fn matches_prefix(re: &Regex, token: &str) -> bool {
    // Backtrack-limit failures on a pathological token count as non-matches.
    re.is_match(token).unwrap_or(false)
}

// ─────────────────────────────────────────────────────────────────────────────
// Laughter normalizer
// ─────────────────────────────────────────────────────────────────────────────

/// Collapses every token matching one of the laughter patterns into a single
/// canonical replacement token.
#[derive(Debug)]
pub struct LaughterNormalizer {
    pattern: Regex,
    replacement: String,
}

impl LaughterNormalizer {
    /// Compile the configured patterns.  A malformed pattern is fatal here,
    /// before any token is processed.
    pub fn new(patterns: &[String], replacement: &str) -> Result<Self> {
        let pattern = compile_alternation(patterns)
            .with_context(|| format!("invalid laughter pattern in {:?}", patterns))?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// One-to-one replacement pass; order and length are preserved.
    pub fn apply(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|t| {
                if matches_prefix(&self.pattern, &t) {
                    self.replacement.clone()
                } else {
                    t
                }
            })
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pattern normalizer
// ─────────────────────────────────────────────────────────────────────────────

/// Collapses variant spellings into canonical tokens via an ordered list of
/// pattern groups.  The first group (in settings-document order) whose
/// alternation matches wins; later groups are not consulted.
#[derive(Debug)]
pub struct PatternNormalizer {
    groups: Vec<(String, Regex)>,
}

impl PatternNormalizer {
    pub fn new(normalize_patterns: &IndexMap<String, Vec<String>>) -> Result<Self> {
        let mut groups = Vec::with_capacity(normalize_patterns.len());
        for (replacement, patterns) in normalize_patterns {
            let re = compile_alternation(patterns).with_context(|| {
                format!("invalid normalize pattern for '{}' in {:?}", replacement, patterns)
            })?;
            groups.push((replacement.clone(), re));
        }
        Ok(Self { groups })
    }

    /// Ordered search over the pattern groups for one token.
    fn canonical(&self, token: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, re)| matches_prefix(re, token))
            .map(|(replacement, _)| replacement.as_str())
    }

    /// One-to-one replacement pass; unmatched tokens pass through unchanged.
    pub fn apply(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|t| match self.canonical(&t) {
                Some(replacement) => replacement.to_string(),
                None => t,
            })
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DEFAULT_LAUGHTER_PATTERNS, DEFAULT_LAUGHTER_REPLACEMENT};

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn default_laughter() -> LaughterNormalizer {
        let patterns: Vec<String> =
            DEFAULT_LAUGHTER_PATTERNS.iter().map(|p| p.to_string()).collect();
        LaughterNormalizer::new(&patterns, DEFAULT_LAUGHTER_REPLACEMENT).unwrap()
    }

    #[test]
    fn test_default_patterns_hit_all_three_forms() {
        let n = default_laughter();
        assert_eq!(
            n.apply(tokens(&["hahaha", "rofl", "lol"])),
            tokens(&["LOL", "LOL", "LOL"])
        );
    }

    #[test]
    fn test_single_ha_is_not_laughter() {
        let n = default_laughter();
        assert_eq!(n.apply(tokens(&["ha", "haha"])), tokens(&["ha", "LOL"]));
    }

    #[test]
    fn test_prefix_anchored_not_full_token() {
        // "lolita" starts with "lol", so the prefix match fires.
        let n = default_laughter();
        assert_eq!(n.apply(tokens(&["lolita"])), tokens(&["LOL"]));
    }

    #[test]
    fn test_unmatched_tokens_unchanged_and_order_preserved() {
        let n = default_laughter();
        let input = tokens(&["bom", "hahaha", "dia"]);
        assert_eq!(n.apply(input), tokens(&["bom", "LOL", "dia"]));
    }

    #[test]
    fn test_malformed_laughter_pattern_is_fatal() {
        assert!(LaughterNormalizer::new(&tokens(&["(ha"]), "LOL").is_err());
    }

    fn groups(entries: &[(&str, &[&str])]) -> IndexMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(k, pats)| (k.to_string(), pats.iter().map(|p| p.to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_first_match_wins_in_document_order() {
        // B's pattern is a strict refinement of A's, listed later — A wins.
        let n = PatternNormalizer::new(&groups(&[("A", &["x.*"]), ("B", &["xy.*"])])).unwrap();
        assert_eq!(n.apply(tokens(&["xyz"])), tokens(&["A"]));
    }

    #[test]
    fn test_no_match_passes_through() {
        let n = PatternNormalizer::new(&groups(&[("A", &["x.*"])])).unwrap();
        assert_eq!(n.apply(tokens(&["abc"])), tokens(&["abc"]));
    }

    #[test]
    fn test_idempotent_when_canonicals_do_not_cross_match() {
        let n = PatternNormalizer::new(&groups(&[
            ("obrigado", &["obg", "brigad[oa]"]),
            ("beleza", &["blz", "blza"]),
        ]))
        .unwrap();
        let once = n.apply(tokens(&["obg", "blz", "oi"]));
        let twice = n.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_alternation_within_one_group() {
        let n = PatternNormalizer::new(&groups(&[("voce", &["vc", "vo?ce", "oce"])])).unwrap();
        assert_eq!(
            n.apply(tokens(&["vc", "voce", "oce", "ele"])),
            tokens(&["voce", "voce", "voce", "ele"])
        );
    }

    #[test]
    fn test_malformed_group_pattern_is_fatal() {
        assert!(PatternNormalizer::new(&groups(&[("A", &["[unclosed"])])).is_err());
    }

    #[test]
    fn test_empty_mapping_is_identity() {
        let n = PatternNormalizer::new(&IndexMap::new()).unwrap();
        assert_eq!(n.apply(tokens(&["a", "b"])), tokens(&["a", "b"]));
    }
}
