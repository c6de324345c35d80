//! Full normalization pipeline: raw text in, lemma sequence out.
//!
//! Stages run strictly left to right — tokenize, stopword-filter, laughter
//! normalize, pattern normalize, tag + lemmatize — and each one is an
//! order-preserving filter or map.  All configured patterns are compiled in
//! [`Pipeline::new`], so a malformed settings pattern aborts before any text
//! is touched.

use anyhow::Result;

use crate::lemmatize::Lemmatizer;
use crate::normalize::{LaughterNormalizer, PatternNormalizer};
use crate::settings::Settings;
use crate::stopwords::StopwordFilter;
use crate::tag::coarse_tag;
use crate::tokenize::tokenize;

pub struct Pipeline {
    stopwords: StopwordFilter,
    laughter: LaughterNormalizer,
    patterns: PatternNormalizer,
    lemmatizer: Lemmatizer,
}

impl Pipeline {
    /// Build every stage from resolved settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            stopwords: StopwordFilter::new(&settings.keep_stop_words, &settings.include_stop_words),
            laughter: LaughterNormalizer::new(
                &settings.laughter_patterns,
                &settings.laughter_replacement,
            )?,
            patterns: PatternNormalizer::new(&settings.normalize_patterns)?,
            lemmatizer: Lemmatizer::new(),
        })
    }

    /// Tokenize and filter, stopping before lemmatization.
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let tokens = self.stopwords.filter(tokens);
        let tokens = self.laughter.apply(tokens);
        self.patterns.apply(tokens)
    }

    /// Per-token tag + lemmatize; same length and order as the input.
    pub fn lemmatize(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| self.lemmatizer.lemmatize(t, coarse_tag(t)))
            .collect()
    }

    /// The whole pipeline in one call.
    pub fn run(&self, text: &str) -> Vec<String> {
        let tokens = self.preprocess(text);
        self.lemmatize(&tokens)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_pipeline() {
        let pipeline = Pipeline::new(&Settings::default()).unwrap();
        let out = pipeline.run("Hahaha that was funny hahaha");
        assert_eq!(out, vec!["LOL", "that", "be", "funny", "LOL"]);
    }

    #[test]
    fn test_stages_never_grow_the_sequence() {
        let pipeline = Pipeline::new(&Settings::default()).unwrap();
        let text = "Oi, tudo bem? hahaha que dia bom!";
        let token_count = tokenize(text).len();
        assert!(pipeline.preprocess(text).len() <= token_count);
    }

    #[test]
    fn test_laughter_after_stopword_filtering() {
        // Punctuation never reaches the laughter stage.
        let pipeline = Pipeline::new(&Settings::default()).unwrap();
        let out = pipeline.preprocess("rofl!!! lol.");
        assert_eq!(out, vec!["LOL", "LOL"]);
    }

    #[test]
    fn test_malformed_settings_pattern_fails_construction() {
        let mut settings = Settings::default();
        settings.laughter_patterns = vec!["(broken".to_string()];
        assert!(Pipeline::new(&settings).is_err());
    }

    #[test]
    fn test_custom_normalize_patterns_apply_after_laughter() {
        let mut settings = Settings::default();
        settings.normalize_patterns.insert(
            "obrigado".to_string(),
            vec!["obg".to_string(), "brigadao".to_string()],
        );
        let pipeline = Pipeline::new(&settings).unwrap();
        let out = pipeline.preprocess("obg hahaha brigadao");
        assert_eq!(out, vec!["obrigado", "LOL", "obrigado"]);
    }
}
