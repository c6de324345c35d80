//! Dictionary-form reduction steered by the coarse part-of-speech category.
//!
//! Two layers, in order: per-category exception tables for irregular forms,
//! then ordered suffix-substitution rules (longest suffix first).  Strips of
//! `-ing`/`-ed`/`-er`/`-est` additionally repair the stem (undo consonant
//! doubling, restore a dropped final `e`).  A word no layer recognizes is
//! returned unchanged — unknown tokens are never an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::tag::Coarse;

type ExceptionTable = HashMap<&'static str, &'static str>;

static VERB_EXCEPTIONS: Lazy<ExceptionTable> = Lazy::new(|| {
    let entries: &[(&str, &str)] = &[
        ("was", "be"), ("were", "be"), ("is", "be"), ("are", "be"),
        ("am", "be"), ("been", "be"), ("being", "be"),
        ("has", "have"), ("had", "have"), ("having", "have"),
        ("does", "do"), ("did", "do"), ("done", "do"), ("doing", "do"),
        ("goes", "go"), ("went", "go"), ("gone", "go"), ("going", "go"),
        ("said", "say"), ("got", "get"), ("gotten", "get"),
        ("made", "make"), ("knew", "know"), ("known", "know"),
        ("thought", "think"), ("saw", "see"), ("seen", "see"),
        ("came", "come"), ("took", "take"), ("taken", "take"),
        ("ran", "run"), ("ate", "eat"), ("eaten", "eat"),
        ("spoke", "speak"), ("spoken", "speak"),
        ("wrote", "write"), ("written", "write"),
        ("gave", "give"), ("given", "give"),
        ("found", "find"), ("felt", "feel"), ("left", "leave"),
        ("told", "tell"), ("kept", "keep"), ("met", "meet"),
        ("paid", "pay"), ("sent", "send"), ("built", "build"),
        ("heard", "hear"), ("held", "hold"), ("brought", "bring"),
        ("bought", "buy"), ("caught", "catch"), ("taught", "teach"),
        ("stood", "stand"), ("understood", "understand"),
        ("lost", "lose"), ("won", "win"), ("sat", "sit"), ("slept", "sleep"),
    ];
    entries.iter().copied().collect()
});

static NOUN_EXCEPTIONS: Lazy<ExceptionTable> = Lazy::new(|| {
    let entries: &[(&str, &str)] = &[
        ("men", "man"), ("women", "woman"), ("children", "child"),
        ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"),
        ("mice", "mouse"), ("lives", "life"), ("wives", "wife"),
        ("knives", "knife"), ("leaves", "leaf"),
    ];
    entries.iter().copied().collect()
});

static ADJ_EXCEPTIONS: Lazy<ExceptionTable> = Lazy::new(|| {
    let entries: &[(&str, &str)] = &[
        ("better", "good"), ("best", "good"),
        ("worse", "bad"), ("worst", "bad"),
    ];
    entries.iter().copied().collect()
});

static ADV_EXCEPTIONS: Lazy<ExceptionTable> = Lazy::new(|| {
    let entries: &[(&str, &str)] = &[
        ("better", "well"), ("best", "well"), ("further", "far"),
    ];
    entries.iter().copied().collect()
});

/// Plain suffix substitutions, longest suffix first.
const NOUN_RULES: &[(&str, &str)] = &[
    ("ches", "ch"), ("shes", "sh"), ("sses", "ss"),
    ("ies", "y"), ("xes", "x"), ("zes", "z"),
    ("s", ""),
];
const VERB_RULES: &[(&str, &str)] = &[
    ("ies", "y"), ("ches", "ch"), ("shes", "sh"), ("sses", "ss"),
    ("xes", "x"), ("zes", "z"),
    ("s", ""),
];
/// Suffixes whose removal needs stem repair.
const STRIP_VERB: &[&str] = &["ing", "ed"];
const STRIP_ADJ: &[&str] = &["est", "er"];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// After stripping `-ing`/`-ed`/`-er`/`-est`, undo English spelling changes:
/// consonant doubling (`runn` → `run`) and, for short stems, the dropped
/// final `e` (`mak` → `make`, `writ` → `write`).
fn repair_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 3 {
        return stem.to_string();
    }

    let last = chars[n - 1];
    let prev = chars[n - 2];
    if last == prev && !is_vowel(last) && !matches!(last, 'l' | 's' | 'z') {
        return chars[..n - 1].iter().collect();
    }

    // A short stem ending vowel+consonant usually lost a final e (make →
    // making).  Stems ending w/x/y never drop e (say → saying).  For
    // four-letter stems only those opening with a consonant cluster qualify
    // (writ → write, but open → open).
    let dropped_e = !is_vowel(last)
        && !matches!(last, 'w' | 'x' | 'y')
        && is_vowel(prev)
        && (n == 3 || (n == 4 && !is_vowel(chars[0]) && !is_vowel(chars[1])));
    if dropped_e {
        return format!("{}e", stem);
    }
    stem.to_string()
}

fn apply_rules(word: &str, rules: &[(&str, &str)]) -> Option<String> {
    for (suffix, replacement) in rules {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= 2 {
                return Some(format!("{}{}", stem, replacement));
            }
        }
    }
    None
}

fn apply_strips(word: &str, suffixes: &[&str]) -> Option<String> {
    for suffix in suffixes {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= 3 {
                return Some(repair_stem(stem));
            }
        }
    }
    None
}

/// Category-aware lemmatizer over the built-in exception and rule tables.
#[derive(Debug, Default, Clone)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Reduce `word` to its dictionary form for the given category.
    /// Words nothing recognizes come back unchanged.
    pub fn lemmatize(&self, word: &str, category: Coarse) -> String {
        let exceptions: &ExceptionTable = match category {
            Coarse::Verb => &VERB_EXCEPTIONS,
            Coarse::Noun => &NOUN_EXCEPTIONS,
            Coarse::Adjective => &ADJ_EXCEPTIONS,
            Coarse::Adverb => &ADV_EXCEPTIONS,
        };
        if let Some(lemma) = exceptions.get(word) {
            return lemma.to_string();
        }

        let candidate = match category {
            Coarse::Noun => apply_rules(word, NOUN_RULES),
            Coarse::Verb => {
                apply_strips(word, STRIP_VERB).or_else(|| apply_rules(word, VERB_RULES))
            }
            Coarse::Adjective => apply_strips(word, STRIP_ADJ),
            // WordNet carries no adverb substitution rules; exceptions only.
            Coarse::Adverb => None,
        };
        candidate.unwrap_or_else(|| word.to_string())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str, cat: Coarse) -> String {
        Lemmatizer::new().lemmatize(word, cat)
    }

    #[test]
    fn test_irregular_verbs() {
        assert_eq!(lemma("was", Coarse::Verb), "be");
        assert_eq!(lemma("went", Coarse::Verb), "go");
        assert_eq!(lemma("thought", Coarse::Verb), "think");
    }

    #[test]
    fn test_regular_verb_suffixes() {
        assert_eq!(lemma("walked", Coarse::Verb), "walk");
        assert_eq!(lemma("visited", Coarse::Verb), "visit");
        assert_eq!(lemma("makes", Coarse::Verb), "make");
        assert_eq!(lemma("watches", Coarse::Verb), "watch");
        assert_eq!(lemma("cries", Coarse::Verb), "cry");
    }

    #[test]
    fn test_stem_repair() {
        assert_eq!(lemma("running", Coarse::Verb), "run");
        assert_eq!(lemma("stopped", Coarse::Verb), "stop");
        assert_eq!(lemma("making", Coarse::Verb), "make");
        assert_eq!(lemma("writing", Coarse::Verb), "write");
        assert_eq!(lemma("saying", Coarse::Verb), "say");
        assert_eq!(lemma("opened", Coarse::Verb), "open");
        assert_eq!(lemma("calling", Coarse::Verb), "call");
    }

    #[test]
    fn test_short_ing_words_are_not_gerunds() {
        assert_eq!(lemma("thing", Coarse::Noun), "thing");
        assert_eq!(lemma("king", Coarse::Noun), "king");
        assert_eq!(lemma("sing", Coarse::Verb), "sing");
    }

    #[test]
    fn test_plural_nouns() {
        assert_eq!(lemma("cars", Coarse::Noun), "car");
        assert_eq!(lemma("parties", Coarse::Noun), "party");
        assert_eq!(lemma("boxes", Coarse::Noun), "box");
        assert_eq!(lemma("churches", Coarse::Noun), "church");
        assert_eq!(lemma("glasses", Coarse::Noun), "glass");
        assert_eq!(lemma("houses", Coarse::Noun), "house");
        assert_eq!(lemma("children", Coarse::Noun), "child");
    }

    #[test]
    fn test_adjective_grades() {
        assert_eq!(lemma("bigger", Coarse::Adjective), "big");
        assert_eq!(lemma("smallest", Coarse::Adjective), "small");
        assert_eq!(lemma("nicer", Coarse::Adjective), "nice");
        assert_eq!(lemma("better", Coarse::Adjective), "good");
        assert_eq!(lemma("funny", Coarse::Adjective), "funny");
    }

    #[test]
    fn test_adverbs_only_have_exceptions() {
        assert_eq!(lemma("better", Coarse::Adverb), "well");
        assert_eq!(lemma("quickly", Coarse::Adverb), "quickly");
    }

    #[test]
    fn test_unknown_words_return_themselves() {
        assert_eq!(lemma("LOL", Coarse::Noun), "LOL");
        assert_eq!(lemma("xyzzy", Coarse::Verb), "xyzzy");
        assert_eq!(lemma("obrigado", Coarse::Noun), "obrigado");
    }

    #[test]
    fn test_short_words_are_left_alone() {
        // The stem-length guard keeps "as"-sized words from collapsing.
        assert_eq!(lemma("as", Coarse::Noun), "as");
        assert_eq!(lemma("s", Coarse::Noun), "s");
    }
}
