//! Single-word part-of-speech tagging.
//!
//! Each token is tagged in isolation, with no cross-token context: a small
//! lexicon of frequent closed-class and irregular words first, then ordered
//! suffix heuristics, then `NN`.  Tags use the Penn Treebank alphabet so the
//! coarse category falls out of the first tag character, and anything the
//! mapping does not recognize is treated as a noun.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Coarse part-of-speech category used to steer lemmatization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coarse {
    Adjective,
    Noun,
    Verb,
    Adverb,
}

/// Frequent words whose tag a suffix rule would get wrong.
static LEXICON: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let entries: &[(&str, &str)] = &[
        // be / have / do and other high-frequency verbs
        ("be", "VB"), ("am", "VBP"), ("is", "VBZ"), ("are", "VBP"),
        ("was", "VBD"), ("were", "VBD"), ("been", "VBN"), ("being", "VBG"),
        ("have", "VBP"), ("has", "VBZ"), ("had", "VBD"),
        ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"),
        ("go", "VB"), ("goes", "VBZ"), ("went", "VBD"), ("gone", "VBN"),
        ("say", "VB"), ("says", "VBZ"), ("said", "VBD"),
        ("get", "VB"), ("got", "VBD"), ("make", "VB"), ("made", "VBD"),
        ("know", "VB"), ("knew", "VBD"), ("think", "VB"), ("thought", "VBD"),
        ("see", "VB"), ("saw", "VBD"), ("seen", "VBN"),
        ("come", "VB"), ("came", "VBD"), ("take", "VB"), ("took", "VBD"),
        ("want", "VB"), ("like", "VB"), ("need", "VB"),
        // common adverbs that do not end in -ly
        ("not", "RB"), ("very", "RB"), ("too", "RB"), ("also", "RB"),
        ("never", "RB"), ("always", "RB"), ("again", "RB"), ("often", "RB"),
        ("maybe", "RB"), ("now", "RB"), ("here", "RB"), ("there", "RB"),
        ("well", "RB"), ("just", "RB"), ("still", "RB"), ("soon", "RB"),
        // common adjectives that no suffix rule catches
        ("funny", "JJ"), ("good", "JJ"), ("bad", "JJ"), ("new", "JJ"),
        ("old", "JJ"), ("big", "JJ"), ("small", "JJ"), ("great", "JJ"),
        ("nice", "JJ"), ("happy", "JJ"), ("sad", "JJ"), ("hard", "JJ"),
        ("easy", "JJ"), ("early", "JJ"), ("late", "JJ"), ("long", "JJ"),
        ("better", "JJR"), ("best", "JJS"), ("worse", "JJR"), ("worst", "JJS"),
    ];
    entries.iter().copied().collect()
});

/// Most likely Penn-style tag for one word in isolation.
pub fn tag(word: &str) -> &'static str {
    if let Some(t) = LEXICON.get(word) {
        return t;
    }
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
        return "CD";
    }
    if word.ends_with("ly") && word.len() > 3 {
        return "RB";
    }
    if word.ends_with("ing") && word.len() > 4 {
        return "VBG";
    }
    if word.ends_with("ed") && word.len() > 3 {
        return "VBD";
    }
    const ADJ_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ish", "less", "ical"];
    if ADJ_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return "JJ";
    }
    const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];
    if VERB_SUFFIXES.iter().any(|s| word.ends_with(s)) && word.len() > 4 {
        return "VB";
    }
    if word.ends_with('s') && !word.ends_with("ss") && word.len() > 3 {
        return "NNS";
    }
    "NN"
}

/// Map a tag to its coarse category via the first character.
/// Unrecognized tags default to noun.
pub fn coarse(tag: &str) -> Coarse {
    match tag.chars().next() {
        Some('J') => Coarse::Adjective,
        Some('V') => Coarse::Verb,
        Some('R') => Coarse::Adverb,
        _ => Coarse::Noun,
    }
}

/// Tag a word and reduce straight to its coarse category.
pub fn coarse_tag(word: &str) -> Coarse {
    coarse(tag(word))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_words() {
        assert_eq!(tag("was"), "VBD");
        assert_eq!(tag("funny"), "JJ");
        assert_eq!(tag("very"), "RB");
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(tag("quickly"), "RB");
        assert_eq!(tag("running"), "VBG");
        assert_eq!(tag("walked"), "VBD");
        assert_eq!(tag("famous"), "JJ");
        assert_eq!(tag("cars"), "NNS");
        assert_eq!(tag("42"), "CD");
    }

    #[test]
    fn test_default_is_noun() {
        assert_eq!(tag("xyzzy"), "NN");
        assert_eq!(tag("LOL"), "NN");
    }

    #[test]
    fn test_coarse_mapping_by_first_char() {
        assert_eq!(coarse("JJ"), Coarse::Adjective);
        assert_eq!(coarse("JJR"), Coarse::Adjective);
        assert_eq!(coarse("VBD"), Coarse::Verb);
        assert_eq!(coarse("RB"), Coarse::Adverb);
        assert_eq!(coarse("NN"), Coarse::Noun);
        // Unrecognized first characters fall back to noun.
        assert_eq!(coarse("CD"), Coarse::Noun);
        assert_eq!(coarse(""), Coarse::Noun);
    }

    #[test]
    fn test_coarse_tag_end_to_end() {
        assert_eq!(coarse_tag("was"), Coarse::Verb);
        assert_eq!(coarse_tag("funny"), Coarse::Adjective);
        assert_eq!(coarse_tag("quickly"), Coarse::Adverb);
        assert_eq!(coarse_tag("banana"), Coarse::Noun);
    }
}
