//! Frequency aggregation and the console frequency table.

use std::collections::HashMap;

use colored::Colorize;

/// Minimum occurrences for a lemma to appear in the reported table.
pub const FREQUENCY_THRESHOLD: usize = 30;

/// Count occurrences per distinct lemma, in first-seen order.
pub fn count_frequencies(lemmas: &[String]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for lemma in lemmas {
        match index.get(lemma.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(lemma, counts.len());
                counts.push((lemma.clone(), 1));
            }
        }
    }
    counts
}

/// Keep counts at or above `threshold`, sorted descending by count.
/// The sort is stable, so ties keep their first-seen order.
pub fn frequency_table(counts: &[(String, usize)], threshold: usize) -> Vec<(String, usize)> {
    let mut rows: Vec<(String, usize)> = counts
        .iter()
        .filter(|(_, n)| *n >= threshold)
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

/// Print the styled frequency table to the terminal.
pub fn print_table(rows: &[(String, usize)]) {
    let word_width = rows
        .iter()
        .map(|(w, _)| w.chars().count())
        .max()
        .unwrap_or(4)
        .max("Word".len());

    println!();
    println!("{}", "Word Frequency Table".bold().underline());
    println!();
    // Pad before colorizing: ANSI escapes would otherwise count toward width.
    println!("{}  {}", format!("{:>word_width$}", "Word").bold(), "Count".bold());
    for (word, count) in rows {
        println!(
            "{}  {}",
            format!("{:>word_width$}", word).cyan(),
            count.to_string().magenta()
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
