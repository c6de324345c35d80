//! # nuvem
//!
//! Word-cloud generator for chat logs, built around a configurable
//! text-normalization pipeline.
//!
//! ## Quick start
//!
//! ```no_run
//! use nuvem::{pipeline::Pipeline, settings::Settings};
//!
//! let settings = Settings::load(std::path::Path::new("data/settings.toml")).unwrap();
//! let pipeline = Pipeline::new(&settings).unwrap();
//!
//! let lemmas = pipeline.run("Hahaha that was funny hahaha");
//! assert_eq!(lemmas[0], "LOL");
//! ```
//!
//! ## Pipeline
//! 1. **Tokenization** — lowercase, split into words and punctuation marks.
//! 2. **Stopword filtering** — Portuguese base list, with configured
//!    additions and exceptions; non-alphanumeric tokens dropped.
//! 3. **Laughter normalization** — `hahaha`/`rofl`/`lol` variants collapse to
//!    one canonical token.
//! 4. **Pattern normalization** — ordered, first-match-wins replacement of
//!    variant spellings with canonical tokens.
//! 5. **Tag + lemmatize** — per-token part-of-speech tag steers reduction to
//!    the dictionary form.
//! 6. **Aggregation & rendering** — frequency counts feed a PNG word cloud
//!    and a console table.
//!
//! Stages 1–5 are order-preserving filters and maps over the token sequence;
//! only the final aggregation re-sorts.

pub mod frequency;
pub mod lemmatize;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod settings;
pub mod stopwords;
pub mod tag;
pub mod tokenize;

// ─── Re-exports for convenience ─────────────────────────────────────────────

pub use pipeline::Pipeline;
pub use settings::Settings;
