//! Settings loading and default resolution.
//!
//! The settings document is a TOML file (`data/settings.toml` by default) with
//! the keys `keep_stop_words`, `include_stop_words`, `laughter_patterns`,
//! `laughter_replacement` and `normalize_patterns`.  All keys are optional.
//!
//! Resolution happens exactly once, here: the pipeline stages receive a fully
//! populated [`Settings`] value and never consult defaults on their own.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Laughter patterns used when the settings file supplies none.
pub const DEFAULT_LAUGHTER_PATTERNS: &[&str] = &["(ha){2,}", "rofl", "lol"];

/// Replacement token used when the settings file supplies none.
pub const DEFAULT_LAUGHTER_REPLACEMENT: &str = "LOL";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// The settings document as written on disk.  Every key is optional.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default)]
    keep_stop_words: Vec<String>,
    #[serde(default)]
    include_stop_words: Vec<String>,
    #[serde(default)]
    laughter_patterns: Vec<String>,
    #[serde(default)]
    laughter_replacement: String,
    /// Iteration order of this map is document order (`toml` is built with
    /// `preserve_order`) — first matching entry wins downstream.
    #[serde(default)]
    normalize_patterns: IndexMap<String, Vec<String>>,
}

/// Fully resolved, default-free pipeline settings.
///
/// Loaded once per run, never mutated, shared by reference with every stage.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Words removed from the base stopword set (always kept in the output).
    pub keep_stop_words: Vec<String>,
    /// Words added to the base stopword set.
    pub include_stop_words: Vec<String>,
    /// Regex patterns identifying laughter tokens.
    pub laughter_patterns: Vec<String>,
    /// Canonical token substituted for any laughter match.
    pub laughter_replacement: String,
    /// Ordered canonical-token → pattern-group mapping.
    pub normalize_patterns: IndexMap<String, Vec<String>>,
}

impl Settings {
    /// Read and parse a settings file, then resolve defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let raw: RawSettings = toml::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::resolve(raw))
    }

    fn resolve(raw: RawSettings) -> Self {
        let laughter_patterns = if raw.laughter_patterns.is_empty() {
            DEFAULT_LAUGHTER_PATTERNS.iter().map(|p| p.to_string()).collect()
        } else {
            raw.laughter_patterns
        };
        let laughter_replacement = if raw.laughter_replacement.is_empty() {
            DEFAULT_LAUGHTER_REPLACEMENT.to_string()
        } else {
            raw.laughter_replacement
        };
        Self {
            keep_stop_words: raw.keep_stop_words,
            include_stop_words: raw.include_stop_words,
            laughter_patterns,
            laughter_replacement,
            normalize_patterns: raw.normalize_patterns,
        }
    }
}

impl Default for Settings {
    /// Settings equivalent to an empty settings document.
    fn default() -> Self {
        Self::resolve(RawSettings::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
