//! Abbreviation lexicon: special-case overrides and stop words.
//!
//! Seed entries are embedded as TOML (`default_lexicon.toml`) and parsed
//! at construction. A custom file with the same shape can replace the
//! built-ins; entries are never mutated at runtime.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

pub const DEFAULT_LEXICON_TOML: &str = include_str!("default_lexicon.toml");

/// Returns the embedded default lexicon TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_LEXICON_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid entry {key:?}: {reason}")]
    InvalidEntry { key: String, reason: String },
}

/// Immutable word lookup tables owned by a converter instance.
#[derive(Debug, Clone)]
pub struct Lexicon {
    special_cases: HashMap<String, String>,
    stop_words: HashSet<String>,
}

/// Raw TOML shape. Both sections may be omitted.
#[derive(Deserialize)]
struct RawLexicon {
    #[serde(default)]
    special_cases: HashMap<String, String>,
    #[serde(default)]
    stop_words: StopWordsSection,
}

#[derive(Deserialize, Default)]
struct StopWordsSection {
    #[serde(default)]
    words: Vec<String>,
}

pub fn parse_lexicon_toml(toml_str: &str) -> Result<Lexicon, LexiconError> {
    let raw: RawLexicon =
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

    for (key, code) in &raw.special_cases {
        if key.is_empty() || *key != key.to_lowercase() {
            return Err(LexiconError::InvalidEntry {
                key: key.clone(),
                reason: "special-case word must be non-empty lowercase".to_string(),
            });
        }
        if code.is_empty() || code.chars().any(char::is_whitespace) {
            return Err(LexiconError::InvalidEntry {
                key: key.clone(),
                reason: "code must be non-empty and contain no whitespace".to_string(),
            });
        }
    }
    for word in &raw.stop_words.words {
        if word.is_empty() || *word != word.to_lowercase() {
            return Err(LexiconError::InvalidEntry {
                key: word.clone(),
                reason: "stop word must be non-empty lowercase".to_string(),
            });
        }
    }

    Ok(Lexicon {
        special_cases: raw.special_cases,
        stop_words: raw.stop_words.words.into_iter().collect(),
    })
}

impl Default for Lexicon {
    fn default() -> Self {
        parse_lexicon_toml(DEFAULT_LEXICON_TOML).expect("embedded lexicon TOML must be valid")
    }
}

impl Lexicon {
    /// Exact-match special-case lookup. `word` must already be lowercase.
    pub fn special_case(&self, word: &str) -> Option<&str> {
        self.special_cases.get(word).map(String::as_str)
    }

    /// Stop-word membership. `word` must already be lowercase.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn special_case_count(&self) -> usize {
        self.special_cases.len()
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}
