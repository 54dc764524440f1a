//! Label-to-code conversion.
//!
//! Normalizes a free-form label, drops stop words, abbreviates each
//! surviving word to a 3-character chunk, and assembles the hyphenated
//! and compact code forms. One converter instance also accumulates usage
//! counters across calls.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use serde::Serialize;
use time::OffsetDateTime;
use tracing::debug;

use crate::lexicon::Lexicon;
use crate::normalize::normalize;

/// One successful conversion. Produced once per call and immutable after;
/// callers may collect these into a history log.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub original: String,
    pub cleaned: String,
    /// Words surviving normalization and stop-word filtering, in order.
    pub words: Vec<String>,
    /// One chunk per surviving word, in order.
    pub chunks: Vec<String>,
    /// Chunks joined with `-`.
    pub code: String,
    /// Chunks concatenated without separators.
    pub compact: String,
    /// Number of chunks.
    pub length: usize,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input normalized to an empty string (empty, whitespace-only,
    /// or nothing but stripped characters).
    #[error("empty input: {original:?} normalizes to nothing")]
    EmptyInput { original: String },
}

/// Read-only view of a converter's accumulated counters.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub version: &'static str,
    pub total_conversions: u64,
    pub unique_codes: usize,
    pub special_cases: usize,
}

pub struct Converter {
    lexicon: Lexicon,
    conversions: u64,
    codes_seen: HashSet<String>,
}

impl Converter {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::default())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            conversions: 0,
            codes_seen: HashSet::new(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Convert a label to its code.
    ///
    /// Any input that survives normalization succeeds, including inputs
    /// where stop-word filtering removes every word — the result then has
    /// empty chunk and code fields. Only an input that normalizes to the
    /// empty string is an error, and that path leaves the counters
    /// untouched.
    pub fn convert(
        &mut self,
        text: &str,
        skip_stop_words: bool,
    ) -> Result<ConversionResult, ConvertError> {
        let cleaned = normalize(text);
        if cleaned.is_empty() {
            return Err(ConvertError::EmptyInput {
                original: text.to_string(),
            });
        }

        let mut words: Vec<String> = cleaned.split(' ').map(str::to_string).collect();
        if skip_stop_words {
            words.retain(|w| !self.lexicon.is_stop_word(&w.to_lowercase()));
        }

        let chunks: Vec<String> = words.iter().map(|w| abbreviate(&self.lexicon, w)).collect();
        let code = chunks.join("-");
        let compact = chunks.concat();
        debug!(words = words.len(), %code, "converted label");

        self.conversions += 1;
        self.codes_seen.insert(code.clone());

        Ok(ConversionResult {
            original: text.to_string(),
            cleaned,
            length: chunks.len(),
            words,
            chunks,
            code,
            compact,
            timestamp: OffsetDateTime::now_utc(),
        })
    }

    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            version: env!("CARGO_PKG_VERSION"),
            total_conversions: self.conversions,
            unique_codes: self.codes_seen.len(),
            special_cases: self.lexicon.special_case_count(),
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Abbreviate one normalized (uppercase, non-empty) word to its chunk.
///
/// Special-case entries win over every length rule and are returned
/// verbatim, whatever their length. Purely numeric words are left-padded
/// with zeros to three characters and then truncated to the first three,
/// so "1234" becomes "123".
pub fn abbreviate(lexicon: &Lexicon, word: &str) -> String {
    if let Some(code) = lexicon.special_case(&word.to_lowercase()) {
        return code.to_string();
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        let padded = format!("{word:0>3}");
        return padded.chars().take(3).collect();
    }
    match word.chars().count() {
        1 => format!("{word}XX"),
        2 => format!("{word}X"),
        _ => word.chars().take(3).collect(),
    }
}
