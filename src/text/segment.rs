use std::collections::HashSet;
use std::fmt::Debug;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, trace};

use super::normalize::{normalize, strip_urls};
use crate::types::Sentence;

static TERMINATOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid terminator pattern"));

static AGGRESSIVE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+\s+|\n+").expect("valid aggressive pattern"));

static PARAGRAPH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").expect("valid paragraph pattern"));

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("valid word pattern"));

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "eg", "ie", "inc", "ltd",
    "co", "corp", "approx", "dept", "est", "fig", "vol", "jan", "feb", "mar", "apr", "jun", "jul",
    "aug", "sep", "sept", "oct", "nov", "dec",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    #[error("Input contains no text")]
    EmptyInput,
    #[error("No sentence boundaries found")]
    NoBoundaries,
}

/// A primary, linguistically-aware sentence splitter.
///
/// Failures are never surfaced past the [`Segmenter`]; it falls back to
/// punctuation splitting instead.
pub trait SentenceSplitter: Debug + Send + Sync {
    fn split(&self, text: &str) -> Result<Vec<String>, SegmentError>;
}

/// Splits on terminal punctuation followed by a capitalized word, skipping
/// common abbreviations and single-letter initials. Blank lines always end a
/// sentence.
#[derive(Debug, Clone)]
pub struct AbbreviationAwareSplitter {
    abbreviations: HashSet<String>,
}

impl Default for AbbreviationAwareSplitter {
    fn default() -> Self {
        Self::new(ABBREVIATIONS)
    }
}

impl AbbreviationAwareSplitter {
    pub fn new(abbreviations: &[&str]) -> Self {
        Self {
            abbreviations: abbreviations.iter().map(|a| a.to_lowercase()).collect(),
        }
    }

    fn is_abbreviation(&self, preceding: &str) -> bool {
        let word: String = preceding
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        if word.is_empty() {
            return false;
        }
        (word.chars().count() == 1 && word.chars().all(char::is_alphabetic))
            || self.abbreviations.contains(&word)
    }

    fn split_paragraph(&self, paragraph: &str, out: &mut Vec<String>) {
        let chars: Vec<(usize, char)> = paragraph.char_indices().collect();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (_, c) = chars[i];
            if !matches!(c, '.' | '!' | '?') {
                i += 1;
                continue;
            }

            let run_start = i;
            while i < chars.len() && matches!(chars[i].1, '.' | '!' | '?' | '"' | '\'' | ')') {
                i += 1;
            }
            let end = chars.get(i).map_or(paragraph.len(), |(idx, _)| *idx);

            // Terminators inside a token ("3.5", "e.g.x") are not boundaries.
            if i < chars.len() && !chars[i].1.is_whitespace() {
                continue;
            }

            let only_periods = chars[run_start..i]
                .iter()
                .all(|(_, ch)| matches!(ch, '.' | '"' | '\'' | ')'));
            let preceding = paragraph[start..chars[run_start].0]
                .split_whitespace()
                .last()
                .unwrap_or("");
            if only_periods && self.is_abbreviation(preceding) {
                continue;
            }

            let next = chars[i..].iter().map(|(_, ch)| *ch).find(|ch| !ch.is_whitespace());
            if next.is_some_and(char::is_lowercase) {
                continue;
            }

            let sentence = paragraph[start..end].trim();
            if !sentence.is_empty() {
                out.push(sentence.to_string());
            }
            start = end;
        }

        let rest = paragraph[start..].trim();
        if !rest.is_empty() {
            out.push(rest.to_string());
        }
    }
}

impl SentenceSplitter for AbbreviationAwareSplitter {
    fn split(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        if text.trim().is_empty() {
            return Err(SegmentError::EmptyInput);
        }
        if !text.contains(['.', '!', '?']) && !PARAGRAPH_PATTERN.is_match(text) {
            return Err(SegmentError::NoBoundaries);
        }

        let mut sentences = Vec::new();
        for paragraph in PARAGRAPH_PATTERN.split(text) {
            self.split_paragraph(paragraph, &mut sentences);
        }
        Ok(sentences)
    }
}

/// Sentence segmentation with a cascading fallback:
/// primary splitter, then a plain terminator split, then terminator-or-newline
/// splitting that discards short fragments.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    primary: Option<&'a dyn SentenceSplitter>,
    min_fallback_chars: usize,
}

impl<'a> Segmenter<'a> {
    pub fn new(primary: Option<&'a dyn SentenceSplitter>, min_fallback_chars: usize) -> Self {
        Self {
            primary,
            min_fallback_chars,
        }
    }

    /// Segment raw text into normalized sentences in source order.
    ///
    /// Boundaries are found on the URL-stripped text, where terminators and
    /// newlines still exist; each piece is then normalized and empty pieces
    /// are dropped.
    pub fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        let stripped = strip_urls(text);

        let mut pieces = match self.primary.map(|splitter| splitter.split(&stripped)) {
            Some(Ok(pieces)) => {
                trace!(count = pieces.len(), "primary splitter succeeded");
                pieces
            }
            Some(Err(error)) => {
                debug!(%error, "primary splitter failed, using terminator split");
                split_on_terminators(&stripped)
            }
            None => split_on_terminators(&stripped),
        };

        if pieces.len() <= 1 {
            let aggressive = split_aggressively(&stripped, self.min_fallback_chars);
            debug!(
                count = pieces.len(),
                aggressive = aggressive.len(),
                "too few sentences, trying aggressive split"
            );
            // Every fragment too short: keep the whole text as one sentence.
            if !aggressive.is_empty() {
                pieces = aggressive;
            }
        }

        pieces
            .iter()
            .map(|piece| normalize(piece))
            .filter(|piece| !piece.is_empty())
            .enumerate()
            .map(|(position, text)| Sentence::new(text, position))
            .collect()
    }
}

fn split_on_terminators(text: &str) -> Vec<String> {
    TERMINATOR_PATTERN
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_aggressively(text: &str, min_chars: usize) -> Vec<String> {
    AGGRESSIVE_PATTERN
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.chars().count() >= min_chars)
        .map(str::to_string)
        .collect()
}

/// Lower-cased word tokens of `text`.
pub fn split_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitter_skips_abbreviations_and_initials() {
        let splitter = AbbreviationAwareSplitter::default();
        let out = splitter
            .split("Dr. Smith met J. Doe today. They talked about Rust! Was it fun? Yes.")
            .unwrap();
        assert_eq!(
            out,
            vec![
                "Dr. Smith met J. Doe today.",
                "They talked about Rust!",
                "Was it fun?",
                "Yes."
            ]
        );
    }

    #[test]
    fn splitter_keeps_decimals_and_lowercase_continuations() {
        let splitter = AbbreviationAwareSplitter::default();
        let out = splitter
            .split("Version 3.5 shipped... and nobody noticed. Then it broke.")
            .unwrap();
        assert_eq!(
            out,
            vec!["Version 3.5 shipped... and nobody noticed.", "Then it broke."]
        );
    }

    #[test]
    fn splitter_treats_blank_lines_as_boundaries() {
        let splitter = AbbreviationAwareSplitter::default();
        let out = splitter.split("first thought\n\nsecond thought").unwrap();
        assert_eq!(out, vec!["first thought", "second thought"]);
    }

    #[test]
    fn splitter_reports_missing_boundaries() {
        let splitter = AbbreviationAwareSplitter::default();
        assert_eq!(
            splitter.split("no punctuation at all here"),
            Err(SegmentError::NoBoundaries)
        );
        assert_eq!(splitter.split("   "), Err(SegmentError::EmptyInput));
    }

    #[test]
    fn split_words_lowercases() {
        assert_eq!(split_words("Rust, RUST and rust2024!"), vec!["rust", "rust", "and", "rust2024"]);
    }
}
