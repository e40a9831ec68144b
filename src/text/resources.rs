//! Linguistic resource bundles
//!
//! A bundle holds the stopword set and the optional primary sentence splitter.
//! It is loaded once, never mutated, and shared by reference between engines.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};
use thiserror::Error;

use super::segment::{AbbreviationAwareSplitter, SentenceSplitter};

/// Common words filtered by the resource-free bundle.
const COMMON_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "must", "can", "this", "that", "these", "those", "i", "you",
    "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("No stopword list available for language: {0}")]
    UnsupportedLanguage(String),
}

#[derive(Debug)]
pub struct LanguageResources {
    language: String,
    stopwords: HashSet<String>,
    splitter: Option<Box<dyn SentenceSplitter>>,
}

impl LanguageResources {
    /// Load the full bundle for a language code.
    ///
    /// Only English is supported: normalization drops every non-ASCII letter,
    /// so other stopword lists would never match.
    pub fn load(language: &str) -> Result<Self, ResourceError> {
        match language.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::english()),
            other => Err(ResourceError::UnsupportedLanguage(other.to_string())),
        }
    }

    /// English stopwords from the `stop-words` crate plus the
    /// abbreviation-aware splitter.
    pub fn english() -> Self {
        let stopwords = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        Self {
            language: "en".into(),
            stopwords,
            splitter: Some(Box::new(AbbreviationAwareSplitter::default())),
        }
    }

    /// Resource-free bundle: a small built-in common-word list and no primary
    /// splitter.
    pub fn minimal() -> Self {
        Self {
            language: "minimal".into(),
            stopwords: COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
            splitter: None,
        }
    }

    /// Custom stopword list with the default primary splitter.
    pub fn from_stopwords(words: &[&str]) -> Self {
        Self {
            language: "custom".into(),
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
            splitter: Some(Box::new(AbbreviationAwareSplitter::default())),
        }
    }

    pub fn with_splitter(mut self, splitter: impl SentenceSplitter + 'static) -> Self {
        self.splitter = Some(Box::new(splitter));
        self
    }

    pub fn without_splitter(mut self) -> Self {
        self.splitter = None;
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Expects an already lower-cased token.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn splitter(&self) -> Option<&dyn SentenceSplitter> {
        self.splitter.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_bundle_has_stopwords_and_splitter() {
        let resources = LanguageResources::english();
        assert!(resources.is_stopword("the"));
        assert!(resources.is_stopword("and"));
        assert!(!resources.is_stopword("compiler"));
        assert!(resources.splitter().is_some());
    }

    #[test]
    fn minimal_bundle_is_resource_free() {
        let resources = LanguageResources::minimal();
        assert_eq!(resources.stopword_count(), COMMON_WORDS.len());
        assert!(resources.splitter().is_none());
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = LanguageResources::load("klingon").unwrap_err();
        assert!(matches!(err, ResourceError::UnsupportedLanguage(ref lang) if lang == "klingon"));
        assert_eq!(LanguageResources::load("EN").unwrap().language(), "en");
    }
}
