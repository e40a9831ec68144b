use serde::{Deserialize, Serialize};

/// An ordered unit of normalized text.
///
/// `position` is the ordinal the sentence had in the segmented source, used
/// to restore document order after relevance ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub position: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    /// Whitespace-delimited word count of the emitted text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Internal: a sentence paired with its strategy-dependent relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: f32,
}

/// Top-N salient terms of a text span, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new(keywords: Vec<String>) -> Self {
        Self(keywords)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|k| k == token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Mini summary of a single document within a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerDocumentSummary {
    pub title: String,
    pub summary: String,
    pub score: i64,
    pub subreddit_label: String,
    pub permalink: String,
}

/// The final result of summarizing a document collection.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub key_points: Vec<String>,
    pub per_document_summaries: Vec<PerDocumentSummary>,
    pub total_documents: usize,
    pub query: String,

    pub word_count: usize,
    /// Count of blank-line separated segments in `summary`, or 1 when there
    /// are none. Selected summaries never contain blank lines; a corpus
    /// returned unchanged can, when post bodies do.
    pub paragraph_count: usize,

    /// Scoring strategy that produced the summary.
    pub strategy: String,
    pub corpus_version: String,
}
