use tracing::debug;

use crate::document::Document;
use crate::selection::{Budget, SentenceScorer, Summarizer};
use crate::types::{ContentVersion, PerDocumentSummary, SummaryResult};

impl<S> Summarizer<S>
where
    S: SentenceScorer,
{
    /// Summarize a collection: one corpus-level summary and keyword list,
    /// plus a smaller summary per non-blank document.
    ///
    /// Never fails; an empty collection yields the configured no-results
    /// message.
    pub fn summarize_collection(
        &self,
        documents: &[Document],
        query: &str,
        budget: Option<Budget>,
    ) -> SummaryResult {
        let config = self.config();

        if documents.is_empty() {
            debug!(query, "no documents to summarize");
            return SummaryResult {
                summary: config.no_results_message.clone(),
                key_points: Vec::new(),
                per_document_summaries: Vec::new(),
                total_documents: 0,
                query: query.to_string(),
                word_count: 0,
                paragraph_count: 0,
                strategy: self.strategy().to_string(),
                corpus_version: ContentVersion::from_content(b"").into_string(),
            };
        }

        // Per-document word budgets divide by every input document, blank
        // ones included. A share of zero falls back to the sentence default.
        let per_document_budget = match budget.and_then(|b| b.max_words()) {
            Some(max_words) => Budget::resolve(
                Some(Budget::MaxWords(max_words / documents.len())),
                config.per_document_sentences,
            ),
            None => Budget::SentenceCount(config.per_document_sentences),
        };

        let mut corpus = String::new();
        let mut per_document_summaries = Vec::with_capacity(documents.len());

        for document in documents {
            let text = document.text();
            if text.trim().is_empty() {
                continue;
            }
            corpus.push_str(&text);
            corpus.push(' ');

            per_document_summaries.push(PerDocumentSummary {
                title: truncate_title(&document.title, config.title_max_chars),
                summary: self.summarize_text(&text, per_document_budget),
                score: document.score,
                subreddit_label: document.subreddit_label.clone(),
                permalink: document.permalink.clone(),
            });
        }

        let summary = self.summarize_text(&corpus, Budget::resolve(budget, config.corpus_sentences));
        let key_points = self.extract_keywords(&corpus, config.corpus_keywords).into_vec();

        debug!(
            query,
            documents = documents.len(),
            summarized = per_document_summaries.len(),
            ?per_document_budget,
            "summarized collection"
        );

        SummaryResult {
            word_count: count_words(&summary),
            paragraph_count: count_paragraphs(&summary),
            summary,
            key_points,
            per_document_summaries,
            total_documents: documents.len(),
            query: query.to_string(),
            strategy: self.strategy().to_string(),
            corpus_version: ContentVersion::from_content(corpus.as_bytes()).into_string(),
        }
    }
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Blank-line separated segments, or 1 when there are none.
pub fn count_paragraphs(text: &str) -> usize {
    if text.contains("\n\n") {
        text.split("\n\n").count()
    } else {
        1
    }
}

/// Titles longer than `max_chars` characters are cut and marked with "...".
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() > max_chars {
        let cut: String = title.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        title.to_string()
    }
}
