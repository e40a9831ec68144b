pub mod budgeting;
pub mod ranking;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::SummarizerConfig;
use crate::text::{extract_keywords, normalize, LanguageResources, Segmenter};
use crate::types::{KeywordSet, ScoredSentence, Sentence};
pub use budgeting::{apply_budget, rank, select, Budget, BudgetResult};
pub use ranking::{DensityScorer, HeuristicScorer, SentenceScorer, LEAD_SENTENCE_BONUS};

/// Engine whose strategy is picked at runtime by [`Summarizer::for_language`].
pub type DynSummarizer = Summarizer<Box<dyn SentenceScorer + Send + Sync>>;

/// The summarization engine: one scoring strategy plus the read-only
/// linguistic resources it was built with.
///
/// Holds no mutable state; a single instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Summarizer<S> {
    scorer: S,
    resources: Arc<LanguageResources>,
    config: SummarizerConfig,
}

impl Default for Summarizer<DensityScorer> {
    fn default() -> Self {
        Self::density(Arc::new(LanguageResources::english()))
    }
}

impl Summarizer<DensityScorer> {
    pub fn density(resources: Arc<LanguageResources>) -> Self {
        Self::new(
            DensityScorer::new(Arc::clone(&resources)),
            resources,
            SummarizerConfig::default(),
        )
    }
}

impl Summarizer<HeuristicScorer> {
    pub fn heuristic() -> Self {
        Self::new(
            HeuristicScorer,
            Arc::new(LanguageResources::minimal()),
            SummarizerConfig::default(),
        )
    }
}

impl DynSummarizer {
    /// Density engine when the language's resources load, heuristic engine
    /// otherwise. The choice is fixed for the life of the instance.
    pub fn for_language(language: &str, config: SummarizerConfig) -> Self {
        match LanguageResources::load(language) {
            Ok(resources) => {
                let resources = Arc::new(resources);
                let scorer = DensityScorer::new(Arc::clone(&resources));
                Self::new(Box::new(scorer), resources, config)
            }
            Err(error) => {
                warn!(%error, "linguistic resources unavailable, using heuristic strategy");
                Self::new(
                    Box::new(HeuristicScorer),
                    Arc::new(LanguageResources::minimal()),
                    config,
                )
            }
        }
    }
}

impl<S> Summarizer<S>
where
    S: SentenceScorer,
{
    pub fn new(scorer: S, resources: Arc<LanguageResources>, config: SummarizerConfig) -> Self {
        Self {
            scorer,
            resources,
            config,
        }
    }

    pub fn with_config(mut self, config: SummarizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    pub fn strategy(&self) -> &'static str {
        self.scorer.name()
    }

    pub fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        Segmenter::new(self.resources.splitter(), self.config.min_fallback_sentence_chars)
            .split_sentences(text)
    }

    pub fn extract_keywords(&self, text: &str, n: usize) -> KeywordSet {
        extract_keywords(text, n, &self.resources)
    }

    pub fn score_sentences(&self, sentences: &[Sentence], keywords: &KeywordSet) -> Vec<ScoredSentence> {
        self.scorer.score(sentences, keywords)
    }

    /// Summarize a single text. Without a budget the single-document
    /// sentence default applies.
    pub fn summarize(&self, text: &str, budget: Option<Budget>) -> String {
        self.summarize_text(text, Budget::resolve(budget, self.config.document_sentences))
    }

    pub(crate) fn summarize_text(&self, text: &str, budget: Budget) -> String {
        if text.trim().chars().count() < self.config.min_text_chars {
            debug!("text below minimum length, returned unchanged");
            return text.to_string();
        }

        let sentences = self.split_sentences(text);

        match budget {
            Budget::SentenceCount(count) if sentences.len() <= count => {
                debug!(sentences = sentences.len(), count, "already within sentence budget");
                return text.to_string();
            }
            Budget::MaxWords(max_words) if sentences.len() <= 2 => {
                debug!(sentences = sentences.len(), max_words, "poor segmentation, truncating words");
                return truncate_words(&normalize(text), max_words);
            }
            _ => {}
        }

        let keywords = self.extract_keywords(text, self.config.document_keywords);
        let scored = self.scorer.score(&first_occurrences(&sentences), &keywords);
        let selected = select(scored, &sentences, budget);

        debug!(
            strategy = self.scorer.name(),
            sentences = sentences.len(),
            selected = selected.len(),
            ?budget,
            "selected summary sentences"
        );

        self.scorer.join(&selected)
    }
}

/// Duplicate sentence texts are scored once, at their first ordinal.
fn first_occurrences(sentences: &[Sentence]) -> Vec<Sentence> {
    let mut seen = HashSet::new();
    sentences
        .iter()
        .filter(|s| seen.insert(s.text.as_str()))
        .cloned()
        .collect()
}

fn truncate_words(normalized: &str, max_words: usize) -> String {
    normalized
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}
