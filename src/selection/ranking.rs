use std::fmt::Debug;
use std::sync::Arc;

use crate::text::{split_words, LanguageResources};
use crate::types::{KeywordSet, ScoredSentence, Sentence};

/// Relevance scoring strategy.
///
/// Both strategies share this contract so the rest of the pipeline never
/// needs to know which one is in use. The strategy also owns the formatting
/// of the joined summary.
pub trait SentenceScorer: Debug {
    fn name(&self) -> &'static str;

    fn score(&self, sentences: &[Sentence], keywords: &KeywordSet) -> Vec<ScoredSentence>;

    /// Join selected sentences, already in source order.
    fn join(&self, selected: &[Sentence]) -> String {
        selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<S: SentenceScorer + ?Sized> SentenceScorer for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn score(&self, sentences: &[Sentence], keywords: &KeywordSet) -> Vec<ScoredSentence> {
        (**self).score(sentences, keywords)
    }

    fn join(&self, selected: &[Sentence]) -> String {
        (**self).join(selected)
    }
}

/// Keyword density: the fraction of a sentence's non-stopword tokens that
/// are corpus keywords. Rewards dense sentences regardless of length.
#[derive(Debug, Clone)]
pub struct DensityScorer {
    resources: Arc<LanguageResources>,
}

impl DensityScorer {
    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self { resources }
    }

    pub fn density(&self, sentence: &Sentence, keywords: &KeywordSet) -> f32 {
        let tokens: Vec<String> = split_words(&sentence.text)
            .into_iter()
            .filter(|t| !self.resources.is_stopword(t))
            .collect();

        if tokens.is_empty() {
            return 0.0;
        }

        let hits = tokens.iter().filter(|t| keywords.contains(t)).count();
        let score = hits as f32 / tokens.len() as f32;
        debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");
        score
    }
}

impl SentenceScorer for DensityScorer {
    fn name(&self) -> &'static str {
        "density"
    }

    fn score(&self, sentences: &[Sentence], keywords: &KeywordSet) -> Vec<ScoredSentence> {
        sentences
            .iter()
            .map(|sentence| ScoredSentence {
                score: self.density(sentence, keywords),
                sentence: sentence.clone(),
            })
            .collect()
    }
}

/// Lead sentences of a post usually carry its thesis.
pub const LEAD_SENTENCE_BONUS: f32 = 1.5;

/// Resource-free fallback: score is the word count, with a bonus for the
/// first sentence in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl SentenceScorer for HeuristicScorer {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn score(&self, sentences: &[Sentence], _keywords: &KeywordSet) -> Vec<ScoredSentence> {
        sentences
            .iter()
            .map(|sentence| {
                let mut score = sentence.word_count() as f32;
                if sentence.position == 0 {
                    score *= LEAD_SENTENCE_BONUS;
                }
                ScoredSentence {
                    sentence: sentence.clone(),
                    score,
                }
            })
            .collect()
    }

    fn join(&self, selected: &[Sentence]) -> String {
        if selected.is_empty() {
            return String::new();
        }
        let body = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(". ");
        format!("{body}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, i))
            .collect()
    }

    #[test]
    fn density_ignores_stopwords_in_denominator() {
        let resources = Arc::new(LanguageResources::from_stopwords(&["the", "is"]));
        let scorer = DensityScorer::new(resources);
        let keywords = KeywordSet::new(vec!["rust".into(), "fast".into()]);

        let scored = scorer.score(&sentences(&["the rust compiler is fast", "the is"]), &keywords);
        // rust, compiler, fast -> 2 of 3
        assert!((scored[0].score - 2.0 / 3.0).abs() < f32::EPSILON);
        assert_eq!(scored[1].score, 0.0);
    }

    #[test]
    fn heuristic_boosts_lead_sentence() {
        let scored = HeuristicScorer.score(
            &sentences(&["two words", "three more words"]),
            &KeywordSet::default(),
        );
        assert_eq!(scored[0].score, 3.0);
        assert_eq!(scored[1].score, 3.0);
    }

    #[test]
    fn joins_differ_per_strategy() {
        let picked = sentences(&["first one", "second one"]);
        let resources = Arc::new(LanguageResources::minimal());
        assert_eq!(DensityScorer::new(resources).join(&picked), "first one second one");
        assert_eq!(HeuristicScorer.join(&picked), "first one. second one.");
        assert_eq!(HeuristicScorer.join(&[]), "");
    }
}
