use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::{ScoredSentence, Sentence};

/// Caller-specified limit on summary size. The modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    SentenceCount(usize),
    MaxWords(usize),
    /// Proxy for paragraph count: sentences carry no paragraph structure.
    MaxParagraphs(usize),
}

impl Budget {
    /// Resolve an optional caller budget. A zero word or paragraph limit
    /// counts as unset, falling back to `default_sentences`.
    pub fn resolve(requested: Option<Budget>, default_sentences: usize) -> Budget {
        match requested {
            Some(Budget::MaxWords(0)) | Some(Budget::MaxParagraphs(0)) | None => {
                Budget::SentenceCount(default_sentences)
            }
            Some(budget) => budget,
        }
    }

    pub fn max_words(&self) -> Option<usize> {
        match self {
            Budget::MaxWords(words) => Some(*words),
            _ => None,
        }
    }
}

pub struct BudgetResult {
    pub selected: Vec<ScoredSentence>,
    pub words_used: usize,
    pub sentences_selected: usize,
    pub sentences_excluded_by_budget: usize,
}

/// Sort by score descending. The sort is stable, so equal scores keep
/// source order.
pub fn rank(mut scored: Vec<ScoredSentence>) -> Vec<ScoredSentence> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

/// Take sentences from an already ranked list until the budget is spent.
///
/// In word mode the first sentence that would overflow ends selection;
/// sentences are never truncated.
pub fn apply_budget(
    ranked: Vec<ScoredSentence>,
    total_sentences: usize,
    budget: Budget,
) -> BudgetResult {
    let considered = ranked.len();

    let (selected, words_used) = match budget {
        Budget::MaxWords(max_words) => {
            let mut selected = Vec::new();
            let mut words_used = 0;
            for scored in ranked {
                let words = scored.sentence.word_count();
                if words_used + words > max_words {
                    break;
                }
                words_used += words;
                selected.push(scored);
            }
            (selected, words_used)
        }
        Budget::MaxParagraphs(paragraphs) => {
            let paragraphs = paragraphs.max(1);
            let per_paragraph = (total_sentences / paragraphs).max(1);
            take_top(ranked, paragraphs * per_paragraph)
        }
        Budget::SentenceCount(count) => take_top(ranked, count),
    };

    let sentences_selected = selected.len();
    BudgetResult {
        selected,
        words_used,
        sentences_selected,
        sentences_excluded_by_budget: considered - sentences_selected,
    }
}

fn take_top(ranked: Vec<ScoredSentence>, count: usize) -> (Vec<ScoredSentence>, usize) {
    let selected: Vec<ScoredSentence> = ranked.into_iter().take(count).collect();
    let words_used = selected.iter().map(|s| s.sentence.word_count()).sum();
    (selected, words_used)
}

/// Rank, apply the budget, then restore the order the sentences had in
/// `original_order`. A sentence text that occurs more than once is placed at
/// its first ordinal.
pub fn select(
    scored: Vec<ScoredSentence>,
    original_order: &[Sentence],
    budget: Budget,
) -> Vec<Sentence> {
    let BudgetResult { selected, .. } = apply_budget(rank(scored), original_order.len(), budget);

    let mut chosen: Vec<(usize, Sentence)> = selected
        .into_iter()
        .map(|s| {
            let ordinal = original_order
                .iter()
                .position(|o| o.text == s.sentence.text)
                .unwrap_or(s.sentence.position);
            (ordinal, s.sentence)
        })
        .collect();
    chosen.sort_by_key(|(ordinal, _)| *ordinal);

    debug_assert!(chosen.windows(2).all(|w| w[0].0 <= w[1].0));

    chosen.into_iter().map(|(_, sentence)| sentence).collect()
}
