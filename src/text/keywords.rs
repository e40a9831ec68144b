use std::collections::HashMap;

use super::normalize::normalize;
use super::resources::LanguageResources;
use super::segment::split_words;
use crate::types::KeywordSet;

/// Tokens shorter than this never count as keywords.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Top `n` most frequent qualifying tokens of `text`.
///
/// Qualifying tokens are not stopwords and have at least
/// [`MIN_KEYWORD_CHARS`] characters. Ties keep first-encountered order.
pub fn extract_keywords(text: &str, n: usize, resources: &LanguageResources) -> KeywordSet {
    let normalized = normalize(text);

    // (token, frequency) in first-encountered order
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for token in split_words(&normalized) {
        if token.chars().count() < MIN_KEYWORD_CHARS || resources.is_stopword(&token) {
            continue;
        }
        match slots.get(&token) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    // Stable sort keeps first-encountered order among equal frequencies.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    KeywordSet::new(counts.into_iter().take(n).map(|(token, _)| token).collect())
}
