use summary_core::text::{normalize, split_words, strip_urls};

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "Plain sentence with nothing odd",
    "What are the best programming languages to learn in 2024?",
    "Links: https://old.reddit.com/r/rust/comments/abc?x=1&y=2 and http://a.b/c.",
    "Tabs\tand\nnewlines\r\nand   runs of spaces",
    "Émojis 🚀 and accents — café, naïve; résumé!!!",
    "!!!???...",
    "edge://flags and mailto:someone@example.com",
    "  leading and trailing  ",
];

#[test]
fn invariant_normalization_is_idempotent() {
    for sample in SAMPLES {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn invariant_normalized_text_is_alphanumeric_with_single_spaces() {
    for sample in SAMPLES {
        let normalized = normalize(sample);
        assert!(
            normalized.chars().all(|c| c.is_ascii_alphanumeric() || c == ' '),
            "unexpected character in {normalized:?}"
        );
        assert!(!normalized.contains("  "), "double space in {normalized:?}");
        assert_eq!(normalized, normalized.trim());
    }
}

#[test]
fn urls_are_removed_entirely() {
    let normalized = normalize("see https://example.com/path/to/page?q=rust for details");
    assert_eq!(normalized, "see for details");
}

#[test]
fn strip_urls_leaves_punctuation_for_segmentation() {
    let stripped = strip_urls("Great read http://x.io/a! Second point here.");
    assert_eq!(stripped, "Great read  Second point here.");
}

#[test]
fn split_words_matches_normalized_tokens() {
    let text = "Rust's borrow-checker: 100% worth it";
    let normalized = normalize(text);
    assert_eq!(normalized, "Rusts borrowchecker 100 worth it");
    assert_eq!(
        split_words(&normalized),
        vec!["rusts", "borrowchecker", "100", "worth", "it"]
    );
}
