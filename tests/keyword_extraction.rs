use summary_core::text::{extract_keywords, LanguageResources, MIN_KEYWORD_CHARS};

const POST: &str = "What are the best programming languages to learn in 2024? \
    I keep reading that programming in Rust is hard, but Rust programmers love it. \
    Go is simple. Python is everywhere and tools like Python dominate data science.";

#[test]
fn invariant_keywords_exclude_stopwords_and_short_tokens() {
    let resources = LanguageResources::english();
    let keywords = extract_keywords(POST, 15, &resources);

    assert!(!keywords.is_empty());
    for keyword in keywords.iter() {
        assert!(!resources.is_stopword(keyword), "stopword leaked: {keyword}");
        assert!(keyword.chars().count() >= MIN_KEYWORD_CHARS, "short token leaked: {keyword}");
    }
    assert!(!keywords.contains("go"));
}

#[test]
fn keywords_rank_by_frequency() {
    let resources = LanguageResources::english();
    let keywords = extract_keywords(POST, 3, &resources);

    assert_eq!(keywords.len(), 3);
    let top: Vec<&str> = keywords.iter().collect();
    // programming, rust and python occur more than any other qualifying token
    assert!(top.contains(&"programming"));
    assert!(top.contains(&"rust"));
    assert!(top.contains(&"python"));
}

#[test]
fn keywords_of_empty_text_are_empty() {
    let resources = LanguageResources::english();
    assert!(extract_keywords("", 10, &resources).is_empty());
    assert!(extract_keywords("a an of !!", 10, &resources).is_empty());
}

#[test]
fn custom_stopwords_are_respected() {
    let resources = LanguageResources::from_stopwords(&["rust"]);
    let keywords = extract_keywords("Rust rust RUST cargo cargo crates", 5, &resources);
    assert_eq!(keywords.as_slice(), &["cargo", "crates"]);
}

#[test]
fn minimal_resources_filter_common_words() {
    let resources = LanguageResources::minimal();
    let keywords = extract_keywords("The crate and the crate they built", 5, &resources);
    assert_eq!(keywords.as_slice(), &["crate", "built"]);
}
