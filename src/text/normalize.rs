use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*://\S+").expect("valid url pattern"));

static NON_ALNUM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9\s]").expect("valid character class"));

static WHITESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Remove `scheme://host/path` substrings, leaving everything else intact.
pub fn strip_urls(text: &str) -> String {
    URL_PATTERN.replace_all(text, "").into_owned()
}

/// Normalize raw text: strip URLs, drop everything outside `[A-Za-z0-9 ]`,
/// collapse whitespace runs to one space and trim.
///
/// Total over all inputs and idempotent.
pub fn normalize(text: &str) -> String {
    let without_urls = URL_PATTERN.replace_all(text, "");
    let alnum = NON_ALNUM_PATTERN.replace_all(&without_urls, "");
    let collapsed = WHITESPACE_PATTERN.replace_all(&alnum, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_urls_and_punctuation() {
        let raw = "Check https://example.com/a?b=1 out!!  It's   great.";
        assert_eq!(normalize(raw), "Check out Its great");
    }

    #[test]
    fn empty_and_symbol_only_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  !!! ?? ..."), "");
    }

    #[test]
    fn newlines_collapse_to_single_space() {
        assert_eq!(normalize("first\n\n\tsecond\r\nthird"), "first second third");
    }

    #[test]
    fn strip_urls_keeps_terminators() {
        assert_eq!(
            strip_urls("See ftp://files.example.org/x. Then stop!"),
            "See  Then stop!"
        );
    }
}
