use serde::{Deserialize, Serialize};

pub const UNKNOWN_SUBREDDIT: &str = "unknown";

fn unknown_subreddit() -> String {
    UNKNOWN_SUBREDDIT.to_string()
}

/// One retrieved post. The engine only reads `title` and `body` for text;
/// the rest is carried through to per-document summaries.
///
/// Sparse records never fail to deserialize: every missing field falls back
/// to a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "content")]
    pub body: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default = "unknown_subreddit", alias = "subreddit")]
    pub subreddit_label: String,
    #[serde(default)]
    pub permalink: String,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            score: 0,
            subreddit_label: unknown_subreddit(),
            permalink: String::new(),
        }
    }
}

impl Document {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    pub fn with_subreddit(mut self, label: impl Into<String>) -> Self {
        self.subreddit_label = label.into();
        self
    }

    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = permalink.into();
        self
    }

    /// Title and body joined by a single space.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }

    /// True when title and body carry no visible text.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.body.trim().is_empty()
    }
}
