use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables for the engine. Fields missing from a config file keep their
/// defaults. The 3-character keyword minimum is fixed and not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Texts whose trimmed length is below this are returned unchanged.
    pub min_text_chars: usize,
    pub document_sentences: usize,
    pub corpus_sentences: usize,
    pub per_document_sentences: usize,
    pub document_keywords: usize,
    pub corpus_keywords: usize,
    /// Fragments shorter than this are dropped by the last segmentation fallback.
    pub min_fallback_sentence_chars: usize,
    pub title_max_chars: usize,
    pub no_results_message: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_text_chars: 50,
            document_sentences: 3,
            corpus_sentences: 5,
            per_document_sentences: 2,
            document_keywords: 10,
            corpus_keywords: 15,
            min_fallback_sentence_chars: 10,
            title_max_chars: 100,
            no_results_message: "No posts found to summarize.".into(),
        }
    }
}

impl SummarizerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("document_sentences", self.document_sentences),
            ("corpus_sentences", self.corpus_sentences),
            ("per_document_sentences", self.per_document_sentences),
            ("document_keywords", self.document_keywords),
            ("corpus_keywords", self.corpus_keywords),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be at least 1".into(),
                });
            }
        }

        if self.no_results_message.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "no_results_message",
                reason: "must not be blank".into(),
            });
        }

        Ok(())
    }
}
