//! Budget-constrained extractive summarization for short posts.
//!
//! `summary-core` cleans raw text, derives salient keywords, scores sentences
//! and selects the subset that best represents a corpus while respecting a
//! caller-supplied budget (sentences, words or paragraphs). All operations are
//! deterministic and side-effect free: identical inputs always produce
//! identical outputs, byte-for-byte.

pub mod collection;
pub mod config;
pub mod document;
pub mod selection;
pub mod text;
pub mod types;

pub use config::SummarizerConfig;
pub use document::Document;
pub use selection::{Budget, DensityScorer, HeuristicScorer, SentenceScorer, Summarizer};
pub use text::LanguageResources;
pub use types::{PerDocumentSummary, SummaryResult};
