//! Corpus-level summarization over a collection of documents.

pub mod aggregator;

pub use aggregator::{count_paragraphs, count_words, truncate_title};
