pub mod document;

pub use document::{Document, UNKNOWN_SUBREDDIT};
