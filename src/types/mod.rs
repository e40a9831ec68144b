pub mod identifiers;
pub mod summary;

pub use identifiers::ContentVersion;
pub use summary::{KeywordSet, PerDocumentSummary, ScoredSentence, Sentence, SummaryResult};
