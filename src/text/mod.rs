//! Text processing: normalization, segmentation, keyword extraction and the
//! linguistic resources they draw on.

pub mod keywords;
pub mod normalize;
pub mod resources;
pub mod segment;

pub use keywords::{extract_keywords, MIN_KEYWORD_CHARS};
pub use normalize::{normalize, strip_urls};
pub use resources::{LanguageResources, ResourceError};
pub use segment::{AbbreviationAwareSplitter, SegmentError, Segmenter, SentenceSplitter, split_words};
