//! Tag suggestion module
//!
//! Ranks candidate tags against content by embedding similarity.
//!
//! # Components
//!
//! - `embedder`: Embedder trait, Model2Vec and HTP implementations
//! - `keyword`: Keyword extraction over a linguistic pipeline
//! - `matcher`: Tag ranking with keyword fallback
//! - `shared`: Lazily built process-wide matcher

pub mod embedder;
pub mod error;
pub mod keyword;
pub mod matcher;
pub mod shared;

#[cfg(test)]
pub(crate) mod testing;

pub use embedder::{cosine_similarity, create_embedder, Embedder, HtpEmbedder, Model2VecEmbedder};
pub use error::{Result, TagError};
pub use keyword::{KeywordExtractor, DEFAULT_MAX_KEYWORDS};
pub use matcher::{DetectOptions, SuggestionSource, TagMatcher, TagSuggestion};
pub use shared::{build_matcher, global_matcher};
