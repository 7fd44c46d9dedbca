//! Error type for the tag suggestion engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagError {
    /// Embedding model or linguistic pipeline could not be constructed
    #[error("failed to load {what}")]
    ModelLoad {
        what: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("embedding failed")]
    Embedding(#[source] anyhow::Error),

    #[error("embedder returned {got} vectors for {expected} inputs")]
    EmbeddingCount { expected: usize, got: usize },

    #[error("linguistic analysis failed")]
    Analysis(#[source] anyhow::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TagError>;
