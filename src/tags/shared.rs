//! Process-wide matcher, built on first use

use once_cell::sync::OnceCell;
use std::sync::Arc;

use super::embedder::create_embedder;
use super::error::{Result, TagError};
use super::keyword::KeywordExtractor;
use super::matcher::TagMatcher;
use crate::core::config::{Config, EmbedderKind};

static MATCHER: OnceCell<TagMatcher> = OnceCell::new();

/// Build a matcher with the English pipeline and the configured embedder
pub fn build_matcher(config: &Config) -> Result<TagMatcher> {
    let embedder = create_embedder(&config.model).map_err(|source| TagError::ModelLoad {
        what: describe_model(config),
        source,
    })?;

    Ok(TagMatcher::new(
        KeywordExtractor::english(),
        Arc::from(embedder),
    ))
}

/// Shared matcher for the process.
///
/// The first successful call fixes the configuration; later calls return the
/// same instance regardless of `config`. A failed build is not cached.
pub fn global_matcher(config: &Config) -> Result<&'static TagMatcher> {
    MATCHER.get_or_try_init(|| build_matcher(config))
}

fn describe_model(config: &Config) -> String {
    match (config.model.embedder, &config.model.model_path) {
        (EmbedderKind::Htp, _) => "htp embedder".to_string(),
        (EmbedderKind::Model2Vec, Some(path)) => format!("model from {}", path.display()),
        (EmbedderKind::Model2Vec, None) => format!("model {}", config.model.model_id),
    }
}
