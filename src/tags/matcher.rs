//! Tag matcher for suggesting tags based on semantic similarity
//!
//! Candidate tags (usually every tag already attached to stored records) are
//! ranked against the content. When none of them clears the threshold, the
//! content's own keywords are ranked instead, with a score penalty.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use super::embedder::{cosine_similarity, Embedder};
use super::error::{Result, TagError};
use super::keyword::{KeywordExtractor, DEFAULT_MAX_KEYWORDS};

/// Number of suggestions returned by default
pub const DEFAULT_TOP_K: usize = 5;

/// Minimum similarity for a candidate tag
pub const DEFAULT_THRESHOLD: f32 = 0.3;

/// Multiplier applied to extracted-keyword scores
pub const EXTRACTED_SCORE_PENALTY: f32 = 0.7;

/// Extracted keywords must clear `threshold * FALLBACK_THRESHOLD_RATIO`
pub const FALLBACK_THRESHOLD_RATIO: f32 = 0.5;

/// Where a suggestion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    /// One of the caller's candidate tags
    Database,
    /// A keyword extracted from the content itself
    Extracted,
}

/// A suggested tag with confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSuggestion {
    pub tag: String,
    pub score: f32,
    pub source: SuggestionSource,
}

/// Ranking parameters for one call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectOptions {
    pub top_k: usize,
    pub threshold: f32,
    /// Keywords extracted for content enhancement and fallback
    pub max_keywords: usize,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            threshold: DEFAULT_THRESHOLD,
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }
}

impl DetectOptions {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(TagError::InvalidInput(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Tag matcher combining keyword extraction and semantic ranking
#[derive(Clone)]
pub struct TagMatcher {
    extractor: KeywordExtractor,
    embedder: Arc<dyn Embedder>,
}

impl TagMatcher {
    /// Create a new tag matcher
    pub fn new(extractor: KeywordExtractor, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            extractor,
            embedder,
        }
    }

    /// Get extractor reference
    pub fn extractor(&self) -> &KeywordExtractor {
        &self.extractor
    }

    /// Get embedder reference
    pub fn embedder(&self) -> &dyn Embedder {
        self.embedder.as_ref()
    }

    pub fn extract_keywords(&self, content: &str, max_keywords: usize) -> Result<Vec<String>> {
        self.extractor.extract_keywords(content, max_keywords)
    }

    /// Suggest tags for `content` from `candidate_tags`, falling back to
    /// extracted keywords when no candidate clears the threshold.
    ///
    /// Results are sorted by descending score, unique case-insensitively and
    /// at most `options.top_k` long.
    pub fn detect_tags<S: AsRef<str>>(
        &self,
        content: &str,
        candidate_tags: &[S],
        options: &DetectOptions,
    ) -> Result<Vec<TagSuggestion>> {
        options.validate()?;

        let keywords = self.extractor.extract_keywords(content, options.max_keywords)?;
        let enhanced = enhance_content(content, &keywords);
        let candidates = dedup_candidates(candidate_tags);

        if candidates.is_empty() && keywords.is_empty() {
            debug!("no candidates and no keywords; nothing to rank");
            return Ok(Vec::new());
        }

        let content_vec = self.embedder.embed(&enhanced).map_err(TagError::Embedding)?;

        let mut suggestions = if candidates.is_empty() {
            Vec::new()
        } else {
            self.score_candidates(&content_vec, &candidates, options.threshold)?
        };

        debug!(
            candidates = candidates.len(),
            matched = suggestions.len(),
            keywords = keywords.len(),
            "scored candidate tags"
        );

        if suggestions.is_empty() && !keywords.is_empty() {
            let extracted =
                self.score_keywords(&content_vec, &keywords, &suggestions, options.threshold)?;
            debug!(extracted = extracted.len(), "fell back to extracted keywords");
            suggestions.extend(extracted);
        }

        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions.truncate(options.top_k);

        Ok(suggestions)
    }

    fn score_candidates(
        &self,
        content_vec: &[f32],
        candidates: &[&str],
        threshold: f32,
    ) -> Result<Vec<TagSuggestion>> {
        let vectors = self.embed_all(candidates)?;

        Ok(candidates
            .iter()
            .zip(vectors.iter())
            .map(|(tag, vec)| (tag, cosine_similarity(content_vec, vec)))
            .filter(|(_, score)| *score >= threshold)
            .map(|(tag, score)| TagSuggestion {
                tag: tag.to_string(),
                score,
                source: SuggestionSource::Database,
            })
            .collect())
    }

    fn score_keywords(
        &self,
        content_vec: &[f32],
        keywords: &[String],
        existing: &[TagSuggestion],
        threshold: f32,
    ) -> Result<Vec<TagSuggestion>> {
        let texts: Vec<&str> = keywords.iter().map(String::as_str).collect();
        let vectors = self.embed_all(&texts)?;
        let min_score = threshold * FALLBACK_THRESHOLD_RATIO;

        let mut taken: HashSet<String> = existing.iter().map(|s| s.tag.to_lowercase()).collect();
        let mut extracted = Vec::new();

        for (keyword, vec) in keywords.iter().zip(vectors.iter()) {
            let lower = keyword.to_lowercase();
            if taken.contains(&lower) {
                continue;
            }

            let adjusted = cosine_similarity(content_vec, vec) * EXTRACTED_SCORE_PENALTY;
            if adjusted >= min_score {
                taken.insert(lower);
                extracted.push(TagSuggestion {
                    tag: keyword.clone(),
                    score: adjusted,
                    source: SuggestionSource::Extracted,
                });
            }
        }

        Ok(extracted)
    }

    fn embed_all(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let vectors = self.embedder.embed_batch(texts).map_err(TagError::Embedding)?;
        if vectors.len() != texts.len() {
            return Err(TagError::EmbeddingCount {
                expected: texts.len(),
                got: vectors.len(),
            });
        }
        Ok(vectors)
    }
}

/// Content followed by its space-joined keywords
pub fn enhance_content(content: &str, keywords: &[String]) -> String {
    if keywords.is_empty() {
        content.to_string()
    } else {
        format!("{} {}", content, keywords.join(" "))
    }
}

/// Drop case-insensitive repeats, keeping the first spelling
fn dedup_candidates<S: AsRef<str>>(candidate_tags: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    candidate_tags
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| seen.insert(t.to_lowercase()))
        .collect()
}
