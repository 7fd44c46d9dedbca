//! Keyword extraction from linguistic analysis
//!
//! Keywords are the union of three views of the text:
//! named entities of taggable kinds, short noun phrases, and content-word
//! lemmas (nouns, proper nouns, adjectives) that are not stop-words.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::nlp::{Analysis, LinguisticPipeline, RuleBasedPipeline};

use super::error::{Result, TagError};

/// Default cap on extracted keywords
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Noun phrases longer than this are skipped
const MAX_PHRASE_WORDS: usize = 3;

/// Tokens shorter than this are skipped
const MIN_TOKEN_CHARS: usize = 3;

/// Keyword extractor backed by a linguistic pipeline
#[derive(Clone)]
pub struct KeywordExtractor {
    pipeline: Arc<dyn LinguisticPipeline>,
}

impl KeywordExtractor {
    pub fn new(pipeline: Arc<dyn LinguisticPipeline>) -> Self {
        Self { pipeline }
    }

    /// Extractor using the built-in English pipeline
    pub fn english() -> Self {
        Self::new(Arc::new(RuleBasedPipeline::english()))
    }

    pub fn pipeline(&self) -> &dyn LinguisticPipeline {
        self.pipeline.as_ref()
    }

    /// Extract up to `max_keywords` lower-cased, deduplicated keywords
    pub fn extract_keywords(&self, content: &str, max_keywords: usize) -> Result<Vec<String>> {
        let analysis = self.pipeline.analyze(content).map_err(TagError::Analysis)?;
        let keywords = collect_keywords(&analysis, max_keywords);

        debug!(
            pipeline = self.pipeline.name(),
            tokens = analysis.tokens.len(),
            keywords = keywords.len(),
            "extracted keywords"
        );

        Ok(keywords)
    }
}

/// Keywords from an analysis, in first-seen order: entities, noun phrases, tokens
pub fn collect_keywords(analysis: &Analysis, max_keywords: usize) -> Vec<String> {
    let entities = analysis
        .entities
        .iter()
        .filter(|e| e.kind.is_taggable())
        .map(|e| e.span.text.to_lowercase());

    let phrases = analysis
        .noun_chunks
        .iter()
        .filter(|c| c.word_count() <= MAX_PHRASE_WORDS)
        .map(|c| c.text.to_lowercase());

    let tokens = analysis
        .tokens
        .iter()
        .filter(|t| {
            t.pos.is_keyword_pos() && !t.is_stop && t.text.chars().count() >= MIN_TOKEN_CHARS
        })
        .map(|t| t.lemma.to_lowercase());

    let mut seen = HashSet::new();
    entities
        .chain(phrases)
        .chain(tokens)
        .filter(|k| !k.trim().is_empty())
        .filter(|k| seen.insert(k.clone()))
        .take(max_keywords)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{Entity, EntityKind, Pos, Span, Token};

    fn token(text: &str, lemma: &str, pos: Pos, is_stop: bool) -> Token {
        Token {
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos,
            is_stop,
            sentence_start: false,
            offset: 0,
        }
    }

    fn span(text: &str) -> Span {
        Span {
            start: 0,
            end: 1,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_collect_keywords_filters() {
        let analysis = Analysis {
            tokens: vec![
                token("Products", "product", Pos::Noun, false),
                token("it", "it", Pos::Pronoun, true),
                token("AI", "AI", Pos::ProperNoun, false),
                token("fast", "fast", Pos::Adjective, false),
                token("run", "run", Pos::Verb, false),
                token("other", "other", Pos::Adjective, true),
            ],
            entities: vec![
                Entity {
                    span: span("Acme Corp"),
                    kind: EntityKind::Organization,
                },
                Entity {
                    span: span("2024"),
                    kind: EntityKind::Date,
                },
            ],
            noun_chunks: vec![span("the fast products"), span("a very long noun phrase")],
        };

        let keywords = collect_keywords(&analysis, 10);
        assert_eq!(
            keywords,
            vec!["acme corp", "the fast products", "product", "fast"]
        );
    }

    #[test]
    fn test_collect_keywords_dedup_and_limit() {
        let analysis = Analysis {
            tokens: vec![
                token("Rust", "Rust", Pos::ProperNoun, false),
                token("rust", "rust", Pos::Noun, false),
                token("cargo", "cargo", Pos::Noun, false),
            ],
            entities: vec![],
            noun_chunks: vec![span("Rust")],
        };

        assert_eq!(collect_keywords(&analysis, 10), vec!["rust", "cargo"]);
        assert_eq!(collect_keywords(&analysis, 1), vec!["rust"]);
        assert!(collect_keywords(&analysis, 0).is_empty());
    }

    #[test]
    fn test_extract_keywords_english() {
        let extractor = KeywordExtractor::english();
        let keywords = extractor
            .extract_keywords(
                "Excited to announce our new product launch in San Francisco",
                DEFAULT_MAX_KEYWORDS,
            )
            .unwrap();

        assert_eq!(
            keywords,
            vec![
                "san francisco",
                "excited",
                "new",
                "product",
                "launch",
                "san",
                "francisco"
            ]
        );
    }

    #[test]
    fn test_extract_keywords_skips_verbs() {
        let extractor = KeywordExtractor::english();
        let keywords = extractor
            .extract_keywords("The GDPR applies to Acme Inc.", DEFAULT_MAX_KEYWORDS)
            .unwrap();

        assert_eq!(&keywords[..3], &["gdpr", "acme inc", "the gdpr"]);
        assert!(keywords.iter().all(|k| !k.contains("appl")));
    }

    #[test]
    fn test_extract_keywords_empty_text() {
        let extractor = KeywordExtractor::english();
        assert!(extractor.extract_keywords("", 10).unwrap().is_empty());
        assert!(extractor.extract_keywords("it is what it is", 10).unwrap().is_empty());
    }

    #[test]
    fn test_keywords_are_lowercase_and_unique() {
        let extractor = KeywordExtractor::english();
        let keywords = extractor
            .extract_keywords("Rust and Cargo. Rust tooling with Cargo workspaces!", 20)
            .unwrap();

        let unique: HashSet<_> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
        assert!(keywords.iter().all(|k| *k == k.to_lowercase()));
    }
}
