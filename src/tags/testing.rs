//! Deterministic stand-ins for the pipeline and embedder used in unit tests

use anyhow::{bail, Result};

use super::embedder::Embedder;
use crate::nlp::{Analysis, LinguisticPipeline, Span};

/// Pipeline that reports a fixed list of noun phrases for any input
pub struct StubPipeline {
    phrases: Vec<String>,
}

impl StubPipeline {
    pub fn new(phrases: &[&str]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl LinguisticPipeline for StubPipeline {
    fn analyze(&self, _text: &str) -> Result<Analysis> {
        let noun_chunks = self
            .phrases
            .iter()
            .map(|p| Span {
                start: 0,
                end: 1,
                text: p.clone(),
            })
            .collect();

        Ok(Analysis {
            tokens: Vec::new(),
            entities: Vec::new(),
            noun_chunks,
        })
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Bag-of-words embedder: one axis per vocabulary word, counting occurrences
pub struct StubEmbedder {
    vocabulary: Vec<String>,
    fail: bool,
}

impl StubEmbedder {
    pub fn new(vocabulary: &[&str]) -> Self {
        Self {
            vocabulary: vocabulary.iter().map(|w| w.to_string()).collect(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            vocabulary: vec!["x".to_string()],
            fail: true,
        }
    }
}

impl Embedder for StubEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if self.fail {
            bail!("stub embedder failure");
        }

        let lower = text.to_lowercase();
        Ok(self
            .vocabulary
            .iter()
            .map(|axis| lower.split_whitespace().filter(|w| w == axis).count() as f32)
            .collect())
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    fn name(&self) -> &str {
        "stub"
    }
}
