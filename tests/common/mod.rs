#![allow(dead_code)]

use std::sync::Arc;

use tagsmith::tags::{Embedder, HtpEmbedder, KeywordExtractor, TagMatcher};

/// English pipeline with the built-in HTP embedder
pub fn htp_matcher() -> TagMatcher {
    TagMatcher::new(KeywordExtractor::english(), Arc::new(HtpEmbedder::new()))
}

/// Embedder with one axis per concept; each word adds 1.0 to every concept
/// listing it. Lets tests state similarities exactly.
pub struct ConceptEmbedder {
    concepts: Vec<Vec<&'static str>>,
}

impl ConceptEmbedder {
    pub fn new(concepts: &[&[&'static str]]) -> Self {
        Self {
            concepts: concepts.iter().map(|c| c.to_vec()).collect(),
        }
    }
}

impl Embedder for ConceptEmbedder {
    fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        Ok(self
            .concepts
            .iter()
            .map(|concept| words.iter().filter(|w| concept.contains(w)).count() as f32)
            .collect())
    }

    fn embed_batch(&self, texts: &[&str]) -> anyhow::Result<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimension(&self) -> usize {
        self.concepts.len()
    }

    fn name(&self) -> &str {
        "concept"
    }
}
