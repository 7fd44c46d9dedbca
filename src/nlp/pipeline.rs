//! Built-in English pipeline

use anyhow::Result;

use super::chunker::noun_chunks;
use super::entities::recognize;
use super::tagger::tag;
use super::tokenizer::tokenize;
use super::{Analysis, LinguisticPipeline};

/// Lexicon and rule based English analyzer. Needs no model files.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedPipeline;

impl RuleBasedPipeline {
    pub fn english() -> Self {
        Self
    }
}

impl LinguisticPipeline for RuleBasedPipeline {
    fn analyze(&self, text: &str) -> Result<Analysis> {
        let mut tokens = tokenize(text);
        tag(&mut tokens);
        let entities = recognize(text, &tokens);
        let noun_chunks = noun_chunks(text, &tokens);

        Ok(Analysis {
            tokens,
            entities,
            noun_chunks,
        })
    }

    fn name(&self) -> &str {
        "rule-based-en"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{EntityKind, Pos};

    #[test]
    fn test_analyze_sentence() {
        let pipeline = RuleBasedPipeline::english();
        let analysis = pipeline
            .analyze("Excited to announce our new product launch in San Francisco")
            .unwrap();

        assert_eq!(analysis.tokens.len(), 10);
        assert_eq!(analysis.entities.len(), 1);
        assert_eq!(analysis.entities[0].kind, EntityKind::Location);
        assert_eq!(analysis.noun_chunks.len(), 2);

        let product = analysis.tokens.iter().find(|t| t.text == "product").unwrap();
        assert_eq!(product.pos, Pos::Noun);
        assert_eq!(product.lemma, "product");
    }

    #[test]
    fn test_analyze_empty() {
        let analysis = RuleBasedPipeline::english().analyze("").unwrap();
        assert_eq!(analysis, Analysis::default());
    }
}
