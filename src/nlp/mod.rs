//! Linguistic analysis for keyword extraction
//!
//! Provides a small English pipeline: tokenization, part-of-speech tagging,
//! lemmatization, named-entity recognition and noun-phrase chunking.
//!
//! # Components
//!
//! - `tokenizer`: word / number / punctuation tokens with sentence boundaries
//! - `tagger`: lexicon, suffix and context rules for POS tags and lemmas
//! - `entities`: capitalized-span and numeric entity recognition
//! - `chunker`: base noun phrases
//! - `pipeline`: `RuleBasedPipeline` tying the stages together

pub mod chunker;
pub mod entities;
pub mod lexicon;
pub mod pipeline;
pub mod tagger;
pub mod tokenizer;

use anyhow::Result;
use serde::Serialize;

pub use pipeline::RuleBasedPipeline;

/// Text analysis backend used by the keyword extractor
pub trait LinguisticPipeline: Send + Sync {
    /// Analyze text into tokens, entities and noun chunks
    fn analyze(&self, text: &str) -> Result<Analysis>;

    /// Get pipeline name/identifier
    fn name(&self) -> &str;
}

/// Coarse part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pos {
    Noun,
    ProperNoun,
    Adjective,
    Verb,
    Auxiliary,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Symbol,
    Other,
}

impl Pos {
    pub fn is_nominal(self) -> bool {
        matches!(self, Pos::Noun | Pos::ProperNoun)
    }

    /// Tags whose tokens can become keywords on their own
    pub fn is_keyword_pos(self) -> bool {
        matches!(self, Pos::Noun | Pos::ProperNoun | Pos::Adjective)
    }
}

/// Named-entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Organization,
    Location,
    Product,
    Event,
    WorkOfArt,
    Law,
    Date,
    Time,
    Money,
    Percent,
    Cardinal,
    Misc,
}

impl EntityKind {
    /// Entity kinds that name something worth tagging
    pub fn is_taggable(self) -> bool {
        matches!(
            self,
            EntityKind::Person
                | EntityKind::Organization
                | EntityKind::Location
                | EntityKind::Product
                | EntityKind::Event
                | EntityKind::WorkOfArt
                | EntityKind::Law
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    pub is_stop: bool,
    /// First token of a sentence
    pub sentence_start: bool,
    /// Byte offset into the analyzed text
    pub offset: usize,
}

impl Token {
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(|c| c.is_uppercase())
    }

    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Token range `[start, end)` with its surface text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Span {
    /// Build a span over `tokens[start..end]`, slicing the original text
    pub fn from_tokens(text: &str, tokens: &[Token], start: usize, end: usize) -> Self {
        let from = tokens[start].offset;
        let to = tokens[end - 1].end();
        Self {
            start,
            end,
            text: text[from..to].to_string(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub span: Span,
    pub kind: EntityKind,
}

/// Result of running a pipeline over one text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub entities: Vec<Entity>,
    pub noun_chunks: Vec<Span>,
}
