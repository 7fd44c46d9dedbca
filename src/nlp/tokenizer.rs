//! Regex tokenizer with sentence boundary detection

use regex::Regex;

use super::lexicon::ABBREVIATIONS;
use super::{Pos, Token};

lazy_static::lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(
        r"\p{N}+(?:[.,]\p{N}+)*|[\p{L}\p{N}]+(?:[-'’.][\p{L}\p{N}]+)*|\S"
    )
    .unwrap();
}

/// Split text into tokens. POS and lemma are left for the tagger.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut sentence_start = true;
    let mut last_end = 0;

    for m in TOKEN_RE.find_iter(text) {
        if text[last_end..m.start()].contains('\n') {
            sentence_start = true;
        }
        last_end = m.end();

        let (base, clitic) = split_possessive(m.as_str());
        tokens.push(raw_token(base, m.start(), sentence_start));
        if let Some(clitic) = clitic {
            tokens.push(raw_token(clitic, m.start() + base.len(), false));
        }

        sentence_start = ends_sentence(&tokens);
    }

    tokens
}

fn raw_token(text: &str, offset: usize, sentence_start: bool) -> Token {
    Token {
        text: text.to_string(),
        lemma: String::new(),
        pos: Pos::Other,
        is_stop: false,
        sentence_start,
        offset,
    }
}

/// "company's" -> ("company", Some("'s"))
fn split_possessive(word: &str) -> (&str, Option<&str>) {
    for suffix in ["'s", "’s", "'S", "’S"] {
        if let Some(base) = word.strip_suffix(suffix) {
            if !base.is_empty() {
                return (base, Some(&word[base.len()..]));
            }
        }
    }
    (word, None)
}

/// Whether the most recent token closes a sentence
fn ends_sentence(tokens: &[Token]) -> bool {
    let Some(last) = tokens.last() else {
        return false;
    };
    match last.text.as_str() {
        "!" | "?" => true,
        "." => {
            let prev = tokens.len().checked_sub(2).map(|i| &tokens[i]);
            !prev.is_some_and(|p| ABBREVIATIONS.contains(p.text.to_lowercase().as_str()))
        }
        _ => false,
    }
}
