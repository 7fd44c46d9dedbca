//! Base noun-phrase chunker
//!
//! A chunk is an optional determiner or possessive, any number of modifiers,
//! and ends at its last noun: `(Det|Poss)? (Adv? Adj|Num|Noun|Propn)* (Noun|Propn)`.

use super::lexicon::POSSESSIVES;
use super::tagger::normalize;
use super::{Pos, Span, Token};

pub fn noun_chunks(text: &str, tokens: &[Token]) -> Vec<Span> {
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if !opens_chunk(tokens, i) {
            i += 1;
            continue;
        }

        let mut head = None;
        let mut j = i;
        while j < tokens.len() {
            if j > i && (tokens[j].sentence_start || !continues_chunk(tokens, j)) {
                break;
            }
            if tokens[j].pos.is_nominal() {
                head = Some(j);
            }
            j += 1;
        }

        match head {
            Some(h) => {
                chunks.push(Span::from_tokens(text, tokens, i, h + 1));
                i = h + 1;
            }
            None => i += 1,
        }
    }

    chunks
}

fn is_modifier(pos: Pos) -> bool {
    matches!(pos, Pos::Adjective | Pos::Numeral | Pos::Noun | Pos::ProperNoun)
}

fn adverb_before_adjective(tokens: &[Token], i: usize) -> bool {
    tokens[i].pos == Pos::Adverb && tokens.get(i + 1).is_some_and(|t| t.pos == Pos::Adjective)
}

fn opens_chunk(tokens: &[Token], i: usize) -> bool {
    let token = &tokens[i];
    match token.pos {
        Pos::Determiner => true,
        Pos::Pronoun => POSSESSIVES.contains(normalize(&token.text).as_str()),
        Pos::Adverb => adverb_before_adjective(tokens, i),
        pos => is_modifier(pos),
    }
}

fn continues_chunk(tokens: &[Token], j: usize) -> bool {
    let token = &tokens[j];
    if is_modifier(token.pos) || adverb_before_adjective(tokens, j) {
        return true;
    }
    // "Google's new phone"
    normalize(&token.text) == "'s"
        && tokens[j - 1].pos.is_nominal()
        && tokens.get(j + 1).is_some_and(|t| is_modifier(t.pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tagger::tag;
    use crate::nlp::tokenizer::tokenize;

    fn chunks(text: &str) -> Vec<String> {
        let mut tokens = tokenize(text);
        tag(&mut tokens);
        noun_chunks(text, &tokens)
            .into_iter()
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn test_product_launch_chunks() {
        assert_eq!(
            chunks("Excited to announce our new product launch in San Francisco"),
            vec!["our new product launch", "San Francisco"]
        );
    }

    #[test]
    fn test_determiner_and_adverb() {
        assert_eq!(
            chunks("This is a very important decision for the team"),
            vec!["a very important decision", "the team"]
        );
    }

    #[test]
    fn test_possessive_clitic_inside_chunk() {
        assert_eq!(
            chunks("We tried Google's new phone"),
            vec!["Google's new phone"]
        );
    }

    #[test]
    fn test_chunks_do_not_cross_sentences() {
        assert_eq!(chunks("Great product. Teams love it"), vec!["Great product", "Teams"]);
    }

    #[test]
    fn test_chunk_stops_at_present_tense_verb() {
        assert_eq!(
            chunks("The GDPR applies to Acme Inc."),
            vec!["The GDPR", "Acme Inc"]
        );
    }

    #[test]
    fn test_no_chunks_without_nouns() {
        assert!(chunks("it is what it is").is_empty());
    }
}
