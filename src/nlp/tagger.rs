//! Rule-based part-of-speech tagger and lemmatizer
//!
//! Tags come from three layers, applied in order:
//! 1. Lexicon lookups (closed-class words, known adjectives and verbs)
//! 2. Capitalization, numerals and suffix rules
//! 3. Left-context corrections (after `to`, modals, subject pronouns, determiners)
//!
//! Unknown words default to nouns.

use super::lexicon::{
    is_stopword, ADJECTIVES, CLOSED_CLASS, IRREGULAR_NOUNS, IRREGULAR_VERBS, KNOWN_LOCATIONS,
    KNOWN_ORGANIZATIONS, MODALS, POSSESSIVES, SINGULAR_S, SUBJECT_PRONOUNS, SUFFIX_EXCEPTIONS,
    VERB_BASES,
};
use super::{Pos, Token};

/// Normalized lookup key: lower-case with straight apostrophes
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace('’', "'")
}

/// Assign POS, lemma and stop-word flags in place
pub fn tag(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        let next_capitalized = tokens
            .get(i + 1)
            .is_some_and(|n| n.is_capitalized() && !n.sentence_start && is_word(&n.text));
        tokens[i].pos = lexical_tag(&tokens[i], next_capitalized);
    }

    apply_context_rules(tokens);

    for token in tokens.iter_mut() {
        let lower = normalize(&token.text);
        token.is_stop = is_stopword(&lower);
        token.lemma = lemmatize(&token.text, &lower, token.pos);
    }
}

fn is_word(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_alphanumeric())
}

fn is_acronym(text: &str) -> bool {
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    letters >= 2 && text.chars().all(|c| c.is_uppercase() || c.is_ascii_digit())
}

fn lexical_tag(token: &Token, next_capitalized: bool) -> Pos {
    let text = token.text.as_str();
    let first = match text.chars().next() {
        Some(c) => c,
        None => return Pos::Other,
    };

    if !first.is_alphanumeric() && text.chars().count() == 1 {
        return match first {
            '$' | '€' | '£' | '¥' | '%' | '&' | '@' | '#' | '+' | '=' | '<' | '>' => {
                if first == '&' {
                    Pos::Conjunction
                } else {
                    Pos::Symbol
                }
            }
            _ => Pos::Punctuation,
        };
    }

    if text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return Pos::Numeral;
    }

    let lower = normalize(text);
    let capitalized = first.is_uppercase();

    if capitalized && !token.sentence_start && !CLOSED_CLASS.contains_key(lower.as_str()) {
        return Pos::ProperNoun;
    }
    if is_acronym(text) && !CLOSED_CLASS.contains_key(lower.as_str()) {
        return Pos::ProperNoun;
    }
    if let Some(pos) = CLOSED_CLASS.get(lower.as_str()) {
        return *pos;
    }
    // Sentence-initial capital followed by another capital ("New York is...")
    // or a well-known name ("Google announced...")
    if capitalized && token.sentence_start && (next_capitalized || is_known_name(&lower)) {
        return Pos::ProperNoun;
    }
    if ADJECTIVES.contains(lower.as_str()) {
        return Pos::Adjective;
    }
    if verb_base(&lower).is_some() {
        return Pos::Verb;
    }

    suffix_tag(&lower)
}

fn is_known_name(lower: &str) -> bool {
    KNOWN_LOCATIONS.contains(lower) || KNOWN_ORGANIZATIONS.contains(lower)
}

fn suffix_tag(lower: &str) -> Pos {
    if SUFFIX_EXCEPTIONS.contains(lower) {
        return Pos::Noun;
    }
    let len = lower.chars().count();

    if len > 4 && lower.ends_with("ly") {
        return Pos::Adverb;
    }
    const ADJ_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ic"];
    if len > 5 && ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return Pos::Adjective;
    }
    if len > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
        return Pos::Verb;
    }
    Pos::Noun
}

fn apply_context_rules(tokens: &mut [Token]) {
    for i in 1..tokens.len() {
        if tokens[i].sentence_start {
            continue;
        }
        let prev_lower = normalize(&tokens[i - 1].text);
        let prev_pos = tokens[i - 1].pos;
        let lower = normalize(&tokens[i].text);
        let pos = tokens[i].pos;

        // Nominal context: "the release", "our launch", "new meeting"
        let nominal_context = matches!(prev_pos, Pos::Determiner | Pos::Adjective | Pos::Numeral)
            || POSSESSIVES.contains(prev_lower.as_str())
            || prev_lower == "'s";
        if pos == Pos::Verb && nominal_context {
            tokens[i].pos = if lower.ends_with("ed") && next_is_nominal(tokens, i) {
                Pos::Adjective
            } else {
                Pos::Noun
            };
            continue;
        }

        // Verbal context: "to announce", "will launch", "we ship"
        let verbal_context = (prev_lower == "to" && prev_pos == Pos::Adposition)
            || MODALS.contains(prev_lower.as_str())
            || (SUBJECT_PRONOUNS.contains(prev_lower.as_str()) && prev_pos == Pos::Pronoun);
        if pos == Pos::Noun && verbal_context && !has_noun_suffix(&lower) {
            tokens[i].pos = Pos::Verb;
        }
        if tokens[i].pos == Pos::Verb && prev_lower == "to" {
            tokens[i - 1].pos = Pos::Particle;
        }

        // Subject, -s form, object or complement: "The GDPR applies to ..."
        if tokens[i].pos == Pos::Noun
            && is_subject(tokens, i - 1)
            && introduces_complement(tokens, i)
            && present_tense_base(&lower).is_some()
        {
            tokens[i].pos = Pos::Verb;
        }
    }
}

/// A proper noun, or a common noun right after a determiner or possessive
fn is_subject(tokens: &[Token], i: usize) -> bool {
    match tokens[i].pos {
        Pos::ProperNoun => true,
        Pos::Noun => i > 0 && {
            let before = &tokens[i - 1];
            before.pos == Pos::Determiner || POSSESSIVES.contains(normalize(&before.text).as_str())
        },
        _ => false,
    }
}

fn introduces_complement(tokens: &[Token], i: usize) -> bool {
    tokens
        .get(i + 1)
        .is_some_and(|t| matches!(t.pos, Pos::Adposition | Pos::Determiner | Pos::Pronoun))
}

/// Base of a third-person singular form whose base is not in the lexicon
fn present_tense_base(lower: &str) -> Option<String> {
    if !lower.ends_with('s')
        || lower.chars().count() < 4
        || !lower.chars().all(char::is_alphabetic)
    {
        return None;
    }
    if SINGULAR_S.contains(lower) || ["ss", "us", "is"].iter().any(|s| lower.ends_with(s)) {
        return None;
    }
    if let Some(base) = verb_base(lower) {
        return Some(base);
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        return Some(format!("{}y", stem));
    }
    if ["sses", "xes", "ches", "shes", "zzes"].iter().any(|s| lower.ends_with(s)) {
        return Some(lower[..lower.len() - 2].to_string());
    }
    let base = lower.strip_suffix('s')?;
    if has_noun_suffix(base) {
        return None;
    }
    Some(base.to_string())
}

fn next_is_nominal(tokens: &[Token], i: usize) -> bool {
    tokens.get(i + 1).is_some_and(|t| t.pos.is_nominal())
}

fn has_noun_suffix(lower: &str) -> bool {
    const NOUN_SUFFIXES: &[&str] = &[
        "tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "ism", "ist", "hood",
        "ware", "ology",
    ];
    NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

/// Base form of a known verb, if `lower` is one
fn verb_base(lower: &str) -> Option<String> {
    if let Some(base) = IRREGULAR_VERBS.get(lower) {
        return Some(base.to_string());
    }
    if VERB_BASES.contains(lower) {
        return Some(lower.to_string());
    }
    let candidates = verb_stems(lower);
    candidates.into_iter().find(|c| VERB_BASES.contains(c.as_str()))
}

fn verb_stems(lower: &str) -> Vec<String> {
    let mut stems = Vec::new();
    for suffix in ["ing", "ed", "es", "s", "d"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if stem.len() < 2 {
                continue;
            }
            stems.push(stem.to_string());
            stems.push(format!("{}e", stem));
            // planned -> plan, running -> run
            let chars: Vec<char> = stem.chars().collect();
            if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
                stems.push(chars[..chars.len() - 1].iter().collect());
            }
            if let Some(y_stem) = stem.strip_suffix('i') {
                stems.push(format!("{}y", y_stem));
            }
        }
    }
    stems
}

/// Base form for a tagged token
pub fn lemmatize(text: &str, lower: &str, pos: Pos) -> String {
    match pos {
        Pos::ProperNoun => text.to_string(),
        Pos::Noun => lemmatize_noun(lower),
        Pos::Verb => verb_base(lower)
            .or_else(|| present_tense_base(lower))
            .unwrap_or_else(|| lower.to_string()),
        Pos::Auxiliary => verb_base(lower).unwrap_or_else(|| lower.to_string()),
        _ => lower.to_string(),
    }
}

fn lemmatize_noun(lower: &str) -> String {
    if let Some(base) = IRREGULAR_NOUNS.get(lower) {
        return base.to_string();
    }
    if SINGULAR_S.contains(lower) || lower.chars().count() <= 3 {
        return lower.to_string();
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    for suffix in ["sses", "xes", "ches", "shes", "zzes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return lower.to_string();
    }
    match lower.strip_suffix('s') {
        Some(stem) if !stem.ends_with('\'') => stem.to_string(),
        _ => lower.to_string(),
    }
}
