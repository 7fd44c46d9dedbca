//! Named-entity recognition over tagged tokens
//!
//! Entities are found in three passes:
//! - quoted capitalized titles (works of art)
//! - numeric expressions and calendar words (money, percent, dates, times, cardinals)
//! - runs of proper nouns, classified by surrounding cues

use super::lexicon::{
    EVENT_WORDS, FIRST_NAMES, HONORIFICS, KNOWN_LOCATIONS, KNOWN_ORGANIZATIONS, LAW_WORDS,
    LOCATION_PREPOSITIONS, LOCATION_SUFFIXES, MONTHS, NAME_CONNECTORS, ORG_SUFFIXES,
    PRODUCT_SUFFIXES, WEEKDAYS,
};
use super::tagger::normalize;
use super::{Entity, EntityKind, Pos, Span, Token};

const MAX_TITLE_TOKENS: usize = 8;

/// Recognize entities in tagged tokens. Spans never overlap.
pub fn recognize(text: &str, tokens: &[Token]) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if let Some(end) = quoted_title(tokens, i) {
            entities.push(entity(text, tokens, i + 1, end, EntityKind::WorkOfArt));
            i = end + 1;
            continue;
        }
        if let Some((start, end, kind)) = numeric_entity(tokens, i) {
            entities.push(entity(text, tokens, start, end, kind));
            i = end;
            continue;
        }
        if let Some((end, kind)) = calendar_entity(tokens, i) {
            entities.push(entity(text, tokens, i, end, kind));
            i = end;
            continue;
        }
        if tokens[i].pos == Pos::ProperNoun {
            let (start, end) = name_run(tokens, i);
            let kind = classify_name(tokens, start, end);
            entities.push(entity(text, tokens, start, end, kind));
            i = end;
            continue;
        }
        i += 1;
    }

    entities
}

fn entity(text: &str, tokens: &[Token], start: usize, end: usize, kind: EntityKind) -> Entity {
    Entity {
        span: Span::from_tokens(text, tokens, start, end),
        kind,
    }
}

fn is_open_quote(text: &str) -> bool {
    matches!(text, "\"" | "“" | "«")
}

fn is_close_quote(text: &str) -> bool {
    matches!(text, "\"" | "”" | "»")
}

/// `"The Great Gatsby"` -> index of the closing quote
fn quoted_title(tokens: &[Token], i: usize) -> Option<usize> {
    if !is_open_quote(&tokens[i].text) {
        return None;
    }
    let first = tokens.get(i + 1)?;
    if !first.is_capitalized() {
        return None;
    }
    (i + 2..tokens.len().min(i + 2 + MAX_TITLE_TOKENS))
        .find(|&j| is_close_quote(&tokens[j].text))
}

fn numeric_entity(tokens: &[Token], i: usize) -> Option<(usize, usize, EntityKind)> {
    let token = &tokens[i];
    let currency = matches!(token.text.as_str(), "$" | "€" | "£" | "¥");

    if currency {
        let next = tokens.get(i + 1)?;
        if next.pos != Pos::Numeral {
            return None;
        }
        let end = extend_magnitude(tokens, i + 2);
        return Some((i, end, EntityKind::Money));
    }

    if token.pos != Pos::Numeral {
        return None;
    }

    let end = extend_magnitude(tokens, i + 1);
    let next_lower = tokens.get(end).map(|t| normalize(&t.text));
    match next_lower.as_deref() {
        Some("%") | Some("percent") => return Some((i, end + 1, EntityKind::Percent)),
        Some("dollars") | Some("usd") | Some("euros") | Some("eur") => {
            return Some((i, end + 1, EntityKind::Money))
        }
        Some("am") | Some("pm") | Some("a.m") | Some("p.m") => {
            return Some((i, end + 1, EntityKind::Time))
        }
        _ => {}
    }

    let is_year = end == i + 1
        && token.text.len() == 4
        && token
            .text
            .parse::<u32>()
            .is_ok_and(|y| (1900..=2099).contains(&y));
    let kind = if is_year {
        EntityKind::Date
    } else {
        EntityKind::Cardinal
    };
    Some((i, end, kind))
}

/// Skip over "million", "billion" and similar magnitude words
fn extend_magnitude(tokens: &[Token], mut end: usize) -> usize {
    while end < tokens.len()
        && tokens[end].pos == Pos::Numeral
        && tokens[end].text.chars().all(|c| c.is_alphabetic())
    {
        end += 1;
    }
    end
}

/// "March 3", "Friday"
fn calendar_entity(tokens: &[Token], i: usize) -> Option<(usize, EntityKind)> {
    let token = &tokens[i];
    let lower = normalize(&token.text);
    let is_month = token.is_capitalized() && MONTHS.contains(lower.as_str()) && lower != "may";
    let is_day = WEEKDAYS.contains(lower.as_str());
    if !is_month && !is_day {
        return None;
    }
    let mut end = i + 1;
    if is_month && tokens.get(end).is_some_and(|t| t.pos == Pos::Numeral) {
        end += 1;
    }
    Some((end, EntityKind::Date))
}

/// Maximal proper-noun run starting at `start`, allowing inner connectors
fn name_run(tokens: &[Token], start: usize) -> (usize, usize) {
    let mut start = start;
    // "Dr Smith" -> "Smith"
    while start + 1 < tokens.len()
        && HONORIFICS.contains(normalize(&tokens[start].text).as_str())
        && continues_name(tokens, start + 1)
    {
        start += 1;
        if tokens[start].text == "." {
            start += 1;
        }
    }

    let mut end = start + 1;
    loop {
        match tokens.get(end) {
            Some(t) if t.pos == Pos::ProperNoun && !t.sentence_start => end += 1,
            Some(t)
                if NAME_CONNECTORS.contains(normalize(&t.text).as_str())
                    && tokens
                        .get(end + 1)
                        .is_some_and(|n| n.pos == Pos::ProperNoun && !n.sentence_start) =>
            {
                end += 2
            }
            _ => break,
        }
    }

    // "iPhone 15", "Windows 11"
    if tokens
        .get(end)
        .is_some_and(|t| t.pos == Pos::Numeral && t.text.chars().all(|c| c.is_ascii_digit()))
        && tokens[end].text.len() < 4
    {
        end += 1;
    }

    (start, end)
}

fn continues_name(tokens: &[Token], i: usize) -> bool {
    match tokens.get(i) {
        Some(t) if t.text == "." => tokens.get(i + 1).is_some_and(|n| n.is_capitalized()),
        Some(t) => t.pos == Pos::ProperNoun,
        None => false,
    }
}

fn classify_name(tokens: &[Token], start: usize, end: usize) -> EntityKind {
    let words: Vec<String> = tokens[start..end]
        .iter()
        .map(|t| normalize(&t.text))
        .collect();
    let last = words.last().map(String::as_str).unwrap_or_default();
    let prev = previous_word(tokens, start);
    let next = tokens.get(end).map(|t| normalize(&t.text));

    if prev
        .as_deref()
        .is_some_and(|p| HONORIFICS.contains(p))
    {
        return EntityKind::Person;
    }
    let name = words.join(" ");
    if KNOWN_LOCATIONS.contains(name.as_str()) {
        return EntityKind::Location;
    }
    if KNOWN_ORGANIZATIONS.contains(name.as_str()) {
        return EntityKind::Organization;
    }
    if words.len() >= 2 && words.iter().any(|w| LAW_WORDS.contains(w.as_str())) {
        return EntityKind::Law;
    }
    if words.len() >= 2 && EVENT_WORDS.contains(last) {
        return EntityKind::Event;
    }
    if words.len() >= 2 && ORG_SUFFIXES.contains(last) {
        return EntityKind::Organization;
    }
    if words.len() >= 2 && LOCATION_SUFFIXES.contains(last) {
        return EntityKind::Location;
    }
    if words.len() >= 2
        && (PRODUCT_SUFFIXES.contains(last) || last.chars().all(|c| c.is_ascii_digit()))
    {
        return EntityKind::Product;
    }
    if words.len() >= 2 && FIRST_NAMES.contains(words[0].as_str()) {
        return EntityKind::Person;
    }
    if words.len() == 1 && is_acronym_token(&tokens[start]) {
        return EntityKind::Organization;
    }
    if prev
        .as_deref()
        .is_some_and(|p| LOCATION_PREPOSITIONS.contains(p))
    {
        return EntityKind::Location;
    }
    if matches!(next.as_deref(), Some("said") | Some("says") | Some("told"))
        || prev.as_deref() == Some("by")
    {
        return EntityKind::Person;
    }
    // "met Ada Lovelace": an uncued two- or three-word name mid-sentence
    if (2..=3).contains(&words.len())
        && !tokens[start].sentence_start
        && tokens[start..end]
            .iter()
            .all(|t| t.is_capitalized() && t.text.chars().all(char::is_alphabetic))
    {
        return EntityKind::Person;
    }
    EntityKind::Misc
}

fn previous_word(tokens: &[Token], start: usize) -> Option<String> {
    tokens[..start]
        .iter()
        .rev()
        .find(|t| t.pos != Pos::Punctuation)
        .map(|t| normalize(&t.text))
}

fn is_acronym_token(token: &Token) -> bool {
    let letters = token.text.chars().filter(|c| c.is_alphabetic()).count();
    letters >= 2 && token.text.chars().all(|c| c.is_uppercase() || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tagger::tag;
    use crate::nlp::tokenizer::tokenize;

    fn entities(text: &str) -> Vec<(String, EntityKind)> {
        let mut tokens = tokenize(text);
        tag(&mut tokens);
        recognize(text, &tokens)
            .into_iter()
            .map(|e| (e.span.text, e.kind))
            .collect()
    }

    #[test]
    fn test_location_after_preposition() {
        let found = entities("Excited to announce our new product launch in San Francisco");
        assert_eq!(
            found,
            vec![("San Francisco".to_string(), EntityKind::Location)]
        );
    }

    #[test]
    fn test_organization_suffix_and_acronym() {
        let found = entities("She joined Acme Corp after leaving NASA");
        assert!(found.contains(&("Acme Corp".to_string(), EntityKind::Organization)));
        assert!(found.contains(&("NASA".to_string(), EntityKind::Organization)));
    }

    #[test]
    fn test_person_after_honorific() {
        let found = entities("We met with Dr. Jane Goodall yesterday");
        assert!(found.contains(&("Jane Goodall".to_string(), EntityKind::Person)));
    }

    #[test]
    fn test_event_and_law() {
        let found = entities("Our talk at the Rust Summit covered the Clean Air Act");
        assert!(found.contains(&("Rust Summit".to_string(), EntityKind::Event)));
        assert!(found.contains(&("Clean Air Act".to_string(), EntityKind::Law)));
    }

    #[test]
    fn test_numeric_entities() {
        let found = entities("Revenue grew 15% to $3 million in 2024");
        assert!(found.contains(&("15%".to_string(), EntityKind::Percent)));
        assert!(found.contains(&("$3 million".to_string(), EntityKind::Money)));
        assert!(found.contains(&("2024".to_string(), EntityKind::Date)));
    }

    #[test]
    fn test_quoted_title() {
        let found = entities("I finally read \"The Left Hand of Darkness\" last week");
        assert!(found.contains(&(
            "The Left Hand of Darkness".to_string(),
            EntityKind::WorkOfArt
        )));
    }

    #[test]
    fn test_known_names() {
        assert_eq!(
            entities("Barack Obama"),
            vec![("Barack Obama".to_string(), EntityKind::Person)]
        );
        assert_eq!(
            entities("Paris"),
            vec![("Paris".to_string(), EntityKind::Location)]
        );
        assert_eq!(
            entities("New York"),
            vec![("New York".to_string(), EntityKind::Location)]
        );
        assert_eq!(
            entities("Google announced a new phone"),
            vec![("Google".to_string(), EntityKind::Organization)]
        );
    }

    #[test]
    fn test_uncued_name_mid_sentence_is_person() {
        let found = entities("Yesterday we met Ada Lovelace for coffee");
        assert!(found.contains(&("Ada Lovelace".to_string(), EntityKind::Person)));

        let found = entities("She is visiting John Smith in Boston");
        assert!(found.contains(&("John Smith".to_string(), EntityKind::Person)));
        assert!(found.contains(&("Boston".to_string(), EntityKind::Location)));
    }

    #[test]
    fn test_uncued_single_name_stays_misc() {
        let found = entities("We tried Zorblax yesterday");
        assert!(found.contains(&("Zorblax".to_string(), EntityKind::Misc)));
    }

    #[test]
    fn test_product_with_version() {
        let found = entities("Setting up the new Pixel 8 for testing");
        assert!(found.contains(&("Pixel 8".to_string(), EntityKind::Product)));
    }
}
