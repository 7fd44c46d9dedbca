mod common;

use std::collections::HashSet;

use common::htp_matcher;
use proptest::prelude::*;
use tagsmith::tags::{DetectOptions, SuggestionSource};

const WORDS: &[&str] = &[
    "Excited", "announce", "our", "new", "product", "launch", "in", "San", "Francisco", "the",
    "team", "shipped", "Rust", "compiler", "release", "Acme", "Corp", "today", "great", "coffee",
    "and", "music", "festival", "a", "fast", "database", "engine", "for", "cloud", "storage",
];

const TAGS: &[&str] = &[
    "product", "Product", "launch", "rust", "Rust", "music", "coffee", "database", "cloud",
    "San Francisco", "travel", "cooking", "machine learning", "storage engine",
];

fn content() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..14).prop_map(|w| w.join(" "))
}

fn candidates() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(TAGS).prop_map(str::to_string), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn result_is_bounded_sorted_and_unique(
        content in content(),
        candidates in candidates(),
        top_k in 0usize..8,
        threshold in 0.0f32..1.0,
    ) {
        let matcher = htp_matcher();
        let options = DetectOptions::default().with_top_k(top_k).with_threshold(threshold);
        let result = matcher.detect_tags(&content, &candidates, &options).unwrap();

        prop_assert!(result.len() <= top_k);

        for pair in result.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }

        let mut seen = HashSet::new();
        for s in &result {
            prop_assert!(seen.insert(s.tag.to_lowercase()), "duplicate tag {}", s.tag);
        }

        let again = matcher.detect_tags(&content, &candidates, &options).unwrap();
        prop_assert_eq!(result, again);
    }

    #[test]
    fn raising_threshold_never_adds_database_tags(
        content in content(),
        candidates in candidates(),
        low in 0.0f32..1.0,
        delta in 0.0f32..0.5,
    ) {
        let matcher = htp_matcher();
        let high = low + delta;
        let database_tags = |threshold: f32| -> HashSet<String> {
            let options = DetectOptions::default().with_top_k(usize::MAX).with_threshold(threshold);
            matcher
                .detect_tags(&content, &candidates, &options)
                .unwrap()
                .into_iter()
                .filter(|s| s.source == SuggestionSource::Database)
                .map(|s| s.tag)
                .collect()
        };

        let at_low = database_tags(low);
        let at_high = database_tags(high);
        prop_assert!(at_high.is_subset(&at_low));
    }

    #[test]
    fn empty_candidates_yield_only_extracted(content in content()) {
        let matcher = htp_matcher();
        let empty: Vec<String> = Vec::new();
        let result = matcher.detect_tags(&content, &empty, &DetectOptions::default()).unwrap();
        prop_assert!(result.iter().all(|s| s.source == SuggestionSource::Extracted));
    }
}
