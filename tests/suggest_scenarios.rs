use wordbook::dictionary::DictionaryStore;
use wordbook::spelling::{Suggester, SuggestionConfig, similarity, suggest};

#[test]
fn test_did_you_mean_example() {
    let suggestions = Suggester::default().suggest("exampl", ["example", "function", "cache"]);

    assert_eq!(suggestions[0].word, "example");
    assert!(suggestions[0].score > 0.4);
}

#[test]
fn test_nothing_close_to_zzzzz() {
    let store = DictionaryStore::with_builtin();
    let keys = store.list(None);
    assert!(suggest("zzzzz", &keys, 5, 0.4).is_empty());
}

#[test]
fn test_empty_candidates_for_any_query() {
    let none: [&str; 0] = [];
    for query in ["", "a", "exampl", "zzzzz"] {
        assert!(suggest(query, none, 5, 0.4).is_empty());
    }
}

#[test]
fn test_scores_are_descending_and_above_cutoff() {
    let store = DictionaryStore::from_entries(
        [
            "cache", "cached", "caches", "cachet", "catch", "batch", "patch", "coach", "beach",
            "teach",
        ]
        .map(|w| (w, "-")),
    );

    let config = SuggestionConfig::new(5, 0.5);
    let suggestions = store.suggest("cahce", &config);

    assert!(!suggestions.is_empty());
    assert!(suggestions.len() <= 5);
    for pair in suggestions.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for suggestion in &suggestions {
        assert!(suggestion.score >= 0.5);
        assert!((suggestion.score - similarity(&suggestion.word, "cahce")).abs() < 1e-12);
    }
}

#[test]
fn test_store_suggestions_break_ties_alphabetically() {
    let store = DictionaryStore::from_entries([("abcf", "-"), ("abce", "-"), ("abcd", "-")]);
    let words: Vec<String> = store
        .suggest("abc", &SuggestionConfig::default())
        .into_iter()
        .map(|s| s.word)
        .collect();
    assert_eq!(words, vec!["abcd", "abce", "abcf"]);
}

#[test]
fn test_suggester_does_not_fold_case() {
    let store = DictionaryStore::with_builtin();
    assert!(store.suggest("ALGORITHM", &SuggestionConfig::default()).is_empty());
    assert_eq!(
        store.suggest("algorithm", &SuggestionConfig::default())[0].word,
        "algorithm"
    );
}
