use std::fs;

use tempfile::TempDir;
use wordbook::dictionary::{DictionaryStore, LoadStatus};
use wordbook::error::Result;

#[test]
fn test_absent_words_are_not_found() {
    let mut store = DictionaryStore::with_builtin();

    for word in ["", "zzz", "caches", "algorithms", "über"] {
        assert_eq!(store.lookup(word, false), None, "{word}");
        assert_eq!(store.lookup(word, true), None, "{word}");
        assert!(!store.remove(word), "{word}");
    }
    assert_eq!(store.len(), 6);
}

#[test]
fn test_crud_laws() {
    let mut store = DictionaryStore::new();
    let pairs = [
        ("alpha", "first letter"),
        ("Ωmega", "last letter"),
        ("two words", "a key with a space"),
        ("", "the empty word"),
    ];

    for (word, definition) in pairs {
        assert!(store.add(word, definition, false));
        assert_eq!(store.lookup(word, true), Some(definition));

        assert!(!store.add(word, "replacement", false));
        assert_eq!(store.lookup(word, true), Some(definition));

        assert!(store.add(word, "replacement", true));
        assert_eq!(store.lookup(word, true), Some("replacement"));

        assert!(store.remove(word));
        assert_eq!(store.lookup(word, true), None);
    }
    assert!(store.is_empty());
}

#[test]
fn test_case_insensitive_lookup_scenario() {
    let store = DictionaryStore::from_entries([("cache", "Fast storage.")]);

    assert_eq!(store.lookup("Cache", false), Some("Fast storage."));
    assert_eq!(store.lookup("CACHE", false), Some("Fast storage."));
    assert_eq!(store.lookup("Cache", true), None);
}

#[test]
fn test_duplicate_case_keys_are_ambiguous() {
    // Known edge case: both keys coexist and an insensitive match may hit
    // either of them.
    let mut store = DictionaryStore::from_entries([("Cache", "upper"), ("cache", "lower")]);

    let found = store.lookup("CACHE", false);
    assert!(matches!(found, Some("upper") | Some("lower")));

    assert!(store.remove("CACHE"));
    assert_eq!(store.len(), 1);
    assert!(store.remove("CACHE"));
    assert!(store.is_empty());
}

#[test]
fn test_list_laws() {
    let store = DictionaryStore::from_entries([
        ("banana", "."),
        ("apple", "."),
        ("avocado", "."),
        ("Apricot", "."),
        ("cherry", "."),
    ]);

    let all = store.list(None);
    let mut sorted = all.clone();
    sorted.sort();
    assert_eq!(all, sorted);
    assert_eq!(all.len(), 5);

    assert_eq!(store.list(Some("a")), vec!["apple", "avocado"]);
    assert_eq!(store.list(Some("")), all);
}

#[test]
fn test_save_load_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("a").join("b").join("dictionary.json");

    let mut store = DictionaryStore::with_builtin();
    store.add("naïve", "Lacking experience; written with a diaeresis.", false);
    store.add("quote", "Contains \"quotes\" and a \\ backslash.", false);
    store.save(&path)?;

    let mut fresh = DictionaryStore::new();
    assert_eq!(fresh.load(&path), LoadStatus::Loaded(store.len()));
    assert_eq!(fresh.entries(None), store.entries(None));
    Ok(())
}

#[test]
fn test_saved_document_is_stable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");

    let store = DictionaryStore::with_builtin();
    store.save(&first)?;
    let mut reloaded = DictionaryStore::new();
    reloaded.load(&first);
    reloaded.save(&second)?;

    assert_eq!(fs::read_to_string(&first)?, fs::read_to_string(&second)?);
    assert!(fs::read_to_string(&first)?.starts_with("{\n  \"algorithm\": "));
    Ok(())
}

#[test]
fn test_load_nonexistent_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = DictionaryStore::with_builtin();

    let status = store.load(temp_dir.path().join("nope").join("dictionary.json"));
    assert_eq!(status, LoadStatus::Missing);
    assert!(store.is_empty());
}

#[test]
fn test_load_malformed_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = DictionaryStore::with_builtin();

    for (name, content) in [
        ("broken.json", "{\"unterminated\": "),
        ("array.json", "[\"a\", \"b\"]"),
        ("number.json", "42"),
    ] {
        let path = temp_dir.path().join(name);
        fs::write(&path, content).unwrap();
        assert_eq!(store.load(&path), LoadStatus::Malformed, "{name}");
        assert!(store.is_empty(), "{name}");
    }

    // A directory in place of the document cannot be read either.
    assert_eq!(store.load(temp_dir.path()), LoadStatus::Malformed);
}

#[test]
fn test_save_to_unwritable_location_fails() {
    let temp_dir = TempDir::new().unwrap();
    let store = DictionaryStore::with_builtin();

    // The target path is an existing directory.
    assert!(store.save(temp_dir.path()).is_err());
}
