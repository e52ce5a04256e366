//! The word -> definition store.

use std::path::Path;

use ahash::AHashMap;
use log::{debug, info};

use crate::config::StoreConfig;
use crate::dictionary::builtin::builtin_entries;
use crate::dictionary::document::{LoadStatus, read_document, write_document};
use crate::error::Result;
use crate::spelling::suggest::{Suggester, Suggestion, SuggestionConfig};

/// An in-memory dictionary of word -> definition pairs.
///
/// Keys are case-sensitive: "Cache" and "cache" may coexist. Case-insensitive
/// lookup and removal scan the keys in hash order and act on the first match,
/// so when several keys differ only in case, which one is found is
/// unspecified.
///
/// The store has no internal locking. Callers sharing it between threads
/// should wrap the whole store in a single mutex.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    entries: AHashMap<String, String>,
}

impl DictionaryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        DictionaryStore {
            entries: AHashMap::new(),
        }
    }

    /// Create a store seeded with the built-in word set.
    pub fn with_builtin() -> Self {
        DictionaryStore {
            entries: builtin_entries(),
        }
    }

    /// Create a store from arbitrary entries. Later duplicates win.
    pub fn from_entries<I, W, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, D)>,
        W: Into<String>,
        D: Into<String>,
    {
        DictionaryStore {
            entries: entries
                .into_iter()
                .map(|(word, definition)| (word.into(), definition.into()))
                .collect(),
        }
    }

    /// Open the store described by `config`.
    ///
    /// When no document exists yet and seeding is enabled, the store starts
    /// with the built-in word set. A malformed document is never replaced by
    /// seeds.
    pub fn open(config: &StoreConfig) -> (Self, LoadStatus) {
        let mut store = DictionaryStore::new();
        let status = store.load(&config.path);
        if status == LoadStatus::Missing && config.seed_builtin {
            debug!("Seeding new dictionary with built-in words");
            store = DictionaryStore::with_builtin();
        }
        (store, status)
    }

    /// Look up a definition.
    ///
    /// With `case_sensitive` false both sides are lowercased before comparing.
    pub fn lookup(&self, word: &str, case_sensitive: bool) -> Option<&str> {
        if case_sensitive {
            return self.entries.get(word).map(String::as_str);
        }

        let folded = word.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| key.to_lowercase() == folded)
            .map(|(_, definition)| definition.as_str())
    }

    /// Add a word. Returns false, leaving the store untouched, if the word
    /// already exists and `overwrite` is false.
    pub fn add(&mut self, word: &str, definition: &str, overwrite: bool) -> bool {
        if !overwrite && self.entries.contains_key(word) {
            return false;
        }
        self.entries.insert(word.to_string(), definition.to_string());
        true
    }

    /// Remove a word, trying the exact key before a case-insensitive match.
    pub fn remove(&mut self, word: &str) -> bool {
        if self.entries.remove(word).is_some() {
            return true;
        }

        let folded = word.to_lowercase();
        let matched = self
            .entries
            .keys()
            .find(|key| key.to_lowercase() == folded)
            .cloned();

        match matched {
            Some(key) => self.entries.remove(&key).is_some(),
            None => false,
        }
    }

    /// All words in ascending order, optionally only those starting with
    /// `prefix` (case-sensitive).
    pub fn list(&self, prefix: Option<&str>) -> Vec<String> {
        let mut words: Vec<String> = self
            .entries
            .keys()
            .filter(|word| prefix.is_none_or(|p| word.starts_with(p)))
            .cloned()
            .collect();
        words.sort();
        words
    }

    /// All entries sorted by word, optionally filtered by prefix.
    pub fn entries(&self, prefix: Option<&str>) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .filter(|(word, _)| prefix.is_none_or(|p| word.starts_with(p)))
            .map(|(word, definition)| (word.as_str(), definition.as_str()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Iterate over the words in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Check for an exact key.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Rank the store's words against `query`.
    ///
    /// Words are fed to the suggester in sorted order, so equal scores come
    /// out alphabetically.
    pub fn suggest(&self, query: &str, config: &SuggestionConfig) -> Vec<Suggestion> {
        Suggester::new(*config).suggest(query, self.list(None))
    }

    /// Replace the whole mapping with the document at `path`.
    ///
    /// Never fails: a missing or malformed document leaves the store empty.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> LoadStatus {
        let (entries, status) = read_document(path.as_ref());
        self.entries = entries;
        status
    }

    /// Write the whole mapping to `path`, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        write_document(path, &self.entries)?;
        info!("Saved {} entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}
