//! Built-in default word set.

use ahash::AHashMap;
use lazy_static::lazy_static;

lazy_static! {
    /// Default entries used to seed a fresh dictionary.
    pub static ref BUILTIN_ENTRIES: AHashMap<String, String> = {
        let entries = [
            (
                "algorithm",
                "A step-by-step procedure for calculations or problem-solving.",
            ),
            (
                "binary",
                "A system using two states often represented as 0 and 1.",
            ),
            (
                "cache",
                "A hardware or software component that stores data so future requests for that data can be served faster.",
            ),
            (
                "dictionary",
                "A data structure that maps keys to values; also a reference book of words and meanings.",
            ),
            (
                "example",
                "A representative form or pattern used to illustrate a rule.",
            ),
            (
                "function",
                "A named section of a program that performs a specific task.",
            ),
        ];

        entries
            .into_iter()
            .map(|(word, definition)| (word.to_string(), definition.to_string()))
            .collect()
    };
}

/// Return a fresh copy of the built-in entries.
pub fn builtin_entries() -> AHashMap<String, String> {
    BUILTIN_ENTRIES.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries() {
        let entries = builtin_entries();
        assert_eq!(entries.len(), 6);
        assert!(entries.contains_key("cache"));
        assert!(entries.contains_key("example"));
        assert!(entries.values().all(|definition| !definition.is_empty()));
    }

    #[test]
    fn test_copies_are_independent() {
        let mut first = builtin_entries();
        first.remove("cache");
        assert!(builtin_entries().contains_key("cache"));
        assert!(BUILTIN_ENTRIES.contains_key("cache"));
    }
}
