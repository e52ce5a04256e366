//! Storage location configuration.

use std::env;
use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

/// File name of the dictionary document when no path is configured.
pub const DEFAULT_DOCUMENT_NAME: &str = "dictionary.json";

/// Environment variable overriding the document path.
pub const STORE_PATH_ENV: &str = "WORDBOOK_PATH";

/// Where the dictionary lives and how a fresh one is initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the persisted document.
    pub path: PathBuf,
    /// Seed from the built-in word set when no document exists yet.
    pub seed_builtin: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            path: default_store_path(),
            seed_builtin: true,
        }
    }
}

impl StoreConfig {
    /// Use `path` if given, otherwise the default location.
    pub fn new(path: Option<PathBuf>, seed_builtin: bool) -> Self {
        StoreConfig {
            path: path.unwrap_or_else(default_store_path),
            seed_builtin,
        }
    }
}

/// `dictionary.json` next to the running executable, or in the current
/// directory when the executable location is unknown.
pub fn default_store_path() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.join(DEFAULT_DOCUMENT_NAME),
            None => PathBuf::from(DEFAULT_DOCUMENT_NAME),
        },
        Err(e) => {
            debug!("Cannot locate executable ({e}); using current directory");
            PathBuf::from(DEFAULT_DOCUMENT_NAME)
        }
    }
}
