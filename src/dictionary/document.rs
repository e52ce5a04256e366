//! The persisted dictionary document.
//!
//! A document is a UTF-8 JSON object of `word -> definition` pairs,
//! pretty-printed with two-space indentation and keys in sorted order so that
//! saved files diff cleanly.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use ahash::AHashMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, WordbookError};

/// What a load found at the target path.
///
/// A missing or malformed document both leave the dictionary empty; the
/// status only lets callers tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "entries", rename_all = "snake_case")]
pub enum LoadStatus {
    /// The document was read; holds the number of entries.
    Loaded(usize),
    /// Nothing exists at the path.
    Missing,
    /// The file exists but is unreadable or not a JSON object.
    Malformed,
}

impl LoadStatus {
    /// Number of entries now held by the dictionary.
    pub fn entries(&self) -> usize {
        match self {
            LoadStatus::Loaded(count) => *count,
            LoadStatus::Missing | LoadStatus::Malformed => 0,
        }
    }
}

/// Parse document text into entries.
///
/// Returns `None` when the text is not a JSON object. String values are
/// taken as-is; any other value is kept as its JSON text.
pub fn parse_document(text: &str) -> Option<AHashMap<String, String>> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Object(object) => Some(
            object
                .into_iter()
                .map(|(word, value)| {
                    let definition = match value {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (word, definition)
                })
                .collect(),
        ),
        _ => None,
    }
}

/// Render entries as document text.
pub fn render_document(entries: &AHashMap<String, String>) -> Result<String> {
    let sorted: BTreeMap<&str, &str> = entries
        .iter()
        .map(|(word, definition)| (word.as_str(), definition.as_str()))
        .collect();
    let mut text = serde_json::to_string_pretty(&sorted)?;
    text.push('\n');
    Ok(text)
}

/// Read the document at `path`.
///
/// Never fails: a missing file or a malformed document yields an empty map.
pub fn read_document(path: &Path) -> (AHashMap<String, String>, LoadStatus) {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No dictionary document at {}", path.display());
            return (AHashMap::new(), LoadStatus::Missing);
        }
        Err(e) => {
            warn!(
                "Cannot read dictionary document {}: {e}; starting empty",
                path.display()
            );
            return (AHashMap::new(), LoadStatus::Malformed);
        }
    };

    match parse_document(&text) {
        Some(entries) => {
            debug!(
                "Read {} entries from {}",
                entries.len(),
                path.display()
            );
            let count = entries.len();
            (entries, LoadStatus::Loaded(count))
        }
        None => {
            warn!(
                "Dictionary document {} is not a JSON object; starting empty",
                path.display()
            );
            (AHashMap::new(), LoadStatus::Malformed)
        }
    }
}

/// Write the document to `path`, creating missing parent directories.
///
/// The destination is overwritten unconditionally.
pub fn write_document(path: &Path, entries: &AHashMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            WordbookError::storage(format!(
                "Failed to create directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let text = render_document(entries)?;
    fs::write(path, text).map_err(|e| {
        WordbookError::storage(format!("Failed to write {}: {e}", path.display()))
    })?;

    debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}
