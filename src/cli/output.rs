//! Output formatting for CLI commands.

use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordbookArgs};
use crate::dictionary::document::LoadStatus;
use crate::error::Result;
use crate::spelling::suggest::Suggestion;

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Write the result as plain text lines.
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Result of a lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    pub word: String,
    pub definition: Option<String>,
    /// "Did you mean" candidates, only filled on a miss.
    pub suggestions: Vec<Suggestion>,
}

impl HumanOutput for LookupResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        match &self.definition {
            Some(definition) => writeln!(out, "{}: {definition}", self.word),
            None => {
                writeln!(out, "No definition found for '{}'.", self.word)?;
                if !self.suggestions.is_empty() {
                    writeln!(out, "Did you mean:")?;
                    for suggestion in &self.suggestions {
                        writeln!(out, "  - {}", suggestion.word)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// One listed word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEntry {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

/// Result of listing words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult {
    pub prefix: Option<String>,
    pub entries: Vec<ListEntry>,
}

impl HumanOutput for ListResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for entry in &self.entries {
            match &entry.definition {
                Some(definition) => writeln!(out, "{}: {definition}", entry.word)?,
                None => writeln!(out, "{}", entry.word)?,
            }
        }
        Ok(())
    }
}

/// Kind of dictionary change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Add,
    Remove,
}

/// Result of adding or removing a word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResult {
    pub kind: MutationKind,
    pub word: String,
    /// Whether the dictionary changed.
    pub applied: bool,
    /// Where the change was persisted, if anywhere.
    pub saved_to: Option<String>,
}

impl HumanOutput for MutationResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        match (self.kind, self.applied) {
            (MutationKind::Add, true) => writeln!(out, "Added '{}'.", self.word),
            (MutationKind::Add, false) => writeln!(
                out,
                "Word '{}' already exists. Use --overwrite to replace.",
                self.word
            ),
            (MutationKind::Remove, true) => writeln!(out, "Removed '{}'.", self.word),
            (MutationKind::Remove, false) => writeln!(out, "Word '{}' not found.", self.word),
        }
    }
}

/// Result of a suggestion query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResult {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
}

impl HumanOutput for SuggestResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for suggestion in &self.suggestions {
            writeln!(out, "{}", suggestion.word)?;
        }
        Ok(())
    }
}

/// Result of saving or loading a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum PersistResult {
    Save { path: String, entries: usize },
    Load { path: String, load: LoadStatus },
}

impl PersistResult {
    pub fn saved(path: &Path, entries: usize) -> Self {
        PersistResult::Save {
            path: path.display().to_string(),
            entries,
        }
    }

    pub fn loaded(path: &Path, load: LoadStatus) -> Self {
        PersistResult::Load {
            path: path.display().to_string(),
            load,
        }
    }
}

impl HumanOutput for PersistResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            PersistResult::Save { path, entries } => {
                writeln!(out, "Saved {entries} entries to {path}")
            }
            PersistResult::Load { path, load } => match load {
                LoadStatus::Loaded(count) => writeln!(out, "Loaded {count} entries from {path}"),
                LoadStatus::Missing => writeln!(out, "No dictionary found at {path}"),
                LoadStatus::Malformed => {
                    writeln!(out, "Dictionary at {path} is malformed; nothing loaded")
                }
            },
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T, W>(result: &T, args: &WordbookArgs, out: &mut W) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => output_json(result, args.pretty, out)?,
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(result: &T, pretty: bool, out: &mut W) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}
