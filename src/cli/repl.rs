//! Interactive read-eval-print loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::warn;

use crate::cli::commands::lookup_result;
use crate::cli::output::*;
use crate::dictionary::store::DictionaryStore;
use crate::error::Result;
use crate::spelling::suggest::SuggestionConfig;

const BANNER: &str = "Wordbook (interactive). Type 'help' for commands, 'exit' to quit.";
const PROMPT: &str = "> ";
const HELP: &str = "Commands:
  list [prefix]              list words with their definitions
  lookup <word>              show a definition (extra words are ignored)
  add <word> <definition>    add a new word
  remove <word>              remove a word (extra words are ignored)
  suggest <query>            show similar words
  save                       write the dictionary to disk
  load                       reload the dictionary from disk
  help                       show this help
  exit | quit                leave";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Continue,
    Exit,
}

/// An interactive session over one store.
///
/// Changes are kept in memory until `save` is issued.
pub struct Repl {
    store: DictionaryStore,
    path: PathBuf,
}

impl Repl {
    /// Create a session that saves to and loads from `path`.
    pub fn new(store: DictionaryStore, path: PathBuf) -> Self {
        Repl { store, path }
    }

    /// The session's store.
    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// Read commands from `input` until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        writeln!(out, "{BANNER}")?;

        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let raw = line.trim();
            if raw.is_empty() {
                continue;
            }
            if self.execute(raw, &mut out)? == Control::Exit {
                break;
            }
        }

        Ok(())
    }

    fn execute<W: Write>(&mut self, raw: &str, out: &mut W) -> Result<Control> {
        let (command, rest) = split_first(raw);

        match (command.to_lowercase().as_str(), rest) {
            ("exit" | "quit", _) => return Ok(Control::Exit),
            ("help", _) => writeln!(out, "{HELP}")?,
            ("list", prefix) => {
                let entries = self
                    .store
                    .entries(prefix)
                    .into_iter()
                    .map(|(word, definition)| ListEntry {
                        word: word.to_string(),
                        definition: Some(definition.to_string()),
                    })
                    .collect();
                let result = ListResult {
                    prefix: prefix.map(str::to_string),
                    entries,
                };
                result.write_human(out)?;
            }
            ("lookup", Some(args)) => {
                let (word, _) = split_first(args);
                lookup_result(&self.store, word, false).write_human(out)?;
            }
            ("add", Some(args)) => match split_first(args) {
                (word, Some(definition)) => {
                    let result = MutationResult {
                        kind: MutationKind::Add,
                        word: word.to_string(),
                        applied: self.store.add(word, definition, false),
                        saved_to: None,
                    };
                    result.write_human(out)?;
                }
                (_, None) => write_unknown(out)?,
            },
            ("remove", Some(args)) => {
                let (word, _) = split_first(args);
                let result = MutationResult {
                    kind: MutationKind::Remove,
                    word: word.to_string(),
                    applied: self.store.remove(word),
                    saved_to: None,
                };
                result.write_human(out)?;
            }
            ("suggest", Some(query)) => {
                let result = SuggestResult {
                    query: query.to_string(),
                    suggestions: self.store.suggest(query, &SuggestionConfig::default()),
                };
                if result.suggestions.is_empty() {
                    writeln!(out, "No suggestions for '{query}'.")?;
                } else {
                    result.write_human(out)?;
                }
            }
            ("save", _) => match self.store.save(&self.path) {
                Ok(()) => PersistResult::saved(&self.path, self.store.len()).write_human(out)?,
                Err(e) => {
                    warn!("Save failed: {e}");
                    writeln!(out, "Error: {e}")?;
                }
            },
            ("load", _) => {
                let status = self.store.load(&self.path);
                PersistResult::loaded(&self.path, status).write_human(out)?;
            }
            _ => write_unknown(out)?,
        }

        Ok(Control::Continue)
    }
}

/// Split off the first whitespace-delimited token; the remainder is trimmed
/// and `None` when empty.
fn split_first(text: &str) -> (&str, Option<&str>) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((head, tail)) => {
            let tail = tail.trim();
            (head, (!tail.is_empty()).then_some(tail))
        }
        None => (text, None),
    }
}

fn write_unknown<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Unknown or malformed command; type 'help'.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session(store: DictionaryStore, path: PathBuf, script: &str) -> (Repl, String) {
        let mut repl = Repl::new(store, path);
        let mut out = Vec::new();
        repl.run(Cursor::new(script.to_string()), &mut out).unwrap();
        (repl, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_split_first() {
        assert_eq!(
            split_first("add word  a long definition "),
            ("add", Some("word  a long definition"))
        );
        assert_eq!(split_first("list"), ("list", None));
        assert_eq!(split_first("list   "), ("list", None));
    }

    #[test]
    fn test_add_lookup_remove() {
        let dir = TempDir::new().unwrap();
        let (repl, text) = session(
            DictionaryStore::new(),
            dir.path().join("d.json"),
            "add rust A systems language\nadd rust again\nlookup RUST\nremove rust\nremove rust\nexit\n",
        );

        assert!(text.contains("Added 'rust'."));
        assert!(text.contains("Word 'rust' already exists."));
        assert!(text.contains("RUST: A systems language"));
        assert!(text.contains("Removed 'rust'."));
        assert!(text.contains("Word 'rust' not found."));
        assert!(repl.store().is_empty());
    }

    #[test]
    fn test_lookup_and_remove_use_first_word() {
        let dir = TempDir::new().unwrap();
        let (repl, text) = session(
            DictionaryStore::with_builtin(),
            dir.path().join("d.json"),
            "lookup cache please\nremove binary now\n",
        );
        assert!(text.contains("cache: A hardware"));
        assert!(text.contains("Removed 'binary'."));
        assert!(!repl.store().contains("binary"));
    }

    #[test]
    fn test_lookup_miss_suggests() {
        let dir = TempDir::new().unwrap();
        let (_, text) = session(
            DictionaryStore::with_builtin(),
            dir.path().join("d.json"),
            "lookup exampl\n",
        );
        assert!(text.contains("No definition found for 'exampl'."));
        assert!(text.contains("  - example"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("d.json");
        let (repl, text) = session(
            DictionaryStore::with_builtin(),
            path.clone(),
            "add extra word\nsave\nremove extra\nload\nlist ex\nquit\n",
        );

        assert!(text.contains("Saved 7 entries to"));
        assert!(text.contains("Loaded 7 entries from"));
        assert!(text.contains("example: A representative form"));
        assert!(text.contains("extra: word"));
        assert!(repl.store().contains("extra"));
        assert!(path.exists());
    }

    #[test]
    fn test_unknown_and_blank_lines() {
        let dir = TempDir::new().unwrap();
        let (_, text) = session(
            DictionaryStore::new(),
            dir.path().join("d.json"),
            "\n   \nfrobnicate\nlookup\nHELP\n",
        );
        assert_eq!(text.matches("Unknown or malformed command").count(), 2);
        assert!(text.contains("Commands:"));
    }

    #[test]
    fn test_eof_ends_session() {
        let dir = TempDir::new().unwrap();
        let (_, text) = session(DictionaryStore::new(), dir.path().join("d.json"), "");
        assert!(text.starts_with(BANNER));
        assert!(text.ends_with("> \n"));
    }

    #[test]
    fn test_save_failure_keeps_running() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let (_, text) = session(
            DictionaryStore::with_builtin(),
            blocker.join("d.json"),
            "save\nlookup cache\n",
        );
        assert!(text.contains("Error: Storage error"));
        assert!(text.contains("cache: A hardware"));
    }
}
