//! Command implementations for the Wordbook CLI.

use std::io::{self, Write};
use std::path::Path;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::cli::repl::Repl;
use crate::config::StoreConfig;
use crate::dictionary::document::LoadStatus;
use crate::dictionary::store::DictionaryStore;
use crate::error::{Result, WordbookError};
use crate::spelling::suggest::SuggestionConfig;

/// Exit codes for the CLI.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_NOT_FOUND: i32 = 2;
pub const EXIT_CONFLICT: i32 = 3;

/// How a command ended, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Lookup or removal of an absent word.
    NotFound,
    /// Add without overwrite on an existing word.
    Conflict,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success => EXIT_SUCCESS,
            Outcome::NotFound => EXIT_NOT_FOUND,
            Outcome::Conflict => EXIT_CONFLICT,
        }
    }
}

/// Process exit code for an argument parsing failure.
///
/// Help and version requests succeed; every usage error is an error, so it
/// never collides with the not-found code clap would use.
pub fn parse_error_exit_code(error: &clap::Error) -> i32 {
    if error.exit_code() == EXIT_SUCCESS {
        EXIT_SUCCESS
    } else {
        EXIT_ERROR
    }
}

/// Execute the CLI: open the store, then run one command or the REPL.
pub fn execute_command(args: WordbookArgs) -> Result<Outcome> {
    let config = args.store_config();
    let (mut store, status) = DictionaryStore::open(&config);
    debug!(
        "Opened {} ({:?}, {} entries)",
        config.path.display(),
        status,
        store.len()
    );

    match &args.command {
        Some(command) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_command(command, &mut store, status, &config, &args, &mut out)
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut repl = Repl::new(store, config.path);
            repl.run(stdin.lock(), stdout.lock())?;
            Ok(Outcome::Success)
        }
    }
}

/// Run a single command against an open store.
///
/// `opened` is the status the store's document had when it was opened.
pub fn run_command<W: Write>(
    command: &Command,
    store: &mut DictionaryStore,
    opened: LoadStatus,
    config: &StoreConfig,
    args: &WordbookArgs,
    out: &mut W,
) -> Result<Outcome> {
    match command {
        Command::List(list_args) => list_words(list_args, store, args, out),
        Command::Lookup(lookup_args) => lookup_word(lookup_args, store, args, out),
        Command::Define(define_args) => {
            lookup_word(&define_args.clone().into(), store, args, out)
        }
        Command::Add(add_args) => {
            ensure_writable(opened, config)?;
            add_word(add_args, store, config, args, out)
        }
        Command::Remove(remove_args) => {
            ensure_writable(opened, config)?;
            remove_word(remove_args, store, config, args, out)
        }
        Command::Save(path_args) => save_store(path_args, store, config, args, out),
        Command::Load(path_args) => load_store(path_args, store, config, args, out),
        Command::Suggest(suggest_args) => suggest_words(suggest_args, store, args, out),
    }
}

/// Refuse to autosave over a document that could not be parsed.
///
/// An explicit `save` still replaces it.
fn ensure_writable(opened: LoadStatus, config: &StoreConfig) -> Result<()> {
    if opened == LoadStatus::Malformed {
        return Err(WordbookError::storage(format!(
            "dictionary at {} is malformed; fix it or replace it with 'save' before changing words",
            config.path.display()
        )));
    }
    Ok(())
}

/// List words.
fn list_words<W: Write>(
    list_args: &ListArgs,
    store: &DictionaryStore,
    args: &WordbookArgs,
    out: &mut W,
) -> Result<Outcome> {
    let prefix = list_args.prefix.as_deref();
    let entries = store
        .entries(prefix)
        .into_iter()
        .map(|(word, definition)| ListEntry {
            word: word.to_string(),
            definition: list_args.long.then(|| definition.to_string()),
        })
        .collect();

    let result = ListResult {
        prefix: list_args.prefix.clone(),
        entries,
    };
    output_result(&result, args, out)?;
    Ok(Outcome::Success)
}

/// Build the lookup result for a word, with suggestions on a miss.
pub fn lookup_result(store: &DictionaryStore, word: &str, case_sensitive: bool) -> LookupResult {
    match store.lookup(word, case_sensitive) {
        Some(definition) => LookupResult {
            word: word.to_string(),
            definition: Some(definition.to_string()),
            suggestions: Vec::new(),
        },
        None => LookupResult {
            word: word.to_string(),
            definition: None,
            suggestions: store.suggest(word, &SuggestionConfig::default()),
        },
    }
}

/// Look up a word.
fn lookup_word<W: Write>(
    lookup_args: &LookupArgs,
    store: &DictionaryStore,
    args: &WordbookArgs,
    out: &mut W,
) -> Result<Outcome> {
    let result = lookup_result(store, &lookup_args.word, lookup_args.case_sensitive);
    output_result(&result, args, out)?;

    if result.definition.is_some() {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::NotFound)
    }
}

/// Add a word and persist the store on success.
fn add_word<W: Write>(
    add_args: &AddArgs,
    store: &mut DictionaryStore,
    config: &StoreConfig,
    args: &WordbookArgs,
    out: &mut W,
) -> Result<Outcome> {
    let applied = store.add(&add_args.word, &add_args.definition, add_args.overwrite);
    let saved_to = if applied {
        store.save(&config.path)?;
        info!("Added '{}'", add_args.word);
        Some(config.path.display().to_string())
    } else {
        None
    };

    let result = MutationResult {
        kind: MutationKind::Add,
        word: add_args.word.clone(),
        applied,
        saved_to,
    };
    output_result(&result, args, out)?;

    if applied {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::Conflict)
    }
}

/// Remove a word and persist the store on success.
fn remove_word<W: Write>(
    remove_args: &RemoveArgs,
    store: &mut DictionaryStore,
    config: &StoreConfig,
    args: &WordbookArgs,
    out: &mut W,
) -> Result<Outcome> {
    let applied = store.remove(&remove_args.word);
    let saved_to = if applied {
        store.save(&config.path)?;
        info!("Removed '{}'", remove_args.word);
        Some(config.path.display().to_string())
    } else {
        None
    };

    let result = MutationResult {
        kind: MutationKind::Remove,
        word: remove_args.word.clone(),
        applied,
        saved_to,
    };
    output_result(&result, args, out)?;

    if applied {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::NotFound)
    }
}

/// Resolve `--path`, falling back to the store path.
fn target_path<'a>(path_args: &'a PathArgs, config: &'a StoreConfig) -> &'a Path {
    path_args.path.as_deref().unwrap_or(&config.path)
}

/// Save the store.
fn save_store<W: Write>(
    path_args: &PathArgs,
    store: &DictionaryStore,
    config: &StoreConfig,
    args: &WordbookArgs,
    out: &mut W,
) -> Result<Outcome> {
    let path = target_path(path_args, config);
    store.save(path)?;

    output_result(&PersistResult::saved(path, store.len()), args, out)?;
    Ok(Outcome::Success)
}

/// Load a document into the store and report its status.
fn load_store<W: Write>(
    path_args: &PathArgs,
    store: &mut DictionaryStore,
    config: &StoreConfig,
    args: &WordbookArgs,
    out: &mut W,
) -> Result<Outcome> {
    let path = target_path(path_args, config);
    let status = store.load(path);

    output_result(&PersistResult::loaded(path, status), args, out)?;
    Ok(Outcome::Success)
}

/// Suggest similar words.
fn suggest_words<W: Write>(
    suggest_args: &SuggestArgs,
    store: &DictionaryStore,
    args: &WordbookArgs,
    out: &mut W,
) -> Result<Outcome> {
    let config = suggest_args.suggestion_config();
    config.validate()?;

    let result = SuggestResult {
        query: suggest_args.query.clone(),
        suggestions: store.suggest(&suggest_args.query, &config),
    };
    output_result(&result, args, out)?;
    Ok(Outcome::Success)
}
