//! Command line argument parsing for the Wordbook CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{STORE_PATH_ENV, StoreConfig};
use crate::spelling::suggest::SuggestionConfig;

/// Wordbook - a personal word dictionary with "did you mean" lookup
#[derive(Parser, Debug, Clone)]
#[command(name = "wordbook")]
#[command(about = "A personal word dictionary with fuzzy lookup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordbookArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Path of the dictionary document
    #[arg(long = "store", value_name = "PATH", env = STORE_PATH_ENV, global = true)]
    pub store_path: Option<PathBuf>,

    /// Start empty instead of with the built-in words when no document exists
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Subcommand to execute; starts an interactive session when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl WordbookArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Storage configuration derived from the global flags.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.store_path.clone(), !self.no_seed)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List words in sorted order
    List(ListArgs),

    /// Look up the definition of a word
    Lookup(LookupArgs),

    /// Look up the definition of a word (flag form)
    Define(DefineArgs),

    /// Add a word and its definition
    Add(AddArgs),

    /// Remove a word
    Remove(RemoveArgs),

    /// Save the dictionary to a document
    Save(PathArgs),

    /// Load a dictionary document and report what it holds
    Load(PathArgs),

    /// Suggest words similar to a query
    Suggest(SuggestArgs),
}

/// Arguments for listing words
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Only list words starting with this prefix (case-sensitive)
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Show definitions alongside words
    #[arg(short, long)]
    pub long: bool,
}

/// Arguments for looking up a word
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Match the word's case exactly
    #[arg(long)]
    pub case_sensitive: bool,
}

/// Arguments for the flag form of lookup
#[derive(Parser, Debug, Clone)]
pub struct DefineArgs {
    /// Word to look up
    #[arg(short, long)]
    pub word: String,

    /// Match the word's case exactly
    #[arg(long)]
    pub case_sensitive: bool,
}

impl From<DefineArgs> for LookupArgs {
    fn from(args: DefineArgs) -> Self {
        LookupArgs {
            word: args.word,
            case_sensitive: args.case_sensitive,
        }
    }
}

/// Arguments for adding a word
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Word to add
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Definition for the word
    #[arg(value_name = "DEFINITION")]
    pub definition: String,

    /// Replace an existing definition
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for removing a word
#[derive(Parser, Debug, Clone)]
pub struct RemoveArgs {
    /// Word to remove
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for save and load
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Document path (overrides the store path)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

/// Arguments for suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Query to find similar words for
    #[arg(long)]
    pub query: String,

    /// Maximum number of suggestions
    #[arg(long = "max", default_value = "5")]
    pub max_results: usize,

    /// Minimum similarity ratio (0.0 to 1.0)
    #[arg(long, default_value = "0.4")]
    pub cutoff: f64,
}

impl SuggestArgs {
    /// Suggestion configuration from the arguments
    pub fn suggestion_config(&self) -> SuggestionConfig {
        SuggestionConfig::new(self.max_results, self.cutoff)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
