//! # Wordbook
//!
//! A small personal word dictionary for the command line.
//!
//! ## Features
//!
//! - Word -> definition store with exact and case-insensitive lookup
//! - Sorted, prefix-filtered listing
//! - "Did you mean?" suggestions ranked by sequence similarity
//! - Pretty-printed JSON persistence
//! - One-shot commands and an interactive session

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::dictionary::{DictionaryStore, LoadStatus};
    pub use crate::error::{Result, WordbookError};
    pub use crate::spelling::{Suggester, Suggestion, SuggestionConfig, suggest};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
