//! Command Line Interface for Wordbook.

pub mod args;
pub mod commands;
pub mod output;
pub mod repl;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
pub use repl::*;
