//! Approximate string matching for "Did you mean?" suggestions.
//!
//! [`sequence_matcher`] scores how alike two strings are, and [`suggest`]
//! ranks a candidate set against a query with that score.

pub mod sequence_matcher;
pub mod suggest;

// Re-export commonly used types
pub use sequence_matcher::*;
pub use suggest::*;
