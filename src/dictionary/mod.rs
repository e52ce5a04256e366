//! Dictionary storage and persistence.

pub mod builtin;
pub mod document;
pub mod store;

// Re-export commonly used types
pub use builtin::*;
pub use document::*;
pub use store::*;
