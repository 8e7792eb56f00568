//! Error types for watson-core operations.
//!
//! Deliberately small: a missing or malformed state file is a defined
//! Inactive outcome, not an error. The only fallible operation in this crate
//! is establishing the file watch.

use std::path::PathBuf;

/// All errors that can occur in watson-core operations.
#[derive(Debug, thiserror::Error)]
pub enum WatsonError {
    #[error("Failed to watch {path}: {source}")]
    WatchSetup {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}

/// Convenience type alias for Results using WatsonError.
pub type Result<T> = std::result::Result<T, WatsonError>;
