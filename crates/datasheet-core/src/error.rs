//! Error types for the datasheet linter.
//!
//! Problems found *in* a datasheet are [`crate::Issue`]s, never errors.
//! [`LintError`] covers failures that stop a file from being linted at all.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level result type for linter operations.
pub type Result<T> = std::result::Result<T, LintError>;

/// Top-level error type for the linter.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to walk datasheet directory: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("serialization error: {0}")]
    Serialization(String),
}
