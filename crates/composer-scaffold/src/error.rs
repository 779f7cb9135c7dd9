//! Error types for package scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating a package
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The package argument was not of the form `vendor/package`
    #[error("Invalid package name '{0}'. Expected the form vendor/package")]
    InvalidIdentifier(String),

    /// The manifest could not be written to its target path
    #[error("Failed to write {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An interactive prompt failed (closed terminal, interrupted input)
    #[error("Prompt failed: {0}")]
    Prompt(#[from] std::io::Error),

    /// The package defaults file was missing or malformed
    #[error("Invalid package defaults in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
