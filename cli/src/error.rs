//! Error type for the front-end and workflow code.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running the tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad user input on the command line.
    #[error("argument error: {0}")]
    Args(#[from] argline_core::ParseError),

    /// Mistake in one of our own schema tables; a bug, not user input.
    #[error("schema error: {0}")]
    Schema(#[from] argline_core::SchemaError),

    /// Filesystem or console I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A size limit flag did not hold an integer megabyte count.
    #[error("invalid size limit `{0}`: expected whole megabytes")]
    InvalidLimit(String),

    /// The resolved base directory has no project subdirectories.
    #[error("no project directories found under `{}`", .0.display())]
    NoProjects(PathBuf),
}
