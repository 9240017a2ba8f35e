use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all lockscan operations.
#[derive(Debug, Error, Diagnostic)]
pub enum LockscanError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A lock file could not be located for the given path.
    #[error("Lock file error: {message}")]
    #[diagnostic(help("Pass the path to a composer.lock file or a directory containing one"))]
    Lockfile { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type LockscanResult<T> = miette::Result<T>;
