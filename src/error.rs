//! Error types for the recent projects backend.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// SQLite statement or connection failure
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The shared connection mutex was poisoned by a panicking holder
    #[error("DB lock failed: {0}")]
    Lock(String),

    #[error("Invalid project path: {0:?}")]
    InvalidPath(String),

    /// Failure reported by a `RecentProjectsApi` implementation
    #[error("Backend error: {0}")]
    Backend(String),

    /// A blocking database task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(String),
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        Error::Lock(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
