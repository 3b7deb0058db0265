use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by repository and object database operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No object is stored under the requested id.
    #[error("object not found: {0}")]
    NotFound(String),

    /// The stored bytes don't have a `<kind> <len>\0` header.
    #[error("malformed object {id}: {reason}")]
    MalformedObject { id: String, reason: String },

    /// The id can't be mapped to a location in the object database.
    #[error("invalid object id: {0:?}")]
    InvalidId(String),

    /// Nothing left to snapshot in this directory after filtering and pruning.
    #[error("no objects found in {}", .0.display())]
    EmptyTree(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("repository already exists: {}", .0.display())]
    AlreadyInitialized(PathBuf),

    /// The file name can't be stored as raw bytes on this platform.
    #[error("file name is not valid unicode: {}", .0.display())]
    NonUnicodeName(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
