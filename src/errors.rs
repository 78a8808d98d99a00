//! Error taxonomy for the object model and storage engine
//!
//! Fallible functions return `anyhow::Result`; the conditions callers need to
//! tell apart are raised as [`GitError`] and can be recovered with
//! `anyhow::Error::downcast_ref::<GitError>()`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GitError {
    /// Framing header is unreadable or the declared length does not match the payload.
    #[error("malformed object: {0}")]
    MalformedObject(String),

    #[error("unknown object type {0:?}")]
    UnknownObjectType(String),

    /// The compressed bytes of a stored object could not be inflated.
    #[error("object store corrupted at {oid}")]
    StoreCorruption {
        oid: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("directory is not empty: {}", .0.display())]
    NotEmpty(PathBuf),

    #[error("unsupported repositoryformatversion {0}")]
    ConfigMismatch(String),

    #[error("not a git repository (or any of the parent directories): {}", .0.display())]
    NotARepository(PathBuf),

    #[error("ambiguous name {name}: candidates are {}", .candidates.join(", "))]
    AmbiguousName {
        name: String,
        candidates: Vec<String>,
    },

    #[error("reference cycle detected at {0}")]
    RefCycle(String),

    #[error("invalid object id {0:?}")]
    InvalidObjectId(String),
}
