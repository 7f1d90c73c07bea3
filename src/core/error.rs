//! Error types for tracker operations.
//!
//! Validation and index errors leave the store untouched and are meant to be
//! shown to the user before continuing. Storage errors mean the store could not
//! be read or written; nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("position {position} out of range (1..={count})")]
    Index { position: i64, count: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid rotation interval '{0}' (expected a positive number of days)")]
    InvalidInterval(String),

    #[error("invalid position '{0}' (expected a number)")]
    InvalidPosition(String),

    #[error("no credentials found")]
    EmptyCollection,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("read store {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse store {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("serialize store: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("write store {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("persist store {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
