//! Core rotation tracking: policy, validation, storage, repository, reports.

pub mod error;
pub mod paths;
pub mod policy;
pub mod report;
pub mod repository;
pub mod storage;
pub mod validate;

pub use error::{StorageError, TrackerError, ValidationError};
pub use repository::{CredentialRepository, Listing, Snapshot};
pub use storage::{JsonFileStore, RecordStore};
