//! Credential rotation tracker.
//!
//! Records when each credential was last rotated and how often it must be
//! rotated, then reports which ones are due or overdue.
//!
//! ## Modules
//! - `cli` — Command-line handlers and the interactive menu
//! - `core` — Rotation policy, validation, storage, repository, reports
//! - `models` — Persisted record types
//! - `util` — Filesystem helpers

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;
