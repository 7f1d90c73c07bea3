//! Data structures persisted in the store.

pub mod credential;
