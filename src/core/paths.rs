//! Store location resolution.

use crate::constants;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePath {
    pub file: PathBuf,
}

impl StorePath {
    /// Resolve the store from the CLI arg (or its env var), else the default file
    /// in the working directory.
    pub fn resolve(store_arg: Option<PathBuf>) -> Self {
        let file = store_arg
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_STORE_FILE));
        Self { file }
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "store@{}", self.file.display())
    }
}
