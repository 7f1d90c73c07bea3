//! Centralized constants for the store location, formats, and permissions.

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "credentials.json";

/// Environment variable overriding the store location.
pub const STORE_ENV_VAR: &str = "ROTATION_TRACKER_STORE";

/// Calendar date format for `last_rotated` (input and on disk).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Permission mode for the store file.
pub const STORE_FILE_MODE: u32 = 0o600;

/// Permission mode for a store directory created on first save.
pub const STORE_DIR_MODE: u32 = 0o700;
