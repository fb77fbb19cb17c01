// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across setkeep

// Storage Location
pub const SETKEEP_DATA_DIR: &str = "SETKEEP_DATA_DIR";
pub const SETKEEP_DB_NAME: &str = "SETKEEP_DB_NAME";

// SQLite Tuning
pub const SETKEEP_BUSY_TIMEOUT_SECS: &str = "SETKEEP_BUSY_TIMEOUT_SECS";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";
