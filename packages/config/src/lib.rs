// ABOUTME: Configuration constants for setkeep
// ABOUTME: Single source of truth for environment variable names

pub mod constants;
