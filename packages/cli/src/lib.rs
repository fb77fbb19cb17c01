// ABOUTME: Command line driver for the setkeep settings store
// ABOUTME: Environment configuration, logging setup and the demo scenario

pub mod config;
pub mod demo;
pub mod logging;

pub use config::{Config, ConfigError};
