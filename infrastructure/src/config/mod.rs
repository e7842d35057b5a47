//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileLoggingConfig, FileScriptsConfig};
pub use loader::ConfigLoader;
