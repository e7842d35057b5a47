//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Command-line flags override anything loaded from here.

use serde::{Deserialize, Serialize};

/// Top-level bridge configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub scripts: FileScriptsConfig,
    pub logging: FileLoggingConfig,
}

/// Script resolution configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScriptsConfig {
    /// Install root containing the git scripts. When unset the root is
    /// derived from the bridge executable's location.
    pub dir: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Diagnostic log file. When unset, diagnostics go to stderr.
    pub file: Option<String>,
    /// JSONL call-audit file. Auditing is off when unset.
    pub audit_file: Option<String>,
}
