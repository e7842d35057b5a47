//! Port for resolving external script locations.
//!
//! Scripts live at a fixed install root and are looked up by bare name on
//! every call. Nothing is cached, so a script removed between calls is
//! detected on the next call.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from script resolution
#[derive(Error, Debug)]
pub enum ScriptLocateError {
    /// No file exists at the expected path
    #[error("Script not found: {}", path.display())]
    NotFound { path: PathBuf },
}

/// Port for locating external scripts by name
pub trait ScriptLocatorPort: Send + Sync {
    /// Resolve a script name to an absolute path of an existing file.
    fn resolve(&self, script_name: &str) -> Result<PathBuf, ScriptLocateError>;
}
