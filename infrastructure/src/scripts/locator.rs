//! Filesystem-backed script locator.
//!
//! Scripts are plain executables living side by side in one install root.
//! The default root is the directory above the bridge's own executable,
//! matching the layout where the binary ships in a subdirectory of the
//! scripts checkout. Every resolution re-checks the filesystem; nothing
//! is cached, so a script deleted between calls fails on the next call,
//! not at some stale point later.

use bridge_application::ports::script_locator::{ScriptLocateError, ScriptLocatorPort};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The script whose presence marks a directory as a valid install root.
pub const SENTINEL_SCRIPT: &str = "git-undo";

/// Locator resolving script names under a fixed install root.
#[derive(Debug, Clone)]
pub struct InstallRootLocator {
    root: PathBuf,
}

impl InstallRootLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Derive the default install root from the running executable:
    /// the parent of the directory containing the binary.
    pub fn discover_root() -> Option<PathBuf> {
        let exe = std::env::current_exe().ok()?;
        let bin_dir = exe.parent()?;
        bin_dir.parent().map(Path::to_path_buf)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check that the sentinel script exists under the root.
    ///
    /// Run once at startup so a misconfigured root fails the process
    /// before the first request instead of failing every call.
    pub fn verify_sentinel(&self) -> Result<(), ScriptLocateError> {
        self.resolve(SENTINEL_SCRIPT).map(|path| {
            debug!("Sentinel script present: {}", path.display());
        })
    }
}

impl ScriptLocatorPort for InstallRootLocator {
    fn resolve(&self, script_name: &str) -> Result<PathBuf, ScriptLocateError> {
        let path = self.root.join(script_name);
        if path.exists() {
            Ok(path)
        } else {
            Err(ScriptLocateError::NotFound { path })
        }
    }
}
