//! Script resolution against the install root

pub mod locator;

pub use locator::{InstallRootLocator, SENTINEL_SCRIPT};
