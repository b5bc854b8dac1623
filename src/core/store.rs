//! Store abstraction for an ADR base directory.
//!
//! An `AdrStore` is the resolved base directory together with the fixed
//! file names that live inside it. Every component receives the store
//! explicitly instead of consulting the process working directory.

use std::path::PathBuf;

/// File holding the serialized `Configuration`.
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Markdown skeleton rendered for each new record.
pub const TEMPLATE_FILE_NAME: &str = "template.md";
/// Directory created under the working directory when none is given.
pub const DEFAULT_BASE_DIR_NAME: &str = "architecture-decision-records";

/// Store handle representing one ADR base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdrStore {
    /// Absolute (or working-directory joined) path to the base directory
    pub root: PathBuf,
}

impl AdrStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        AdrStore { root: root.into() }
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub fn template_path(&self) -> PathBuf {
        self.root.join(TEMPLATE_FILE_NAME)
    }
}
