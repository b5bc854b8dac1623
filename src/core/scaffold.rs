//! Base directory setup for `adr init`.
//!
//! - The base directory is created non-recursively; a missing parent is an
//!   error rather than something to paper over.
//! - An existing base directory is left alone and reported back so the caller
//!   can warn.
//! - `bootstrap` always rewrites `template.md` and `config.json`. Running it
//!   again resets the counter to zero.

use crate::core::config::{self, Configuration};
use crate::core::error::AdrError;
use crate::core::store::{AdrStore, DEFAULT_BASE_DIR_NAME};
use crate::core::template;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of `ensure_base_directory`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirectory {
    pub store: AdrStore,
    /// `false` when the directory was already there and creation was skipped
    pub created: bool,
}

pub fn resolve_base_directory(requested: Option<&Path>, working_dir: &Path) -> PathBuf {
    match requested {
        Some(p) if !p.as_os_str().is_empty() => {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                working_dir.join(p)
            }
        }
        _ => working_dir.join(DEFAULT_BASE_DIR_NAME),
    }
}

pub fn ensure_base_directory(
    requested: Option<&Path>,
    working_dir: &Path,
) -> Result<BaseDirectory, AdrError> {
    let root = resolve_base_directory(requested, working_dir);
    if root.is_dir() {
        return Ok(BaseDirectory {
            store: AdrStore::new(root),
            created: false,
        });
    }
    fs::create_dir(&root).map_err(|e| AdrError::write(&root, e))?;
    Ok(BaseDirectory {
        store: AdrStore::new(root),
        created: true,
    })
}

pub fn bootstrap(
    store: &AdrStore,
    readme_name: Option<String>,
) -> Result<Configuration, AdrError> {
    template::write_default_template(store)?;
    // Round-trip the written template through the loader.
    template::load_template(&store.template_path())?;
    config::initialize(store, readme_name)
}
