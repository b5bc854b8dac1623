//! Persistent per-directory configuration.
//!
//! `config.json` is the single source of truth for the next record number.
//! No locking is performed: two concurrent `adr new` runs against the same
//! directory can read the same `current_id` and produce colliding numbers.

use crate::core::error::AdrError;
use crate::core::store::AdrStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub base_directory: PathBuf,
    pub current_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme_name: Option<String>,
}

impl Configuration {
    /// Claims the current record number and moves the counter forward.
    /// The counter is left untouched when it cannot move.
    pub fn advance(&mut self) -> Result<u64, AdrError> {
        let claimed = self.current_id;
        self.current_id = claimed.checked_add(1).ok_or_else(|| {
            AdrError::ValidationError(format!(
                "record counter exhausted at {}; no further records can be numbered",
                claimed
            ))
        })?;
        Ok(claimed)
    }
}

/// Writes a fresh configuration with the counter at zero, replacing any
/// existing file.
pub fn initialize(
    store: &AdrStore,
    readme_name: Option<String>,
) -> Result<Configuration, AdrError> {
    let config = Configuration {
        base_directory: store.root.clone(),
        current_id: 0,
        readme_name,
    };
    save(store, &config)?;
    Ok(config)
}

pub fn load(store: &AdrStore) -> Result<Configuration, AdrError> {
    let path = store.config_path();
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AdrError::NotFoundError(format!(
                "no ADR configuration at {}",
                path.display()
            )));
        }
        Err(e) => return Err(AdrError::IoError(e)),
    };
    serde_json::from_str(&raw).map_err(|source| AdrError::ConfigParseError { path, source })
}

pub fn save(store: &AdrStore, config: &Configuration) -> Result<(), AdrError> {
    let path = store.config_path();
    let body = serde_json::to_string_pretty(config)
        .map_err(|e| AdrError::write(&path, io::Error::other(e)))?;
    fs::write(&path, body).map_err(|e| AdrError::write(&path, e))
}
