//! Record creation: numbering, filename derivation and rendering.

use crate::core::config::Configuration;
use crate::core::error::AdrError;
use crate::core::store::AdrStore;
use crate::core::template;
use crate::core::time;
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Proposed,
    Accepted,
    Deprecated,
    Superseded,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Proposed => "Proposed",
            Status::Accepted => "Accepted",
            Status::Deprecated => "Deprecated",
            Status::Superseded => "Superseded",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decision record as it is about to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub number: u64,
    pub title: String,
    pub date: String,
    pub status: Status,
}

impl Record {
    pub fn proposed(number: u64, title: &str) -> Self {
        Record {
            number,
            title: title.trim().to_string(),
            date: time::now_record_date(),
            status: Status::Proposed,
        }
    }

    pub fn file_name(&self) -> String {
        record_file_name(self.number, &self.title)
    }
}

/// Title with surrounding whitespace trimmed, inner runs of whitespace
/// collapsed to a single hyphen and path separators replaced by hyphens.
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .replace(['/', '\\'], "-")
}

pub fn record_file_name(number: u64, title: &str) -> String {
    format!("{}-{}.md", number, slugify(title))
}

pub fn validate_title(title: &str) -> Result<(), AdrError> {
    if title.trim().is_empty() {
        return Err(AdrError::ValidationError(
            "record title must not be empty".into(),
        ));
    }
    Ok(())
}

/// Renders the store's template for record number `config.current_id` and
/// writes it under `config.base_directory`. The counter itself is left to
/// the caller.
pub fn create_record(
    store: &AdrStore,
    config: &Configuration,
    title: &str,
) -> Result<PathBuf, AdrError> {
    validate_title(title)?;
    let record = Record::proposed(config.current_id, title);

    let template = template::load_template(&store.template_path())?;
    let body = template::render(&template, &record);

    let path = config.base_directory.join(record.file_name());
    fs::write(&path, body).map_err(|e| AdrError::write(&path, e))?;
    Ok(path)
}
