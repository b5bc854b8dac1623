//! Append-only ADR index in an external readme.

use crate::core::error::AdrError;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const INDEX_HEADER: &str = "\n## ADR index\n";

/// Relative readme names are taken from the working directory.
pub fn resolve_readme(readme_name: &str, working_dir: &Path) -> PathBuf {
    let path = Path::new(readme_name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}

fn append(readme: &Path, text: &str) -> Result<(), AdrError> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(readme)
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                AdrError::NotFoundError(format!("readme {} does not exist", readme.display()))
            }
            _ => AdrError::write(readme, e),
        })?;
    file.write_all(text.as_bytes())
        .map_err(|e| AdrError::write(readme, e))
}

/// Appends the index header unless the readme already carries one.
/// Returns whether anything was written.
pub fn append_index_header(readme: &Path) -> Result<bool, AdrError> {
    let existing = fs::read_to_string(readme).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            AdrError::NotFoundError(format!("readme {} does not exist", readme.display()))
        }
        _ => AdrError::IoError(e),
    })?;
    let header = INDEX_HEADER.trim();
    if existing.lines().any(|line| line.trim() == header) {
        return Ok(false);
    }
    append(readme, INDEX_HEADER)?;
    Ok(true)
}

/// Link target for a record: relative to the readme when the record sits
/// beneath the readme's directory, absolute otherwise.
pub fn index_link(readme: &Path, record_path: &Path) -> String {
    let link = readme
        .parent()
        .and_then(|dir| record_path.strip_prefix(dir).ok())
        .unwrap_or(record_path);
    let link = link.to_string_lossy().replace('\\', "/");
    if link.contains(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>')) {
        format!("<{}>", link.replace('<', "%3C").replace('>', "%3E"))
    } else {
        link
    }
}

/// Backslash-escapes the characters that would end or nest link text.
pub fn escape_link_text(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.trim().chars() {
        if matches!(c, '\\' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub fn append_record_index(
    readme: &Path,
    record_path: &Path,
    title: &str,
) -> Result<(), AdrError> {
    let line = format!(
        "* [{}]({})\n",
        escape_link_text(title),
        index_link(readme, record_path)
    );
    append(readme, &line)
}
