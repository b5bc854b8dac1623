//! Markdown record template.
//!
//! Templates are plain markdown with `{{Name}}` placeholders. `{{ .Name }}`
//! (leading dot, inner whitespace) is accepted too. Only `Title` and
//! `Status` are substituted; any other placeholder is emitted verbatim.

use crate::core::error::AdrError;
use crate::core::record::Record;
use crate::core::store::AdrStore;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/template.md");

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

fn placeholder_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\.?([A-Za-z_][A-Za-z0-9_]*)$").expect("valid placeholder regex")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Placeholder { name: String, raw: String },
}

/// A parsed template, ready to render any number of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// `source` only labels parse errors.
    pub fn parse(source: impl AsRef<Path>, body: &str) -> Result<Self, AdrError> {
        let source = source.as_ref();
        let mut segments = Vec::new();
        let mut rest = body;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                return Err(AdrError::TemplateParseError(format!(
                    "{}: unterminated placeholder near {:?}",
                    source.display(),
                    preview(&rest[start..])
                )));
            };
            let inner = after_open[..end].trim();
            let name = placeholder_name_re()
                .captures(inner)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .ok_or_else(|| {
                    AdrError::TemplateParseError(format!(
                        "{}: invalid placeholder {{{{{}}}}}",
                        source.display(),
                        inner
                    ))
                })?;
            let raw_len = start + OPEN.len() + end + CLOSE.len();
            segments.push(Segment::Placeholder {
                name,
                raw: rest[start..raw_len].to_string(),
            });
            rest = &rest[raw_len..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Template { segments })
    }

    /// Names of all placeholders in order of appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder { name, .. } => Some(name.as_str()),
                Segment::Text(_) => None,
            })
            .collect()
    }
}

fn preview(s: &str) -> String {
    s.chars().take(24).collect()
}

pub fn load_template(path: &Path) -> Result<Template, AdrError> {
    let body = fs::read_to_string(path).map_err(|e| {
        AdrError::TemplateParseError(format!("cannot read {}: {}", path.display(), e))
    })?;
    Template::parse(path, &body)
}

pub fn render(template: &Template, record: &Record) -> String {
    let mut out = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Placeholder { name, raw } => match name.as_str() {
                "Title" => out.push_str(&record.title),
                "Status" => out.push_str(record.status.as_str()),
                _ => out.push_str(raw),
            },
        }
    }
    out
}

/// Writes the built-in skeleton to `<base>/template.md`, replacing any
/// existing file.
pub fn write_default_template(store: &AdrStore) -> Result<PathBuf, AdrError> {
    let path = store.template_path();
    fs::write(&path, DEFAULT_TEMPLATE).map_err(|e| AdrError::write(&path, e))?;
    Ok(path)
}
