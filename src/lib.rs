//! adr: a small helper for Architecture Decision Records
//!
//! `adr init` prepares a base directory holding a markdown template and a
//! `config.json` with the running record counter. `adr new` renders the
//! template into `<number>-<Title-With-Hyphens>.md` and, when a readme was
//! configured, appends a link to it.
//!
//! # Examples
//!
//! ```bash
//! # Initialize ./architecture-decision-records and index into README.md
//! adr init --readme README.md
//!
//! # Record a decision
//! adr new --title "Use Postgres for event storage"
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: configuration, templating, record writing and directory setup
//!
//! Core functions return [`core::error::AdrError`] and never terminate the
//! process; [`run`] reports failures and `main` turns them into exit codes.

mod cli;
pub mod core;

use cli::{Cli, Command, InitCli, NewCli};
use crate::core::{config, error::AdrError, output, readme, record, scaffold, store::AdrStore};

use clap::Parser;
use std::path::Path;

pub fn run() -> Result<(), AdrError> {
    let cli = Cli::parse();
    let working_dir = std::env::current_dir()?;

    match cli.command {
        Command::Init(args) => run_init(args, &working_dir),
        Command::New(args) => run_new(args, &working_dir),
    }
}

fn run_init(args: InitCli, working_dir: &Path) -> Result<(), AdrError> {
    let target = scaffold::resolve_base_directory(args.directory.as_deref(), working_dir);
    output::info(&format!("Initializing ADR base at {}", target.display()));

    let base = scaffold::ensure_base_directory(args.directory.as_deref(), working_dir)
        .inspect_err(|_| output::failure("failed to create the ADR base directory"))?;
    if !base.created {
        output::warn(&format!(
            "{} already exists, skipping folder creation",
            base.store.root.display()
        ));
    }

    let readme_path = args
        .readme
        .as_deref()
        .map(|name| readme::resolve_readme(name, working_dir));
    let readme_name = readme_path
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned());

    let config = scaffold::bootstrap(&base.store, readme_name)
        .inspect_err(|_| output::failure("failed to write the ADR template and configuration"))?;

    if let Some(path) = readme_path {
        match readme::append_index_header(&path) {
            Ok(true) => output::info(&format!("Added ADR index to {}", path.display())),
            Ok(false) => {
                output::info(&format!("ADR index already present in {}", path.display()))
            }
            Err(e) => output::warn(&format!("readme index not added: {}", e)),
        }
    }

    output::success(&format!(
        "ADR base ready at {} (next record: {})",
        config.base_directory.display(),
        config.current_id
    ));
    Ok(())
}

fn run_new(args: NewCli, working_dir: &Path) -> Result<(), AdrError> {
    record::validate_title(&args.title)?;
    let store = AdrStore::new(scaffold::resolve_base_directory(
        args.directory.as_deref(),
        working_dir,
    ));

    let current = match config::load(&store) {
        Ok(c) => c,
        Err(e @ AdrError::NotFoundError(_)) => {
            output::failure("No ADR configuration is found!");
            output::hint("Start by initializing ADR configuration, check 'adr init --help' for more help");
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    // Persist the advanced counter before writing so a number is never handed out twice.
    let mut next = current.clone();
    let number = next.advance()?;
    config::save(&store, &next)?;

    let path = record::create_record(&store, &current, &args.title)
        .inspect_err(|_| output::failure(&format!("ADR number {} was not written", number)))?;

    if let Some(name) = current.readme_name.as_deref() {
        let readme_path = readme::resolve_readme(name, working_dir);
        if let Err(e) = readme::append_record_index(&readme_path, &path, &args.title) {
            output::warn(&format!("record written but readme not updated: {}", e));
        }
    }

    output::success(&format!(
        "ADR number {} was successfully written to: {}",
        number,
        path.display()
    ));
    Ok(())
}
