//! CLI struct definitions for the `adr` command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "adr",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create and index Architecture Decision Records"
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug)]
pub(crate) struct InitCli {
    /// ADR base directory (defaults to ./architecture-decision-records).
    #[clap(short, long)]
    pub directory: Option<PathBuf>,
    /// Readme that receives an index entry for every new record.
    #[clap(short, long)]
    pub readme: Option<String>,
}

#[derive(clap::Args, Debug)]
pub(crate) struct NewCli {
    /// Record title; becomes the heading and, hyphenated, the file name.
    #[clap(short, long)]
    pub title: String,
    /// ADR base directory (defaults to ./architecture-decision-records).
    #[clap(short, long)]
    pub directory: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Initialize the ADR base directory, template and configuration
    ///
    /// Re-running init rewrites the template and resets the record counter.
    #[clap(visible_alias = "i")]
    Init(InitCli),

    /// Create a new ADR from the template
    #[clap(visible_alias = "c")]
    New(NewCli),
}
