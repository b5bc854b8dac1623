//! Core modules for the ADR helper.
//!
//! Everything here returns typed errors; nothing prints or exits except
//! the `output` helpers used by the command layer.

pub mod config;
pub mod error;
pub mod output;
pub mod readme;
pub mod record;
pub mod scaffold;
pub mod store;
pub mod template;
pub mod time;
