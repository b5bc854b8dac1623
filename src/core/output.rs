//! Colored status lines for CLI surfaces.
//!
//! Success and info go to stdout; warnings and failures go to stderr so a
//! caller can capture the printed record path cleanly.

use colored::Colorize;

pub fn success(msg: &str) {
    println!("{} {}", "✓".bright_green(), msg.green());
}

pub fn info(msg: &str) {
    println!("{} {}", "ℹ".bright_blue(), msg);
}

pub fn hint(msg: &str) {
    eprintln!("  {} {}", "▸".bright_cyan(), msg.bright_cyan());
}

pub fn warn(msg: &str) {
    eprintln!("{} {}", "⚠".bright_yellow(), msg.yellow());
}

pub fn failure(msg: &str) {
    eprintln!("{} {}", "✗".bright_red(), msg.red());
}
