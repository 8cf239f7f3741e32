//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;

use colored::Colorize;

use crate::exitcode::Sysexit;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Write one table row: code, name, description
pub fn sysexit_row(out: &mut impl Write, entry: &Sysexit) -> std::io::Result<()> {
    writeln!(
        out,
        "{:>3}  {:<15} {}",
        entry.code.to_string().green(),
        entry.name,
        entry.description
    )
}
