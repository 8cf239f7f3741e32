//! Command handlers

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Category, Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::error::{CodedError, ConfigError, ExitError, OsError, UsageError};
use crate::exitcode::{self, Sysexit};
use crate::terminate;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::List => _list(),
        Commands::Explain { code } => _explain(code),
        Commands::Exit {
            category,
            code,
            message,
        } => _exit(*category, *code, message.as_deref()),
        Commands::Completion { shell } => _completion(*shell),
    }
}

#[instrument]
fn _list() -> CliResult<()> {
    output::header("sysexits.h");
    let mut out = io::stdout().lock();
    for entry in exitcode::ALL.iter() {
        output::sysexit_row(&mut out, entry).map_err(|e| CliError::io("write table", e))?;
    }
    out.flush().map_err(|e| CliError::io("flush stdout", e))
}

#[instrument]
fn _explain(code: &str) -> CliResult<()> {
    let entry = resolve(code)?;
    debug!(?entry, "resolved");
    output::sysexit_row(&mut io::stdout().lock(), entry)
        .map_err(|e| CliError::io("write explanation", e))
}

/// Resolve a numeric code or a sysexits name to its table entry.
pub fn resolve(code: &str) -> CliResult<&'static Sysexit> {
    let entry = match code.trim().parse::<i32>() {
        Ok(n) => exitcode::lookup(n),
        Err(_) => exitcode::by_name(code),
    };
    entry.ok_or_else(|| CliError::UnknownCode(code.to_string()))
}

/// Build the error `rsexit exit` terminates with.
///
/// Without a message the wrapped error is absent, so the result reports 0.
pub fn wrap_message(
    category: Option<Category>,
    code: Option<i32>,
    message: Option<&str>,
) -> Box<dyn ExitError> {
    let err = message.map(|m| io::Error::other(m.to_string()));
    match (category, code) {
        (_, Some(code)) => Box::new(CodedError::from_option(code, err)),
        (Some(Category::Usage), None) => Box::new(UsageError::from_option(err)),
        (Some(Category::Os), None) => Box::new(OsError::from_option(err)),
        (Some(Category::Config), None) => Box::new(ConfigError::from_option(err)),
        // clap requires one of the two
        (None, None) => Box::new(UsageError::<io::Error>::none()),
    }
}

#[instrument]
fn _exit(category: Option<Category>, code: Option<i32>, message: Option<&str>) -> CliResult<()> {
    let err = wrap_message(category, code, message);
    if let Some(msg) = message {
        output::error(msg);
    }
    io::stdout()
        .flush()
        .map_err(|e| CliError::io("flush stdout", e))?;
    terminate::now(&err)
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_numeric_or_name_when_resolve_then_entry() {
        assert_eq!(resolve("64").map(|e| e.name).ok(), Some("EX_USAGE"));
        assert_eq!(resolve("noperm").map(|e| e.code).ok(), Some(77));
        assert_eq!(resolve("0").map(|e| e.name).ok(), Some("EX_OK"));
        assert!(matches!(resolve("1"), Err(CliError::UnknownCode(_))));
        assert!(matches!(resolve("nope"), Err(CliError::UnknownCode(_))));
    }

    #[test]
    fn given_message_when_wrap_then_category_code() {
        assert_eq!(wrap_message(Some(Category::Usage), None, Some("x")).exit_code(), 64);
        assert_eq!(wrap_message(Some(Category::Os), None, Some("x")).exit_code(), 71);
        assert_eq!(wrap_message(Some(Category::Config), None, Some("x")).exit_code(), 78);
        assert_eq!(wrap_message(None, Some(75), Some("x")).exit_code(), 75);
    }

    #[test]
    fn given_no_message_when_wrap_then_zero() {
        assert_eq!(wrap_message(Some(Category::Config), None, None).exit_code(), 0);
        assert_eq!(wrap_message(None, Some(75), None).exit_code(), 0);
    }
}
