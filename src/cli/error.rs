//! CLI-level errors

use thiserror::Error;

use crate::error::ExitError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error("unknown exit code: {0}")]
    UnknownCode(String),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

impl ExitError for CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Args(_) | CliError::UnknownCode(_) => exitcode::USAGE,
            CliError::Io { .. } => exitcode::IOERR,
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_cli_errors_when_exit_code_then_mapped_to_category() {
        assert_eq!(CliError::UnknownCode("99".into()).exit_code(), exitcode::USAGE);
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(CliError::io("write stdout", io).exit_code(), exitcode::IOERR);
    }
}
