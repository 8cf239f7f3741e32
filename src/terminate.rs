//! Process termination with a mapped exit code
//!
//! Consider this a slightly higher-level `std::process::exit`. Call it only
//! from the outermost layer of a program: destructors of the caller's stack
//! do not run, so flush output and release resources first.

use tracing::debug;

use crate::error::ExitError;
use crate::exitcode;

/// Exit the process with the code reported by `err`.
///
/// Never returns. A wrapper over an absent error exits with status 0.
/// Codes outside `0..=255` exit with [`exitcode::SOFTWARE`].
pub fn now<E: ExitError + ?Sized>(err: &E) -> ! {
    let code = err.exit_code();
    let status = exitcode::status(code);
    debug!(code, status, description = exitcode::describe(code), "terminating process");
    std::process::exit(i32::from(status))
}

/// Unwrap `result`, or exit the process with the error's code.
pub fn exit_on_err<T, E: ExitError>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => now(&e),
    }
}
