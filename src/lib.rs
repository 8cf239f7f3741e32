//! rsexit - map typed program errors to BSD `sysexits.h` exit codes
//!
//! Wrap an error in the category it belongs to and hand it to
//! [`terminate::now`] at the outermost edge of the program:
//!
//! ```no_run
//! use rsexit::{terminate, UsageError};
//!
//! let err = std::io::Error::new(std::io::ErrorKind::InvalidInput, "missing argument");
//! eprintln!("error: {err}");
//! terminate::now(&UsageError::new(err)); // exits with status 64
//! ```

pub mod cli;
pub mod error;
pub mod exitcode;
pub mod terminate;
pub mod util;

pub use error::{
    to_process_exit_code, CodedError, ConfigError, ExitError, OsError, UsageError,
};
