//! Exit-capable errors and the category wrappers
//!
//! A wrapper owns an optional underlying error. It reports its category code
//! only while that error is present; a wrapper over nothing reports
//! [`exitcode::OK`]. This makes `UsageError::from_option(maybe_err)` usable
//! unconditionally, but it also means that terminating with an empty wrapper
//! exits with success. Never build a wrapper over `None` when the caller
//! expects a failure status.

use std::error::Error as StdError;
use std::fmt;

use crate::exitcode;

/// Anything that can be represented as a process exit code.
///
/// Implementations must be pure: repeated calls return the same value as
/// long as the receiver is not mutated.
pub trait ExitError {
    fn exit_code(&self) -> i32;
}

impl<T: ExitError + ?Sized> ExitError for &T {
    fn exit_code(&self) -> i32 {
        (**self).exit_code()
    }
}

impl<T: ExitError + ?Sized> ExitError for Box<T> {
    fn exit_code(&self) -> i32 {
        (**self).exit_code()
    }
}

macro_rules! category_wrapper {
    ($(#[$meta:meta])* $name:ident => $code:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name<E> {
            inner: Option<E>,
        }

        impl<E> $name<E> {
            /// Wrap a present error.
            pub fn new(err: E) -> Self {
                Self { inner: Some(err) }
            }

            /// Wrapper over no error; reports exit code 0.
            pub fn none() -> Self {
                Self { inner: None }
            }

            pub fn from_option(err: Option<E>) -> Self {
                Self { inner: err }
            }

            pub fn is_present(&self) -> bool {
                self.inner.is_some()
            }

            pub fn inner(&self) -> Option<&E> {
                self.inner.as_ref()
            }

            pub fn into_inner(self) -> Option<E> {
                self.inner
            }
        }

        impl<E> ExitError for $name<E> {
            fn exit_code(&self) -> i32 {
                if self.inner.is_some() {
                    $code
                } else {
                    exitcode::OK
                }
            }
        }

        impl<E> From<E> for $name<E> {
            fn from(err: E) -> Self {
                Self::new(err)
            }
        }

        impl<E: fmt::Display> fmt::Display for $name<E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.inner {
                    Some(e) => e.fmt(f),
                    None => Ok(()),
                }
            }
        }

        impl<E: StdError + 'static> StdError for $name<E> {
            fn source(&self) -> Option<&(dyn StdError + 'static)> {
                self.inner.as_ref().map(|e| e as &(dyn StdError + 'static))
            }
        }
    };
}

category_wrapper! {
    /// Wraps an error caused by improper usage by the program user.
    UsageError => exitcode::USAGE
}

category_wrapper! {
    /// Wraps an error caused by an OS failure.
    OsError => exitcode::OSERR
}

category_wrapper! {
    /// Wraps an error caused by invalid program configuration.
    ConfigError => exitcode::CONFIG
}

/// Wraps an error together with an arbitrary exit code.
///
/// Follows the same rule as the category wrappers: the code is reported
/// only while an error is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedError<E> {
    code: i32,
    inner: Option<E>,
}

impl<E> CodedError<E> {
    pub fn new(code: i32, err: E) -> Self {
        Self {
            code,
            inner: Some(err),
        }
    }

    pub fn from_option(code: i32, err: Option<E>) -> Self {
        Self { code, inner: err }
    }

    /// Code reported while an error is present.
    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn is_present(&self) -> bool {
        self.inner.is_some()
    }

    pub fn inner(&self) -> Option<&E> {
        self.inner.as_ref()
    }

    pub fn into_inner(self) -> Option<E> {
        self.inner
    }
}

impl<E> ExitError for CodedError<E> {
    fn exit_code(&self) -> i32 {
        if self.inner.is_some() {
            self.code
        } else {
            exitcode::OK
        }
    }
}

impl<E: fmt::Display> fmt::Display for CodedError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(e) => e.fmt(f),
            None => Ok(()),
        }
    }
}

impl<E: StdError + 'static> StdError for CodedError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.as_ref().map(|e| e as &(dyn StdError + 'static))
    }
}

/// Convert an exit-capable error into a status `main` can return.
///
/// Codes outside `0..=255` become [`exitcode::SOFTWARE`], matching
/// [`crate::terminate::now`].
pub fn to_process_exit_code<E: ExitError + ?Sized>(err: &E) -> std::process::ExitCode {
    std::process::ExitCode::from(exitcode::status(err.exit_code()))
}
