//! Standard exit codes (BSD sysexits.h compatible)
//!
//! Values are fixed by the `sysexits.h` convention and must never change:
//! shell scripts and process supervisors interpret them by number.

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error
pub const DATAERR: i32 = 65;

/// Cannot open input
pub const NOINPUT: i32 = 66;

/// Addressee unknown
pub const NOUSER: i32 = 67;

/// Host name unknown
pub const NOHOST: i32 = 68;

/// Service unavailable
pub const UNAVAILABLE: i32 = 69;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// System error (e.g., can't fork)
pub const OSERR: i32 = 71;

/// Critical OS file missing
pub const OSFILE: i32 = 72;

/// Can't create (user) output file
pub const CANTCREAT: i32 = 73;

/// Input/output error
pub const IOERR: i32 = 74;

/// Temp failure; user is invited to retry
pub const TEMPFAIL: i32 = 75;

/// Remote error in protocol
pub const PROTOCOL: i32 = 76;

/// Permission denied
pub const NOPERM: i32 = 77;

/// Configuration error
pub const CONFIG: i32 = 78;

/// One row of the sysexits table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sysexit {
    /// Identifier as spelled in `sysexits.h`, e.g. `EX_USAGE`
    pub name: &'static str,
    pub code: i32,
    pub description: &'static str,
}

/// All categorized failure codes, ascending by value.
#[rustfmt::skip]
pub const ALL: [Sysexit; 15] = [
    Sysexit { name: "EX_USAGE", code: USAGE, description: "command line usage error" },
    Sysexit { name: "EX_DATAERR", code: DATAERR, description: "data format error" },
    Sysexit { name: "EX_NOINPUT", code: NOINPUT, description: "cannot open input" },
    Sysexit { name: "EX_NOUSER", code: NOUSER, description: "addressee unknown" },
    Sysexit { name: "EX_NOHOST", code: NOHOST, description: "host name unknown" },
    Sysexit { name: "EX_UNAVAILABLE", code: UNAVAILABLE, description: "service unavailable" },
    Sysexit { name: "EX_SOFTWARE", code: SOFTWARE, description: "internal software error" },
    Sysexit { name: "EX_OSERR", code: OSERR, description: "system error" },
    Sysexit { name: "EX_OSFILE", code: OSFILE, description: "critical OS file missing" },
    Sysexit { name: "EX_CANTCREAT", code: CANTCREAT, description: "can't create output file" },
    Sysexit { name: "EX_IOERR", code: IOERR, description: "input/output error" },
    Sysexit { name: "EX_TEMPFAIL", code: TEMPFAIL, description: "temporary failure" },
    Sysexit { name: "EX_PROTOCOL", code: PROTOCOL, description: "remote error in protocol" },
    Sysexit { name: "EX_NOPERM", code: NOPERM, description: "permission denied" },
    Sysexit { name: "EX_CONFIG", code: CONFIG, description: "configuration error" },
];

/// Entry for successful termination; not part of [`ALL`].
pub const SUCCESS: Sysexit = Sysexit { name: "EX_OK", code: OK, description: "success" };

fn entries() -> impl Iterator<Item = &'static Sysexit> {
    std::iter::once(&SUCCESS).chain(ALL.iter())
}

/// Find the table entry for `code`, including `EX_OK` for 0.
pub fn lookup(code: i32) -> Option<&'static Sysexit> {
    entries().find(|e| e.code == code)
}

/// Find a table entry by name.
///
/// Matching is case-insensitive and the `EX_` prefix is optional, so
/// `EX_USAGE`, `ex_usage` and `usage` all resolve to the same entry.
pub fn by_name(name: &str) -> Option<&'static Sysexit> {
    let wanted = name.trim().to_ascii_uppercase();
    let wanted = wanted.strip_prefix("EX_").unwrap_or(&wanted);
    entries().find(|e| &e.name[3..] == wanted)
}

/// Human-readable description of any exit code.
pub fn describe(code: i32) -> &'static str {
    lookup(code).map_or("unknown exit code", |e| e.description)
}

/// Process status for `code`.
///
/// The OS keeps only the low 8 bits of an exit status, so 256 would read as
/// success. Codes outside `0..=255` become [`SOFTWARE`] instead.
pub fn status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(SOFTWARE as u8)
}
