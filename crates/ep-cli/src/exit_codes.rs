//! Exit codes for the `ep-config` binary.
//!
//! Scripts branch on these without parsing output.

use ep_common::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Clean = 0,

    /// Checked configuration has findings
    ValidationFailed = 1,

    /// Bad key, label, or configuration content
    ConfigError = 10,

    /// I/O error
    IoError = 13,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::UnknownEnvironment { .. }
            | Error::UnknownKey { .. }
            | Error::InvalidConfig(_)
            | Error::SnapshotMismatch { .. }
            | Error::UnsupportedSchema(_)
            | Error::Json(_) => ExitCode::ConfigError,
            Error::Io(_) => ExitCode::IoError,
        }
    }
}
