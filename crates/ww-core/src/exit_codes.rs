//! Exit codes for the ww-core CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing. Ranges:
//! - 0-9: Success/operational outcomes
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (bugs, should be reported)

use ww_common::Error;

/// Exit codes for ww-core operations.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Ok = 0,

    /// No data matched the query (empty month, too few timestamps);
    /// retry with a different period.
    NoData = 1,

    /// Invalid arguments (month out of range, negative wait).
    ArgsError = 10,

    /// Invalid engine parameters or parameter file.
    ConfigError = 11,

    /// Sighting data could not be loaded or parsed.
    DataError = 12,

    /// Unexpected internal error.
    Internal = 20,
}

impl From<&Error> for ExitCode {
    fn from(error: &Error) -> Self {
        match error {
            Error::EmptyInput(_) | Error::InsufficientData { .. } => ExitCode::NoData,
            Error::InvalidArgument(_) => ExitCode::ArgsError,
            Error::InvalidConfiguration(_) => ExitCode::ConfigError,
            Error::MalformedRecord { .. } | Error::Csv(_) | Error::Io(_) => ExitCode::DataError,
            Error::Json(_) => ExitCode::Internal,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_mapping() {
        assert_eq!(
            ExitCode::from(&Error::EmptyInput("month 2".to_string())),
            ExitCode::NoData
        );
        assert_eq!(
            ExitCode::from(&Error::InvalidArgument("month 13".to_string())),
            ExitCode::ArgsError
        );
        assert_eq!(
            ExitCode::from(&Error::InvalidConfiguration("bad".to_string())),
            ExitCode::ConfigError
        );
        assert_eq!(
            ExitCode::from(&Error::MalformedRecord {
                record: 1,
                message: "bad".to_string()
            }),
            ExitCode::DataError
        );
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(i32::from(ExitCode::Ok), 0);
        assert_eq!(i32::from(ExitCode::NoData), 1);
        assert_eq!(i32::from(ExitCode::ArgsError), 10);
        assert_eq!(i32::from(ExitCode::Internal), 20);
    }
}
