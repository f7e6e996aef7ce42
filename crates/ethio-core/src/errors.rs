//! Error types for ethiocal.
//!
//! Every fallible operation in the workspace returns [`Result`] with the single
//! [`Error`] enum defined here.  Strict construction reports
//! [`Error::InvalidDate`]; lenient field mutation and arithmetic clamp instead
//! and only fail when the result leaves the supported year range.

use thiserror::Error;

/// The top-level error type used throughout ethiocal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year/month/day combination that does not name a real date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A computed date falls outside the supported range.
    #[error("date out of range: {0}")]
    OutOfRange(String),

    /// A temporal field the Ethiopic date does not model.
    #[error("unsupported field: {0}")]
    UnsupportedField(String),

    /// A temporal unit the Ethiopic date does not model.
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// Malformed holiday-offset configuration.
    #[error("invalid offset configuration: {0}")]
    ConfigParse(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout ethiocal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidDate(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ethio_core::{ensure_date, errors::Result};
/// fn month(m: u8) -> Result<u8> {
///     ensure_date!((1..=13).contains(&m), "month {m} out of range [1, 13]");
///     Ok(m)
/// }
/// assert!(month(13).is_ok());
/// assert!(month(14).is_err());
/// ```
#[macro_export]
macro_rules! ensure_date {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidDate(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::OutOfRange(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ethio_core::{ensure_range, errors::Result};
/// fn year(y: i64) -> Result<i64> {
///     ensure_range!(y <= 999_999, "year {y} exceeds maximum");
///     Ok(y)
/// }
/// assert!(year(2017).is_ok());
/// assert!(year(1_000_000).is_err());
/// ```
#[macro_export]
macro_rules! ensure_range {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::OutOfRange(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(day: u8) -> Result<u8> {
        ensure_date!(day <= 30, "day {day} out of range [1, 30]");
        Ok(day)
    }

    #[test]
    fn ensure_date_reports_invalid_date() {
        assert_eq!(strict(30), Ok(30));
        assert_eq!(
            strict(31),
            Err(Error::InvalidDate("day 31 out of range [1, 30]".into()))
        );
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidDate("Pagume 6".into()).to_string(),
            "invalid date: Pagume 6"
        );
        assert_eq!(
            Error::UnsupportedField("HourOfDay".into()).to_string(),
            "unsupported field: HourOfDay"
        );
        assert_eq!(
            Error::ConfigParse("expected value".into()).to_string(),
            "invalid offset configuration: expected value"
        );
    }
}
