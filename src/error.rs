//! Error types for the Leave Entitlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only a handful of conditions are fatal; malformed numeric form input is
//! coerced rather than rejected.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Leave Entitlement Engine.
///
/// # Example
///
/// ```
/// use leave_entitlement_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     field: "ewc_date".to_string(),
///     value: "not-a-date".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input: 'ewc_date' is not a valid date (got 'not-a-date')"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required date field could not be parsed as a calendar date.
    #[error("Invalid input: '{field}' is not a valid date (got '{value}')")]
    InvalidDate {
        /// The name of the offending input field.
        field: String,
        /// The raw value that was supplied.
        value: String,
    },

    /// Configuration file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No statutory rates table is effective for the given date.
    #[error("No statutory rates effective on {date}")]
    RatesNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
