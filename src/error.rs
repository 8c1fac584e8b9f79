//! Error types for the Attendance Rule Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that abort a run. Per-record problems (unknown
//! employee, unknown shift, malformed punch) never surface here; they
//! degrade to sentinel values and are reported as
//! [`Diagnostic`](crate::models::Diagnostic)s instead.

use thiserror::Error;

/// The main error type for the Attendance Rule Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::MissingTable {
///     table: "Holiday".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required input table is missing: Holiday");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
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

    /// Shift code was not found in the shift rule table.
    #[error("Shift rule not found: {code}")]
    ShiftNotFound {
        /// The shift code that was not found.
        code: String,
    },

    /// A required input table was absent from the data source.
    #[error("Required input table is missing: {table}")]
    MissingTable {
        /// The name of the missing table (e.g., "Attendance").
        table: String,
    },

    /// A row of an input table could not be read.
    #[error("Failed to read table '{table}' at row {row}: {message}")]
    TableParseError {
        /// The name of the table.
        table: String,
        /// The 1-based data row number (header excluded).
        row: usize,
        /// A description of the parse error.
        message: String,
    },

    /// A report artifact could not be written.
    #[error("Failed to write report '{path}': {message}")]
    ReportWriteError {
        /// The target path.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
