//! Diagnostics raised by degraded per-record paths.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Diagnostic code for an attendance row whose employee is not in the Employee table.
pub const EMPLOYEE_NOT_FOUND: &str = "EMPLOYEE_NOT_FOUND";
/// Diagnostic code for an employee whose shift code has no rule.
pub const SHIFT_NOT_FOUND: &str = "SHIFT_NOT_FOUND";
/// Diagnostic code for an unreadable clock-in or clock-out value.
pub const MALFORMED_PUNCH: &str = "MALFORMED_PUNCH";

/// How much attention a diagnostic needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Processing continued but the affected figures should be reviewed.
    Medium,
    /// Figures for the affected scope are unreliable.
    High,
}

/// A warning generated while processing attendance.
///
/// Every path that falls back to a sentinel or default value produces one.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Diagnostic, Severity};
///
/// let diagnostic = Diagnostic::employee_not_found("E404");
/// assert_eq!(diagnostic.code, "EMPLOYEE_NOT_FOUND");
/// assert_eq!(diagnostic.severity, Severity::High);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// A code identifying the type of diagnostic.
    pub code: String,
    /// A human-readable description.
    pub message: String,
    /// The severity level.
    pub severity: Severity,
    /// The employee the diagnostic concerns.
    pub employee_id: String,
    /// The attendance date, for record-level diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Diagnostic {
    /// The employee has attendance rows but no Employee table entry.
    pub fn employee_not_found(employee_id: &str) -> Self {
        Self {
            code: EMPLOYEE_NOT_FOUND.to_string(),
            message: format!(
                "Employee ID {} not found in the Employee table; days classified OFF",
                employee_id
            ),
            severity: Severity::High,
            employee_id: employee_id.to_string(),
            date: None,
        }
    }

    /// The employee's shift code has no rule in the shift table.
    pub fn shift_not_found(employee_id: &str, shift_code: &str) -> Self {
        Self {
            code: SHIFT_NOT_FOUND.to_string(),
            message: format!(
                "Cannot determine shift rule '{}' for Employee ID {}; days classified OFF",
                shift_code, employee_id
            ),
            severity: Severity::High,
            employee_id: employee_id.to_string(),
            date: None,
        }
    }

    /// A punch value could not be read and was treated as missing.
    pub fn malformed_punch(employee_id: &str, date: NaiveDate, field: &str, raw: &str) -> Self {
        Self {
            code: MALFORMED_PUNCH.to_string(),
            message: format!("Unreadable {} value '{}' treated as missing", field, raw),
            severity: Severity::Medium,
            employee_id: employee_id.to_string(),
            date: Some(date),
        }
    }
}
