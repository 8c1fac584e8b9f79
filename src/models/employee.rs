//! Employee model.
//!
//! This module defines the Employee struct as read from the Employee
//! reference table.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Represents an employee row of the Employee reference table.
///
/// Column aliases accept the headers of the legacy master-data workbook
/// (`Employee ID`, `Shift`, `Company / Department`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    #[serde(alias = "employee_id", alias = "Employee ID")]
    pub id: String,
    /// Display name.
    #[serde(default, alias = "Name (EN)", alias = "Name")]
    pub name: String,
    /// Department the employee belongs to.
    #[serde(default, alias = "Department", alias = "Company / Department")]
    pub department: String,
    /// Shift code keying into the shift rule table (e.g., "A1").
    #[serde(alias = "Shift")]
    pub shift: String,
    /// Employment type label carried through to the master report.
    #[serde(default, alias = "Type")]
    pub employee_type: Option<String>,
    /// On-board date.
    #[serde(default, alias = "On board date", deserialize_with = "roster_date")]
    pub on_board_date: Option<NaiveDate>,
    /// Leaving date, if the employee has left.
    #[serde(default, alias = "Leave date[YYMMDD]", deserialize_with = "roster_date")]
    pub leave_date: Option<NaiveDate>,
}

/// Reads a master-data date written as `YYMMDD`, `YYYY-MM-DD` or a
/// spreadsheet timestamp. Blank and unreadable values become `None`; the
/// dates are carried to the master report only and never block a run.
fn roster_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        return Ok(None);
    }

    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%y%m%d"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()));

    match parsed {
        Ok(date) => Ok(Some(date)),
        Err(_) => {
            warn!(value = raw, "Unreadable employee date ignored");
            Ok(None)
        }
    }
}
