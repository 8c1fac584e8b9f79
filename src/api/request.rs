//! Request types for the Attendance Rule Engine API.
//!
//! This module defines the JSON request structure for the `/process` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{
    Employee, HolidayEntry, LeaveEntry, ManualOtEntry, MealException, RawAttendance,
};
use crate::store::ReferenceTables;

/// Request body for the `/process` endpoint.
///
/// Carries the six input tables of one run. Every table is required; an
/// empty table must be sent as `[]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Employee table.
    pub employees: Vec<Employee>,
    /// Attendance table.
    pub attendance: Vec<RawAttendance>,
    /// Leave table.
    pub leave: Vec<LeaveEntry>,
    /// Holiday table.
    pub holidays: Vec<HolidayEntry>,
    /// Meal exception table.
    pub meals: Vec<MealException>,
    /// Manual overtime table.
    pub manual_ot: Vec<ManualOtEntry>,
}

impl From<ProcessRequest> for ReferenceTables {
    fn from(req: ProcessRequest) -> Self {
        ReferenceTables {
            employees: req.employees,
            attendance: req.attendance,
            leave: req.leave,
            holidays: req.holidays,
            meals: req.meals,
            manual_ot: req.manual_ot,
        }
    }
}

impl From<ReferenceTables> for ProcessRequest {
    fn from(tables: ReferenceTables) -> Self {
        ProcessRequest {
            employees: tables.employees,
            attendance: tables.attendance,
            leave: tables.leave,
            holidays: tables.holidays,
            meals: tables.meals,
            manual_ot: tables.manual_ot,
        }
    }
}

/// Table name for a top-level request field.
pub(crate) fn table_for_field(field: &str) -> Option<&'static str> {
    match field {
        "employees" => Some("Employee"),
        "attendance" => Some("Attendance"),
        "leave" => Some("Leave"),
        "holidays" => Some("Holiday"),
        "meals" => Some("Meal"),
        "manual_ot" => Some("Manual OT"),
        _ => None,
    }
}
