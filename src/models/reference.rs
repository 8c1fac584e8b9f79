//! Reference table rows: leave, holidays, meal exceptions and manual overtime.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the Leave table.
///
/// Only `start_date` takes part in matching; `end_date` is carried for
/// reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEntry {
    /// The employee on leave.
    #[serde(alias = "Employee ID")]
    pub employee_id: String,
    /// First day of the leave.
    #[serde(alias = "Start Date")]
    pub start_date: NaiveDate,
    /// Last day of the leave, or the single leave date.
    #[serde(default, alias = "End Date")]
    pub end_date: Option<NaiveDate>,
    /// Leave type label (e.g., "Annual Leave").
    #[serde(alias = "Leave Type")]
    pub leave_type: String,
    /// Number of leave days booked.
    #[serde(alias = "Days")]
    pub days: Decimal,
}

/// One row of the Holiday table.
///
/// Rows without an employee ID form the general calendar; rows with one
/// override it for that employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The employee the holiday applies to, or `None` for everyone.
    #[serde(default, alias = "Employee ID")]
    pub employee_id: Option<String>,
    /// The holiday date.
    #[serde(alias = "Date")]
    pub date: NaiveDate,
    /// Festival name, or the literal `OFF` marker.
    #[serde(alias = "Festival Name")]
    pub festival_name: String,
}

/// One row of the Meal table: the meal allowance for this employee-date is
/// already settled and must not be granted again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealException {
    /// The employee.
    #[serde(alias = "Employee ID")]
    pub employee_id: String,
    /// The date.
    #[serde(alias = "Date")]
    pub date: NaiveDate,
}

/// One row of the Manual OT table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualOtEntry {
    /// The employee.
    #[serde(alias = "Employee ID")]
    pub employee_id: String,
    /// The date the overtime was worked.
    #[serde(alias = "Date")]
    pub date: NaiveDate,
    /// Overtime minutes entered by hand.
    #[serde(alias = "OT Minutes")]
    pub minutes: u32,
}

/// Leave column value of a daily record.
///
/// Serialized as the leave type, `-` when not on leave, or `Cannot OT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum LeaveStatus {
    /// No leave entry matched.
    NotOnLeave,
    /// A leave entry matched; carries its type.
    OnLeave(String),
    /// Overtime workday that cannot be approved (missing punch or early clock-out).
    CannotOt,
}

impl LeaveStatus {
    const NOT_ON_LEAVE: &'static str = "-";
    const CANNOT_OT: &'static str = "Cannot OT";

    /// Returns the report label.
    pub fn label(&self) -> &str {
        match self {
            LeaveStatus::NotOnLeave => Self::NOT_ON_LEAVE,
            LeaveStatus::OnLeave(leave_type) => leave_type,
            LeaveStatus::CannotOt => Self::CANNOT_OT,
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<LeaveStatus> for String {
    fn from(status: LeaveStatus) -> Self {
        status.label().to_string()
    }
}

impl From<String> for LeaveStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            LeaveStatus::NOT_ON_LEAVE => LeaveStatus::NotOnLeave,
            LeaveStatus::CANNOT_OT => LeaveStatus::CannotOt,
            _ => LeaveStatus::OnLeave(label),
        }
    }
}
