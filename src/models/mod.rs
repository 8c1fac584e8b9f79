//! Core data models for the Attendance Rule Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod counters;
mod day_type;
mod diagnostic;
mod employee;
mod reference;
mod report;
pub mod sentinel;

pub use attendance::{AttendanceRecord, Punch, RawAttendance, parse_weekday_label};
pub use counters::{MonthlyCounters, MonthlySummary, OvertimeSplit, WeeklyCounters};
pub use day_type::DayType;
pub use diagnostic::{Diagnostic, EMPLOYEE_NOT_FOUND, MALFORMED_PUNCH, SHIFT_NOT_FOUND, Severity};
pub use employee::Employee;
pub use reference::{HolidayEntry, LeaveEntry, LeaveStatus, ManualOtEntry, MealException};
pub use report::{
    DailyRecord, DepartmentReport, EmployeeReport, Highlight, MasterRow, ReportRow, RunReport,
    WeeklySummary,
};
