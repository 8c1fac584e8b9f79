//! Engine output models.
//!
//! This module contains the enriched daily record, the weekly summary
//! pseudo-record, and the per-employee, per-department and run-level
//! report structures handed to report rendering.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DayType, Diagnostic, LeaveStatus, MonthlySummary, WeeklyCounters, sentinel};

/// One attendance record after every derivation has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The employee.
    pub employee_id: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// The weekday.
    pub weekday: Weekday,
    /// The classified day type.
    pub day_type: DayType,
    /// Clock-in time.
    pub clock_in: Option<NaiveTime>,
    /// Clock-out time.
    pub clock_out: Option<NaiveTime>,
    /// The employee's shift code, if the employee is known.
    pub shift_code: Option<String>,
    /// Minutes late against the reference start, or `-`.
    #[serde(with = "sentinel")]
    pub late_minutes: Option<u32>,
    /// Minutes early against the reference end, or `-`.
    #[serde(with = "sentinel")]
    pub early_minutes: Option<u32>,
    /// 1 when exactly one punch is missing on a weekday workday.
    pub forgot_clocking: u32,
    /// 1 when a workday has no punches and no leave.
    pub absent: u32,
    /// Net worked hours.
    pub worked_hours: Decimal,
    /// Leave status for the day.
    pub leave: LeaveStatus,
    /// Leave days booked for the day.
    pub leave_days: Decimal,
    /// Meal allowance units granted.
    pub meal_units: u32,
    /// Overtime units earned that day.
    pub overtime_units: Decimal,
    /// Manual overtime minutes, or `-`.
    #[serde(with = "sentinel")]
    pub manual_ot_minutes: Option<u32>,
}

impl DailyRecord {
    /// Rendering hint for the row.
    pub fn highlight(&self) -> Option<Highlight> {
        (self.day_type == DayType::PublicHoliday).then_some(Highlight::PublicHoliday)
    }
}

/// Rendering hint attached to report rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// Weekly summary row.
    Summary,
    /// Public holiday row.
    PublicHoliday,
}

/// Weekly summary pseudo-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// `Summary up to YYYY-MM-DD`.
    pub label: String,
    /// Date of the record that closed the week.
    pub through: NaiveDate,
    /// Totals for the week.
    pub totals: WeeklyCounters,
}

impl WeeklySummary {
    /// Builds the summary closing on `through`.
    pub fn new(through: NaiveDate, totals: WeeklyCounters) -> Self {
        Self {
            label: format!("Summary up to {}", through.format("%Y-%m-%d")),
            through,
            totals,
        }
    }
}

/// One row of an employee's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportRow {
    /// An enriched daily record.
    Day {
        /// The record.
        #[serde(flatten)]
        record: DailyRecord,
        /// Rendering hint.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        highlight: Option<Highlight>,
    },
    /// A weekly summary.
    Summary {
        /// The summary.
        #[serde(flatten)]
        summary: WeeklySummary,
        /// Rendering hint.
        highlight: Highlight,
    },
}

impl ReportRow {
    /// Wraps a daily record.
    pub fn day(record: DailyRecord) -> Self {
        let highlight = record.highlight();
        ReportRow::Day { record, highlight }
    }

    /// Wraps a weekly summary.
    pub fn summary(summary: WeeklySummary) -> Self {
        ReportRow::Summary {
            summary,
            highlight: Highlight::Summary,
        }
    }

    /// Returns true for weekly summary rows.
    pub fn is_summary(&self) -> bool {
        matches!(self, ReportRow::Summary { .. })
    }
}

/// Everything produced for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// The employee ID.
    pub employee_id: String,
    /// The employee's name, empty when unknown.
    pub name: String,
    /// The employee's shift code, if known.
    pub shift_code: Option<String>,
    /// Daily records interleaved with weekly summaries, in date order.
    pub rows: Vec<ReportRow>,
    /// Finalized monthly counters.
    pub monthly: MonthlySummary,
    /// Diagnostics raised while processing this employee.
    pub diagnostics: Vec<Diagnostic>,
}

/// All employees of one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentReport {
    /// Department name.
    pub department: String,
    /// Employee reports in grouping order.
    pub employees: Vec<EmployeeReport>,
}

/// One row of the company-wide master report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterRow {
    /// Employment type label.
    pub employee_type: Option<String>,
    /// Employee ID.
    pub employee_id: String,
    /// Employee name.
    pub name: String,
    /// Department.
    pub department: String,
    /// Shift code.
    pub shift: String,
    /// On-board date.
    pub on_board_date: Option<NaiveDate>,
    /// Leaving date.
    pub leave_date: Option<NaiveDate>,
    /// Overtime units at 1.5x.
    pub ot_1_5: Decimal,
    /// Overtime units at 2.0x.
    pub ot_2_0: Decimal,
    /// Overtime units at 3.0x.
    pub ot_3_0: Decimal,
    /// Manual overtime hours.
    pub manual_ot_hours: Decimal,
    /// Absent days.
    pub absent: u32,
    /// Meal allowance units.
    pub meal_units: u32,
    /// Leave days.
    pub leave_days: Decimal,
    /// Overtime days that cannot be approved.
    pub cannot_ot: u32,
    /// Late minutes.
    pub late_minutes: u32,
    /// Early-leave minutes.
    pub early_minutes: u32,
    /// 1.5x bucket plus manual overtime hours.
    pub final_ot_1_5: Decimal,
}

/// The complete output of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was produced.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the run.
    pub engine_version: String,
    /// Department reports in ascending department order.
    pub departments: Vec<DepartmentReport>,
    /// Master report rows in processing order.
    pub master: Vec<MasterRow>,
}

impl RunReport {
    /// Iterates every employee report across departments.
    pub fn employees(&self) -> impl Iterator<Item = &EmployeeReport> {
        self.departments.iter().flat_map(|d| d.employees.iter())
    }
}
