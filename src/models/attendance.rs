//! Attendance rows and punch parsing.
//!
//! Raw rows come straight from the Attendance table with punches as text.
//! [`RawAttendance::into_record`] turns them into typed
//! [`AttendanceRecord`]s, degrading unreadable punches to "missing".

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::Diagnostic;

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// One row of the Attendance table as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttendance {
    /// The employee who punched.
    #[serde(alias = "Employee ID")]
    pub employee_id: String,
    /// The calendar date of the punches.
    #[serde(alias = "Date")]
    pub date: NaiveDate,
    /// Weekday label such as `Mon.` or `Sun.`.
    #[serde(default, alias = "Day")]
    pub day: Option<String>,
    /// Clock-in time as text.
    #[serde(default, alias = "Clock-in")]
    pub clock_in: Option<String>,
    /// Clock-out time as text.
    #[serde(default, alias = "Clock-out")]
    pub clock_out: Option<String>,
    /// Department column of the attendance export, when present.
    #[serde(default, alias = "Company / Department")]
    pub department: Option<String>,
}

/// Outcome of reading one punch cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Punch {
    /// A readable time of day.
    At(NaiveTime),
    /// Empty cell or explicit `-`.
    Missing,
    /// Text that is not a time; carries the raw value.
    Malformed(String),
}

impl Punch {
    /// Reads a punch cell.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::Punch;
    /// use chrono::NaiveTime;
    ///
    /// assert_eq!(Punch::parse(Some("07:45")), Punch::At(NaiveTime::from_hms_opt(7, 45, 0).unwrap()));
    /// assert_eq!(Punch::parse(Some("-")), Punch::Missing);
    /// assert_eq!(Punch::parse(None), Punch::Missing);
    /// assert_eq!(Punch::parse(Some("late")), Punch::Malformed("late".to_string()));
    /// ```
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(value) = raw.map(str::trim) else {
            return Punch::Missing;
        };

        if value.is_empty()
            || value == "-"
            || value.eq_ignore_ascii_case("nat")
            || value.eq_ignore_ascii_case("nan")
        {
            return Punch::Missing;
        }

        let time = TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                    .map(|dt| dt.time())
            });

        match time {
            Some(time) => Punch::At(time),
            None => Punch::Malformed(value.to_string()),
        }
    }

    /// The time of day, if readable.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Punch::At(time) => Some(*time),
            _ => None,
        }
    }
}

/// Parses a weekday label such as `Sun.`, `sat` or `Friday`.
pub fn parse_weekday_label(label: &str) -> Option<Weekday> {
    label.trim().trim_end_matches('.').parse::<Weekday>().ok()
}

/// One employee on one calendar date, with typed punches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The employee who punched.
    pub employee_id: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// The weekday, from the row's label or else derived from the date.
    pub weekday: Weekday,
    /// Clock-in time, if present and readable.
    pub clock_in: Option<NaiveTime>,
    /// Clock-out time, if present and readable.
    pub clock_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Returns true when both punches are present.
    pub fn has_both_punches(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_some()
    }

    /// Returns true when neither punch is present.
    pub fn has_no_punches(&self) -> bool {
        self.clock_in.is_none() && self.clock_out.is_none()
    }

    /// Returns true when exactly one punch is present.
    pub fn has_single_punch(&self) -> bool {
        self.clock_in.is_some() != self.clock_out.is_some()
    }
}

impl RawAttendance {
    /// Converts the row into a typed record.
    ///
    /// Unreadable punches become missing punches, each with a
    /// `MALFORMED_PUNCH` diagnostic.
    pub fn into_record(self) -> (AttendanceRecord, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();

        let weekday = self
            .day
            .as_deref()
            .and_then(parse_weekday_label)
            .unwrap_or_else(|| self.date.weekday());

        let mut read = |field: &str, raw: Option<&str>| match Punch::parse(raw) {
            Punch::Malformed(value) => {
                diagnostics.push(Diagnostic::malformed_punch(
                    &self.employee_id,
                    self.date,
                    field,
                    &value,
                ));
                None
            }
            punch => punch.time(),
        };

        let clock_in = read("clock-in", self.clock_in.as_deref());
        let clock_out = read("clock-out", self.clock_out.as_deref());

        let record = AttendanceRecord {
            employee_id: self.employee_id,
            date: self.date,
            weekday,
            clock_in,
            clock_out,
        };

        (record, diagnostics)
    }
}
