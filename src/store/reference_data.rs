//! Indexed, read-only reference tables.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    Employee, HolidayEntry, LeaveEntry, ManualOtEntry, MealException, RawAttendance,
};

/// The six input record sets of one run.
///
/// Every table is required; a payload without one of them is rejected
/// before any processing starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTables {
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

impl ReferenceTables {
    /// Indexes the reference tables and hands back the attendance rows.
    pub fn into_parts(self) -> (ReferenceData, Vec<RawAttendance>) {
        let data = ReferenceData::new(
            self.employees,
            self.leave,
            self.holidays,
            self.meals,
            self.manual_ot,
        );
        (data, self.attendance)
    }
}

type EmployeeDate = (String, NaiveDate);

/// Holiday calendar split into personal overrides and the general calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    personal: HashMap<EmployeeDate, String>,
    general: HashMap<NaiveDate, String>,
}

impl HolidayCalendar {
    /// Builds the calendar. The first entry for a key wins.
    pub fn new(entries: Vec<HolidayEntry>) -> Self {
        let mut calendar = Self::default();
        for entry in entries {
            match entry.employee_id.filter(|id| !id.trim().is_empty()) {
                Some(employee_id) => {
                    calendar
                        .personal
                        .entry((employee_id, entry.date))
                        .or_insert(entry.festival_name);
                }
                None => {
                    calendar
                        .general
                        .entry(entry.date)
                        .or_insert(entry.festival_name);
                }
            }
        }
        calendar
    }

    /// Festival name of an employee-specific holiday.
    pub fn personal(&self, employee_id: &str, date: NaiveDate) -> Option<&str> {
        self.personal
            .get(&(employee_id.to_string(), date))
            .map(String::as_str)
    }

    /// Festival name of a general holiday.
    pub fn general(&self, date: NaiveDate) -> Option<&str> {
        self.general.get(&date).map(String::as_str)
    }
}

/// Reference tables indexed for O(1) lookups.
///
/// Built once per run and never mutated afterwards. Where a table holds
/// several rows for the same key, the first row wins.
///
/// # Example
///
/// ```
/// use attendance_engine::models::MealException;
/// use attendance_engine::store::ReferenceData;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let data = ReferenceData::new(
///     vec![],
///     vec![],
///     vec![],
///     vec![MealException { employee_id: "E001".to_string(), date }],
///     vec![],
/// );
/// assert!(data.has_meal_exception("E001", date));
/// assert!(!data.has_meal_exception("E002", date));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    employees: HashMap<String, Employee>,
    leave: HashMap<EmployeeDate, LeaveEntry>,
    holidays: HolidayCalendar,
    meals: HashSet<EmployeeDate>,
    manual_ot: HashMap<EmployeeDate, u32>,
}

impl ReferenceData {
    /// Indexes the reference tables.
    pub fn new(
        employees: Vec<Employee>,
        leave: Vec<LeaveEntry>,
        holidays: Vec<HolidayEntry>,
        meals: Vec<MealException>,
        manual_ot: Vec<ManualOtEntry>,
    ) -> Self {
        let mut employee_index = HashMap::new();
        for employee in employees {
            employee_index
                .entry(employee.id.clone())
                .or_insert(employee);
        }

        let mut leave_index = HashMap::new();
        for entry in leave {
            leave_index
                .entry((entry.employee_id.clone(), entry.start_date))
                .or_insert(entry);
        }

        let meals = meals
            .into_iter()
            .map(|meal| (meal.employee_id, meal.date))
            .collect();

        let mut manual_ot_index = HashMap::new();
        for entry in manual_ot {
            manual_ot_index
                .entry((entry.employee_id, entry.date))
                .or_insert(entry.minutes);
        }

        Self {
            employees: employee_index,
            leave: leave_index,
            holidays: HolidayCalendar::new(holidays),
            meals,
            manual_ot: manual_ot_index,
        }
    }

    /// Looks up an employee.
    pub fn employee(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.get(employee_id)
    }

    /// Leave entry starting exactly on `date`.
    pub fn leave_starting(&self, employee_id: &str, date: NaiveDate) -> Option<&LeaveEntry> {
        self.leave.get(&(employee_id.to_string(), date))
    }

    /// The holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Returns true when the meal allowance for this employee-date is already settled.
    pub fn has_meal_exception(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.meals.contains(&(employee_id.to_string(), date))
    }

    /// Manual overtime minutes recorded for this employee-date.
    pub fn manual_ot_minutes(&self, employee_id: &str, date: NaiveDate) -> Option<u32> {
        self.manual_ot.get(&(employee_id.to_string(), date)).copied()
    }
}
