//! End-to-end processing of one run.
//!
//! Attendance rows are grouped by department, then by employee, both in
//! ascending key order. Each employee's records are sorted by date and
//! enriched one by one against a fresh set of monthly counters, then
//! handed to the [`aggregate`] step.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{ConfigLoader, ShiftRule, normalize_shift_code};
use crate::models::{
    AttendanceRecord, DailyRecord, DepartmentReport, Diagnostic, Employee, EmployeeReport,
    MasterRow, MonthlyCounters, MonthlySummary, RawAttendance, RunReport,
};
use crate::store::{ReferenceData, ReferenceTables};

use super::{
    absent, aggregate, classify, compute_hours, compute_overtime, forgot_clocking, manual_ot,
    resolve_leave, resolve_meal,
};

/// Department used when neither the attendance row nor the employee names one.
pub const UNASSIGNED_DEPARTMENT: &str = "UNASSIGNED";

type DepartmentGroups = BTreeMap<String, BTreeMap<String, Vec<RawAttendance>>>;

/// Runs the rule engine over a complete set of reference tables.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::run;
/// use attendance_engine::config::{ConfigLoader, EngineConfig};
/// use attendance_engine::store::ReferenceTables;
///
/// let loader = ConfigLoader::from_config(EngineConfig::standard());
/// let report = run(&loader, ReferenceTables::default());
/// assert!(report.departments.is_empty());
/// assert!(report.master.is_empty());
/// ```
pub fn run(config: &ConfigLoader, tables: ReferenceTables) -> RunReport {
    let start_time = Instant::now();
    let run_id = Uuid::new_v4();
    let (store, attendance) = tables.into_parts();
    let groups = group_attendance(attendance, &store);

    info!(run_id = %run_id, departments = groups.len(), "Starting attendance run");

    let mut departments = Vec::with_capacity(groups.len());
    let mut master = Vec::new();

    for (department, employees) in groups {
        info!(department = %department, employees = employees.len(), "Processing department");

        let mut reports = Vec::with_capacity(employees.len());
        for (employee_id, rows) in employees {
            let report = process_employee(config, &store, &employee_id, rows);
            if let Some(employee) = store.employee(&employee_id) {
                master.push(master_row(employee, &department, &report.monthly));
            }
            reports.push(report);
        }

        departments.push(DepartmentReport {
            department,
            employees: reports,
        });
    }

    info!(
        run_id = %run_id,
        master_rows = master.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Attendance run completed"
    );

    RunReport {
        run_id,
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        departments,
        master,
    }
}

/// Processes one employee's attendance rows.
///
/// Diagnostics for an unknown employee or shift are raised once, not per
/// record.
pub fn process_employee(
    config: &ConfigLoader,
    store: &ReferenceData,
    employee_id: &str,
    rows: Vec<RawAttendance>,
) -> EmployeeReport {
    let mut diagnostics = Vec::new();
    let employee = store.employee(employee_id);

    let shift_code = employee.map(|e| normalize_shift_code(&e.shift));
    let shift = match (employee, shift_code.as_deref()) {
        (Some(_), Some(code)) => match config.get_shift(code) {
            Ok(rule) => Some(rule),
            Err(err) => {
                warn!(employee_id = %employee_id, error = %err, "Cannot determine shift rule");
                diagnostics.push(Diagnostic::shift_not_found(employee_id, code));
                None
            }
        },
        _ => {
            warn!(employee_id = %employee_id, "Employee ID not found in the Employee table");
            diagnostics.push(Diagnostic::employee_not_found(employee_id));
            None
        }
    };

    let mut records: Vec<AttendanceRecord> = Vec::with_capacity(rows.len());
    for raw in rows {
        let (record, problems) = raw.into_record();
        for problem in &problems {
            warn!(
                employee_id = %employee_id,
                date = %record.date,
                message = %problem.message,
                "Malformed punch"
            );
        }
        diagnostics.extend(problems);
        records.push(record);
    }
    records.sort_by_key(|record| record.date);

    let mut monthly = MonthlyCounters::default();
    let enriched: Vec<DailyRecord> = records
        .iter()
        .map(|record| enrich_record(record, shift_code.as_deref(), shift, config, store, &mut monthly))
        .collect();

    let (rows, monthly) = aggregate(enriched, monthly);

    info!(
        employee_id = %employee_id,
        days = records.len(),
        overtime_hours = %monthly.counters.overtime_hours,
        diagnostics = diagnostics.len(),
        "Employee processed"
    );

    EmployeeReport {
        employee_id: employee_id.to_string(),
        name: employee.map(|e| e.name.clone()).unwrap_or_default(),
        shift_code,
        rows,
        monthly,
        diagnostics,
    }
}

/// Runs every per-record derivation on one attendance record.
///
/// Overtime buckets, meal units and the cannot-OT count are credited to
/// `counters` as a side effect.
pub fn enrich_record(
    record: &AttendanceRecord,
    shift_code: Option<&str>,
    shift: Option<&ShiftRule>,
    config: &ConfigLoader,
    store: &ReferenceData,
    counters: &mut MonthlyCounters,
) -> DailyRecord {
    let rules = config.config().rules();

    let day_type = classify(record, shift, store.holidays());
    let hours = compute_hours(record, &day_type, shift, rules);
    let overtime_units =
        compute_overtime(record, &day_type, hours.worked_hours, shift, rules, counters);
    let leave = resolve_leave(record, &day_type, store, rules, counters);
    let meal_units = resolve_meal(record, &day_type, hours.late_minutes, store, rules, counters);

    debug!(
        employee_id = %record.employee_id,
        date = %record.date,
        day_type = %day_type,
        worked_hours = %hours.worked_hours,
        overtime_units = %overtime_units,
        "Record enriched"
    );

    DailyRecord {
        employee_id: record.employee_id.clone(),
        date: record.date,
        weekday: record.weekday,
        forgot_clocking: forgot_clocking(record, &day_type),
        absent: absent(record, &day_type, &leave.status),
        day_type,
        clock_in: record.clock_in,
        clock_out: record.clock_out,
        shift_code: shift_code.map(str::to_string),
        late_minutes: hours.late_minutes,
        early_minutes: hours.early_minutes,
        worked_hours: hours.worked_hours,
        leave: leave.status,
        leave_days: leave.days,
        meal_units,
        overtime_units,
        manual_ot_minutes: manual_ot(record, store),
    }
}

fn group_attendance(attendance: Vec<RawAttendance>, store: &ReferenceData) -> DepartmentGroups {
    let mut groups = DepartmentGroups::new();
    for row in attendance {
        let department = department_of(&row, store);
        groups
            .entry(department)
            .or_default()
            .entry(row.employee_id.clone())
            .or_default()
            .push(row);
    }
    groups
}

fn department_of(row: &RawAttendance, store: &ReferenceData) -> String {
    let non_blank = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    };

    row.department
        .as_deref()
        .and_then(non_blank)
        .or_else(|| {
            store
                .employee(&row.employee_id)
                .and_then(|employee| non_blank(&employee.department))
        })
        .unwrap_or_else(|| UNASSIGNED_DEPARTMENT.to_string())
}

fn master_row(employee: &Employee, department: &str, monthly: &MonthlySummary) -> MasterRow {
    let counters = &monthly.counters;
    MasterRow {
        employee_type: employee.employee_type.clone(),
        employee_id: employee.id.clone(),
        name: employee.name.clone(),
        department: if employee.department.trim().is_empty() {
            department.to_string()
        } else {
            employee.department.clone()
        },
        shift: employee.shift.clone(),
        on_board_date: employee.on_board_date,
        leave_date: employee.leave_date,
        ot_1_5: counters.ot_1_5,
        ot_2_0: counters.ot_2_0,
        ot_3_0: counters.ot_3_0,
        manual_ot_hours: monthly.manual_ot_hours,
        absent: counters.absent,
        meal_units: counters.meal_units,
        leave_days: counters.leave_days,
        cannot_ot: counters.cannot_ot,
        late_minutes: counters.late_minutes,
        early_minutes: counters.early_minutes,
        final_ot_1_5: monthly.final_ot_1_5,
    }
}
