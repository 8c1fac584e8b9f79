//! Leave, meal allowance and attendance flag resolution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RuleThresholds;
use crate::models::{AttendanceRecord, DayType, LeaveStatus, MonthlyCounters};
use crate::store::ReferenceData;

/// Leave outcome for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveResolution {
    /// Leave status for the day.
    pub status: LeaveStatus,
    /// Leave days booked, zero without a matching entry.
    pub days: Decimal,
}

/// Resolves leave for one record.
///
/// A leave entry matches only when it starts on the record's date. An
/// unmatched `OT` day that is missing a punch, or that ends before the
/// reference end, becomes `Cannot OT` and is counted in `counters`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::resolve_leave;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::{AttendanceRecord, DayType, LeaveStatus, MonthlyCounters};
/// use attendance_engine::store::ReferenceData;
/// use chrono::{NaiveDate, NaiveTime, Weekday};
///
/// let config = EngineConfig::standard();
/// let store = ReferenceData::default();
/// let record = AttendanceRecord {
///     employee_id: "E001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     weekday: Weekday::Sat,
///     clock_in: NaiveTime::from_hms_opt(8, 0, 0),
///     clock_out: NaiveTime::from_hms_opt(12, 0, 0),
/// };
/// let mut counters = MonthlyCounters::default();
///
/// let leave = resolve_leave(&record, &DayType::Overtime, &store, config.rules(), &mut counters);
/// assert_eq!(leave.status, LeaveStatus::CannotOt);
/// assert_eq!(counters.cannot_ot, 1);
/// ```
pub fn resolve_leave(
    record: &AttendanceRecord,
    day_type: &DayType,
    store: &ReferenceData,
    rules: &RuleThresholds,
    counters: &mut MonthlyCounters,
) -> LeaveResolution {
    if let Some(entry) = store.leave_starting(&record.employee_id, record.date) {
        return LeaveResolution {
            status: LeaveStatus::OnLeave(entry.leave_type.clone()),
            days: entry.days,
        };
    }

    let left_early = record
        .clock_out
        .is_some_and(|clock_out| clock_out < rules.reference_end);
    if *day_type == DayType::Overtime && (!record.has_both_punches() || left_early) {
        debug!(
            employee_id = %record.employee_id,
            date = %record.date,
            "Overtime day cannot be approved"
        );
        counters.credit_cannot_ot();
        return LeaveResolution {
            status: LeaveStatus::CannotOt,
            days: Decimal::ZERO,
        };
    }

    LeaveResolution {
        status: LeaveStatus::NotOnLeave,
        days: Decimal::ZERO,
    }
}

/// Resolves the meal allowance for one record and credits `counters`.
///
/// Granted only on a punctual, fully punched `WORK` day that ends at or
/// after the reference end and has no meal exception on file.
pub fn resolve_meal(
    record: &AttendanceRecord,
    day_type: &DayType,
    late_minutes: Option<u32>,
    store: &ReferenceData,
    rules: &RuleThresholds,
    counters: &mut MonthlyCounters,
) -> u32 {
    let stayed = record
        .clock_out
        .is_some_and(|clock_out| clock_out >= rules.reference_end);

    let granted = *day_type == DayType::Work
        && record.has_both_punches()
        && late_minutes.is_none()
        && stayed
        && !store.has_meal_exception(&record.employee_id, record.date);

    if !granted {
        return 0;
    }
    counters.credit_meal(rules.meal_units);
    rules.meal_units
}

/// 1 when a weekday `WORK` record is missing exactly one punch.
pub fn forgot_clocking(record: &AttendanceRecord, day_type: &DayType) -> u32 {
    let weekend = matches!(record.weekday, chrono::Weekday::Sat | chrono::Weekday::Sun);
    u32::from(*day_type == DayType::Work && record.has_single_punch() && !weekend)
}

/// 1 when a `WORK` record has no punches and no leave covers it.
pub fn absent(record: &AttendanceRecord, day_type: &DayType, leave: &LeaveStatus) -> u32 {
    u32::from(
        *day_type == DayType::Work && record.has_no_punches() && *leave == LeaveStatus::NotOnLeave,
    )
}

/// Manual overtime minutes recorded for the record's employee and date.
pub fn manual_ot(record: &AttendanceRecord, store: &ReferenceData) -> Option<u32> {
    store.manual_ot_minutes(&record.employee_id, record.date)
}
